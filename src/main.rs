use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use cvtex::{Config, OutputFormat, build_cv, clean_cv, load_dossier, summarize};

#[derive(Parser)]
#[command(name = "cvtex")]
#[command(version)]
#[command(about = "Build or clean up a LaTeX CV from a Word activity dossier", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file (defaults to the user config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// More logging (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log warnings and errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a LaTeX CV from the dossier
    Build {
        /// Dossier .docx file
        #[arg(short, long)]
        dossier: Option<PathBuf>,

        /// Where to write the .tex file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Clean up a LaTeX CV produced by pandoc
    Clean {
        /// pandoc-generated .tex file
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Dossier .docx file, used for the name and thesis titles
        #[arg(short, long)]
        dossier: Option<PathBuf>,

        /// Where to write the cleaned .tex file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show what the extractors find in a dossier
    Extract {
        /// Dossier .docx file
        #[arg(short, long)]
        dossier: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Manage the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Write the default config to the user config directory
    Init,
    /// Print the effective config
    Show,
}

fn init_logging(verbose: u8, quiet: bool) {
    let default_level = match (quiet, verbose) {
        (true, _) => "cvtex=warn",
        (false, 0) => "cvtex=info",
        (false, 1) => "cvtex=debug",
        (false, _) => "cvtex=trace",
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()))
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .without_time()
                .with_target(false),
        )
        .init();
}

fn write_output(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).with_context(|| format!("Failed to write {}", path.display()))?;
    info!(path = %path.display(), "written");
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let config = Config::load(cli.config.as_deref()).context("Failed to load config")?;
    let today = chrono::Local::now().date_naive();

    match cli.command {
        Commands::Build { dossier, output } => {
            let dossier_path = dossier.unwrap_or_else(|| config.paths.dossier.clone());
            let output = output.unwrap_or_else(|| config.paths.template_output.clone());

            let dossier = load_dossier(&dossier_path)
                .with_context(|| format!("Failed to read dossier {}", dossier_path.display()))?;
            let tex = build_cv(&dossier, &config, today);
            write_output(&output, &tex)?;
        }
        Commands::Clean {
            input,
            dossier,
            output,
        } => {
            let input = input.unwrap_or_else(|| config.paths.latex_input.clone());
            let output = output.unwrap_or_else(|| config.paths.latex_output.clone());

            let tex = fs::read_to_string(&input)
                .with_context(|| format!("Failed to read {}", input.display()))?;
            let dossier = match dossier {
                Some(path) => Some(
                    load_dossier(&path)
                        .with_context(|| format!("Failed to read dossier {}", path.display()))?,
                ),
                None => None,
            };

            let cleaned = clean_cv(&tex, dossier.as_ref(), &config, today);
            write_output(&output, &cleaned)?;
        }
        Commands::Extract { dossier, format } => {
            let dossier_path = dossier.unwrap_or_else(|| config.paths.dossier.clone());
            let dossier = load_dossier(&dossier_path)
                .with_context(|| format!("Failed to read dossier {}", dossier_path.display()))?;
            let summary = summarize(&dossier);

            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
                OutputFormat::Text => print!("{}", summary.to_text()),
            }
        }
        Commands::Config { action } => match action {
            ConfigAction::Init => {
                let path = Config::init_default().context("Failed to write default config")?;
                println!("Config written to {}", path.display());
            }
            ConfigAction::Show => print!("{}", config.to_toml()?),
        },
    }

    Ok(())
}
