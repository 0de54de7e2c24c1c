use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Configuration for cvtex
///
/// Every table is optional in the TOML file; missing keys fall back to the
/// defaults below, which reproduce the conventions of the Penn State
/// dossier the tool was written against.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub paths: PathsConfig,
    pub person: PersonConfig,
    pub style: StyleConfig,
    pub courses: CourseCatalogue,
    pub positions: PositionsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Word dossier read by `build` and `clean`
    pub dossier: PathBuf,
    /// LaTeX file written by `build`
    pub template_output: PathBuf,
    /// pandoc-generated CV read by `clean`
    pub latex_input: PathBuf,
    /// Cleaned CV written by `clean`
    pub latex_output: PathBuf,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonConfig {
    /// Name printed in the page header. Taken from the dossier profile table when unset.
    pub display_name: Option<String>,
    /// Literal author spellings to bold in publication lists, e.g. `"Doe, J. Q."`.
    /// Derived from the profile table when empty.
    pub author_patterns: Vec<String>,
    /// Contact block that pandoc leaves below `\begin{document}`; removed by `clean`.
    pub contact_block: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// LaTeX package inserted before `\author{`
    pub package: String,
    pub subsection_color: String,
    pub subsubsection_color: String,
    /// Base font size for `\documentclass[..]{article}`; left alone when unset
    pub font_size: Option<u8>,
}

/// Course numbers and their display labels
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CourseCatalogue {
    pub prefix: String,
    pub titles: BTreeMap<String, String>,
    pub excluded: BTreeSet<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PositionsConfig {
    /// Employer substrings that mark a position as government work
    pub government_keywords: Vec<String>,
}

impl Default for PathsConfig {
    fn default() -> Self {
        PathsConfig {
            dossier: PathBuf::from("CV_Data.docx"),
            template_output: PathBuf::from("output.tex"),
            latex_input: PathBuf::from("main.tex"),
            latex_output: PathBuf::from("main_edited.tex"),
        }
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        StyleConfig {
            package: "mystyle".to_string(),
            subsection_color: "black".to_string(),
            subsubsection_color: "black".to_string(),
            font_size: None,
        }
    }
}

impl Default for CourseCatalogue {
    fn default() -> Self {
        let titles = [
            ("330", "ME 330 (Computational Tools for Engineers)"),
            ("360", "ME 360 (Machine Design)"),
            ("461", "ME 461 (Introduction to Finite Element Analysis)"),
            ("563", "ME 563 (Nonlinear Finite Element Analysis)"),
            ("497", "Development course for Computational Tools for Engineers"),
            ("440", "Capstone Design"),
        ]
        .into_iter()
        .map(|(num, title)| (num.to_string(), title.to_string()))
        .collect();

        let excluded = ["600", "596", "496", "494", "610"]
            .into_iter()
            .map(String::from)
            .collect();

        CourseCatalogue {
            prefix: "ME".to_string(),
            titles,
            excluded,
        }
    }
}

impl Default for PositionsConfig {
    fn default() -> Self {
        PositionsConfig {
            government_keywords: vec!["U.S. Army Research Laboratory".to_string()],
        }
    }
}

impl CourseCatalogue {
    /// Display label for a course number; unmapped numbers print as `ME999`.
    pub fn label(&self, number: &str) -> String {
        self.titles
            .get(number)
            .cloned()
            .unwrap_or_else(|| format!("{}{}", self.prefix, number))
    }

    pub fn is_excluded(&self, number: &str) -> bool {
        self.excluded.contains(number)
    }
}

impl Config {
    /// Load configuration from an explicit path, or from the user config
    /// directory when no path is given.
    ///
    /// An explicit path must exist. The default location is optional and
    /// falls back to `Config::default()`.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::read_from(path),
            None => match Self::get_config_path() {
                Some(config_path) if config_path.exists() => Self::read_from(&config_path),
                _ => Ok(Config::default()),
            },
        }
    }

    fn read_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Write this configuration as pretty TOML, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Get the path to the default config file
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("cvtex").join("config.toml"))
    }

    /// Initialize the default config file and return where it was written
    pub fn init_default() -> Result<PathBuf, ConfigError> {
        let path = Self::get_config_path().ok_or(ConfigError::NoConfigDir)?;
        Config::default().save_to(&path)?;
        Ok(path)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: Config = toml::from_str(
            r#"
            [style]
            font_size = 11

            [courses.titles]
            "101" = "ME 101 (Statics)"
            "#,
        )
        .expect("config should parse");

        assert_eq!(config.style.font_size, Some(11));
        assert_eq!(config.style.package, "mystyle");
        assert_eq!(config.courses.label("101"), "ME 101 (Statics)");
        // Replacing the table drops the default titles
        assert_eq!(config.courses.label("330"), "ME330");
        assert!(config.courses.is_excluded("600"));
    }

    #[test]
    fn test_default_course_labels() {
        let catalogue = CourseCatalogue::default();
        assert_eq!(
            catalogue.label("330"),
            "ME 330 (Computational Tools for Engineers)"
        );
        assert_eq!(catalogue.label("999"), "ME999");
        assert!(catalogue.is_excluded("494"));
        assert!(!catalogue.is_excluded("330"));
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.person.display_name = Some("Jane Q. Doe".to_string());
        config.save_to(&path).expect("save config");

        let loaded = Config::load(Some(&path)).expect("load config");
        assert_eq!(loaded.person.display_name.as_deref(), Some("Jane Q. Doe"));
        assert_eq!(loaded.paths.dossier, PathBuf::from("CV_Data.docx"));
    }

    #[test]
    fn test_missing_explicit_path_is_an_error() {
        let result = Config::load(Some(Path::new("/nonexistent/cvtex.toml")));
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }
}
