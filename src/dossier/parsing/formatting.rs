//! Text extraction from docx-rs paragraphs and runs

/// Extract plain text from a paragraph, handling various child elements
pub(crate) fn extract_paragraph_text(para: &docx_rs::Paragraph) -> String {
    let mut text = String::new();
    push_children_text(&para.children, &mut text);
    text
}

fn push_children_text(children: &[docx_rs::ParagraphChild], text: &mut String) {
    for child in children {
        match child {
            docx_rs::ParagraphChild::Run(run) => {
                text.push_str(&extract_run_text(run));
            }
            docx_rs::ParagraphChild::Insert(insert) => {
                // Tracked insertions are part of the current text
                for child in &insert.children {
                    if let docx_rs::InsertChild::Run(run) = child {
                        text.push_str(&extract_run_text(run));
                    }
                }
            }
            docx_rs::ParagraphChild::Hyperlink(link) => {
                // DOIs and URLs are usually hyperlinked
                push_children_text(&link.children, text);
            }
            docx_rs::ParagraphChild::Delete(_) => {
                // Skip deletions (track changes)
            }
            _ => {}
        }
    }
}

/// Extract text from a run
pub(crate) fn extract_run_text(run: &docx_rs::Run) -> String {
    let mut text = String::new();

    for child in &run.children {
        match child {
            docx_rs::RunChild::Text(text_elem) => {
                text.push_str(&text_elem.text);
            }
            docx_rs::RunChild::Tab(_) => {
                text.push('\t');
            }
            docx_rs::RunChild::Break(_) => {
                text.push('\n');
            }
            _ => {}
        }
    }

    text
}

/// True when every run carrying visible text is bold.
///
/// A paragraph without visible text counts as bold, so blank cells in a
/// header row do not break header detection.
pub(crate) fn is_bold_paragraph(para: &docx_rs::Paragraph) -> bool {
    para.children.iter().all(|child| match child {
        docx_rs::ParagraphChild::Run(run) => {
            extract_run_text(run).trim().is_empty() || run.run_property.bold.is_some()
        }
        _ => true,
    })
}
