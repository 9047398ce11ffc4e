// src/render/mod.rs
//! Result rendering: structured reports, markdown-subset analyses, full pages

pub mod markdown;
pub mod page;
pub mod report;

pub use markdown::{markdown_to_html, markdown_to_text};
pub use page::wrap_document;
pub use report::{report_to_html, report_to_text, ScoreRing};

use crate::types::AnalysisResult;
use crate::utils::escape_html;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    Html,
    #[default]
    Text,
}

pub fn render_result(result: &AnalysisResult, format: OutputFormat) -> String {
    match (result, format) {
        (AnalysisResult::Structured(report), OutputFormat::Html) => report_to_html(report),
        (AnalysisResult::Structured(report), OutputFormat::Text) => report_to_text(report),
        (
            AnalysisResult::Markdown {
                analysis,
                resume_preview,
            },
            OutputFormat::Html,
        ) => {
            let mut html = markdown_to_html(analysis);
            if let Some(preview) = resume_preview {
                html.push_str(&format!(
                    "\n<details><summary>Resume preview</summary><pre>{}</pre></details>",
                    escape_html(preview)
                ));
            }
            html
        }
        (
            AnalysisResult::Markdown {
                analysis,
                resume_preview,
            },
            OutputFormat::Text,
        ) => {
            let mut text = markdown_to_text(analysis);
            if let Some(preview) = resume_preview {
                text.push_str("\n\nResume preview\n--------------\n");
                text.push_str(preview);
            }
            text
        }
    }
}
