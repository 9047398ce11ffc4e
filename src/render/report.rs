// src/render/report.rs
//! Rendering of structured match reports

use crate::types::MatchReport;
use crate::utils::escape_html;

const RING_RADIUS: f64 = 54.0;
const BAR_CELLS: usize = 20;

/// Circular progress indicator geometry for an SVG stroke ring
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreRing {
    pub fraction: f64,
    pub radius: f64,
}

impl ScoreRing {
    pub fn for_report(report: &MatchReport) -> Self {
        Self {
            fraction: report.score_fraction(),
            radius: RING_RADIUS,
        }
    }

    pub fn circumference(&self) -> f64 {
        2.0 * std::f64::consts::PI * self.radius
    }

    /// Unfilled part of the stroke
    pub fn dash_offset(&self) -> f64 {
        self.circumference() * (1.0 - self.fraction)
    }

    pub fn to_svg(&self, label: u32) -> String {
        let size = (self.radius + 6.0) * 2.0;
        let center = size / 2.0;
        format!(
            concat!(
                "<svg class=\"score-ring\" width=\"{size}\" height=\"{size}\" viewBox=\"0 0 {size} {size}\">",
                "<circle class=\"score-ring-track\" cx=\"{c}\" cy=\"{c}\" r=\"{r}\" fill=\"none\" stroke-width=\"10\"/>",
                "<circle class=\"score-ring-fill\" cx=\"{c}\" cy=\"{c}\" r=\"{r}\" fill=\"none\" stroke-width=\"10\" ",
                "stroke-dasharray=\"{circ:.2}\" stroke-dashoffset=\"{offset:.2}\" transform=\"rotate(-90 {c} {c})\"/>",
                "<text x=\"{c}\" y=\"{c}\" text-anchor=\"middle\" dominant-baseline=\"central\">{label}%</text>",
                "</svg>"
            ),
            size = size,
            c = center,
            r = self.radius,
            circ = self.circumference(),
            offset = self.dash_offset(),
            label = label,
        )
    }
}

fn html_list(title: &str, items: &[String]) -> String {
    let mut section = format!("<div><h3>{}</h3>", title);
    if !items.is_empty() {
        section.push_str("<ul>");
        for item in items {
            section.push_str(&format!("<li>{}</li>", escape_html(item)));
        }
        section.push_str("</ul>");
    }
    section.push_str("</div>");
    section
}

pub fn report_to_html(report: &MatchReport) -> String {
    let ring = ScoreRing::for_report(report);
    [
        "<section class=\"analysis-result\">".to_string(),
        ring.to_svg(report.match_score),
        format!("<h2>Match Score: {}%</h2>", report.match_score),
        html_list("Strengths", &report.strengths),
        html_list("Missing Skills", &report.missing_skills),
        format!("<p>{}</p>", escape_html(&report.summary)),
        "</section>".to_string(),
    ]
    .join("\n")
}

fn progress_bar(fraction: f64) -> String {
    let filled = (fraction * BAR_CELLS as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_CELLS - filled))
}

pub fn report_to_text(report: &MatchReport) -> String {
    let mut lines = vec![
        format!("Match Score: {}%", report.match_score),
        progress_bar(report.score_fraction()),
        String::new(),
        "Strengths".to_string(),
    ];
    lines.extend(report.strengths.iter().map(|s| format!("  • {}", s)));
    lines.push(String::new());
    lines.push("Missing Skills".to_string());
    lines.extend(report.missing_skills.iter().map(|s| format!("  • {}", s)));
    if !report.summary.is_empty() {
        lines.push(String::new());
        lines.push(report.summary.clone());
    }
    lines.join("\n")
}
