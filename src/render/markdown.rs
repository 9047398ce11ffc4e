// src/render/markdown.rs
//! Markdown-subset analysis text to HTML.
//!
//! The dialect has three markers: `**SCORE: n/100**`, `**Header**` lines and
//! `- item` lines. Everything else is plain text. Input is scanned line by
//! line into [`Block`]s, which are then rendered. Text is HTML-escaped. A line
//! passes through untouched only when it has exactly the shape this renderer
//! emits, so rendering the output again yields the same output.

use regex::Regex;
use std::sync::LazyLock;

use crate::utils::escape_html;

static SCORE_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\*\*SCORE:\s*(\d+)/100\*\*").expect("valid score pattern")
});
static HEADING_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\*\*([^*]+)\*\*$").expect("valid heading pattern"));
static INLINE_BOLD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*([^*]+)\*\*").expect("valid bold pattern"));

/// Escaped text with the inline tags [`inline_html`] produces
const INLINE_MARKUP: &str =
    r#"(?:[^<>]|<strong>[^<>]*</strong>|<span class="score-badge">Score: \d+/100</span>)*"#;

/// Whole lines as emitted by [`blocks_to_html`]
static RENDERED_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r#"^(?:<div class="score-badge">Score: \d+/100</div>|<h3>[^<>]*</h3>|<ul>(?:<li>{inline}</li>)+</ul>|<p>{inline}</p>)$"#,
        inline = INLINE_MARKUP
    ))
    .expect("valid markup pattern")
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Digits as written, so oversized numbers survive
    ScoreBadge(String),
    Heading(String),
    List(Vec<String>),
    Paragraph(String),
    /// Blank-line separation between two blocks
    Break,
    /// Already rendered markup, emitted verbatim
    Markup(String),
}

/// Line scanner. `list` is `Some` while inside a run of `- ` lines.
#[derive(Default)]
struct Scanner {
    blocks: Vec<Block>,
    list: Option<Vec<String>>,
    pending_break: bool,
}

impl Scanner {
    fn feed(&mut self, line: &str) {
        if line.trim().is_empty() {
            self.close_list();
            self.pending_break = !self.blocks.is_empty();
            return;
        }

        if let Some(item) = list_item(line) {
            if self.list.is_none() {
                self.emit_break();
            }
            self.list.get_or_insert_with(Vec::new).push(item.to_string());
            return;
        }

        self.close_list();
        self.emit_break();
        self.push_line(line.trim());
    }

    /// A non-item line: rendered markup, or text split around score markers
    fn push_line(&mut self, line: &str) {
        if RENDERED_LINE.is_match(line) {
            self.blocks.push(Block::Markup(line.to_string()));
            return;
        }

        let mut last = 0;
        for caps in SCORE_MARKER.captures_iter(line) {
            let Some(marker) = caps.get(0) else { continue };
            self.push_text(&line[last..marker.start()]);
            self.blocks.push(Block::ScoreBadge(caps[1].to_string()));
            last = marker.end();
        }
        self.push_text(&line[last..]);
    }

    fn push_text(&mut self, text: &str) {
        let text = text.trim();
        if text.is_empty() {
            return;
        }
        let block = match HEADING_LINE.captures(text) {
            Some(caps) => Block::Heading(caps[1].trim().to_string()),
            None => Block::Paragraph(text.to_string()),
        };
        self.blocks.push(block);
    }

    fn close_list(&mut self) {
        if let Some(items) = self.list.take() {
            self.blocks.push(Block::List(items));
        }
    }

    fn emit_break(&mut self) {
        if std::mem::take(&mut self.pending_break) {
            self.blocks.push(Block::Break);
        }
    }

    fn finish(mut self) -> Vec<Block> {
        self.close_list();
        self.blocks
    }
}

fn list_item(line: &str) -> Option<&str> {
    line.strip_prefix("- ").filter(|rest| !rest.trim().is_empty())
}

pub fn parse(input: &str) -> Vec<Block> {
    let mut scanner = Scanner::default();
    for line in input.lines() {
        scanner.feed(line);
    }
    scanner.finish()
}

fn inline_html(text: &str) -> String {
    let escaped = escape_html(text);
    let scored = SCORE_MARKER.replace_all(
        &escaped,
        "<span class=\"score-badge\">Score: $1/100</span>",
    );
    INLINE_BOLD
        .replace_all(&scored, "<strong>$1</strong>")
        .into_owned()
}

fn inline_text(text: &str) -> String {
    let scored = SCORE_MARKER.replace_all(text, "Score: $1/100");
    INLINE_BOLD.replace_all(&scored, "$1").into_owned()
}

pub fn blocks_to_html(blocks: &[Block]) -> String {
    blocks
        .iter()
        .map(|block| match block {
            Block::ScoreBadge(score) => {
                format!("<div class=\"score-badge\">Score: {}/100</div>", score)
            }
            Block::Heading(text) => format!("<h3>{}</h3>", escape_html(text)),
            Block::List(items) => {
                let items: String = items
                    .iter()
                    .map(|item| format!("<li>{}</li>", inline_html(item)))
                    .collect();
                format!("<ul>{}</ul>", items)
            }
            Block::Paragraph(text) => format!("<p>{}</p>", inline_html(text)),
            Block::Break => "<p></p>".to_string(),
            Block::Markup(markup) => markup.clone(),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn blocks_to_text(blocks: &[Block]) -> String {
    let mut lines = Vec::new();
    for block in blocks {
        match block {
            Block::ScoreBadge(score) => lines.push(format!("Score: {}/100", score)),
            Block::Heading(text) => {
                lines.push(text.clone());
                lines.push("-".repeat(text.chars().count()));
            }
            Block::List(items) => {
                lines.extend(items.iter().map(|item| format!("  • {}", inline_text(item))));
            }
            Block::Paragraph(text) => lines.push(inline_text(text)),
            Block::Break => lines.push(String::new()),
            Block::Markup(markup) => lines.push(markup.clone()),
        }
    }
    lines.join("\n")
}

pub fn markdown_to_html(input: &str) -> String {
    blocks_to_html(&parse(input))
}

pub fn markdown_to_text(input: &str) -> String {
    blocks_to_text(&parse(input))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "**SCORE: 82/100**\n**Strengths**\n- Clear communication\n- Strong leadership";

    fn badge(score: &str) -> Block {
        Block::ScoreBadge(score.to_string())
    }

    #[test]
    fn test_sample_renders_badge_heading_and_single_list() {
        let html = markdown_to_html(SAMPLE);

        assert!(html.contains("<div class=\"score-badge\">Score: 82/100</div>"));
        assert_eq!(html.matches("<h3>Strengths</h3>").count(), 1);
        assert_eq!(html.matches("<ul>").count(), 1);
        assert_eq!(html.matches("</ul>").count(), 1);
        assert!(html.contains(
            "<ul><li>Clear communication</li><li>Strong leadership</li></ul>"
        ));
        assert!(!html.contains("<ul></ul>"));
    }

    #[test]
    fn test_sample_blocks() {
        assert_eq!(
            parse(SAMPLE),
            vec![
                badge("82"),
                Block::Heading("Strengths".to_string()),
                Block::List(vec![
                    "Clear communication".to_string(),
                    "Strong leadership".to_string()
                ]),
            ]
        );
    }

    #[test]
    fn test_score_marker_is_case_insensitive_with_spacing() {
        assert_eq!(parse("**score:   7/100**"), vec![badge("7")]);
        assert_eq!(
            parse("intro\n**Score:95/100**"),
            vec![Block::Paragraph("intro".to_string()), badge("95")]
        );
    }

    #[test]
    fn test_score_marker_with_surrounding_text() {
        assert_eq!(
            parse("**SCORE: 75/100** - solid fit\n- Rust"),
            vec![
                badge("75"),
                Block::Paragraph("- solid fit".to_string()),
                Block::List(vec!["Rust".to_string()]),
            ]
        );
        assert_eq!(
            markdown_to_html("Overall: **SCORE: 75/100** - solid fit"),
            "<p>Overall:</p>\n<div class=\"score-badge\">Score: 75/100</div>\n<p>- solid fit</p>"
        );
    }

    #[test]
    fn test_score_marker_inside_list_item() {
        assert_eq!(
            markdown_to_html("- Skills **SCORE: 40/100**"),
            "<ul><li>Skills <span class=\"score-badge\">Score: 40/100</span></li></ul>"
        );
        assert_eq!(markdown_to_text("- Skills **SCORE: 40/100**"), "  • Skills Score: 40/100");
    }

    #[test]
    fn test_oversized_score_keeps_badge() {
        assert_eq!(parse("**SCORE: 99999999999/100**"), vec![badge("99999999999")]);
        assert_eq!(
            markdown_to_html("**SCORE: 99999999999/100**"),
            "<div class=\"score-badge\">Score: 99999999999/100</div>"
        );
    }

    #[test]
    fn test_full_analysis_with_paragraph_breaks() {
        let input = "**SCORE: 64/100**\n\n**STRONG SUITES:**\n- Python\n- SQL\n\n**WEAK AREAS:**\n- Kubernetes\n";
        let html = markdown_to_html(input);
        assert_eq!(
            html,
            "<div class=\"score-badge\">Score: 64/100</div>\n<p></p>\n<h3>STRONG SUITES:</h3>\n<ul><li>Python</li><li>SQL</li></ul>\n<p></p>\n<h3>WEAK AREAS:</h3>\n<ul><li>Kubernetes</li></ul>"
        );
    }

    #[test]
    fn test_non_item_line_closes_list() {
        let blocks = parse("- one\nafter\n- two");
        assert_eq!(
            blocks,
            vec![
                Block::List(vec!["one".to_string()]),
                Block::Paragraph("after".to_string()),
                Block::List(vec!["two".to_string()]),
            ]
        );
    }

    #[test]
    fn test_no_empty_lists_or_edge_breaks() {
        let blocks = parse("\n\n- \n\n\ntext\n\n\n");
        assert_eq!(
            blocks,
            vec![Block::Paragraph("-".to_string()), Block::Break, Block::Paragraph("text".to_string())]
        );
        assert!(!blocks_to_html(&blocks).contains("<ul>"));
    }

    #[test]
    fn test_inline_bold_and_escaping() {
        let html = markdown_to_html("- **Rust**: 5 years <async>\nUses C & C++");
        assert_eq!(
            html,
            "<ul><li><strong>Rust</strong>: 5 years &lt;async&gt;</li></ul>\n<p>Uses C &amp; C++</p>"
        );
    }

    #[test]
    fn test_markup_lookalikes_are_escaped() {
        let html = markdown_to_html("<p><img src=x onerror=alert(1)></p>\n- ok");
        assert!(!html.contains("<img"));
        assert!(html.starts_with("<p>&lt;p&gt;&lt;img src=x onerror=alert(1)&gt;&lt;/p&gt;</p>"));

        let html = markdown_to_html("<h3><script>alert(1)</script></h3>");
        assert!(!html.contains("<script>"));

        let html = markdown_to_html("<ul><li><a href=\"x\">hi</a></li></ul>");
        assert!(!html.contains("<a href"));
    }

    #[test]
    fn test_indented_dash_is_not_an_item() {
        assert_eq!(
            parse("  - nested"),
            vec![Block::Paragraph("- nested".to_string())]
        );
    }

    #[test]
    fn test_rendering_output_again_is_unchanged() {
        let input = "**SCORE: 82/100** overall\n\n**Strengths**\n- Clear communication & focus\n- **Strong** leadership **SCORE: 9/100**\n\nKeep going <3";
        let once = markdown_to_html(input);
        let twice = markdown_to_html(&once);
        assert_eq!(once, twice);
        assert!(parse(&once).iter().all(|b| matches!(b, Block::Markup(_))));
    }

    #[test]
    fn test_crlf_input() {
        assert_eq!(
            parse("**Gaps**\r\n- Docker\r\n"),
            vec![
                Block::Heading("Gaps".to_string()),
                Block::List(vec!["Docker".to_string()])
            ]
        );
    }

    #[test]
    fn test_text_rendering() {
        let text = markdown_to_text(SAMPLE);
        assert_eq!(
            text,
            "Score: 82/100\nStrengths\n---------\n  • Clear communication\n  • Strong leadership"
        );
    }
}
