// src/render/page.rs
use crate::theme::Theme;
use crate::utils::escape_html;

const STYLE: &str = r#"
:root[data-theme="light"] { --bg: #f7f7fb; --fg: #1d1d28; --accent: #4f46e5; --track: #e2e2ea; }
:root[data-theme="dark"] { --bg: #14141c; --fg: #ececf3; --accent: #818cf8; --track: #2c2c3a; }
body { background: var(--bg); color: var(--fg); font-family: system-ui, sans-serif; max-width: 48rem; margin: 2rem auto; padding: 0 1rem; }
.score-badge { display: inline-block; padding: .5rem 1rem; border-radius: 999px; background: var(--accent); color: #fff; font-weight: 700; }
.score-ring-track { stroke: var(--track); }
.score-ring-fill { stroke: var(--accent); stroke-linecap: round; }
.score-ring text { fill: var(--fg); font-size: 1.5rem; font-weight: 700; }
"#;

/// Standalone HTML document around a rendered fragment
pub fn wrap_document(title: &str, body: &str, theme: Theme) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\" data-theme=\"{theme}\">\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n<style>{style}</style>\n</head>\n<body>\n{body}\n</body>\n</html>\n",
        theme = theme,
        title = escape_html(title),
        style = STYLE,
        body = body,
    )
}
