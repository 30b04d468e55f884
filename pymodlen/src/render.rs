//! Report rendering for CLI output

use console::Style;
use pymodlenlib::Report;

/// How the failure report is written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable report with suggestions
    #[default]
    Text,
    /// Machine-readable JSON
    Json,
}

impl OutputFormat {
    /// Names accepted by `--format`
    pub const NAMES: [&'static str; 2] = ["text", "json"];

    pub fn from_name(name: &str) -> Self {
        match name {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Create the style used for report headings.
///
/// `console` drops the escape codes itself when stdout is not a terminal,
/// so piped output stays plain.
fn heading_style() -> Style {
    Style::new().bold()
}

/// Render a report in the requested format.
pub fn render(report: &Report, format: OutputFormat) -> pymodlenlib::Result<String> {
    match format {
        OutputFormat::Text => {
            let style = heading_style();
            Ok(report.render_text_with(|heading| style.apply_to(heading).to_string()))
        }
        OutputFormat::Json => {
            let mut json = report.to_json()?;
            json.push('\n');
            Ok(json)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pymodlenlib::Violation;

    #[test]
    fn test_format_names() {
        assert_eq!(OutputFormat::from_name("json"), OutputFormat::Json);
        assert_eq!(OutputFormat::from_name("text"), OutputFormat::Text);
    }

    #[test]
    fn test_render_json_ends_with_newline() {
        let report = Report::new(&[Violation::new("big.py", 1200)], 1000);
        let out = render(&report, OutputFormat::Json).unwrap();

        assert!(out.ends_with("}\n"));
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["application"][0]["line_count"], 1200);
    }

    #[test]
    fn test_render_text_keeps_report_lines() {
        let report = Report::new(&[Violation::new("tests/big_test.py", 1500)], 1000);
        let out = console::strip_ansi_codes(&render(&report, OutputFormat::Text).unwrap())
            .into_owned();

        assert_eq!(out, report.to_text());
    }
}
