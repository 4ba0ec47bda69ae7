// src/utils/log.rs

//! Report-style log helpers.
//!
//! Thin wrappers over the `log` facade for the framed output printed at the
//! start and end of a crawl. Regular diagnostics use the `log` macros
//! directly.

/// Log a framed header.
pub fn header(title: &str) {
    let border = "═".repeat(60);
    ::log::info!("{border}");
    ::log::info!("  {title}");
    ::log::info!("{border}");
}

/// Log a separator line.
pub fn separator() {
    ::log::info!("{}", "─".repeat(60));
}

/// Log a sub-item (indented).
pub fn sub_item(message: &str) {
    ::log::info!("    {message}");
}

/// Log a summary section.
pub fn summary(title: &str, items: &[(&str, String)]) {
    ::log::info!("[SUMMARY] {title}");
    for line in summary_lines(items) {
        ::log::info!("{line}");
    }
}

/// Align summary keys into `    key   : value` lines.
fn summary_lines(items: &[(&str, String)]) -> Vec<String> {
    let width = items.iter().map(|(key, _)| key.chars().count()).max().unwrap_or(0);
    items
        .iter()
        .map(|(key, value)| format!("    {key:<width$} : {value}"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_lines_align_keys() {
        let lines = summary_lines(&[("Jobs", "12".to_string()), ("With salary", "4".to_string())]);
        assert_eq!(lines[0], "    Jobs        : 12");
        assert_eq!(lines[1], "    With salary : 4");
    }

    #[test]
    fn test_summary_lines_empty() {
        assert!(summary_lines(&[]).is_empty());
    }
}
