use std::fmt::Write;

use crate::scanning::domain::match_counts::MatchCounts;

pub const FILE_REPORT_SEPARATOR: &str = "--------------------------------";

/// Render the report for one file, or `None` when nothing matched.
///
/// ```text
/// File: <name>
/// Total bad words: <sum>
/// --------------------------------
/// <word>: <count>
/// ```
pub fn render_file_report(file_name: &str, counts: &MatchCounts) -> Option<String> {
    if counts.is_empty() {
        return None;
    }

    let mut out = String::new();
    let _ = writeln!(out, "File: {file_name}");
    let _ = writeln!(out, "Total bad words: {}", counts.total());
    let _ = writeln!(out, "{FILE_REPORT_SEPARATOR}");
    for (word, count) in counts.iter() {
        let _ = writeln!(out, "{word}: {count}");
    }
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_counts_renders_nothing() {
        assert!(render_file_report("test.mp3", &MatchCounts::new()).is_none());
    }

    #[test]
    fn test_layout() {
        let counts: MatchCounts = [("badword2", 1), ("badword1", 2)].into_iter().collect();
        let report = render_file_report("test.mp3", &counts).unwrap();
        assert_eq!(
            report,
            "File: test.mp3\n\
             Total bad words: 3\n\
             --------------------------------\n\
             badword1: 2\n\
             badword2: 1\n"
        );
    }

    #[test]
    fn test_total_line_is_sum_of_counts() {
        let counts: MatchCounts = [("a", 4), ("b", 7), ("c", 1)].into_iter().collect();
        let report = render_file_report("x.mp3", &counts).unwrap();
        assert_eq!(report.lines().nth(1), Some("Total bad words: 12"));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let counts: MatchCounts = [("zeta", 1), ("alpha", 2), ("mu", 3)].into_iter().collect();
        assert_eq!(
            render_file_report("f.mp3", &counts),
            render_file_report("f.mp3", &counts)
        );
    }
}
