use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Write;

use super::scan_results::ScanResults;

pub const AGGREGATE_TITLE: &str = "Bad Words Summary";
pub const NO_MATCHES_LINE: &str = "No bad words found.";
const TABLE_DIVIDER_WIDTH: usize = 60;

/// One row of the aggregate table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordSummary {
    pub word: String,
    pub total: usize,
    /// File names containing the word, ascending.
    pub files: Vec<String>,
}

/// Cross-file view of a run's results, derived on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateSummary {
    pub total_files: usize,
    pub files_with_matches: usize,
    /// Rows ordered by total descending, then word ascending.
    pub words: Vec<WordSummary>,
}

impl AggregateSummary {
    pub fn from_results(results: &ScanResults, total_files: usize) -> Self {
        let mut totals: BTreeMap<&str, usize> = BTreeMap::new();
        let mut files: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();
        let mut files_with_matches = 0;

        for result in results.iter().filter(|r| !r.counts.is_empty()) {
            files_with_matches += 1;
            for (word, count) in result.counts.iter() {
                *totals.entry(word).or_insert(0) += count;
                files
                    .entry(word)
                    .or_default()
                    .insert(result.file_name.as_str());
            }
        }

        let mut words: Vec<WordSummary> = totals
            .into_iter()
            .map(|(word, total)| WordSummary {
                word: word.to_string(),
                total,
                files: files
                    .remove(word)
                    .unwrap_or_default()
                    .into_iter()
                    .map(str::to_string)
                    .collect(),
            })
            .collect();
        words.sort_by(by_total_desc_then_word);

        Self {
            total_files,
            files_with_matches,
            words,
        }
    }
}

fn by_total_desc_then_word(a: &WordSummary, b: &WordSummary) -> Ordering {
    b.total.cmp(&a.total).then_with(|| a.word.cmp(&b.word))
}

/// Render the run-wide summary table.
pub fn render_aggregate_report(results: &ScanResults, total_files: usize) -> String {
    let summary = AggregateSummary::from_results(results, total_files);

    let mut out = String::new();
    let _ = writeln!(out, "{AGGREGATE_TITLE}");
    let _ = writeln!(out, "{}", "=".repeat(AGGREGATE_TITLE.len()));
    let _ = writeln!(out, "Total files scanned: {}", summary.total_files);
    let _ = writeln!(out, "Files with bad words: {}", summary.files_with_matches);
    let _ = writeln!(out);

    if summary.words.is_empty() {
        let _ = writeln!(out, "{NO_MATCHES_LINE}");
        return out;
    }

    let _ = writeln!(out, "{:<20} | {:<12} | {}", "Word", "Total Count", "Files");
    let _ = writeln!(out, "{}", "-".repeat(TABLE_DIVIDER_WIDTH));
    for row in &summary.words {
        let _ = writeln!(
            out,
            "{:<20} | {:<12} | {}",
            row.word,
            row.total,
            row.files.join(", ")
        );
    }
    out
}
