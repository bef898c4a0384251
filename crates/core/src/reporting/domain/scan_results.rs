use crate::scanning::domain::match_counts::MatchCounts;

/// Matches found in a single scanned file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileResult {
    pub file_name: String,
    pub counts: MatchCounts,
}

impl FileResult {
    pub fn new(file_name: impl Into<String>, counts: MatchCounts) -> Self {
        Self {
            file_name: file_name.into(),
            counts,
        }
    }
}

/// Per-file results for a run, in discovery order.
///
/// Behaves as a mapping keyed by file name: inserting a name that is already
/// present replaces its counts without changing its position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanResults {
    entries: Vec<FileResult>,
}

impl ScanResults {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, result: FileResult) {
        match self
            .entries
            .iter_mut()
            .find(|e| e.file_name == result.file_name)
        {
            Some(existing) => existing.counts = result.counts,
            None => self.entries.push(result),
        }
    }

    pub fn get(&self, file_name: &str) -> Option<&MatchCounts> {
        self.entries
            .iter()
            .find(|e| e.file_name == file_name)
            .map(|e| &e.counts)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FileResult> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<FileResult> for ScanResults {
    fn from_iter<I: IntoIterator<Item = FileResult>>(iter: I) -> Self {
        let mut results = ScanResults::new();
        for result in iter {
            results.insert(result);
        }
        results
    }
}
