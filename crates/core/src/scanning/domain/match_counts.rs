use std::collections::BTreeMap;

/// Occurrences of each matched bad word within one transcript.
///
/// Every stored count is at least 1; iteration is in ascending word order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchCounts {
    counts: BTreeMap<String, usize>,
}

impl MatchCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `n` further occurrences of `word`. Recording zero is a no-op.
    pub fn record(&mut self, word: &str, n: usize) {
        if n == 0 {
            return;
        }
        *self.counts.entry(word.to_string()).or_insert(0) += n;
    }

    pub fn get(&self, word: &str) -> usize {
        self.counts.get(word).copied().unwrap_or(0)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.counts.contains_key(word)
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(w, c)| (w.as_str(), *c))
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.counts.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<(S, usize)> for MatchCounts {
    fn from_iter<I: IntoIterator<Item = (S, usize)>>(iter: I) -> Self {
        let mut counts = MatchCounts::new();
        for (word, n) in iter {
            counts.record(word.as_ref(), n);
        }
        counts
    }
}
