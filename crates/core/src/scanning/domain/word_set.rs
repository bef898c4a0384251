use std::collections::HashSet;

use super::text_normalizer::normalize;

/// Immutable set of lowercase bad words.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordSet {
    words: HashSet<String>,
}

impl WordSet {
    /// Build a set from arbitrary words. Entries are trimmed and lowercased;
    /// empty entries are dropped.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// Parse dictionary file contents: one word per line, lines starting
    /// with `#` are comments, blank lines are skipped.
    ///
    /// Entries are not accent-folded or stripped of punctuation, while
    /// transcripts are. An entry such as `perché` therefore never matches;
    /// see [`WordSet::unmatchable`].
    pub fn parse(contents: &str) -> Self {
        Self::new(contents.lines().filter(|line| !line.starts_with('#')))
    }

    /// Entries that differ from their normalized form and so can never equal
    /// a transcript token, sorted.
    pub fn unmatchable(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.iter().filter(|w| normalize(w) != *w).collect();
        words.sort_unstable();
        words
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_skips_comments_and_blank_lines() {
        let set = WordSet::parse("word1\n#comment\nword2\n\nword3");
        assert_eq!(set, WordSet::new(["word1", "word2", "word3"]));
    }

    #[test]
    fn test_parse_empty() {
        assert!(WordSet::parse("").is_empty());
    }

    #[test]
    fn test_parse_lowercases_and_trims() {
        let set = WordSet::parse("  Cazzo \r\nMERDA\n");
        assert!(set.contains("cazzo"));
        assert!(set.contains("merda"));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_parse_deduplicates() {
        let set = WordSet::parse("foo\nFoo\nfoo\n");
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_parse_indented_hash_is_a_word() {
        let set = WordSet::parse("  #notacomment\n");
        assert!(set.contains("#notacomment"));
    }

    #[test]
    fn test_new_drops_empty_entries() {
        let set = WordSet::new(["", "   ", "ok"]);
        assert_eq!(set.len(), 1);
        assert!(set.contains("ok"));
    }

    #[test]
    fn test_unmatchable_lists_accented_and_punctuated_entries() {
        let set = WordSet::parse("perché\ncazzo\nfiglio-di\nmerda");
        assert_eq!(set.unmatchable(), vec!["figlio-di", "perché"]);
    }

    #[test]
    fn test_plain_entries_are_matchable() {
        assert!(WordSet::parse("cazzo\nmerda").unmatchable().is_empty());
    }
}
