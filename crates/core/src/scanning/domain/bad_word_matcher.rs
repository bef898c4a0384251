use super::match_counts::MatchCounts;
use super::match_mode::MatchMode;
use super::text_normalizer::normalize;
use super::tokenizer::tokenize;
use super::word_set::WordSet;

pub struct BadWordMatcher;

impl BadWordMatcher {
    /// Count bad word occurrences in raw transcript text.
    ///
    /// Exact mode counts each token that is a member of `words`. Substring
    /// mode counts, for every bad word, the tokens that contain it; a token
    /// counts at most once per bad word but may satisfy several bad words.
    pub fn find_matches(text: &str, words: &WordSet, mode: MatchMode) -> MatchCounts {
        let tokens = tokenize(&normalize(text));
        if words.is_empty() || tokens.is_empty() {
            return MatchCounts::new();
        }

        match mode {
            MatchMode::Exact => tokens
                .iter()
                .filter(|t| words.contains(t))
                .map(|t| (t.as_str(), 1))
                .collect(),
            MatchMode::Substring => words
                .iter()
                .map(|w| (w, tokens.iter().filter(|t| t.contains(w)).count()))
                .collect(),
        }
    }
}
