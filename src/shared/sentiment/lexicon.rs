//! AFINN-165 word list scorer
//!
//! Each known word carries an integer valence in `[-5, 5]`. A word directly
//! preceded by a negator contributes its negated valence.

use std::collections::HashMap;

use super::{LexiconScorer, RawScore};

/// The AFINN-165 word list, one `word<TAB>valence` row per line
const AFINN_165: &str = include_str!("afinn-165.tsv");

/// Tokens that flip the valence of the word that follows them
const NEGATORS: &[&str] = &[
    "aint", "ain't", "cannot", "cant", "can't", "couldnt", "couldn't", "didnt", "didn't",
    "doesnt", "doesn't", "dont", "don't", "hadnt", "hadn't", "hasnt", "hasn't", "havent",
    "haven't", "isnt", "isn't", "neither", "never", "no", "nobody", "none", "nor", "not",
    "nothing", "shouldnt", "shouldn't", "wasnt", "wasn't", "werent", "weren't", "wont",
    "won't", "wouldnt", "wouldn't",
];

/// Lexicon scorer backed by the built-in word list
#[derive(Debug, Clone)]
pub struct AfinnLexicon {
    words: HashMap<&'static str, i32>,
}

impl AfinnLexicon {
    pub fn new() -> Self {
        Self {
            words: parse_word_list(AFINN_165),
        }
    }

    /// Number of scored words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Valence of a single lower-cased token, if it is in the list
    pub fn valence(&self, token: &str) -> Option<i32> {
        self.words.get(token).copied()
    }
}

impl Default for AfinnLexicon {
    fn default() -> Self {
        Self::new()
    }
}

impl LexiconScorer for AfinnLexicon {
    fn analyze(&self, text: &str) -> RawScore {
        let tokens = tokenize(text);
        let mut score = 0;

        for (i, token) in tokens.iter().enumerate() {
            let Some(mut valence) = self.valence(token) else {
                continue;
            };
            if i > 0 && NEGATORS.contains(&tokens[i - 1].as_str()) {
                valence = -valence;
            }
            score += valence;
        }

        let comparative = if tokens.is_empty() {
            0.0
        } else {
            f64::from(score) / tokens.len() as f64
        };

        RawScore { score, comparative }
    }
}

/// Rows that are malformed, out of range or multi-word are skipped
fn parse_word_list(list: &'static str) -> HashMap<&'static str, i32> {
    list.lines()
        .filter_map(|line| {
            let (word, valence) = line.split_once('\t')?;
            let valence: i32 = valence.trim().parse().ok()?;
            let word = word.trim();
            if word.is_empty() || word.contains(' ') || !(-5..=5).contains(&valence) {
                return None;
            }
            Some((word, valence))
        })
        .collect()
}

/// Lower-case, drop punctuation (keeping `-` and `'`), split on whitespace
fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(|word| {
            word.chars()
                .filter(|c| c.is_alphanumeric() || *c == '-' || *c == '\'')
                .collect::<String>()
        })
        .filter(|token| !token.is_empty())
        .collect()
}
