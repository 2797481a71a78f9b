#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use smartstring::alias::String as SmartString;

#[cfg(feature = "test-cases")]
pub mod test_cases;
mod trie;

pub use trie::Trie;

/// Dictionary-backed segmentation of concatenated words
///
/// Implemented by both dictionary structures in this crate, which share the
/// same segmentation semantics and differ only in how prefixes are looked up.
///
/// ```
/// use compound_split::{Lexicon, Segment};
///
/// let dict = Lexicon::from_words(&["base", "ball", "game"]);
/// assert_eq!(dict.segment("ballgame").as_deref(), Some("ball game"));
/// assert_eq!(dict.segment("football"), None);
/// ```
pub trait Segment {
    /// Split `input` into space-separated dictionary words
    ///
    /// The input is lowercased before matching. If the whole input is itself
    /// a dictionary word it is returned unsplit. Otherwise every prefix
    /// length is scanned in increasing order, and of all prefixes that start
    /// a complete segmentation the longest one wins. Returns `None` when no
    /// full segmentation exists; this is a normal outcome, not an error.
    fn segment(&self, input: &str) -> Option<String>;
}

/// Flat word-membership set
///
/// The simpler of the two dictionary backings: a hash set of words, queried
/// once per candidate prefix during segmentation.
#[cfg_attr(feature = "with-serde", derive(Deserialize, Serialize))]
#[derive(Clone, Debug, Default)]
pub struct Lexicon {
    words: HashSet<SmartString>,
}

impl Lexicon {
    /// Create a `Lexicon` from a collection of words
    ///
    /// Words are stored as given and are expected to already be lowercase;
    /// queries are normalized in [`contains`](Self::contains).
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words.into_iter().map(|w| w.as_ref().into()).collect(),
        }
    }

    /// Whether `word`, lowercased, is in the dictionary
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word.to_lowercase().as_str())
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Recursive scan over an already lowercased `word`
    ///
    /// Later (longer-prefix) candidates overwrite earlier ones, so the last
    /// full segmentation found during the scan is the one returned. This
    /// deliberately prefers compound entries over splits of their parts and
    /// must match the trie-backed scan in `trie.rs` exactly.
    fn split(&self, word: &str) -> Option<String> {
        if self.words.contains(word) {
            return Some(word.to_owned());
        }

        let mut found = None;
        for (i, _) in word.char_indices().skip(1) {
            let (head, tail) = word.split_at(i);
            if !self.words.contains(head) {
                continue;
            }
            if let Some(rest) = self.split(tail) {
                found = Some((head, rest));
            }
        }

        found.map(|(head, rest)| format!("{} {}", head, rest))
    }
}

impl Segment for Lexicon {
    fn segment(&self, input: &str) -> Option<String> {
        self.split(&input.to_lowercase())
    }
}

pub(crate) type HashMap<K, V> = std::collections::HashMap<K, V, ahash::RandomState>;
type HashSet<T> = std::collections::HashSet<T, ahash::RandomState>;
