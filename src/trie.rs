#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{HashMap, Segment};

/// One position along zero or more words' character sequences
///
/// Each node exclusively owns its children, so the tree has no sharing and
/// no cycles. `terminal` is true iff the path from the root to this node
/// spells a complete dictionary word; the root is never terminal.
#[cfg_attr(feature = "with-serde", derive(Deserialize, Serialize))]
#[derive(Clone, Debug, Default)]
struct Node {
    children: HashMap<char, Node>,
    terminal: bool,
}

/// Character-keyed prefix tree over the dictionary
///
/// Built once from a word list and read-only afterwards. Insertion costs the
/// total number of characters across all words; lookup costs the length of
/// the queried word. Unlike [`Lexicon`](crate::Lexicon), segmentation walks
/// the tree incrementally instead of testing each prefix from scratch.
#[cfg_attr(feature = "with-serde", derive(Deserialize, Serialize))]
#[derive(Clone, Debug, Default)]
pub struct Trie {
    root: Node,
}

impl Trie {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a `Trie` by inserting every word in the collection
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Self::new();
        for word in words {
            trie.insert(word.as_ref());
        }
        trie
    }

    /// Insert `word`, lowercased, into the tree
    ///
    /// Creates one child per character along the way and marks the final
    /// node terminal. Inserting the same word twice has no further effect.
    pub fn insert(&mut self, word: &str) {
        let mut node = &mut self.root;
        for ch in word.to_lowercase().chars() {
            node = node.children.entry(ch).or_default();
        }
        node.terminal = true;
    }

    /// Whether `word`, lowercased, is in the dictionary
    pub fn contains(&self, word: &str) -> bool {
        match self.walk(&word.to_lowercase()) {
            Some(node) => node.terminal,
            None => false,
        }
    }

    /// Whether any dictionary word starts with `prefix`, lowercased
    pub fn contains_prefix(&self, prefix: &str) -> bool {
        self.walk(&prefix.to_lowercase()).is_some()
    }

    /// Follow `path` child-by-child from the root
    fn walk(&self, path: &str) -> Option<&Node> {
        let mut node = &self.root;
        for ch in path.chars() {
            node = node.children.get(&ch)?;
        }
        Some(node)
    }

    /// Recursive scan over an already lowercased `word`
    ///
    /// Same candidate selection as `Lexicon::split`: the scan never stops at
    /// the first full segmentation, and each later (longer-prefix) candidate
    /// overwrites the previous one. The walk aborts as soon as the tree runs
    /// out of children, since no longer prefix can be a word past that point.
    fn split(&self, word: &str) -> Option<String> {
        if let Some(node) = self.walk(word) {
            if node.terminal {
                return Some(word.to_owned());
            }
        }

        let mut node = &self.root;
        let mut found = None;
        for (i, ch) in word.char_indices() {
            node = match node.children.get(&ch) {
                Some(next) => next,
                None => break,
            };
            if !node.terminal {
                continue;
            }
            let at = i + ch.len_utf8();
            if let Some(rest) = self.split(&word[at..]) {
                found = Some((&word[..at], rest));
            }
        }

        found.map(|(head, rest)| format!("{} {}", head, rest))
    }
}

impl Segment for Trie {
    fn segment(&self, input: &str) -> Option<String> {
        self.split(&input.to_lowercase())
    }
}
