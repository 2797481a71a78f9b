use crate::{Lexicon, Segment, Trie};

/// Run a segmenter against the built-in test cases
pub fn run(segmenter: &impl Segment) {
    for (input, expected) in CASES.iter().copied() {
        assert_eq!(
            segmenter.segment(input).as_deref(),
            expected,
            "input {:?}",
            input
        );
    }
}

/// A `Lexicon` over the built-in word list
pub fn lexicon() -> Lexicon {
    Lexicon::from_words(WORDS)
}

/// A `Trie` over the built-in word list
pub fn trie() -> Trie {
    Trie::from_words(WORDS)
}

/// Built-in word list
///
/// Small on purpose; "ballgame" is not a real word but makes the compound
/// entries overlap, which is what the corner cases below need.
pub const WORDS: &[&str] = &["all", "base", "ball", "baseball", "game", "ballgame"];

/// Built-in test cases
///
/// These are exposed so that both dictionary backings can be checked against
/// the same expectations.
pub const CASES: &[(&str, Option<&str>)] = &[
    ("baseballbase", Some("baseball base")),
    ("gamebaseball", Some("game baseball")),
    // "base ballgame" would be a valid split too; the longest first prefix
    // found during the scan wins, so "baseball game" is the expected value.
    ("baseballgame", Some("baseball game")),
    ("basketballgame", None),
    ("ballball", Some("ball ball")),
    ("allballgame", Some("all ballgame")),
    ("baseball", Some("baseball")),
    ("ballgame", Some("ballgame")),
    ("BASEBALLBASE", Some("baseball base")),
    ("games", None),
    ("", None),
];
