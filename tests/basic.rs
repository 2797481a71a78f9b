use once_cell::sync::Lazy;

use compound_split::{Lexicon, Segment, Trie};

const WORDS: &[&str] = &["all", "base", "ball", "baseball", "game", "ballgame"];

static LEXICON: Lazy<Lexicon> = Lazy::new(|| Lexicon::from_words(WORDS));
static TRIE: Lazy<Trie> = Lazy::new(|| Trie::from_words(WORDS));

macro_rules! assert_split {
    ($input:expr, $expected:expr) => {
        assert_eq!(LEXICON.segment($input).as_deref(), $expected);
        assert_eq!(TRIE.segment($input).as_deref(), $expected);
    };
}

#[test]
fn whole_word_precedence() {
    // A dictionary word is never split, even when a decomposition exists
    // ("baseball" -> "base" + "ball").
    for word in WORDS {
        assert_split!(word, Some(*word));
    }
}

#[test]
fn unsegmentable_input_returns_none() {
    assert_split!("basketballgame", None);
    assert_split!("bas", None);
    assert_split!("baseballx", None);
}

#[test]
fn longest_first_prefix_wins() {
    // Both "base" and "baseball" start full segmentations; the scan keeps
    // overwriting its candidate, so the longer prefix is the one returned.
    assert_split!("baseballbase", Some("baseball base"));
}

#[test]
fn compound_ordering() {
    assert_split!("gamebaseball", Some("game baseball"));
}

#[test]
fn overlapping_compounds_corner_case() {
    // "base ballgame" is also a full segmentation of this input. The
    // longest-first-prefix policy picks "baseball game" instead, and that
    // exact value is part of the contract.
    assert_split!("baseballgame", Some("baseball game"));
}

#[test]
fn input_is_lowercased() {
    assert_split!("BASEBALLBASE", Some("baseball base"));
    assert_split!("BaseBall", Some("baseball"));
}

#[test]
fn empty_input() {
    assert_split!("", None);
}

#[test]
fn repeated_insertion_does_not_change_results() {
    let mut trie = Trie::from_words(WORDS);
    for word in WORDS {
        trie.insert(word);
    }
    for input in ["baseballbase", "baseballgame", "basketballgame"] {
        assert_eq!(trie.segment(input), TRIE.segment(input));
    }
}

#[test]
fn backings_agree() {
    let inputs = [
        "baseballbase",
        "gamebaseball",
        "baseballgame",
        "basketballgame",
        "allballgame",
        "ballball",
        "gamegamegame",
        "baseballgamebaseball",
        "a",
        "",
    ];
    for input in inputs {
        assert_eq!(LEXICON.segment(input), TRIE.segment(input), "{:?}", input);
    }
}

#[cfg(feature = "test-cases")]
#[test]
fn built_in_cases() {
    compound_split::test_cases::run(&compound_split::test_cases::lexicon());
    compound_split::test_cases::run(&compound_split::test_cases::trie());
}
