use compound_split::{Lexicon, Segment, Trie};

fn main() {
    let words = ["all", "base", "ball", "baseball", "game", "ballgame"];
    let lexicon = Lexicon::from_words(words);
    let trie = Trie::from_words(words);

    for input in ["baseballbase", "gamebaseball", "baseballgame", "basketballgame"] {
        println!(
            "{:16} lexicon: {:?}  trie: {:?}",
            input,
            lexicon.segment(input),
            trie.segment(input)
        );
    }
}
