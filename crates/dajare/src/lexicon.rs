//! The lexical model: tagged words and the sentences they form.

use crate::phonetics::{self, Mora};
use dajare_core::{
    mecab_types::{InvalidRecord, TaggedMorpheme, EOS_MARKER, SYMBOL_POS},
    ContentWordSet,
};
use serde::Serialize;
use std::fmt;

/// A single tagged word with its phonetic transcription.
///
/// Everything is computed once at construction; a word is never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Word {
    surface: String,
    reading: String,
    lemma: String,
    pos_category: String,
    moras: Vec<Mora>,
}

impl Word {
    /// Builds a word from a parsed tagged-morpheme record.
    pub fn from_morpheme(morpheme: TaggedMorpheme) -> Self {
        let pos_category = morpheme.pos_category().to_string();
        let moras = phonetics::reading_to_moras(&morpheme.reading, &morpheme.lemma, &pos_category);
        Self {
            surface: morpheme.surface,
            reading: morpheme.reading,
            lemma: morpheme.lemma,
            pos_category,
            moras,
        }
    }

    /// Parses one tab-delimited tagged line into a word.
    pub fn from_tagged_line(line: &str) -> Result<Self, InvalidRecord> {
        Ok(Self::from_morpheme(TaggedMorpheme::parse(line)?))
    }

    pub fn surface(&self) -> &str {
        &self.surface
    }

    pub fn reading(&self) -> &str {
        &self.reading
    }

    pub fn lemma(&self) -> &str {
        &self.lemma
    }

    /// The outermost segment of the word's part-of-speech tag.
    pub fn pos_category(&self) -> &str {
        &self.pos_category
    }

    /// The word's mora sequence. Never empty.
    pub fn moras(&self) -> &[Mora] {
        &self.moras
    }

    /// Checks whether the word is a content word under the given set.
    pub fn is_content_word(&self, content_words: &ContentWordSet) -> bool {
        content_words.contains(&self.pos_category)
    }

    /// Checks whether the word is a symbol token.
    pub fn is_symbol(&self) -> bool {
        self.pos_category == SYMBOL_POS
    }
}

/// An ordered, immutable sequence of words.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sentence {
    words: Vec<Word>,
    word_len: usize,
    char_len: usize,
}

impl Sentence {
    /// Builds a sentence from words, precomputing the cached lengths.
    pub fn from_words(words: Vec<Word>) -> Self {
        let word_len = words.len();
        let char_len = words
            .iter()
            .filter(|word| !word.is_symbol())
            .map(|word| word.surface.chars().count())
            .sum();
        Self {
            words,
            word_len,
            char_len,
        }
    }

    /// Parses the tagger's multi-line output for one sentence.
    ///
    /// The terminating end-of-sentence marker line is stripped before the
    /// remaining lines are parsed.
    pub fn from_tagged(tagged: &str) -> Result<Self, InvalidRecord> {
        let mut lines = tagged.lines().collect::<Vec<_>>();
        if lines.last() == Some(&EOS_MARKER) {
            lines.pop();
        }
        let words = lines
            .into_iter()
            .map(Word::from_tagged_line)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_words(words))
    }

    /// Parses many tagged sentences.
    pub fn from_tagged_all<'a, I>(tagged_sentences: I) -> Result<Vec<Self>, InvalidRecord>
    where
        I: IntoIterator<Item = &'a str>,
    {
        tagged_sentences
            .into_iter()
            .map(Self::from_tagged)
            .collect()
    }

    /// Number of words, symbols included.
    pub fn word_len(&self) -> usize {
        self.word_len
    }

    /// Number of characters over the non-symbol words.
    pub fn char_len(&self) -> usize {
        self.char_len
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }

    /// A view of the sentence with symbol tokens removed, in order.
    pub fn removed_symbol(&self) -> Sentence {
        Self::from_words(
            self.words
                .iter()
                .filter(|word| !word.is_symbol())
                .cloned()
                .collect(),
        )
    }
}

impl fmt::Display for Sentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for word in &self.words {
            f.write_str(&word.surface)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Sentence {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const FUTON: &str = "布団\tフトン\t布団\t名詞-一般\t\t\nが\tガ\tが\t助詞-格助詞-一般\t\t\n吹っ飛んだ\tフットンダ\t吹っ飛ぶ\t動詞-自立\t五段・バ行\t連用タ接続\nEOS\n";

    #[test]
    fn parses_tagged_sentence_and_strips_eos() {
        let sentence = Sentence::from_tagged(FUTON).unwrap();
        assert_eq!(sentence.word_len(), 3);
        let first = &sentence.words()[0];
        assert_eq!(first.surface(), "布団");
        assert_eq!(first.reading(), "フトン");
        assert_eq!(first.lemma(), "布団");
        assert_eq!(first.pos_category(), "名詞");
        assert_eq!(first.moras().len(), 3);
    }

    #[test]
    fn every_word_has_at_least_one_mora() {
        let sentence = Sentence::from_tagged(FUTON).unwrap();
        assert!(sentence.iter().all(|word| !word.moras().is_empty()));
    }

    #[test]
    fn char_len_skips_symbols() {
        let tagged = "布団\tフトン\t布団\t名詞-一般\n。\t。\t。\t記号-句点\nEOS";
        let sentence = Sentence::from_tagged(tagged).unwrap();
        assert_eq!(sentence.word_len(), 2);
        assert_eq!(sentence.char_len(), 2);
    }

    #[test]
    fn removed_symbol_keeps_word_order() {
        let tagged = "「\t「\t「\t記号-括弧開\n布団\tフトン\t布団\t名詞-一般\n」\t」\t」\t記号-括弧閉\nが\tガ\tが\t助詞-格助詞-一般\nEOS";
        let sentence = Sentence::from_tagged(tagged).unwrap();
        let without_symbols = sentence.removed_symbol();
        assert_eq!(without_symbols.word_len(), 2);
        assert_eq!(without_symbols.words()[0].surface(), "布団");
        assert_eq!(without_symbols.words()[1].surface(), "が");
        // the original sentence is untouched
        assert_eq!(sentence.word_len(), 4);
    }

    #[test]
    fn invalid_record_is_an_error() {
        let err = Sentence::from_tagged("布団\tフトン\nEOS").unwrap_err();
        assert_eq!(err.found, 2);
    }

    #[test]
    fn displays_concatenated_surfaces() {
        let sentence = Sentence::from_tagged(FUTON).unwrap();
        assert_eq!(sentence.to_string(), "布団が吹っ飛んだ");
    }

    #[test]
    fn parses_many_tagged_sentences() {
        let sentences =
            Sentence::from_tagged_all(["布団\tフトン\t布団\t名詞-一般\nEOS", "が\tガ\tが\t助詞-格助詞-一般\nEOS"])
                .unwrap();
        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0].word_len(), 1);
    }

    #[test]
    fn content_word_membership_uses_the_injected_set() {
        let sentence = Sentence::from_tagged(FUTON).unwrap();
        let default_set = ContentWordSet::default();
        let nouns_only = ContentWordSet::new(["名詞"]);
        let futon = &sentence.words()[0];
        let futtonda = &sentence.words()[2];
        assert!(futon.is_content_word(&default_set));
        assert!(futtonda.is_content_word(&default_set));
        assert!(!futtonda.is_content_word(&nouns_only));
    }

    #[test]
    fn empty_input_is_an_empty_sentence() {
        let sentence = Sentence::from_tagged("EOS").unwrap();
        assert_eq!(sentence.word_len(), 0);
        assert_eq!(sentence.char_len(), 0);
        assert_eq!(sentence.to_string(), "");
    }
}
