//! Contains types that represent the tagged-morpheme records produced by a
//! MeCab-style morphological tagger in the ChaSen output format.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The line terminating one tagged sentence.
pub const EOS_MARKER: &str = "EOS";
/// Separator between the segments of a hierarchical part-of-speech tag.
pub const POS_DELIMITER: char = '-';
/// The part-of-speech category of symbol tokens.
pub const SYMBOL_POS: &str = "記号";
/// The part-of-speech category of particles.
pub const PARTICLE_POS: &str = "助詞";

/// A tagged-morpheme line with fewer fields than the format requires.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("invalid record format: expected at least 4 tab-delimited fields, found {found} in {line:?}")]
pub struct InvalidRecord {
    pub line: String,
    pub found: usize,
}

/// One tagged-morpheme record.
///
/// The tagger emits one line per morpheme with the tab-delimited fields
/// `surface reading lemma pos ...`; fields past the fourth are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedMorpheme {
    /// The morpheme as it appears in the text.
    pub surface: String,
    /// The kana reading of the surface form.
    pub reading: String,
    /// The lemma (base form).
    pub lemma: String,
    /// The full hierarchical part-of-speech tag.
    pub pos: String,
}

impl TaggedMorpheme {
    /// Parses one tagged line.
    pub fn parse(line: &str) -> Result<Self, InvalidRecord> {
        let fields = line.split('\t').collect::<Vec<_>>();
        if fields.len() < 4 {
            return Err(InvalidRecord {
                line: line.to_string(),
                found: fields.len(),
            });
        }
        Ok(Self {
            surface: fields[0].to_string(),
            reading: fields[1].to_string(),
            lemma: fields[2].to_string(),
            pos: fields[3].to_string(),
        })
    }

    /// The outermost segment of the hierarchical part-of-speech tag.
    pub fn pos_category(&self) -> &str {
        self.pos.split(POS_DELIMITER).next().unwrap_or_default()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parses_chasen_record() {
        let morpheme = TaggedMorpheme::parse("布団\tフトン\t布団\t名詞-一般\t\t").unwrap();
        assert_eq!(morpheme.surface, "布団");
        assert_eq!(morpheme.reading, "フトン");
        assert_eq!(morpheme.lemma, "布団");
        assert_eq!(morpheme.pos, "名詞-一般");
    }

    #[test]
    fn ignores_extra_fields() {
        let morpheme =
            TaggedMorpheme::parse("吹っ飛んだ\tフットンダ\t吹っ飛ぶ\t動詞-自立\t五段・バ行\t連用タ接続").unwrap();
        assert_eq!(morpheme.lemma, "吹っ飛ぶ");
        assert_eq!(morpheme.pos, "動詞-自立");
    }

    #[test]
    fn rejects_short_record() {
        let err = TaggedMorpheme::parse("が\tガ\tが").unwrap_err();
        assert_eq!(err.found, 3);
        assert_eq!(err.line, "が\tガ\tが");
    }

    #[test]
    fn rejects_empty_line() {
        let err = TaggedMorpheme::parse("").unwrap_err();
        assert_eq!(err.found, 1);
    }

    #[test]
    fn pos_category_is_the_outermost_segment() {
        let morpheme = TaggedMorpheme::parse("が\tガ\tが\t助詞-格助詞-一般").unwrap();
        assert_eq!(morpheme.pos_category(), "助詞");
    }

    #[test]
    fn undelimited_pos_is_its_own_category() {
        let morpheme = TaggedMorpheme::parse("、\t、\t、\t記号").unwrap();
        assert_eq!(morpheme.pos_category(), "記号");
    }
}
