//! Scores sentences for how strongly they resemble a dajare (phonetic pun).

use crate::{lexicon::Sentence, phonetics::Mora};
use dajare_core::ContentWordSet;

/// Reference threshold above which a score is conventionally classified as
/// a pun. The threshold is applied by callers; the scorer never does.
pub const PUN_THRESHOLD: f64 = 0.66;

/// The shared stand-in for a blanked-out seed position.
const SEED_BLANK: Mora = Mora::Placeholder;

/// Scores sentences for phonetic self-similarity: how strongly some content
/// word's mora pattern is echoed elsewhere in the sentence, allowing a
/// small set of phonetic alternations.
#[derive(Debug, Clone)]
pub struct PunScorer {
    content_words: ContentWordSet,
}

impl PunScorer {
    pub fn new(content_words: ContentWordSet) -> Self {
        Self { content_words }
    }

    /// Scores one sentence in `[0, 1]`.
    ///
    /// Every content word with more than one mora is tried as the seed;
    /// the result is the best sliding-window match of any alternation
    /// variant of any seed against the rest of the sentence, or 0 when no
    /// word is an eligible seed.
    pub fn score(&self, sentence: &Sentence) -> f64 {
        tracing::debug!("scoring {sentence}");
        let words = sentence.removed_symbol();
        let mut score = 0.0_f64;
        for (i, seed) in words.iter().enumerate() {
            if !seed.is_content_word(&self.content_words) || seed.moras().len() <= 1 {
                continue;
            }
            let stream = blanked_stream(&words, i);
            let mut best = window_match(&stream, seed.moras());
            for alternation in Alternation::enumerate(seed.moras()) {
                let pattern = alternation.apply(seed.moras());
                best = best.max(window_match(&stream, &pattern));
            }
            tracing::trace!("seed {} scored {best}", seed.surface());
            score = score.max(best);
        }
        score
    }
}

// the seed's own moras are replaced by a single placeholder, preserving
// positional spacing while preventing the seed from matching itself
fn blanked_stream(words: &Sentence, seed_idx: usize) -> Vec<Mora> {
    let mut stream = Vec::new();
    for (i, word) in words.iter().enumerate() {
        if i == seed_idx {
            stream.push(SEED_BLANK);
        } else {
            stream.extend_from_slice(word.moras());
        }
    }
    stream
}

/// One structural alternation of a seed pattern.
///
/// Insertions apply after every position. Duplication applies only to
/// vowel-only moras and deletion only to the sokuon and nasal moras; the
/// asymmetry reflects the alternations seen in Japanese wordplay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Alternation {
    InsertGeminate(usize),
    InsertNasal(usize),
    DuplicateVowel(usize),
    DeleteSpecial(usize),
}

impl Alternation {
    /// Enumerates every alternation applicable to the seed pattern.
    fn enumerate(seed: &[Mora]) -> Vec<Alternation> {
        let mut alternations = Vec::new();
        for (k, mora) in seed.iter().enumerate() {
            alternations.push(Self::InsertGeminate(k));
            alternations.push(Self::InsertNasal(k));
            if mora.is_vowel_only() {
                alternations.push(Self::DuplicateVowel(k));
            } else if mora.is_geminate() || mora.is_nasal() {
                alternations.push(Self::DeleteSpecial(k));
            }
        }
        alternations
    }

    /// Produces the altered pattern as a fresh mora sequence.
    fn apply(self, seed: &[Mora]) -> Vec<Mora> {
        let mut pattern = seed.to_vec();
        match self {
            Self::InsertGeminate(k) => pattern.insert(k + 1, Mora::Geminate),
            Self::InsertNasal(k) => pattern.insert(k + 1, Mora::Nasal),
            Self::DuplicateVowel(k) => pattern.insert(k + 1, seed[k].clone()),
            Self::DeleteSpecial(k) => {
                pattern.remove(k);
            }
        }
        pattern
    }
}

/// Best consonant-agreement ratio of `pattern` over every contiguous
/// window of `stream` that passes the vowel gate.
///
/// The gate is strict: a window with any vowel mismatch is excluded from
/// the maximum outright rather than scored as zero. A pattern of a single
/// mora cannot anchor a pun and always scores zero.
fn window_match(stream: &[Mora], pattern: &[Mora]) -> f64 {
    if pattern.len() <= 1 {
        return 0.0;
    }
    let mut best = None::<f64>;
    for window in stream.windows(pattern.len()) {
        let vowels_match = window
            .iter()
            .zip(pattern)
            .all(|(window_mora, pattern_mora)| window_mora.vowel_matches(pattern_mora));
        if !vowels_match {
            continue;
        }
        let consonant_hits = window
            .iter()
            .zip(pattern)
            .filter(|(window_mora, pattern_mora)| window_mora.consonant_matches(pattern_mora))
            .count();
        let window_score = consonant_hits as f64 / pattern.len() as f64;
        best = Some(best.map_or(window_score, |b| b.max(window_score)));
    }
    best.unwrap_or(0.0)
}
