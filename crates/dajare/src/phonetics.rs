//! Converts kana readings into mora sequences.

use dajare_core::mecab_types::{PARTICLE_POS, SYMBOL_POS};
use serde::Serialize;

// the sokuon and the moraic nasal get fixed marker units so that the
// long-vowel rule composes with them the same way as with ordinary kana
const GEMINATE_UNIT: &str = "xtsu";
const NASAL_UNIT: &str = "n";
const PROLONGED_MARK: char = 'ー';

/// A single Japanese phonological timing unit.
///
/// Ordinary moras carry an optional consonant and a vowel. The sokuon and
/// the syllabic nasal count as moras of their own without a vowel, and the
/// placeholder stands in for symbol tokens and blanked-out positions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Mora {
    /// An ordinary mora. No consonant means a bare vowel.
    Plain {
        consonant: Option<String>,
        vowel: char,
    },
    /// The doubled-consonant placeholder (っ).
    Geminate,
    /// The moraic nasal (ん).
    Nasal,
    /// Stand-in for symbol tokens and blanked-out positions.
    Placeholder,
}

impl Mora {
    /// Parses one romanized unit.
    ///
    /// A multi-letter unit splits into consonant and trailing vowel, a
    /// one-letter unit is a bare vowel. An empty unit becomes a placeholder
    /// so that positional alignment is preserved rather than dropped.
    pub fn from_romanized(unit: &str) -> Self {
        if unit == GEMINATE_UNIT {
            return Self::Geminate;
        }
        if unit == NASAL_UNIT {
            return Self::Nasal;
        }
        let mut chars = unit.chars();
        match chars.next_back() {
            Some(vowel) => {
                let consonant = chars.as_str();
                Self::Plain {
                    consonant: (!consonant.is_empty()).then(|| consonant.to_string()),
                    vowel,
                }
            }
            None => Self::Placeholder,
        }
    }

    pub fn is_vowel_only(&self) -> bool {
        matches!(self, Self::Plain { consonant: None, .. })
    }

    pub fn is_geminate(&self) -> bool {
        matches!(self, Self::Geminate)
    }

    pub fn is_nasal(&self) -> bool {
        matches!(self, Self::Nasal)
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder)
    }

    /// Checks the vowel gate between two moras.
    ///
    /// Ordinary moras must agree on the vowel exactly, the vowelless
    /// sokuon and nasal agree with each other, and a placeholder agrees
    /// only with another placeholder.
    pub fn vowel_matches(&self, other: &Mora) -> bool {
        match (self, other) {
            (Self::Plain { vowel: a, .. }, Self::Plain { vowel: b, .. }) => a == b,
            (Self::Geminate | Self::Nasal, Self::Geminate | Self::Nasal) => true,
            (Self::Placeholder, Self::Placeholder) => true,
            _ => false,
        }
    }

    /// Checks whether the consonant positions of two moras agree.
    pub fn consonant_matches(&self, other: &Mora) -> bool {
        match (self, other) {
            (Self::Plain { consonant: a, .. }, Self::Plain { consonant: b, .. }) => a == b,
            (Self::Geminate, Self::Geminate)
            | (Self::Nasal, Self::Nasal)
            | (Self::Placeholder, Self::Placeholder) => true,
            _ => false,
        }
    }
}

/// Converts one word's kana reading into its mora sequence.
///
/// The lemma and part-of-speech category are needed for two irregular
/// cases: symbol tokens transcribe to a single placeholder regardless of
/// their reading, and the topic particle は is pronounced わ rather than
/// read as written. The returned sequence is never empty.
pub fn reading_to_moras(reading: &str, lemma: &str, pos_category: &str) -> Vec<Mora> {
    if pos_category == SYMBOL_POS {
        return vec![Mora::Placeholder];
    }
    if lemma == "は" && pos_category == PARTICLE_POS {
        return vec![Mora::from_romanized("wa")];
    }
    let moras = romanized_units(reading)
        .iter()
        .map(|unit| Mora::from_romanized(unit))
        .collect::<Vec<_>>();
    if moras.is_empty() {
        vec![Mora::Placeholder]
    } else {
        moras
    }
}

/// Splits a kana reading into romanized units, one per mora.
///
/// A small glide merges with the immediately preceding kana into one unit.
/// The prolonged sound mark emits the preceding kana's unit followed by a
/// unit repeating its trailing letter, so a long vowel always yields two
/// units. Every other kana romanizes alone, and the final character is
/// never dropped.
fn romanized_units(reading: &str) -> Vec<String> {
    let kanas = reading.chars().collect::<Vec<_>>();
    let mut units = Vec::with_capacity(kanas.len());
    let mut i = 0;
    while i < kanas.len() {
        let kana = kanas[i];
        match kanas.get(i + 1) {
            Some(&glide) if is_small_glide(glide) => {
                units.push(romanize(&format!("{kana}{glide}")));
                i += 2;
            }
            Some(&PROLONGED_MARK) => {
                let unit = romanize(&kana.to_string());
                let trailing = unit.chars().last().map(String::from).unwrap_or_default();
                units.push(unit);
                units.push(trailing);
                i += 2;
            }
            _ => {
                units.push(romanize(&kana.to_string()));
                i += 1;
            }
        }
    }
    units
}

fn romanize(kana: &str) -> String {
    use wana_kana::ConvertJapanese;
    match kana {
        "ッ" | "っ" => GEMINATE_UNIT.to_string(),
        "ン" | "ん" => NASAL_UNIT.to_string(),
        _ => kana.to_romaji(),
    }
}

fn is_small_glide(kana: char) -> bool {
    matches!(kana, 'ャ' | 'ュ' | 'ョ' | 'ヮ' | 'ゃ' | 'ゅ' | 'ょ' | 'ゎ')
}
