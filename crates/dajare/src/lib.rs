//! Provides all of dajare's core functionality: transcribing kana readings
//! into moras, modeling tagged words and sentences, and scoring sentences
//! for phonetic-pun likeness.

pub mod lexicon;
pub mod phonetics;
pub mod score;
