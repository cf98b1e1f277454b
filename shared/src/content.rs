//! Wire types for the content service and the derived verse collections.
//!
//! The service wraps every payload as `{ "code": 200, "status": "OK", "data": ... }`.
//! Chapter text comes in two editions fetched separately: the default
//! (Arabic) edition carries the metadata, the translation edition carries
//! only the translated `text` at the same positions.

use serde::{Deserialize, Serialize};

use crate::{PairingError, VERSE_LABEL};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub code: u16,
    #[serde(default)]
    pub status: String,
    pub data: T,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chapter {
    pub number: u32,
    pub name: String,
    pub english_name: String,
    pub number_of_ayahs: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChapterText {
    pub ayahs: Vec<Ayah>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ayah {
    pub number: u32,
    pub text: String,
    pub number_in_surah: u32,
    #[serde(default)]
    pub ruku: u32,
    #[serde(default)]
    pub sajda: SajdaMarker,
}

/// `sajda` is `false` on ordinary verses and an object on prostration verses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SajdaMarker {
    Flag(bool),
    Detail {
        id: u32,
        #[serde(default)]
        recommended: bool,
        #[serde(default)]
        obligatory: bool,
    },
}

impl SajdaMarker {
    #[must_use]
    pub const fn is_set(&self) -> bool {
        match self {
            Self::Flag(flag) => *flag,
            Self::Detail { .. } => true,
        }
    }
}

impl Default for SajdaMarker {
    fn default() -> Self {
        Self::Flag(false)
    }
}

/// One playable verse: Arabic text and metadata joined with its translation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerseRecord {
    pub arabic: String,
    pub global_number: u32,
    pub number_in_chapter: u32,
    pub section: u32,
    pub prostration: bool,
    pub translation: String,
}

/// Formats each ayah as a numbered display line, numbering by position.
#[must_use]
pub fn display_lines(ayahs: &[Ayah]) -> Vec<String> {
    ayahs
        .iter()
        .enumerate()
        .map(|(i, ayah)| format!("{VERSE_LABEL} {}: {}", i + 1, ayah.text))
        .collect()
}

/// Zips the Arabic edition with a translation edition by position.
///
/// Both editions must list the same verses in the same order; anything else
/// is rejected rather than paired.
pub fn pair_verses(arabic: Vec<Ayah>, translation: Vec<Ayah>) -> Result<Vec<VerseRecord>, PairingError> {
    if arabic.len() != translation.len() {
        return Err(PairingError::LengthMismatch {
            arabic: arabic.len(),
            translation: translation.len(),
        });
    }

    arabic
        .into_iter()
        .zip(translation)
        .enumerate()
        .map(|(position, (ayah, translated))| {
            if ayah.number_in_surah != translated.number_in_surah {
                return Err(PairingError::OrderMismatch {
                    position,
                    arabic: ayah.number_in_surah,
                    translation: translated.number_in_surah,
                });
            }
            Ok(VerseRecord {
                prostration: ayah.sajda.is_set(),
                arabic: ayah.text,
                global_number: ayah.number,
                number_in_chapter: ayah.number_in_surah,
                section: ayah.ruku,
                translation: translated.text,
            })
        })
        .collect()
}

#[must_use]
pub fn has_prostration(verses: &[VerseRecord]) -> bool {
    verses.iter().any(|v| v.prostration)
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn ayah(global: u32, in_surah: u32, text: &str) -> Ayah {
        Ayah {
            number: global,
            text: text.to_string(),
            number_in_surah: in_surah,
            ruku: 1,
            sajda: SajdaMarker::Flag(false),
        }
    }

    pub fn ayahs(count: u32) -> Vec<Ayah> {
        (1..=count).map(|n| ayah(n, n, &format!("text {n}"))).collect()
    }
}
