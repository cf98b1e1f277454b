use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::capabilities::ValidatedUrl;
use crate::ConfigError;

pub const DEFAULT_API_BASE: &str = "https://api.alquran.cloud/v1";
pub const DEFAULT_TRANSLATION_EDITION: &str = "ur.jalandhry";
pub const DEFAULT_AUDIO_BASE: &str = "https://cdn.islamic.network/quran/audio";
pub const DEFAULT_AUDIO_BITRATE: u32 = 128;
pub const DEFAULT_RECITER: &str = "ar.alafasy";

/// Where chapter text and verse audio are fetched from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub api_base: String,
    pub translation_edition: String,
    pub audio_base: String,
    pub audio_bitrate: u32,
    pub reciter: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            translation_edition: DEFAULT_TRANSLATION_EDITION.to_string(),
            audio_base: DEFAULT_AUDIO_BASE.to_string(),
            audio_bitrate: DEFAULT_AUDIO_BITRATE,
            reciter: DEFAULT_RECITER.to_string(),
        }
    }
}

impl ServiceConfig {
    /// Checks every field and normalises both base URLs.
    pub fn validate(mut self) -> Result<Self, ConfigError> {
        let api = ValidatedUrl::new(&self.api_base).map_err(|reason| ConfigError::InvalidUrl {
            field: "api_base",
            reason,
        })?;
        let audio = ValidatedUrl::new(&self.audio_base).map_err(|reason| ConfigError::InvalidUrl {
            field: "audio_base",
            reason,
        })?;

        if self.translation_edition.trim().is_empty() {
            return Err(ConfigError::Empty {
                field: "translation_edition",
            });
        }
        if self.reciter.trim().is_empty() {
            return Err(ConfigError::Empty { field: "reciter" });
        }
        if self.audio_bitrate == 0 {
            return Err(ConfigError::ZeroBitrate);
        }

        debug!(api_host = api.host(), audio_host = audio.host(), "service hosts validated");
        self.api_base = api.as_str().to_string();
        self.audio_base = audio.as_str().to_string();
        Ok(self)
    }

    #[must_use]
    pub fn catalog_url(&self) -> String {
        format!("{}/surah", self.api_base)
    }

    #[must_use]
    pub fn chapter_url(&self, chapter: u32) -> String {
        format!("{}/surah/{chapter}", self.api_base)
    }

    #[must_use]
    pub fn translation_url(&self, chapter: u32) -> String {
        format!("{}/surah/{chapter}/{}", self.api_base, self.translation_edition)
    }

    #[must_use]
    pub fn audio_url(&self, global_number: u32) -> String {
        format!(
            "{}/{}/{}/{global_number}.mp3",
            self.audio_base, self.audio_bitrate, self.reciter
        )
    }
}
