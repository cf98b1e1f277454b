// lib.rs - Recitation core: chapter browser and verse-by-verse audio player

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod app;
pub mod capabilities;
pub mod config;
pub mod content;
pub mod event;
pub mod highlight;
pub mod model;
pub mod pagination;
pub mod sequencer;
pub mod view;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

pub use app::App;
pub use capabilities::{Capabilities, Effect};
pub use config::ServiceConfig;
pub use event::{CatalogTarget, Event, Surfaces};
pub use model::Model;
pub use view::ViewModel;

pub const PAGE_SIZE: usize = 16;
pub const VERSE_LABEL: &str = "آیت";
pub const PREVIOUS_PAGE_LABEL: &str = "⬅ پچھلا صفحہ";
pub const NEXT_PAGE_LABEL: &str = "اگلا صفحہ ➡";
pub const LOADING_MESSAGE: &str = "Loading...";
pub const PROSTRATION_NOTICE: &str = "This surah contains a Sajda ayah.";
pub const PROSTRATION_MARKER: &str = "Sajda Ayah";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorSeverity {
    Transient,
    Permanent,
    Fatal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    Network,
    NotFound,
    RateLimited,
    Validation,
    Deserialization,
    MisalignedTranslation,
    Configuration,
    Internal,
    Unknown,
}

impl ErrorKind {
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Network => "NETWORK_ERROR",
            Self::NotFound => "NOT_FOUND",
            Self::RateLimited => "RATE_LIMITED",
            Self::Validation => "VALIDATION_ERROR",
            Self::Deserialization => "DESERIALIZATION_ERROR",
            Self::MisalignedTranslation => "MISALIGNED_TRANSLATION",
            Self::Configuration => "CONFIGURATION_ERROR",
            Self::Internal => "INTERNAL_ERROR",
            Self::Unknown => "UNKNOWN_ERROR",
        }
    }

    #[must_use]
    pub const fn default_severity(self) -> ErrorSeverity {
        match self {
            Self::Network | Self::RateLimited => ErrorSeverity::Transient,

            Self::Deserialization | Self::Internal => ErrorSeverity::Fatal,

            Self::NotFound
            | Self::Validation
            | Self::MisalignedTranslation
            | Self::Configuration
            | Self::Unknown => ErrorSeverity::Permanent,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
    pub kind: ErrorKind,
    pub severity: ErrorSeverity,
    pub message: String,
    pub internal_message: Option<String>,
    pub context: HashMap<String, String>,
}

impl AppError {
    #[must_use]
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            severity: kind.default_severity(),
            message: message.into(),
            internal_message: None,
            context: HashMap::new(),
        }
    }

    #[must_use]
    pub fn with_internal(mut self, internal: impl Into<String>) -> Self {
        self.internal_message = Some(internal.into());
        self
    }

    #[must_use]
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub const fn code(&self) -> &'static str {
        self.kind.code()
    }

    #[must_use]
    pub fn user_facing_message(&self) -> String {
        match self.kind {
            ErrorKind::Network => {
                "Unable to reach the content service. Please check your connection.".into()
            }
            ErrorKind::NotFound => "The requested chapter could not be found.".into(),
            ErrorKind::RateLimited => {
                "Too many requests. Please wait a moment and try again.".into()
            }
            ErrorKind::Validation | ErrorKind::Configuration => self.message.clone(),
            ErrorKind::Deserialization => {
                "The content service returned data in an unexpected format.".into()
            }
            ErrorKind::MisalignedTranslation => {
                "The translation does not line up with the Arabic text for this chapter.".into()
            }
            ErrorKind::Internal | ErrorKind::Unknown => {
                "An unexpected error occurred. Please try again.".into()
            }
        }
    }

    #[must_use]
    pub fn from_http_status(status: u16, body: Option<&[u8]>) -> Self {
        let kind = match status {
            400 => ErrorKind::Validation,
            404 => ErrorKind::NotFound,
            429 => ErrorKind::RateLimited,
            500..=599 => ErrorKind::Internal,
            _ => ErrorKind::Unknown,
        };

        // The content service wraps failures in the same envelope as data,
        // with the reason in `data` as a plain string.
        let message = body
            .and_then(|b| serde_json::from_slice::<ApiErrorResponse>(b).ok())
            .and_then(|e| e.data)
            .unwrap_or_else(|| format!("HTTP error: {status}"));

        Self::new(kind, message).with_context("http_status", status.to_string())
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code(), self.message)?;
        if let Some(internal) = &self.internal_message {
            write!(f, " (internal: {internal})")?;
        }
        Ok(())
    }
}

impl std::error::Error for AppError {}

#[derive(Debug, Clone, Deserialize)]
struct ApiErrorResponse {
    #[serde(default)]
    data: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PairingError {
    #[error("translation has {translation} verses but the Arabic text has {arabic}")]
    LengthMismatch { arabic: usize, translation: usize },
    #[error("verse at position {position} is {arabic} in Arabic but {translation} in translation")]
    OrderMismatch {
        position: usize,
        arabic: u32,
        translation: u32,
    },
}

impl From<PairingError> for AppError {
    fn from(e: PairingError) -> Self {
        AppError::new(ErrorKind::MisalignedTranslation, e.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{field} is not a usable URL: {reason}")]
    InvalidUrl { field: &'static str, reason: String },
    #[error("{field} cannot be empty")]
    Empty { field: &'static str },
    #[error("audio bitrate must be greater than zero")]
    ZeroBitrate,
}

impl From<ConfigError> for AppError {
    fn from(e: ConfigError) -> Self {
        AppError::new(ErrorKind::Configuration, e.to_string())
    }
}

/// Identifies one in-flight chapter selection. Responses carrying an older
/// token belong to a superseded selection and are dropped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RequestToken(pub u64);

impl RequestToken {
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::fmt::Display for RequestToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}
