use serde::{Deserialize, Serialize};

use crate::capabilities::MediaResult;
use crate::config::ServiceConfig;
use crate::content::{Ayah, Chapter};
use crate::{AppError, RequestToken};

/// Which containers the hosting page actually has.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Surfaces {
    pub chapter_grid: bool,
    pub audio_sidebar: bool,
}

impl Surfaces {
    #[must_use]
    pub const fn all() -> Self {
        Self {
            chapter_grid: true,
            audio_sidebar: true,
        }
    }
}

/// The two consumers of the chapter catalog. Each requests it on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogTarget {
    ChapterGrid,
    AudioSidebar,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    Noop,

    AppStarted {
        surfaces: Surfaces,
    },
    ConfigureServices(ServiceConfig),
    DismissError,

    CatalogLoaded {
        target: CatalogTarget,
        outcome: Result<Vec<Chapter>, AppError>,
    },

    // Chapter browser
    ChapterCardSelected {
        number: u32,
    },
    ChapterTextLoaded {
        token: RequestToken,
        outcome: Result<Vec<Ayah>, AppError>,
    },
    NextPage,
    PreviousPage,
    BackToChapters,

    // Audio player
    SidebarChapterSelected {
        number: u32,
    },
    ArabicVersesLoaded {
        token: RequestToken,
        outcome: Result<Vec<Ayah>, AppError>,
    },
    TranslationVersesLoaded {
        token: RequestToken,
        outcome: Result<Vec<Ayah>, AppError>,
    },
    NextVerse,
    PreviousVerse,
    PlayPauseToggled,
    MediaEnded,
    MediaDataLoaded,
    PlaybackSettled {
        cursor: usize,
        result: MediaResult,
    },
}

impl Event {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Noop => "noop",
            Self::AppStarted { .. } => "app_started",
            Self::ConfigureServices(_) => "configure_services",
            Self::DismissError => "dismiss_error",
            Self::CatalogLoaded { .. } => "catalog_loaded",
            Self::ChapterCardSelected { .. } => "chapter_card_selected",
            Self::ChapterTextLoaded { .. } => "chapter_text_loaded",
            Self::NextPage => "next_page",
            Self::PreviousPage => "previous_page",
            Self::BackToChapters => "back_to_chapters",
            Self::SidebarChapterSelected { .. } => "sidebar_chapter_selected",
            Self::ArabicVersesLoaded { .. } => "arabic_verses_loaded",
            Self::TranslationVersesLoaded { .. } => "translation_verses_loaded",
            Self::NextVerse => "next_verse",
            Self::PreviousVerse => "previous_verse",
            Self::PlayPauseToggled => "play_pause_toggled",
            Self::MediaEnded => "media_ended",
            Self::MediaDataLoaded => "media_data_loaded",
            Self::PlaybackSettled { .. } => "playback_settled",
        }
    }

    #[must_use]
    pub const fn is_user_initiated(&self) -> bool {
        matches!(
            self,
            Self::ChapterCardSelected { .. }
                | Self::NextPage
                | Self::PreviousPage
                | Self::BackToChapters
                | Self::SidebarChapterSelected { .. }
                | Self::NextVerse
                | Self::PreviousVerse
                | Self::PlayPauseToggled
                | Self::DismissError
        )
    }
}

impl Default for Event {
    fn default() -> Self {
        Self::Noop
    }
}
