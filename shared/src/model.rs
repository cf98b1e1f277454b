use serde::{Deserialize, Serialize};

use crate::config::ServiceConfig;
use crate::content::{Ayah, Chapter};
use crate::event::Surfaces;
use crate::highlight::SidebarEntry;
use crate::pagination::Paginator;
use crate::sequencer::Sequencer;
use crate::{AppError, RequestToken};

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub enum CatalogState {
    #[default]
    NotRequested,
    Loading,
    Ready(Vec<Chapter>),
    Failed(AppError),
}

impl CatalogState {
    #[must_use]
    pub fn chapters(&self) -> &[Chapter] {
        match self {
            Self::Ready(chapters) => chapters,
            _ => &[],
        }
    }

    #[must_use]
    pub fn find(&self, number: u32) -> Option<&Chapter> {
        self.chapters().iter().find(|c| c.number == number)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub enum DetailContent {
    Loading,
    Loaded(Paginator),
    Failed(AppError),
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub enum BrowserPane {
    #[default]
    Grid,
    Detail {
        chapter: u32,
        title: String,
        content: DetailContent,
    },
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct BrowserModel {
    pub catalog: CatalogState,
    pub pane: BrowserPane,
    pub token: RequestToken,
}

impl BrowserModel {
    pub fn pages_mut(&mut self) -> Option<&mut Paginator> {
        match &mut self.pane {
            BrowserPane::Detail {
                content: DetailContent::Loaded(pages),
                ..
            } => Some(pages),
            _ => None,
        }
    }
}

/// Arabic and translation halves of one sidebar selection, joined by token.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PendingSelection {
    pub token: RequestToken,
    pub chapter: u32,
    pub arabic: Option<Vec<Ayah>>,
    pub translation: Option<Vec<Ayah>>,
}

impl PendingSelection {
    #[must_use]
    pub const fn new(token: RequestToken, chapter: u32) -> Self {
        Self {
            token,
            chapter,
            arabic: None,
            translation: None,
        }
    }

    /// Yields both halves once both have arrived.
    pub fn take_pair(&mut self) -> Option<(Vec<Ayah>, Vec<Ayah>)> {
        if self.arabic.is_none() || self.translation.is_none() {
            return None;
        }
        self.arabic.take().zip(self.translation.take())
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct PlayerModel {
    pub sidebar: Vec<SidebarEntry>,
    pub sidebar_loading: bool,
    pub chapter: Option<u32>,
    pub sequencer: Sequencer,
    pub pending: Option<PendingSelection>,
    pub token: RequestToken,
    pub notice: String,
    pub audio_src: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Model {
    pub config: ServiceConfig,
    pub surfaces: Surfaces,
    pub browser: BrowserModel,
    pub player: PlayerModel,
    pub active_error: Option<AppError>,
}

impl Model {
    pub fn set_error(&mut self, error: AppError) {
        self.active_error = Some(error);
    }

    pub fn clear_error(&mut self) {
        self.active_error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::fixtures::ayahs;

    #[test]
    fn test_pending_selection_waits_for_both_halves() {
        let mut pending = PendingSelection::new(RequestToken(3), 9);
        assert!(pending.take_pair().is_none());

        pending.translation = Some(ayahs(2));
        assert!(pending.take_pair().is_none());
        assert!(pending.translation.is_some());

        pending.arabic = Some(ayahs(2));
        let (arabic, translation) = pending.take_pair().unwrap();
        assert_eq!(arabic.len(), 2);
        assert_eq!(translation.len(), 2);
        assert!(pending.take_pair().is_none());
    }

    #[test]
    fn test_catalog_lookup_only_when_ready() {
        let chapter = Chapter {
            number: 36,
            name: "يس".into(),
            english_name: "Yaseen".into(),
            number_of_ayahs: 83,
        };
        assert!(CatalogState::Loading.find(36).is_none());
        let ready = CatalogState::Ready(vec![chapter.clone()]);
        assert_eq!(ready.find(36), Some(&chapter));
        assert!(ready.find(1).is_none());
    }
}
