//! What the shell renders. Every region of the page is rebuilt from here.

use serde::{Deserialize, Serialize};

use crate::content::{Chapter, VerseRecord};
use crate::highlight::SidebarEntry;
use crate::model::{BrowserPane, CatalogState, DetailContent, Model, PlayerModel};
use crate::pagination::Paginator;
use crate::{
    AppError, ErrorSeverity, LOADING_MESSAGE, NEXT_PAGE_LABEL, PREVIOUS_PAGE_LABEL,
    PROSTRATION_MARKER,
};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChapterCard {
    pub number: u32,
    pub title: String,
    pub subtitle: String,
}

impl From<&Chapter> for ChapterCard {
    fn from(c: &Chapter) -> Self {
        Self {
            number: c.number,
            title: format!("{}. ({})", c.number, c.name),
            subtitle: format!("Total Ayahs: {}", c.number_of_ayahs),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageView {
    pub lines: Vec<String>,
    pub page: usize,
    pub page_count: usize,
    /// Present only when the control should be shown.
    pub previous_label: Option<String>,
    pub next_label: Option<String>,
}

impl From<&Paginator> for PageView {
    fn from(pages: &Paginator) -> Self {
        Self {
            lines: pages.visible().to_vec(),
            page: pages.page(),
            page_count: pages.page_count(),
            previous_label: pages.has_previous().then(|| PREVIOUS_PAGE_LABEL.to_string()),
            next_label: pages.has_next().then(|| NEXT_PAGE_LABEL.to_string()),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DetailView {
    Loading { message: String },
    Page(PageView),
    Failed { message: String },
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BrowserView {
    Grid {
        cards: Vec<ChapterCard>,
        loading: bool,
    },
    Detail {
        title: String,
        body: DetailView,
    },
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SidebarItem {
    pub id: u32,
    pub title: String,
    pub subtitle: String,
    pub active: bool,
}

impl From<&SidebarEntry> for SidebarItem {
    fn from(e: &SidebarEntry) -> Self {
        Self {
            id: e.number,
            title: format!("{}. {}", e.number, e.name),
            subtitle: e.english_name.clone(),
            active: e.active,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct VerseView {
    pub arabic: String,
    pub number_in_chapter: u32,
    pub translation: String,
    pub section_line: String,
    pub prostration_marker: Option<String>,
}

impl From<&VerseRecord> for VerseView {
    fn from(v: &VerseRecord) -> Self {
        Self {
            arabic: v.arabic.clone(),
            number_in_chapter: v.number_in_chapter,
            translation: v.translation.clone(),
            section_line: format!("Ruku: {}", v.section),
            prostration_marker: v.prostration.then(|| PROSTRATION_MARKER.to_string()),
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PlayIcon {
    Play,
    Pause,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerView {
    pub sidebar: Vec<SidebarItem>,
    pub sidebar_loading: bool,
    pub verse: Option<VerseView>,
    pub notice: String,
    pub audio_src: Option<String>,
    pub play_icon: PlayIcon,
    pub can_go_previous: bool,
    pub can_go_next: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserFacingError {
    pub message: String,
    pub error_code: String,
    pub is_transient: bool,
}

impl From<&AppError> for UserFacingError {
    fn from(e: &AppError) -> Self {
        Self {
            message: e.user_facing_message(),
            error_code: e.code().to_string(),
            is_transient: e.severity == ErrorSeverity::Transient,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ViewModel {
    pub browser: BrowserView,
    pub player: PlayerView,
    pub error: Option<UserFacingError>,
}

#[must_use]
pub fn build(model: &Model) -> ViewModel {
    ViewModel {
        browser: build_browser(model),
        player: build_player(&model.player),
        error: model.active_error.as_ref().map(UserFacingError::from),
    }
}

fn build_browser(model: &Model) -> BrowserView {
    match &model.browser.pane {
        BrowserPane::Grid => BrowserView::Grid {
            cards: model.browser.catalog.chapters().iter().map(ChapterCard::from).collect(),
            loading: model.browser.catalog == CatalogState::Loading,
        },
        BrowserPane::Detail { title, content, .. } => BrowserView::Detail {
            title: title.clone(),
            body: match content {
                DetailContent::Loading => DetailView::Loading {
                    message: LOADING_MESSAGE.to_string(),
                },
                DetailContent::Loaded(pages) => DetailView::Page(PageView::from(pages)),
                DetailContent::Failed(e) => DetailView::Failed {
                    message: e.user_facing_message(),
                },
            },
        },
    }
}

fn build_player(player: &PlayerModel) -> PlayerView {
    let state = player.sequencer.state();
    let len = player.sequencer.verses().len();

    PlayerView {
        sidebar: player.sidebar.iter().map(SidebarItem::from).collect(),
        sidebar_loading: player.sidebar_loading,
        verse: player.sequencer.current().map(VerseView::from),
        notice: player.notice.clone(),
        audio_src: player.audio_src.clone(),
        play_icon: if state.is_playing() {
            PlayIcon::Pause
        } else {
            PlayIcon::Play
        },
        can_go_previous: state.cursor().is_some_and(|c| c > 0),
        can_go_next: state.cursor().is_some_and(|c| c + 1 < len),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_labels() {
        let card = ChapterCard::from(&Chapter {
            number: 112,
            name: "سُورَةُ الإِخْلَاصِ".into(),
            english_name: "Al-Ikhlaas".into(),
            number_of_ayahs: 4,
        });
        assert_eq!(card.title, "112. (سُورَةُ الإِخْلَاصِ)");
        assert_eq!(card.subtitle, "Total Ayahs: 4");
    }

    #[test]
    fn test_page_view_shows_only_available_controls() {
        let lines: Vec<String> = (1..=17).map(|n| n.to_string()).collect();
        let mut pages = Paginator::new(lines);

        let first = PageView::from(&pages);
        assert_eq!(first.lines.len(), 16);
        assert!(first.previous_label.is_none());
        assert_eq!(first.next_label.as_deref(), Some(NEXT_PAGE_LABEL));

        pages.next();
        let second = PageView::from(&pages);
        assert_eq!(second.lines, vec!["17".to_string()]);
        assert_eq!(second.previous_label.as_deref(), Some(PREVIOUS_PAGE_LABEL));
        assert!(second.next_label.is_none());
    }

    #[test]
    fn test_verse_view_marks_prostration() {
        let verse = VerseRecord {
            arabic: "arabic".into(),
            global_number: 1160,
            number_in_chapter: 15,
            section: 185,
            prostration: true,
            translation: "urdu".into(),
        };
        let view = VerseView::from(&verse);
        assert_eq!(view.section_line, "Ruku: 185");
        assert_eq!(view.prostration_marker.as_deref(), Some(PROSTRATION_MARKER));
    }

    #[test]
    fn test_default_model_view() {
        let view = build(&Model::default());
        assert_eq!(
            view.browser,
            BrowserView::Grid {
                cards: vec![],
                loading: false
            }
        );
        assert!(view.player.verse.is_none());
        assert!(view.player.notice.is_empty());
        assert_eq!(view.player.play_icon, PlayIcon::Play);
        assert!(view.error.is_none());
    }
}
