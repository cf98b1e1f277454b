use tracing::{debug, info, warn};

use crate::capabilities::{unwrap_envelope, Capabilities};
use crate::content::{self, ApiEnvelope, Ayah, Chapter, ChapterText};
use crate::event::{CatalogTarget, Event};
use crate::highlight::{mark_active, SidebarEntry};
use crate::model::{BrowserPane, CatalogState, DetailContent, Model, PendingSelection};
use crate::pagination::Paginator;
use crate::sequencer::{Directive, Input};
use crate::view::{self, ViewModel};
use crate::{AppError, RequestToken, PROSTRATION_NOTICE};

#[derive(Default)]
pub struct App;

#[derive(Clone, Copy, Debug)]
enum Edition {
    Arabic,
    Translation,
}

impl App {
    fn request_catalog(model: &Model, caps: &Capabilities, target: CatalogTarget) {
        caps.http
            .get(model.config.catalog_url())
            .expect_json::<ApiEnvelope<Vec<Chapter>>>()
            .send(move |result| Event::CatalogLoaded {
                target,
                outcome: unwrap_envelope(result),
            });
    }

    fn request_ayahs<F>(caps: &Capabilities, url: String, make_event: F)
    where
        F: FnOnce(Result<Vec<Ayah>, AppError>) -> Event + Send + 'static,
    {
        caps.http
            .get(url)
            .expect_json::<ApiEnvelope<ChapterText>>()
            .send(move |result| make_event(unwrap_envelope(result).map(|text| text.ayahs)));
    }

    fn apply_catalog(model: &mut Model, target: CatalogTarget, outcome: Result<Vec<Chapter>, AppError>) {
        match (target, outcome) {
            (CatalogTarget::ChapterGrid, Ok(chapters)) => {
                info!(count = chapters.len(), "chapter grid catalog loaded");
                model.browser.catalog = CatalogState::Ready(chapters);
            }
            (CatalogTarget::ChapterGrid, Err(e)) => {
                warn!(error = %e, "chapter grid catalog failed");
                model.browser.catalog = CatalogState::Failed(e.clone());
                model.set_error(e);
            }
            (CatalogTarget::AudioSidebar, Ok(chapters)) => {
                info!(count = chapters.len(), "audio sidebar catalog loaded");
                model.player.sidebar_loading = false;
                model.player.sidebar = chapters.into_iter().map(SidebarEntry::from).collect();
                if let Some(current) = model.player.chapter {
                    mark_active(&mut model.player.sidebar, current);
                }
            }
            (CatalogTarget::AudioSidebar, Err(e)) => {
                warn!(error = %e, "audio sidebar catalog failed");
                model.player.sidebar_loading = false;
                model.set_error(e);
            }
        }
    }

    fn open_chapter(model: &mut Model, caps: &Capabilities, number: u32) {
        let title = model
            .browser
            .catalog
            .find(number)
            .map_or_else(|| number.to_string(), |c| c.name.clone());

        let token = model.browser.token.next();
        model.browser.token = token;
        model.browser.pane = BrowserPane::Detail {
            chapter: number,
            title,
            content: DetailContent::Loading,
        };

        debug!(chapter = number, %token, "opening chapter");
        Self::request_ayahs(caps, model.config.chapter_url(number), move |outcome| {
            Event::ChapterTextLoaded { token, outcome }
        });
    }

    /// Returns `true` when the detail pane changed.
    fn apply_chapter_text(model: &mut Model, token: RequestToken, outcome: Result<Vec<Ayah>, AppError>) -> bool {
        if token != model.browser.token {
            debug!(%token, current = %model.browser.token, "dropping stale chapter text");
            return false;
        }

        let BrowserPane::Detail { chapter, content, .. } = &mut model.browser.pane else {
            debug!(%token, "chapter text arrived after leaving the detail pane");
            return false;
        };

        *content = match outcome {
            Ok(ayahs) => {
                info!(chapter = *chapter, verses = ayahs.len(), "chapter text loaded");
                DetailContent::Loaded(Paginator::new(content::display_lines(&ayahs)))
            }
            Err(e) => {
                warn!(chapter = *chapter, error = %e, "chapter text failed");
                DetailContent::Failed(e)
            }
        };
        true
    }

    fn select_sidebar_chapter(model: &mut Model, caps: &Capabilities, number: u32) {
        let token = model.player.token.next();
        model.player.token = token;
        model.player.pending = Some(PendingSelection::new(token, number));
        mark_active(&mut model.player.sidebar, number);

        debug!(chapter = number, %token, "fetching verses for playback");
        Self::request_ayahs(caps, model.config.chapter_url(number), move |outcome| {
            Event::ArabicVersesLoaded { token, outcome }
        });
        Self::request_ayahs(caps, model.config.translation_url(number), move |outcome| {
            Event::TranslationVersesLoaded { token, outcome }
        });
    }

    /// Stores one edition of a pending selection and loads the chapter once
    /// both editions are in. Returns `true` when the view needs a render.
    fn receive_edition(
        model: &mut Model,
        caps: &Capabilities,
        token: RequestToken,
        edition: Edition,
        outcome: Result<Vec<Ayah>, AppError>,
    ) -> bool {
        let Some(pending) = model.player.pending.as_mut().filter(|p| p.token == token) else {
            debug!(%token, ?edition, "dropping stale verses");
            return false;
        };

        let ayahs = match outcome {
            Ok(ayahs) => ayahs,
            Err(e) => {
                warn!(chapter = pending.chapter, ?edition, error = %e, "verse fetch failed");
                model.player.pending = None;
                model.set_error(e);
                return true;
            }
        };

        match edition {
            Edition::Arabic => pending.arabic = Some(ayahs),
            Edition::Translation => pending.translation = Some(ayahs),
        }

        let chapter = pending.chapter;
        let Some((arabic, translation)) = pending.take_pair() else {
            return false;
        };
        model.player.pending = None;

        Self::load_chapter(model, caps, chapter, arabic, translation);
        true
    }

    fn load_chapter(model: &mut Model, caps: &Capabilities, chapter: u32, arabic: Vec<Ayah>, translation: Vec<Ayah>) {
        let verses = match content::pair_verses(arabic, translation) {
            Ok(verses) => verses,
            Err(e) => {
                warn!(chapter, error = %e, "translation does not line up");
                model.set_error(e.into());
                return;
            }
        };

        model.player.chapter = Some(chapter);
        mark_active(&mut model.player.sidebar, chapter);
        model.player.notice = if content::has_prostration(&verses) {
            PROSTRATION_NOTICE.to_string()
        } else {
            String::new()
        };

        info!(chapter, verses = verses.len(), "chapter loaded for playback");
        let directive = model.player.sequencer.load(verses);
        // An empty chapter leaves nothing to play; silence whatever verse the
        // element still holds.
        if directive == Directive::Nothing && model.player.audio_src.take().is_some() {
            caps.media.pause();
        }
        Self::apply_directive(model, caps, directive);
    }

    fn step(model: &mut Model, caps: &Capabilities, input: Input) -> bool {
        let before = model.player.sequencer.state();
        let directive = model.player.sequencer.apply(input);
        Self::apply_directive(model, caps, directive);
        directive != Directive::Nothing || before != model.player.sequencer.state()
    }

    fn apply_directive(model: &mut Model, caps: &Capabilities, directive: Directive) {
        match directive {
            Directive::Nothing => {}
            Directive::Render(index) => {
                let Some(verse) = model.player.sequencer.verse(index) else {
                    return;
                };
                let src = model.config.audio_url(verse.global_number);
                debug!(cursor = index, %src, "rendering verse");
                model.player.audio_src = Some(src.clone());
                caps.media.load(src);
                Self::request_playback(caps, index);
            }
            Directive::Resume => {
                if let Some(cursor) = model.player.sequencer.cursor() {
                    Self::request_playback(caps, cursor);
                }
            }
            Directive::Pause => caps.media.pause(),
        }
    }

    fn request_playback(caps: &Capabilities, cursor: usize) {
        caps.media
            .play(move |result| Event::PlaybackSettled { cursor, result });
    }
}

impl crux_core::App for App {
    type Event = Event;
    type Model = Model;
    type ViewModel = ViewModel;
    type Capabilities = Capabilities;

    fn update(&self, event: Event, model: &mut Model, caps: &Capabilities) {
        if event.is_user_initiated() {
            debug!(event = event.name(), "user action");
        }

        match event {
            Event::Noop => {}

            Event::AppStarted { surfaces } => {
                model.surfaces = surfaces;

                if surfaces.chapter_grid {
                    model.browser.catalog = CatalogState::Loading;
                    model.browser.pane = BrowserPane::Grid;
                    Self::request_catalog(model, caps, CatalogTarget::ChapterGrid);
                }
                if surfaces.audio_sidebar {
                    model.player.sidebar_loading = true;
                    Self::request_catalog(model, caps, CatalogTarget::AudioSidebar);
                }

                caps.render.render();
            }

            Event::ConfigureServices(config) => {
                match config.validate() {
                    Ok(config) => {
                        info!(api = %config.api_base, audio = %config.audio_base, "services configured");
                        model.config = config;
                    }
                    Err(e) => {
                        warn!(error = %e, "rejected service configuration");
                        model.set_error(e.into());
                    }
                }
                caps.render.render();
            }

            Event::DismissError => {
                model.clear_error();
                caps.render.render();
            }

            Event::CatalogLoaded { target, outcome } => {
                Self::apply_catalog(model, target, outcome);
                caps.render.render();
            }

            Event::ChapterCardSelected { number } => {
                Self::open_chapter(model, caps, number);
                caps.render.render();
            }

            Event::ChapterTextLoaded { token, outcome } => {
                if Self::apply_chapter_text(model, token, outcome) {
                    caps.render.render();
                }
            }

            Event::NextPage => {
                if model.browser.pages_mut().is_some_and(Paginator::next) {
                    caps.render.render();
                }
            }

            Event::PreviousPage => {
                if model.browser.pages_mut().is_some_and(Paginator::previous) {
                    caps.render.render();
                }
            }

            Event::BackToChapters => {
                model.browser.pane = BrowserPane::Grid;
                caps.render.render();
            }

            Event::SidebarChapterSelected { number } => {
                Self::select_sidebar_chapter(model, caps, number);
                caps.render.render();
            }

            Event::ArabicVersesLoaded { token, outcome } => {
                if Self::receive_edition(model, caps, token, Edition::Arabic, outcome) {
                    caps.render.render();
                }
            }

            Event::TranslationVersesLoaded { token, outcome } => {
                if Self::receive_edition(model, caps, token, Edition::Translation, outcome) {
                    caps.render.render();
                }
            }

            Event::NextVerse => {
                if Self::step(model, caps, Input::Next) {
                    caps.render.render();
                }
            }

            Event::PreviousVerse => {
                if Self::step(model, caps, Input::Previous) {
                    caps.render.render();
                }
            }

            Event::MediaEnded => {
                if Self::step(model, caps, Input::Ended) {
                    caps.render.render();
                }
            }

            Event::PlayPauseToggled => {
                if Self::step(model, caps, Input::Toggle) {
                    caps.render.render();
                }
            }

            Event::MediaDataLoaded => {
                if model.player.audio_src.is_some() && Self::step(model, caps, Input::DataLoaded) {
                    caps.render.render();
                }
            }

            Event::PlaybackSettled { cursor, result } => match result {
                Ok(_) => debug!(cursor, "playback started"),
                Err(e) => {
                    warn!(cursor, error = %e, "audio playback error");
                    if model.player.sequencer.cursor() == Some(cursor)
                        && Self::step(model, caps, Input::Rejected)
                    {
                        caps.render.render();
                    }
                }
            },
        }
    }

    fn view(&self, model: &Model) -> ViewModel {
        view::build(model)
    }
}
