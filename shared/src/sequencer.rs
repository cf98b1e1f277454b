//! Verse playback sequencing.
//!
//! The sequencer never touches the audio element itself. Each input yields a
//! [`Directive`] telling the caller what the element should do next, which
//! keeps every transition testable without a shell.

use serde::{Deserialize, Serialize};

use crate::content::VerseRecord;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum PlaybackState {
    /// No chapter loaded, or the loaded chapter has no verses.
    #[default]
    Idle,
    /// A verse is loaded into the audio element but not playing.
    Loaded { cursor: usize },
    /// A verse is loaded and playback has been requested.
    Playing { cursor: usize },
}

impl PlaybackState {
    #[must_use]
    pub const fn cursor(self) -> Option<usize> {
        match self {
            Self::Idle => None,
            Self::Loaded { cursor } | Self::Playing { cursor } => Some(cursor),
        }
    }

    #[must_use]
    pub const fn is_playing(self) -> bool {
        matches!(self, Self::Playing { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// A new verse list replaced the previous one.
    Loaded,
    Next,
    Previous,
    /// The audio element finished the current verse.
    Ended,
    Toggle,
    /// The audio element reports media data for its current source.
    DataLoaded,
    /// The audio element refused to start playback.
    Rejected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    Nothing,
    /// Show verse `i`, point the audio element at it and start playback.
    Render(usize),
    Resume,
    Pause,
}

/// Pure transition function over a verse list of length `len`.
#[must_use]
pub fn transition(state: PlaybackState, len: usize, input: Input) -> (PlaybackState, Directive) {
    use PlaybackState::{Idle, Loaded, Playing};

    match (state, input) {
        (_, Input::Loaded) => {
            if len == 0 {
                (Idle, Directive::Nothing)
            } else {
                (Playing { cursor: 0 }, Directive::Render(0))
            }
        }

        (Idle, _) => (Idle, Directive::Nothing),

        (Loaded { cursor } | Playing { cursor }, Input::Next) => {
            if cursor + 1 < len {
                (Playing { cursor: cursor + 1 }, Directive::Render(cursor + 1))
            } else {
                (state, Directive::Nothing)
            }
        }

        (Loaded { cursor } | Playing { cursor }, Input::Previous) => {
            if cursor > 0 {
                (Playing { cursor: cursor - 1 }, Directive::Render(cursor - 1))
            } else {
                (state, Directive::Nothing)
            }
        }

        (Loaded { cursor } | Playing { cursor }, Input::Ended) => {
            if cursor + 1 < len {
                (Playing { cursor: cursor + 1 }, Directive::Render(cursor + 1))
            } else {
                // Parked on the last verse; the source stays as it is.
                (Loaded { cursor }, Directive::Nothing)
            }
        }

        (Playing { cursor }, Input::Toggle) => (Loaded { cursor }, Directive::Pause),
        (Loaded { cursor }, Input::Toggle) => (Playing { cursor }, Directive::Resume),

        (Loaded { cursor } | Playing { cursor }, Input::DataLoaded) => {
            (Playing { cursor }, Directive::Resume)
        }

        (Playing { cursor }, Input::Rejected) => (Loaded { cursor }, Directive::Nothing),
        (Loaded { .. }, Input::Rejected) => (state, Directive::Nothing),
    }
}

/// Owns the verse list of the selected chapter together with the playback state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sequencer {
    verses: Vec<VerseRecord>,
    state: PlaybackState,
}

impl Sequencer {
    /// Replaces the verse list and rewinds to the first verse.
    pub fn load(&mut self, verses: Vec<VerseRecord>) -> Directive {
        self.verses = verses;
        self.apply(Input::Loaded)
    }

    pub fn apply(&mut self, input: Input) -> Directive {
        let (state, directive) = transition(self.state, self.verses.len(), input);
        self.state = state;
        directive
    }

    #[must_use]
    pub const fn state(&self) -> PlaybackState {
        self.state
    }

    #[must_use]
    pub fn cursor(&self) -> Option<usize> {
        self.state.cursor()
    }

    #[must_use]
    pub fn verses(&self) -> &[VerseRecord] {
        &self.verses
    }

    #[must_use]
    pub fn verse(&self, index: usize) -> Option<&VerseRecord> {
        self.verses.get(index)
    }

    #[must_use]
    pub fn current(&self) -> Option<&VerseRecord> {
        self.cursor().and_then(|i| self.verse(i))
    }
}
