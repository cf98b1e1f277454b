//! Shell-facing capabilities.
//!
//! We use Crux's built-in Render capability directly because it provides
//! all necessary functionality for triggering view updates.

mod http;
mod media;

pub use self::http::{classify_http_error, unwrap_envelope, ValidatedUrl, MAX_URL_LENGTH};
pub use self::media::{Media, MediaError, MediaOperation, MediaOutput, MediaResult};

pub use crux_core::render::Render;
pub use crux_http::Http;

use crate::app::App;
use crate::event::Event;

#[derive(crux_core::macros::Effect)]
#[effect(app = "App")]
pub struct Capabilities {
    pub http: Http<Event>,
    pub render: Render<Event>,
    pub media: Media<Event>,
}
