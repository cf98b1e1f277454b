use crux_core::capability::{Capability, CapabilityContext, Operation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The page's single audio element.
pub struct Media<E> {
    context: CapabilityContext<MediaOperation, E>,
}

impl<Ev> Capability<Ev> for Media<Ev> {
    type Operation = MediaOperation;
    type MappedSelf<MappedEv> = Media<MappedEv>;

    fn map_event<F, NewEv>(&self, f: F) -> Self::MappedSelf<NewEv>
    where
        F: Fn(NewEv) -> Ev + Send + Sync + 'static,
        Ev: 'static,
        NewEv: 'static + Send,
    {
        Media::new(self.context.map_event(f))
    }
}

impl<E> Media<E>
where
    E: Send + 'static,
{
    pub fn new(context: CapabilityContext<MediaOperation, E>) -> Self {
        Self { context }
    }

    /// Points the element at a new source.
    pub fn load(&self, src: String) {
        let ctx = self.context.clone();
        self.context.spawn(async move {
            ctx.notify_shell(MediaOperation::Load { src }).await;
        });
    }

    /// Requests playback; the shell answers once the element accepted or refused.
    pub fn play<F>(&self, callback: F)
    where
        F: FnOnce(MediaResult) -> E + Send + 'static,
    {
        let ctx = self.context.clone();
        self.context.spawn(async move {
            let result = ctx.request_from_shell(MediaOperation::Play).await;
            ctx.update_app(callback(result));
        });
    }

    pub fn pause(&self) {
        let ctx = self.context.clone();
        self.context.spawn(async move {
            ctx.notify_shell(MediaOperation::Pause).await;
        });
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum MediaOperation {
    Load { src: String },
    Play,
    Pause,
}

impl Operation for MediaOperation {
    type Output = MediaResult;
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum MediaOutput {
    Playing,
}

#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum MediaError {
    #[error("playback not allowed: {reason}")]
    NotAllowed { reason: String },

    #[error("media could not be decoded: {reason}")]
    Decode { reason: String },

    #[error("no source set")]
    NoSource,
}

pub type MediaResult = Result<MediaOutput, MediaError>;
