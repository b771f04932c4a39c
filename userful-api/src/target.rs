//! Playback target addressing and play options
//!
//! The management API addresses playback targets through three path
//! families: `zones`, `mirrorgroups` and `displays`. Name-based addressing
//! (`/byname/{name}`) is only defined for zones and mirrorgroups; id-based
//! addressing covers all three families.

use crate::error::{ApiError, Result};
use serde_json::{Map, Value};

/// Display-type values valid for name-based playVideoList addressing
pub const NAME_ADDRESSABLE: &[&str] = &["zones", "mirrorgroups"];

/// Display-type values valid for id-based playVideoList addressing
pub const ID_ADDRESSABLE: &[&str] = &["displays", "zones", "mirrorgroups"];

/// Check a display-type value against an allowed set
///
/// Runs before any network call; the error carries the rejected value and
/// the full allowed set.
pub(crate) fn validate_display_type(value: &str, allowed: &'static [&'static str]) -> Result<()> {
    if allowed.contains(&value) {
        Ok(())
    } else {
        Err(ApiError::Validation {
            parameter: "display_type",
            value: value.to_string(),
            allowed,
        })
    }
}

/// Options for a playVideoList request
///
/// Every field is optional and an omitted field is *not* sent: the remote
/// service applies its own defaults (`queue=false`, `repeat=false`,
/// `slideshowInterval=10`; the interval's semantics are undocumented
/// upstream). `extra` holds any further option keys the remote recognizes
/// and is merged into the request body verbatim.
#[derive(Debug, Clone, Default)]
pub struct PlayOptions {
    queue: Option<bool>,
    repeat: Option<bool>,
    slideshow_interval: Option<u32>,
    extra: Map<String, Value>,
}

impl PlayOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Suppress immediate playback until current media finishes
    pub fn queue(mut self, queue: bool) -> Self {
        self.queue = Some(queue);
        self
    }

    /// Loop the video list
    pub fn repeat(mut self, repeat: bool) -> Self {
        self.repeat = Some(repeat);
        self
    }

    pub fn slideshow_interval(mut self, interval: u32) -> Self {
        self.slideshow_interval = Some(interval);
        self
    }

    /// Pass an arbitrary option key through to the remote service
    pub fn option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Build the playVideoList request body: set options plus `videolist`
    pub(crate) fn into_body(&self, video_list: &[&str]) -> Map<String, Value> {
        let mut body = self.extra.clone();
        if let Some(queue) = self.queue {
            body.insert("queue".to_string(), queue.into());
        }
        if let Some(repeat) = self.repeat {
            body.insert("repeat".to_string(), repeat.into());
        }
        if let Some(interval) = self.slideshow_interval {
            body.insert("slideshowInterval".to_string(), interval.into());
        }
        body.insert(
            "videolist".to_string(),
            Value::Array(video_list.iter().map(|v| Value::from(*v)).collect()),
        );
        body
    }
}
