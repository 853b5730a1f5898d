//! Error Types
//!
//! This module defines the error types used throughout the crate.
//!
//! # Overview
//!
//! The main error type [`LoadError`] covers every way clip loading can fail:
//! malformed importer output and bone-palette capacity exhaustion. Playback
//! itself cannot fail; an [`Animation`](crate::Animation) value only exists
//! once its clip loaded successfully.
//!
//! # Usage
//!
//! Loading APIs return [`Result<T>`], an alias for
//! `std::result::Result<T, LoadError>`. Every failure is also logged at the
//! point of detection, so callers that discard the error still leave a trace.

use thiserror::Error;

use crate::animation::tracks::TrackKind;

/// The error type for animation clip loading.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The source clip carried no root hierarchy node.
    #[error("animation clip '{clip}' has no root hierarchy node")]
    MissingRootNode {
        /// Name of the offending clip.
        clip: String,
    },

    /// The source clip carried no animation channels.
    #[error("animation clip '{clip}' has no channels")]
    NoChannels {
        /// Name of the offending clip.
        clip: String,
    },

    /// A channel track carried no keyframes. Every track needs at least one
    /// sample to hold during playback.
    #[error("channel '{bone}' in clip '{clip}' has an empty {track} track")]
    EmptyTrack {
        /// Name of the offending clip.
        clip: String,
        /// Target bone of the offending channel.
        bone: String,
        /// Which of the three tracks was empty.
        track: TrackKind,
    },

    /// Registering another bone would overflow the skinning palette the
    /// vertex shader is compiled against.
    #[error("bone '{bone}' would exceed the skinning palette capacity of {max} bones")]
    CapacityExceeded {
        /// The bone name that did not fit.
        bone: String,
        /// The palette ceiling, [`MAX_BONES`](crate::MAX_BONES).
        max: usize,
    },
}

/// Alias for `Result<T, LoadError>`.
pub type Result<T> = std::result::Result<T, LoadError>;
