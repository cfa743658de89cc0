//! Animation playback.
//!
//! A [`AnimationClip`] is an immutable, named piece of pre-authored motion.
//! Binding it to an [`AnimationMixer`] yields an [`ActionHandle`] whose
//! [`AnimationAction`] carries the playback state: time, loop policy, fades.
//! [`AnimationController`] sits on top and owns the "one active clip"
//! crossfade policy.

pub mod action;
pub mod clip;
pub mod controller;
pub mod mixer;

pub use action::{ActionEvent, AnimationAction, LoopMode};
pub use clip::AnimationClip;
pub use controller::{AnimationController, AnimationState, DEFAULT_CROSSFADE};
pub use mixer::{ActionHandle, AnimationMixer, MixerEvent, MixerEvents};
