//! Core utilities shared by every Stride crate.
//!
//! - [`errors`]: the [`StrideError`] type and [`Result`] alias
//! - [`input`]: platform-agnostic keyboard and mouse state
//! - [`time`]: frame timer

pub mod errors;
pub mod input;
pub mod time;

pub use errors::{Result, StrideError};
pub use input::{ButtonState, Input, Key, MouseButton};
pub use time::Timer;
