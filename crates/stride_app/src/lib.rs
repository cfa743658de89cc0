//! Host shell for the character viewer.
//!
//! - [`FpsCounter`]: frame rate measurement for the window title
//! - [`winit`]: window, event loop and key translation (feature `winit`)

pub mod fps_counter;

#[cfg(feature = "winit")]
pub mod winit;

pub use fps_counter::FpsCounter;
#[cfg(feature = "winit")]
pub use crate::winit::App;
