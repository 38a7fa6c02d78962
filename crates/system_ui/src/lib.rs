//! Shared UI primitive library for the desktop shell and its built-in apps.
//!
//! The crate owns the window chrome primitives, the `requestAnimationFrame` loop used by every
//! per-frame simulation, and a thin 2D canvas surface the games draw into. Loops and surfaces are
//! tied to the Leptos component that created them: stop the [`FrameLoop`] in `on_cleanup` and no
//! frame ever runs against a view that has been removed.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod canvas;
mod chrome;
mod frame_loop;

pub use canvas::{CanvasSurface, SurfaceError};
pub use chrome::{DockButton, FullScreenOverlay, WindowBody, WindowCloseButton, WindowFrame};
pub use frame_loop::{FrameControl, FrameLoop};
