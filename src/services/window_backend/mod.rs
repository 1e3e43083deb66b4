//! WindowBackend: responsibility and boundaries
//!
//! This module and its submodules are responsible ONLY for talking to the window
//! manager: listing windows, resolving process names and activating a window.
//! Sticky-window exclusion, query filtering and item building live in
//! `services::window_lister`.

mod dry_run;
mod r#trait;
mod wmctrl;

pub use self::r#trait::{create_window_backend, WindowBackend};
