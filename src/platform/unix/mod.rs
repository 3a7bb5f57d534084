// glload/src/platform/unix/mod.rs

//! The GLX backend, for X11 windows.

pub(crate) mod context;
pub(crate) mod library;
