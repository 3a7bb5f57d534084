// glload/src/platform/windows/mod.rs

//! The WGL backend, for Win32 windows.

pub(crate) mod context;
pub(crate) mod library;
