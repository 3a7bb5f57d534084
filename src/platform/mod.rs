// glload/src/platform/mod.rs

//! Platform-specific backends.
//!
//! The mock backend is compiled unconditionally; it is how the crate is
//! tested on machines with no GL driver at all.

pub mod mock;

#[cfg(glx_backend)]
pub mod unix;

#[cfg(wgl_backend)]
pub mod windows;
