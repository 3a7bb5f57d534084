//! Runtime loading of OpenGL.
//!
//! This crate opens the platform's OpenGL runtime at, well, runtime, resolves
//! the several hundred GL entry points by name, and can create a native
//! rendering context bound to a window handle you supply. It deliberately does
//! *not* create windows or run an event loop; crates like winit, SDL, and GLFW
//! own that territory. Hand `glload` a native window handle and it takes care
//! of the rest: pixel format negotiation, context creation and activation,
//! function resolution, buffer swaps, and symmetric teardown.
//!
//! The entry point is [`GlLoader`]. A typical session:
//!
//! 1. `GlLoader::new()` then [`GlLoader::load`] to open the GL runtime;
//! 2. [`GlLoader::create_context`] with a [`NativeWindow`];
//! 3. [`GlLoader::load_functions`] to fill every function slot;
//! 4. render through [`GlLoader::gl`], [`GlLoader::present`] to swap;
//! 5. [`GlLoader::destroy_context`] and [`GlLoader::unload`].
//!
//! Function resolution is soft-failing by design: GL drivers legitimately
//! omit entry points they do not implement, so a missed symbol leaves its
//! slot unloaded instead of aborting the whole load. Query
//! [`GlLoader::is_function_available`] (or [`Capabilities`]) before calling
//! into anything newer than the baseline.
//!
//! Everything here is single-threaded by design. Native GL contexts are
//! thread-affine ("current" is a per-thread OS property), and the loader
//! performs no internal locking; callers own the serialization. Resolved
//! function pointers stay valid only while the context that was current
//! during resolution is alive and no unload races the call.

#[macro_use]
extern crate bitflags;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;

pub mod error;
pub use crate::error::{Error, WindowingApiError};

mod info;
pub use crate::info::{GLProfile, GLVersion};

mod context;
pub use crate::context::{Context, ContextAttributeFlags, ContextAttributes, ContextID};
pub use crate::context::NativeWindow;

mod library;

mod loader;
pub use crate::loader::GlLoader;

pub mod gl;
pub use crate::gl::{Capabilities, Gl};

pub mod platform;
pub use crate::platform::mock::{MockDriver, MockWindow};

#[cfg(test)]
mod tests;
