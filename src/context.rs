// glload/src/context.rs
//
//! GL context records and context-creation parameters.

use crate::info::{GLProfile, GLVersion};
use crate::platform;

#[cfg(feature = "gl-raw-window-handle")]
use crate::error::Error;

use std::sync::Mutex;
use std::thread;

#[cfg(glx_backend)]
use std::os::raw::c_ulong;
#[cfg(glx_backend)]
use x11_dl::xlib::Display;
#[cfg(wgl_backend)]
use winapi::shared::windef::{HDC, HWND};

/// A unique identifier for a context created by a [`crate::GlLoader`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContextID(pub u64);

lazy_static! {
    pub(crate) static ref CREATE_CONTEXT_MUTEX: Mutex<ContextID> = Mutex::new(ContextID(0));
}

bitflags! {
    /// Context framebuffer attributes.
    pub struct ContextAttributeFlags: u8 {
        /// Request an 8-bit alpha channel.
        const ALPHA = 0x01;
        /// Request a 24-bit depth buffer.
        const DEPTH = 0x02;
        /// Request an 8-bit stencil buffer.
        const STENCIL = 0x04;
        /// Request a forward-compatible context. Accepted but not honored by
        /// the legacy creation path; see [`crate::GlLoader::create_context`].
        const FORWARD_COMPATIBLE = 0x08;
    }
}

/// Everything a caller can request about the context to be created.
///
/// Pure input value; nothing here is owned.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContextAttributes {
    /// The requested GL version.
    pub version: GLVersion,
    /// The requested profile.
    pub profile: GLProfile,
    /// Framebuffer and compatibility flags.
    pub flags: ContextAttributeFlags,
}

impl Default for ContextAttributes {
    /// Double-buffered RGBA with alpha and depth, any GL version, legacy
    /// profile. This matches what the simple creation path actually delivers.
    fn default() -> ContextAttributes {
        ContextAttributes {
            version: GLVersion::new(1, 1),
            profile: GLProfile::Legacy,
            flags: ContextAttributeFlags::ALPHA | ContextAttributeFlags::DEPTH,
        }
    }
}

/// A native window handle, plus (optionally) an already-resolved device
/// context, handed in by the windowing collaborator.
///
/// The window itself is always borrowed; this crate never creates or destroys
/// windows. A supplied device context (or display connection) is borrowed
/// too, and the loader will not release it. When one is *not* supplied, the
/// loader acquires its own during context creation and releases it at
/// destruction time.
pub enum NativeWindow {
    /// A Win32 window, with an optional caller-owned `HDC`.
    #[cfg(wgl_backend)]
    Win32 {
        /// The window handle. Borrowed.
        window: HWND,
        /// A device context for the window, if the caller already has one.
        device_context: Option<HDC>,
    },
    /// An X11 window, with an optional caller-owned display connection.
    #[cfg(glx_backend)]
    X11 {
        /// An open Xlib display, if the caller already has one.
        display: Option<*mut Display>,
        /// The X window ID. Borrowed.
        window: c_ulong,
    },
    /// A window belonging to the deterministic mock backend.
    Mock(platform::mock::MockWindow),
}

#[cfg(feature = "gl-raw-window-handle")]
impl NativeWindow {
    /// Builds a `NativeWindow` from `raw-window-handle` 0.6 handles.
    ///
    /// Only handle variants matching the compiled-in backend are accepted.
    pub fn from_raw_handles(
        window: rwh_06::RawWindowHandle,
        display: rwh_06::RawDisplayHandle,
    ) -> Result<NativeWindow, Error> {
        match (window, display) {
            #[cfg(wgl_backend)]
            (rwh_06::RawWindowHandle::Win32(window_handle), _) => Ok(NativeWindow::Win32 {
                window: window_handle.hwnd.get() as HWND,
                device_context: None,
            }),
            #[cfg(glx_backend)]
            (
                rwh_06::RawWindowHandle::Xlib(window_handle),
                rwh_06::RawDisplayHandle::Xlib(display_handle),
            ) => Ok(NativeWindow::X11 {
                display: display_handle.display.map(|display| display.as_ptr() as *mut Display),
                window: window_handle.window,
            }),
            _ => Err(Error::InvalidNativeWindow),
        }
    }
}

/// The per-platform payload of a live context.
///
/// An explicit tag instead of `#[cfg]`-switched struct fields, so that the
/// mock backend coexists with the native one in a single compiled artifact.
pub(crate) enum NativeContext {
    /// No context: never created, or already destroyed.
    None,
    #[cfg(wgl_backend)]
    Wgl(platform::windows::context::WglContext),
    #[cfg(glx_backend)]
    Glx(platform::unix::context::GlxContext),
    Mock(platform::mock::MockContext),
}

/// A native rendering context created by [`crate::GlLoader::create_context`].
///
/// Contexts must be destroyed explicitly with
/// [`crate::GlLoader::destroy_context`]; dropping a live context panics.
pub struct Context {
    pub(crate) native: NativeContext,
    pub(crate) id: ContextID,
}

impl Context {
    /// Returns this context's loader-unique ID.
    #[inline]
    pub fn id(&self) -> ContextID {
        self.id
    }

    /// True while the context holds live native handles.
    #[inline]
    pub fn is_valid(&self) -> bool {
        match self.native {
            NativeContext::None => false,
            _ => true,
        }
    }
}

impl Drop for Context {
    fn drop(&mut self) {
        if self.is_valid() && !thread::panicking() {
            panic!("Contexts must be destroyed explicitly with `destroy_context`!")
        }
    }
}
