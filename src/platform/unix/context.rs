// glload/src/platform/unix/context.rs

//! Legacy GLX context creation.
//!
//! Mirrors the WGL path step for step: negotiate a visual with
//! `glXChooseVisual`, create a direct context against it, make it current.
//! The visual info is freed in every outcome, and a display connection this
//! crate opened itself is closed again on any failure.

use crate::context::{ContextAttributeFlags, ContextAttributes};
use crate::error::{Error, WindowingApiError};
use crate::platform::unix::library::{GLXContext, GlxLibrary};

use std::os::raw::{c_int, c_ulong, c_void};
use std::ptr;
use x11_dl::xlib::Display;

// Attributes understood by glXChooseVisual.
const GLX_RGBA: c_int = 4;
const GLX_DOUBLEBUFFER: c_int = 5;
const GLX_RED_SIZE: c_int = 8;
const GLX_GREEN_SIZE: c_int = 9;
const GLX_BLUE_SIZE: c_int = 10;
const GLX_ALPHA_SIZE: c_int = 11;
const GLX_DEPTH_SIZE: c_int = 12;
const GLX_STENCIL_SIZE: c_int = 13;

/// A live GLX context, with the display connection it renders through.
pub(crate) struct GlxContext {
    glx_context: GLXContext,
    display: *mut Display,
    window: c_ulong,
    owns_display: bool,
}

impl GlxContext {
    pub(crate) fn create(
        library: &GlxLibrary,
        display: Option<*mut Display>,
        window: c_ulong,
        attributes: &ContextAttributes,
    ) -> Result<GlxContext, Error> {
        unsafe {
            // A caller-supplied display is borrowed and never closed here.
            let (display, owns_display) = match display {
                Some(display) if !display.is_null() => (display, false),
                _ => {
                    let display = (library.xlib.XOpenDisplay)(ptr::null());
                    if display.is_null() {
                        return Err(Error::ConnectionFailed);
                    }
                    (display, true)
                }
            };

            let close_display = |display: *mut Display| {
                if owns_display {
                    unsafe {
                        (library.xlib.XCloseDisplay)(display);
                    }
                }
            };

            let attribs = visual_attributes(attributes.flags);
            let screen = (library.xlib.XDefaultScreen)(display);
            let visual_info =
                (library.glx.choose_visual)(display, screen, attribs.as_ptr() as *mut c_int);
            if visual_info.is_null() {
                close_display(display);
                return Err(Error::NoPixelFormatFound);
            }

            let glx_context =
                (library.glx.create_context)(display, visual_info, ptr::null_mut(), 1);
            (library.xlib.XFree)(visual_info as *mut c_void);
            if glx_context.is_null() {
                close_display(display);
                return Err(Error::ContextCreationFailed(WindowingApiError::BadVisual));
            }

            if (library.glx.make_current)(display, window, glx_context) == 0 {
                (library.glx.destroy_context)(display, glx_context);
                close_display(display);
                return Err(Error::MakeCurrentFailed(WindowingApiError::BadWindow));
            }

            Ok(GlxContext {
                glx_context,
                display,
                window,
                owns_display,
            })
        }
    }

    /// Destroys the context and closes the display if it was opened rather
    /// than borrowed.
    pub(crate) fn destroy(&mut self, library: &GlxLibrary) -> Result<(), Error> {
        unsafe {
            (library.glx.make_current)(self.display, 0, ptr::null_mut());
            (library.glx.destroy_context)(self.display, self.glx_context);
            if self.owns_display {
                (library.xlib.XCloseDisplay)(self.display);
            }
        }
        Ok(())
    }

    pub(crate) fn present(&self, library: &GlxLibrary) -> Result<(), Error> {
        unsafe {
            (library.glx.swap_buffers)(self.display, self.window);
        }
        Ok(())
    }
}

fn visual_attributes(flags: ContextAttributeFlags) -> Vec<c_int> {
    let mut attribs = vec![
        GLX_RGBA,
        GLX_DOUBLEBUFFER,
        GLX_RED_SIZE,
        8,
        GLX_GREEN_SIZE,
        8,
        GLX_BLUE_SIZE,
        8,
    ];
    if flags.contains(ContextAttributeFlags::ALPHA) {
        attribs.extend_from_slice(&[GLX_ALPHA_SIZE, 8]);
    }
    if flags.contains(ContextAttributeFlags::DEPTH) {
        attribs.extend_from_slice(&[GLX_DEPTH_SIZE, 24]);
    }
    if flags.contains(ContextAttributeFlags::STENCIL) {
        attribs.extend_from_slice(&[GLX_STENCIL_SIZE, 8]);
    }
    attribs.push(0);
    attribs
}
