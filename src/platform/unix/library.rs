// glload/src/platform/unix/library.rs

//! Dynamic binding to `libGL` and Xlib.
//!
//! Both libraries are bound at runtime. `libGL` is `dlopen`ed directly and
//! the GLX entry points pulled out of it with `dlsym`; Xlib comes through
//! `x11-dl`, which does its own `dlopen` dance. Nothing here links against
//! X11 or GL at build time, so the crate builds on headless machines.

use crate::error::Error;

use std::ffi::CStr;
use std::mem;
use std::os::raw::{c_char, c_int, c_uchar, c_ulong, c_void};
use x11_dl::xlib::{Display, XVisualInfo, Xlib};

/// A GLX context handle. Opaque to us.
pub(crate) type GLXContext = *mut c_void;

/// Load-order candidates for the GL library. The versioned name is what
/// distributions actually ship; the bare `.so` only exists with dev packages
/// installed.
static GL_LIBRARY_CANDIDATES: [&[u8]; 2] = [b"libGL.so.1\0", b"libGL.so\0"];

/// The GLX entry points this crate calls, resolved once at library-open time.
pub(crate) struct GlxEntryPoints {
    pub(crate) choose_visual: unsafe extern "C" fn(
        display: *mut Display,
        screen: c_int,
        attrib_list: *mut c_int,
    ) -> *mut XVisualInfo,
    pub(crate) create_context: unsafe extern "C" fn(
        display: *mut Display,
        visual_info: *mut XVisualInfo,
        share_list: GLXContext,
        direct: c_int,
    ) -> GLXContext,
    pub(crate) destroy_context: unsafe extern "C" fn(display: *mut Display, context: GLXContext),
    pub(crate) make_current: unsafe extern "C" fn(
        display: *mut Display,
        drawable: c_ulong,
        context: GLXContext,
    ) -> c_int,
    pub(crate) swap_buffers: unsafe extern "C" fn(display: *mut Display, drawable: c_ulong),
    pub(crate) get_proc_address:
        unsafe extern "C" fn(name: *const c_uchar) -> *const c_void,
}

/// Open handles to `libGL` and Xlib.
pub(crate) struct GlxLibrary {
    handle: *mut c_void,
    pub(crate) xlib: Xlib,
    pub(crate) glx: GlxEntryPoints,
}

impl GlxLibrary {
    pub(crate) fn open() -> Result<GlxLibrary, Error> {
        let handle = GL_LIBRARY_CANDIDATES
            .iter()
            .map(|name| unsafe { libc::dlopen(name.as_ptr() as *const c_char, libc::RTLD_LAZY) })
            .find(|handle| !handle.is_null())
            .ok_or(Error::NoGLLibraryFound)?;

        let xlib = match Xlib::open() {
            Ok(xlib) => xlib,
            Err(_) => {
                unsafe {
                    libc::dlclose(handle);
                }
                return Err(Error::ConnectionFailed);
            }
        };

        let glx = match unsafe { load_entry_points(handle) } {
            Ok(glx) => glx,
            Err(error) => {
                unsafe {
                    libc::dlclose(handle);
                }
                return Err(error);
            }
        };

        Ok(GlxLibrary { handle, xlib, glx })
    }

    /// Resolves a GL symbol: `dlsym` on `libGL` first, for the entry points
    /// the library exports directly, then `glXGetProcAddressARB`, which also
    /// answers for extension and post-1.1 functions.
    pub(crate) fn get_proc_address(&self, symbol: &CStr) -> *const c_void {
        unsafe {
            let address = libc::dlsym(self.handle, symbol.as_ptr());
            if !address.is_null() {
                return address as *const c_void;
            }
            (self.glx.get_proc_address)(symbol.as_ptr() as *const c_uchar)
        }
    }

    pub(crate) fn close(self) {
        unsafe {
            libc::dlclose(self.handle);
        }
    }
}

unsafe fn load_entry_points(handle: *mut c_void) -> Result<GlxEntryPoints, Error> {
    Ok(GlxEntryPoints {
        choose_visual: symbol(handle, b"glXChooseVisual\0")?,
        create_context: symbol(handle, b"glXCreateContext\0")?,
        destroy_context: symbol(handle, b"glXDestroyContext\0")?,
        make_current: symbol(handle, b"glXMakeCurrent\0")?,
        swap_buffers: symbol(handle, b"glXSwapBuffers\0")?,
        get_proc_address: symbol(handle, b"glXGetProcAddressARB\0")
            .or_else(|_: Error| symbol(handle, b"glXGetProcAddress\0"))?,
    })
}

unsafe fn symbol<T: Copy>(handle: *mut c_void, name: &'static [u8]) -> Result<T, Error> {
    debug_assert_eq!(mem::size_of::<T>(), mem::size_of::<*mut c_void>());
    let address = libc::dlsym(handle, name.as_ptr() as *const c_char);
    if address.is_null() {
        return Err(Error::GLFunctionNotFound);
    }
    Ok(mem::transmute_copy(&address))
}
