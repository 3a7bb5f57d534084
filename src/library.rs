// glload/src/library.rs

//! The open GL library, behind a platform tag.

use crate::error::Error;
use crate::platform::mock::MockDriver;

use std::ffi::CString;
use std::os::raw::c_void;
use std::ptr;
use std::rc::Rc;

/// An open handle to a GL implementation.
///
/// A tagged union rather than `#[cfg]`-switched fields, so the mock backend
/// is always compiled in next to the native one.
pub(crate) enum GlLibrary {
    #[cfg(wgl_backend)]
    Wgl(crate::platform::windows::library::WglLibrary),
    #[cfg(glx_backend)]
    Glx(crate::platform::unix::library::GlxLibrary),
    Mock(Rc<MockDriver>),
}

impl GlLibrary {
    /// Opens the platform's GL library.
    pub(crate) fn open_native() -> Result<GlLibrary, Error> {
        #[cfg(wgl_backend)]
        return crate::platform::windows::library::WglLibrary::open().map(GlLibrary::Wgl);
        #[cfg(glx_backend)]
        return crate::platform::unix::library::GlxLibrary::open().map(GlLibrary::Glx);
        #[cfg(not(native_backend))]
        Err(Error::UnsupportedOnThisPlatform)
    }

    pub(crate) fn open_mock(driver: Rc<MockDriver>) -> Result<GlLibrary, Error> {
        driver.open_library()?;
        Ok(GlLibrary::Mock(driver))
    }

    /// Resolves one GL entry point, or null.
    ///
    /// Each backend tries the OS-generic symbol lookup on the library handle
    /// first and only then falls back to the GL-specific resolver
    /// (`wglGetProcAddress` / `glXGetProcAddressARB`); the generic lookup is
    /// the only one that reliably answers for the oldest entry points.
    pub(crate) fn get_proc_address(&self, name: &str) -> *const c_void {
        let symbol = match CString::new(name) {
            Ok(symbol) => symbol,
            Err(_) => return ptr::null(),
        };
        match *self {
            #[cfg(wgl_backend)]
            GlLibrary::Wgl(ref library) => library.get_proc_address(&symbol),
            #[cfg(glx_backend)]
            GlLibrary::Glx(ref library) => library.get_proc_address(&symbol),
            GlLibrary::Mock(ref driver) => {
                let _ = symbol;
                driver.get_proc_address(name)
            }
        }
    }

    pub(crate) fn close(self) {
        match self {
            #[cfg(wgl_backend)]
            GlLibrary::Wgl(library) => library.close(),
            #[cfg(glx_backend)]
            GlLibrary::Glx(library) => library.close(),
            GlLibrary::Mock(driver) => driver.close_library(),
        }
    }
}
