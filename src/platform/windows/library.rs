// glload/src/platform/windows/library.rs

//! Dynamic binding to `opengl32.dll`.

use crate::error::Error;

use std::ffi::CStr;
use std::os::raw::c_void;
use std::ptr;
use winapi::shared::minwindef::HMODULE;
use winapi::um::libloaderapi;
use winapi::um::wingdi;

/// An open handle to the system GL library.
pub(crate) struct WglLibrary {
    module: HMODULE,
}

impl WglLibrary {
    pub(crate) fn open() -> Result<WglLibrary, Error> {
        let module = unsafe { libloaderapi::LoadLibraryA(&b"opengl32.dll\0"[0] as *const u8 as _) };
        if module.is_null() {
            return Err(Error::NoGLLibraryFound);
        }
        Ok(WglLibrary { module })
    }

    /// Resolves a GL symbol.
    ///
    /// `GetProcAddress` on the library module is tried first; it is the only
    /// resolver that finds the GL 1.1 entry points exported directly by
    /// `opengl32.dll`. Everything newer comes from `wglGetProcAddress`, which
    /// needs a current context to answer and signals failure with a handful
    /// of small sentinel values rather than just null.
    pub(crate) fn get_proc_address(&self, symbol: &CStr) -> *const c_void {
        unsafe {
            let address = libloaderapi::GetProcAddress(self.module, symbol.as_ptr());
            if !address.is_null() {
                return address as *const c_void;
            }
            let address = wingdi::wglGetProcAddress(symbol.as_ptr());
            match address as usize {
                0 | 1 | 2 | 3 | usize::MAX => ptr::null(),
                _ => address as *const c_void,
            }
        }
    }

    pub(crate) fn close(self) {
        unsafe {
            libloaderapi::FreeLibrary(self.module);
        }
    }
}
