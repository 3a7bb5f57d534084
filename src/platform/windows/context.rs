// glload/src/platform/windows/context.rs

//! Legacy WGL context creation.
//!
//! The sequence is the classic one: pick a pixel format with
//! `ChoosePixelFormat`, commit it with `SetPixelFormat` (a window can only
//! have its format set once), create the context, make it current. Each step
//! rolls the earlier ones back on failure, so a failed creation leaves the
//! window exactly as it was found.

use crate::context::{ContextAttributeFlags, ContextAttributes};
use crate::error::{Error, WindowingApiError};

use std::io;
use std::mem;
use std::ptr;
use winapi::shared::minwindef::FALSE;
use winapi::shared::windef::{HDC, HGLRC, HWND};
use winapi::shared::winerror;
use winapi::um::wingdi::{self, PIXELFORMATDESCRIPTOR};
use winapi::um::winuser;

/// A live WGL context, with the device context it renders through.
pub(crate) struct WglContext {
    glrc: HGLRC,
    device_context: HDC,
    window: HWND,
    owns_device_context: bool,
}

impl WglContext {
    pub(crate) fn create(
        window: HWND,
        device_context: Option<HDC>,
        attributes: &ContextAttributes,
    ) -> Result<WglContext, Error> {
        unsafe {
            // A caller-supplied DC is borrowed and never released here.
            let (device_context, owns_device_context) = match device_context {
                Some(device_context) => (device_context, false),
                None => {
                    let device_context = winuser::GetDC(window);
                    if device_context.is_null() {
                        return Err(Error::DeviceOpenFailed);
                    }
                    (device_context, true)
                }
            };

            let release_device_context = |device_context: HDC| {
                if owns_device_context {
                    unsafe {
                        winuser::ReleaseDC(window, device_context);
                    }
                }
            };

            let flags = attributes.flags;
            let mut descriptor: PIXELFORMATDESCRIPTOR = mem::zeroed();
            descriptor.nSize = mem::size_of::<PIXELFORMATDESCRIPTOR>() as u16;
            descriptor.nVersion = 1;
            descriptor.dwFlags = wingdi::PFD_DRAW_TO_WINDOW
                | wingdi::PFD_SUPPORT_OPENGL
                | wingdi::PFD_DOUBLEBUFFER;
            descriptor.iPixelType = wingdi::PFD_TYPE_RGBA;
            descriptor.cColorBits = 32;
            descriptor.cAlphaBits = if flags.contains(ContextAttributeFlags::ALPHA) {
                8
            } else {
                0
            };
            descriptor.cDepthBits = if flags.contains(ContextAttributeFlags::DEPTH) {
                24
            } else {
                0
            };
            descriptor.cStencilBits = if flags.contains(ContextAttributeFlags::STENCIL) {
                8
            } else {
                0
            };
            descriptor.iLayerType = wingdi::PFD_MAIN_PLANE;

            let pixel_format = wingdi::ChoosePixelFormat(device_context, &descriptor);
            if pixel_format == 0 {
                release_device_context(device_context);
                return Err(Error::NoPixelFormatFound);
            }

            if wingdi::SetPixelFormat(device_context, pixel_format, &descriptor) == FALSE {
                let error = windowing_error();
                release_device_context(device_context);
                return Err(Error::PixelFormatSelectionFailed(error));
            }

            let glrc = wingdi::wglCreateContext(device_context);
            if glrc.is_null() {
                let error = windowing_error();
                release_device_context(device_context);
                return Err(Error::ContextCreationFailed(error));
            }

            if wingdi::wglMakeCurrent(device_context, glrc) == FALSE {
                let error = windowing_error();
                wingdi::wglDeleteContext(glrc);
                release_device_context(device_context);
                return Err(Error::MakeCurrentFailed(error));
            }

            Ok(WglContext {
                glrc,
                device_context,
                window,
                owns_device_context,
            })
        }
    }

    /// Destroys the context and releases the device context if it was
    /// acquired rather than borrowed. The release happens even when context
    /// deletion reports failure.
    pub(crate) fn destroy(&mut self) -> Result<(), Error> {
        unsafe {
            if wingdi::wglGetCurrentContext() == self.glrc {
                wingdi::wglMakeCurrent(ptr::null_mut(), ptr::null_mut());
            }
            let deleted = wingdi::wglDeleteContext(self.glrc);
            if self.owns_device_context {
                winuser::ReleaseDC(self.window, self.device_context);
            }
            if deleted == FALSE {
                return Err(Error::ContextDestructionFailed(windowing_error()));
            }
        }
        Ok(())
    }

    pub(crate) fn present(&self) -> Result<(), Error> {
        unsafe {
            if wingdi::SwapBuffers(self.device_context) == FALSE {
                return Err(Error::PresentFailed(windowing_error()));
            }
        }
        Ok(())
    }
}

/// Maps the thread's last Win32 error to a windowing-system error code.
fn windowing_error() -> WindowingApiError {
    match io::Error::last_os_error().raw_os_error() {
        Some(code) if code == winerror::ERROR_INVALID_PIXEL_FORMAT as i32 => {
            WindowingApiError::BadPixelFormat
        }
        Some(code) if code == winerror::ERROR_INVALID_WINDOW_HANDLE as i32 => {
            WindowingApiError::BadWindow
        }
        Some(code) if code == winerror::ERROR_INVALID_HANDLE as i32 => {
            WindowingApiError::BadDeviceContext
        }
        Some(code) => WindowingApiError::Unknown(code),
        None => WindowingApiError::Failed,
    }
}
