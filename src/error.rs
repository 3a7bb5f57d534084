// glload/src/error.rs
//
//! Various errors that methods can produce.

use std::fmt;

/// Various errors that methods can produce.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Error {
    /// The method failed for a miscellaneous reason.
    Failed,
    /// The platform has no native GL backend compiled in.
    UnsupportedOnThisPlatform,
    /// An operation that needs the GL runtime was called before `load`.
    NotLoaded,
    /// The system OpenGL library couldn't be located.
    NoGLLibraryFound,
    /// A connection to the display server could not be opened.
    ConnectionFailed,
    /// A device context couldn't be acquired from the window.
    DeviceOpenFailed,
    /// The system couldn't choose a pixel format (or GLX visual).
    NoPixelFormatFound,
    /// Assigning the chosen pixel format to the device context failed.
    PixelFormatSelectionFailed(WindowingApiError),
    /// The system couldn't create a native GL context.
    ContextCreationFailed(WindowingApiError),
    /// The system couldn't destroy the native GL context.
    ContextDestructionFailed(WindowingApiError),
    /// The system couldn't make the GL context current or not current.
    MakeCurrentFailed(WindowingApiError),
    /// The buffer swap failed.
    PresentFailed(WindowingApiError),
    /// Looking up a GL function address failed.
    GLFunctionNotFound,
    /// The supplied native window doesn't match the active backend.
    InvalidNativeWindow,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::Failed => write!(f, "operation failed"),
            Error::UnsupportedOnThisPlatform => {
                write!(f, "no native GL backend on this platform")
            }
            Error::NotLoaded => write!(f, "the OpenGL library is not loaded"),
            Error::NoGLLibraryFound => write!(f, "the system OpenGL library couldn't be located"),
            Error::ConnectionFailed => {
                write!(f, "a connection to the display server couldn't be opened")
            }
            Error::DeviceOpenFailed => {
                write!(f, "a device context couldn't be acquired from the window")
            }
            Error::NoPixelFormatFound => write!(f, "no suitable pixel format was found"),
            Error::PixelFormatSelectionFailed(api) => {
                write!(f, "assigning the pixel format failed: {}", api)
            }
            Error::ContextCreationFailed(api) => {
                write!(f, "creating the native GL context failed: {}", api)
            }
            Error::ContextDestructionFailed(api) => {
                write!(f, "destroying the native GL context failed: {}", api)
            }
            Error::MakeCurrentFailed(api) => {
                write!(f, "making the GL context current failed: {}", api)
            }
            Error::PresentFailed(api) => write!(f, "swapping buffers failed: {}", api),
            Error::GLFunctionNotFound => write!(f, "a GL function address couldn't be resolved"),
            Error::InvalidNativeWindow => {
                write!(f, "the native window doesn't match the active backend")
            }
        }
    }
}

impl std::error::Error for Error {}

/// Abstraction of the error codes that WGL, GLX, and Xlib report.
///
/// They all tend to follow similar patterns.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WindowingApiError {
    /// Miscellaneous error.
    Failed,
    /// WGL: the chosen pixel format is invalid for this device context, or a
    /// different format was already set on the window.
    /// X11: invalid framebuffer configuration.
    BadPixelFormat,
    /// The context handle is invalid.
    BadContext,
    /// The window (or drawable) handle is invalid.
    BadWindow,
    /// The device context handle is invalid.
    BadDeviceContext,
    /// X11: visual number not known by GLX.
    BadVisual,
    /// X11: the display connection is invalid.
    BadDisplay,
    /// Arguments are inconsistent with each other.
    BadMatch,
    /// A value parameter is out of range.
    BadValue,
    /// The OS ran out of a required resource.
    BadAlloc,
    /// An OS error code this abstraction has no name for.
    Unknown(i32),
}

impl fmt::Display for WindowingApiError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            WindowingApiError::Failed => write!(f, "unspecified windowing API error"),
            WindowingApiError::BadPixelFormat => write!(f, "bad pixel format"),
            WindowingApiError::BadContext => write!(f, "bad context handle"),
            WindowingApiError::BadWindow => write!(f, "bad window handle"),
            WindowingApiError::BadDeviceContext => write!(f, "bad device context handle"),
            WindowingApiError::BadVisual => write!(f, "bad visual"),
            WindowingApiError::BadDisplay => write!(f, "bad display connection"),
            WindowingApiError::BadMatch => write!(f, "inconsistent arguments"),
            WindowingApiError::BadValue => write!(f, "value out of range"),
            WindowingApiError::BadAlloc => write!(f, "allocation failed"),
            WindowingApiError::Unknown(code) => write!(f, "OS error {}", code),
        }
    }
}
