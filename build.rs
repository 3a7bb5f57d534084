// glload/build.rs
//
//! The `glload` build script.

use cfg_aliases::cfg_aliases;

fn main() {
    // Setup aliases for #[cfg] checks.
    cfg_aliases! {
        // Backends. WGL on Windows, GLX everywhere Unix-y that has Xlib.
        // macOS and Android fall through to "no native backend": loading
        // reports `UnsupportedOnThisPlatform` rather than silently
        // pretending to succeed.
        wgl_backend: { target_os = "windows" },
        glx_backend: { all(unix, not(any(target_os = "macos", target_os = "android"))) },
        native_backend: { any(target_os = "windows",
                              all(unix, not(any(target_os = "macos", target_os = "android")))) },
    }
}
