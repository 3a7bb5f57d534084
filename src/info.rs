// glload/src/info.rs
//
//! OpenGL version and profile information.

/// Describes an OpenGL version, either the one requested for a context or
/// the one the runtime claims to implement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct GLVersion {
    /// The major version (e.g. 4 in 4.6).
    pub major: u8,
    /// The minor version (e.g. 6 in 4.6).
    pub minor: u8,
}

impl GLVersion {
    #[inline]
    pub fn new(major: u8, minor: u8) -> GLVersion {
        GLVersion { major, minor }
    }

    /// Extracts "major.minor" from a `GL_VERSION`-style string.
    ///
    /// Desktop GL returns strings like `"4.6.0 NVIDIA 535.54"`; GLES prefixes
    /// them with `"OpenGL ES "`. Either way the version starts at the first
    /// ASCII digit.
    pub(crate) fn parse(version_string: &str) -> Option<GLVersion> {
        let digits_onward = version_string.find(|c: char| c.is_ascii_digit())
                                          .map(|index| &version_string[index..])?;
        let mut components = digits_onward.split(|c: char| !c.is_ascii_digit());
        let major = components.next()?.parse().ok()?;
        let minor = components.next()?.parse().ok()?;
        Some(GLVersion { major, minor })
    }
}

/// The context profile requested at context creation.
///
/// The simple (legacy) creation path this crate implements produces a
/// legacy-profile context regardless of this setting; see
/// [`crate::GlLoader::create_context`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GLProfile {
    /// Whatever profile `wglCreateContext`/`glXCreateContext` hand back.
    Legacy,
    /// The core profile. Accepted, not honored on the legacy path.
    Core,
    /// The compatibility profile. Accepted, not honored on the legacy path.
    Compatibility,
}
