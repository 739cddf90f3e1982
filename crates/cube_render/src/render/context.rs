//! Rendering context acquisition and capability checking
//!
//! The host application creates the drawing surface and hands over a GL
//! function loader; this module wraps the resulting [`glow::Context`]
//! and verifies that it actually speaks a dialect the renderer can use.
//! An unsupported context halts initialization with an explicit error
//! instead of silently producing nothing.

use glow::HasContext;

use super::{RenderError, RenderResult};

/// Dimensions of the drawing surface in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceSize {
    /// Surface width in pixels
    pub width: u32,

    /// Surface height in pixels
    pub height: u32,
}

impl SurfaceSize {
    /// Create a new surface size
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Parsed GL version information used by the capability check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlVersion {
    /// Major version number
    pub major: u32,

    /// Minor version number
    pub minor: u32,

    /// Whether this is an OpenGL ES / WebGL flavor context
    pub is_embedded: bool,
}

impl GlVersion {
    /// Parse a `GL_VERSION` string as returned by the driver
    ///
    /// Handles the three shapes seen in practice: `"OpenGL ES 3.1 ..."`,
    /// `"WebGL 1.0 ..."`, and the bare desktop `"4.6.0 NVIDIA ..."`.
    /// Returns `None` when no version number can be found.
    pub fn parse(raw: &str) -> Option<Self> {
        let is_webgl = raw.starts_with("WebGL");
        let is_embedded = raw.starts_with("OpenGL ES") || is_webgl;
        let digits = raw.trim_start_matches(|c: char| !c.is_ascii_digit());
        let mut parts = digits.split(|c: char| !c.is_ascii_digit());
        let mut major: u32 = parts.next()?.parse().ok()?;
        let minor = parts.next().and_then(|p| p.parse().ok()).unwrap_or(0);
        // WebGL N corresponds to the ES N+1 feature level.
        if is_webgl {
            major += 1;
        }
        Some(Self {
            major,
            minor,
            is_embedded,
        })
    }
}

/// Verify that a context version is usable by the renderer
///
/// The shader sources and the immediate-mode binding sequence target the
/// OpenGL ES 2.0 feature level, so anything reporting a major version
/// below 2 is rejected.
pub fn ensure_supported(raw_version: &str) -> RenderResult<GlVersion> {
    let version = GlVersion::parse(raw_version).ok_or_else(|| {
        RenderError::UnsupportedContext(format!("unrecognized GL version string: {raw_version:?}"))
    })?;

    if version.major < 2 {
        return Err(RenderError::UnsupportedContext(format!(
            "context reports version {}.{}, need at least 2.0",
            version.major, version.minor
        )));
    }

    Ok(version)
}

/// Capability-checked wrapper around a [`glow::Context`]
///
/// Construction performs the version check once; everything downstream
/// can assume the context is usable. The wrapper is deliberately thin:
/// resource modules borrow the raw context through [`GlContext::raw`]
/// and keep only plain GL handles themselves.
pub struct GlContext {
    gl: glow::Context,
    version: GlVersion,
}

impl GlContext {
    /// Wrap and capability-check an already-acquired context
    ///
    /// # Errors
    /// Returns [`RenderError::UnsupportedContext`] when the driver
    /// reports a version below the ES 2.0 feature level.
    pub fn new(gl: glow::Context) -> RenderResult<Self> {
        let raw_version = unsafe { gl.get_parameter_string(glow::VERSION) };
        let version = ensure_supported(&raw_version)?;
        log::info!(
            "GL context ready: {}.{} ({})",
            version.major,
            version.minor,
            if version.is_embedded { "embedded" } else { "desktop" }
        );
        Ok(Self { gl, version })
    }

    /// Build a context from a loader function supplied by the host
    ///
    /// # Safety
    /// The loader must return pointers valid for the current thread's
    /// GL context, and that context must remain current for the lifetime
    /// of the returned value.
    pub unsafe fn from_loader<F>(loader: F) -> RenderResult<Self>
    where
        F: FnMut(&str) -> *const std::ffi::c_void,
    {
        Self::new(glow::Context::from_loader_function(loader))
    }

    /// Access the underlying glow context
    pub fn raw(&self) -> &glow::Context {
        &self.gl
    }

    /// The version reported by the capability check
    pub fn version(&self) -> &GlVersion {
        &self.version
    }
}

impl std::fmt::Debug for GlContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlContext")
            .field("version", &self.version)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_embedded_version_string() {
        let v = GlVersion::parse("OpenGL ES 3.1 Mesa 23.0.4").unwrap();
        assert_eq!(v.major, 3);
        assert_eq!(v.minor, 1);
        assert!(v.is_embedded);
    }

    #[test]
    fn parses_desktop_version_string() {
        let v = GlVersion::parse("4.6.0 NVIDIA 535.86.05").unwrap();
        assert_eq!(v.major, 4);
        assert_eq!(v.minor, 6);
        assert!(!v.is_embedded);
    }

    #[test]
    fn unsupported_context_is_an_explicit_failure() {
        let err = ensure_supported("WebGL 1.0 (OpenGL ES 2.0 Chromium)");
        assert!(err.is_ok(), "WebGL 1.0 maps to the ES 2.0 feature level");

        let err = ensure_supported("OpenGL ES 1.1").unwrap_err();
        assert!(matches!(err, RenderError::UnsupportedContext(_)));

        let err = ensure_supported("no digits here").unwrap_err();
        assert!(matches!(err, RenderError::UnsupportedContext(_)));
    }
}
