//! 2D texture resources
//!
//! The renderer never generates pixels itself: a [`TextureProvider`]
//! collaborator (rasterized text in the demo app) supplies a plain RGBA
//! image, and [`Texture2d`] uploads it once and generates the mipmap
//! chain. Filtering and wrap modes are a configuration point with
//! defaults suited to minified text.

use glow::HasContext;
use image::RgbaImage;

use super::binding::TextureBinding;
use super::{RenderError, RenderResult};

/// Collaborator contract for texture pixel generation
///
/// Implementations turn whatever they hold (a label and color in the
/// demo) into a width x height RGBA8 image. The core only depends on
/// the resulting buffer.
pub trait TextureProvider {
    /// Produce the RGBA image to upload
    fn rgba_image(&self) -> RgbaImage;
}

/// Texture coordinate wrap mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WrapMode {
    /// Clamp coordinates to the edge texel
    ClampToEdge,

    /// Repeat the texture
    Repeat,
}

impl WrapMode {
    fn gl_enum(self) -> i32 {
        match self {
            Self::ClampToEdge => glow::CLAMP_TO_EDGE as i32,
            Self::Repeat => glow::REPEAT as i32,
        }
    }
}

/// Texture filtering mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filtering {
    /// Trilinear: linear magnification, linear-mipmap-linear minification
    LinearMipmap,

    /// Nearest-neighbor for both magnification and minification
    Nearest,
}

/// Sampler state applied to a texture at upload time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplerOptions {
    /// Wrap mode for both S and T
    pub wrap: WrapMode,

    /// Filtering mode
    pub filtering: Filtering,
}

impl Default for SamplerOptions {
    fn default() -> Self {
        Self {
            wrap: WrapMode::ClampToEdge,
            filtering: Filtering::LinearMipmap,
        }
    }
}

/// A filtered, mipmapped 2D texture
///
/// Owns its GL handle exclusively; the mipmap chain is generated once
/// right after the level-0 upload and never touched again.
pub struct Texture2d {
    texture: glow::NativeTexture,
    width: u32,
    height: u32,
}

impl Texture2d {
    /// Upload an RGBA image and generate its mipmap chain
    ///
    /// # Errors
    /// Returns [`RenderError::InvalidTextureData`] for an empty image and
    /// [`RenderError::ResourceCreationFailed`] when the texture object
    /// cannot be allocated.
    pub fn from_image(
        gl: &glow::Context,
        image: &RgbaImage,
        sampler: &SamplerOptions,
    ) -> RenderResult<Self> {
        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            return Err(RenderError::InvalidTextureData(format!(
                "texture image must be non-empty, got {width}x{height}"
            )));
        }

        let texture = unsafe { gl.create_texture() }.map_err(RenderError::ResourceCreationFailed)?;
        let _bound = TextureBinding::bind(gl, texture, 0);

        let (min_filter, mag_filter) = match sampler.filtering {
            Filtering::LinearMipmap => (glow::LINEAR_MIPMAP_LINEAR as i32, glow::LINEAR as i32),
            Filtering::Nearest => (glow::NEAREST_MIPMAP_NEAREST as i32, glow::NEAREST as i32),
        };

        unsafe {
            gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_MIN_FILTER, min_filter);
            gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_MAG_FILTER, mag_filter);
            gl.tex_parameter_i32(
                glow::TEXTURE_2D,
                glow::TEXTURE_WRAP_S,
                sampler.wrap.gl_enum(),
            );
            gl.tex_parameter_i32(
                glow::TEXTURE_2D,
                glow::TEXTURE_WRAP_T,
                sampler.wrap.gl_enum(),
            );
            gl.pixel_store_i32(glow::UNPACK_ALIGNMENT, 1);
            gl.tex_image_2d(
                glow::TEXTURE_2D,
                0,
                glow::RGBA as i32,
                width as i32,
                height as i32,
                0,
                glow::RGBA,
                glow::UNSIGNED_BYTE,
                glow::PixelUnpackData::Slice(Some(image.as_raw().as_slice())),
            );
            gl.generate_mipmap(glow::TEXTURE_2D);
        }

        log::debug!("texture uploaded: {width}x{height} RGBA with mipmaps");

        Ok(Self {
            texture,
            width,
            height,
        })
    }

    /// Upload pixels obtained from a provider
    pub fn from_provider(
        gl: &glow::Context,
        provider: &dyn TextureProvider,
        sampler: &SamplerOptions,
    ) -> RenderResult<Self> {
        Self::from_image(gl, &provider.rgba_image(), sampler)
    }

    /// The GL texture handle
    pub fn handle(&self) -> glow::NativeTexture {
        self.texture
    }

    /// Width of mip level 0 in texels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height of mip level 0 in texels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Delete the texture object
    pub(crate) fn destroy(&self, gl: &glow::Context) {
        unsafe { gl.delete_texture(self.texture) };
    }
}
