//! # Cube Render
//!
//! A small immediate-mode rendering library that draws a single rotating,
//! textured cube through an OpenGL ES 2.0 class context.
//!
//! ## Architecture
//!
//! The library is organized around one [`Renderer`] that owns every GPU
//! handle it needs:
//!
//! - **Shader program**: compiled and linked at construction, with
//!   attribute/uniform locations resolved once after a successful link
//! - **Geometry buffers**: write-once position, texture coordinate, and
//!   index buffers describing a unit cube
//! - **Texture**: an RGBA image uploaded once with a full mipmap chain
//! - **Transform pipeline**: a projection matrix computed once and a
//!   model-view matrix recomputed every frame from an accumulating angle
//!
//! The host supplies the window, the GL loader function, the texture
//! pixels, and the per-frame scheduling primitive. The renderer never
//! creates a surface itself.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use cube_render::prelude::*;
//!
//! # fn acquire_gl() -> glow::Context { unimplemented!() }
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let context = GlContext::new(acquire_gl())?;
//!     let config = RendererConfig::default();
//!     let image = image::RgbaImage::new(128, 128);
//!     let surface = SurfaceSize::new(800, 600);
//!     let mut renderer = Renderer::new(context, &config, &image, surface)?;
//!
//!     // Drive ten frames without a display.
//!     let mut scheduler = SteppedScheduler::new(10);
//!     renderer.run(&mut scheduler);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod foundation;
pub mod render;

pub use config::{Config, ConfigError, ProjectionConfig, RendererConfig};
pub use render::{RenderError, RenderResult, Renderer};

/// Common imports for library users
pub mod prelude {
    pub use crate::{
        config::{Config, ProjectionConfig, RendererConfig},
        foundation::math::{Mat4, Mat4Ext, Vec3},
        render::{
            context::{GlContext, SurfaceSize},
            mesh::CubeMesh,
            scheduler::{FrameScheduler, SteppedScheduler},
            texture::{SamplerOptions, TextureProvider},
            RenderError, RenderResult, Renderer,
        },
    };
}
