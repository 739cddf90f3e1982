//! # Rendering System
//!
//! Owns every GPU-side resource behind one [`Renderer`] object and
//! drives the per-frame draw of the rotating cube.
//!
//! ## Architecture
//!
//! - **context**: capability-checked wrapper over the GL function table
//! - **shader**: compilation, linking, and interface location resolution
//! - **mesh / buffers**: unit cube data and its write-once GPU upload
//! - **texture**: externally supplied RGBA pixels with a mipmap chain
//! - **transform**: projection-once, model-view-per-frame matrix source
//! - **binding**: scoped guards over the global GL binding state
//! - **scheduler**: injectable "next frame" capability
//!
//! ## Per-tick contract
//!
//! Each tick fully re-establishes the bindings it needs. The sequence
//! (viewport, clear, program + uniforms, texture, attributes, depth
//! test, indexed draw) is ordered deliberately because the underlying
//! API is a bound-global-state machine; see [`Renderer::tick`].

pub mod binding;
pub mod buffers;
pub mod context;
pub mod mesh;
pub mod scheduler;
pub mod shader;
pub mod texture;
pub mod transform;

pub use context::{GlContext, SurfaceSize};
pub use mesh::CubeMesh;
pub use scheduler::{FrameScheduler, SteppedScheduler};
pub use shader::{ShaderProgram, ShaderStage};
pub use texture::{SamplerOptions, Texture2d, TextureProvider};
pub use transform::TransformPipeline;

use glow::HasContext;
use image::RgbaImage;
use thiserror::Error;

use crate::config::RendererConfig;
use binding::{ArrayBufferBinding, ElementBufferBinding, ProgramBinding, TextureBinding};
use buffers::GeometryBuffers;

/// Rendering errors
///
/// All failures are terminal for the affected resource; nothing here is
/// retried. Compile and link failures release the failed GL object
/// before surfacing, so an error never carries a dangling handle.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Shader source was rejected by the compiler stage
    #[error("{stage} shader compilation failed: {log}")]
    CompileFailed {
        /// Stage whose source was rejected
        stage: ShaderStage,
        /// Diagnostic log captured from the driver
        log: String,
    },

    /// Program linking failed
    #[error("shader program link failed: {log}")]
    LinkFailed {
        /// Diagnostic log captured from the linker
        log: String,
    },

    /// The rendering context does not meet the required feature level
    ///
    /// Halts initialization and must surface to the caller; continuing
    /// without a capable context is never a silent no-op.
    #[error("rendering context unsupported: {0}")]
    UnsupportedContext(String),

    /// A contracted attribute or uniform was absent after a link
    #[error("shader symbol {name:?} missing after link")]
    MissingShaderSymbol {
        /// Name that failed to resolve
        name: String,
    },

    /// A GL object (buffer, texture, shader, program) could not be created
    #[error("GPU resource creation failed: {0}")]
    ResourceCreationFailed(String),

    /// Supplied pixel data does not form a usable texture image
    #[error("invalid texture data: {0}")]
    InvalidTextureData(String),
}

/// Result type for rendering operations
pub type RenderResult<T> = Result<T, RenderError>;

/// Owns all GPU handles and renders one frame per granted tick
///
/// Construction is the `Uninitialized -> Ready` transition: it compiles
/// and links the shader program, uploads the cube geometry and the
/// texture, and computes the projection matrix. Any failure aborts
/// construction, so a `Renderer` value is always ready to draw. The
/// `Ready -> Rendering` transition happens on the first granted frame
/// of [`Renderer::run`] and only ends when the scheduler declines.
pub struct Renderer {
    context: GlContext,
    program: ShaderProgram,
    geometry: GeometryBuffers,
    texture: Texture2d,
    transforms: TransformPipeline,
    clear_color: [f32; 4],
    texture_unit: u32,
    surface: SurfaceSize,
    frame_count: u64,
}

impl Renderer {
    /// Create a renderer from a checked context and a texture image
    ///
    /// # Arguments
    /// * `context` - capability-checked GL context (see [`GlContext::new`])
    /// * `config` - projection, rotation, clear color, and texture unit settings
    /// * `texture_image` - RGBA pixels from the texture collaborator
    /// * `surface` - current drawing surface dimensions
    ///
    /// # Errors
    /// Propagates shader compile/link failures and resource allocation
    /// failures; the renderer is not partially usable after an error.
    pub fn new(
        context: GlContext,
        config: &RendererConfig,
        texture_image: &RgbaImage,
        surface: SurfaceSize,
    ) -> RenderResult<Self> {
        log::info!(
            "initializing renderer: {}x{} surface, texture unit {}",
            surface.width,
            surface.height,
            config.texture_unit
        );

        let gl = context.raw();
        let program = ShaderProgram::build(gl)?;
        let geometry = GeometryBuffers::build(gl, &CubeMesh::unit())?;
        let texture = Texture2d::from_image(gl, texture_image, &SamplerOptions::default())?;
        let transforms = TransformPipeline::new(config);

        Ok(Self {
            context,
            program,
            geometry,
            texture,
            transforms,
            clear_color: config.clear_color,
            texture_unit: config.texture_unit,
            surface,
            frame_count: 0,
        })
    }

    /// Create a renderer, obtaining pixels from a texture provider
    pub fn with_provider(
        context: GlContext,
        config: &RendererConfig,
        provider: &dyn TextureProvider,
        surface: SurfaceSize,
    ) -> RenderResult<Self> {
        let image = provider.rgba_image();
        Self::new(context, config, &image, surface)
    }

    /// Update the surface dimensions used for the viewport
    pub fn set_surface_size(&mut self, surface: SurfaceSize) {
        self.surface = surface;
    }

    /// Render one frame
    ///
    /// The step order is a correctness contract over the bound-global
    /// GL state machine:
    /// 1. recompute the model-view matrix, then advance the angle
    /// 2. set the viewport to the surface dimensions
    /// 3. clear the color buffer only; the depth buffer is never cleared
    /// 4. bind the program and upload both matrices
    /// 5. bind the texture to its unit and point `diffuse` at it
    /// 6. wire both vertex attributes, tightly packed
    /// 7. enable depth testing
    /// 8. draw 36 indices as 12 triangles
    ///
    /// Every binding is re-established here; nothing is assumed to
    /// survive from the previous tick.
    pub fn tick(&mut self) {
        let model_view = self.transforms.model_view();
        self.transforms.advance();

        let gl = self.context.raw();
        unsafe {
            gl.viewport(0, 0, self.surface.width as i32, self.surface.height as i32);

            let [r, g, b, a] = self.clear_color;
            gl.clear_color(r, g, b, a);
            gl.clear(glow::COLOR_BUFFER_BIT);

            let _program = ProgramBinding::bind(gl, self.program.handle());
            gl.uniform_matrix_4_f32_slice(
                Some(self.program.projection_uniform()),
                false,
                self.transforms.projection().as_slice(),
            );
            gl.uniform_matrix_4_f32_slice(
                Some(self.program.model_view_uniform()),
                false,
                model_view.as_slice(),
            );

            let _texture = TextureBinding::bind(gl, self.texture.handle(), self.texture_unit);
            gl.uniform_1_i32(Some(self.program.diffuse_uniform()), self.texture_unit as i32);

            {
                let _positions = ArrayBufferBinding::bind(gl, self.geometry.position_buffer());
                gl.enable_vertex_attrib_array(self.program.position_attribute());
                gl.vertex_attrib_pointer_f32(
                    self.program.position_attribute(),
                    3,
                    glow::FLOAT,
                    false,
                    0,
                    0,
                );
            }
            {
                let _tex_coords = ArrayBufferBinding::bind(gl, self.geometry.tex_coord_buffer());
                gl.enable_vertex_attrib_array(self.program.tex_coord_attribute());
                gl.vertex_attrib_pointer_f32(
                    self.program.tex_coord_attribute(),
                    2,
                    glow::FLOAT,
                    false,
                    0,
                    0,
                );
            }

            gl.enable(glow::DEPTH_TEST);

            {
                let _indices = ElementBufferBinding::bind(gl, self.geometry.index_buffer());
                gl.draw_elements(
                    glow::TRIANGLES,
                    self.geometry.index_count(),
                    glow::UNSIGNED_SHORT,
                    0,
                );
            }
        }

        self.frame_count += 1;
        log::trace!(
            "frame {} drawn, rotation {:.3} rad",
            self.frame_count,
            self.transforms.rotation_angle()
        );
    }

    /// Drive the render loop with a host scheduler
    ///
    /// Ticks for as long as the scheduler grants frames. Each tick runs
    /// to completion before the next is requested; there is no
    /// reentrancy and no overlap.
    pub fn run<S: FrameScheduler>(&mut self, scheduler: &mut S) {
        log::info!("entering render loop");
        while scheduler.request_next_frame() {
            self.tick();
        }
        log::info!("render loop ended after {} frames", self.frame_count);
    }

    /// The accumulated rotation angle in radians
    pub fn rotation_angle(&self) -> f32 {
        self.transforms.rotation_angle()
    }

    /// Number of frames rendered so far
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// The transform pipeline feeding the uniforms
    pub fn transforms(&self) -> &TransformPipeline {
        &self.transforms
    }
}

impl Drop for Renderer {
    fn drop(&mut self) {
        let gl = self.context.raw();
        self.texture.destroy(gl);
        self.geometry.destroy(gl);
        self.program.destroy(gl);
    }
}
