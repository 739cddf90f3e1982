//! Shader compilation and program linking
//!
//! The GLSL sources below are part of the renderer's public contract:
//! the vertex stage consumes `a_position`/`a_tex_coord` with `modelView`
//! and `projection` matrices, and the fragment stage samples a `diffuse`
//! texture through the interpolated coordinate. Location lookups are
//! only performed after a successful link.
//!
//! Failure semantics follow the GL object model: a shader that fails to
//! compile is deleted immediately and its info log is carried in the
//! error; a program that fails to link is deleted the same way. The
//! failed handle is never returned to the caller.

use glow::HasContext;

use super::{RenderError, RenderResult};

/// Canonical vertex shader source (GLSL ES 1.00)
pub const VERTEX_SHADER_SOURCE: &str = "
    attribute vec4 a_position;
    attribute vec2 a_tex_coord;

    uniform mat4 modelView;
    uniform mat4 projection;

    varying vec2 v_tex_coord;

    void main()
    {
        gl_Position = projection * modelView * a_position;
        v_tex_coord = a_tex_coord;
    }
";

/// Canonical fragment shader source (GLSL ES 1.00)
pub const FRAGMENT_SHADER_SOURCE: &str = "
    precision mediump float;

    varying vec2 v_tex_coord;

    uniform sampler2D diffuse;

    void main()
    {
        gl_FragColor = texture2D(diffuse, v_tex_coord);
    }
";

/// Pipeline stage a shader source targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    /// Vertex processing stage
    Vertex,

    /// Fragment processing stage
    Fragment,
}

impl ShaderStage {
    /// The GL enum value for this stage
    pub fn gl_enum(self) -> u32 {
        match self {
            Self::Vertex => glow::VERTEX_SHADER,
            Self::Fragment => glow::FRAGMENT_SHADER,
        }
    }
}

impl std::fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Vertex => write!(f, "vertex"),
            Self::Fragment => write!(f, "fragment"),
        }
    }
}

/// Compile a single shader stage
///
/// # Errors
/// Returns [`RenderError::CompileFailed`] carrying the driver's info log
/// when the source is rejected. The shader object is deleted before the
/// error is returned, so the failed handle cannot leak out.
pub fn compile_shader(
    gl: &glow::Context,
    stage: ShaderStage,
    source: &str,
) -> RenderResult<glow::NativeShader> {
    unsafe {
        let shader = gl
            .create_shader(stage.gl_enum())
            .map_err(RenderError::ResourceCreationFailed)?;

        gl.shader_source(shader, source);
        gl.compile_shader(shader);

        if !gl.get_shader_compile_status(shader) {
            let log = gl.get_shader_info_log(shader);
            gl.delete_shader(shader);
            log::error!("{stage} shader compilation failed: {log}");
            return Err(RenderError::CompileFailed { stage, log });
        }

        Ok(shader)
    }
}

/// A linked shader program with its resolved interface locations
///
/// Locations are resolved exactly once, immediately after a successful
/// link; a missing name means the driver optimized it out or the source
/// diverged from the contract, and construction fails.
pub struct ShaderProgram {
    program: glow::NativeProgram,
    a_position: u32,
    a_tex_coord: u32,
    u_model_view: glow::NativeUniformLocation,
    u_projection: glow::NativeUniformLocation,
    u_diffuse: glow::NativeUniformLocation,
}

impl ShaderProgram {
    /// Compile the canonical sources and link them into a program
    pub fn build(gl: &glow::Context) -> RenderResult<Self> {
        let vertex = compile_shader(gl, ShaderStage::Vertex, VERTEX_SHADER_SOURCE)?;
        let fragment = match compile_shader(gl, ShaderStage::Fragment, FRAGMENT_SHADER_SOURCE) {
            Ok(shader) => shader,
            Err(err) => {
                unsafe { gl.delete_shader(vertex) };
                return Err(err);
            }
        };
        Self::link(gl, vertex, fragment)
    }

    /// Link two compiled shaders into a program and resolve locations
    ///
    /// Takes ownership of both shader objects: they are detached and
    /// deleted after linking regardless of the outcome, since the linked
    /// program keeps its own copy of the stages.
    ///
    /// # Errors
    /// Returns [`RenderError::LinkFailed`] with the linker's info log, or
    /// [`RenderError::MissingShaderSymbol`] when a contracted attribute
    /// or uniform cannot be resolved afterwards.
    pub fn link(
        gl: &glow::Context,
        vertex: glow::NativeShader,
        fragment: glow::NativeShader,
    ) -> RenderResult<Self> {
        unsafe {
            let program = match gl.create_program() {
                Ok(program) => program,
                Err(e) => {
                    gl.delete_shader(vertex);
                    gl.delete_shader(fragment);
                    return Err(RenderError::ResourceCreationFailed(e));
                }
            };

            gl.attach_shader(program, vertex);
            gl.attach_shader(program, fragment);
            gl.link_program(program);

            gl.detach_shader(program, vertex);
            gl.detach_shader(program, fragment);
            gl.delete_shader(vertex);
            gl.delete_shader(fragment);

            if !gl.get_program_link_status(program) {
                let log = gl.get_program_info_log(program);
                gl.delete_program(program);
                log::error!("shader program link failed: {log}");
                return Err(RenderError::LinkFailed { log });
            }

            let resolved = Self::resolve_locations(gl, program);
            match resolved {
                Ok(shader_program) => {
                    log::info!("shader program linked, interface locations resolved");
                    Ok(shader_program)
                }
                Err(err) => {
                    gl.delete_program(program);
                    Err(err)
                }
            }
        }
    }

    fn resolve_locations(gl: &glow::Context, program: glow::NativeProgram) -> RenderResult<Self> {
        let attrib = |name: &str| unsafe {
            gl.get_attrib_location(program, name)
                .ok_or_else(|| RenderError::MissingShaderSymbol {
                    name: name.to_string(),
                })
        };
        let uniform = |name: &str| unsafe {
            gl.get_uniform_location(program, name)
                .ok_or_else(|| RenderError::MissingShaderSymbol {
                    name: name.to_string(),
                })
        };

        Ok(Self {
            program,
            a_position: attrib("a_position")?,
            a_tex_coord: attrib("a_tex_coord")?,
            u_model_view: uniform("modelView")?,
            u_projection: uniform("projection")?,
            u_diffuse: uniform("diffuse")?,
        })
    }

    /// The linked program handle
    pub fn handle(&self) -> glow::NativeProgram {
        self.program
    }

    /// Location of the `a_position` attribute
    pub fn position_attribute(&self) -> u32 {
        self.a_position
    }

    /// Location of the `a_tex_coord` attribute
    pub fn tex_coord_attribute(&self) -> u32 {
        self.a_tex_coord
    }

    /// Location of the `modelView` uniform
    pub fn model_view_uniform(&self) -> &glow::NativeUniformLocation {
        &self.u_model_view
    }

    /// Location of the `projection` uniform
    pub fn projection_uniform(&self) -> &glow::NativeUniformLocation {
        &self.u_projection
    }

    /// Location of the `diffuse` sampler uniform
    pub fn diffuse_uniform(&self) -> &glow::NativeUniformLocation {
        &self.u_diffuse
    }

    /// Delete the program object
    pub(crate) fn destroy(&self, gl: &glow::Context) {
        unsafe { gl.delete_program(self.program) };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sources_declare_the_contracted_interface() {
        for name in ["a_position", "a_tex_coord", "modelView", "projection"] {
            assert!(
                VERTEX_SHADER_SOURCE.contains(name),
                "vertex source is missing {name}"
            );
        }
        for name in ["diffuse", "v_tex_coord"] {
            assert!(
                FRAGMENT_SHADER_SOURCE.contains(name),
                "fragment source is missing {name}"
            );
        }
    }

    #[test]
    fn stage_maps_to_gl_enums() {
        assert_eq!(ShaderStage::Vertex.gl_enum(), glow::VERTEX_SHADER);
        assert_eq!(ShaderStage::Fragment.gl_enum(), glow::FRAGMENT_SHADER);
        assert_eq!(ShaderStage::Vertex.to_string(), "vertex");
        assert_eq!(ShaderStage::Fragment.to_string(), "fragment");
    }

    #[test]
    fn compile_errors_carry_the_diagnostic_log() {
        let err = RenderError::CompileFailed {
            stage: ShaderStage::Fragment,
            log: "0:3: syntax error".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("fragment"));
        assert!(message.contains("0:3: syntax error"));
    }
}
