//! Scoped GL binding guards
//!
//! The underlying API is a bind-then-configure global state machine, so
//! order-of-operations bugs come from bindings silently outliving the
//! code that made them. Each guard here binds on construction and clears
//! the binding when dropped, which keeps every tick's state explicit:
//! nothing rendered in frame N can depend on residue from frame N-1.

use glow::HasContext;

/// Scoped `use_program` binding
pub struct ProgramBinding<'a> {
    gl: &'a glow::Context,
}

impl<'a> ProgramBinding<'a> {
    /// Bind the given program for the lifetime of the guard
    pub fn bind(gl: &'a glow::Context, program: glow::NativeProgram) -> Self {
        unsafe { gl.use_program(Some(program)) };
        Self { gl }
    }
}

impl Drop for ProgramBinding<'_> {
    fn drop(&mut self) {
        unsafe { self.gl.use_program(None) };
    }
}

/// Scoped `ARRAY_BUFFER` binding
pub struct ArrayBufferBinding<'a> {
    gl: &'a glow::Context,
}

impl<'a> ArrayBufferBinding<'a> {
    /// Bind the given vertex buffer for the lifetime of the guard
    pub fn bind(gl: &'a glow::Context, buffer: glow::NativeBuffer) -> Self {
        unsafe { gl.bind_buffer(glow::ARRAY_BUFFER, Some(buffer)) };
        Self { gl }
    }
}

impl Drop for ArrayBufferBinding<'_> {
    fn drop(&mut self) {
        unsafe { self.gl.bind_buffer(glow::ARRAY_BUFFER, None) };
    }
}

/// Scoped `ELEMENT_ARRAY_BUFFER` binding
pub struct ElementBufferBinding<'a> {
    gl: &'a glow::Context,
}

impl<'a> ElementBufferBinding<'a> {
    /// Bind the given index buffer for the lifetime of the guard
    pub fn bind(gl: &'a glow::Context, buffer: glow::NativeBuffer) -> Self {
        unsafe { gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, Some(buffer)) };
        Self { gl }
    }
}

impl Drop for ElementBufferBinding<'_> {
    fn drop(&mut self) {
        unsafe { self.gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, None) };
    }
}

/// Scoped 2D texture binding on a specific texture unit
///
/// Selects the unit, binds the texture, and on drop unbinds it from that
/// same unit. The active-unit selection itself is reissued by every
/// caller, so the guard does not need to restore it.
pub struct TextureBinding<'a> {
    gl: &'a glow::Context,
    unit: u32,
}

impl<'a> TextureBinding<'a> {
    /// Bind `texture` to `TEXTURE0 + unit` for the lifetime of the guard
    pub fn bind(gl: &'a glow::Context, texture: glow::NativeTexture, unit: u32) -> Self {
        unsafe {
            gl.active_texture(glow::TEXTURE0 + unit);
            gl.bind_texture(glow::TEXTURE_2D, Some(texture));
        }
        Self { gl, unit }
    }
}

impl Drop for TextureBinding<'_> {
    fn drop(&mut self) {
        unsafe {
            self.gl.active_texture(glow::TEXTURE0 + self.unit);
            self.gl.bind_texture(glow::TEXTURE_2D, None);
        }
    }
}
