//! GPU-resident geometry buffers
//!
//! Uploads the three cube arrays once as `STATIC_DRAW` buffers. There is
//! no update path by design: replacing the geometry means rebuilding the
//! set. Buffer contents are retained for the lifetime of the context.

use glow::HasContext;

use super::binding::{ArrayBufferBinding, ElementBufferBinding};
use super::mesh::CubeMesh;
use super::{RenderError, RenderResult};

/// Handles to the uploaded cube geometry
///
/// Write-once: the only operations after [`GeometryBuffers::build`] are
/// binding for a draw and final deletion.
pub struct GeometryBuffers {
    position: glow::NativeBuffer,
    tex_coord: glow::NativeBuffer,
    index: glow::NativeBuffer,
    index_count: i32,
}

impl GeometryBuffers {
    /// Upload a mesh into three immutable GPU buffers
    ///
    /// # Errors
    /// Returns [`RenderError::ResourceCreationFailed`] when a buffer
    /// object cannot be allocated.
    pub fn build(gl: &glow::Context, mesh: &CubeMesh) -> RenderResult<Self> {
        let position = upload_array_buffer(gl, bytemuck::cast_slice(&mesh.positions))?;
        let tex_coord = upload_array_buffer(gl, bytemuck::cast_slice(&mesh.tex_coords))?;
        let index = upload_index_buffer(gl, bytemuck::cast_slice(&mesh.indices))?;

        log::debug!(
            "geometry uploaded: {} vertices, {} indices",
            mesh.positions.len(),
            mesh.indices.len()
        );

        Ok(Self {
            position,
            tex_coord,
            index,
            index_count: mesh.indices.len() as i32,
        })
    }

    /// Buffer holding vertex positions (3 floats each, tightly packed)
    pub fn position_buffer(&self) -> glow::NativeBuffer {
        self.position
    }

    /// Buffer holding texture coordinates (2 floats each, tightly packed)
    pub fn tex_coord_buffer(&self) -> glow::NativeBuffer {
        self.tex_coord
    }

    /// Buffer holding 16-bit triangle indices
    pub fn index_buffer(&self) -> glow::NativeBuffer {
        self.index
    }

    /// Number of indices to draw
    pub fn index_count(&self) -> i32 {
        self.index_count
    }

    /// Delete all three buffer objects
    pub(crate) fn destroy(&self, gl: &glow::Context) {
        unsafe {
            gl.delete_buffer(self.index);
            gl.delete_buffer(self.tex_coord);
            gl.delete_buffer(self.position);
        }
    }
}

fn upload_array_buffer(gl: &glow::Context, data: &[u8]) -> RenderResult<glow::NativeBuffer> {
    let buffer = unsafe { gl.create_buffer() }.map_err(RenderError::ResourceCreationFailed)?;
    let _bound = ArrayBufferBinding::bind(gl, buffer);
    unsafe { gl.buffer_data_u8_slice(glow::ARRAY_BUFFER, data, glow::STATIC_DRAW) };
    Ok(buffer)
}

fn upload_index_buffer(gl: &glow::Context, data: &[u8]) -> RenderResult<glow::NativeBuffer> {
    let buffer = unsafe { gl.create_buffer() }.map_err(RenderError::ResourceCreationFailed)?;
    let _bound = ElementBufferBinding::bind(gl, buffer);
    unsafe { gl.buffer_data_u8_slice(glow::ELEMENT_ARRAY_BUFFER, data, glow::STATIC_DRAW) };
    Ok(buffer)
}
