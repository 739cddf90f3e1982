//! Window management using GLFW
//!
//! Provides the drawing surface and the OpenGL ES context the renderer
//! treats as a precondition. Also acts as the frame scheduler: granting
//! the next frame swaps buffers, pumps events, and reports whether the
//! window wants to stay open.

use cube_render::prelude::FrameScheduler;
use glfw::Context;
use thiserror::Error;

/// Window management errors
#[derive(Error, Debug)]
pub enum WindowError {
    #[error("GLFW initialization failed")]
    InitializationFailed,

    #[error("Window creation failed")]
    CreationFailed,
}

pub type WindowResult<T> = Result<T, WindowError>;

/// GLFW window wrapper with an OpenGL ES 2.0 context
pub struct AppWindow {
    glfw: glfw::Glfw,
    window: glfw::PWindow,
    events: glfw::GlfwReceiver<(f64, glfw::WindowEvent)>,
}

impl AppWindow {
    pub fn new(title: &str, width: u32, height: u32) -> WindowResult<Self> {
        let mut glfw =
            glfw::init(glfw::fail_on_errors).map_err(|_| WindowError::InitializationFailed)?;

        // The shader sources target GLSL ES 1.00, so ask for an ES 2.0
        // context rather than a desktop core profile.
        glfw.window_hint(glfw::WindowHint::ClientApi(glfw::ClientApiHint::OpenGlEs));
        glfw.window_hint(glfw::WindowHint::ContextVersion(2, 0));
        glfw.window_hint(glfw::WindowHint::Resizable(false));

        let (mut window, events) = glfw
            .create_window(width, height, title, glfw::WindowMode::Windowed)
            .ok_or(WindowError::CreationFailed)?;

        window.make_current();
        window.set_key_polling(true);
        window.set_close_polling(true);

        // One swap per display refresh; the rotation step is
        // frame-count-driven, so this also sets the visual speed.
        glfw.set_swap_interval(glfw::SwapInterval::Sync(1));

        Ok(Self {
            glfw,
            window,
            events,
        })
    }

    /// Load a GL symbol from the current context
    pub fn get_proc_address(&mut self, procname: &str) -> *const std::ffi::c_void {
        self.window.get_proc_address(procname) as *const _
    }

    pub fn get_framebuffer_size(&self) -> (u32, u32) {
        let (width, height) = self.window.get_framebuffer_size();
        (width as u32, height as u32)
    }
}

impl FrameScheduler for AppWindow {
    fn request_next_frame(&mut self) -> bool {
        self.window.swap_buffers();
        self.glfw.poll_events();

        for (_, event) in glfw::flush_messages(&self.events) {
            if let glfw::WindowEvent::Key(glfw::Key::Escape, _, glfw::Action::Press, _) = event {
                self.window.set_should_close(true);
            }
        }

        !self.window.should_close()
    }
}
