//! Rotating textured cube demo
//!
//! Opens an 800x600 window with an OpenGL ES 2.0 context, builds a
//! renderer around a blue "L" label texture, and spins the cube until
//! the window closes. The window doubles as the frame scheduler, so one
//! frame is drawn per display refresh.

mod label_texture;
mod window;

use cube_render::prelude::*;
use label_texture::LabelTexture;
use window::AppWindow;

const WINDOW_WIDTH: u32 = 800;
const WINDOW_HEIGHT: u32 = 600;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    cube_render::foundation::logging::init();

    log::info!("starting rotating cube demo");

    let mut app_window = AppWindow::new("Rotating Cube", WINDOW_WIDTH, WINDOW_HEIGHT)?;

    // The context is current on this thread from here on; hand the
    // loader to the renderer and let it run its capability check.
    let context = unsafe { GlContext::from_loader(|name| app_window.get_proc_address(name)) }?;

    let config = RendererConfig::default();
    let provider = LabelTexture::new("L", 128, 128, [0, 0, 255, 255]);

    let (width, height) = app_window.get_framebuffer_size();
    let mut renderer = Renderer::with_provider(
        context,
        &config,
        &provider,
        SurfaceSize::new(width, height),
    )?;

    renderer.run(&mut app_window);

    log::info!(
        "demo finished after {} frames ({:.1} rad of rotation)",
        renderer.frame_count(),
        renderer.rotation_angle()
    );
    Ok(())
}
