use line_clipper::logging::{init_logging, LoggingConfig};
use line_clipper::prelude::*;

fn main() -> Result<(), String> {
    init_logging(LoggingConfig::default());

    let config = ViewerConfig::default();
    let mut window = Window::new(&config.title, config.width, config.height)?;
    let mut limiter = FrameLimiter::new(&window, config.frame_target_time());
    let mut viewer = Viewer::new(config).map_err(|e| e.to_string())?;

    log::info!("drag with the left mouse button to draw a line; G toggles the grid, C clears");

    'running: loop {
        for event in window.poll_events() {
            match event {
                WindowEvent::Quit => break 'running,
                WindowEvent::Resize(w, h) => {
                    window.resize(w, h)?;
                    viewer.resize(w, h).map_err(|e| e.to_string())?;
                }
                WindowEvent::PointerDown(p) => viewer.pointer_pressed(p),
                WindowEvent::PointerUp(p) => viewer.pointer_released(p),
                WindowEvent::ToggleGrid => viewer.toggle_grid(),
                WindowEvent::ClearSegment => viewer.clear_segment(),
            }
        }

        limiter.wait_and_get_delta(&window);

        viewer.update();
        viewer.render();

        window.present(viewer.frame_buffer())?;
    }

    Ok(())
}
