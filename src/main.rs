use clap::Parser;

use rastro::config::Cli;
use rastro::prelude::*;

fn run_window(config: &DemoConfig, scene: &Scene) -> Result<()> {
    let mut mode = DemoMode::default();
    let mut window = Window::new(&mode.title(), config.width, config.height)?;
    let mut frame = FrameBuffer::new(window.width(), window.height());
    let mut limiter = FrameLimiter::new(&window, config.frame_target_ms());

    loop {
        match window.poll_events() {
            WindowEvent::Quit => break,
            WindowEvent::NextMode => {
                mode = mode.next();
                log::debug!("switched to {}", mode.title());
                window.set_title(&mode.title())?;
            }
            WindowEvent::Resize(w, h) => {
                window.resize(w, h)?;
                frame.resize(w, h);
            }
            WindowEvent::None => {}
        }

        scene.render_frame(mode, &mut frame)?;
        window.present(frame.as_bytes())?;
        let delta = limiter.wait_and_get_delta(&window);
        log::trace!("frame took {delta} ms");
    }

    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = DemoConfig::from_cli(Cli::parse())?;
    log::info!(
        "{}x{} @ {} fps, clip x [{}, {}] y [{}, {}]",
        config.width,
        config.height,
        config.fps,
        config.clip.x_min(),
        config.clip.x_max(),
        config.clip.y_min(),
        config.clip.y_max()
    );

    let scene = Scene::new(config.clip);

    match &config.export_dir {
        Some(dir) => {
            scene.export_modes(config.width, config.height, dir)?;
        }
        None => run_window(&config, &scene)?,
    }

    Ok(())
}
