//! Entry point for the RGB-cube scatter viewer.
//!
//! Drag to orbit, scroll to zoom, `R` resets the view, `1`/`2`/`3` switch
//! the sampling step (coarse/medium/fine), Escape quits.

use anyhow::{anyhow, Result};
use clap::Parser;
use minifb::{Key, KeyRepeat, MouseButton, MouseMode, Window, WindowOptions};
use rgbcloud_viewer::app::{App, DEFAULT_STEP};
use rgbcloud_viewer::camera::InputEvent;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "rgbcloud-viewer", version)]
struct Args {
    /// Image whose pixels are scattered into the RGB cube. Without it only
    /// the reference axes are shown.
    image: Option<PathBuf>,

    /// Grid sampling step: one point per step x step block of pixels.
    #[arg(long, default_value_t = DEFAULT_STEP)]
    step: u32,

    /// Initial window width in logical pixels.
    #[arg(long, default_value_t = 800)]
    width: usize,

    /// Initial window height in logical pixels.
    #[arg(long, default_value_t = 600)]
    height: usize,
}

fn main() -> Result<()> {
    // Initialize logging; default to "info" if RUST_LOG is unset.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let mut window = Window::new(
        "RGB Cube Scatter",
        args.width,
        args.height,
        WindowOptions {
            resize: true,
            ..WindowOptions::default()
        },
    )
    .map_err(|e| anyhow!("failed to create window: {e}"))?;
    window.limit_update_rate(Some(Duration::from_micros(16_667)));

    let mut app = App::new(args.width as f32, args.height as f32, 1.0, args.step);
    if let Some(path) = &args.image {
        if let Err(err) = app.load_image(path) {
            log::error!("Failed to load image: {err:#}");
        }
    }

    let mut was_down = false;
    while window.is_open() && !window.is_key_down(Key::Escape) {
        // Window size is polled; the app only redraws when it changed.
        let (w, h) = window.get_size();
        app.resize(w as f32, h as f32, 1.0);

        if window.is_key_pressed(Key::R, KeyRepeat::No) {
            app.reset_view();
        }
        if window.is_key_pressed(Key::Key1, KeyRepeat::No) {
            app.set_step(8);
        }
        if window.is_key_pressed(Key::Key2, KeyRepeat::No) {
            app.set_step(4);
        }
        if window.is_key_pressed(Key::Key3, KeyRepeat::No) {
            app.set_step(2);
        }

        // Translate polled mouse state into pointer events.
        let down = window.get_mouse_down(MouseButton::Left) && window.is_active();
        let pos = window.get_mouse_pos(MouseMode::Pass);
        match (was_down, down, pos) {
            (false, true, Some((x, y))) => app.handle_event(&InputEvent::PointerDown { x, y }),
            (true, true, Some((x, y))) => app.handle_event(&InputEvent::PointerMove { x, y }),
            (true, false, _) => app.handle_event(&InputEvent::PointerUp),
            _ => {}
        }
        if app.controller.is_dragging() && !window.is_active() {
            // Focus lost mid-drag: release the capture.
            app.handle_event(&InputEvent::PointerCancel);
        }
        was_down = down;

        if let Some((_, scroll_y)) = window.get_scroll_wheel() {
            if scroll_y != 0.0 {
                // Scrolling down zooms in, matching wheel deltaY semantics.
                app.handle_event(&InputEvent::Wheel { delta: -scroll_y });
            }
        }

        window
            .update_with_buffer(app.frame.buffer(), app.frame.width(), app.frame.height())
            .map_err(|e| anyhow!("failed to present frame: {e}"))?;
    }

    Ok(())
}
