//! Application state tying the point set, view, controller and framebuffer
//! together.

use crate::camera::{InputEvent, OrbitController};
use crate::data::SourceImage;
use crate::framebuffer::Frame;
use crate::scene;
use anyhow::Result;
use log::info;
use rgbcloud::{fit_zoom, PointSet, ViewState};
use std::path::Path;

/// Default sampling step ("medium").
pub const DEFAULT_STEP: u32 = 4;

pub struct App {
    pub frame: Frame,
    pub view: ViewState,
    pub controller: OrbitController,
    points: PointSet,
    source: Option<SourceImage>,
    step: u32,
}

impl App {
    pub fn new(logical_w: f32, logical_h: f32, scale: f32, step: u32) -> Self {
        let mut app = Self {
            frame: Frame::new(logical_w, logical_h, scale),
            view: ViewState::default(),
            controller: OrbitController::new(),
            points: PointSet::default(),
            source: None,
            step: step.max(1),
        };
        app.redraw();
        app
    }

    #[inline]
    pub fn points(&self) -> &PointSet {
        &self.points
    }

    #[inline]
    pub fn step(&self) -> u32 {
        self.step
    }

    /// Decodes an image, samples it at the current step and rebuilds the
    /// cloud from the result. The decoded pixels are retained for later
    /// resampling.
    pub fn load_image(&mut self, path: &Path) -> Result<()> {
        let source = SourceImage::open(path)?;
        let points = source.sample(self.step);
        self.source = Some(source);
        self.rebuild(points);
        Ok(())
    }

    /// Switches the sampling-step preset and resamples the retained source,
    /// if any.
    pub fn set_step(&mut self, step: u32) {
        let step = step.max(1);
        if step == self.step {
            return;
        }
        self.step = step;
        if let Some(src) = &self.source {
            let points = src.sample(step);
            self.rebuild(points);
        }
    }

    /// Installs a freshly sampled point set: auto-fit once, then redraw.
    pub fn rebuild(&mut self, points: PointSet) {
        self.points = points;
        let (w, h) = self.frame.logical_size();
        self.view.zoom = fit_zoom(&self.points, &self.view, w, h);
        info!(
            "Rebuilt cloud: {} points, fit zoom {:.3}",
            self.points.len(),
            self.view.zoom
        );
        self.redraw();
    }

    /// Restores the default orientation and zoom.
    pub fn reset_view(&mut self) {
        self.view.reset();
        self.redraw();
    }

    /// Feeds one pointer/wheel event; redraws only when the view changed.
    pub fn handle_event(&mut self, event: &InputEvent) {
        if self.controller.handle_event(event, &mut self.view) {
            self.redraw();
        }
    }

    /// Applies a new surface size / device pixel ratio; redraws only when
    /// something actually changed.
    pub fn resize(&mut self, logical_w: f32, logical_h: f32, scale: f32) {
        if self.frame.resize(logical_w, logical_h, scale) {
            self.redraw();
        }
    }

    /// Renders the current state into the framebuffer.
    pub fn redraw(&mut self) {
        scene::render(&mut self.frame, &self.points, &self.view);
    }
}
