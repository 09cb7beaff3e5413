//! Pointer and wheel interaction driving the view state.

use rgbcloud::ViewState;

/// Radians of orbit per logical pixel of pointer travel.
const DRAG_SENSITIVITY: f32 = 0.006;
/// Multiplicative zoom step per wheel notch, one for each scroll direction.
const WHEEL_ZOOM_IN: f32 = 1.04;
const WHEEL_ZOOM_OUT: f32 = 0.96;

/// Pointer/wheel input in logical viewport coordinates.
///
/// The windowing layer translates its native events (or polled state) into
/// these; the controller itself never touches a window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerDown { x: f32, y: f32 },
    PointerMove { x: f32, y: f32 },
    PointerUp,
    PointerCancel,
    /// Positive `delta` scrolls toward zooming in.
    Wheel { delta: f32 },
}

/// Orbit controller: Idle until a pointer goes down, Dragging until it is
/// released or cancelled.
///
/// The Dragging state doubles as the pointer capture: moves keep orbiting no
/// matter where the pointer sits, and every exit path (up or cancel) releases
/// the capture by clearing the recorded position.
pub struct OrbitController {
    dragging: bool,
    last_pointer: Option<(f32, f32)>,
}

impl OrbitController {
    pub fn new() -> Self {
        Self {
            dragging: false,
            last_pointer: None,
        }
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Feeds one input event, mutating `view` synchronously.
    ///
    /// Returns `true` when the view changed and a redraw is due.
    pub fn handle_event(&mut self, event: &InputEvent, view: &mut ViewState) -> bool {
        match *event {
            InputEvent::PointerDown { x, y } => {
                self.dragging = true;
                self.last_pointer = Some((x, y));
                false
            }
            InputEvent::PointerMove { x, y } => {
                if !self.dragging {
                    return false;
                }
                let Some((lx, ly)) = self.last_pointer else {
                    return false;
                };
                let dx = (x - lx) * DRAG_SENSITIVITY;
                let dy = (y - ly) * DRAG_SENSITIVITY;
                view.ry += dx;
                view.rx = ViewState::clamp_pitch(view.rx + dy);
                self.last_pointer = Some((x, y));
                true
            }
            InputEvent::PointerUp | InputEvent::PointerCancel => {
                self.dragging = false;
                self.last_pointer = None;
                false
            }
            InputEvent::Wheel { delta } => {
                let factor = if delta > 0.0 { WHEEL_ZOOM_IN } else { WHEEL_ZOOM_OUT };
                view.zoom = ViewState::clamp_wheel_zoom(view.zoom * factor);
                true
            }
        }
    }
}

impl Default for OrbitController {
    fn default() -> Self {
        Self::new()
    }
}
