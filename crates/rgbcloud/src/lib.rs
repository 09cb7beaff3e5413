//! rgbcloud: data model and projection math for an RGB-cube pixel scatter.
//!
//! Sampled image pixels become points inside the unit RGB cube (x=R, y=G,
//! z=B, all normalized to [0,1]) and are projected onto the screen with a
//! pseudo-3D orthographic projection:
//!
//! - [`PointSet`] holds one sampled point per surviving pixel.
//! - [`ViewState`] carries the orbit (pitch/yaw) and zoom parameters.
//! - [`project`] maps a cube point to screen coordinates plus a depth used
//!   only for painter's-algorithm ordering.
//! - [`fit_zoom`] picks a zoom so a freshly sampled cloud spans ~70% of the
//!   viewport.
//!
//! Everything here is pure math over plain values: no windowing, no pixels,
//! no device-pixel-ratio. That keeps the projection exercisable headless.

pub mod fit;
pub mod points;
pub mod project;
pub mod view;

pub use fit::fit_zoom;
pub use points::{sample_rgba, Point3D, PointSet, ALPHA_MIN};
pub use project::{project, ProjectedPoint, BASE_FILL};
pub use view::ViewState;
