// src/lib.rs
//! RGB-cube scatter viewer.
//!
//! Presents sampled image pixels as an orbitable point cloud inside the unit
//! RGB cube. Rendering is plain software: depth-sorted circles blended into a
//! `u32` framebuffer, no GPU involved.

pub mod app;
pub mod camera;
pub mod data;
pub mod framebuffer;
pub mod scene;
