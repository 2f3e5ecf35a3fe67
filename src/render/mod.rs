//! Raster output for the game views.
//!
//! Engines draw into a `Surface` (a plain pixel buffer) from their current
//! state only. The terminal frontend samples the surface to put it on
//! screen, so engines never depend on a terminal backend.

mod surface;

pub use surface::{Rgb, Surface};
