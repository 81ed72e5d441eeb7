//! Render-pass context handed to style resolvers.
//!
//! This module provides:
//!
//! - [`ZoomState`]: read-only access to the current map scale
//! - [`DisplayContext`]: the per-render bundle of zoom state and drawing surface
//! - [`MarkerSurface`]: the append-only sink for SVG marker definitions
//! - [`MarkerDefs`]: an in-memory surface that can be rendered as `<defs>`
//!
//! The display owns neither the zoom state nor the surface; both are borrowed
//! from the rendering engine for the duration of one pass.

mod marker;

pub use marker::{CircleDef, MarkerDef, MarkerDefs, MarkerSurface};

/// Read-only view of the viewport zoom.
pub trait ZoomState {
    /// Current scale factor; 1 is neutral.
    fn scale(&self) -> f64;
}

/// A zoom state pinned to one scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedZoom(pub f64);

impl ZoomState for FixedZoom {
    fn scale(&self) -> f64 {
        self.0
    }
}

impl ZoomState for f64 {
    fn scale(&self) -> f64 {
        *self
    }
}

/// Everything a resolver may look at besides the element itself.
pub struct DisplayContext<'a> {
    zoom: &'a dyn ZoomState,
    surface: &'a mut dyn MarkerSurface,
}

impl<'a> DisplayContext<'a> {
    pub fn new(zoom: &'a dyn ZoomState, surface: &'a mut dyn MarkerSurface) -> Self {
        Self { zoom, surface }
    }

    /// Current zoom scale.
    pub fn scale(&self) -> f64 {
        self.zoom.scale()
    }

    /// The drawing surface markers are appended to.
    pub fn surface(&mut self) -> &mut dyn MarkerSurface {
        &mut *self.surface
    }
}

impl std::fmt::Debug for DisplayContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DisplayContext")
            .field("scale", &self.scale())
            .finish_non_exhaustive()
    }
}
