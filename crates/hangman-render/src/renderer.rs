//! Renderer trait abstraction.

use hangman_core::{CANVAS_SIZE, GallowsPart};
use kurbo::{Affine, Rect};
use peniko::Color;
use thiserror::Error;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("Initialization failed: {0}")]
    InitFailed(String),
    #[error("Render failed: {0}")]
    RenderFailed(String),
    #[error("Surface error: {0}")]
    Surface(String),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RendererError>;

/// Colors and stroke settings for the gallows canvas.
#[derive(Debug, Clone, Copy)]
pub struct GallowsStyle {
    /// Canvas panel fill.
    pub panel_color: Color,
    /// Canvas panel border.
    pub border_color: Color,
    /// Border width in logical pixels.
    pub border_width: f64,
    /// Color of the scaffold and figure.
    pub ink_color: Color,
    /// Stroke width in canvas units.
    pub stroke_width: f64,
    /// Hand-drawn wobble (0 = clean lines).
    pub roughness: f64,
}

impl Default for GallowsStyle {
    fn default() -> Self {
        Self {
            panel_color: Color::WHITE,
            border_color: Color::from_rgba8(204, 204, 204, 255),
            border_width: 2.0,
            ink_color: Color::from_rgba8(51, 51, 51, 255),
            stroke_width: 2.5,
            roughness: 0.6,
        }
    }
}

/// Context for a single render frame.
pub struct RenderContext<'a> {
    /// Body parts to draw on top of the scaffold.
    pub parts: &'a [GallowsPart],
    /// Where the canvas sits on the surface, in physical pixels.
    pub canvas_rect: Rect,
    /// Device pixel ratio (for HiDPI).
    pub scale_factor: f64,
    /// Window background color.
    pub background_color: Color,
    /// Canvas appearance.
    pub style: GallowsStyle,
    /// Seed for the hand-drawn effect. Stable within a round.
    pub seed: u32,
}

impl<'a> RenderContext<'a> {
    /// Create a new render context.
    pub fn new(parts: &'a [GallowsPart], canvas_rect: Rect) -> Self {
        Self {
            parts,
            canvas_rect,
            scale_factor: 1.0,
            background_color: Color::from_rgba8(245, 245, 245, 255),
            style: GallowsStyle::default(),
            seed: 1,
        }
    }

    /// Set the scale factor for HiDPI.
    pub fn with_scale_factor(mut self, scale_factor: f64) -> Self {
        self.scale_factor = scale_factor;
        self
    }

    /// Set the background color.
    pub fn with_background(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    /// Set the canvas style.
    pub fn with_style(mut self, style: GallowsStyle) -> Self {
        self.style = style;
        self
    }

    /// Set the hand-drawn seed.
    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    /// Transform from gallows canvas units to surface pixels.
    pub fn canvas_transform(&self) -> Affine {
        let scale = self.canvas_scale();
        Affine::translate((self.canvas_rect.x0, self.canvas_rect.y0)) * Affine::scale(scale)
    }

    /// Pixels per canvas unit. Non-square rects keep the aspect ratio.
    pub fn canvas_scale(&self) -> f64 {
        let side = self.canvas_rect.width().min(self.canvas_rect.height());
        side / CANVAS_SIZE
    }
}

/// Trait for rendering backends.
///
/// Implementations can use Vello, wgpu directly, or other rendering engines.
pub trait Renderer: Send + Sync {
    /// Build the scene/command buffer for a frame.
    ///
    /// This method is called once per frame and should prepare all drawing commands.
    fn build_scene(&mut self, ctx: &RenderContext);

    /// Get the background color (for clearing).
    fn background_color(&self, ctx: &RenderContext) -> Color {
        ctx.background_color
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Point;

    #[test]
    fn test_canvas_transform_maps_corners() {
        let ctx = RenderContext::new(&[], Rect::new(100.0, 50.0, 600.0, 550.0));
        let transform = ctx.canvas_transform();
        assert_eq!(transform * Point::ZERO, Point::new(100.0, 50.0));
        assert_eq!(transform * Point::new(CANVAS_SIZE, CANVAS_SIZE), Point::new(600.0, 550.0));
    }

    #[test]
    fn test_canvas_scale_uses_shorter_side() {
        let ctx = RenderContext::new(&[], Rect::new(0.0, 0.0, 500.0, 250.0));
        assert_eq!(ctx.canvas_scale(), 1.0);
    }

    #[test]
    fn test_builder() {
        let parts = [GallowsPart::Head];
        let ctx = RenderContext::new(&parts, Rect::ZERO)
            .with_scale_factor(2.0)
            .with_seed(7)
            .with_background(Color::WHITE);
        assert_eq!(ctx.scale_factor, 2.0);
        assert_eq!(ctx.seed, 7);
        assert_eq!(ctx.parts.len(), 1);
    }
}
