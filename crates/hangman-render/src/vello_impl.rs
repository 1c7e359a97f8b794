//! Vello-based renderer implementation.

use crate::renderer::{GallowsStyle, RenderContext, Renderer};
use hangman_core::{GallowsPart, ScaffoldPiece};
use kurbo::{Affine, BezPath, PathEl, Point, Rect, RoundedRect, Stroke};
use peniko::{Color, Fill};
use vello::Scene;

/// Corner radius of the canvas panel, in logical pixels.
const PANEL_RADIUS: f64 = 4.0;

/// Vello-based renderer for the gallows canvas.
pub struct VelloRenderer {
    /// The Vello scene being built.
    scene: Scene,
}

impl Default for VelloRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Simple seeded random number generator (xorshift32).
/// Used for deterministic hand-drawn effects.
struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    fn new(seed: u32) -> Self {
        Self { state: seed.max(1) }
    }

    fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    /// Random float in range [-1, 1]
    fn next_f64(&mut self) -> f64 {
        (self.next_u32() as f64 / u32::MAX as f64) * 2.0 - 1.0
    }

    fn offset(&mut self, amount: f64) -> f64 {
        self.next_f64() * amount
    }
}

/// Give a path a sketched look.
///
/// Endpoints are nudged so strokes over- or under-shoot their joints and
/// straight segments bow slightly in the middle. The same `seed` and
/// `stroke_index` always produce the same path.
fn apply_hand_drawn_effect(
    path: &BezPath,
    roughness: f64,
    seed: u32,
    stroke_index: u32,
) -> BezPath {
    if roughness <= 0.0 {
        return path.clone();
    }

    let max_offset = roughness * 1.5;
    let combined_seed = seed.wrapping_add(stroke_index.wrapping_mul(99991));
    let mut rng = SimpleRng::new(combined_seed);

    let mut result = BezPath::new();
    let mut last_point = Point::ZERO;

    for el in path.elements() {
        match el {
            PathEl::MoveTo(p) => {
                result.move_to(Point::new(
                    p.x + rng.offset(max_offset),
                    p.y + rng.offset(max_offset),
                ));
                last_point = *p;
            }
            PathEl::LineTo(p) => {
                let dx = p.x - last_point.x;
                let dy = p.y - last_point.y;
                let len = (dx * dx + dy * dy).sqrt();

                // Bow perpendicular to the segment, proportional to its length.
                let bow = rng.offset(roughness * roughness * len / 200.0);
                let (perp_x, perp_y) = if len > 0.001 {
                    (-dy / len, dx / len)
                } else {
                    (0.0, 0.0)
                };
                let control = Point::new(
                    (last_point.x + p.x) / 2.0 + perp_x * bow,
                    (last_point.y + p.y) / 2.0 + perp_y * bow,
                );
                let end = Point::new(
                    p.x + rng.offset(max_offset),
                    p.y + rng.offset(max_offset),
                );
                result.quad_to(control, end);
                last_point = *p;
            }
            PathEl::QuadTo(p1, p2) => {
                let c = Point::new(
                    p1.x + rng.offset(max_offset * 0.7),
                    p1.y + rng.offset(max_offset * 0.7),
                );
                let end = Point::new(p2.x + rng.offset(max_offset), p2.y + rng.offset(max_offset));
                result.quad_to(c, end);
                last_point = *p2;
            }
            PathEl::CurveTo(p1, p2, p3) => {
                let c1 = Point::new(
                    p1.x + rng.offset(max_offset * 0.5),
                    p1.y + rng.offset(max_offset * 0.5),
                );
                let c2 = Point::new(
                    p2.x + rng.offset(max_offset * 0.5),
                    p2.y + rng.offset(max_offset * 0.5),
                );
                let end = Point::new(p3.x + rng.offset(max_offset), p3.y + rng.offset(max_offset));
                result.curve_to(c1, c2, end);
                last_point = *p3;
            }
            PathEl::ClosePath => {
                result.close_path();
            }
        }
    }

    result
}

impl VelloRenderer {
    /// Create a new Vello renderer.
    pub fn new() -> Self {
        Self {
            scene: Scene::new(),
        }
    }

    /// Get the built scene for rendering.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Take ownership of the scene (resets internal scene).
    pub fn take_scene(&mut self) -> Scene {
        std::mem::take(&mut self.scene)
    }

    /// Draw the white canvas panel with its border.
    fn render_panel(&mut self, rect: Rect, style: &GallowsStyle, scale_factor: f64) {
        let panel = RoundedRect::from_rect(rect, PANEL_RADIUS * scale_factor);
        self.scene
            .fill(Fill::NonZero, Affine::IDENTITY, style.panel_color, None, &panel);

        let border = Stroke::new(style.border_width * scale_factor);
        self.scene
            .stroke(&border, Affine::IDENTITY, style.border_color, None, &panel);
    }

    /// Stroke one gallows path, twice with different wobble when sketchy.
    fn render_stroke(
        &mut self,
        path: &BezPath,
        style: &GallowsStyle,
        transform: Affine,
        seed: u32,
    ) {
        let stroke = Stroke::new(style.stroke_width);

        if style.roughness > 0.0 {
            for stroke_index in 0..2 {
                let sketched = apply_hand_drawn_effect(path, style.roughness, seed, stroke_index);
                self.scene
                    .stroke(&stroke, transform, style.ink_color, None, &sketched);
            }
        } else {
            self.scene
                .stroke(&stroke, transform, style.ink_color, None, path);
        }
    }

    fn render_scaffold(&mut self, style: &GallowsStyle, transform: Affine, seed: u32) {
        for (index, piece) in ScaffoldPiece::ALL.into_iter().enumerate() {
            self.render_stroke(&piece.path(), style, transform, seed.wrapping_add(index as u32));
        }
    }

    fn render_part(
        &mut self,
        part: GallowsPart,
        style: &GallowsStyle,
        transform: Affine,
        seed: u32,
    ) {
        let part_seed = seed.wrapping_add(100 + part.threshold() as u32);
        self.render_stroke(&part.path(), style, transform, part_seed);
    }
}

impl Renderer for VelloRenderer {
    fn build_scene(&mut self, ctx: &RenderContext) {
        self.scene.reset();

        if ctx.canvas_rect.is_zero_area() {
            log::trace!("Canvas not laid out yet, skipping gallows");
            return;
        }

        let style = ctx.style;
        let transform = ctx.canvas_transform();

        self.render_panel(ctx.canvas_rect, &style, ctx.scale_factor);
        self.render_scaffold(&style, transform, ctx.seed);
        for &part in ctx.parts {
            self.render_part(part, &style, transform, ctx.seed);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hangman_core::visible_parts;

    fn canvas_rect() -> Rect {
        Rect::new(125.0, 100.0, 375.0, 350.0)
    }

    #[test]
    fn test_renderer_creation() {
        let renderer = VelloRenderer::new();
        assert!(renderer.scene().encoding().is_empty());
    }

    #[test]
    fn test_empty_canvas_rect_draws_nothing() {
        let mut renderer = VelloRenderer::new();
        let ctx = RenderContext::new(&[], Rect::ZERO);
        renderer.build_scene(&ctx);
        assert!(renderer.scene().encoding().is_empty());
    }

    #[test]
    fn test_scaffold_without_parts() {
        let mut renderer = VelloRenderer::new();
        let ctx = RenderContext::new(&[], canvas_rect());
        renderer.build_scene(&ctx);
        assert!(!renderer.scene().encoding().is_empty());
    }

    #[test]
    fn test_parts_add_paths() {
        let mut renderer = VelloRenderer::new();

        let none = visible_parts(6);
        renderer.build_scene(&RenderContext::new(&none, canvas_rect()));
        let scaffold_paths = renderer.take_scene().encoding().n_paths;

        let all = visible_parts(0);
        renderer.build_scene(&RenderContext::new(&all, canvas_rect()));
        let full_paths = renderer.take_scene().encoding().n_paths;

        assert!(full_paths > scaffold_paths);
    }

    #[test]
    fn test_build_scene_resets_previous_frame() {
        let mut renderer = VelloRenderer::new();
        let all = visible_parts(0);
        renderer.build_scene(&RenderContext::new(&all, canvas_rect()));
        let first = renderer.scene().encoding().n_paths;
        renderer.build_scene(&RenderContext::new(&all, canvas_rect()));
        assert_eq!(renderer.scene().encoding().n_paths, first);
    }

    #[test]
    fn test_hand_drawn_effect_is_deterministic() {
        let path = GallowsPart::Body.path();
        let a = apply_hand_drawn_effect(&path, 1.0, 42, 0);
        let b = apply_hand_drawn_effect(&path, 1.0, 42, 0);
        let c = apply_hand_drawn_effect(&path, 1.0, 42, 1);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_zero_roughness_keeps_path() {
        let path = ScaffoldPiece::Beam.path();
        assert_eq!(apply_hand_drawn_effect(&path, 0.0, 3, 0), path);
    }
}
