use eframe::egui::{Color32, CornerRadius, Painter, Rect, Stroke, StrokeKind, vec2};

pub const BORDER_WIDTH: f32 = 2.0;

/// Rectangle the rounded outline is stroked along, pulled in so the stroke stays inside `outer`.
pub fn border_rect(outer: Rect) -> Rect {
    Rect::from_min_max(outer.min + vec2(1.0, 1.0), outer.max - vec2(2.0, 2.0))
}

/// Padding that keeps content clear of the rounded corners.
pub fn border_inset(radius: u8) -> f32 {
    f32::from(radius) + 1.0
}

pub fn paint_rounded_border(painter: &Painter, outer: Rect, radius: u8, color: Color32) {
    painter.rect_stroke(
        border_rect(outer),
        CornerRadius::same(radius),
        Stroke::new(BORDER_WIDTH, color),
        StrokeKind::Middle,
    );
}
