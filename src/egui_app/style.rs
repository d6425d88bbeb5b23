//! Palette and egui color mappings for the interactive view.

use eframe::egui::{Color32, CornerRadius, Stroke, Visuals};

use crate::analysis::{EdgeColor, FillColor};

/// UI chrome colors; the plot canvases themselves stay white like the
/// static charts.
#[derive(Clone, Copy)]
pub struct Palette {
    pub canvas: Color32,
    pub canvas_outline: Color32,
    pub text_muted: Color32,
    pub selection_fill: Color32,
    pub selection_outline: Color32,
}

pub fn palette() -> Palette {
    Palette {
        canvas: Color32::WHITE,
        canvas_outline: Color32::from_rgb(120, 126, 134),
        text_muted: Color32::from_rgb(90, 96, 104),
        selection_fill: Color32::from_rgba_unmultiplied(167, 217, 255, 40),
        selection_outline: Color32::from_rgb(70, 130, 200),
    }
}

/// Marker fill as an egui color.
pub fn fill_color(fill: FillColor) -> Color32 {
    match fill {
        FillColor::Black => Color32::from_rgb(10, 10, 10),
        FillColor::Grey => Color32::from_rgb(128, 128, 128),
        FillColor::White => Color32::WHITE,
    }
}

/// Marker outline as an egui color.
pub fn edge_color(edge: EdgeColor) -> Color32 {
    match edge {
        EdgeColor::Red => Color32::from_rgb(220, 40, 40),
        EdgeColor::Blue => Color32::from_rgb(40, 70, 220),
    }
}

/// Translucent class-frame fill for the bar panel.
pub fn frame_fill(edge: EdgeColor) -> Color32 {
    match edge {
        EdgeColor::Red => Color32::from_rgba_unmultiplied(220, 40, 40, 26),
        EdgeColor::Blue => Color32::from_rgba_unmultiplied(40, 70, 220, 26),
    }
}

/// Square off widget corners; the tool draws rectilinear charts and the
/// chrome should match.
pub fn apply_visuals(visuals: &mut Visuals) {
    visuals.window_corner_radius = CornerRadius::ZERO;
    visuals.menu_corner_radius = CornerRadius::ZERO;
    visuals.widgets.inactive.corner_radius = CornerRadius::ZERO;
    visuals.widgets.hovered.corner_radius = CornerRadius::ZERO;
    visuals.widgets.active.corner_radius = CornerRadius::ZERO;
    visuals.selection.stroke = Stroke::new(1.0, palette().selection_outline);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_colors_match_the_category_mapping() {
        assert_eq!(fill_color(FillColor::White), Color32::WHITE);
        assert_ne!(fill_color(FillColor::Black), fill_color(FillColor::Grey));
    }

    #[test]
    fn frame_fills_are_translucent() {
        assert!(frame_fill(EdgeColor::Red).a() < 255);
        assert!(frame_fill(EdgeColor::Blue).a() < 255);
    }
}
