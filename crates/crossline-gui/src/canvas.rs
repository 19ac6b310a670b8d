//! Retained display list behind the egui drawing area.
//!
//! egui repaints every frame, so the controller's draw commands are kept here
//! and replayed onto the painter each time.

use crossline_core::geom::Point;
use crossline_core::surface::{Style, Surface};
use eframe::egui;

#[derive(Debug, Clone)]
pub struct CanvasConfig {
    pub size: egui::Vec2,
    pub marker_radius: f32,
    pub intersection_radius: f32,
    pub background: egui::Color32,
    pub border: egui::Stroke,
    pub preview_stroke: egui::Stroke,
    pub show_preview: bool,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            size: egui::vec2(800.0, 600.0),
            marker_radius: 5.0,
            intersection_radius: 6.0,
            background: egui::Color32::WHITE,
            border: egui::Stroke::new(1.0, egui::Color32::RED),
            preview_stroke: egui::Stroke::new(1.0, egui::Color32::from_gray(170)),
            show_preview: true,
        }
    }
}

impl CanvasConfig {
    fn color(&self, style: Style) -> egui::Color32 {
        match style {
            Style::StartMarker | Style::Vertex => egui::Color32::RED,
            Style::Stroke => egui::Color32::BLACK,
            Style::Intersection => egui::Color32::from_rgb(0x31, 0x8B, 0xBD),
        }
    }

    fn radius(&self, style: Style) -> f32 {
        match style {
            Style::Intersection => self.intersection_radius,
            _ => self.marker_radius,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Mark {
    Dot { at: Point, style: Style },
    Line { from: Point, to: Point, style: Style },
}

#[derive(Debug, Default)]
pub struct Canvas {
    marks: Vec<Mark>,
}

impl Canvas {
    pub fn paint(&self, painter: &egui::Painter, origin: egui::Pos2, cfg: &CanvasConfig) {
        let screen = |p: Point| origin + egui::vec2(p.x as f32, p.y as f32);
        // Lines first so the markers sit on top of them.
        for mark in &self.marks {
            if let Mark::Line { from, to, style } = *mark {
                painter.line_segment(
                    [screen(from), screen(to)],
                    egui::Stroke::new(1.0, cfg.color(style)),
                );
            }
        }
        for mark in &self.marks {
            if let Mark::Dot { at, style } = *mark {
                let center = screen(at);
                painter.circle_filled(center, cfg.radius(style), cfg.color(style));
                painter.circle_stroke(
                    center,
                    cfg.radius(style),
                    egui::Stroke::new(1.0, egui::Color32::BLACK),
                );
            }
        }
    }
}

impl Surface for Canvas {
    fn draw_point(&mut self, at: Point, style: Style) {
        self.marks.push(Mark::Dot { at, style });
    }

    fn draw_line(&mut self, from: Point, to: Point, style: Style) {
        self.marks.push(Mark::Line { from, to, style });
    }

    fn erase_point(&mut self, at: Point, style: Style) {
        let target = Mark::Dot { at, style };
        if let Some(idx) = self.marks.iter().rposition(|m| *m == target) {
            self.marks.remove(idx);
        }
    }

    fn clear(&mut self) {
        self.marks.clear();
    }
}
