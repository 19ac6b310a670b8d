//! The drawing capability the controller talks to.
//!
//! The controller only ever issues commands; it never reads anything back.

use crate::geom::Point;
use serde::{Deserialize, Serialize};

/// Which kind of mark is being drawn. Mapping a style to pixels is up to the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Style {
    StartMarker,
    Vertex,
    Stroke,
    Intersection,
}

pub trait Surface {
    fn draw_point(&mut self, at: Point, style: Style);
    fn draw_line(&mut self, from: Point, to: Point, style: Style);
    /// Removes a mark previously drawn with `draw_point`.
    fn erase_point(&mut self, at: Point, style: Style);
    fn clear(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    Point { at: Point, style: Style },
    Line { from: Point, to: Point, style: Style },
    Erase { at: Point, style: Style },
    Clear,
}

/// Keeps every command it receives, in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl Surface for RecordingSurface {
    fn draw_point(&mut self, at: Point, style: Style) {
        self.commands.push(DrawCommand::Point { at, style });
    }

    fn draw_line(&mut self, from: Point, to: Point, style: Style) {
        self.commands.push(DrawCommand::Line { from, to, style });
    }

    fn erase_point(&mut self, at: Point, style: Style) {
        self.commands.push(DrawCommand::Erase { at, style });
    }

    fn clear(&mut self) {
        self.commands.push(DrawCommand::Clear);
    }
}

/// Discards everything. Handy for headless replays that only want the final state.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSurface;

impl Surface for NullSurface {
    fn draw_point(&mut self, _at: Point, _style: Style) {}
    fn draw_line(&mut self, _from: Point, _to: Point, _style: Style) {}
    fn erase_point(&mut self, _at: Point, _style: Style) {}
    fn clear(&mut self) {}
}
