use crate::controller::{ClickOutcome, Controller, EventOutcome, Phase};
use crate::geom::{Point, Segment};
use crate::input::{InputEvent, Script};
use crate::surface::Surface;
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// How far (in pixels) a crossing may sit from a stroke and still count as on it.
    /// Crossings are pixel-snapped, so this should stay at or above ~0.71.
    pub stroke_tolerance: f64,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            stroke_tolerance: 1.0,
        }
    }
}

/// Running totals across the whole session. Unlike the drawing, these survive a reset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    pub clicks: usize,
    pub cancels: usize,
    pub resets: usize,
    pub segments_completed: usize,
    pub intersections_found: usize,
    pub parallel_pairs: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntersectionReport {
    pub at: Point,
    pub earlier: usize,
    pub newer: usize,
    pub on_strokes: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionReport {
    pub phase: Phase,
    pub pending_start: Option<Point>,
    pub segments: Vec<Segment>,
    pub intersections: Vec<IntersectionReport>,
    pub stats: SessionStats,
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    controller: Controller,
    stats: SessionStats,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    pub fn apply<S: Surface + ?Sized>(
        &mut self,
        event: InputEvent,
        surface: &mut S,
    ) -> EventOutcome {
        let outcome = self.controller.dispatch(event, surface);
        match outcome {
            EventOutcome::Click(click) => {
                self.stats.clicks += 1;
                if let ClickOutcome::Completed { sweep, .. } = click {
                    self.stats.segments_completed += 1;
                    self.stats.intersections_found += sweep.found;
                    self.stats.parallel_pairs += sweep.parallel;
                }
            }
            EventOutcome::Cancel(true) => self.stats.cancels += 1,
            EventOutcome::Cancel(false) => {}
            EventOutcome::Reset => self.stats.resets += 1,
        }
        outcome
    }

    pub fn replay<S: Surface + ?Sized>(&mut self, script: &Script, surface: &mut S) {
        for event in &script.events {
            self.apply(*event, surface);
        }
        info!(
            events = script.len(),
            segments = self.controller.state().segments().len(),
            intersections = self.controller.state().intersections().len(),
            "replay finished"
        );
    }

    pub fn report(&self, cfg: &ReportConfig) -> SessionReport {
        let state = self.controller.state();
        let segments = state.segments();
        let intersections = state
            .intersections()
            .iter()
            .map(|i| IntersectionReport {
                at: i.at,
                earlier: i.earlier,
                newer: i.newer,
                on_strokes: segments[i.earlier].contains(i.at, cfg.stroke_tolerance)
                    && segments[i.newer].contains(i.at, cfg.stroke_tolerance),
            })
            .collect();

        SessionReport {
            phase: state.phase(),
            pending_start: state.pending_start(),
            segments: segments.to_vec(),
            intersections,
            stats: self.stats,
        }
    }
}
