//! Click-to-segment state machine.
//!
//! Two primary clicks make one segment. Every completed segment is checked
//! against all segments drawn before it, and whatever crossings come out are
//! appended to the running list. Nothing already recorded is ever revisited.

use crate::geom::{Point, Segment};
use crate::input::{Gesture, InputEvent};
use crate::intersect::{intersect, IntersectError};
use crate::surface::{Style, Surface};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Idle,
    Pending,
}

/// A crossing found between segment `earlier` and segment `newer` (indices into the segment list).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Intersection {
    pub at: Point,
    pub earlier: usize,
    pub newer: usize,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InteractionState {
    pending_start: Option<Point>,
    segments: Vec<Segment>,
    intersections: Vec<Intersection>,
}

impl InteractionState {
    pub fn phase(&self) -> Phase {
        if self.pending_start.is_some() {
            Phase::Pending
        } else {
            Phase::Idle
        }
    }

    pub fn pending_start(&self) -> Option<Point> {
        self.pending_start
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn intersections(&self) -> &[Intersection] {
        &self.intersections
    }

    /// Crossing points in discovery order, duplicates included.
    pub fn intersection_points(&self) -> impl Iterator<Item = Point> + '_ {
        self.intersections.iter().map(|i| i.at)
    }

    pub fn is_empty(&self) -> bool {
        self.pending_start.is_none() && self.segments.is_empty() && self.intersections.is_empty()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SweepOutcome {
    pub found: usize,
    pub parallel: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    Started,
    Completed { segment: usize, sweep: SweepOutcome },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    Click(ClickOutcome),
    /// `true` when a pending start was actually dropped.
    Cancel(bool),
    Reset,
}

#[derive(Debug, Clone, Default)]
pub struct Controller {
    state: InteractionState,
}

impl Controller {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn dispatch<S: Surface + ?Sized>(
        &mut self,
        event: InputEvent,
        surface: &mut S,
    ) -> EventOutcome {
        match event {
            InputEvent::Click {
                x,
                y,
                gesture: Gesture::Primary,
            } => EventOutcome::Click(self.on_click(Point::new(x, y), surface)),
            InputEvent::Click {
                gesture: Gesture::Secondary,
                ..
            } => EventOutcome::Cancel(self.on_cancel(surface)),
            InputEvent::Reset => {
                self.reset(surface);
                EventOutcome::Reset
            }
        }
    }

    pub fn on_click<S: Surface + ?Sized>(&mut self, at: Point, surface: &mut S) -> ClickOutcome {
        let Some(start) = self.state.pending_start.take() else {
            debug!(x = at.x, y = at.y, "segment started");
            self.state.pending_start = Some(at);
            surface.draw_point(at, Style::StartMarker);
            return ClickOutcome::Started;
        };

        let segment = Segment::new(start, at);
        self.state.segments.push(segment);
        let index = self.state.segments.len() - 1;
        surface.draw_point(at, Style::Vertex);
        surface.draw_line(start, at, Style::Stroke);
        debug!(index, degenerate = segment.is_degenerate(), "segment completed");

        let sweep = self.sweep(surface);
        ClickOutcome::Completed {
            segment: index,
            sweep,
        }
    }

    pub fn on_cancel<S: Surface + ?Sized>(&mut self, surface: &mut S) -> bool {
        match self.state.pending_start.take() {
            Some(start) => {
                debug!(x = start.x, y = start.y, "pending segment cancelled");
                surface.erase_point(start, Style::StartMarker);
                true
            }
            None => false,
        }
    }

    pub fn reset<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        debug!(
            segments = self.state.segments.len(),
            intersections = self.state.intersections.len(),
            "reset"
        );
        self.state = InteractionState::default();
        surface.clear();
    }

    /// Checks the newest segment against every earlier one, oldest first.
    fn sweep<S: Surface + ?Sized>(&mut self, surface: &mut S) -> SweepOutcome {
        let mut outcome = SweepOutcome::default();
        let Some((newest, earlier)) = self.state.segments.split_last() else {
            return outcome;
        };
        let newer = earlier.len();

        for (i, segment) in earlier.iter().enumerate() {
            match intersect(segment, newest) {
                Ok(at) => {
                    trace!(earlier = i, newer, x = at.x, y = at.y, "intersection");
                    self.state.intersections.push(Intersection {
                        at,
                        earlier: i,
                        newer,
                    });
                    surface.draw_point(at, Style::Intersection);
                    outcome.found += 1;
                }
                Err(IntersectError::ParallelOrCoincident) => {
                    debug!(earlier = i, newer, "parallel pair skipped");
                    outcome.parallel += 1;
                }
            }
        }
        outcome
    }
}
