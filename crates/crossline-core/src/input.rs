//! Input events and scripted click sequences.
//!
//! Scripts come in two shapes. The JSON form is an array of tagged events:
//!
//! ```json
//! [{"kind": "click", "x": 0, "y": 0}, {"kind": "click", "x": 4, "y": 4, "gesture": "primary"}]
//! ```
//!
//! The text form has one event per line (`click X Y`, `cancel [X Y]`, `reset`),
//! with `#` starting a comment.

use crate::geom::Point;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gesture {
    #[default]
    Primary,
    Secondary,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InputEvent {
    Click {
        x: f64,
        y: f64,
        #[serde(default)]
        gesture: Gesture,
    },
    Reset,
}

impl InputEvent {
    pub fn primary(at: Point) -> Self {
        Self::Click {
            x: at.x,
            y: at.y,
            gesture: Gesture::Primary,
        }
    }

    pub fn secondary(at: Point) -> Self {
        Self::Click {
            x: at.x,
            y: at.y,
            gesture: Gesture::Secondary,
        }
    }
}

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("invalid JSON script: {0}")]
    Json(#[from] serde_json::Error),
    #[error("line {line}: {message}")]
    Line { line: usize, message: String },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Script {
    pub events: Vec<InputEvent>,
}

impl Script {
    pub fn new(events: Vec<InputEvent>) -> Self {
        Self { events }
    }

    pub fn from_json(src: &str) -> Result<Self, ScriptError> {
        Ok(serde_json::from_str(src)?)
    }

    pub fn from_text(src: &str) -> Result<Self, ScriptError> {
        let mut events = Vec::new();
        for (idx, raw) in src.lines().enumerate() {
            let line = idx + 1;
            let content = raw.split('#').next().unwrap_or("").trim();
            if content.is_empty() {
                continue;
            }
            let mut words = content.split_whitespace();
            let Some(cmd) = words.next() else {
                continue;
            };
            let args = words
                .map(|w| {
                    match w.parse::<f64>() {
                        Ok(v) if v.is_finite() => Ok(v),
                        Ok(_) => Err(ScriptError::Line {
                            line,
                            message: format!("not a finite number: {w:?}"),
                        }),
                        Err(_) => Err(ScriptError::Line {
                            line,
                            message: format!("not a number: {w:?}"),
                        }),
                    }
                })
                .collect::<Result<Vec<_>, _>>()?;

            let event = match (cmd.to_ascii_lowercase().as_str(), args.as_slice()) {
                ("click", [x, y]) => InputEvent::primary(Point::new(*x, *y)),
                ("cancel", [x, y]) => InputEvent::secondary(Point::new(*x, *y)),
                ("cancel", []) => InputEvent::secondary(Point::new(0.0, 0.0)),
                ("reset", []) => InputEvent::Reset,
                ("click" | "cancel" | "reset", _) => {
                    return Err(ScriptError::Line {
                        line,
                        message: format!("wrong number of arguments for {cmd:?}"),
                    });
                }
                _ => {
                    return Err(ScriptError::Line {
                        line,
                        message: format!("unknown command {cmd:?}"),
                    });
                }
            };
            events.push(event);
        }
        Ok(Self { events })
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
