use crate::errors::InputError;
use crate::model::ViewWindow;
use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

/// A single user request, already mapped to plane coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Interaction {
    /// Primary click: recentre here and zoom in.
    ZoomIn { x: f64, y: f64 },

    /// Secondary click: recentre here and zoom out.
    ZoomOut { x: f64, y: f64 },

    /// Go back to the starting view.
    Reset,

    /// Escape key, window closed, etc.
    Cancel,
}

impl fmt::Display for Interaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZoomIn { x, y } => write!(f, "in:{x},{y}"),
            Self::ZoomOut { x, y } => write!(f, "out:{x},{y}"),
            Self::Reset => write!(f, "reset"),
            Self::Cancel => write!(f, "quit"),
        }
    }
}

impl FromStr for Interaction {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || InputError::Parse(s.to_string());

        let s = s.trim();
        match s {
            "reset" | "r" => return Ok(Self::Reset),
            "quit" | "q" | "cancel" => return Ok(Self::Cancel),
            _ => {}
        }

        let (kind, coords) = match s.split_once(':') {
            Some((kind, coords)) => (kind, coords),
            None => ("in", s),
        };
        let (x, y) = coords.split_once(',').ok_or_else(err)?;
        let x: f64 = x.trim().parse().map_err(|_| err())?;
        let y: f64 = y.trim().parse().map_err(|_| err())?;

        match kind {
            "in" => Ok(Self::ZoomIn { x, y }),
            "out" => Ok(Self::ZoomOut { x, y }),
            _ => Err(err()),
        }
    }
}

/// Blocking source of user interactions.
///
/// `window` is the view currently on screen, for implementations that need to translate raster
/// positions into plane coordinates.
pub trait PointerInput {
    fn next_interaction(&mut self, window: &ViewWindow) -> Result<Interaction, InputError>;
}

/// Replays a fixed list of interactions, then cancels.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    script: VecDeque<Interaction>,
}

impl ScriptedInput {
    pub fn new(script: impl IntoIterator<Item = Interaction>) -> Self {
        Self {
            script: script.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl PointerInput for ScriptedInput {
    fn next_interaction(&mut self, _window: &ViewWindow) -> Result<Interaction, InputError> {
        Ok(self.script.pop_front().unwrap_or(Interaction::Cancel))
    }
}
