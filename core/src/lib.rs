#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the rover simulator.
//!
//! This crate defines the vocabulary that connects the input-resolution
//! adapter and the navigation system. The resolver produces [`GridBounds`]
//! and [`Position`] values, the navigation system interprets [`Command`]
//! values against them, and every processed character is reported back as a
//! [`StepOutcome`] for the trace. No movement logic lives here.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Location of the rover expressed as signed x and y coordinates.
///
/// Coordinates are signed so that an attempted move off the low edge of the
/// grid can be represented before it is rejected. A position supplied at
/// construction time is stored verbatim and may lie outside the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    x: i32,
    y: i32,
}

impl Position {
    /// Creates a new position from explicit coordinates.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Horizontal coordinate, increasing to the right.
    #[must_use]
    pub const fn x(&self) -> i32 {
        self.x
    }

    /// Vertical coordinate, increasing upward.
    #[must_use]
    pub const fn y(&self) -> i32 {
        self.y
    }

    /// Returns the position offset by the provided deltas.
    #[must_use]
    pub const fn translated(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// Immutable dimensions of the grid the rover moves on.
///
/// The grid spans the half-open coordinate space `0 <= x < width`,
/// `0 <= y < height`. Positivity of both dimensions is the resolver's
/// obligation; this type performs no validation of its own.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridBounds {
    width: u32,
    height: u32,
}

impl GridBounds {
    /// Creates a new bounds descriptor with explicit dimensions.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Number of columns spanned by the grid.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows spanned by the grid.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Reports whether the provided position lies inside the grid.
    #[must_use]
    pub const fn contains(&self, position: Position) -> bool {
        position.x() >= 0
            && position.y() >= 0
            && (position.x() as u32) < self.width
            && (position.y() as u32) < self.height
    }
}

/// Directional command decoded from a single input character.
///
/// Classification is case-insensitive; every character outside the
/// `U`/`D`/`L`/`R` vocabulary maps to [`Command::Unrecognized`] carrying the
/// original character. Unrecognized commands are inert, not errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// Movement toward increasing y.
    Up,
    /// Movement toward decreasing y.
    Down,
    /// Movement toward decreasing x.
    Left,
    /// Movement toward increasing x.
    Right,
    /// A character outside the command vocabulary, preserved verbatim.
    Unrecognized(char),
}

impl Command {
    /// Classifies a raw input character into a command.
    #[must_use]
    pub fn classify(raw: char) -> Self {
        match raw.to_ascii_uppercase() {
            'U' => Self::Up,
            'D' => Self::Down,
            'L' => Self::Left,
            'R' => Self::Right,
            _ => Self::Unrecognized(raw),
        }
    }

    /// Unit offset applied by the command, or `None` for unrecognized input.
    #[must_use]
    pub const fn offset(&self) -> Option<(i32, i32)> {
        match self {
            Self::Up => Some((0, 1)),
            Self::Down => Some((0, -1)),
            Self::Left => Some((-1, 0)),
            Self::Right => Some((1, 0)),
            Self::Unrecognized(_) => None,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Up => write!(f, "U"),
            Self::Down => write!(f, "D"),
            Self::Left => write!(f, "L"),
            Self::Right => write!(f, "R"),
            Self::Unrecognized(raw) => write!(f, "{raw}"),
        }
    }
}

/// Result of processing one input character during an execution pass.
///
/// Every character yields exactly one outcome; none of the variants abort the
/// pass. The `Display` impl renders the canonical trace line for the outcome.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepOutcome {
    /// The command was accepted and the rover advanced one cell.
    Moved {
        /// Command that produced the move.
        command: Command,
        /// Position occupied after the move committed.
        position: Position,
    },
    /// The command targeted a cell outside the grid; the rover stayed put.
    Blocked {
        /// Command whose move was rejected.
        command: Command,
        /// Out-of-bounds position the command attempted to reach.
        attempted: Position,
        /// Position retained after the rejection.
        position: Position,
    },
    /// The character was outside the command vocabulary and was skipped.
    Ignored {
        /// Character received from the input, preserved verbatim.
        raw: char,
    },
}

impl fmt::Display for StepOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Moved { command, position } => {
                write!(f, "Executing {command} -> {position}")
            }
            Self::Blocked {
                command, position, ..
            } => {
                write!(f, "Executing {command} -> {position} [Blocked - boundary]")
            }
            Self::Ignored { raw } => {
                write!(f, "Ignored '{raw}' - expected one of U, D, L, R")
            }
        }
    }
}
