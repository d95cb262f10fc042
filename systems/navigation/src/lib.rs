#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Deterministic navigation system that steps the rover across the grid.
//!
//! The [`Rover`] owns the grid bounds and its current position and consumes a
//! command string one character at a time. Every character yields exactly one
//! [`StepOutcome`]; a boundary hit or an unrecognized character is an expected
//! condition, never a failure, so an execution pass always runs to the end of
//! its input.

use mars_rover_core::{Command, GridBounds, Position, StepOutcome};

/// Rover bound to a fixed grid, mutated in place by accepted commands.
#[derive(Clone, Debug)]
pub struct Rover {
    bounds: GridBounds,
    position: Position,
}

impl Rover {
    /// Creates a rover on the provided grid at the provided start position.
    ///
    /// The start is stored verbatim: a position outside the grid is accepted
    /// here and only corrected implicitly if a later move lands in bounds.
    #[must_use]
    pub const fn new(bounds: GridBounds, start: Position) -> Self {
        Self {
            bounds,
            position: start,
        }
    }

    /// Grid the rover is bound to for its whole lifetime.
    #[must_use]
    pub const fn bounds(&self) -> GridBounds {
        self.bounds
    }

    /// Position the rover currently occupies.
    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    /// Applies each character of `commands` in order, appending one outcome
    /// per character to `out`.
    ///
    /// Processing never reorders, batches, or terminates early; after the
    /// call returns, [`Rover::position`] reflects the cumulative effect of
    /// every accepted move.
    pub fn execute(&mut self, commands: &str, out: &mut Vec<StepOutcome>) {
        for raw in commands.chars() {
            out.push(self.step(raw));
        }
    }

    fn step(&mut self, raw: char) -> StepOutcome {
        let command = Command::classify(raw);
        let Some((dx, dy)) = command.offset() else {
            return StepOutcome::Ignored { raw };
        };

        let attempted = self.position.translated(dx, dy);
        if self.bounds.contains(attempted) {
            self.position = attempted;
            StepOutcome::Moved {
                command,
                position: attempted,
            }
        } else {
            StepOutcome::Blocked {
                command,
                attempted,
                position: self.position,
            }
        }
    }
}
