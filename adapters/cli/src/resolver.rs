use std::{error::Error, fmt};

use mars_rover_core::{GridBounds, Position};

/// Validated values produced by resolving the three raw input lines.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct ResolvedInput {
    /// Dimensions of the grid the rover will move on.
    pub bounds: GridBounds,
    /// Position the rover starts from, not checked against the bounds.
    pub start: Position,
    /// Raw command string, trimmed; character validity is decided later.
    pub commands: String,
}

/// Resolves the grid size, start position, and command lines into typed
/// values, or fails with a diagnostic naming the expected grammar.
///
/// One tolerant grammar covers the accepted spellings: an optional leading
/// label ending in `:`, an optional pair of surrounding parentheses, and a
/// pair separator of `x`/`X`, `,`, or whitespace. `"Grid size: 10x8"`,
/// `"(3, 4)"`, and `"5 5"` all resolve.
pub(crate) fn resolve(
    grid_line: &str,
    start_line: &str,
    command_line: &str,
) -> Result<ResolvedInput, ResolveError> {
    let bounds = parse_grid_size(grid_line)?;
    let start = parse_start_position(start_line)?;
    Ok(ResolvedInput {
        bounds,
        start,
        commands: command_line.trim().to_owned(),
    })
}

fn parse_grid_size(line: &str) -> Result<GridBounds, ResolveError> {
    let (first, second) =
        split_pair(line).ok_or_else(|| ResolveError::InvalidGridSize(line.trim().to_owned()))?;

    let width = first
        .parse::<u32>()
        .map_err(|_| ResolveError::InvalidGridSize(line.trim().to_owned()))?;
    let height = second
        .parse::<u32>()
        .map_err(|_| ResolveError::InvalidGridSize(line.trim().to_owned()))?;

    if width == 0 || height == 0 {
        return Err(ResolveError::ZeroGridDimension(line.trim().to_owned()));
    }

    Ok(GridBounds::new(width, height))
}

fn parse_start_position(line: &str) -> Result<Position, ResolveError> {
    let (first, second) = split_pair(line)
        .ok_or_else(|| ResolveError::InvalidStartPosition(line.trim().to_owned()))?;

    let x = first
        .parse::<i32>()
        .map_err(|_| ResolveError::InvalidStartPosition(line.trim().to_owned()))?;
    let y = second
        .parse::<i32>()
        .map_err(|_| ResolveError::InvalidStartPosition(line.trim().to_owned()))?;

    Ok(Position::new(x, y))
}

/// Splits a freeform pair spelling into its two numeric fields.
fn split_pair(line: &str) -> Option<(&str, &str)> {
    let mut text = strip_label(line).trim();
    if let Some(inner) = text
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
    {
        text = inner.trim();
    }

    let (first, second) = text
        .split_once(['x', 'X'])
        .or_else(|| text.split_once(','))
        .or_else(|| text.split_once(char::is_whitespace))?;

    let first = first.trim();
    let second = second.trim();
    if first.is_empty() || second.is_empty() || second.contains(char::is_whitespace) {
        return None;
    }

    Some((first, second))
}

/// Drops an optional leading label such as `Grid size:` or `Start:`.
fn strip_label(line: &str) -> &str {
    match line.rsplit_once(':') {
        Some((_, rest)) => rest,
        None => line,
    }
}

/// Errors that can occur while resolving the raw input lines.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum ResolveError {
    /// The grid size line did not contain two parseable positive integers.
    InvalidGridSize(String),
    /// The grid size parsed but one dimension was zero.
    ZeroGridDimension(String),
    /// The start position line did not contain two parseable integers.
    InvalidStartPosition(String),
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGridSize(line) => write!(
                f,
                "could not parse grid size '{line}' (expected two positive integers, e.g. '10 8' or '10x8')"
            ),
            Self::ZeroGridDimension(line) => {
                write!(f, "grid size '{line}' must have a positive width and height")
            }
            Self::InvalidStartPosition(line) => write!(
                f,
                "could not parse start position '{line}' (expected two integers, e.g. '0 0' or '(3, 4)')"
            ),
        }
    }
}

impl Error for ResolveError {}
