use std::io::{self, Write};

use mars_rover_core::{Position, StepOutcome};

/// Controls whether unrecognized characters emit their advisory line.
///
/// One reading of the trace contract treats unknown characters as silent
/// no-ops, the other announces them; both behaviours are legitimate, so the
/// choice lives here rather than in the navigation system.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum UnrecognizedPolicy {
    /// Print one advisory line per unrecognized character.
    Advise,
    /// Drop unrecognized characters from the trace output.
    Silent,
}

/// Writes the per-step trace lines followed by the final-position summary.
///
/// The summary line is written exactly once, even for an empty trace.
pub(crate) fn write_trace(
    writer: &mut impl Write,
    trace: &[StepOutcome],
    final_position: Position,
    policy: UnrecognizedPolicy,
) -> io::Result<()> {
    for outcome in trace {
        if policy == UnrecognizedPolicy::Silent && matches!(outcome, StepOutcome::Ignored { .. }) {
            continue;
        }
        writeln!(writer, "{outcome}")?;
    }
    writeln!(writer, "Final Position: {final_position}")
}
