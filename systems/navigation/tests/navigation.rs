use mars_rover_core::{GridBounds, Position, StepOutcome};
use mars_rover_system_navigation::Rover;

fn run(width: u32, height: u32, start: (i32, i32), commands: &str) -> (Vec<StepOutcome>, Position) {
    let mut rover = Rover::new(
        GridBounds::new(width, height),
        Position::new(start.0, start.1),
    );
    let mut trace = Vec::new();
    rover.execute(commands, &mut trace);
    (trace, rover.position())
}

fn rendered(trace: &[StepOutcome]) -> Vec<String> {
    trace.iter().map(ToString::to_string).collect()
}

#[test]
fn walk_across_open_grid_matches_expected_trace() {
    let (trace, final_position) = run(10, 8, (0, 0), "RRUURL");

    assert_eq!(
        rendered(&trace),
        vec![
            "Executing R -> (1,0)",
            "Executing R -> (2,0)",
            "Executing U -> (2,1)",
            "Executing U -> (2,2)",
            "Executing R -> (3,2)",
            "Executing L -> (2,2)",
        ]
    );
    assert_eq!(final_position, Position::new(2, 2));
}

#[test]
fn upper_corner_blocks_both_outward_moves() {
    let (trace, final_position) = run(2, 2, (1, 1), "RU");

    assert_eq!(
        rendered(&trace),
        vec![
            "Executing R -> (1,1) [Blocked - boundary]",
            "Executing U -> (1,1) [Blocked - boundary]",
        ]
    );
    assert_eq!(final_position, Position::new(1, 1));
}

#[test]
fn origin_blocks_both_negative_moves() {
    let (trace, final_position) = run(3, 3, (0, 0), "LD");

    assert_eq!(
        rendered(&trace),
        vec![
            "Executing L -> (0,0) [Blocked - boundary]",
            "Executing D -> (0,0) [Blocked - boundary]",
        ]
    );
    assert_eq!(final_position, Position::new(0, 0));
}

#[test]
fn lowercase_and_uppercase_commands_are_equivalent() {
    let (lower_trace, lower_final) = run(10, 8, (0, 0), "rruu");
    let (upper_trace, upper_final) = run(10, 8, (0, 0), "RRUU");

    assert_eq!(lower_final, upper_final);
    assert_eq!(rendered(&lower_trace), rendered(&upper_trace));
}

#[test]
fn command_order_changes_the_trace_but_not_this_destination() {
    let (ur_trace, ur_final) = run(4, 4, (0, 0), "UR");
    let (ru_trace, ru_final) = run(4, 4, (0, 0), "RU");

    assert_eq!(ur_final, Position::new(1, 1));
    assert_eq!(ru_final, Position::new(1, 1));
    assert_eq!(
        rendered(&ur_trace),
        vec!["Executing U -> (0,1)", "Executing R -> (1,1)"]
    );
    assert_eq!(
        rendered(&ru_trace),
        vec!["Executing R -> (1,0)", "Executing U -> (1,1)"]
    );
}

#[test]
fn unrecognized_character_does_not_stop_later_commands() {
    let (trace, final_position) = run(5, 5, (0, 0), "RZU");

    assert_eq!(trace.len(), 3);
    assert_eq!(trace[1], StepOutcome::Ignored { raw: 'Z' });
    assert_eq!(final_position, Position::new(1, 1));
}

#[test]
fn blocked_moves_do_not_poison_subsequent_valid_moves() {
    let (trace, final_position) = run(3, 3, (0, 0), "LLRR");

    assert_eq!(
        rendered(&trace),
        vec![
            "Executing L -> (0,0) [Blocked - boundary]",
            "Executing L -> (0,0) [Blocked - boundary]",
            "Executing R -> (1,0)",
            "Executing R -> (2,0)",
        ]
    );
    assert_eq!(final_position, Position::new(2, 0));
}
