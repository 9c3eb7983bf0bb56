use crate::ErrorLocation;
use std::panic::Location;

/// **VALUE**: Verifies that `ErrorLocation::from()` captures file, line, and column.
///
/// **WHY THIS MATTERS**: Every error variant in the workspace embeds an
/// `ErrorLocation`. If capture breaks, every error message loses its pointer
/// to the failing call site.
///
/// **BUG THIS CATCHES**: Would catch if `Location::caller()` stops being
/// propagated or file/line/column extraction breaks.
#[test]
fn given_location_caller_when_error_location_created_then_captures_file_line_column() {
    // GIVEN / WHEN: Creating ErrorLocation from the current caller
    let (location, expected_line) = (ErrorLocation::from(Location::caller()), line!());

    // THEN: Should capture this file and the capture line itself
    assert!(
        location.file.contains("error_location.rs"),
        "Should capture file path"
    );
    assert_eq!(location.line, expected_line, "Should capture the call line");
    assert!(location.column > 0, "Should capture column number");
}

/// **VALUE**: Verifies that `ErrorLocation::caller()` records the invoking frame,
/// not the body of `caller()` itself.
///
/// **WHY THIS MATTERS**: The whole point of the shorthand is that error
/// constructors can call it and still report the original call site. If
/// `#[track_caller]` is dropped from the function, every error would point at
/// the common crate internals.
///
/// **BUG THIS CATCHES**: Would catch removal of the `#[track_caller]`
/// attribute from `ErrorLocation::caller()`.
#[test]
fn given_caller_shorthand_when_invoked_then_reports_invoking_frame() {
    // GIVEN / WHEN: Capturing through the shorthand
    let location = ErrorLocation::caller();

    // THEN: Should point at this test file, not at the common crate internals
    assert!(
        location.file.contains("tests/error_location.rs"),
        "Should report the invoking frame, got {}",
        location.file
    );
}

/// **VALUE**: Verifies that Display produces the bracketed `[file:line:column]` format.
///
/// **WHY THIS MATTERS**: Error messages interpolate the location with
/// `{location}`; a format change garbles every message in the workspace at
/// once.
///
/// **BUG THIS CATCHES**: Would catch if brackets or colons disappear from the
/// Display implementation.
#[test]
fn given_error_location_when_formatted_then_produces_bracketed_format() {
    // GIVEN: An ErrorLocation
    let location = ErrorLocation {
        file: "src/example.rs",
        line: 42,
        column: 7,
    };

    // WHEN: Formatting as string
    let formatted = format!("{}", location);

    // THEN: Bracketed, colon-separated
    assert_eq!(formatted, "[src/example.rs:42:7]");
}
