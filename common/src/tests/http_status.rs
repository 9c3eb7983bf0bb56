use crate::HttpStatusCode;

/// **VALUE**: Verifies status-code range categorization.
///
/// **WHY THIS MATTERS**: The fetch client reports non-success responses as
/// server errors keyed on these ranges. Off-by-one range bounds would
/// misclassify 200 as an error or 500 as a success.
///
/// **BUG THIS CATCHES**: Would catch inverted or off-by-one range checks.
#[test]
fn given_status_codes_when_categorized_then_ranges_are_exclusive() {
    assert!(HttpStatusCode(200).is_success());
    assert!(HttpStatusCode(299).is_success());
    assert!(!HttpStatusCode(300).is_success());

    assert!(HttpStatusCode(404).is_client_error());
    assert!(!HttpStatusCode(404).is_server_error());

    assert!(HttpStatusCode(500).is_server_error());
    assert!(!HttpStatusCode(500).is_client_error());
}

/// **VALUE**: Verifies `From<u16>` and Display round out the type's ergonomics.
///
/// **BUG THIS CATCHES**: Would catch a Display implementation that prints the
/// tuple wrapper instead of the bare code.
#[test]
fn given_u16_when_converted_then_displays_bare_code() {
    let status = HttpStatusCode::from(503);
    assert_eq!(format!("{status}"), "503");
}
