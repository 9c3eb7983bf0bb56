use crate::validation::is_valid_location_name;

/// **VALUE**: Verifies that whitespace-only names are rejected by the calling surface.
///
/// **WHY THIS MATTERS**: The interactor's add operation treats a usable name
/// as a precondition; it never validates. This check is the only thing
/// standing between an empty text field and a nameless user-created pin.
///
/// **BUG THIS CATCHES**: Would catch the trim being dropped, which would let
/// `"   "` through as a "non-empty" name.
#[test]
fn given_empty_or_whitespace_name_when_validated_then_rejected() {
    assert!(!is_valid_location_name(""));
    assert!(!is_valid_location_name("   "));
    assert!(!is_valid_location_name("\t\n"));
}

/// **VALUE**: Verifies that real names pass, including ones padded with whitespace.
///
/// **BUG THIS CATCHES**: Would catch an over-eager check that rejects names
/// containing inner spaces.
#[test]
fn given_usable_name_when_validated_then_accepted() {
    assert!(is_valid_location_name("Central Station"));
    assert!(is_valid_location_name("  Amsterdam  "));
    assert!(is_valid_location_name("X"));
}
