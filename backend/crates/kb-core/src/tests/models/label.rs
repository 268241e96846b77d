use crate::validate_label;

#[test]
fn given_short_alphanumeric_label_when_validated_then_ok() {
    assert!(validate_label("backend").is_ok());
    assert!(validate_label("ui/ux").is_ok());
    assert!(validate_label("bug-fix_2").is_ok());
}

#[test]
fn given_empty_label_when_validated_then_error() {
    assert!(validate_label("").is_err());
}

#[test]
fn given_label_over_thirty_chars_when_validated_then_error() {
    assert!(validate_label(&"a".repeat(30)).is_ok());
    assert!(validate_label(&"a".repeat(31)).is_err());
}

#[test]
fn given_label_with_spaces_when_validated_then_error() {
    assert!(validate_label("needs review").is_err());
    assert!(validate_label("urgent!").is_err());
}
