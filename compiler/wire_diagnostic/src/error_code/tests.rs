use super::*;

#[test]
fn test_error_code_display() {
    assert_eq!(ErrorCode::E0201.to_string(), "E0201");
    assert_eq!(ErrorCode::E0102.as_str(), "E0102");
    assert_eq!(format!("{}", ErrorCode::E9002), "E9002");
}
