use super::*;

#[test]
fn test_offset_to_line_col() {
    let source = "line1\nline2\nline3";
    assert_eq!(offset_to_line_col(source, 0), (1, 1));
    assert_eq!(offset_to_line_col(source, 3), (1, 4));
    assert_eq!(offset_to_line_col(source, 6), (2, 1));
    assert_eq!(offset_to_line_col(source, 12), (3, 1));
}

#[test]
fn test_offset_past_end_clamps() {
    let source = "ab\ncd";
    assert_eq!(offset_to_line_col(source, 100), (2, 3));
}

#[test]
fn test_unicode_columns_count_chars() {
    let source = "héllo";
    // 'l' after the two-byte 'é' sits at byte 3, character 3
    assert_eq!(offset_to_line_col(source, 3), (1, 3));
}
