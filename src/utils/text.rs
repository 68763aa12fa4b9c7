/// 셀 값 기본 최대 길이
pub const DEFAULT_MAX_LEN: usize = 1000;

/// 잘림 표시 문자열
pub const TRUNCATION_MARKER: &str = "...";

/// 셀 값을 안전하게 문자열로 정규화 (기본 길이 제한)
pub fn normalize_cell(value: &str) -> String {
    truncate_cell(value, DEFAULT_MAX_LEN)
}

/// 셀 값을 안전하게 문자열로 정규화 (길이 제한 지정)
///
/// 빈 값/결측치 표기는 빈 문자열이 된다. 길이를 넘는 값은
/// `max_len` 글자에서 자르고 잘림 표시를 붙인다. 항상 성공한다.
pub fn truncate_cell(value: &str, max_len: usize) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() || is_null_marker(trimmed) {
        return String::new();
    }
    if trimmed.chars().count() > max_len {
        let cut: String = trimmed.chars().take(max_len).collect();
        return format!("{}{}", cut, TRUNCATION_MARKER);
    }
    trimmed.to_string()
}

/// 결측치를 문자열화한 표기인지 확인 (nan/none/null)
pub fn is_null_marker(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "nan" | "none" | "null"
    )
}

/// 행 전체가 공백 셀인지 확인
pub fn is_blank_row(row: &[String]) -> bool {
    row.iter().all(|cell| cell.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_cell_trims() {
        assert_eq!(normalize_cell("  홍길동  "), "홍길동");
        assert_eq!(normalize_cell(""), "");
        assert_eq!(normalize_cell("   "), "");
    }

    #[test]
    fn test_normalize_cell_null_markers() {
        assert_eq!(normalize_cell("nan"), "");
        assert_eq!(normalize_cell("NaN"), "");
        assert_eq!(normalize_cell("None"), "");
        assert_eq!(normalize_cell("null"), "");
    }

    #[test]
    fn test_truncate_cell_appends_marker() {
        let input = "0123456789";
        let result = truncate_cell(input, 5);
        assert_eq!(result, "01234...");
        assert_eq!(result.len(), 5 + TRUNCATION_MARKER.len());
        assert_eq!(&result[..5], &input[..5]);
    }

    #[test]
    fn test_truncate_cell_short_value_untouched() {
        assert_eq!(truncate_cell("좌석 A-1", 200), "좌석 A-1");
    }

    #[test]
    fn test_truncate_cell_multibyte() {
        // 글자 수 기준으로 자른다 (바이트 아님)
        assert_eq!(truncate_cell("가나다라마바사", 3), "가나다...");
    }

    #[test]
    fn test_is_blank_row() {
        assert!(is_blank_row(&["".to_string(), "  ".to_string()]));
        assert!(!is_blank_row(&["".to_string(), "x".to_string()]));
    }
}
