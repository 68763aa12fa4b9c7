use crate::utils::text::normalize_cell;

/// 키워드 중 하나를 부분 문자열로 포함하는 첫 번째 열을 찾는다
///
/// 대소문자 무시, 열 선언 순서 우선. 예매처 내보내기의 헤더
/// 표기 흔들림("예매자", "예매자명" 등)을 흡수하기 위한 것.
pub fn find_column(headers: &[String], keywords: &[&str]) -> Option<usize> {
    headers.iter().position(|header| {
        let label = header.trim().to_lowercase();
        keywords
            .iter()
            .any(|keyword| label.contains(&keyword.to_lowercase()))
    })
}

/// 지정 열에서 정규화 후 비어 있지 않은 첫 값을 돌려준다
///
/// 공연명 열이 존재하지만 전부 공백일 때의 대체값 탐색에 쓴다.
pub fn first_non_empty(rows: &[Vec<String>], col: usize) -> String {
    for row in rows {
        if let Some(value) = row.get(col) {
            let normalized = normalize_cell(value);
            if !normalized.is_empty() {
                return normalized;
            }
        }
    }
    String::new()
}

/// 행에서 해당 열의 셀을 꺼낸다. 열 미해결/범위 밖이면 빈 문자열
pub fn cell<'a>(row: &'a [String], col: Option<usize>) -> &'a str {
    col.and_then(|idx| row.get(idx))
        .map(String::as_str)
        .unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(labels: &[&str]) -> Vec<String> {
        labels.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_find_column_substring_match() {
        let headers = headers(&["관람일", "예매자 성명", "좌석번호"]);
        assert_eq!(find_column(&headers, &["성명"]), Some(1));
        assert_eq!(find_column(&headers, &["좌석"]), Some(2));
        assert_eq!(find_column(&headers, &["전화"]), None);
    }

    #[test]
    fn test_find_column_first_match_wins() {
        let headers = headers(&["좌석정보", "좌석번호"]);
        assert_eq!(find_column(&headers, &["좌석"]), Some(0));
    }

    #[test]
    fn test_find_column_case_insensitive() {
        let headers = headers(&["Seat No", "NAME"]);
        assert_eq!(find_column(&headers, &["name"]), Some(1));
        assert_eq!(find_column(&headers, &["seat"]), Some(0));
    }

    #[test]
    fn test_first_non_empty() {
        let rows = vec![
            vec!["".to_string(), "".to_string()],
            vec!["nan".to_string(), "a".to_string()],
            vec!["라이어의 밤".to_string(), "b".to_string()],
        ];
        assert_eq!(first_non_empty(&rows, 0), "라이어의 밤");
        assert_eq!(first_non_empty(&rows, 1), "a");
        assert_eq!(first_non_empty(&rows, 5), "");
    }

    #[test]
    fn test_cell_out_of_range() {
        let row = vec!["x".to_string()];
        assert_eq!(cell(&row, Some(0)), "x");
        assert_eq!(cell(&row, Some(3)), "");
        assert_eq!(cell(&row, None), "");
    }
}
