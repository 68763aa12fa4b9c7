use crate::models::{AppError, Grid, RosterRow};
use crate::parsers::build_vendor_sheet;
use crate::utils::datetime::normalize_datetime;

use super::resolve::{cell, find_column};
use super::{build_rows, resolve_columns, FieldKeywords};

/// 인터파크 내보내기의 헤더 행 (0부터, 6행째)
pub const HEADER_ROW: usize = 5;

const KEYWORDS: FieldKeywords = FieldKeywords {
    name: &["예매자", "이름"],
    title: &["공연명", "상품명"],
    count: &["판매좌석수", "매수"],
    seat: &["좌석정보", "좌석번호"],
    phone: &["전화번호", "연락처"],
};

/// 공연일시 열 ("20221120 1500" 압축형 또는 하이픈형)
const DATETIME_KEYWORDS: &[&str] = &["공연일시", "공연일"];

/// 인터파크 시트 1장을 표준 행으로 변환
pub fn extract(grid: &Grid, source_name: &str) -> Result<Vec<RosterRow>, AppError> {
    let sheet = build_vendor_sheet(grid, HEADER_ROW)?;
    let cols = resolve_columns(&sheet.headers, &KEYWORDS);
    let datetime_col = find_column(&sheet.headers, DATETIME_KEYWORDS);

    Ok(build_rows(&sheet, &cols, source_name, source_name, |row| {
        normalize_datetime(cell(row, datetime_col), None)
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn interpark_grid(data_rows: Vec<Vec<&str>>) -> Grid {
        let mut rows: Vec<Vec<String>> = vec![vec![String::new()]; HEADER_ROW];
        rows.push(
            ["공연명", "공연일시", "예매자", "판매좌석수", "좌석정보", "전화번호"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        );
        for row in data_rows {
            rows.push(row.into_iter().map(String::from).collect());
        }
        Grid {
            name: "Sheet1".to_string(),
            rows,
        }
    }

    #[test]
    fn test_extract_compact_datetime() {
        let grid = interpark_grid(vec![vec![
            "라이어의 밤",
            "20221120 1500",
            "홍길동",
            "2",
            "R열 11, 12",
            "010-1234-5678",
        ]]);
        let rows = extract(&grid, "인터파크_명부").unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].performance_title, "라이어의 밤");
        assert_eq!(rows[0].performance_datetime, "2022-11-20 15:00");
        assert_eq!(rows[0].seat_count, "2");
        assert_eq!(rows[0].phone, "010-1234-5678");
    }

    #[test]
    fn test_blank_title_cell_falls_back_to_first_non_empty() {
        let grid = interpark_grid(vec![
            vec!["라이어의 밤", "20221120 1500", "홍길동", "1", "A-1", ""],
            vec!["", "20221120 1500", "김철수", "1", "A-2", ""],
        ]);
        let rows = extract(&grid, "인터파크_명부").unwrap();
        assert_eq!(rows[1].performance_title, "라이어의 밤");
    }

    #[test]
    fn test_all_blank_titles_fall_back_to_source_name() {
        let grid = interpark_grid(vec![vec!["", "20221120 1500", "홍길동", "1", "A-1", ""]]);
        let rows = extract(&grid, "인터파크_명부").unwrap();
        assert_eq!(rows[0].performance_title, "인터파크_명부");
    }

    #[test]
    fn test_seat_column_does_not_catch_sales_count() {
        let grid = interpark_grid(vec![vec![
            "공연",
            "20221120 1500",
            "홍길동",
            "3",
            "R열 5",
            "",
        ]]);
        let rows = extract(&grid, "명부").unwrap();
        assert_eq!(rows[0].seat_count, "3");
        assert_eq!(rows[0].seat_number, "R열 5");
    }

    #[test]
    fn test_zero_data_rows_is_empty_not_error() {
        let grid = interpark_grid(vec![]);
        assert!(extract(&grid, "명부").unwrap().is_empty());
    }
}
