use crate::models::{AppError, Grid};
use crate::utils::text::is_blank_row;

/// 헤더 행이 확정된 예매처 시트
///
/// 헤더 라벨은 파일마다 표기가 흔들릴 수 있으므로
/// 유일성을 보장하지 않는다. 열 탐색은 부분일치로 한다.
#[derive(Debug, Clone)]
pub struct VendorSheet {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// 예매처 고정 헤더 행을 승격해 VendorSheet를 만든다
///
/// `header_row`는 0부터 세는 행 번호. 헤더 이전 행은 버리고,
/// 헤더 이후의 완전 공백 행도 버린다. 시트가 헤더 위치보다
/// 짧으면 오류를 돌려준다 (파일 단위로 보고되고 배치는 계속).
pub fn build_vendor_sheet(grid: &Grid, header_row: usize) -> Result<VendorSheet, AppError> {
    if grid.rows.len() <= header_row {
        return Err(AppError::new(format!(
            "시트 '{}'의 행이 {}행뿐이라 헤더 위치({}행)에 미치지 못합니다.",
            grid.name,
            grid.rows.len(),
            header_row + 1
        )));
    }

    let headers: Vec<String> = grid.rows[header_row]
        .iter()
        .map(|cell| cell.trim().to_string())
        .collect();

    let rows: Vec<Vec<String>> = grid.rows[header_row + 1..]
        .iter()
        .filter(|row| !is_blank_row(row))
        .cloned()
        .collect();

    Ok(VendorSheet { headers, rows })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: Vec<Vec<&str>>) -> Grid {
        Grid {
            name: "Sheet1".to_string(),
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(String::from).collect())
                .collect(),
        }
    }

    #[test]
    fn test_promotes_header_and_drops_preamble() {
        let grid = grid(vec![
            vec!["제목", ""],
            vec!["", ""],
            vec!["성명", "매수"],
            vec!["홍길동", "2"],
            vec!["", ""],
            vec!["김철수", "1"],
        ]);
        let sheet = build_vendor_sheet(&grid, 2).unwrap();
        assert_eq!(sheet.headers, vec!["성명", "매수"]);
        assert_eq!(sheet.rows.len(), 2);
        assert_eq!(sheet.rows[0][0], "홍길동");
    }

    #[test]
    fn test_short_sheet_is_error_not_panic() {
        let grid = grid(vec![vec!["한 줄"]]);
        let err = build_vendor_sheet(&grid, 19).unwrap_err();
        assert!(err.message.contains("헤더 위치"));
    }

    #[test]
    fn test_header_row_with_no_data_rows() {
        let grid = grid(vec![vec!["성명"], vec![""]]);
        let sheet = build_vendor_sheet(&grid, 0).unwrap();
        assert!(sheet.rows.is_empty());
    }
}
