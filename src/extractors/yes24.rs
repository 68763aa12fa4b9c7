use crate::models::{AppError, Grid, RosterRow};
use crate::parsers::build_vendor_sheet;
use crate::utils::datetime::{normalize_datetime, parse_datetime};

use super::resolve::{cell, find_column};
use super::{build_rows, resolve_columns, FieldKeywords};

/// 예스24 내보내기의 헤더 행 (0부터, 20행째)
///
/// 헤더 위 19행은 공연 정보가 흩어져 있는 메타데이터 영역.
pub const HEADER_ROW: usize = 19;

/// 메타데이터 탐색 창의 열 폭
const WINDOW_COLS: usize = 5;
/// 1차 탐색 창의 마지막 행 (2차 창은 여기부터 헤더 직전까지)
const FIRST_WINDOW_ROWS: usize = 10;

const KEYWORDS: FieldKeywords = FieldKeywords {
    name: &["예매자명", "예매자"],
    title: &["공연명"],
    count: &["매수", "수량"],
    seat: &["좌석정보", "좌석번호"],
    phone: &["비상연락처", "연락처"],
};

const DATETIME_KEYWORDS: &[&str] = &["공연일자", "공연일시"];

/// 예스24 내부 시트 1장을 표준 행으로 변환
///
/// 예스24는 파일 하나에 회차별 시트가 여러 장 들어오므로
/// 시트마다 독립적으로 호출되고, 출처 라벨에 시트명이 붙는다.
pub fn extract(grid: &Grid, source_name: &str, sheet_name: &str) -> Result<Vec<RosterRow>, AppError> {
    let sheet = build_vendor_sheet(grid, HEADER_ROW)?;
    let cols = resolve_columns(&sheet.headers, &KEYWORDS);
    let datetime_col = find_column(&sheet.headers, DATETIME_KEYWORDS);
    let embedded = find_embedded_datetime(grid);
    let source_label = format!("{}_{}", source_name, sheet_name);

    Ok(build_rows(&sheet, &cols, source_name, &source_label, |row| {
        let from_column = normalize_datetime(cell(row, datetime_col), None);
        if from_column.is_empty() {
            embedded.clone()
        } else {
            from_column
        }
    }))
}

/// 헤더 위 메타데이터 영역에서 공연일시를 찾는다
///
/// 고정 창 두 개를 먼저 보고, 못 찾으면 점점 넓혀 시트 전체까지
/// 훑는다. 행/열 오프셋은 예스24 양식 상수다. 날짜로 해석되는
/// 첫 셀에서 멈춘다.
fn find_embedded_datetime(grid: &Grid) -> String {
    let windows: [(usize, usize, usize); 4] = [
        (0, FIRST_WINDOW_ROWS, WINDOW_COLS),
        (FIRST_WINDOW_ROWS, HEADER_ROW, WINDOW_COLS),
        (0, HEADER_ROW, usize::MAX),
        (0, usize::MAX, usize::MAX),
    ];

    for (start, end, col_limit) in windows {
        for row in grid.rows.iter().take(end).skip(start) {
            for value in row.iter().take(col_limit) {
                if let Ok(found) = parse_datetime(value, None) {
                    return found;
                }
            }
        }
    }
    String::new()
}
