use crate::models::{AppError, Grid, RosterRow};
use crate::parsers::build_vendor_sheet;
use crate::utils::datetime::normalize_datetime;

use super::resolve::{cell, find_column};
use super::{build_rows, resolve_columns, FieldKeywords};

/// 티켓링크 내보내기의 헤더 행 (0부터, 6행째)
pub const HEADER_ROW: usize = 5;

const KEYWORDS: FieldKeywords = FieldKeywords {
    name: &["예매자", "성명", "이름"],
    title: &["공연명", "상품명"],
    count: &["매수", "수량"],
    seat: &["좌석번호", "좌석"],
    phone: &["연락처", "전화"],
};

/// 관람일 열 (날짜만 들어 있음)
const DATE_KEYWORDS: &[&str] = &["관람일", "공연일"];
/// 회차/시간 열 ("1/14:00" 형태, 슬래시 뒤가 시각)
const ROUND_KEYWORDS: &[&str] = &["회차/시간", "회차", "시간"];

/// 티켓링크 시트 1장을 표준 행으로 변환
pub fn extract(grid: &Grid, source_name: &str) -> Result<Vec<RosterRow>, AppError> {
    let sheet = build_vendor_sheet(grid, HEADER_ROW)?;
    let cols = resolve_columns(&sheet.headers, &KEYWORDS);
    let date_col = find_column(&sheet.headers, DATE_KEYWORDS);
    let round_col = find_column(&sheet.headers, ROUND_KEYWORDS);

    Ok(build_rows(&sheet, &cols, source_name, source_name, |row| {
        let secondary = round_col.and_then(|idx| row.get(idx)).map(String::as_str);
        normalize_datetime(cell(row, date_col), secondary)
    }))
}
