pub mod interpark;
pub mod resolve;
pub mod ticketlink;
pub mod yes24;

use crate::models::RosterRow;
use crate::parsers::VendorSheet;
use crate::utils::text::{normalize_cell, truncate_cell};
use resolve::{cell, find_column, first_non_empty};

/// 연락처 최대 길이
const PHONE_MAX_LEN: usize = 100;
/// 좌석번호 최대 길이
const SEAT_MAX_LEN: usize = 200;
/// 매수 최대 길이
const COUNT_MAX_LEN: usize = 50;
/// 매수 열이 없거나 비어 있을 때의 기본값
const SEAT_COUNT_DEFAULT: &str = "1";

/// 표준 필드별 헤더 키워드 집합 (예매처별로 상수 선언)
pub(crate) struct FieldKeywords {
    pub name: &'static [&'static str],
    pub title: &'static [&'static str],
    pub count: &'static [&'static str],
    pub seat: &'static [&'static str],
    pub phone: &'static [&'static str],
}

/// 키워드 집합을 실제 시트 헤더에 대해 해결한 결과
pub(crate) struct ResolvedColumns {
    pub name: Option<usize>,
    pub title: Option<usize>,
    pub count: Option<usize>,
    pub seat: Option<usize>,
    pub phone: Option<usize>,
}

pub(crate) fn resolve_columns(headers: &[String], keywords: &FieldKeywords) -> ResolvedColumns {
    ResolvedColumns {
        name: find_column(headers, keywords.name),
        title: find_column(headers, keywords.title),
        count: find_column(headers, keywords.count),
        seat: find_column(headers, keywords.seat),
        phone: find_column(headers, keywords.phone),
    }
}

/// 해결된 열 매핑으로 시트의 데이터 행을 표준 행으로 변환
///
/// 공연일시만 예매처별 전략이 달라 클로저로 받는다.
/// 예매자 이름이 비거나 결측치 표기인 행은 여기서 걸러진다.
pub(crate) fn build_rows<F>(
    sheet: &VendorSheet,
    cols: &ResolvedColumns,
    source_name: &str,
    source_label: &str,
    datetime_for_row: F,
) -> Vec<RosterRow>
where
    F: Fn(&[String]) -> String,
{
    // 공연명 열이 없거나 전부 비어 있으면 파일명으로 대체
    let title_fallback = match cols.title {
        Some(col) => {
            let first = first_non_empty(&sheet.rows, col);
            if first.is_empty() {
                source_name.to_string()
            } else {
                first
            }
        }
        None => source_name.to_string(),
    };

    let mut rows = Vec::new();
    for row in &sheet.rows {
        let attendee = normalize_cell(cell(row, cols.name));
        if attendee.is_empty() {
            continue;
        }

        let own_title = normalize_cell(cell(row, cols.title));
        let title = if own_title.is_empty() {
            title_fallback.clone()
        } else {
            own_title
        };

        let seat_count = {
            let value = truncate_cell(cell(row, cols.count), COUNT_MAX_LEN);
            if value.is_empty() {
                SEAT_COUNT_DEFAULT.to_string()
            } else {
                value
            }
        };

        rows.push(RosterRow {
            performance_title: title,
            performance_datetime: datetime_for_row(row),
            source_label: source_label.to_string(),
            attendee_name: attendee,
            phone: truncate_cell(cell(row, cols.phone), PHONE_MAX_LEN),
            seat_count,
            seat_number: truncate_cell(cell(row, cols.seat), SEAT_MAX_LEN),
            ticket_issued: String::new(),
            checked_in: String::new(),
        });
    }
    rows
}
