use rust_xlsxwriter::Workbook;

use crate::models::{AppError, RosterRow, ROSTER_HEADERS};

/// 통합 명부를 단일 시트 xlsx 바이트로 직렬화
///
/// 시트 1장("통합명부"), 고정 9컬럼, 인덱스 열 없음.
pub fn export_xlsx(rows: &[RosterRow]) -> Result<Vec<u8>, AppError> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet
        .set_name("통합명부")
        .map_err(|err| AppError::new(format!("시트 이름 설정에 실패했습니다: {err}")))?;

    for (col, label) in ROSTER_HEADERS.iter().enumerate() {
        sheet
            .write_string(0, col as u16, *label)
            .map_err(|err| AppError::new(format!("헤더 기록에 실패했습니다: {err}")))?;
    }

    for (row_idx, row) in rows.iter().enumerate() {
        for (col, value) in row.fields().iter().enumerate() {
            sheet
                .write_string((row_idx + 1) as u32, col as u16, *value)
                .map_err(|err| AppError::new(format!("명부 기록에 실패했습니다: {err}")))?;
        }
    }

    workbook
        .save_to_buffer()
        .map_err(|err| AppError::new(format!("엑셀 버퍼 생성에 실패했습니다: {err}")))
}
