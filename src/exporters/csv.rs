use csv::WriterBuilder;

use crate::models::{AppError, RosterRow, ROSTER_HEADERS};

/// 통합 명부를 CSV 문자열로 직렬화
///
/// 한국어 Windows의 엑셀이 바로 열 수 있도록 UTF-8 BOM을 붙인다.
pub fn export_csv(rows: &[RosterRow]) -> Result<String, AppError> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    writer
        .write_record(ROSTER_HEADERS)
        .map_err(|e| AppError::new(format!("CSV 기록 오류: {}", e)))?;

    for row in rows {
        writer
            .write_record(row.fields())
            .map_err(|e| AppError::new(format!("CSV 기록 오류: {}", e)))?;
    }

    let data = writer
        .into_inner()
        .map_err(|e| AppError::new(format!("CSV 버퍼 획득 오류: {}", e)))?;

    let csv_string =
        String::from_utf8(data).map_err(|e| AppError::new(format!("UTF-8 변환 오류: {}", e)))?;

    Ok(format!("\u{FEFF}{}", csv_string))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_csv_header_and_bom() {
        let output = export_csv(&[]).unwrap();
        assert!(output.starts_with('\u{FEFF}'));
        assert!(output.contains("공연명,공연일시,예매처,예매자이름,연락처,매수,좌석번호,티켓수령,입장확인"));
    }

    #[test]
    fn test_export_csv_rows_in_order() {
        let mut first = RosterRow::default();
        first.attendee_name = "홍길동".to_string();
        let mut second = RosterRow::default();
        second.attendee_name = "김철수".to_string();

        let output = export_csv(&[first, second]).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].contains("홍길동"));
        assert!(lines[2].contains("김철수"));
    }
}
