use std::io::Cursor;

use calamine::{open_workbook_auto_from_rs, DataType, Reader};

use crate::models::{AppError, Grid};

/// 엑셀 파일(xlsx/xls) 바이트를 시트별 문자열 그리드로 읽는다
///
/// 업로드된 파일은 메모리상의 바이트로 전달되므로 경로가 아니라
/// 커서를 통해 연다. 모든 시트를 읽어 순서대로 돌려준다.
pub fn read_workbook(bytes: &[u8]) -> Result<Vec<Grid>, AppError> {
    let cursor = Cursor::new(bytes);
    let mut workbook = open_workbook_auto_from_rs(cursor)
        .map_err(|err| AppError::new(format!("엑셀 파일의 읽기에 실패했습니다: {err}")))?;

    let sheet_names = workbook.sheet_names().to_owned();
    let mut grids = Vec::new();

    for name in sheet_names {
        let range = match workbook.worksheet_range(&name) {
            Some(Ok(range)) => range,
            Some(Err(err)) => {
                return Err(AppError::new(format!(
                    "워크시트 '{name}'의 해석에 실패했습니다: {err}"
                )))
            }
            None => continue,
        };

        let rows = range
            .rows()
            .map(|row| row.iter().map(data_type_to_string).collect())
            .collect();

        grids.push(Grid { name, rows });
    }

    if grids.is_empty() {
        return Err(AppError::new("워크시트가 없습니다."));
    }

    Ok(grids)
}

fn data_type_to_string(cell: &DataType) -> String {
    match cell {
        DataType::Empty => String::new(),
        DataType::String(s) => s.trim().to_string(),
        DataType::Float(f) => {
            if f.fract().abs() < f64::EPSILON {
                format!("{:.0}", f)
            } else {
                f.to_string()
            }
        }
        DataType::Int(v) => v.to_string(),
        DataType::Bool(v) => v.to_string(),
        // 날짜 셀은 정규화 파이프라인이 바로 받을 수 있는 형태로 내린다
        DataType::DateTime(_) => cell
            .as_datetime()
            .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| cell.to_string()),
        DataType::Error(_) => String::new(),
        _ => cell.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_workbook_rejects_garbage() {
        assert!(read_workbook(b"not a spreadsheet").is_err());
        assert!(read_workbook(b"").is_err());
    }

    #[test]
    fn test_data_type_to_string_floats() {
        assert_eq!(data_type_to_string(&DataType::Float(2.0)), "2");
        assert_eq!(data_type_to_string(&DataType::Float(2.5)), "2.5");
        assert_eq!(data_type_to_string(&DataType::Empty), "");
    }
}
