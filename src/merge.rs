use crate::detect::detect_vendor;
use crate::extractors::{interpark, ticketlink, yes24};
use crate::models::{AppError, FileReport, RosterRow, SourceFile, VendorKind, FLAG_DEFAULT};
use crate::parsers::read_workbook;

/// 업로드된 파일들을 통합 명부로 합친다
///
/// 파일마다 예매처를 감지해 해당 추출기로 보내고, 파일 단위의
/// 실패는 보고 항목의 오류 문자열로 바꾼 뒤 다음 파일로 넘어간다.
/// 배치를 중단시키는 실패는 없다. 보고는 파일당 정확히 1건,
/// 업로드 순서 그대로다. 유효한 행이 하나도 없으면 명부는 None.
pub fn merge_files(files: &[SourceFile]) -> (Option<Vec<RosterRow>>, Vec<FileReport>) {
    let mut all_rows = Vec::new();
    let mut reports = Vec::new();

    for file in files {
        let mut report = FileReport::new(file.name.clone());
        match process_file(file, &mut report) {
            Ok(rows) => {
                report.processed = rows.len();
                all_rows.extend(rows);
            }
            Err(err) => report.error = Some(err.message),
        }
        reports.push(report);
    }

    if all_rows.is_empty() {
        return (None, reports);
    }

    finalize(&mut all_rows);
    (Some(all_rows), reports)
}

/// 파일 1건 처리: 읽기 → 감지 → 추출
fn process_file(file: &SourceFile, report: &mut FileReport) -> Result<Vec<RosterRow>, AppError> {
    let grids = read_workbook(&file.bytes)?;
    report.raw_rows = grids.iter().map(|grid| grid.rows.len()).sum();

    // 파일명에서 확장자를 뗀 것이 출처 라벨의 기본형
    let base_name = file
        .name
        .rsplit_once('.')
        .map(|(stem, _)| stem)
        .unwrap_or(&file.name);

    let vendor = detect_vendor(&grids[0], &file.name);
    report.vendor = vendor;

    let rows = match vendor {
        VendorKind::TicketLink => ticketlink::extract(&grids[0], base_name)?,
        VendorKind::Interpark => interpark::extract(&grids[0], base_name)?,
        VendorKind::Yes24 => {
            // 회차별 시트를 전부 순회하고, 시트 단위 오류는 모아서 보고
            let mut rows = Vec::new();
            let mut sheet_errors = Vec::new();
            for grid in &grids {
                if grid.is_blank() {
                    continue;
                }
                match yes24::extract(grid, base_name, &grid.name) {
                    Ok(extracted) => rows.extend(extracted),
                    Err(err) => sheet_errors.push(format!("{}: {}", grid.name, err.message)),
                }
            }
            if rows.is_empty() && !sheet_errors.is_empty() {
                return Err(AppError::new(sheet_errors.join(" / ")));
            }
            if !sheet_errors.is_empty() {
                report.error = Some(sheet_errors.join(" / "));
            }
            rows
        }
        VendorKind::Unknown => {
            return Err(AppError::new("예매처를 자동 감지할 수 없습니다."));
        }
    };

    if rows.is_empty() {
        return Err(AppError::new("유효한 예매자 행이 없습니다."));
    }
    Ok(rows)
}

/// 빈 플래그를 기본값("X")으로 채운다
fn finalize(rows: &mut [RosterRow]) {
    for row in rows {
        if row.ticket_issued.trim().is_empty() {
            row.ticket_issued = FLAG_DEFAULT.to_string();
        }
        if row.checked_in.trim().is_empty() {
            row.checked_in = FLAG_DEFAULT.to_string();
        }
    }
}
