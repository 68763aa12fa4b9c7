use crate::models::{Grid, VendorKind};

/// 내용 스캔 대상 상위 행 수
const SCAN_ROWS: usize = 25;

/// 업로드 파일이 어느 예매처 양식인지 판별
///
/// 1순위는 파일명이다. 운영자가 보통 출처 이름을 붙여 내보내므로
/// 싸고 정확하다. 파일명에 단서가 없으면 상위 행의 셀 내용에서
/// 예매처 고유의 컬럼명/문구를 찾는다. 둘 다 실패하면 Unknown.
pub fn detect_vendor(grid: &Grid, filename: &str) -> VendorKind {
    if let Some(kind) = detect_by_filename(filename) {
        return kind;
    }
    detect_by_content(grid)
}

fn detect_by_filename(filename: &str) -> Option<VendorKind> {
    let lower = filename.to_lowercase();

    if lower.contains("ticketlink") || filename.contains("티켓링크") {
        return Some(VendorKind::TicketLink);
    }
    if lower.contains("inter") || filename.contains("인터파크") {
        return Some(VendorKind::Interpark);
    }
    if lower.contains("yes") || filename.contains("예스") {
        return Some(VendorKind::Yes24);
    }
    None
}

fn detect_by_content(grid: &Grid) -> VendorKind {
    let haystack: String = grid
        .rows
        .iter()
        .take(SCAN_ROWS)
        .flat_map(|row| row.iter())
        .map(|cell| cell.to_lowercase())
        .collect::<Vec<_>>()
        .join("|");

    // 티켓링크: 관람일/회차 컬럼이 고유
    if haystack.contains("회차/시간") || haystack.contains("관람일") {
        return VendorKind::TicketLink;
    }
    // 인터파크: 판매좌석수/티켓배송 컬럼이 고유
    if haystack.contains("판매좌석수") || haystack.contains("티켓배송") {
        return VendorKind::Interpark;
    }
    // 예스24: 공연일자 + 예매자명 조합이 고유
    if haystack.contains("공연일자") && haystack.contains("예매자명") {
        return VendorKind::Yes24;
    }

    VendorKind::Unknown
}
