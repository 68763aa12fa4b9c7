use serde::{Deserialize, Serialize};
use std::fmt;

/// 통합 명부 컬럼 헤더 (고정 9컬럼, 순서 고정)
pub const ROSTER_HEADERS: [&str; 9] = [
    "공연명",
    "공연일시",
    "예매처",
    "예매자이름",
    "연락처",
    "매수",
    "좌석번호",
    "티켓수령",
    "입장확인",
];

/// 티켓수령/입장확인 플래그 기본값 (미처리 상태)
pub const FLAG_DEFAULT: &str = "X";

/// 지원 예매처
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VendorKind {
    TicketLink,
    Interpark,
    Yes24,
    Unknown,
}

impl VendorKind {
    pub fn label(self) -> &'static str {
        match self {
            VendorKind::TicketLink => "티켓링크",
            VendorKind::Interpark => "인터파크",
            VendorKind::Yes24 => "예스24",
            VendorKind::Unknown => "미확인",
        }
    }
}

impl fmt::Display for VendorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// 업로드된 원본 파일 (파일명 + 바이트 내용)
#[derive(Clone)]
pub struct SourceFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

/// 엑셀 시트 1장을 문자열 그리드로 읽은 것 (헤더 해석 전)
#[derive(Debug, Clone)]
pub struct Grid {
    pub name: String,
    pub rows: Vec<Vec<String>>,
}

impl Grid {
    /// 모든 셀이 공백인 시트인지 확인
    pub fn is_blank(&self) -> bool {
        self.rows
            .iter()
            .all(|row| row.iter().all(|cell| cell.trim().is_empty()))
    }
}

/// 통합 명부의 한 행 (예매 1건)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RosterRow {
    pub performance_title: String,
    pub performance_datetime: String,
    pub source_label: String,
    pub attendee_name: String,
    pub phone: String,
    pub seat_count: String,
    pub seat_number: String,
    pub ticket_issued: String,
    pub checked_in: String,
}

impl RosterRow {
    /// ROSTER_HEADERS와 같은 순서의 필드 값
    pub fn fields(&self) -> [&str; 9] {
        [
            &self.performance_title,
            &self.performance_datetime,
            &self.source_label,
            &self.attendee_name,
            &self.phone,
            &self.seat_count,
            &self.seat_number,
            &self.ticket_issued,
            &self.checked_in,
        ]
    }
}

/// 파일별 처리 결과 (업로드 순서대로 파일당 정확히 1건)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileReport {
    pub file: String,
    pub raw_rows: usize,
    pub vendor: VendorKind,
    pub processed: usize,
    pub error: Option<String>,
}

impl FileReport {
    pub fn new(file: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            raw_rows: 0,
            vendor: VendorKind::Unknown,
            processed: 0,
            error: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppError {
    pub message: String,
}

impl AppError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for AppError {}
