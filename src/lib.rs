//! 티켓링크/인터파크/예스24 예매 명부 통합 파이프라인
//!
//! 예매처별 엑셀 내보내기를 감지·정규화해 고정 9컬럼의
//! 통합 명부 한 장과 파일별 처리 보고를 만든다.

pub mod detect;
pub mod exporters;
pub mod extractors;
pub mod merge;
pub mod models;
pub mod parsers;
pub mod utils;

pub use detect::detect_vendor;
pub use merge::merge_files;
pub use models::{AppError, FileReport, RosterRow, SourceFile, VendorKind, ROSTER_HEADERS};
