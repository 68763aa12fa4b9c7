pub mod csv;
pub mod excel;

/// 다운로드 파일 기본 이름 (타임스탬프 포함)
pub fn default_output_name() -> String {
    format!(
        "통합_예매명부_{}.xlsx",
        chrono::Local::now().format("%Y%m%d_%H%M%S")
    )
}
