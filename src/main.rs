use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use ticketmergetool::exporters::{self, csv, excel};
use ticketmergetool::{merge_files, SourceFile};

/// 티켓링크/인터파크/예스24 예매 명부 통합 도구
#[derive(Parser)]
#[command(version, about = "예매처별 엑셀 명부를 하나의 통합 명부로 합칩니다")]
struct Cli {
    /// 통합할 엑셀 파일(xlsx/xls), 여러 개 지정 가능
    #[arg(required = true, value_name = "FILE")]
    files: Vec<PathBuf>,

    /// 통합 명부 출력 경로 (기본: 통합_예매명부_{일시}.xlsx)
    #[arg(short = 'o', long = "output", value_name = "XLSX")]
    output: Option<PathBuf>,

    /// CSV로도 저장할 경로
    #[arg(long = "csv", value_name = "CSV")]
    csv: Option<PathBuf>,

    /// 처리 보고를 JSON으로 출력
    #[arg(long = "report-json")]
    report_json: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut sources = Vec::new();
    for path in &cli.files {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        match fs::read(path) {
            Ok(bytes) => sources.push(SourceFile { name, bytes }),
            Err(err) => {
                // 읽기 실패도 파일 단위 실패다. 빈 바이트로 넘겨
                // 보고에 한 줄이 남게 하고 배치는 계속한다.
                eprintln!("{}: 파일을 읽을 수 없습니다: {}", path.display(), err);
                sources.push(SourceFile {
                    name,
                    bytes: Vec::new(),
                });
            }
        }
    }

    let (roster, reports) = merge_files(&sources);

    for report in &reports {
        match &report.error {
            Some(error) => println!("[실패] {}: {}", report.file, error),
            None => println!(
                "[완료] {} ({}행) → {} 형식으로 처리 ({}건)",
                report.file, report.raw_rows, report.vendor, report.processed
            ),
        }
    }

    if cli.report_json {
        match serde_json::to_string_pretty(&reports) {
            Ok(json) => println!("{}", json),
            Err(err) => eprintln!("보고 JSON 생성에 실패했습니다: {}", err),
        }
    }

    let Some(rows) = roster else {
        eprintln!("통합할 수 있는 데이터가 없습니다.");
        return ExitCode::FAILURE;
    };
    println!("통합 완료: 총 {}건", rows.len());

    let output_path = cli
        .output
        .unwrap_or_else(|| PathBuf::from(exporters::default_output_name()));
    let bytes = match excel::export_xlsx(&rows) {
        Ok(bytes) => bytes,
        Err(err) => {
            eprintln!("{}", err);
            return ExitCode::FAILURE;
        }
    };
    if let Err(err) = fs::write(&output_path, bytes) {
        eprintln!("{}: 저장에 실패했습니다: {}", output_path.display(), err);
        return ExitCode::FAILURE;
    }
    println!("저장됨: {}", output_path.display());

    if let Some(csv_path) = cli.csv {
        match csv::export_csv(&rows) {
            Ok(content) => {
                if let Err(err) = fs::write(&csv_path, content) {
                    eprintln!("{}: CSV 저장에 실패했습니다: {}", csv_path.display(), err);
                    return ExitCode::FAILURE;
                }
                println!("저장됨: {}", csv_path.display());
            }
            Err(err) => {
                eprintln!("{}", err);
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}
