use super::text;

/// 공연일시 파싱 실패 원인
///
/// 내부적으로는 실패 원인을 구분해 두고, 공개 함수에서만
/// 원본 문자열 반환으로 완화한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateTimeError {
    /// 입력이 비어 있음
    Empty,
    /// 지원하는 날짜 형식이 아님
    UnknownFormat,
    /// 숫자 파싱 실패
    BadNumber,
    /// 월/일/시/분이 달력 범위를 벗어남
    OutOfRange,
}

/// 예매처별 공연일시 표기를 "YYYY-MM-DD HH:MM"으로 정규화
///
/// 지원 형식 (우선순위 순):
/// 1. 압축 숫자형: "20221120 1500" (YYYYMMDD + HHMM)
/// 2. 점 구분형: "2022.11.19" + 보조 필드 "1/14:00" (회차/시간)
/// 3. 하이픈 구분형: "2022-11-20 15:00" (시간 생략 시 00:00)
///
/// 어느 형식에도 맞지 않으면 원본을 정규화만 해서 그대로 돌려준다.
/// 항상 성공한다.
pub fn normalize_datetime(primary: &str, secondary: Option<&str>) -> String {
    match parse_datetime(primary, secondary) {
        Ok(formatted) => formatted,
        Err(_) => text::normalize_cell(primary),
    }
}

/// normalize_datetime의 내부 파서. 실패 원인을 보존한다.
pub fn parse_datetime(primary: &str, secondary: Option<&str>) -> Result<String, DateTimeError> {
    let raw = primary.trim();
    if raw.is_empty() {
        return Err(DateTimeError::Empty);
    }

    if is_compact(raw) {
        return parse_compact(raw);
    }
    if raw.split('.').count() >= 3 {
        return parse_dotted(raw, secondary);
    }
    if raw.contains('-') {
        return parse_dashed(raw);
    }

    Err(DateTimeError::UnknownFormat)
}

/// 압축 숫자형 여부: 길이 13 이상, 앞 8자리가 숫자
fn is_compact(raw: &str) -> bool {
    raw.is_ascii() && raw.len() >= 13 && raw.bytes().take(8).all(|b| b.is_ascii_digit())
}

/// "20221120 1500" → 앞 8자리 YYYYMMDD, 9번째 글자부터 HHMM
fn parse_compact(raw: &str) -> Result<String, DateTimeError> {
    let year = normalize_year(&raw[0..4]);
    let month = parse_number(&raw[4..6])?;
    let day = parse_number(&raw[6..8])?;
    let hour = parse_number(&raw[9..11])?;
    let minute = parse_number(&raw[11..13])?;
    format_datetime(&year, month, day, hour, minute)
}

/// "2022.11.19" (+ 보조 "1/14:00") — 날짜는 점 구분, 시간은 보조 필드의 슬래시 뒤
fn parse_dotted(raw: &str, secondary: Option<&str>) -> Result<String, DateTimeError> {
    let date_part = raw.split_whitespace().next().unwrap_or(raw);
    let parts: Vec<&str> = date_part
        .split('.')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect();
    if parts.len() < 3 {
        return Err(DateTimeError::UnknownFormat);
    }

    let year = normalize_year(parts[0]);
    let month = parse_number(parts[1])?;
    let day = parse_number(parts[2])?;

    let (hour, minute) = secondary
        .and_then(parse_round_time)
        .unwrap_or((0, 0));
    format_datetime(&year, month, day, hour, minute)
}

/// "2022-11-20 15:00" 또는 "2022-11-20" — 시간이 없으면 00:00
fn parse_dashed(raw: &str) -> Result<String, DateTimeError> {
    let mut tokens = raw.split_whitespace();
    let date_part = tokens.next().ok_or(DateTimeError::Empty)?;
    let parts: Vec<&str> = date_part.split('-').collect();
    if parts.len() < 3 {
        return Err(DateTimeError::UnknownFormat);
    }

    let year = normalize_year(parts[0]);
    let month = parse_number(parts[1])?;
    let day = parse_number(parts[2])?;

    let (hour, minute) = tokens
        .next()
        .and_then(parse_clock)
        .unwrap_or((0, 0));
    format_datetime(&year, month, day, hour, minute)
}

/// 회차/시간 필드: "1/14:00" → 슬래시 뒤의 시각
fn parse_round_time(value: &str) -> Option<(u32, u32)> {
    let after_slash = value.rsplit('/').next()?;
    parse_clock(after_slash)
}

/// "HH:MM[...]" → (시, 분). 분은 앞 두 글자만 사용
fn parse_clock(value: &str) -> Option<(u32, u32)> {
    let mut parts = value.trim().split(':');
    let hour: u32 = parts.next()?.trim().parse().ok()?;
    let minute_raw: String = parts.next()?.trim().chars().take(2).collect();
    let minute: u32 = minute_raw.parse().ok()?;
    Some((hour, minute))
}

/// 연도 표기를 4자리로 정규화
///
/// 숫자만 남긴 뒤: 2자리면 20YY, 4자리 이상이면 뒤 4자리,
/// 그 외에는 앞을 0으로 채운다.
pub fn normalize_year(raw: &str) -> String {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    match digits.len() {
        2 => format!("20{}", digits),
        n if n >= 4 => digits[n - 4..].to_string(),
        _ => format!("{:0>4}", digits),
    }
}

fn parse_number(raw: &str) -> Result<u32, DateTimeError> {
    raw.trim().parse().map_err(|_| DateTimeError::BadNumber)
}

fn format_datetime(
    year: &str,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
) -> Result<String, DateTimeError> {
    // 전화번호 등 숫자 나열을 날짜로 오인하지 않도록 범위를 확인한다
    if !(1..=12).contains(&month) || !(1..=31).contains(&day) || hour > 23 || minute > 59 {
        return Err(DateTimeError::OutOfRange);
    }
    Ok(format!(
        "{}-{:02}-{:02} {:02}:{:02}",
        year, month, day, hour, minute
    ))
}
