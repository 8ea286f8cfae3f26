use anyhow::{Context, Result};
use chrono::{DateTime, Local, Utc};

/// 駐車記録の表示に利用する日付フォーマット。
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// 現在のUTC時間を取得する。
#[cfg(not(test))]
pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// テスト時に入出庫時刻を固定するためのモック時計。
#[cfg(test)]
pub mod mock_clock {
    use std::cell::RefCell;

    use super::DateTime;
    use super::Utc;

    thread_local! {
        static MOCK_TIME: RefCell<Option<DateTime<Utc>>> = const { RefCell::new(None) };
    }

    /// モック時間を取得する。設定されていない場合は現在時刻を返す。
    pub fn now() -> DateTime<Utc> {
        MOCK_TIME.with(|cell| (*cell.borrow()).unwrap_or_else(Utc::now))
    }

    /// モック時間を設定する。
    pub fn set_mock_time(time: DateTime<Utc>) {
        MOCK_TIME.with(|cell| *cell.borrow_mut() = Some(time));
    }

    pub fn clear_mock_time() {
        MOCK_TIME.with(|cell| *cell.borrow_mut() = None);
    }
}

#[cfg(test)]
pub use mock_clock::now;

/// UTC時刻をLocalタイムゾーンの日付文字列にする。
pub fn format_date(time: &DateTime<Utc>) -> String {
    time.with_timezone(&Local).format(DATE_FORMAT).to_string()
}

/// RFC3339形式の文字列をパースする。
pub fn parse_timestamp(s: &str) -> Result<DateTime<Utc>> {
    let datetime = DateTime::parse_from_rfc3339(s)
        .with_context(|| format!("Failed to parse timestamp: {}", s))?
        .to_utc();

    Ok(datetime)
}
