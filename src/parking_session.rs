use std::fmt;

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use crate::datetime::{self, format_date};
use crate::error::InvalidStateError;
use crate::garage::Garage;

/// 1台の車両が1つのガレージに駐車していた期間を表す構造体。
///
/// `exit_time`が`None`の間は駐車中として扱う。
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ParkingSession {
    vehicle: String,
    garage: Garage,
    entry_time: DateTime<Utc>,
    exit_time: Option<DateTime<Utc>>,
}

impl ParkingSession {
    /// `entry_time`に入庫した駐車中の`ParkingSession`を返す。
    pub(crate) fn open(vehicle: &str, garage: Garage, entry_time: DateTime<Utc>) -> Self {
        Self {
            vehicle: vehicle.to_string(),
            garage,
            entry_time,
            exit_time: None,
        }
    }

    /// 現在時刻で駐車を終了する。
    pub fn terminate(&mut self) -> Result<(), InvalidStateError> {
        self.terminate_at(datetime::now())
    }

    /// 指定した時刻で駐車を終了する。
    ///
    /// 終了済みの場合、または入庫時刻より前の時刻を指定した場合はエラーを返し、状態は変更しない。
    pub fn terminate_at(&mut self, at: DateTime<Utc>) -> Result<(), InvalidStateError> {
        if !self.is_open() {
            return Err(InvalidStateError::AlreadyTerminated);
        }
        if at < self.entry_time {
            return Err(InvalidStateError::ExitBeforeEntry {
                entry: self.entry_time,
                exit: at,
            });
        }

        self.exit_time = Some(at);
        Ok(())
    }

    pub fn is_open(&self) -> bool {
        self.exit_time.is_none()
    }

    /// 駐車していた時間を返す。駐車中の場合は`None`。
    pub fn duration(&self) -> Option<Duration> {
        self.exit_time.map(|exit| exit - self.entry_time)
    }

    pub fn vehicle(&self) -> &str {
        &self.vehicle
    }

    pub fn garage(&self) -> &Garage {
        &self.garage
    }

    pub fn entry_time(&self) -> DateTime<Utc> {
        self.entry_time
    }

    pub fn exit_time(&self) -> Option<DateTime<Utc>> {
        self.exit_time
    }
}

impl fmt::Display for ParkingSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.exit_time {
            Some(exit) => write!(
                f,
                "Session{{ entry={}, exit={} }}",
                format_date(&self.entry_time),
                format_date(exit)
            ),
            None => write!(
                f,
                "Session{{ entry={}, in progress }}",
                format_date(&self.entry_time)
            ),
        }
    }
}
