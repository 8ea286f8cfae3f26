use std::collections::HashSet;
use std::fmt;
use std::io::Write;

use anyhow::Result;
use chrono::{DateTime, Utc};
use log::debug;

use crate::console::{ConsoleGroupedList, SessionPresenter};
use crate::datetime;
use crate::error::{InvalidNameError, InvalidStateError};
use crate::garage::Garage;
use crate::parking_session::ParkingSession;
use crate::report::{group_by_garage, sum_durations, GarageDuration, SessionGroup};

/// ガレージに駐車する車両。
///
/// 駐車記録は入庫順に保持し、駐車中になり得るのは最後の記録だけである。
///
/// # Examples
///
/// ```
/// use garages::{Garage, Vehicle};
///
/// let mut vehicle = Vehicle::new("AA-123-BB").unwrap();
/// vehicle.enter_garage(Garage::new("G1").unwrap()).unwrap();
/// assert!(vehicle.is_parked());
/// vehicle.exit_garage().unwrap();
/// assert!(!vehicle.is_parked());
/// ```
#[derive(Debug)]
pub struct Vehicle {
    registration: String,
    sessions: Vec<ParkingSession>,
}

impl Vehicle {
    /// 新しい`Vehicle`を返す。
    ///
    /// 登録番号が空白のみの場合はエラーを返す。
    pub fn new(registration: impl Into<String>) -> Result<Self, InvalidNameError> {
        let registration = registration.into();
        if registration.trim().is_empty() {
            return Err(InvalidNameError {
                kind: "registration",
            });
        }

        Ok(Self {
            registration,
            sessions: vec![],
        })
    }

    pub fn registration(&self) -> &str {
        &self.registration
    }

    /// 現在時刻でガレージに入庫する。
    ///
    /// 既に駐車中の場合はエラーを返す。
    pub fn enter_garage(&mut self, garage: Garage) -> Result<(), InvalidStateError> {
        self.enter_garage_at(garage, datetime::now())
    }

    /// 指定した時刻でガレージに入庫する。
    ///
    /// 前回の出庫時刻より前の時刻を指定した場合もエラーを返す。
    pub fn enter_garage_at(
        &mut self,
        garage: Garage,
        at: DateTime<Utc>,
    ) -> Result<(), InvalidStateError> {
        if let Some(current) = self.current_session() {
            return Err(InvalidStateError::AlreadyParked {
                registration: self.registration.clone(),
                garage: current.garage().name().to_string(),
            });
        }
        if let Some(last_exit) = self.sessions.last().and_then(ParkingSession::exit_time) {
            if at < last_exit {
                return Err(InvalidStateError::EntryBeforeLastExit {
                    entry: at,
                    last_exit,
                });
            }
        }

        debug!("{} enters {} at {}", self.registration, garage, at);
        self.sessions.push(ParkingSession::open(&self.registration, garage, at));
        Ok(())
    }

    /// 現在時刻でガレージから出庫する。
    ///
    /// 駐車中でない場合はエラーを返す。
    /// 入庫時刻が現在時刻より未来に指定されていた場合も`ExitBeforeEntry`を返す。
    pub fn exit_garage(&mut self) -> Result<(), InvalidStateError> {
        self.exit_garage_at(datetime::now())
    }

    /// 指定した時刻でガレージから出庫する。
    pub fn exit_garage_at(&mut self, at: DateTime<Utc>) -> Result<(), InvalidStateError> {
        let registration = &self.registration;
        let current = self
            .sessions
            .last_mut()
            .filter(|session| session.is_open())
            .ok_or_else(|| InvalidStateError::NotParked {
                registration: registration.clone(),
            })?;

        current.terminate_at(at)?;
        debug!("{} exits {} at {}", registration, current.garage(), at);
        Ok(())
    }

    pub fn is_parked(&self) -> bool {
        self.current_session().is_some()
    }

    /// 駐車中の記録を返す。
    pub fn current_session(&self) -> Option<&ParkingSession> {
        self.sessions.last().filter(|session| session.is_open())
    }

    /// 入庫順の駐車記録。
    pub fn history(&self) -> &[ParkingSession] {
        &self.sessions
    }

    /// これまでに駐車したガレージの集合を返す。駐車中のガレージも含む。
    pub fn visited_garages(&self) -> HashSet<Garage> {
        self.sessions
            .iter()
            .map(|session| session.garage().clone())
            .collect()
    }

    /// 駐車記録をガレージごとにまとめる。
    pub fn sessions_by_garage(&self) -> Vec<SessionGroup> {
        group_by_garage(&self.sessions)
    }

    /// ガレージごとの駐車時間。駐車中の記録は含まない。
    pub fn parked_durations(&self) -> Vec<GarageDuration> {
        sum_durations(&self.sessions)
    }

    /// ガレージごとに、ガレージ名とそのガレージでの駐車記録を出力する。
    ///
    /// ```text
    /// Garage(name=Universite Champollion Albi):
    ///     Session{ entry=13/11/2024, exit=13/11/2024 }
    /// Garage(name=ISIS Castres):
    ///     Session{ entry=13/11/2024, exit=13/11/2024 }
    ///     Session{ entry=13/11/2024, in progress }
    /// ```
    pub fn print_sessions<W: Write>(&self, out: &mut W) -> Result<()> {
        ConsoleGroupedList::new(out).show_sessions(&self.sessions_by_garage())
    }
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vehicle(registration={})", self.registration)
    }
}
