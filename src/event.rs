use std::str::FromStr;

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use log::{info, warn};

use crate::datetime::parse_timestamp;
use crate::garage::Garage;
use crate::vehicle::Vehicle;

/// 車両の入出庫イベント。時刻が`None`の場合は再生時の現在時刻を利用する。
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParkingEvent {
    Enter {
        garage: Garage,
        at: Option<DateTime<Utc>>,
    },
    Exit {
        at: Option<DateTime<Utc>>,
    },
}

impl FromStr for ParkingEvent {
    type Err = anyhow::Error;

    /// `enter:<GARAGE>[@<RFC3339>]`または`exit[@<RFC3339>]`をパースする。
    ///
    /// `enter`の`@`以降がRFC3339として読めない場合は、`@`を含めてガレージ名とする。
    fn from_str(s: &str) -> Result<Self> {
        if let Some(rest) = s.strip_prefix("enter:") {
            let (name, at) = match rest
                .rsplit_once('@')
                .and_then(|(name, timestamp)| Some((name, parse_timestamp(timestamp).ok()?)))
            {
                Some((name, at)) => (name, Some(at)),
                None => (rest, None),
            };
            let garage = Garage::new(name).with_context(|| format!("Invalid event: {}", s))?;
            return Ok(ParkingEvent::Enter { garage, at });
        }

        match s.split_once('@') {
            None if s == "exit" => Ok(ParkingEvent::Exit { at: None }),
            Some(("exit", timestamp)) => Ok(ParkingEvent::Exit {
                at: Some(parse_timestamp(timestamp)?),
            }),
            _ => bail!("Unknown event: {}", s),
        }
    }
}

/// コマンドライン引数のイベントをパースする。
pub fn parse_event(s: &str) -> Result<ParkingEvent> {
    s.parse()
}

/// 入出庫イベントを車両に順に適用するための引数。
#[derive(Debug, clap::Args)]
pub struct ReplayArgs {
    #[clap(short = 'p', long = "plate", help = "Registration of the vehicle")]
    pub plate: String,

    #[clap(long = "keep-going", help = "Skip events that are invalid for the vehicle state")]
    pub keep_going: bool,

    #[clap(
        required = true,
        help = "Events in the format enter:<GARAGE>[@<RFC3339>] or exit[@<RFC3339>]",
        parse(try_from_str = parse_event),
    )]
    pub events: Vec<ParkingEvent>,
}

/// イベントを順に適用した車両を返す。
///
/// 状態に合わないイベントは`keep_going`が有効な場合は警告を出して読み飛ばし、
/// 無効な場合はエラーを返す。
pub fn replay(args: &ReplayArgs) -> Result<Vehicle> {
    let mut vehicle = Vehicle::new(args.plate.as_str()).context("Invalid plate")?;

    for event in &args.events {
        let result = match event {
            ParkingEvent::Enter {
                garage,
                at: Some(at),
            } => vehicle.enter_garage_at(garage.clone(), *at),
            ParkingEvent::Enter { garage, at: None } => vehicle.enter_garage(garage.clone()),
            ParkingEvent::Exit { at: Some(at) } => vehicle.exit_garage_at(*at),
            ParkingEvent::Exit { at: None } => vehicle.exit_garage(),
        };

        match result {
            Ok(()) => {}
            Err(err) if args.keep_going => warn!("Skip event {:?}: {}", event, err),
            Err(err) => {
                return Err(err).with_context(|| format!("Failed to apply event: {:?}", event))
            }
        }
    }
    info!(
        "Replayed {} events for {}",
        args.events.len(),
        vehicle.registration()
    );

    Ok(vehicle)
}
