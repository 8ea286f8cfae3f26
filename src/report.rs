use std::collections::HashMap;

use chrono::Duration;
use serde::Serialize;

use crate::garage::Garage;
use crate::parking_session::ParkingSession;

/// 1つのガレージでの駐車記録をまとめたもの。
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SessionGroup {
    pub garage: Garage,
    pub sessions: Vec<ParkingSession>,
}

/// 1つのガレージに駐車していた合計時間。
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GarageDuration {
    pub garage: Garage,
    pub duration: Duration,
}

/// 駐車記録をガレージごとにまとめる。
///
/// ガレージは履歴に最初に現れた順、各グループ内の駐車記録は履歴の順に並ぶ。
pub fn group_by_garage(sessions: &[ParkingSession]) -> Vec<SessionGroup> {
    let mut index: HashMap<&Garage, usize> = HashMap::new();
    let mut groups: Vec<SessionGroup> = Vec::new();

    for session in sessions {
        let position = *index.entry(session.garage()).or_insert_with(|| {
            groups.push(SessionGroup {
                garage: session.garage().clone(),
                sessions: vec![],
            });
            groups.len() - 1
        });
        groups[position].sessions.push(session.clone());
    }

    groups
}

/// ガレージごとの駐車時間を集計する。
///
/// 終了していない駐車記録は集計対象外とする。
pub fn sum_durations(sessions: &[ParkingSession]) -> Vec<GarageDuration> {
    group_by_garage(sessions)
        .into_iter()
        .filter_map(|group| {
            let total = group
                .sessions
                .iter()
                .filter_map(ParkingSession::duration)
                .reduce(|acc, duration| acc + duration)?;
            Some(GarageDuration {
                garage: group.garage,
                duration: total,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Duration, TimeZone, Utc};

    use super::{group_by_garage, sum_durations};
    use crate::garage::Garage;
    use crate::parking_session::ParkingSession;

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 11, 13, hour, 0, 0).unwrap()
    }

    fn session(garage: &str, entry: u32, exit: Option<u32>) -> ParkingSession {
        let garage = Garage::new(garage).unwrap();
        let mut session = ParkingSession::open("AA-123-BB", garage, at(entry));
        if let Some(exit) = exit {
            session.terminate_at(at(exit)).unwrap();
        }
        session
    }

    #[test]
    fn test_group_by_garage_keeps_first_seen_order() {
        let sessions = vec![
            session("G2", 1, Some(2)),
            session("G1", 3, Some(4)),
            session("G2", 5, Some(6)),
            session("G1", 7, None),
        ];

        let groups = group_by_garage(&sessions);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].garage.name(), "G2");
        assert_eq!(groups[0].sessions, vec![sessions[0].clone(), sessions[2].clone()]);
        assert_eq!(groups[1].garage.name(), "G1");
        assert_eq!(groups[1].sessions, vec![sessions[1].clone(), sessions[3].clone()]);
    }

    #[test]
    fn test_group_by_garage_empty() {
        assert!(group_by_garage(&[]).is_empty());
    }

    #[test]
    fn test_sum_durations_ignores_open_sessions() {
        let sessions = vec![
            session("G1", 1, Some(3)),
            session("G2", 4, Some(5)),
            session("G1", 6, Some(7)),
            session("G3", 8, None),
        ];

        let durations = sum_durations(&sessions);

        assert_eq!(durations.len(), 2);
        assert_eq!(durations[0].garage.name(), "G1");
        assert_eq!(durations[0].duration, Duration::hours(3));
        assert_eq!(durations[1].garage.name(), "G2");
        assert_eq!(durations[1].duration, Duration::hours(1));
    }
}
