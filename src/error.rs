use chrono::{DateTime, Utc};
use thiserror::Error;

/// 駐車状態に対して不正な操作を行った時のエラー。
///
/// 呼び出し側のロジックの誤りを表すため、リトライはせずにそのまま呼び出し元へ返す。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidStateError {
    #[error("vehicle {registration} is already parked in {garage}")]
    AlreadyParked { registration: String, garage: String },

    #[error("vehicle {registration} is not parked")]
    NotParked { registration: String },

    #[error("parking session is already terminated")]
    AlreadyTerminated,

    #[error("exit time {exit} precedes entry time {entry}")]
    ExitBeforeEntry {
        entry: DateTime<Utc>,
        exit: DateTime<Utc>,
    },

    #[error("entry time {entry} precedes last exit time {last_exit}")]
    EntryBeforeLastExit {
        entry: DateTime<Utc>,
        last_exit: DateTime<Utc>,
    },
}

/// 名前が空の時のエラー。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind} must not be empty")]
pub struct InvalidNameError {
    pub kind: &'static str,
}
