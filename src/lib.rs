//! 車両、ガレージ、駐車記録を扱うライブラリ。
//!
//! 車両は同時に1つまでしか駐車中の記録を持てない。

pub mod console;
pub mod datetime;
pub mod error;
pub mod event;
pub mod garage;
pub mod logger;
pub mod parking_session;
pub mod report;
pub mod sessions_command;
pub mod summary_command;
pub mod vehicle;

pub use error::{InvalidNameError, InvalidStateError};
pub use garage::Garage;
pub use parking_session::ParkingSession;
pub use report::{GarageDuration, SessionGroup};
pub use vehicle::Vehicle;
