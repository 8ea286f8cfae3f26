use std::io::Write;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::report::{GarageDuration, SessionGroup};

/// Consoleに駐車記録を表示するためのtrait。
#[cfg_attr(test, mockall::automock)]
pub trait SessionPresenter {
    /// ガレージごとの駐車記録を表示する。
    ///
    /// # Arguments
    ///
    /// * `groups` - 表示するガレージごとの駐車記録
    fn show_sessions(&mut self, groups: &[SessionGroup]) -> Result<()>;

    /// ガレージごとの駐車時間を表示する。
    ///
    /// # Arguments
    ///
    /// * `durations` - 表示するガレージごとの駐車時間
    fn show_durations(&mut self, durations: &[GarageDuration]) -> Result<()>;
}

/// ガレージ名の下に駐車記録をタブでインデントして表示する。
pub struct ConsoleGroupedList<'a, W: Write> {
    writer: &'a mut W,
}

impl<'a, W: Write> ConsoleGroupedList<'a, W> {
    /// 新しい`ConsoleGroupedList`を返す。
    pub fn new(writer: &'a mut W) -> Self {
        Self { writer }
    }
}

impl<'a, W: Write> SessionPresenter for ConsoleGroupedList<'a, W> {
    fn show_sessions(&mut self, groups: &[SessionGroup]) -> Result<()> {
        for group in groups {
            writeln!(self.writer, "{}:", group.garage)
                .with_context(|| format!("Failed to write garage: {}", group.garage))?;
            for session in &group.sessions {
                writeln!(self.writer, "\t{}", session)
                    .with_context(|| format!("Failed to write session: {:?}", session))?;
            }
        }

        Ok(())
    }

    // 時間単位で表示する。
    fn show_durations(&mut self, durations: &[GarageDuration]) -> Result<()> {
        for entry in durations {
            let hours = entry.duration.num_seconds() as f64 / 3600.0;
            writeln!(self.writer, "- {}: {:.2}", entry.garage.name(), hours)
                .with_context(|| format!("Failed to write duration: {:?}", entry))?;
        }

        Ok(())
    }
}

/// JSON出力用の駐車時間。
#[derive(Debug, Serialize)]
struct JsonDuration<'a> {
    garage: &'a str,
    seconds: i64,
}

/// 駐車記録をJSONで表示する。
pub struct ConsoleJson<'a, W: Write> {
    writer: &'a mut W,
}

impl<'a, W: Write> ConsoleJson<'a, W> {
    /// 新しい`ConsoleJson`を返す。
    pub fn new(writer: &'a mut W) -> Self {
        Self { writer }
    }
}

impl<'a, W: Write> SessionPresenter for ConsoleJson<'a, W> {
    fn show_sessions(&mut self, groups: &[SessionGroup]) -> Result<()> {
        serde_json::to_writer_pretty(&mut *self.writer, groups)
            .context("Failed to serialize sessions")?;
        writeln!(self.writer).context("Failed to write newline")?;

        Ok(())
    }

    fn show_durations(&mut self, durations: &[GarageDuration]) -> Result<()> {
        let entries: Vec<JsonDuration> = durations
            .iter()
            .map(|entry| JsonDuration {
                garage: entry.garage.name(),
                seconds: entry.duration.num_seconds(),
            })
            .collect();
        serde_json::to_writer_pretty(&mut *self.writer, &entries)
            .context("Failed to serialize durations")?;
        writeln!(self.writer).context("Failed to write newline")?;

        Ok(())
    }
}
