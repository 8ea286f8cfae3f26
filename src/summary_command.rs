use anyhow::{Context, Result};
use log::info;

use crate::console::SessionPresenter;
use crate::event::{replay, ReplayArgs};

/// ガレージごとの駐車時間を出力するためのサブコマンド。
#[derive(Debug, clap::Args)]
pub struct SummaryArgs {
    #[clap(flatten)]
    pub replay: ReplayArgs,

    #[clap(long = "json", help = "Print durations as JSON")]
    pub json: bool,
}

pub struct SummaryCommand<'a, P: SessionPresenter> {
    presenter: &'a mut P,
}

impl<'a, P: SessionPresenter> SummaryCommand<'a, P> {
    /// 新しい`SummaryCommand`を返す。
    pub fn new(presenter: &'a mut P) -> Self {
        Self { presenter }
    }

    /// `summary`サブコマンドの処理を行う。
    ///
    /// 終了した駐車記録のみを集計するため、駐車中のガレージは表示されない。
    pub fn run(&mut self, args: &ReplayArgs) -> Result<()> {
        let vehicle = replay(args).context("Failed to replay parking events")?;
        let durations = vehicle.parked_durations();
        info!("Summarized {} garages for {}", durations.len(), vehicle);

        self.presenter
            .show_durations(&durations)
            .context("Failed to show durations")
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::SummaryCommand;
    use crate::console::MockSessionPresenter;
    use crate::event::{parse_event, ReplayArgs};

    #[test]
    fn test_summary_command() {
        let args = ReplayArgs {
            plate: "AA-123-BB".to_string(),
            keep_going: true,
            events: [
                "enter:G1@2024-11-13T08:00:00Z",
                "exit@2024-11-13T09:30:00Z",
                "exit@2024-11-13T09:45:00Z",
                "enter:G2@2024-11-13T10:00:00Z",
            ]
            .iter()
            .map(|e| parse_event(e).unwrap())
            .collect(),
        };
        let mut presenter = MockSessionPresenter::new();
        presenter
            .expect_show_durations()
            .withf(|durations| {
                durations.len() == 1
                    && durations[0].garage.name() == "G1"
                    && durations[0].duration == Duration::minutes(90)
            })
            .times(1)
            .returning(|_| Ok(()));

        let mut command = SummaryCommand::new(&mut presenter);

        assert!(command.run(&args).is_ok());
    }
}
