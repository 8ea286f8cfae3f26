use anyhow::{Context, Result};
use log::info;

use crate::console::SessionPresenter;
use crate::event::{replay, ReplayArgs};

/// ガレージごとの駐車記録を出力するためのサブコマンド。
#[derive(Debug, clap::Args)]
pub struct SessionsArgs {
    #[clap(flatten)]
    pub replay: ReplayArgs,

    #[clap(long = "json", help = "Print sessions as JSON")]
    pub json: bool,
}

pub struct SessionsCommand<'a, P: SessionPresenter> {
    presenter: &'a mut P,
}

impl<'a, P: SessionPresenter> SessionsCommand<'a, P> {
    /// 新しい`SessionsCommand`を返す。
    ///
    /// # Arguments
    /// * `presenter` - 駐車記録を表示するためのpresenter
    pub fn new(presenter: &'a mut P) -> Self {
        Self { presenter }
    }

    /// `sessions`サブコマンドの処理を行う。
    ///
    /// イベントを再生した車両の駐車記録を、ガレージが最初に現れた順にまとめて表示する。
    pub fn run(&mut self, args: &ReplayArgs) -> Result<()> {
        let vehicle = replay(args).context("Failed to replay parking events")?;
        let groups = vehicle.sessions_by_garage();
        info!(
            "{} visited {} garages, parked: {}",
            vehicle,
            groups.len(),
            vehicle.is_parked()
        );

        self.presenter
            .show_sessions(&groups)
            .context("Failed to show sessions")
    }
}

#[cfg(test)]
mod tests {
    use super::SessionsCommand;
    use crate::console::MockSessionPresenter;
    use crate::event::{parse_event, ReplayArgs};

    fn args(events: &[&str]) -> ReplayArgs {
        ReplayArgs {
            plate: "AA-123-BB".to_string(),
            keep_going: false,
            events: events.iter().map(|e| parse_event(e).unwrap()).collect(),
        }
    }

    #[test]
    fn test_sessions_command() {
        let mut presenter = MockSessionPresenter::new();
        presenter
            .expect_show_sessions()
            .withf(|groups| {
                groups.len() == 2
                    && groups[0].garage.name() == "G1"
                    && groups[0].sessions.len() == 1
                    && !groups[0].sessions[0].is_open()
                    && groups[1].garage.name() == "G2"
                    && groups[1].sessions[0].is_open()
            })
            .times(1)
            .returning(|_| Ok(()));

        let mut command = SessionsCommand::new(&mut presenter);
        let result = command.run(&args(&[
            "enter:G1@2024-11-13T08:00:00Z",
            "exit@2024-11-13T09:00:00Z",
            "enter:G2@2024-11-13T10:00:00Z",
        ]));

        assert!(result.is_ok());
    }

    #[test]
    fn test_sessions_command_invalid_event() {
        let mut presenter = MockSessionPresenter::new();
        presenter.expect_show_sessions().times(0);

        let mut command = SessionsCommand::new(&mut presenter);
        let result = command.run(&args(&["exit"]));

        assert!(result.is_err());
    }
}
