use std::io;

use anyhow::Result;
use clap::{Parser, Subcommand};

use garages::console::{ConsoleGroupedList, ConsoleJson};
use garages::logger;
use garages::sessions_command::{SessionsArgs, SessionsCommand};
use garages::summary_command::{SummaryArgs, SummaryCommand};

/// 入出庫イベントから車両の駐車記録を表示するためのCLIアプリケーション。
///
/// # Examples
/// ```
/// $ cargo run -- sessions -p AA-123-BB enter:G1@2024-11-13T08:00:00Z exit enter:G2
/// $ cargo run -- summary -p AA-123-BB enter:G1@2024-11-13T08:00:00Z exit
/// ```
#[derive(Debug, Parser)]
#[clap(version, about)]
struct Args {
    #[clap(short = 'v', long = "verbose", global = true, help = "Show debug logs")]
    verbose: bool,

    #[clap(subcommand)]
    subcommand: SubCommands,
}

/// サブコマンドを表す列挙型。
#[derive(Debug, Subcommand)]
enum SubCommands {
    Sessions(SessionsArgs),
    Summary(SummaryArgs),
}

fn main() -> Result<()> {
    let args = Args::parse();
    logger::init(args.verbose)?;

    let stdout = io::stdout();
    let mut writer = stdout.lock();
    match args.subcommand {
        SubCommands::Sessions(sessions) if sessions.json => {
            SessionsCommand::new(&mut ConsoleJson::new(&mut writer)).run(&sessions.replay)?
        }
        SubCommands::Sessions(sessions) => {
            SessionsCommand::new(&mut ConsoleGroupedList::new(&mut writer)).run(&sessions.replay)?
        }
        SubCommands::Summary(summary) if summary.json => {
            SummaryCommand::new(&mut ConsoleJson::new(&mut writer)).run(&summary.replay)?
        }
        SubCommands::Summary(summary) => {
            SummaryCommand::new(&mut ConsoleGroupedList::new(&mut writer)).run(&summary.replay)?
        }
    }

    Ok(())
}
