use std::env;

use anyhow::{Context, Result};
use chrono::Local;
use fern::colors::{Color, ColoredLevelConfig};
use log::LevelFilter;

/// ログレベルを上書きするための環境変数。
pub const LOG_ENV: &str = "GARAGES_LOG";

/// ログの出力レベルを決める。
///
/// 環境変数`GARAGES_LOG`が設定されていればそれを優先し、なければ`verbose`で切り替える。
pub fn level_from(env_value: Option<&str>, verbose: bool) -> LevelFilter {
    env_value
        .and_then(|value| value.parse().ok())
        .unwrap_or(if verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        })
}

/// 標準エラー出力にログを出すloggerを初期化する。
pub fn init(verbose: bool) -> Result<()> {
    let env_value = env::var(LOG_ENV).ok();
    let colors = ColoredLevelConfig::new()
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red)
        .debug(Color::Blue);

    fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                Local::now().format("%H:%M:%S"),
                colors.color(record.level()),
                record.target(),
                message
            ))
        })
        .level(level_from(env_value.as_deref(), verbose))
        .chain(std::io::stderr())
        .apply()
        .context("Failed to initialize logger")
}

#[cfg(test)]
mod tests {
    use log::LevelFilter;
    use rstest::rstest;

    use super::level_from;

    #[rstest]
    #[case::default(None, false, LevelFilter::Info)]
    #[case::verbose(None, true, LevelFilter::Debug)]
    #[case::env_wins(Some("warn"), true, LevelFilter::Warn)]
    #[case::env_invalid(Some("loud"), false, LevelFilter::Info)]
    fn test_level_from(
        #[case] env_value: Option<&str>,
        #[case] verbose: bool,
        #[case] expected: LevelFilter,
    ) {
        assert_eq!(level_from(env_value, verbose), expected);
    }
}
