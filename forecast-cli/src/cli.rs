use clap::Parser;
use forecast_core::{
    FetchState, ForecastConfig, ForecastProvider, OpenMeteoProvider, ZAKOPANE, render,
};

/// Top-level CLI struct. The location and forecast window are fixed, so the
/// only argument is verbosity.
#[derive(Debug, Parser)]
#[command(name = "forecast", version, about = "7-day weather forecast for Zakopane")]
pub struct Cli {
    /// Verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let config = ForecastConfig::default();
        let days = config.forecast_days;
        let provider = OpenMeteoProvider::new(config)?;

        println!("{}", render(&FetchState::Loading, days));

        // One fetch per run, no retry. Any failure collapses to the error view.
        let state = match provider.fetch_daily(ZAKOPANE).await {
            Ok(forecast) => FetchState::Success(forecast),
            Err(err) => FetchState::Error(err.to_string()),
        };

        println!("{}", render(&state, days));

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn verbose_flag_counts() {
        let cli = Cli::parse_from(["forecast"]);
        assert_eq!(cli.verbose, 0);

        let cli = Cli::parse_from(["forecast", "-vv"]);
        assert_eq!(cli.verbose, 2);
    }
}
