use clap::Parser;

use crate::utils::version;

/// Tick and frame rates become `1 / rate` second intervals
fn positive_rate(value: &str) -> Result<f64, String> {
    let rate: f64 = value
        .parse()
        .map_err(|_| format!("`{value}` is not a number"))?;
    if rate.is_finite() && rate > 0.0 {
        Ok(rate)
    } else {
        Err(format!("rate must be greater than 0, got {value}"))
    }
}

#[derive(Parser, Debug)]
#[command(author, version = version(), about)]
pub struct Cli {
    #[arg(short, long, value_name = "FLOAT", help = "Tick rate, i.e. number of ticks per second", default_value_t = 4.0, value_parser = positive_rate)]
    pub tick_rate: f64,

    #[arg(short, long, value_name = "FLOAT", help = "Frame rate, i.e. number of frames per second", default_value_t = 30.0, value_parser = positive_rate)]
    pub frame_rate: f64,

    #[arg(short, long, value_name = "URL", help = "Base URL of the posts API, overriding the config file")]
    pub base_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["postfeed"]);
        assert_eq!(cli.tick_rate, 4.0);
        assert_eq!(cli.frame_rate, 30.0);
        assert_eq!(cli.base_url, None);
    }

    #[rstest]
    #[case(&["postfeed", "--tick-rate", "0"])]
    #[case(&["postfeed", "-f", "-30"])]
    #[case(&["postfeed", "-f", "fast"])]
    #[case(&["postfeed", "-t", "inf"])]
    fn test_rejects_non_positive_rates(#[case] args: &[&str]) {
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn test_base_url_override() {
        let cli = Cli::parse_from(["postfeed", "--base-url", "http://localhost:8080", "-f", "60"]);
        assert_eq!(cli.base_url.as_deref(), Some("http://localhost:8080"));
        assert_eq!(cli.frame_rate, 60.0);
    }
}
