use clap::Parser;
use ms_convert::{Language, Options, Value};
use std::process::ExitCode;

/// Converts duration strings to milliseconds and back
#[derive(Parser)]
#[command(name = "ms-convert")]
#[command(version)]
struct Cli {
    /// Duration text ("2 days", "1.5h") or a millisecond count
    #[arg(allow_hyphen_values = true)]
    value: String,

    /// Print full unit names ("2 days") instead of abbreviations ("2d")
    #[arg(short, long)]
    long: bool,

    /// Language of full unit names (en, ru)
    #[arg(short = 'L', long, default_value_t = Language::English)]
    language: Language,

    /// Always parse VALUE as duration text, even if it is a plain number
    #[arg(short, long)]
    parse: bool,
}

/// Picks the conversion direction for a command line argument.
///
/// Only finite numbers are formatted, so `inf` or `nan` are parsed as text.
fn classify(raw: &str, force_text: bool) -> Value<'_> {
    if force_text {
        return Value::Text(raw);
    }

    match raw.parse::<f64>() {
        Ok(ms) if ms.is_finite() => Value::Number(ms),
        _ => Value::Text(raw),
    }
}

fn main() -> ExitCode {
    env_logger::builder()
        .filter_module("ms_convert", log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let cli = Cli::parse();

    let options = Options::default().long(cli.long).language(cli.language);

    let value = classify(&cli.value, cli.parse);

    log::debug!("converting {value} with {options:?}");

    match ms_convert::convert(value, &options) {
        Ok(Some(converted)) => {
            println!("{converted}");
            ExitCode::SUCCESS
        }
        Ok(None) => {
            log::warn!("not a duration: {:?}", cli.value);
            ExitCode::from(1)
        }
        Err(e) => {
            log::error!("{e}");
            ExitCode::from(2)
        }
    }
}
