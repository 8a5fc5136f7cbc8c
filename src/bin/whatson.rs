use std::process;

use chrono::{Local, NaiveDate};
use clap::{Parser, ValueEnum};
use log::LevelFilter;
use whatson::scraper::WebScraper;
use whatson::types::ClockOffset;

#[derive(Parser)]
#[command(name = "whatson")]
#[command(about = "A wqxr.org daily playlist scraper", long_about = None)]
struct Cli {
    #[arg(
        short = 'l',
        long = "log-level",
        value_enum,
        default_value = "warn",
        help = "Set the logging level"
    )]
    log_level: LogLevel,

    #[arg(
        long,
        value_name = "YYYY-MM-DD",
        help = "Playlist day to fetch (defaults to today)",
        value_parser = |s: &str| NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| e.to_string()),
    )]
    date: Option<NaiveDate>,

    #[arg(
        long,
        default_value = whatson::DEFAULT_STATION,
        help = "Station code passed as the scheduleStation query parameter"
    )]
    station: String,

    #[arg(
        long,
        default_value_t = ClockOffset::default().am,
        help = "Hours added to an AM broadcast time"
    )]
    am_offset: u32,

    #[arg(
        long,
        default_value_t = ClockOffset::default().pm,
        help = "Hours added to a PM broadcast time"
    )]
    pm_offset: u32,

    #[arg(
        short = 'o',
        long = "output",
        value_enum,
        default_value = "text",
        help = "Output format"
    )]
    format: OutputFormat,
}

#[derive(Debug, Clone, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Clone, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn serialize_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            log::error!("Error serializing to JSON: {}", e);
            process::exit(1);
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level.clone().into())
        .init();

    let offset = ClockOffset {
        am: cli.am_offset,
        pm: cli.pm_offset,
    };

    let scraper = WebScraper::new(cli.station, offset).unwrap_or_else(|e| {
        log::error!("Error creating scraper: {}", e);
        process::exit(1);
    });

    let date = cli.date.unwrap_or_else(|| Local::now().date_naive());
    log::info!("Fetching playlist for {}...", date);

    let entry = scraper.fetch_now_playing(date).await.unwrap_or_else(|e| {
        log::error!("Error fetching playlist entry: {}", e);
        process::exit(1);
    });

    match cli.format {
        OutputFormat::Json => serialize_json(&entry),
        OutputFormat::Text => print!("{}", entry),
    }
}
