//! Prints the countdown and ambient gradient for a fixed Cairo timetable.
//!
//! `cargo run -p salat --example countdown -- -vv [dark|light]`

use anyhow::Result;
use chrono::Utc;
use salat::prelude::*;
use salat::time::format_prayer_time;
use tracing_subscriber::EnvFilter;

const CRATE_TARGETS: &[&str] = &[
    "salat",
    "salat_core",
    "salat_types",
    "salat_time",
    "salat_schedule",
    "salat_gradient",
];

/// 0 -> info, 1 (-v) -> debug, 2+ (-vv) -> trace. `RUST_LOG` wins if set.
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    let default_filter: String = CRATE_TARGETS
        .iter()
        .map(|t| format!("{t}={level}"))
        .collect::<Vec<_>>()
        .join(",");

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let verbosity = args
        .iter()
        .filter(|a| a.starts_with("-v"))
        .map(|a| a.chars().filter(|&c| c == 'v').count())
        .sum::<usize>()
        .min(u8::MAX as usize) as u8;
    let theme = args
        .iter()
        .find(|a| !a.starts_with('-'))
        .map(|a| a.parse::<Theme>())
        .transpose()?
        .unwrap_or_default();

    init_logging(verbosity);

    let cairo = Location::new(30.0444, 31.2357)?.with_place("Cairo", "Egypt", "EG");
    let settings = Settings::new()
        .location(cairo)
        .theme(theme)
        .time_format(TimeFormat::TwelveHour);
    let settings = match settings.suggested_method() {
        Some(method) => settings.method(method),
        None => settings,
    };

    let source = StaticTimetable::new(
        "Africa/Cairo",
        ["04:21 (EET)", "05:52 (EET)", "11:58 (EET)", "15:25 (EET)", "18:03 (EET)", "19:21 (EET)"],
    );
    let now = Utc::now();
    let request = TimesRequest::from_settings(&settings, now)?;

    let mut clock = PrayerClock::new(settings.theme);
    clock.refresh(&source, &request)?;

    if let Some(daily) = clock.daily() {
        for prayer in daily.prayers() {
            println!(
                "{:<8} {:>8}",
                prayer.name,
                format_prayer_time(&prayer.local_time, settings.time_format)?
            );
        }
    }

    let state = clock.countdown(now.timestamp_millis());
    match state.next_prayer {
        Some(next) => println!("\n{} in {} ({}% through the window)", next, state.parts(), state.progress_percent),
        None => println!("\nAll prayers have passed for today"),
    }

    let palette = clock.ambient(now.timestamp_millis());
    for (var, value) in palette.css_vars() {
        println!("{}: {};", var, value);
    }

    println!("\nnext refresh at {}", clock.refresh_at(now, &chrono::Local));
    Ok(())
}
