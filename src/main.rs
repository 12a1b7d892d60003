//! `proverbs` - show the day's chapter of Proverbs in the terminal.

use std::io;

use chrono::Local;
use daily_proverbs::bible::todays_verses;
use daily_proverbs::cli::CommandLine;
use daily_proverbs::config::Config;
use daily_proverbs::error::Result;
use daily_proverbs::services::source::FileSource;
use daily_proverbs::{logging, render};

fn main() -> Result<()> {
    let args = CommandLine::parse_args();
    logging::init();

    let config = Config::load()?;
    tracing::debug!("{} {}", config.app_name(), config.app_version());

    let now = Local::now().naive_local();
    let today = args.date.unwrap_or_else(|| now.date());
    let source = FileSource::new(args.resource_path(&config));

    let reading = todays_verses(&source, today);

    let mut stdout = io::stdout().lock();
    if args.json {
        return render::write_json(&mut stdout, &reading);
    }

    // The clock only makes sense for the live day
    let clock = (args.date.is_none() && !args.no_clock).then_some(now);
    render::write_reading(
        &mut stdout,
        &reading,
        args.color_mode(&config),
        &mut rand::thread_rng(),
        clock,
    )
}
