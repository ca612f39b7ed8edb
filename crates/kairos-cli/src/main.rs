mod render;

use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use kairos_core::{
    CalendarCoordinates, Kairos, MicroPulses, WindowMode, millis_until_next_pulse,
    now_unix_millis, read_offset, set_offset_from_local_time, set_offset_to_now,
    to_unix_millis, unix_ms_to_iso8601,
};
use kairos_store::KairosHome;

#[derive(Parser)]
#[command(name = "kairos", about = "Kairos pulse clock and calendar")]
struct Cli {
    /// Override the configured window mode (daily | genesis)
    #[arg(long, global = true)]
    mode: Option<WindowMode>,

    /// Enable verbose debug output
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the current moment
    Now {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show the moment at a Unix millisecond instant
    At {
        /// Unix time in milliseconds
        #[arg(allow_negative_numbers = true)]
        unix_ms: i64,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Approximate wall-clock instant of a micro-pulse count (display only)
    Instant {
        /// Micro-pulses since genesis
        #[arg(allow_negative_numbers = true)]
        micro_pulses: MicroPulses,
    },

    /// Show calendar coordinates for an absolute day index
    Calendar {
        #[arg(allow_negative_numbers = true)]
        day_index: i64,
    },

    /// Show or change the sunrise offset
    Sunrise {
        #[command(subcommand)]
        action: SunriseAction,
    },

    /// Print one line per pulse until interrupted
    Watch {
        /// Stop after this many pulses
        #[arg(long)]
        count: Option<u64>,
    },
}

#[derive(Subcommand)]
enum SunriseAction {
    /// Print the stored offset
    Show,
    /// Sunrise is now
    Now,
    /// Set from local time, HH:MM[:SS[.fraction]]
    Set { time: String },
}

fn open_home() -> Result<KairosHome> {
    let base_dir = std::env::var("KAIROS_DATA_DIR")
        .ok()
        .map(std::path::PathBuf::from);
    KairosHome::open(base_dir.as_deref()).context("failed to open kairos data directory")
}

fn engine(cli: &Cli, home: &KairosHome) -> Kairos {
    Kairos::new(cli.mode.unwrap_or(home.config().window_mode))
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Commands::Now { json } => cmd_moment(&cli, now_unix_millis(), *json),
        Commands::At { unix_ms, json } => cmd_moment(&cli, *unix_ms, *json),
        Commands::Instant { micro_pulses } => cmd_instant(*micro_pulses),
        Commands::Calendar { day_index } => cmd_calendar(*day_index),
        Commands::Sunrise { action } => cmd_sunrise(action),
        Commands::Watch { count } => cmd_watch(&cli, *count).await,
    }
}

fn cmd_moment(cli: &Cli, unix_ms: i64, json: bool) -> Result<()> {
    let home = open_home()?;
    let moment = engine(cli, &home).moment_with_store(unix_ms, home.store());

    if json {
        let out = serde_json::to_string_pretty(&moment).context("failed to serialize moment")?;
        println!("{out}");
    } else {
        println!("{}", render::moment(&moment));
    }
    Ok(())
}

fn cmd_instant(micro_pulses: MicroPulses) -> Result<()> {
    let unix_ms = to_unix_millis(micro_pulses);
    println!("{unix_ms} ({})", unix_ms_to_iso8601(unix_ms));
    Ok(())
}

fn cmd_calendar(day_index: i64) -> Result<()> {
    println!(
        "{}",
        render::calendar(&CalendarCoordinates::from_day_index(day_index))
    );
    Ok(())
}

fn cmd_sunrise(action: &SunriseAction) -> Result<()> {
    let mut home = open_home()?;

    match action {
        SunriseAction::Show => {
            println!("{}", render::sunrise(read_offset(home.store())));
        }
        SunriseAction::Now => {
            let offset = set_offset_to_now(home.store_mut(), now_unix_millis())
                .context("failed to save sunrise offset")?;
            println!("{}", render::sunrise(offset));
        }
        SunriseAction::Set { time } => {
            let utc_offset = home.config().utc_offset_secs();
            match set_offset_from_local_time(home.store_mut(), time, utc_offset)
                .context("failed to save sunrise offset")?
            {
                Some(offset) => println!("{}", render::sunrise(offset)),
                None => {
                    println!("unrecognized time {time:?}; sunrise offset unchanged");
                    println!("{}", render::sunrise(read_offset(home.store())));
                }
            }
        }
    }
    Ok(())
}

async fn cmd_watch(cli: &Cli, count: Option<u64>) -> Result<()> {
    let home = open_home()?;
    let kairos = engine(cli, &home);
    tracing::info!("watching in {} mode", kairos.mode());

    let mut remaining = count;
    loop {
        // Re-read the offset each pulse so a concurrent `sunrise set` shows up.
        let moment = kairos.moment_with_store(now_unix_millis(), home.store());
        println!("{}", render::tick(&moment));

        if let Some(n) = remaining.as_mut() {
            if *n <= 1 {
                break;
            }
            *n -= 1;
        }

        let wait = millis_until_next_pulse(now_unix_millis());
        tokio::select! {
            _ = tokio::time::sleep(Duration::from_millis(wait as u64)) => {}
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("interrupted");
                break;
            }
        }
    }
    Ok(())
}
