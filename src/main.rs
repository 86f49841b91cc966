use cadence::Scheduler;
use cadence::clock::SystemClock;
use cadence::demo::{self, Answer};

use anyhow::Context;
use clap::Parser;
use log::info;
use std::time::{Duration, Instant};

/// Runs the three sample tasks on one cooperative event loop.
#[derive(Debug, Parser)]
#[command(name = "cadence", version, about)]
struct Args {
    /// Seconds until the generator task (A) finishes.
    #[arg(long, default_value_t = 10)]
    basic_secs: u64,

    /// Seconds until the deferred-value task (B) finishes.
    #[arg(long, default_value_t = 5)]
    future_secs: u64,

    /// Seconds until the async task (C) finishes.
    #[arg(long, default_value_t = 3)]
    async_secs: u64,

    /// Milliseconds slept after each re-queued step. 0 disables pacing.
    #[arg(long, default_value_t = 1000)]
    pace_ms: u64,
}

/// Returns the instant `secs` seconds after `now`.
fn deadline(now: Instant, secs: u64) -> anyhow::Result<Instant> {
    now.checked_add(Duration::from_secs(secs))
        .with_context(|| format!("{secs} s from now is not representable"))
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("cadence=trace"))
        .try_init()
        .context("failed to initialise logger")?;

    info!("{args:?}");

    let now = Instant::now();
    let print = |answer: Answer| println!("{answer}");

    Scheduler::builder()
        .pacing(Duration::from_millis(args.pace_ms))
        .task(demo::basic_task(
            "A",
            deadline(now, args.basic_secs).context("--basic-secs is out of range")?,
            SystemClock,
            print,
        ))
        .task(demo::future_task(
            "B",
            deadline(now, args.future_secs).context("--future-secs is out of range")?,
            SystemClock,
            print,
        ))
        .task(demo::async_task(
            "C",
            deadline(now, args.async_secs).context("--async-secs is out of range")?,
            SystemClock,
            print,
        ))
        .build()
        .run_loop();

    println!("Finish all tasks");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deadline_adds_seconds() {
        let now = Instant::now();

        assert_eq!(deadline(now, 0).unwrap(), now);
        assert_eq!(deadline(now, 10).unwrap(), now + Duration::from_secs(10));
    }

    #[test]
    fn deadline_rejects_overflowing_seconds() {
        let err = deadline(Instant::now(), u64::MAX).unwrap_err();

        assert!(err.to_string().contains("not representable"));
    }

    #[test]
    fn args_accept_out_of_range_seconds_without_panicking() {
        let args = Args::parse_from(["cadence", "--basic-secs", "18446744073709551615", "--pace-ms", "0"]);
        let err = deadline(Instant::now(), args.basic_secs).context("--basic-secs is out of range");

        assert!(err.is_err());
    }
}
