//! `mcal` CLI — replay a meeting schedule and query conflicts and free time.
//!
//! The calendar lives only for one invocation: the schedule file is replayed
//! into a fresh calendar, then the requested command runs against it.
//!
//! ## Usage
//!
//! ```sh
//! # Free time on a day, given a schedule file
//! mcal --schedule week.json free --date 2024-03-04
//!
//! # Would a new meeting fit?
//! mcal -s week.json add --subject Planning --date 2024-03-04 --start 09:10 --minutes 30
//!
//! # Which meetings would it collide with? (JSON output)
//! mcal -s week.json --json check --date 2024-03-04 --start 09:10 --minutes 30
//!
//! # Week and month overviews in another timezone
//! MCAL_TIMEZONE=Europe/Amsterdam mcal -s week.json week --date 2024-03-06 --work
//! mcal -s week.json month --year 2024 --month 3
//! ```

mod output;
mod schedule;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use meeting_calendar::{CalendarStore, FullMonth, FullWeek, WorkWeek};
use serde_json::json;
use tracing_subscriber::EnvFilter;

use crate::output::SlotDto;

#[derive(Parser)]
#[command(
    name = "mcal",
    version,
    about = "Single-timezone meeting calendar: conflicts and free time"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// IANA timezone the calendar works in (never the system zone)
    #[arg(long, short = 't', env = "MCAL_TIMEZONE", default_value = "UTC")]
    timezone: String,

    /// JSON schedule file to replay before running the command ("-" for stdin)
    #[arg(long, short = 's')]
    schedule: Option<String>,

    /// Print results as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Try to add one more meeting after the schedule
    Add {
        #[arg(long)]
        subject: String,
        #[arg(long)]
        date: NaiveDate,
        /// Start time, HH:MM or HH:MM:SS
        #[arg(long)]
        start: String,
        /// Duration in minutes
        #[arg(long, allow_negative_numbers = true)]
        minutes: i64,
    },
    /// Report whether a proposed meeting overlaps existing ones
    Check {
        #[arg(long)]
        date: NaiveDate,
        /// Start time, HH:MM or HH:MM:SS
        #[arg(long)]
        start: String,
        /// Duration in minutes
        #[arg(long, allow_negative_numbers = true)]
        minutes: i64,
    },
    /// List the meetings on a date
    List {
        #[arg(long)]
        date: NaiveDate,
    },
    /// Show the free time slots of a date
    Free {
        #[arg(long)]
        date: NaiveDate,
        /// Only show the first slot at least this many minutes long
        #[arg(long)]
        min_minutes: Option<i64>,
    },
    /// Show the week containing a date
    Week {
        #[arg(long)]
        date: NaiveDate,
        /// Monday to Friday only
        #[arg(long)]
        work: bool,
    },
    /// Show a whole month
    Month {
        #[arg(long)]
        year: i32,
        #[arg(long)]
        month: u32,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut store = CalendarStore::from_timezone_name(&cli.timezone)
        .with_context(|| format!("Cannot build calendar for timezone '{}'", cli.timezone))?;
    let tz = store.timezone();

    if let Some(path) = cli.schedule.as_deref() {
        let entries = schedule::load(path)?;
        schedule::replay(&mut store, &entries)?;
    }

    match cli.command {
        Commands::Add {
            subject,
            date,
            start,
            minutes,
        } => {
            let start_time = schedule::parse_time(&start)?;
            let accepted = store
                .add_meeting(subject.as_str(), date, start_time, schedule::minutes(minutes)?)
                .context("Failed to add meeting")?;

            if cli.json {
                output::print_json(&json!({
                    "accepted": accepted,
                    "meetings": store.meetings_for_date(date),
                }))?;
            } else if accepted {
                println!("accepted: {}", subject);
                output::print_meetings(&store.meetings_for_date(date));
            } else {
                println!("rejected: {} overlaps an existing meeting", subject);
            }
        }
        Commands::Check {
            date,
            start,
            minutes,
        } => {
            let start_time = schedule::parse_time(&start)?;
            let duration = schedule::minutes(minutes)?;
            let overlaps = store
                .has_overlapping_meeting(date, start_time, duration)
                .context("Failed to check for overlaps")?;
            let conflicts = store.conflicting_meetings(date, start_time, duration)?;

            if cli.json {
                output::print_json(&json!({
                    "overlaps": overlaps,
                    "conflicts": conflicts,
                }))?;
            } else if overlaps {
                println!("overlaps:");
                for meeting in &conflicts {
                    println!("  {}", output::meeting_line(meeting));
                }
            } else {
                println!("free");
            }
        }
        Commands::List { date } => {
            let meetings = store.meetings_for_date(date);
            if cli.json {
                output::print_json(&meetings)?;
            } else {
                output::print_meetings(&meetings);
            }
        }
        Commands::Free { date, min_minutes } => {
            let slots = match min_minutes {
                Some(min) => store
                    .first_available_slot(date, schedule::minutes(min)?)?
                    .into_iter()
                    .collect::<Vec<_>>(),
                None => store.available_timeslots(date)?,
            };

            if cli.json {
                let dtos: Vec<SlotDto> = slots.iter().map(|s| SlotDto::new(s, tz)).collect();
                output::print_json(&dtos)?;
            } else {
                output::print_slots(&slots, date, tz);
            }
        }
        Commands::Week { date, work } => {
            if work {
                let week = WorkWeek::of(&store, date);
                if cli.json {
                    output::print_json(&week)?;
                } else {
                    output::print_days(&week.days);
                }
            } else {
                let week = FullWeek::of(&store, date);
                if cli.json {
                    output::print_json(&week)?;
                } else {
                    output::print_days(&week.days);
                }
            }
        }
        Commands::Month { year, month } => {
            let view = FullMonth::of(&store, year, month)?;
            if cli.json {
                output::print_json(&view)?;
            } else {
                output::print_days(view.days());
            }
        }
    }

    Ok(())
}
