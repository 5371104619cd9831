mod commands;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};
use yearplan_core::Planner;

#[derive(Parser)]
#[command(name = "yearplan")]
#[command(about = "Plan your year: events on dates, month and year views")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add an event to one date or several
    Add {
        title: String,

        /// Date to add to (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,

        /// Time of day (HH:MM, defaults to 00:00)
        #[arg(short, long)]
        time: Option<String>,

        /// Mark the event important
        #[arg(short, long)]
        important: bool,

        /// Color tag (blue, green, orange, red, purple)
        #[arg(short, long)]
        color: Option<String>,

        /// Add the same event to each of these dates instead
        #[arg(long, num_args = 1.., value_name = "DATE", conflicts_with = "date")]
        dates: Vec<String>,

        /// Add the same event to every day of a month (YYYY-MM)
        #[arg(long, value_name = "MONTH", conflicts_with_all = ["date", "dates"])]
        month: Option<String>,
    },
    /// Show the events on one date
    Day {
        /// Date to show (YYYY-MM-DD, defaults to today)
        date: Option<String>,
    },
    /// Show a month, one row per day
    Month {
        /// Month to show (YYYY-MM, defaults to the current month)
        month: Option<String>,
    },
    /// Show a whole year at a glance
    Year {
        /// Year to show (defaults to the current year)
        year: Option<i32>,
    },
    /// List every event, sorted by date and time
    List,
    /// Edit fields of an event (omitted fields are untouched)
    Edit {
        /// Date the event is on (YYYY-MM-DD)
        date: String,

        /// Event id (see `yearplan list`)
        id: String,

        #[arg(long)]
        title: Option<String>,

        /// New time of day (HH:MM)
        #[arg(long)]
        time: Option<String>,

        /// Mark important
        #[arg(long, conflicts_with = "not_important")]
        important: bool,

        /// Clear the important mark
        #[arg(long)]
        not_important: bool,

        /// New color tag (blue, green, orange, red, purple)
        #[arg(long, conflicts_with = "clear_color")]
        color: Option<String>,

        /// Remove the color tag
        #[arg(long)]
        clear_color: bool,
    },
    /// Remove one or more events from a date
    Rm {
        /// Date the events are on (YYYY-MM-DD)
        date: String,

        /// Event ids (see `yearplan list`)
        #[arg(required = true)]
        ids: Vec<String>,
    },
    /// Copy an event onto other dates
    Copy {
        /// Date the source event is on (YYYY-MM-DD)
        date: String,

        /// Source event id
        id: String,

        /// Dates to copy onto (YYYY-MM-DD)
        #[arg(required = true)]
        targets: Vec<String>,
    },
    /// Show config and data paths
    Config,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Add {
            title,
            date,
            time,
            important,
            color,
            dates,
            month,
        } => {
            let planner = open_planner()?;
            commands::add::run(
                &planner,
                &title,
                date.as_deref(),
                time.as_deref(),
                important,
                color.as_deref(),
                &dates,
                month.as_deref(),
            )
        }
        Commands::Day { date } => commands::day::run(&open_planner()?, date.as_deref()),
        Commands::Month { month } => commands::month::run(&open_planner()?, month.as_deref()),
        Commands::Year { year } => commands::year::run(&open_planner()?, year),
        Commands::List => commands::list::run(&open_planner()?),
        Commands::Edit {
            date,
            id,
            title,
            time,
            important,
            not_important,
            color,
            clear_color,
        } => {
            let planner = open_planner()?;
            commands::edit::run(
                &planner,
                &date,
                &id,
                commands::edit::Changes {
                    title,
                    time,
                    important,
                    not_important,
                    color,
                    clear_color,
                },
            )
        }
        Commands::Rm { date, ids } => commands::rm::run(&open_planner()?, &date, &ids),
        Commands::Copy { date, id, targets } => {
            commands::copy::run(&open_planner()?, &date, &id, &targets)
        }
        Commands::Config => commands::config::run(),
    }
}

fn open_planner() -> Result<Planner> {
    Planner::load().map_err(|e| anyhow::anyhow!(e))
}
