mod commands;
mod config;
mod render;

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use semcal_core::TableLayout;

#[derive(Parser)]
#[command(name = "semcal")]
#[command(about = "Turn a university timetable dump into a semester .ics calendar")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum LayoutArg {
    /// Single-day table: one day column
    Day,
    /// Full-week table: Monday..Saturday columns
    Week,
}

impl From<LayoutArg> for TableLayout {
    fn from(layout: LayoutArg) -> Self {
        match layout {
            LayoutArg::Day => TableLayout::SingleDay,
            LayoutArg::Week => TableLayout::FullWeek,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a semester .ics calendar from a table dump
    Generate {
        /// JSON table dump produced by the fetch layer
        #[arg(short, long)]
        input: PathBuf,

        /// Group label, e.g. "П-32"
        #[arg(short, long)]
        group: String,

        #[arg(long, value_enum, default_value = "week")]
        layout: LayoutArg,

        /// Term start (YYYY-MM-DD)
        #[arg(long)]
        from: String,

        /// Term end, inclusive (YYYY-MM-DD)
        #[arg(long)]
        to: String,

        /// Day 0 of the 4-week cycle (YYYY-MM-DD); defaults to --from
        #[arg(long)]
        anchor: Option<String>,

        /// Optional TOML config (exclusions, placeholder summary, PRODID)
        #[arg(long)]
        config: Option<PathBuf>,

        #[arg(short, long, default_value = "schedule_semester.ics")]
        output: PathBuf,
    },
    /// Print the extracted weekly template as a plain-text report
    Show {
        /// JSON table dump produced by the fetch layer
        #[arg(short, long)]
        input: PathBuf,

        #[arg(long, value_enum, default_value = "week")]
        layout: LayoutArg,

        /// Only show this day, by its table name (e.g. "Понедельник")
        #[arg(long)]
        day: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            input,
            group,
            layout,
            from,
            to,
            anchor,
            config,
            output,
        } => {
            let from = parse_date(&from)?;
            let to = parse_date(&to)?;
            let anchor = match anchor {
                Some(s) => parse_date(&s)?,
                None => from,
            };
            if to < from {
                anyhow::bail!("Term end {} is before term start {}", to, from);
            }
            commands::generate::run(
                &input,
                &group,
                layout.into(),
                from,
                to,
                anchor,
                config.as_deref(),
                &output,
            )
        }
        Commands::Show { input, layout, day } => {
            commands::show::run(&input, layout.into(), day.as_deref())
        }
    }
}

fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}'. Expected YYYY-MM-DD", s))
}
