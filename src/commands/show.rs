use std::path::Path;

use anyhow::Result;
use semcal_core::lesson::weekday_by_name;
use semcal_core::semester::parse_semester_heading;
use semcal_core::{extract, TableLayout};

use crate::commands::generate::load_table;
use crate::render;

pub fn run(input: &Path, layout: TableLayout, day: Option<&str>) -> Result<()> {
    let table = load_table(input)?;
    let template = extract(&table, layout)?;

    if let Some(heading) = &table.semester {
        let info = parse_semester_heading(heading);
        if info.week_name.is_empty() {
            println!("{}\n", info.title);
        } else {
            println!("{} ({})\n", info.title, info.week_name);
        }
    }

    match day {
        Some(name) => {
            let day = weekday_by_name(name)
                .ok_or_else(|| anyhow::anyhow!("Unknown day name '{}'", name))?;
            print!("{}", render::day_report(&template, day));
        }
        None => {
            print!("{}", render::week_report(&template));
        }
    }
    Ok(())
}
