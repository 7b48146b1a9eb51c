use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use semcal_core::{extract, generate_ics, IcsOptions, RawTable, TableLayout};

use crate::config::Config;

#[allow(clippy::too_many_arguments)]
pub fn run(
    input: &Path,
    group: &str,
    layout: TableLayout,
    from: NaiveDate,
    to: NaiveDate,
    anchor: NaiveDate,
    config_path: Option<&Path>,
    output: &Path,
) -> Result<()> {
    let config = Config::load(config_path)?;
    let table = load_table(input)?;

    let template = extract(&table, layout)?;
    if template.is_empty() {
        anyhow::bail!(
            "No lessons extracted from {}; is the layout right?",
            input.display()
        );
    }

    let mut options = IcsOptions::new(Utc::now());
    options.exclude_titles = config.exclude_titles;
    options.placeholder_summary = config.placeholder_summary;
    options.prod_id = config.prod_id;

    let ics = generate_ics(&template, from, to, anchor, group, &options);
    fs::write(output, &ics)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    let events = ics.lines().filter(|l| *l == "BEGIN:VEVENT").count();
    println!("Wrote {} ({} events)", output.display(), events);
    Ok(())
}

pub(crate) fn load_table(input: &Path) -> Result<RawTable> {
    let raw = fs::read_to_string(input)
        .with_context(|| format!("Failed to read table dump {}", input.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse table dump {}", input.display()))
}
