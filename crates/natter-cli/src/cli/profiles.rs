//! Assistant profile listing.

use anyhow::Result;
use comfy_table::{Cell, Color, ContentArrangement, Table, presets};
use console::style;

use natter_types::config::NatterConfig;

/// Print the configured assistant profiles as a table (or JSON).
pub fn list_profiles(config: &NatterConfig, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&config.profiles)?);
        return Ok(());
    }

    if config.profiles.is_empty() {
        println!();
        println!(
            "  {} No profiles configured. Add one to {}",
            style("i").blue().bold(),
            style("~/.natter/config.toml").yellow()
        );
        println!();
        return Ok(());
    }

    let default_name = config.select_profile(None).map(|p| p.name.clone());

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Name").fg(Color::White),
        Cell::new("Label").fg(Color::White),
        Cell::new("Endpoint").fg(Color::White),
        Cell::new("Default").fg(Color::White),
    ]);

    for profile in &config.profiles {
        let default_cell = if Some(&profile.name) == default_name.as_ref() {
            Cell::new("●").fg(Color::Green)
        } else {
            Cell::new("")
        };

        table.add_row(vec![
            Cell::new(&profile.name).fg(Color::Cyan),
            Cell::new(&profile.label).fg(Color::White),
            Cell::new(&profile.endpoint).fg(Color::DarkGrey),
            default_cell,
        ]);
    }

    println!();
    println!("{table}");
    println!();
    println!(
        "  {} profile{}",
        style(config.profiles.len()).bold(),
        if config.profiles.len() == 1 { "" } else { "s" }
    );
    println!();

    Ok(())
}
