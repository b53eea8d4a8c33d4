//! Plain-text rendering of cards and profiles for the terminal

use crate::detail::{PokemonProfile, StatBlock};
use pokedex_common::DisplayItem;

const BAR_WIDTH: u32 = 20;

/// One line per card: `#001 Bulbasaur  <picture>`
pub fn format_cards(items: &[DisplayItem]) -> String {
    let mut output = String::new();
    for item in items {
        output.push_str(&format!("#{} {:<14} {}\n", item.id, item.name, item.picture));
    }
    output
}

/// Render a stat bar of fixed width from a percentage
fn stat_bar(value: u32) -> String {
    let filled = StatBlock::bar_percent(value) * BAR_WIDTH / 100;
    format!(
        "{}{}",
        "█".repeat(filled as usize),
        "░".repeat((BAR_WIDTH - filled) as usize)
    )
}

/// Full detail view
pub fn format_profile(profile: &PokemonProfile) -> String {
    let mut output = String::new();

    output.push_str(&format!("{}  #{}\n", profile.name, profile.number));
    if !profile.picture.is_empty() {
        output.push_str(&format!("{}\n", profile.picture));
    }

    let types: Vec<&str> = profile.types.iter().map(|t| t.cap_name.as_str()).collect();
    output.push_str(&format!("Type: {}\n\n", types.join(" / ")));

    output.push_str("About\n");
    output.push_str(&format!("  Weight: {} Kg\n", profile.weight_kg));
    output.push_str(&format!("  Height: {} m\n", profile.height_m));
    output.push_str(&format!("  Moves:  {}\n", profile.abilities.join(", ")));

    if !profile.description.is_empty() {
        output.push_str(&format!("\n{}\n", profile.description));
    }

    output.push_str("\nBase Stats\n");
    for (label, value) in profile.stats.rows() {
        output.push_str(&format!("  {:<4} {:>3} {}\n", label, value, stat_bar(value)));
    }

    output
}
