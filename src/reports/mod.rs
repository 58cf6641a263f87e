// ===== passforge/src/reports/mod.rs =====
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use console::style;
use strum::IntoEnumIterator;

use passforge::api::StrengthSummary;
use passforge::charset::CharClass;
use passforge::config::GeneratorConfig;
use passforge::strength::{self, MeterColor, StrengthScore, MAX_SCORE};

/// ANSI-256 values for the meter tiers.
fn tier_ansi(color: MeterColor) -> u8 {
    match color {
        MeterColor::Red => 196,
        MeterColor::Orange => 208,
        MeterColor::Yellow => 220,
        MeterColor::EmeraldLight => 42,
        MeterColor::EmeraldDark => 28,
    }
}

/// One-line meter: colored fill bar, label, numeric score.
pub fn meter_line(score: &StrengthScore) -> String {
    let filled = score.value as usize;
    let empty = MAX_SCORE as usize - filled;
    let bar = format!("{}{}", "█".repeat(filled), "░".repeat(empty));
    format!(
        "{} {} ({}/{})",
        style(bar).color256(tier_ansi(score.color)),
        style(score.label.to_string()).bold(),
        score.value,
        MAX_SCORE
    )
}

pub fn print_strength_meter(score: &StrengthScore) {
    println!("{}", meter_line(score));
}

/// Score breakdown: one row per class, the two length bonuses, then the
/// totals and the advisory pool/entropy numbers.
pub fn print_strength_report(config: &GeneratorConfig, summary: &StrengthSummary) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Component").add_attribute(Attribute::Bold),
        Cell::new("State"),
        Cell::new("Points"),
    ]);

    for i in 1..=2 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for class in CharClass::iter() {
        let on = config.includes(class);
        table.add_row(vec![
            Cell::new(class.describe()),
            Cell::new(if on { "on" } else { "off" }),
            points_cell(on),
        ]);
    }

    table.add_row(vec![
        Cell::new(format!("Length >= {}", strength::LONG_LENGTH_THRESHOLD)),
        Cell::new(format!("{}", config.length)),
        points_cell(config.length >= strength::LONG_LENGTH_THRESHOLD),
    ]);
    table.add_row(vec![
        Cell::new(format!("Length >= {}", strength::VERY_LONG_LENGTH_THRESHOLD)),
        Cell::new(format!("{}", config.length)),
        points_cell(config.length >= strength::VERY_LONG_LENGTH_THRESHOLD),
    ]);

    let score = &summary.strength;
    table.add_row(vec![
        Cell::new("Score").add_attribute(Attribute::Bold),
        Cell::new(""),
        Cell::new(format!("{}/{}", score.value, MAX_SCORE)).fg(Color::Cyan),
    ]);
    table.add_row(vec![
        Cell::new("Label").add_attribute(Attribute::Bold),
        Cell::new(""),
        Cell::new(score.label.to_string())
            .fg(Color::AnsiValue(tier_ansi(score.color)))
            .add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![
        Cell::new("Pool size"),
        Cell::new(""),
        Cell::new(format!("{}", summary.pool_size)),
    ]);
    table.add_row(vec![
        Cell::new("Entropy estimate"),
        Cell::new(""),
        Cell::new(format!("~{:.1} bits", summary.entropy_bits)),
    ]);

    println!("\n{}", table);
    print_strength_meter(score);
}

fn points_cell(awarded: bool) -> Cell {
    if awarded {
        Cell::new("+1").fg(Color::Green)
    } else {
        Cell::new("0").fg(Color::DarkGrey)
    }
}
