use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};
use itertools::Itertools;

use crate::{
    core::{tariff::TariffTable, window::StartWindow},
    quantity::rate::KilowattHourRate,
};

#[must_use]
pub fn build_windows_table(windows: &[StartWindow]) -> Table {
    let cheapest = windows.first().map(|window| window.cost);

    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table.set_header(vec!["Start", "End", "Cost"]);
    for window in windows {
        table.add_row(vec![
            Cell::new(format_hour(window.start_hour)),
            Cell::new(format_hour(window.end_hour)).add_attribute(Attribute::Dim),
            Cell::new(window.cost).set_alignment(CellAlignment::Right).fg(
                if Some(window.cost) == cheapest { Color::Green } else { Color::DarkYellow },
            ),
        ]);
    }
    table
}

#[must_use]
pub fn build_tariffs_table(tariffs: &TariffTable) -> Table {
    let rates = tariffs.rates().collect_vec();
    let min_rate = rates.iter().copied().min().unwrap_or(KilowattHourRate::ZERO);
    let max_rate = rates.iter().copied().max().unwrap_or(KilowattHourRate::ZERO);

    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table.set_header(vec!["Start", "End", "Rate"]);
    for (hour, rate) in rates.into_iter().enumerate() {
        table.add_row(vec![
            Cell::new(format_hour(hour)),
            Cell::new(format_hour(hour + 1)).add_attribute(Attribute::Dim),
            Cell::new(rate).set_alignment(CellAlignment::Right).fg(if rate <= min_rate {
                Color::Green
            } else if rate >= max_rate {
                Color::Red
            } else {
                Color::Reset
            }),
        ]);
    }
    table
}

fn format_hour(hour: usize) -> String {
    format!("{:02}:00", hour % 24)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{core::window::WindowFinder, quantity::power::Kilowatts};

    #[test]
    fn test_format_hour() {
        assert_eq!(format_hour(0), "00:00");
        assert_eq!(format_hour(9), "09:00");
        assert_eq!(format_hour(24), "00:00");
    }

    #[test]
    fn test_windows_table() {
        let tariffs = TariffTable::default();
        let windows = WindowFinder::builder()
            .tariffs(&tariffs)
            .power(Kilowatts::from(1.5))
            .duration_hours(2)
            .build()
            .find();
        let rendered = build_windows_table(&windows).to_string();
        assert!(rendered.contains("06:00"), "{rendered}");
        assert!(rendered.contains("₹15.75"), "{rendered}");
    }

    #[test]
    fn test_tariffs_table() {
        let rendered = build_tariffs_table(&TariffTable::default()).to_string();
        assert!(rendered.contains("23:00"), "{rendered}");
        assert!(rendered.contains("₹7.50/kWh"), "{rendered}");
    }
}
