use analytics::MarketReport;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};
use rust_decimal::Decimal;
use std::fmt::Write;

const NOT_AVAILABLE: &str = "n/a (no listings)";

/// Prints the report to stdout, metrics in their fixed order.
pub fn print_report(report: &MarketReport) {
    print!("{}", render_report(report));
}

pub fn render_report(report: &MarketReport) -> String {
    let mut out = String::new();

    // 1
    match &report.most_common_model {
        Some(top) => {
            let _ = writeln!(out, "Most common model: {} ({} listings)", top.model, top.count);
        }
        None => {
            let _ = writeln!(out, "Most common model: {}", NOT_AVAILABLE);
        }
    }

    // 2
    let mut table = new_table(&["Model", "Year", "Price"]);
    for car in &report.most_expensive {
        table.add_row(vec![
            Cell::new(car.model_key()),
            Cell::new(car.listing.year),
            amount(car.price()),
        ]);
    }
    push_section(&mut out, "Most expensive listings", table);

    // 3
    let spread = report
        .usd_price_spread
        .map(|spread| format!("{} USD", spread.round_dp(2)))
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());
    let _ = writeln!(out, "\nUSD price spread: {}", spread);

    // 4
    let mut table = new_table(&["Color", "Listings"]);
    for (color, count) in &report.color_histogram {
        table.add_row(vec![Cell::new(color), Cell::new(count).set_alignment(CellAlignment::Right)]);
    }
    push_section(&mut out, "Listings per color", table);

    // 5
    let mut table = new_table(&["Model", "Price", "Mileage"]);
    for pick in &report.best_value_per_model {
        table.add_row(vec![
            Cell::new(&pick.model),
            amount(pick.listing.price()),
            amount(pick.listing.mileage()),
        ]);
    }
    push_section(&mut out, "Best offer per model (cheaper or less driven)", table);

    // 6
    let mut table = new_table(&["Model", "Price", "Diff from average"]);
    for car in &report.fairest_prices {
        table.add_row(vec![
            Cell::new(car.model_key()),
            amount(car.price()),
            amount(car.price_diff_from_average),
        ]);
    }
    push_section(&mut out, "Fairest prices", table);

    // 7
    let mut table = new_table(&["Model", "Mileage", "Diff from average"]);
    for car in &report.fairest_mileage {
        table.add_row(vec![
            Cell::new(car.model_key()),
            amount(car.mileage()),
            amount(car.mileage_diff_from_average),
        ]);
    }
    push_section(&mut out, "Fairest mileage", table);

    out
}

fn new_table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(headers.to_vec());
    table
}

fn amount(value: Decimal) -> Cell {
    Cell::new(value.normalize()).set_alignment(CellAlignment::Right)
}

fn push_section(out: &mut String, title: &str, table: Table) {
    let _ = writeln!(out, "\n{}:", title);
    if table.row_count() == 0 {
        let _ = writeln!(out, "{}", NOT_AVAILABLE);
    } else {
        let _ = writeln!(out, "{}", table);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use analytics::AnalyticsEngine;
    use core_types::{EnrichedListing, Listing, UsdPrice};
    use rust_decimal_macros::dec;
    use serde_json::Map;

    fn car(brand: &str, model: &str, color: &str, price: Decimal) -> EnrichedListing {
        EnrichedListing {
            listing: Listing {
                brand: brand.into(),
                model: model.into(),
                year: 2020,
                price,
                mileage: dec!(42000),
                color: color.into(),
                extra: Map::new(),
            },
            price_diff_from_average: price,
            mileage_diff_from_average: dec!(42000),
            price_usd: UsdPrice::new(price / dec!(10)),
        }
    }

    #[test]
    fn sections_appear_in_metric_order() {
        let report = AnalyticsEngine::new().calculate(&[
            car("BMW", "X1", "white", dec!(300)),
            car("BMW", "X1", "black", dec!(200)),
            car("Audi", "A4", "white", dec!(100)),
        ]);
        let text = render_report(&report);

        let titles = [
            "Most common model: BMW X1 (2 listings)",
            "Most expensive listings:",
            "USD price spread: 20.00 USD",
            "Listings per color:",
            "Best offer per model",
            "Fairest prices:",
            "Fairest mileage:",
        ];
        let positions: Vec<usize> = titles.iter().map(|t| text.find(t).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{}", text);
    }

    #[test]
    fn empty_report_says_not_available() {
        let text = render_report(&AnalyticsEngine::new().calculate(&[]));

        assert!(text.starts_with("Most common model: n/a"));
        assert_eq!(text.matches(NOT_AVAILABLE).count(), 7);
    }
}
