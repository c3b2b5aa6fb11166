//! The seven report metrics.
//!
//! Every function borrows the catalog and leaves it untouched. Counters are
//! folded into a fresh accumulator; rankings sort a vector of references.

use crate::report::{ModelCount, ModelPick};
use core_types::{EnrichedListing, ModelKey};
use rust_decimal::Decimal;
use std::cmp::Reverse;
use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

pub const MOST_EXPENSIVE_COUNT: usize = 3;
pub const FAIREST_COUNT: usize = 5;

/// Occurrence counts in first-seen key order.
fn tally<K, I>(keys: I) -> Vec<(K, usize)>
where
    K: Eq + Hash + Clone,
    I: IntoIterator<Item = K>,
{
    let (counts, _) = keys.into_iter().fold(
        (Vec::<(K, usize)>::new(), HashMap::<K, usize>::new()),
        |(mut counts, mut positions), key| {
            match positions.get(&key) {
                Some(&position) => counts[position].1 += 1,
                None => {
                    positions.insert(key.clone(), counts.len());
                    counts.push((key, 1));
                }
            }
            (counts, positions)
        },
    );
    counts
}

/// The first `n` listings of a stable sort by `key`. Equal keys keep input order.
fn ranked_by<K, F>(listings: &[EnrichedListing], n: usize, key: F) -> Vec<EnrichedListing>
where
    K: Ord,
    F: Fn(&EnrichedListing) -> K,
{
    let mut view: Vec<&EnrichedListing> = listings.iter().collect();
    view.sort_by_key(|listing| key(listing));
    view.into_iter().take(n).cloned().collect()
}

/// 1. The brand/model with the strictly highest count. On a tie the model
/// seen first in the catalog wins.
pub fn most_common_model(listings: &[EnrichedListing]) -> Option<ModelCount> {
    tally(listings.iter().map(EnrichedListing::model_key))
        .into_iter()
        .reduce(|best, entry| if entry.1 > best.1 { entry } else { best })
        .map(|(model, count)| ModelCount { model, count })
}

/// 2. The most expensive listings, highest price first.
pub fn most_expensive(listings: &[EnrichedListing]) -> Vec<EnrichedListing> {
    ranked_by(listings, MOST_EXPENSIVE_COUNT, |listing| Reverse(listing.price()))
}

/// 3. `max(price_usd) - min(price_usd)`, or `None` for an empty catalog.
pub fn usd_price_spread(listings: &[EnrichedListing]) -> Option<Decimal> {
    listings
        .iter()
        .map(|listing| listing.price_usd.amount())
        .fold(None, |range: Option<(Decimal, Decimal)>, amount| match range {
            None => Some((amount, amount)),
            Some((low, high)) => Some((low.min(amount), high.max(amount))),
        })
        .map(|(low, high)| high - low)
}

/// 4. Number of listings per color.
pub fn color_histogram(listings: &[EnrichedListing]) -> BTreeMap<String, usize> {
    listings.iter().fold(BTreeMap::new(), |mut histogram, listing| {
        *histogram.entry(listing.listing.color.clone()).or_insert(0) += 1;
        histogram
    })
}

/// 5. One listing per brand/model, found by a single pass that swaps in a
/// later listing whenever it is cheaper *or* less driven than the one kept.
///
/// This is not a Pareto selection: the survivor depends on catalog order and
/// can be neither the cheapest nor the least driven of its group.
pub fn best_value_per_model(listings: &[EnrichedListing]) -> Vec<ModelPick> {
    let (order, kept) = listings.iter().fold(
        (Vec::<ModelKey>::new(), HashMap::<ModelKey, &EnrichedListing>::new()),
        |(mut order, mut kept), listing| {
            let model = listing.model_key();
            let replace = kept.get(&model).is_none_or(|current| {
                listing.price() < current.price() || listing.mileage() < current.mileage()
            });
            if replace && kept.insert(model.clone(), listing).is_none() {
                order.push(model);
            }
            (order, kept)
        },
    );

    order
        .into_iter()
        .filter_map(|model| {
            kept.get(&model).map(|listing| ModelPick {
                listing: (*listing).clone(),
                model,
            })
        })
        .collect()
}

/// 6. Listings whose price is closest to their benchmark average.
pub fn fairest_prices(listings: &[EnrichedListing]) -> Vec<EnrichedListing> {
    ranked_by(listings, FAIREST_COUNT, |listing| listing.price_diff_from_average.abs())
}

/// 7. Listings whose mileage is closest to their benchmark average.
pub fn fairest_mileage(listings: &[EnrichedListing]) -> Vec<EnrichedListing> {
    ranked_by(listings, FAIREST_COUNT, |listing| listing.mileage_diff_from_average.abs())
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::{Listing, UsdPrice};
    use rust_decimal_macros::dec;
    use serde_json::{Map, Value};

    /// A listing tagged with `id` in its passthrough fields so tests can tell
    /// equal-looking records apart.
    fn car(id: u64, brand: &str, model: &str, price: Decimal, mileage: Decimal) -> EnrichedListing {
        let mut extra = Map::new();
        extra.insert("id".to_string(), Value::from(id));
        EnrichedListing {
            listing: Listing {
                brand: brand.into(),
                model: model.into(),
                year: 2020,
                price,
                mileage,
                color: "white".into(),
                extra,
            },
            price_diff_from_average: Decimal::ZERO,
            mileage_diff_from_average: Decimal::ZERO,
            price_usd: UsdPrice::new(price),
        }
    }

    fn ids(listings: &[EnrichedListing]) -> Vec<u64> {
        listings
            .iter()
            .map(|l| l.listing.extra["id"].as_u64().unwrap())
            .collect()
    }

    #[test]
    fn most_common_model_counts_brand_and_model() {
        let cars = vec![
            car(1, "BMW", "X1", dec!(1), dec!(1)),
            car(2, "BMW", "X1", dec!(1), dec!(1)),
            car(3, "Audi", "A4", dec!(1), dec!(1)),
        ];

        let top = most_common_model(&cars).unwrap();
        assert_eq!(top.model.to_string(), "BMW X1");
        assert_eq!(top.count, 2);
    }

    #[test]
    fn most_common_model_tie_goes_to_first_seen() {
        let cars = vec![
            car(1, "Audi", "A4", dec!(1), dec!(1)),
            car(2, "BMW", "X1", dec!(1), dec!(1)),
            car(3, "BMW", "X1", dec!(1), dec!(1)),
            car(4, "Audi", "A4", dec!(1), dec!(1)),
        ];

        assert_eq!(most_common_model(&cars).unwrap().model.as_str(), "Audi A4");
    }

    #[test]
    fn most_expensive_keeps_input_order_among_equal_prices() {
        let cars: Vec<_> = [100, 500, 300, 500, 200]
            .into_iter()
            .enumerate()
            .map(|(i, p)| car(i as u64, "Kia", "Rio", Decimal::from(p), dec!(1)))
            .collect();

        let top = most_expensive(&cars);
        assert_eq!(ids(&top), [1, 3, 2]);
        assert_eq!(top[2].price(), dec!(300));
    }

    #[test]
    fn most_expensive_returns_fewer_for_small_catalogs() {
        let cars = vec![car(1, "Kia", "Rio", dec!(5), dec!(1))];
        assert_eq!(most_expensive(&cars).len(), 1);
    }

    #[test]
    fn usd_spread_uses_parsed_decimal_text() {
        let cars: Vec<_> = ["10.00", "25.50", "5.00"]
            .into_iter()
            .enumerate()
            .map(|(i, usd)| {
                let mut c = car(i as u64, "Kia", "Rio", dec!(1), dec!(1));
                c.price_usd = usd.parse().unwrap();
                c
            })
            .collect();

        assert_eq!(usd_price_spread(&cars), Some(dec!(20.50)));
    }

    #[test]
    fn color_histogram_counts_every_color() {
        let mut cars = vec![
            car(1, "Kia", "Rio", dec!(1), dec!(1)),
            car(2, "Kia", "Rio", dec!(1), dec!(1)),
            car(3, "Kia", "Rio", dec!(1), dec!(1)),
        ];
        cars[1].listing.color = "black".into();

        let histogram = color_histogram(&cars);
        assert_eq!(histogram.len(), 2);
        assert_eq!(histogram["white"], 2);
        assert_eq!(histogram["black"], 1);
    }

    #[test]
    fn best_value_can_keep_a_listing_that_is_neither_cheapest_nor_least_driven() {
        let cars = vec![
            car(1, "BMW", "X1", dec!(100), dec!(100)),
            car(2, "BMW", "X1", dec!(50), dec!(300)),
            car(3, "BMW", "X1", dec!(80), dec!(200)),
            car(4, "Audi", "A4", dec!(10), dec!(10)),
            car(5, "Audi", "A4", dec!(20), dec!(20)),
        ];

        let picks = best_value_per_model(&cars);
        let models: Vec<&str> = picks.iter().map(|p| p.model.as_str()).collect();
        assert_eq!(models, ["BMW X1", "Audi A4"]);
        // Car 3 replaced car 2 on mileage alone; car 1 was less driven, car 2 cheaper.
        assert_eq!(ids(&[picks[0].listing.clone()]), [3]);
        assert_eq!(ids(&[picks[1].listing.clone()]), [4]);
    }

    #[test]
    fn fairest_prices_rank_by_absolute_difference() {
        let cars: Vec<_> = [-50, 5, 30, -1, 100, 2]
            .into_iter()
            .enumerate()
            .map(|(i, diff)| {
                let mut c = car(i as u64, "Kia", "Rio", dec!(1), dec!(1));
                c.price_diff_from_average = Decimal::from(diff);
                c
            })
            .collect();

        assert_eq!(ids(&fairest_prices(&cars)), [3, 5, 1, 2, 0]);
    }

    #[test]
    fn fairest_mileage_ranks_independently_of_price() {
        let cars: Vec<_> = [(7, 0), (3, 900), (0, 4), (1, 2)]
            .into_iter()
            .enumerate()
            .map(|(i, (price_diff, mileage_diff))| {
                let mut c = car(i as u64, "Kia", "Rio", dec!(1), dec!(1));
                c.price_diff_from_average = Decimal::from(price_diff);
                c.mileage_diff_from_average = Decimal::from(mileage_diff);
                c
            })
            .collect();

        assert_eq!(ids(&fairest_mileage(&cars)), [0, 3, 2, 1]);
        assert_eq!(ids(&fairest_prices(&cars)), [2, 3, 1, 0]);
    }

    #[test]
    fn rankings_do_not_reorder_the_catalog() {
        let cars: Vec<_> = [3, 1, 2]
            .into_iter()
            .map(|p| car(p, "Kia", "Rio", Decimal::from(p), dec!(1)))
            .collect();
        let before = cars.clone();

        most_expensive(&cars);
        fairest_prices(&cars);
        assert_eq!(cars, before);
    }

    #[test]
    fn empty_catalog_yields_empty_metrics() {
        assert_eq!(most_common_model(&[]), None);
        assert!(most_expensive(&[]).is_empty());
        assert_eq!(usd_price_spread(&[]), None);
        assert!(color_histogram(&[]).is_empty());
        assert!(best_value_per_model(&[]).is_empty());
        assert!(fairest_prices(&[]).is_empty());
        assert!(fairest_mileage(&[]).is_empty());
    }
}
