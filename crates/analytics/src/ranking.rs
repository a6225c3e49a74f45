use crate::index::OrderIndex;
use crate::report::{average_order_value, RestaurantStat};
use crate::window::DateWindow;
use core_types::{Dataset, RestaurantId};
use rust_decimal::Decimal;
use std::collections::HashMap;

pub const UNKNOWN_RESTAURANT: &str = "Unknown Restaurant";
pub const UNKNOWN_LOCATION: &str = "Unknown Location";
pub const UNKNOWN_CUISINE: &str = "Unknown Cuisine";

/// Ranks restaurants by the revenue they took inside a window.
#[derive(Debug, Default, Clone, Copy)]
pub struct TopRestaurantRanker;

struct RevenueGroup {
    restaurant_id: RestaurantId,
    total_orders: usize,
    total_revenue: Decimal,
}

impl TopRestaurantRanker {
    pub fn new() -> Self {
        Self
    }

    /// The `n` highest-revenue restaurants in `window`, best first.
    ///
    /// Orders are matched on their full timestamp, from `start` 00:00 to
    /// `end` 00:00, so only midnight orders count on the `end` day. Equal revenues keep the order in which each
    /// restaurant was first seen in the order collection.
    pub fn top_n(&self, dataset: &Dataset, window: &DateWindow, n: usize) -> Vec<RestaurantStat> {
        let (from, to) = window.instant_bounds();
        let matched = OrderIndex::new(dataset.orders()).between(from, to);

        let mut groups: Vec<RevenueGroup> = Vec::new();
        let mut positions: HashMap<RestaurantId, usize> = HashMap::new();
        for order in matched {
            let position = *positions.entry(order.restaurant_id).or_insert_with(|| {
                groups.push(RevenueGroup {
                    restaurant_id: order.restaurant_id,
                    total_orders: 0,
                    total_revenue: Decimal::ZERO,
                });
                groups.len() - 1
            });
            let group = &mut groups[position];
            group.total_orders += 1;
            group.total_revenue += order.order_amount;
        }

        // Stable, so ties stay in first-seen order.
        groups.sort_by(|a, b| b.total_revenue.cmp(&a.total_revenue));
        groups.truncate(n);

        groups
            .into_iter()
            .map(|group| self.to_stat(dataset, group))
            .collect()
    }

    fn to_stat(&self, dataset: &Dataset, group: RevenueGroup) -> RestaurantStat {
        let restaurant = dataset.restaurant(group.restaurant_id);
        let (name, location, cuisine) = match restaurant {
            Some(r) => (r.name.clone(), r.location.clone(), r.cuisine.clone()),
            None => {
                tracing::debug!(restaurant_id = group.restaurant_id, "Ranking unresolved restaurant.");
                (
                    UNKNOWN_RESTAURANT.to_string(),
                    UNKNOWN_LOCATION.to_string(),
                    UNKNOWN_CUISINE.to_string(),
                )
            }
        };

        RestaurantStat {
            id: group.restaurant_id,
            name,
            location,
            cuisine,
            total_orders: group.total_orders,
            total_revenue: group.total_revenue,
            average_order_value: average_order_value(group.total_revenue, group.total_orders),
        }
    }
}
