use crate::index::OrderIndex;
use crate::report::{average_order_value, DailyMetric};
use crate::window::DateWindow;
use chrono::NaiveDate;
use core_types::{Order, RestaurantId};
use rust_decimal::Decimal;
use std::collections::HashMap;

/// Builds the per-day order series for a single restaurant.
#[derive(Debug, Default, Clone, Copy)]
pub struct OrderTrendAnalyzer;

/// Running totals for one calendar day.
#[derive(Debug, Default)]
struct DayBucket {
    orders_count: usize,
    revenue: Decimal,
    hour_counts: [usize; 24],
}

impl DayBucket {
    fn add(&mut self, order: &Order) {
        self.orders_count += 1;
        self.revenue += order.order_amount;
        self.hour_counts[order.hour() as usize] += 1;
    }

    /// The busiest hour. Ties go to the earliest hour.
    fn peak_hour(&self) -> Option<u32> {
        let mut peak: Option<(u32, usize)> = None;
        for (hour, &count) in self.hour_counts.iter().enumerate() {
            if count == 0 {
                continue;
            }
            if peak.is_none_or(|(_, best)| count > best) {
                peak = Some((hour as u32, count));
            }
        }
        peak.map(|(hour, _)| hour)
    }

    fn into_metric(self, date: NaiveDate) -> DailyMetric {
        DailyMetric {
            date,
            orders_count: self.orders_count,
            revenue: self.revenue,
            average_order_value: average_order_value(self.revenue, self.orders_count),
            peak_hour: self.peak_hour(),
        }
    }
}

impl OrderTrendAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// One `DailyMetric` per calendar day of `window`, oldest first.
    ///
    /// Days without orders are present with zeroed metrics. An order belongs
    /// to a day by the date part of its `order_time`.
    pub fn daily_trends(
        &self,
        orders: OrderIndex<'_>,
        restaurant_id: RestaurantId,
        window: &DateWindow,
    ) -> Vec<DailyMetric> {
        let mut buckets: HashMap<NaiveDate, DayBucket> = HashMap::new();
        for order in orders.for_restaurant(restaurant_id) {
            if !window.contains_day(order.day()) {
                continue;
            }
            buckets.entry(order.day()).or_default().add(order);
        }

        window
            .days()
            .map(|day| match buckets.remove(&day) {
                Some(bucket) => bucket.into_metric(day),
                None => DailyMetric::empty(day),
            })
            .collect()
    }
}
