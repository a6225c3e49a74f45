use chrono::NaiveDate;
use core_types::RestaurantId;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

/// Order metrics for one restaurant on one calendar day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyMetric {
    pub date: NaiveDate,
    pub orders_count: usize,
    #[serde(with = "rust_decimal::serde::float")]
    pub revenue: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub average_order_value: Decimal,
    /// `None` on days without orders.
    pub peak_hour: Option<u32>,
}

impl DailyMetric {
    /// A day with no orders: zeroed counters and no peak hour.
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            orders_count: 0,
            revenue: Decimal::ZERO,
            average_order_value: Decimal::ZERO,
            peak_hour: None,
        }
    }
}

/// The per-day series for one restaurant over a window.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendReport {
    pub restaurant_id: RestaurantId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub daily_data: Vec<DailyMetric>,
}

/// Aggregated totals for one restaurant in the revenue leaderboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RestaurantStat {
    pub id: RestaurantId,
    pub name: String,
    pub location: String,
    pub cuisine: String,
    pub total_orders: usize,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_revenue: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub average_order_value: Decimal,
}

/// `revenue / count` to two decimal places, half away from zero. Zero for
/// an empty bucket.
pub(crate) fn average_order_value(revenue: Decimal, count: usize) -> Decimal {
    if count == 0 {
        return Decimal::ZERO;
    }
    (revenue / Decimal::from(count))
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
