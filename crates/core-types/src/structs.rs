use chrono::{NaiveDate, NaiveDateTime, Timelike};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub type RestaurantId = u64;
pub type OrderId = u64;

/// A single entry in the restaurant directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: RestaurantId,
    pub name: String,
    pub location: String,
    pub cuisine: String,
}

/// A completed order placed at a restaurant.
///
/// `restaurant_id` is not guaranteed to resolve against the directory.
/// `order_time` is a naive wall-clock time; every day and hour bucket is
/// derived from it as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub restaurant_id: RestaurantId,
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub order_amount: Decimal,
    #[serde(with = "crate::time::timestamp")]
    pub order_time: NaiveDateTime,
}

impl Order {
    /// The calendar day this order falls on.
    pub fn day(&self) -> NaiveDate {
        self.order_time.date()
    }

    /// The hour of day (0-23) this order was placed in.
    pub fn hour(&self) -> u32 {
        self.order_time.hour()
    }
}

/// An order together with the restaurant it belongs to, if that restaurant
/// exists in the directory.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichedOrder {
    #[serde(flatten)]
    pub order: Order,
    pub restaurant: Option<Restaurant>,
}
