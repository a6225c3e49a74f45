use chrono::NaiveDateTime;
use core_types::{Order, RestaurantId};

/// A read-only view over an order collection.
///
/// Every filter returns borrowed orders in their input order;
/// consumers re-sort when they need a different one.
#[derive(Debug, Clone, Copy)]
pub struct OrderIndex<'a> {
    orders: &'a [Order],
}

impl<'a> OrderIndex<'a> {
    pub fn new(orders: &'a [Order]) -> Self {
        Self { orders }
    }

    /// Keeps the orders for which `predicate` holds.
    pub fn filter<P>(&self, predicate: P) -> Vec<&'a Order>
    where
        P: Fn(&Order) -> bool,
    {
        self.orders.iter().filter(|&order| predicate(order)).collect()
    }

    pub fn for_restaurant(&self, restaurant_id: RestaurantId) -> Vec<&'a Order> {
        self.filter(|order| order.restaurant_id == restaurant_id)
    }

    /// Orders placed within `[start, end]`, both ends inclusive.
    pub fn between(&self, start: NaiveDateTime, end: NaiveDateTime) -> Vec<&'a Order> {
        self.filter(|order| start <= order.order_time && order.order_time <= end)
    }
}
