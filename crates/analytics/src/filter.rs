use crate::index::OrderIndex;
use chrono::NaiveDateTime;
use core_types::{Dataset, EnrichedOrder, Order, PagedResult, RestaurantId};
use rust_decimal::Decimal;

/// Optional, AND-combined conditions for the order search.
///
/// Unset fields impose no constraint. The hour range is active as soon as
/// either bound is set; the missing bound defaults to 0 or 23.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderCriteria {
    pub restaurant_id: Option<RestaurantId>,
    pub start_date: Option<NaiveDateTime>,
    pub end_date: Option<NaiveDateTime>,
    pub min_amount: Option<Decimal>,
    pub max_amount: Option<Decimal>,
    pub start_hour: Option<u32>,
    pub end_hour: Option<u32>,
}

impl OrderCriteria {
    /// The inclusive hour-of-day range, if either bound was given.
    pub fn hour_range(&self) -> Option<(u32, u32)> {
        if self.start_hour.is_none() && self.end_hour.is_none() {
            return None;
        }
        Some((self.start_hour.unwrap_or(0), self.end_hour.unwrap_or(23)))
    }

    pub fn matches(&self, order: &Order) -> bool {
        if self.restaurant_id.is_some_and(|id| order.restaurant_id != id) {
            return false;
        }
        if self.start_date.is_some_and(|start| order.order_time < start) {
            return false;
        }
        if self.end_date.is_some_and(|end| order.order_time > end) {
            return false;
        }
        if self.min_amount.is_some_and(|min| order.order_amount < min) {
            return false;
        }
        if self.max_amount.is_some_and(|max| order.order_amount > max) {
            return false;
        }
        if let Some((from, to)) = self.hour_range() {
            let hour = order.hour();
            if hour < from || hour > to {
                return false;
            }
        }
        true
    }
}

/// Filters, orders and pages the order collection, joining each hit with
/// its restaurant.
#[derive(Debug, Default, Clone, Copy)]
pub struct OrderFilterEngine;

impl OrderFilterEngine {
    pub fn new() -> Self {
        Self
    }

    /// Newest orders first; orders with the same timestamp keep their input
    /// order. Only the returned page is enriched.
    pub fn search(
        &self,
        dataset: &Dataset,
        criteria: &OrderCriteria,
        page: usize,
        per_page: usize,
    ) -> PagedResult<EnrichedOrder> {
        let mut matched = OrderIndex::new(dataset.orders()).filter(|order| criteria.matches(order));
        matched.sort_by(|a, b| b.order_time.cmp(&a.order_time));

        PagedResult::paginate(matched, page, per_page).map(|order| EnrichedOrder {
            order: order.clone(),
            restaurant: dataset.restaurant(order.restaurant_id).cloned(),
        })
    }
}
