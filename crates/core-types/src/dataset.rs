use crate::structs::{Order, Restaurant, RestaurantId};
use std::collections::HashMap;

/// An immutable snapshot of the two collections every query reads.
///
/// The snapshot is built once by the loader and handed to each query
/// explicitly. A restaurant lookup index is built at construction; when an id
/// appears more than once the first restaurant in input order wins.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    restaurants: Vec<Restaurant>,
    orders: Vec<Order>,
    by_id: HashMap<RestaurantId, usize>,
}

impl Dataset {
    pub fn new(restaurants: Vec<Restaurant>, orders: Vec<Order>) -> Self {
        let mut by_id = HashMap::with_capacity(restaurants.len());
        for (position, restaurant) in restaurants.iter().enumerate() {
            by_id.entry(restaurant.id).or_insert(position);
        }

        Self {
            restaurants,
            orders,
            by_id,
        }
    }

    /// A dataset with no restaurants and no orders. Still fully queryable.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn restaurants(&self) -> &[Restaurant] {
        &self.restaurants
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Resolves a restaurant by id.
    pub fn restaurant(&self, id: RestaurantId) -> Option<&Restaurant> {
        self.by_id.get(&id).map(|&position| &self.restaurants[position])
    }

    pub fn is_empty(&self) -> bool {
        self.restaurants.is_empty() && self.orders.is_empty()
    }
}
