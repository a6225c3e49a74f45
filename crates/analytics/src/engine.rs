use crate::directory::{DirectoryQuery, RestaurantDirectory};
use crate::filter::{OrderCriteria, OrderFilterEngine};
use crate::index::OrderIndex;
use crate::ranking::TopRestaurantRanker;
use crate::report::{RestaurantStat, TrendReport};
use crate::trends::OrderTrendAnalyzer;
use crate::window::DateWindow;
use core_types::{Dataset, EnrichedOrder, PagedResult, Restaurant, RestaurantId};

/// Page sizes and the default leaderboard length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryLimits {
    pub restaurants_per_page: usize,
    pub orders_per_page: usize,
    pub top_restaurants: usize,
}

impl Default for QueryLimits {
    fn default() -> Self {
        Self {
            restaurants_per_page: 10,
            orders_per_page: 20,
            top_restaurants: 3,
        }
    }
}

/// A stateless facade over the query components.
///
/// Every call takes the dataset snapshot explicitly; the engine itself only
/// carries the configured limits and is cheap to copy into request handlers.
#[derive(Debug, Default, Clone, Copy)]
pub struct AnalyticsEngine {
    limits: QueryLimits,
}

impl AnalyticsEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(limits: QueryLimits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> QueryLimits {
        self.limits
    }

    /// Searches, sorts and pages the restaurant directory.
    pub fn list_restaurants(&self, dataset: &Dataset, query: &DirectoryQuery) -> PagedResult<Restaurant> {
        let page = RestaurantDirectory::new().list(
            dataset.restaurants(),
            query,
            self.limits.restaurants_per_page,
        );
        tracing::debug!(
            search = ?query.search,
            page = page.current_page,
            total = page.total,
            "Listed restaurants."
        );
        page
    }

    /// Per-day order metrics for one restaurant.
    ///
    /// An id with no orders (or no directory entry) still yields a full,
    /// zeroed series.
    pub fn daily_trends(
        &self,
        dataset: &Dataset,
        restaurant_id: RestaurantId,
        window: &DateWindow,
    ) -> TrendReport {
        let daily_data = OrderTrendAnalyzer::new().daily_trends(
            OrderIndex::new(dataset.orders()),
            restaurant_id,
            window,
        );
        tracing::debug!(
            restaurant_id,
            days = daily_data.len(),
            "Computed daily order trends."
        );

        TrendReport {
            restaurant_id,
            start_date: window.start(),
            end_date: window.end(),
            daily_data,
        }
    }

    /// The revenue leaderboard. `limit` defaults to the configured length.
    pub fn top_restaurants(
        &self,
        dataset: &Dataset,
        window: &DateWindow,
        limit: Option<usize>,
    ) -> Vec<RestaurantStat> {
        let n = limit.unwrap_or(self.limits.top_restaurants);
        let ranked = TopRestaurantRanker::new().top_n(dataset, window, n);
        tracing::debug!(n, returned = ranked.len(), "Ranked top restaurants.");
        ranked
    }

    /// Filters and pages orders, newest first, with restaurants embedded.
    pub fn filtered_orders(
        &self,
        dataset: &Dataset,
        criteria: &OrderCriteria,
        page: usize,
    ) -> PagedResult<EnrichedOrder> {
        let result = OrderFilterEngine::new().search(
            dataset,
            criteria,
            page,
            self.limits.orders_per_page,
        );
        tracing::debug!(
            ?criteria,
            page = result.current_page,
            total = result.total,
            "Filtered orders."
        );
        result
    }
}
