use crate::params::{
    self, FilteredOrdersParams, RestaurantsParams, TopRestaurantsParams, TrendParams,
};
use crate::{error::AppError, AppState};
use analytics::{RestaurantStat, TrendReport};
use axum::{
    extract::{Path, Query, State},
    Json,
};
use core_types::{EnrichedOrder, PagedResult, Restaurant};
use std::sync::Arc;

/// # GET /api/v1/restaurants
/// Searches, sorts and pages the restaurant directory.
pub async fn list_restaurants(
    State(state): State<Arc<AppState>>,
    Query(params): Query<RestaurantsParams>,
) -> Result<Json<PagedResult<Restaurant>>, AppError> {
    let query = params.into_query()?;
    Ok(Json(state.engine.list_restaurants(&state.dataset, &query)))
}

/// # GET /api/v1/restaurants/:restaurant_id/order-trends
pub async fn order_trends(
    State(state): State<Arc<AppState>>,
    Path(restaurant_id): Path<String>,
    Query(params): Query<TrendParams>,
) -> Result<Json<TrendReport>, AppError> {
    let restaurant_id = params::restaurant_id(&restaurant_id)?;
    let window = params.window()?;
    Ok(Json(state.engine.daily_trends(&state.dataset, restaurant_id, &window)))
}

/// # GET /api/v1/top-restaurants
pub async fn top_restaurants(
    State(state): State<Arc<AppState>>,
    Query(params): Query<TopRestaurantsParams>,
) -> Result<Json<Vec<RestaurantStat>>, AppError> {
    let window = params.window()?;
    let limit = params.limit()?;
    Ok(Json(state.engine.top_restaurants(&state.dataset, &window, limit)))
}

/// # GET /api/v1/filtered-orders
pub async fn filtered_orders(
    State(state): State<Arc<AppState>>,
    Query(params): Query<FilteredOrdersParams>,
) -> Result<Json<PagedResult<EnrichedOrder>>, AppError> {
    let criteria = params.criteria()?;
    let page = params.page()?;
    Ok(Json(state.engine.filtered_orders(&state.dataset, &criteria, page)))
}

/// Fallback for unknown routes.
pub async fn not_found() -> AppError {
    AppError::NotFound("The requested resource does not exist".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use analytics::AnalyticsEngine;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use chrono::NaiveDate;
    use core_types::{Dataset, Order};
    use rust_decimal_macros::dec;

    fn state() -> Arc<AppState> {
        let at = |d: u32, h: u32| {
            NaiveDate::from_ymd_opt(2024, 3, d)
                .unwrap()
                .and_hms_opt(h, 0, 0)
                .unwrap()
        };
        let dataset = Dataset::new(
            vec![Restaurant {
                id: 1,
                name: "Pizza Place".to_string(),
                location: "Downtown".to_string(),
                cuisine: "Italian".to_string(),
            }],
            vec![
                Order {
                    id: 1,
                    restaurant_id: 1,
                    order_amount: dec!(30.5),
                    order_time: at(1, 13),
                },
                Order {
                    id: 2,
                    restaurant_id: 2,
                    order_amount: dec!(12),
                    order_time: at(2, 9),
                },
            ],
        );
        Arc::new(AppState::new(dataset, AnalyticsEngine::new()))
    }

    fn status_of(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[tokio::test]
    async fn lists_restaurants() {
        let params = RestaurantsParams {
            search: Some("pizza".to_string()),
            ..RestaurantsParams::default()
        };
        let Json(page) = list_restaurants(State(state()), Query(params)).await.unwrap();
        assert_eq!(page.total, 1);
        assert_eq!(page.per_page, 10);
        assert_eq!(page.data[0].name, "Pizza Place");
    }

    #[tokio::test]
    async fn trends_for_a_restaurant() {
        let params = TrendParams {
            start_date: Some("2024-03-01".to_string()),
            end_date: Some("2024-03-02".to_string()),
        };
        let Json(report) = order_trends(State(state()), Path("1".to_string()), Query(params))
            .await
            .unwrap();
        assert_eq!(report.daily_data.len(), 2);
        assert_eq!(report.daily_data[0].peak_hour, Some(13));
        assert_eq!(report.daily_data[1].orders_count, 0);
    }

    #[tokio::test]
    async fn reversed_window_is_unprocessable() {
        let params = TrendParams {
            start_date: Some("2024-03-02".to_string()),
            end_date: Some("2024-03-01".to_string()),
        };
        let err = order_trends(State(state()), Path("1".to_string()), Query(params))
            .await
            .unwrap_err();
        assert_eq!(status_of(err), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn bad_restaurant_id_is_unprocessable() {
        let err = order_trends(
            State(state()),
            Path("pizza".to_string()),
            Query(TrendParams::default()),
        )
        .await
        .unwrap_err();
        assert_eq!(status_of(err), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn top_restaurants_include_unknown_placeholder() {
        let params = TopRestaurantsParams {
            start_date: Some("2024-03-01".to_string()),
            end_date: Some("2024-03-03".to_string()),
            limit: None,
        };
        let Json(top) = top_restaurants(State(state()), Query(params)).await.unwrap();
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].name, "Pizza Place");
        assert_eq!(top[1].name, "Unknown Restaurant");
    }

    #[tokio::test]
    async fn top_restaurants_require_dates() {
        let err = top_restaurants(State(state()), Query(TopRestaurantsParams::default()))
            .await
            .unwrap_err();
        assert_eq!(status_of(err), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn filtered_orders_embed_restaurants() {
        let Json(page) = filtered_orders(State(state()), Query(FilteredOrdersParams::default()))
            .await
            .unwrap();
        assert_eq!(page.per_page, 20);
        let ids: Vec<_> = page.data.iter().map(|e| e.order.id).collect();
        assert_eq!(ids, vec![2, 1]);
        assert!(page.data[0].restaurant.is_none());
        assert_eq!(page.data[1].restaurant.as_ref().unwrap().id, 1);
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        assert_eq!(status_of(not_found().await), StatusCode::NOT_FOUND);
    }
}
