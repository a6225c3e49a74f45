//! End-to-end checks of the four query operations through `AnalyticsEngine`.

use analytics::{
    AnalyticsEngine, DateWindow, DirectoryQuery, OrderCriteria, QueryLimits, SortDirection,
    SortField,
};
use chrono::{NaiveDate, NaiveDateTime};
use core_types::{Dataset, Order, Restaurant};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    date(y, m, d).and_hms_opt(h, min, 0).unwrap()
}

fn restaurant(id: u64, name: &str, location: &str, cuisine: &str) -> Restaurant {
    Restaurant {
        id,
        name: name.to_string(),
        location: location.to_string(),
        cuisine: cuisine.to_string(),
    }
}

fn order(id: u64, restaurant_id: u64, amount: Decimal, time: NaiveDateTime) -> Order {
    Order {
        id,
        restaurant_id,
        order_amount: amount,
        order_time: time,
    }
}

fn city_dataset() -> Dataset {
    Dataset::new(
        vec![
            restaurant(101, "Tandoori Treats", "Bangalore", "North Indian"),
            restaurant(102, "Sushi Bay", "Mumbai", "Japanese"),
            restaurant(103, "Pasta Palace", "Delhi", "Italian"),
            restaurant(104, "Burger Hub", "Bangalore", "American"),
        ],
        vec![
            order(1, 101, dec!(450.00), at(2025, 6, 24, 12, 10)),
            order(2, 102, dec!(820.50), at(2025, 6, 24, 19, 45)),
            order(3, 101, dec!(300.25), at(2025, 6, 25, 12, 30)),
            order(4, 103, dec!(640.00), at(2025, 6, 25, 20, 5)),
            order(5, 104, dec!(210.00), at(2025, 6, 26, 13, 0)),
            order(6, 101, dec!(515.75), at(2025, 6, 26, 12, 55)),
            order(7, 999, dec!(99.99), at(2025, 6, 26, 21, 0)),
            order(8, 102, dec!(150.00), at(2025, 6, 28, 18, 20)),
        ],
    )
}

#[test]
fn pizza_place_single_day_trend() {
    let dataset = Dataset::new(
        vec![restaurant(1, "Pizza Place", "Downtown", "Italian")],
        vec![order(1, 1, dec!(30.5), at(2024, 3, 1, 13, 0))],
    );
    let window = DateWindow::new(date(2024, 3, 1), date(2024, 3, 1)).unwrap();

    let report = AnalyticsEngine::new().daily_trends(&dataset, 1, &window);

    assert_eq!(report.restaurant_id, 1);
    assert_eq!(report.start_date, date(2024, 3, 1));
    assert_eq!(report.end_date, date(2024, 3, 1));
    let value = serde_json::to_value(&report.daily_data).unwrap();
    assert_eq!(
        value,
        serde_json::json!([{
            "date": "2024-03-01",
            "orders_count": 1,
            "revenue": 30.5,
            "average_order_value": 30.5,
            "peak_hour": 13
        }])
    );
}

#[test]
fn trends_cover_every_day_of_the_window() {
    let dataset = city_dataset();
    let window = DateWindow::new(date(2025, 6, 23), date(2025, 6, 29)).unwrap();

    let report = AnalyticsEngine::new().daily_trends(&dataset, 101, &window);

    assert_eq!(report.daily_data.len(), window.num_days());
    let days: Vec<_> = report.daily_data.iter().map(|d| d.date).collect();
    assert_eq!(days, window.days().collect::<Vec<_>>());

    let counts: Vec<_> = report.daily_data.iter().map(|d| d.orders_count).collect();
    assert_eq!(counts, vec![0, 1, 1, 1, 0, 0, 0]);

    for empty in report.daily_data.iter().filter(|d| d.orders_count == 0) {
        assert_eq!(empty.average_order_value, Decimal::ZERO);
        assert_eq!(empty.revenue, Decimal::ZERO);
        assert_eq!(empty.peak_hour, None);
    }
}

#[test]
fn unknown_restaurant_trend_is_all_zero() {
    let window = DateWindow::new(date(2025, 6, 24), date(2025, 6, 26)).unwrap();
    let report = AnalyticsEngine::new().daily_trends(&city_dataset(), 555, &window);
    assert_eq!(report.daily_data.len(), 3);
    assert!(report.daily_data.iter().all(|d| d.orders_count == 0));
}

#[test]
fn top_restaurants_are_non_increasing_and_bounded() {
    let dataset = city_dataset();
    let window = DateWindow::new(date(2025, 6, 24), date(2025, 6, 30)).unwrap();
    let engine = AnalyticsEngine::new();

    let top = engine.top_restaurants(&dataset, &window, None);
    assert_eq!(top.len(), 3);
    assert!(top.windows(2).all(|w| w[0].total_revenue >= w[1].total_revenue));

    assert_eq!(top[0].id, 101);
    assert_eq!(top[0].total_orders, 3);
    assert_eq!(top[0].total_revenue, dec!(1266.00));
    assert_eq!(top[0].average_order_value, dec!(422.00));
    assert_eq!(top[1].id, 102);
    assert_eq!(top[1].total_revenue, dec!(970.50));
    assert_eq!(top[2].id, 103);

    for n in 0..8 {
        assert!(engine.top_restaurants(&dataset, &window, Some(n)).len() <= n);
    }

    let everyone = engine.top_restaurants(&dataset, &window, Some(10));
    let unknown = everyone.iter().find(|s| s.id == 999).unwrap();
    assert_eq!(unknown.name, "Unknown Restaurant");
}

#[test]
fn filtered_orders_apply_all_criteria_together() {
    let dataset = Dataset::new(
        Vec::new(),
        vec![
            order(1, 5, dec!(100), at(2024, 1, 2, 10, 0)),
            order(2, 5, dec!(50), at(2024, 1, 3, 20, 0)),
        ],
    );
    let criteria = OrderCriteria {
        min_amount: Some(dec!(60)),
        ..OrderCriteria::default()
    };

    let page = AnalyticsEngine::new().filtered_orders(&dataset, &criteria, 1);
    let ids: Vec<_> = page.data.iter().map(|e| e.order.id).collect();
    assert_eq!(ids, vec![1]);
    assert_eq!(page.per_page, 20);
    assert!(page.data[0].restaurant.is_none());
}

#[test]
fn filtered_orders_combine_restaurant_hours_and_dates() {
    let criteria = OrderCriteria {
        restaurant_id: Some(101),
        start_date: Some(at(2025, 6, 24, 0, 0)),
        end_date: Some(at(2025, 6, 26, 12, 55)),
        start_hour: Some(12),
        end_hour: Some(12),
        ..OrderCriteria::default()
    };

    let page = AnalyticsEngine::new().filtered_orders(&city_dataset(), &criteria, 1);
    let ids: Vec<_> = page.data.iter().map(|e| e.order.id).collect();
    assert_eq!(ids, vec![6, 3, 1]);
    assert!(page.data.iter().all(|e| e.restaurant.as_ref().unwrap().id == 101));
}

#[test]
fn directory_pages_past_the_end_keep_totals() {
    let engine = AnalyticsEngine::with_limits(QueryLimits {
        restaurants_per_page: 3,
        ..QueryLimits::default()
    });
    let dataset = city_dataset();

    let last = engine.list_restaurants(
        &dataset,
        &DirectoryQuery {
            page: 2,
            ..DirectoryQuery::default()
        },
    );
    assert_eq!(last.data.len(), 1);
    assert_eq!(last.last_page, 2);

    for page in 3..6 {
        let beyond = engine.list_restaurants(
            &dataset,
            &DirectoryQuery {
                page,
                ..DirectoryQuery::default()
            },
        );
        assert!(beyond.data.is_empty());
        assert_eq!(beyond.total, 4);
        assert_eq!(beyond.last_page, 2);
    }
}

#[test]
fn directory_desc_flips_ties_unlike_a_stable_descending_sort() {
    let dataset = city_dataset();
    let engine = AnalyticsEngine::new();
    let query = DirectoryQuery {
        sort_by: SortField::Location,
        ..DirectoryQuery::default()
    };

    let ascending: Vec<u64> = engine
        .list_restaurants(&dataset, &query)
        .data
        .iter()
        .map(|r| r.id)
        .collect();
    let descending: Vec<u64> = engine
        .list_restaurants(
            &dataset,
            &DirectoryQuery {
                sort_order: SortDirection::Desc,
                ..query
            },
        )
        .data
        .iter()
        .map(|r| r.id)
        .collect();

    assert_eq!(ascending, vec![101, 104, 103, 102]);
    let mut reversed = ascending.clone();
    reversed.reverse();
    assert_eq!(descending, reversed);

    // A stable descending sort would have kept 101 ahead of 104.
    assert_eq!(descending, vec![102, 103, 104, 101]);
}

#[test]
fn empty_dataset_answers_every_query() {
    let dataset = Dataset::empty();
    let engine = AnalyticsEngine::new();
    let window = DateWindow::new(date(2024, 1, 1), date(2024, 1, 3)).unwrap();

    let restaurants = engine.list_restaurants(&dataset, &DirectoryQuery::default());
    assert_eq!((restaurants.total, restaurants.last_page), (0, 0));
    assert_eq!(engine.daily_trends(&dataset, 1, &window).daily_data.len(), 3);
    assert!(engine.top_restaurants(&dataset, &window, None).is_empty());
    let orders = engine.filtered_orders(&dataset, &OrderCriteria::default(), 1);
    assert!(orders.data.is_empty());
    assert_eq!(orders.last_page, 0);
}

#[test]
fn top_restaurants_compare_end_date_as_midnight() {
    let dataset = Dataset::new(
        vec![restaurant(1, "Pizza Place", "Downtown", "Italian")],
        vec![order(1, 1, dec!(30.5), at(2024, 3, 2, 10, 0))],
    );
    let window = DateWindow::new(date(2024, 3, 1), date(2024, 3, 2)).unwrap();

    assert!(AnalyticsEngine::new().top_restaurants(&dataset, &window, None).is_empty());
    // The same order still shows in the calendar-day trend series.
    let report = AnalyticsEngine::new().daily_trends(&dataset, 1, &window);
    assert_eq!(report.daily_data[1].orders_count, 1);
}
