//! Query-string parsing and validation.
//!
//! Every parameter arrives as an optional string so that malformed values
//! surface as `422` validation errors naming the field, instead of the
//! framework's generic extractor rejection. Blank values count as absent.

use crate::error::AppError;
use analytics::{DateWindow, DirectoryQuery, OrderCriteria, SortDirection, SortField};
use chrono::{NaiveDate, NaiveDateTime};
use core_types::{parse_date, parse_timestamp, RestaurantId};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::str::FromStr;

/// Longest trend series a single request may ask for, in days.
pub const MAX_TREND_DAYS: usize = 366;

/// `GET /api/v1/restaurants`
#[derive(Debug, Default, Deserialize)]
pub struct RestaurantsParams {
    pub search: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
    pub page: Option<String>,
}

impl RestaurantsParams {
    pub fn into_query(self) -> Result<DirectoryQuery, AppError> {
        let page = parse_page(self.page.as_deref())?;
        Ok(DirectoryQuery {
            search: present(self.search.as_deref()).map(str::to_string),
            sort_by: present(self.sort_by.as_deref())
                .map(SortField::from)
                .unwrap_or_default(),
            sort_order: present(self.sort_order.as_deref())
                .map(SortDirection::from)
                .unwrap_or_default(),
            page,
        })
    }
}

/// `GET /api/v1/restaurants/:restaurant_id/order-trends`
#[derive(Debug, Default, Deserialize)]
pub struct TrendParams {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl TrendParams {
    /// The requested window, capped at `MAX_TREND_DAYS` since the response
    /// holds one entry per day.
    pub fn window(&self) -> Result<DateWindow, AppError> {
        let window = required_window(self.start_date.as_deref(), self.end_date.as_deref())?;
        if window.num_days() > MAX_TREND_DAYS {
            return Err(AppError::invalid(
                "end date",
                format!("must be within {MAX_TREND_DAYS} days of the start date"),
            ));
        }
        Ok(window)
    }
}

/// `GET /api/v1/top-restaurants`
#[derive(Debug, Default, Deserialize)]
pub struct TopRestaurantsParams {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub limit: Option<String>,
}

impl TopRestaurantsParams {
    pub fn window(&self) -> Result<DateWindow, AppError> {
        required_window(self.start_date.as_deref(), self.end_date.as_deref())
    }

    pub fn limit(&self) -> Result<Option<usize>, AppError> {
        optional_number("limit", self.limit.as_deref())
    }
}

/// `GET /api/v1/filtered-orders`
#[derive(Debug, Default, Deserialize)]
pub struct FilteredOrdersParams {
    pub restaurant_id: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub min_amount: Option<String>,
    pub max_amount: Option<String>,
    pub start_hour: Option<String>,
    pub end_hour: Option<String>,
    pub page: Option<String>,
}

impl FilteredOrdersParams {
    pub fn criteria(&self) -> Result<OrderCriteria, AppError> {
        Ok(OrderCriteria {
            restaurant_id: optional_number::<RestaurantId>("restaurant_id", self.restaurant_id.as_deref())?,
            start_date: optional_timestamp("start_date", self.start_date.as_deref())?,
            end_date: optional_timestamp("end_date", self.end_date.as_deref())?,
            min_amount: optional_number::<Decimal>("min_amount", self.min_amount.as_deref())?,
            max_amount: optional_number::<Decimal>("max_amount", self.max_amount.as_deref())?,
            start_hour: optional_hour("start_hour", self.start_hour.as_deref())?,
            end_hour: optional_hour("end_hour", self.end_hour.as_deref())?,
        })
    }

    pub fn page(&self) -> Result<usize, AppError> {
        parse_page(self.page.as_deref())
    }
}

/// Parses a path segment holding a restaurant id.
pub fn restaurant_id(raw: &str) -> Result<RestaurantId, AppError> {
    raw.trim()
        .parse()
        .map_err(|_| AppError::invalid("restaurant_id", "must be a non-negative integer"))
}

fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn parse_page(value: Option<&str>) -> Result<usize, AppError> {
    Ok(optional_number("page", value)?.unwrap_or(1))
}

fn optional_number<T: FromStr>(field: &str, value: Option<&str>) -> Result<Option<T>, AppError> {
    present(value)
        .map(|v| v.parse::<T>().map_err(|_| AppError::invalid(field, "must be a number")))
        .transpose()
}

fn optional_hour(field: &str, value: Option<&str>) -> Result<Option<u32>, AppError> {
    match optional_number::<u32>(field, value)? {
        Some(hour) if hour > 23 => Err(AppError::invalid(field, "must be between 0 and 23")),
        hour => Ok(hour),
    }
}

fn optional_timestamp(field: &str, value: Option<&str>) -> Result<Option<NaiveDateTime>, AppError> {
    present(value)
        .map(|v| parse_timestamp(v).map_err(|_| AppError::invalid(field, "is not a valid date")))
        .transpose()
}

fn required_date(field: &str, value: Option<&str>) -> Result<NaiveDate, AppError> {
    let raw = present(value).ok_or_else(|| AppError::invalid(field, "is required"))?;
    parse_date(raw).map_err(|_| AppError::invalid(field, "is not a valid date"))
}

fn required_window(start: Option<&str>, end: Option<&str>) -> Result<DateWindow, AppError> {
    let start = required_date("start date", start)?;
    let end = required_date("end date", end)?;
    Ok(DateWindow::new(start, end)?)
}
