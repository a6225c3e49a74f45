use core_types::{PagedResult, Restaurant};
use std::cmp::Ordering;

/// The restaurant field the directory is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    #[default]
    Name,
    Location,
    Cuisine,
    Id,
}

impl SortField {
    fn compare(&self, a: &Restaurant, b: &Restaurant) -> Ordering {
        match self {
            SortField::Name => a.name.cmp(&b.name),
            SortField::Location => a.location.cmp(&b.location),
            SortField::Cuisine => a.cuisine.cmp(&b.cuisine),
            SortField::Id => a.id.cmp(&b.id),
        }
    }
}

/// Unrecognised field names fall back to `Name`.
impl From<&str> for SortField {
    fn from(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "location" => SortField::Location,
            "cuisine" => SortField::Cuisine,
            "id" => SortField::Id,
            _ => SortField::Name,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// Only an explicit `desc` reverses; anything else is ascending.
impl From<&str> for SortDirection {
    fn from(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("desc") {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        }
    }
}

/// Parameters for one directory page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryQuery {
    pub search: Option<String>,
    pub sort_by: SortField,
    pub sort_order: SortDirection,
    pub page: usize,
}

impl Default for DirectoryQuery {
    fn default() -> Self {
        Self {
            search: None,
            sort_by: SortField::default(),
            sort_order: SortDirection::default(),
            page: 1,
        }
    }
}

/// Searches, sorts and pages the restaurant list.
#[derive(Debug, Default, Clone, Copy)]
pub struct RestaurantDirectory;

impl RestaurantDirectory {
    pub fn new() -> Self {
        Self
    }

    /// A case-insensitive substring search over name, location and cuisine,
    /// followed by sorting and paging.
    ///
    /// `Desc` reverses the stable ascending sort instead of sorting with a
    /// descending comparator, so restaurants with equal keys come out in the
    /// opposite of their input order.
    pub fn list(
        &self,
        restaurants: &[Restaurant],
        query: &DirectoryQuery,
        per_page: usize,
    ) -> PagedResult<Restaurant> {
        let term = query
            .search
            .as_deref()
            .map(str::trim)
            .filter(|term| !term.is_empty())
            .map(str::to_lowercase);

        let mut matched: Vec<&Restaurant> = match &term {
            Some(term) => restaurants
                .iter()
                .filter(|restaurant| matches_search(restaurant, term))
                .collect(),
            None => restaurants.iter().collect(),
        };

        matched.sort_by(|a, b| query.sort_by.compare(a, b));
        if query.sort_order == SortDirection::Desc {
            matched.reverse();
        }

        PagedResult::paginate(matched, query.page, per_page).map(Restaurant::clone)
    }
}

fn matches_search(restaurant: &Restaurant, lowercase_term: &str) -> bool {
    [&restaurant.name, &restaurant.location, &restaurant.cuisine]
        .iter()
        .any(|field| field.to_lowercase().contains(lowercase_term))
}
