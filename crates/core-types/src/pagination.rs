use serde::Serialize;

/// One page of a larger, already ordered result set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PagedResult<T> {
    pub data: Vec<T>,
    pub current_page: usize,
    pub per_page: usize,
    pub total: usize,
    pub last_page: usize,
}

impl<T> PagedResult<T> {
    /// Slices page `page` (1-indexed) out of `items`.
    ///
    /// Page 0 is treated as page 1. Pages past the end produce an empty
    /// `data` slice but keep the real `total` and `last_page`.
    pub fn paginate(items: Vec<T>, page: usize, per_page: usize) -> Self {
        let current_page = page.max(1);
        let total = items.len();
        let offset = (current_page - 1).saturating_mul(per_page);

        let data = items.into_iter().skip(offset).take(per_page).collect();

        Self {
            data,
            current_page,
            per_page,
            total,
            last_page: last_page(total, per_page),
        }
    }

    /// Transforms the page contents while keeping the paging metadata.
    pub fn map<U, F>(self, f: F) -> PagedResult<U>
    where
        F: FnMut(T) -> U,
    {
        PagedResult {
            data: self.data.into_iter().map(f).collect(),
            current_page: self.current_page,
            per_page: self.per_page,
            total: self.total,
            last_page: self.last_page,
        }
    }
}

/// `ceil(total / per_page)`, with 0 for an empty set.
pub fn last_page(total: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 0;
    }
    total.div_ceil(per_page)
}
