use crate::error::DataError;
use configuration::DataConfig;
use core_types::{Dataset, Order, Restaurant};
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::{BufReader, ErrorKind};
use std::path::{Path, PathBuf};

/// Reads `restaurants.json` and `orders.json` into a `Dataset`.
#[derive(Debug, Clone)]
pub struct JsonDataSource {
    restaurants_path: PathBuf,
    orders_path: PathBuf,
}

impl JsonDataSource {
    pub fn new(restaurants_path: impl Into<PathBuf>, orders_path: impl Into<PathBuf>) -> Self {
        Self {
            restaurants_path: restaurants_path.into(),
            orders_path: orders_path.into(),
        }
    }

    pub fn from_config(config: &DataConfig) -> Self {
        Self::new(&config.restaurants_path, &config.orders_path)
    }

    /// Loads according to `config.strict`: strict loads propagate the first
    /// failure, lenient loads fall back to empty collections.
    pub fn load_configured(config: &DataConfig) -> Result<Dataset, DataError> {
        let source = Self::from_config(config);
        if config.strict {
            source.load()
        } else {
            Ok(source.load_or_empty())
        }
    }

    /// Loads both collections, failing on the first missing or malformed file.
    pub fn load(&self) -> Result<Dataset, DataError> {
        let restaurants: Vec<Restaurant> = read_collection(&self.restaurants_path)?;
        let orders: Vec<Order> = read_collection(&self.orders_path)?;

        tracing::info!(
            restaurants = restaurants.len(),
            orders = orders.len(),
            "Dataset loaded."
        );
        Ok(Dataset::new(restaurants, orders))
    }

    /// Loads both collections, substituting an empty collection for any file
    /// that cannot be read. Failures are logged, never returned.
    pub fn load_or_empty(&self) -> Dataset {
        let restaurants: Vec<Restaurant> = read_collection(&self.restaurants_path)
            .unwrap_or_else(|e| {
                tracing::error!(error = %e, "Failed to load restaurants; serving an empty directory.");
                Vec::new()
            });
        let orders: Vec<Order> = read_collection(&self.orders_path).unwrap_or_else(|e| {
            tracing::error!(error = %e, "Failed to load orders; serving an empty order set.");
            Vec::new()
        });

        tracing::info!(
            restaurants = restaurants.len(),
            orders = orders.len(),
            "Dataset loaded."
        );
        Dataset::new(restaurants, orders)
    }
}

/// Deserializes a JSON array file into typed records.
fn read_collection<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, DataError> {
    let file = File::open(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => DataError::NotFound(path.to_path_buf()),
        _ => DataError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    serde_json::from_reader(BufReader::new(file)).map_err(|source| DataError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
