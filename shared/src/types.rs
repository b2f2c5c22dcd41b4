//! Core data model for the restaurant collection
//!
//! The wire format (used by the collection webserver and the local cache
//! file) keeps the legacy field names `type`, `minPrice` and `maxPrice`,
//! where a `maxPrice` of `0` means "no upper bound". In memory the open
//! upper bound is explicit: `PriceRange::max` is an `Option`, and the zero
//! sentinel exists only at the serde boundary.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{SharedError, SharedResult};

/// Inclusive price range in whole currency units.
///
/// `max: None` means the range is open upward (the restaurant has no
/// declared upper price).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    #[serde(rename = "minPrice")]
    pub min: u32,
    #[serde(rename = "maxPrice", with = "unbounded_zero", default)]
    pub max: Option<u32>,
}

impl PriceRange {
    /// Build a range, rejecting a bounded range whose bounds are inverted.
    pub fn new(min: u32, max: Option<u32>) -> SharedResult<Self> {
        if let Some(upper) = max {
            if min > upper {
                return Err(SharedError::InvertedRange { min, max: upper });
            }
        }
        Ok(Self { min, max })
    }

    /// Upper bound for interval arithmetic; open ranges extend to `u32::MAX`.
    pub fn upper(&self) -> u32 {
        self.max.unwrap_or(u32::MAX)
    }
}

impl fmt::Display for PriceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.max {
            Some(max) => write!(f, "${} ~ ${}", self.min, max),
            None => write!(f, "${} and up", self.min),
        }
    }
}

/// A restaurant record in the collection.
///
/// Records are immutable once created; the only mutations the collection
/// supports are append and delete-by-id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: u32,
    pub name: String,
    #[serde(rename = "type")]
    pub category: String,
    #[serde(flatten)]
    pub price: PriceRange,
}

impl Restaurant {
    /// Build a record, trimming `name` and `category` and rejecting
    /// empty values.
    pub fn new(id: u32, name: &str, category: &str, price: PriceRange) -> SharedResult<Self> {
        let name = name.trim();
        let category = category.trim();

        if name.is_empty() {
            return Err(SharedError::EmptyField {
                field: "name".to_string(),
            });
        }
        if category.is_empty() {
            return Err(SharedError::EmptyField {
                field: "category".to_string(),
            });
        }

        Ok(Self {
            id,
            name: name.to_string(),
            category: category.to_string(),
            price,
        })
    }
}

/// Filter for a pick request. Ephemeral: built per request, never persisted.
///
/// Unset budget bounds default to zero / open upward; `category: None`
/// matches every category (the legacy `"all"` option).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BudgetFilter {
    pub min_budget: Option<u32>,
    pub max_budget: Option<u32>,
    pub category: Option<String>,
}

impl BudgetFilter {
    /// The budget as a price range suitable for overlap testing.
    pub fn budget_range(&self) -> PriceRange {
        PriceRange {
            min: self.min_budget.unwrap_or(0),
            max: self.max_budget,
        }
    }

    /// Whether a record's category passes this filter.
    pub fn matches_category(&self, category: &str) -> bool {
        match &self.category {
            Some(wanted) => wanted == category,
            None => true,
        }
    }
}

/// Legacy wire encoding of the open upper bound: `maxPrice: 0` (or a
/// missing field) means unbounded.
mod unbounded_zero {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<u32>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u32(value.unwrap_or(0))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<u32>::deserialize(deserializer)? {
            None | Some(0) => Ok(None),
            bounded => Ok(bounded),
        }
    }
}
