use serde::{Deserialize, Serialize};

pub const STATUS_FOR_SALE: &str = "for_sale";
pub const STATUS_READY_TO_BUILD: &str = "ready_to_build";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub direction: String,
    pub field: String,
}

impl SortSpec {
    /// Newest listings first.
    pub fn newest_first() -> SortSpec {
        SortSpec {
            direction: String::from("desc"),
            field: String::from("list_date"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: i64,
    pub max: i64,
}

/// Body of a listings search. `list_price.min <= list_price.max` is left to
/// the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub limit: i64,
    pub offset: i64,
    pub postal_code: String,
    pub status: Vec<String>,
    pub sort_fields: SortSpec,
    pub list_price: PriceRange,
}

impl SearchRequest {
    pub fn new(limit: i64, postal_code: &str, min_price: i64, max_price: i64) -> SearchRequest {
        SearchRequest {
            limit,
            offset: 0,
            postal_code: postal_code.to_string(),
            status: vec![
                STATUS_FOR_SALE.to_string(),
                STATUS_READY_TO_BUILD.to_string(),
            ],
            sort_fields: SortSpec::newest_first(),
            list_price: PriceRange {
                min: min_price,
                max: max_price,
            },
        }
    }
}
