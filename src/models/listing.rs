use serde::{Deserialize, Deserializer};
use serde_json::Value;

// A field that is missing or has the wrong shape takes its zero value
// instead of failing the whole document.
fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}

// Same as `or_default`, but applied per entry so one bad result does not
// empty the list.
fn entries_or_default<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    let entries = match Value::deserialize(deserializer)? {
        Value::Array(entries) => entries,
        _ => return Ok(Vec::new()),
    };
    Ok(entries
        .into_iter()
        .map(|entry| T::deserialize(entry).unwrap_or_default())
        .collect())
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
pub struct SearchResponse {
    #[serde(default, deserialize_with = "or_default")]
    pub data: Data,
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
pub struct Data {
    #[serde(default, deserialize_with = "or_default")]
    pub home_search: HomeSearch,
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
pub struct HomeSearch {
    #[serde(default, deserialize_with = "entries_or_default")]
    pub results: Vec<ListingResult>,
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
pub struct ListingResult {
    #[serde(default, deserialize_with = "or_default")]
    pub location: Location,
    #[serde(default, deserialize_with = "or_default")]
    pub description: Description,
    #[serde(default, deserialize_with = "or_default")]
    pub href: String,
    #[serde(default, deserialize_with = "or_default")]
    pub list_price: i64,
    #[serde(default, deserialize_with = "or_default")]
    pub price_reduced_amount: i64,
    #[serde(default, deserialize_with = "or_default")]
    pub last_sold_price: i64,
    #[serde(default, deserialize_with = "or_default")]
    pub list_date: String,
    #[serde(default, deserialize_with = "or_default")]
    pub status: String,
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
pub struct Location {
    #[serde(default, deserialize_with = "or_default")]
    pub address: Address,
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
pub struct Address {
    #[serde(default, deserialize_with = "or_default")]
    pub city: String,
    #[serde(default, deserialize_with = "or_default")]
    pub line: String,
    #[serde(default, deserialize_with = "or_default")]
    pub postal_code: String,
    #[serde(default, deserialize_with = "or_default")]
    pub state_code: String,
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
pub struct Description {
    #[serde(default, deserialize_with = "or_default")]
    pub sqft: i64,
    #[serde(default, deserialize_with = "or_default")]
    pub beds: i64,
    #[serde(default, deserialize_with = "or_default")]
    pub baths: i64,
}

/// Flattened view of one listing, as printed by the reporter.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ListingReport {
    pub street: String,
    pub city: String,
    pub state_code: String,
    pub postal_code: String,
    pub href: String,
    pub list_price: i64,
    pub price_reduced_amount: i64,
    /// Zero when the property was never sold or the sale is unknown.
    pub last_sold_price: i64,
    pub list_date: String,
    pub status: String,
    pub sqft: i64,
    pub beds: i64,
    pub baths: i64,
}

impl From<&ListingResult> for ListingReport {
    fn from(result: &ListingResult) -> Self {
        let address = &result.location.address;
        ListingReport {
            street: address.line.clone(),
            city: address.city.clone(),
            state_code: address.state_code.clone(),
            postal_code: address.postal_code.clone(),
            href: result.href.clone(),
            list_price: result.list_price,
            price_reduced_amount: result.price_reduced_amount,
            last_sold_price: result.last_sold_price,
            list_date: result.list_date.clone(),
            status: result.status.clone(),
            sqft: result.description.sqft,
            beds: result.description.beds,
            baths: result.description.baths,
        }
    }
}
