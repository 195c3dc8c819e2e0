//! Price Fixtures

use rust_decimal::{Decimal, prelude::ToPrimitive};
use rusty_money::iso::{Currency, EUR, GBP, USD};
use serde::Deserialize;

use crate::fixtures::FixtureError;

/// Wrapper for prices in YAML
#[derive(Debug, Deserialize)]
pub struct PricesFixture {
    /// Listings, one per `(item, store)` pair
    pub prices: Vec<PriceFixture>,
}

/// Price fixture from YAML
///
/// Either price may be omitted; a row with neither records the item as
/// stocked but unavailable.
#[derive(Debug, Deserialize)]
pub struct PriceFixture {
    /// Listing id; defaults to `item@store` when omitted
    #[serde(default)]
    pub id: Option<String>,

    /// Reference item id
    pub item: String,

    /// Store id
    pub store: String,

    /// Undiscounted shelf price (e.g., "2.99 GBP")
    #[serde(default)]
    pub original: Option<String>,

    /// Discounted price (e.g., "2.49 GBP")
    #[serde(default)]
    pub discount: Option<String>,
}

impl PriceFixture {
    /// The listing id, derived from the `(item, store)` pair when omitted.
    #[must_use]
    pub fn listing_id(&self) -> String {
        self.id
            .clone()
            .unwrap_or_else(|| format!("{}@{}", self.item, self.store))
    }
}

/// Parse price string (e.g., "2.99 GBP") into minor units and currency
///
/// # Errors
///
/// Returns an error if the string is not in the format "AMOUNT CURRENCY",
/// if the amount cannot be parsed as a decimal, or if the currency code
/// is not recognized.
pub fn parse_price(s: &str) -> Result<(i64, &'static Currency), FixtureError> {
    let parts: Vec<&str> = s.split_whitespace().collect();

    if parts.len() != 2 {
        return Err(FixtureError::InvalidPrice(format!(
            "Expected format 'AMOUNT CURRENCY', got: {s}"
        )));
    }

    let amount = parts
        .first()
        .ok_or_else(|| FixtureError::InvalidPrice(s.to_string()))?
        .parse::<Decimal>()
        .map_err(|_err| FixtureError::InvalidPrice(s.to_string()))?;

    let minor_units = amount
        .checked_mul(Decimal::new(100, 0))
        .and_then(|value| value.round_dp(0).to_i64())
        .ok_or_else(|| FixtureError::InvalidPrice(s.to_string()))?;

    let currency_code = parts
        .get(1)
        .ok_or_else(|| FixtureError::InvalidPrice(s.to_string()))?;

    let currency = match *currency_code {
        "GBP" => GBP,
        "USD" => USD,
        "EUR" => EUR,
        other => return Err(FixtureError::UnknownCurrency(other.to_string())),
    };

    Ok((minor_units, currency))
}
