//! Conversion between decimal prices and stored cents.

use rust_decimal::{prelude::ToPrimitive, Decimal};

use crate::server::error::recipe::RecipeError;

/// Exclusive upper bound for a recipe price.
pub const MAX_PRICE_CENTS: i64 = 100_000;

/// Renders stored cents as a two-place decimal, e.g. 500 as `5.00`.
pub fn price_from_cents(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}

/// Converts a decimal price into cents.
///
/// # Returns
/// - `Ok(i64)` - Price in cents
/// - `Err(RecipeError::InvalidPrice)` - Negative, 1000 or more, or more than 2 decimal places
pub fn price_to_cents(price: Decimal) -> Result<i64, RecipeError> {
    let invalid = || RecipeError::InvalidPrice(price.to_string());

    if price.is_sign_negative() || price.normalize().scale() > 2 {
        return Err(invalid());
    }

    let cents = price
        .checked_mul(Decimal::ONE_HUNDRED)
        .and_then(|cents| cents.to_i64())
        .filter(|cents| *cents < MAX_PRICE_CENTS)
        .ok_or_else(invalid)?;

    Ok(cents)
}
