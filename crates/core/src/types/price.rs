//! Type-safe price representation using decimal arithmetic.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Errors that can occur when constructing a [`Price`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// The amount is below zero.
    #[error("price cannot be negative (got {0})")]
    Negative(Decimal),
}

/// A non-negative unit price with currency information.
///
/// ## Examples
///
/// ```
/// use greenthumb_core::{CurrencyCode, Price};
/// use rust_decimal::Decimal;
///
/// let price = Price::try_new(Decimal::new(20, 0), CurrencyCode::USD).unwrap();
/// assert_eq!(price.to_string(), "$20.00");
/// assert_eq!(price.times(3).to_string(), "$60.00");
///
/// assert!(Price::try_new(Decimal::new(-1, 0), CurrencyCode::USD).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPrice")]
pub struct Price {
    /// Amount in the currency's standard unit (e.g., dollars, not cents).
    amount: Decimal,
    /// ISO 4217 currency code.
    currency_code: CurrencyCode,
}

#[derive(Deserialize)]
struct RawPrice {
    amount: Decimal,
    #[serde(default)]
    currency_code: CurrencyCode,
}

impl TryFrom<RawPrice> for Price {
    type Error = PriceError;

    fn try_from(raw: RawPrice) -> Result<Self, Self::Error> {
        Self::try_new(raw.amount, raw.currency_code)
    }
}

impl Price {
    /// Create a new price, rejecting negative amounts.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Negative`] if `amount` is below zero.
    pub fn try_new(amount: Decimal, currency_code: CurrencyCode) -> Result<Self, PriceError> {
        if amount < Decimal::ZERO {
            return Err(PriceError::Negative(amount));
        }
        Ok(Self {
            amount,
            currency_code,
        })
    }

    /// A whole-unit US dollar price, e.g. `Price::usd(20)` is `$20.00`.
    #[must_use]
    pub fn usd(dollars: u32) -> Self {
        Self {
            amount: Decimal::from(dollars),
            currency_code: CurrencyCode::USD,
        }
    }

    /// A zero price in the given currency.
    #[must_use]
    pub const fn zero(currency_code: CurrencyCode) -> Self {
        Self {
            amount: Decimal::ZERO,
            currency_code,
        }
    }

    /// The amount in the currency's standard unit.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.amount
    }

    /// The ISO 4217 currency code.
    #[must_use]
    pub const fn currency_code(&self) -> CurrencyCode {
        self.currency_code
    }

    /// This price multiplied by a quantity, saturating at `Decimal::MAX`.
    #[must_use]
    pub fn times(self, quantity: u32) -> Self {
        let amount = self
            .amount
            .checked_mul(Decimal::from(quantity))
            .unwrap_or(Decimal::MAX);
        Self { amount, ..self }
    }

    /// Sum prices of one currency, keeping the currency of the first one.
    ///
    /// An empty iterator sums to zero in the default currency.
    #[must_use]
    pub fn sum<I>(prices: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        let mut prices = prices.into_iter();
        let Some(first) = prices.next() else {
            return Self::zero(CurrencyCode::default());
        };
        prices.fold(first, |acc, price| Self {
            amount: acc
                .amount
                .checked_add(price.amount)
                .unwrap_or(Decimal::MAX),
            ..acc
        })
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:.2}", self.currency_code.symbol(), self.amount)
    }
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    USD,
    EUR,
    GBP,
    CAD,
    AUD,
}

impl CurrencyCode {
    /// Display symbol for the currency.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::USD | Self::CAD | Self::AUD => "$",
            Self::EUR => "€",
            Self::GBP => "£",
        }
    }

    /// The three-letter ISO code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::USD => "USD",
            Self::EUR => "EUR",
            Self::GBP => "GBP",
            Self::CAD => "CAD",
            Self::AUD => "AUD",
        }
    }
}
