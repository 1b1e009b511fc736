//! Promo codes and discount arithmetic.
//!
//! The code table is fixed at compile time. Lookup is case-insensitive:
//! `save20`, `Save20` and `SAVE20` all resolve to the same code.
//!
//! | Code | Discount |
//! |------|----------|
//! | WELCOME10 | 10% |
//! | SAVE20 | 20% |
//! | FIRST50 | $50 off, floored at $0 |

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A discount rule.
///
/// Serializes as `{"type": "percentage", "discount": 20}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "discount", rename_all = "snake_case")]
pub enum Discount {
    /// Whole percent off, 0..=100.
    Percentage(u8),
    /// Cents off.
    Fixed(i64),
}

impl Discount {
    /// Applies the discount to a price in cents.
    ///
    /// Percentages round to the nearest cent. The result never drops
    /// below zero and never overflows.
    pub fn apply(&self, price: i64) -> i64 {
        match *self {
            Discount::Percentage(percent) => {
                let percent = i128::from(percent.min(100));
                let discounted = (i128::from(price) * (100 - percent) + 50).div_euclid(100);
                i64::try_from(discounted.max(0)).unwrap_or(i64::MAX)
            }
            Discount::Fixed(amount) => price.saturating_sub(amount).max(0),
        }
    }
}

/// Known promo codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PromoCode {
    Welcome10,
    Save20,
    First50,
}

static CODES: Lazy<HashMap<&'static str, PromoCode>> = Lazy::new(|| {
    PromoCode::ALL
        .into_iter()
        .map(|code| (code.as_str(), code))
        .collect()
});

impl PromoCode {
    pub const ALL: [PromoCode; 3] = [PromoCode::Welcome10, PromoCode::Save20, PromoCode::First50];

    /// Canonical uppercase code.
    pub fn as_str(&self) -> &'static str {
        match self {
            PromoCode::Welcome10 => "WELCOME10",
            PromoCode::Save20 => "SAVE20",
            PromoCode::First50 => "FIRST50",
        }
    }

    pub fn discount(&self) -> Discount {
        match self {
            PromoCode::Welcome10 => Discount::Percentage(10),
            PromoCode::Save20 => Discount::Percentage(20),
            PromoCode::First50 => Discount::Fixed(50_00),
        }
    }

    /// Case-insensitive lookup. Unknown codes return `None`.
    pub fn lookup(code: &str) -> Option<PromoCode> {
        CODES.get(code.to_ascii_uppercase().as_str()).copied()
    }
}

impl std::fmt::Display for PromoCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
