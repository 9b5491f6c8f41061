//! Closed value sets accepted on an order.
//!
//! The permitted-values text in violation messages is produced from the same
//! `ALL` table that parsing uses.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use ordergate_core::DomainError;

macro_rules! impl_closed_set {
    ($t:ty, $name:literal, [$($variant:ident => $text:literal),+ $(,)?]) => {
        impl $t {
            /// Every permitted value, in canonical order.
            pub const ALL: &'static [$t] = &[$(Self::$variant),+];

            /// Canonical wire text.
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $text,)+
                }
            }

            /// Permitted values as a compact JSON array, e.g. `["A","B"]`.
            pub fn permitted_values() -> String {
                serde_json::to_string(Self::ALL).unwrap_or_default()
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            // Matching is exact and case-sensitive.
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str() == s)
                    .ok_or_else(|| DomainError::invalid_input(format!("{}: {s}", $name)))
            }
        }
    };
}

/// Payment terms an order may be placed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentTerms {
    #[serde(rename = "Credit")]
    Credit,
    #[serde(rename = "PO")]
    Po,
    #[serde(rename = "NET30")]
    Net30,
    #[serde(rename = "NET60")]
    Net60,
}

impl_closed_set!(PaymentTerms, "PaymentTerms", [
    Credit => "Credit",
    Po => "PO",
    Net30 => "NET30",
    Net60 => "NET60",
]);

/// Currencies an order may be priced in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Usd,
    Aud,
    Gbp,
    Eur,
}

impl_closed_set!(Currency, "Currency", [
    Usd => "USD",
    Aud => "AUD",
    Gbp => "GBP",
    Eur => "EUR",
]);
