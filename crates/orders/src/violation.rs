use thiserror::Error;

use crate::terms::{Currency, PaymentTerms};

/// Minimum length of an order id.
pub const ORDER_ID_MIN_LEN: usize = 6;
/// Maximum length of an order name.
pub const ORDER_NAME_MAX_LEN: usize = 50;
/// Maximum length of a customer account name.
pub const CUSTOMER_ACCOUNT_MAX_LEN: usize = 50;

/// Which of the two order addresses a rule was applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressRole {
    BillTo,
    ShipTo,
}

impl AddressRole {
    /// Property name of the address on the order document.
    pub fn property(self) -> &'static str {
        match self {
            Self::BillTo => "billTo",
            Self::ShipTo => "shipTo",
        }
    }
}

impl core::fmt::Display for AddressRole {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            Self::BillTo => "Bill To",
            Self::ShipTo => "Ship To",
        })
    }
}

/// A single failed order rule. `Display` yields the caller-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    /// A required property was absent or `null`; carries its path,
    /// e.g. `orderId` or `billTo.emailAddress`.
    #[error("Cannot write a null value for property '{0}'. Property requires a value.")]
    MissingProperty(String),

    #[error("Invalid {role} email address - {email}")]
    InvalidEmail { role: AddressRole, email: String },

    #[error("Region Must be supplied if Country is US or CA")]
    RegionRequired { role: AddressRole },

    #[error("Order Id must be a minimum length of {}", ORDER_ID_MIN_LEN)]
    OrderIdTooShort,

    #[error("Order Id can only contains digits 0-9")]
    OrderIdNotDigits,

    #[error("Order name cannot be greater than {} characters in length", ORDER_NAME_MAX_LEN)]
    OrderNameTooLong,

    #[error(
        "Customer account name cannot be greater than {} characters in length",
        CUSTOMER_ACCOUNT_MAX_LEN
    )]
    CustomerAccountTooLong,

    #[error("Payment terms must be one of the following values {}", PaymentTerms::permitted_values())]
    UnknownPaymentTerms { value: String },

    #[error("Currency must be one of the following values {}", Currency::permitted_values())]
    UnknownCurrency { value: String },
}

impl Violation {
    pub fn missing(path: impl Into<String>) -> Self {
        Self::MissingProperty(path.into())
    }

    pub fn missing_in(role: AddressRole, field: &str) -> Self {
        Self::MissingProperty(format!("{}.{field}", role.property()))
    }
}
