use serde::{Deserialize, Serialize};

/// Order document as submitted by a caller.
///
/// Every field is optional so that missing or `null` values reach the
/// validator and are reported there, instead of failing deserialization.
/// The PascalCase names used by older clients are accepted as aliases.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderDocument {
    #[serde(alias = "OrderId")]
    pub order_id: Option<String>,
    #[serde(alias = "OrderName")]
    pub order_name: Option<String>,
    #[serde(alias = "CustomerAccount")]
    pub customer_account: Option<String>,
    #[serde(alias = "PaymentTerms")]
    pub payment_terms: Option<String>,
    #[serde(alias = "TaxExempt")]
    pub tax_exempt: Option<bool>,
    #[serde(alias = "Currency")]
    pub currency: Option<String>,
    #[serde(alias = "BillToPerson", alias = "billToPerson")]
    pub bill_to: Option<AddressDocument>,
    #[serde(alias = "ShipToPerson", alias = "shipToPerson")]
    pub ship_to: Option<AddressDocument>,
}

/// Billing or shipping contact.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AddressDocument {
    #[serde(alias = "EmailAddress")]
    pub email_address: Option<String>,
    #[serde(alias = "FirstName")]
    pub first_name: Option<String>,
    #[serde(alias = "LastName")]
    pub last_name: Option<String>,
    #[serde(alias = "StreetLine1")]
    pub street_line1: Option<String>,
    #[serde(alias = "StreetLine2")]
    pub street_line2: Option<String>,
    #[serde(alias = "StreetLine3")]
    pub street_line3: Option<String>,
    #[serde(alias = "City")]
    pub city: Option<String>,
    #[serde(alias = "Country")]
    pub country: Option<String>,
    #[serde(alias = "Region")]
    pub region: Option<String>,
}

impl OrderDocument {
    /// Names of the required top-level properties that are absent, in
    /// document order.
    pub fn missing_required(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.order_id.is_none() {
            missing.push("orderId");
        }
        if self.order_name.is_none() {
            missing.push("orderName");
        }
        if self.payment_terms.is_none() {
            missing.push("paymentTerms");
        }
        if self.currency.is_none() {
            missing.push("currency");
        }
        if self.bill_to.is_none() {
            missing.push("billTo");
        }
        if self.ship_to.is_none() {
            missing.push("shipTo");
        }
        missing
    }
}

impl AddressDocument {
    /// Names of the required address properties that are absent, in
    /// document order. `streetLine2`, `streetLine3` and `region` are optional
    /// here; `region` has its own conditional rule.
    pub fn missing_required(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.email_address.is_none() {
            missing.push("emailAddress");
        }
        if self.first_name.is_none() {
            missing.push("firstName");
        }
        if self.last_name.is_none() {
            missing.push("lastName");
        }
        if self.street_line1.is_none() {
            missing.push("streetLine1");
        }
        if self.city.is_none() {
            missing.push("city");
        }
        if self.country.is_none() {
            missing.push("country");
        }
        missing
    }
}
