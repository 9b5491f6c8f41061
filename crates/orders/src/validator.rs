//! Order validation rules.
//!
//! Rules run in a fixed order and accumulate; nothing short-circuits except
//! that a property reported missing is not also checked for format. The
//! order of the returned list is part of the contract.

use serde::{Deserialize, Serialize};

use ordergate_core::{DomainError, DomainResult};

use crate::document::{AddressDocument, OrderDocument};
use crate::email::is_valid_email;
use crate::terms::{Currency, PaymentTerms};
use crate::violation::{
    AddressRole, CUSTOMER_ACCOUNT_MAX_LEN, ORDER_ID_MIN_LEN, ORDER_NAME_MAX_LEN, Violation,
};

/// Validate `order`, returning the caller-facing messages.
///
/// Empty means the order satisfies every rule.
pub fn validate(order: &OrderDocument) -> Vec<String> {
    violations(order).iter().map(ToString::to_string).collect()
}

/// Validate `order`, returning the typed violations in rule order.
pub fn violations(order: &OrderDocument) -> Vec<Violation> {
    let mut out = Vec::new();

    // Presence first: top level, then each address.
    out.extend(order.missing_required().into_iter().map(Violation::missing));
    for (role, address) in addresses(order) {
        out.extend(
            address
                .missing_required()
                .into_iter()
                .map(|field| Violation::missing_in(role, field)),
        );
    }

    for (role, address) in addresses(order) {
        if let Some(email) = address.email_address.as_deref() {
            if !is_valid_email(email) {
                out.push(Violation::InvalidEmail {
                    role,
                    email: email.to_string(),
                });
            }
        }
    }

    for (role, address) in addresses(order) {
        if let Some(country) = address.country.as_deref() {
            if requires_region(country) && address.region.as_deref().is_none_or(str::is_empty) {
                out.push(Violation::RegionRequired { role });
            }
        }
    }

    if let Some(order_id) = order.order_id.as_deref() {
        if utf16_len(order_id) < ORDER_ID_MIN_LEN {
            out.push(Violation::OrderIdTooShort);
        }
        if !is_digits_only(order_id) {
            out.push(Violation::OrderIdNotDigits);
        }
    }

    if let Some(name) = order.order_name.as_deref() {
        if utf16_len(name) > ORDER_NAME_MAX_LEN {
            out.push(Violation::OrderNameTooLong);
        }
    }

    if let Some(account) = order.customer_account.as_deref() {
        if utf16_len(account) > CUSTOMER_ACCOUNT_MAX_LEN {
            out.push(Violation::CustomerAccountTooLong);
        }
    }

    if let Some(terms) = order.payment_terms.as_deref() {
        if terms.parse::<PaymentTerms>().is_err() {
            out.push(Violation::UnknownPaymentTerms {
                value: terms.to_string(),
            });
        }
    }

    if let Some(currency) = order.currency.as_deref() {
        if currency.parse::<Currency>().is_err() {
            out.push(Violation::UnknownCurrency {
                value: currency.to_string(),
            });
        }
    }

    out
}

fn addresses(order: &OrderDocument) -> impl Iterator<Item = (AddressRole, &AddressDocument)> {
    [
        (AddressRole::BillTo, order.bill_to.as_ref()),
        (AddressRole::ShipTo, order.ship_to.as_ref()),
    ]
    .into_iter()
    .filter_map(|(role, address)| address.map(|a| (role, a)))
}

fn requires_region(country: &str) -> bool {
    matches!(country, "US" | "CA")
}

/// Length in UTF-16 code units, the unit the published limits are stated in.
/// Characters outside the BMP count twice.
fn utf16_len(s: &str) -> usize {
    s.encode_utf16().count()
}

/// ASCII `0`-`9` only. The empty string passes; length is a separate rule.
fn is_digits_only(s: &str) -> bool {
    s.chars().all(|c| c.is_ascii_digit())
}

/// An order that passed every rule, with its closed-set fields typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidatedOrder {
    pub order_id: String,
    pub order_name: String,
    pub customer_account: Option<String>,
    pub payment_terms: PaymentTerms,
    pub tax_exempt: Option<bool>,
    pub currency: Currency,
    pub bill_to: ValidatedAddress,
    pub ship_to: ValidatedAddress,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidatedAddress {
    pub email_address: String,
    pub first_name: String,
    pub last_name: String,
    pub street_line1: String,
    pub street_line2: Option<String>,
    pub street_line3: Option<String>,
    pub city: String,
    pub country: String,
    pub region: Option<String>,
}

impl OrderDocument {
    /// Validate and convert into a [`ValidatedOrder`].
    ///
    /// Fails with [`DomainError::Validation`] carrying every message from
    /// [`validate`].
    pub fn into_validated(self) -> DomainResult<ValidatedOrder> {
        let messages = validate(&self);
        if !messages.is_empty() {
            return Err(DomainError::Validation(messages));
        }

        Ok(ValidatedOrder {
            order_id: required(self.order_id, "orderId")?,
            order_name: required(self.order_name, "orderName")?,
            customer_account: self.customer_account,
            payment_terms: required(self.payment_terms, "paymentTerms")?.parse::<PaymentTerms>()?,
            tax_exempt: self.tax_exempt,
            currency: required(self.currency, "currency")?.parse::<Currency>()?,
            bill_to: required(self.bill_to, "billTo")?.into_validated()?,
            ship_to: required(self.ship_to, "shipTo")?.into_validated()?,
        })
    }
}

impl AddressDocument {
    fn into_validated(self) -> DomainResult<ValidatedAddress> {
        Ok(ValidatedAddress {
            email_address: required(self.email_address, "emailAddress")?
                .trim()
                .to_string(),
            first_name: required(self.first_name, "firstName")?,
            last_name: required(self.last_name, "lastName")?,
            street_line1: required(self.street_line1, "streetLine1")?,
            street_line2: self.street_line2,
            street_line3: self.street_line3,
            city: required(self.city, "city")?,
            country: required(self.country, "country")?,
            region: self.region,
        })
    }
}

fn required<T>(value: Option<T>, property: &str) -> DomainResult<T> {
    value.ok_or_else(|| DomainError::validation([Violation::missing(property).to_string()]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_address() -> AddressDocument {
        AddressDocument {
            email_address: Some("fred.flintstone@bedrock.com".into()),
            first_name: Some("Fred".into()),
            last_name: Some("FlintStone".into()),
            street_line1: Some("1829 Pine Hall Rd.".into()),
            street_line2: None,
            street_line3: None,
            city: Some("State College".into()),
            country: Some("US".into()),
            region: Some("PA".into()),
        }
    }

    fn valid_order() -> OrderDocument {
        OrderDocument {
            order_id: Some("123456".into()),
            order_name: Some("1 Year - Minitab Statistical Software".into()),
            customer_account: Some("Bedrock, LLC".into()),
            payment_terms: Some("NET30".into()),
            tax_exempt: Some(false),
            currency: Some("USD".into()),
            bill_to: Some(valid_address()),
            ship_to: Some(valid_address()),
        }
    }

    #[test]
    fn valid_order_has_no_violations() {
        assert!(validate(&valid_order()).is_empty());
    }

    #[test]
    fn short_order_id_is_reported() {
        let mut order = valid_order();
        order.order_id = Some("1234".into());
        assert_eq!(validate(&order), vec!["Order Id must be a minimum length of 6"]);
    }

    #[test]
    fn non_digit_order_id_is_reported() {
        let mut order = valid_order();
        order.order_id = Some("123456P".into());
        assert_eq!(validate(&order), vec!["Order Id can only contains digits 0-9"]);
    }

    #[test]
    fn short_non_digit_order_id_reports_both_in_order() {
        let mut order = valid_order();
        order.order_id = Some("12a".into());
        assert_eq!(
            violations(&order),
            vec![Violation::OrderIdTooShort, Violation::OrderIdNotDigits]
        );
    }

    #[test]
    fn non_ascii_digits_are_rejected() {
        let mut order = valid_order();
        order.order_id = Some("١٢٣٤٥٦".into());
        assert_eq!(violations(&order), vec![Violation::OrderIdNotDigits]);
    }

    #[test]
    fn empty_order_id_only_fails_length() {
        let mut order = valid_order();
        order.order_id = Some(String::new());
        assert_eq!(violations(&order), vec![Violation::OrderIdTooShort]);
    }

    #[test]
    fn missing_order_id_is_a_presence_violation_only() {
        let mut order = valid_order();
        order.order_id = None;
        assert_eq!(
            validate(&order),
            vec!["Cannot write a null value for property 'orderId'. Property requires a value."]
        );
    }

    #[test]
    fn unknown_payment_terms_names_the_permitted_set() {
        let mut order = valid_order();
        order.payment_terms = Some("1234".into());
        let messages = validate(&order);
        assert_eq!(messages.len(), 1);
        assert!(messages[0].contains(r#"["Credit","PO","NET30","NET60"]"#));
    }

    #[test]
    fn unknown_currency_names_the_permitted_set() {
        let mut order = valid_order();
        order.currency = Some("usd".into());
        assert_eq!(
            validate(&order),
            vec![r#"Currency must be one of the following values ["USD","AUD","GBP","EUR"]"#]
        );
    }

    #[test]
    fn us_address_without_region_is_reported() {
        let mut order = valid_order();
        if let Some(bill_to) = order.bill_to.as_mut() {
            bill_to.region = Some(String::new());
        }
        assert_eq!(
            validate(&order),
            vec!["Region Must be supplied if Country is US or CA"]
        );
    }

    #[test]
    fn canadian_address_with_null_region_is_reported_per_address() {
        let mut order = valid_order();
        for address in [order.bill_to.as_mut(), order.ship_to.as_mut()].into_iter().flatten() {
            address.country = Some("CA".into());
            address.region = None;
        }
        assert_eq!(
            violations(&order),
            vec![
                Violation::RegionRequired { role: AddressRole::BillTo },
                Violation::RegionRequired { role: AddressRole::ShipTo },
            ]
        );
    }

    #[test]
    fn non_us_ca_address_does_not_need_region() {
        let mut order = valid_order();
        if let Some(bill_to) = order.bill_to.as_mut() {
            bill_to.country = Some("FR".into());
            bill_to.region = Some(String::new());
        }
        assert!(validate(&order).is_empty());
    }

    #[test]
    fn invalid_emails_are_reported_bill_to_first() {
        let mut order = valid_order();
        if let Some(ship_to) = order.ship_to.as_mut() {
            ship_to.email_address = Some("barney@bedrock.".into());
        }
        if let Some(bill_to) = order.bill_to.as_mut() {
            bill_to.email_address = Some("fred".into());
        }
        assert_eq!(
            validate(&order),
            vec![
                "Invalid Bill To email address - fred",
                "Invalid Ship To email address - barney@bedrock.",
            ]
        );
    }

    #[test]
    fn long_name_and_account_are_reported() {
        let mut order = valid_order();
        order.order_name = Some("n".repeat(51));
        order.customer_account = Some("a".repeat(51));
        assert_eq!(
            violations(&order),
            vec![Violation::OrderNameTooLong, Violation::CustomerAccountTooLong]
        );
    }

    #[test]
    fn lengths_count_utf16_code_units() {
        let mut order = valid_order();
        order.order_name = Some("é".repeat(50));
        assert!(validate(&order).is_empty());

        // 26 astral characters are 52 code units.
        order.order_name = Some("😀".repeat(26));
        assert_eq!(violations(&order), vec![Violation::OrderNameTooLong]);

        order.order_name = Some("😀".repeat(25));
        order.customer_account = Some(format!("{}x", "😀".repeat(25)));
        assert_eq!(violations(&order), vec![Violation::CustomerAccountTooLong]);
    }

    #[test]
    fn astral_character_counts_twice_toward_order_id_length() {
        let mut order = valid_order();
        order.order_id = Some("1234😀".into());
        assert_eq!(violations(&order), vec![Violation::OrderIdNotDigits]);

        order.order_id = Some("123😀".into());
        assert_eq!(
            violations(&order),
            vec![Violation::OrderIdTooShort, Violation::OrderIdNotDigits]
        );
    }

    #[test]
    fn customer_account_is_optional() {
        let mut order = valid_order();
        order.customer_account = None;
        assert!(validate(&order).is_empty());
    }

    #[test]
    fn blank_document_lists_top_level_properties() {
        let messages = validate(&OrderDocument::default());
        assert_eq!(messages.len(), 6);
        assert_eq!(
            messages[0],
            "Cannot write a null value for property 'orderId'. Property requires a value."
        );
        assert!(messages[5].contains("'shipTo'"));
    }

    #[test]
    fn blank_address_lists_its_required_properties() {
        let mut order = valid_order();
        order.ship_to = Some(AddressDocument::default());
        let messages = validate(&order);
        assert_eq!(
            messages,
            [
                "emailAddress",
                "firstName",
                "lastName",
                "streetLine1",
                "city",
                "country"
            ]
            .iter()
            .map(|f| format!(
                "Cannot write a null value for property 'shipTo.{f}'. Property requires a value."
            ))
            .collect::<Vec<_>>()
        );
    }

    #[test]
    fn failures_accumulate_in_rule_order() {
        let mut order = valid_order();
        order.order_id = Some("12a".into());
        order.currency = Some("JPY".into());
        order.payment_terms = Some("cash".into());
        if let Some(ship_to) = order.ship_to.as_mut() {
            ship_to.email_address = Some("nope".into());
            ship_to.region = None;
        }
        let v = violations(&order);
        assert_eq!(
            v,
            vec![
                Violation::InvalidEmail {
                    role: AddressRole::ShipTo,
                    email: "nope".into()
                },
                Violation::RegionRequired { role: AddressRole::ShipTo },
                Violation::OrderIdTooShort,
                Violation::OrderIdNotDigits,
                Violation::UnknownPaymentTerms { value: "cash".into() },
                Violation::UnknownCurrency { value: "JPY".into() },
            ]
        );
    }

    #[test]
    fn into_validated_types_the_closed_sets() {
        let validated = valid_order().into_validated().unwrap();
        assert_eq!(validated.payment_terms, PaymentTerms::Net30);
        assert_eq!(validated.currency, Currency::Usd);
        assert_eq!(validated.bill_to.region.as_deref(), Some("PA"));
    }

    #[test]
    fn into_validated_carries_every_message() {
        let mut order = valid_order();
        order.order_id = Some("1234".into());
        order.currency = Some("JPY".into());
        let err = order.into_validated().unwrap_err();
        match err {
            DomainError::Validation(msgs) => assert_eq!(msgs.len(), 2),
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 500,
                ..ProptestConfig::default()
            })]

            /// Validation is a pure function of its input.
            #[test]
            fn validate_is_idempotent(
                order_id in "[0-9A-Za-z]{0,10}",
                name in ".{0,60}",
                account in proptest::option::of(".{0,60}"),
                terms in "[A-Z0-9]{0,6}",
            ) {
                let mut order = valid_order();
                order.order_id = Some(order_id);
                order.order_name = Some(name);
                order.customer_account = account;
                order.payment_terms = Some(terms);

                prop_assert_eq!(validate(&order), validate(&order));
            }

            /// Digit-only ids of sufficient length are always accepted.
            #[test]
            fn long_digit_ids_are_valid(order_id in "[0-9]{6,20}") {
                let mut order = valid_order();
                order.order_id = Some(order_id);
                prop_assert!(validate(&order).is_empty());
            }

            /// An over-long customer account yields exactly one violation and
            /// leaves email reporting untouched.
            #[test]
            fn account_length_is_isolated(len in 51usize..200, bad_email in any::<bool>()) {
                let mut order = valid_order();
                order.customer_account = Some("x".repeat(len));
                if bad_email {
                    if let Some(bill_to) = order.bill_to.as_mut() {
                        bill_to.email_address = Some("not-an-email".into());
                    }
                }

                let v = violations(&order);
                let email_count = v
                    .iter()
                    .filter(|x| matches!(x, Violation::InvalidEmail { .. }))
                    .count();
                prop_assert_eq!(email_count, usize::from(bad_email));
                prop_assert!(v.contains(&Violation::CustomerAccountTooLong));
                prop_assert_eq!(v.len(), 1 + usize::from(bad_email));
            }

            /// Every permitted payment term / currency pair is accepted.
            #[test]
            fn closed_sets_accept_all_members(
                t in proptest::sample::select(PaymentTerms::ALL.to_vec()),
                c in proptest::sample::select(Currency::ALL.to_vec()),
            ) {
                let mut order = valid_order();
                order.payment_terms = Some(t.as_str().to_string());
                order.currency = Some(c.as_str().to_string());
                prop_assert!(validate(&order).is_empty());
            }
        }
    }
}
