use serde::Deserialize;

use super::property::{Property, PropertyCategory};
use super::{check_installments, QuoteError};

/// Customer input for a quote, as submitted by the HTTP form or CLI flags.
///
/// Attributes that do not apply to the chosen category are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QuoteRequest {
    pub property_type: String,
    #[serde(default = "default_bedrooms")]
    pub bedrooms: u32,
    #[serde(default)]
    pub has_garage: bool,
    #[serde(default)]
    pub has_children: bool,
    #[serde(default)]
    pub parking_spots: u32,
    #[serde(default)]
    pub contract_installments: Option<u32>,
}

fn default_bedrooms() -> u32 {
    1
}

/// A request that passed boundary validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedQuote {
    pub property: Property,
    pub contract_installments: u32,
}

impl QuoteRequest {
    pub fn new(property_type: impl Into<String>) -> Self {
        Self {
            property_type: property_type.into(),
            bedrooms: default_bedrooms(),
            has_garage: false,
            has_children: false,
            parking_spots: 0,
            contract_installments: None,
        }
    }

    pub fn validate(self, default_installments: u32) -> Result<ValidatedQuote, QuoteError> {
        let category: PropertyCategory = self.property_type.parse()?;

        let property = match category {
            PropertyCategory::Apartment => Property::Apartment {
                bedrooms: self.bedrooms,
                has_garage: self.has_garage,
                has_children: self.has_children,
            },
            PropertyCategory::House => Property::House {
                bedrooms: self.bedrooms,
                has_garage: self.has_garage,
            },
            PropertyCategory::Studio => Property::Studio {
                parking_spots: self.parking_spots,
            },
        };

        // Zero means "not chosen" on the form, same as an absent field.
        let chosen = self
            .contract_installments
            .filter(|count| *count != 0)
            .unwrap_or(default_installments);
        let contract_installments = check_installments(chosen)?;

        Ok(ValidatedQuote {
            property,
            contract_installments,
        })
    }
}
