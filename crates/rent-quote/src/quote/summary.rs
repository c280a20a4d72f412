use serde::Serialize;
use std::fmt;

use super::property::{Property, PropertyCategory, CONTRACT_FEE};
use super::{check_installments, QuoteError};

/// Contract terms shown to the customer alongside the monthly rent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuoteSummary {
    pub property_type: PropertyCategory,
    pub monthly_rent: f64,
    pub contract_fee: f64,
    pub contract_installments: u32,
    pub installment_value: f64,
}

impl QuoteSummary {
    pub fn new(property: &Property, contract_installments: u32) -> Result<Self, QuoteError> {
        let contract_installments = check_installments(contract_installments)?;

        Ok(Self {
            property_type: property.category(),
            monthly_rent: property.monthly_rent(),
            contract_fee: CONTRACT_FEE,
            contract_installments,
            installment_value: CONTRACT_FEE / f64::from(contract_installments),
        })
    }
}

impl fmt::Display for QuoteSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  - - - Monthly Rent Quote - - - ")?;
        writeln!(f, "Property type: {}", self.property_type)?;
        writeln!(f, "Monthly rent: R${:.2}", self.monthly_rent)?;
        writeln!(f, "Contract fee: R${:.2}", self.contract_fee)?;
        writeln!(
            f,
            "Contract installments: {} x of R${:.2}",
            self.contract_installments, self.installment_value
        )?;
        write!(f, "{}", "-".repeat(40))
    }
}
