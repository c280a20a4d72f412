pub mod export;
pub mod property;
mod request;
pub mod schedule;
mod summary;

pub use property::{compute_monthly_rent, Property, PropertyCategory, CONTRACT_FEE};
pub use request::{QuoteRequest, ValidatedQuote};
pub use schedule::{generate_schedule, InstallmentRow, ScheduleError};
pub use summary::QuoteSummary;

/// Smallest number of contract installments offered to customers.
pub const MIN_CONTRACT_INSTALLMENTS: u32 = 1;
/// Largest number of contract installments offered to customers.
pub const MAX_CONTRACT_INSTALLMENTS: u32 = 5;
/// Installment count used when a request does not choose one.
pub const DEFAULT_CONTRACT_INSTALLMENTS: u32 = 5;

/// Failures raised while turning customer input into a quote.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuoteError {
    #[error("invalid property type '{0}'")]
    InvalidCategory(String),
    #[error("contract installments must be between {min} and {max}, got {actual}")]
    InstallmentsOutOfRange { actual: u32, min: u32, max: u32 },
    #[error(transparent)]
    Schedule(#[from] ScheduleError),
}

pub(crate) fn check_installments(installments: u32) -> Result<u32, QuoteError> {
    if (MIN_CONTRACT_INSTALLMENTS..=MAX_CONTRACT_INSTALLMENTS).contains(&installments) {
        Ok(installments)
    } else {
        Err(QuoteError::InstallmentsOutOfRange {
            actual: installments,
            min: MIN_CONTRACT_INSTALLMENTS,
            max: MAX_CONTRACT_INSTALLMENTS,
        })
    }
}
