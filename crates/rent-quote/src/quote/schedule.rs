use chrono::{Duration, NaiveDate};

use super::property::CONTRACT_FEE;

/// Number of rows in every payment schedule.
pub const SCHEDULE_LENGTH: u32 = 12;

/// Days between consecutive due dates; the first due date is one period
/// after the issue date.
pub const PERIOD_DAYS: i64 = 30;

/// A single installment of the yearly payment schedule.
#[derive(Debug, Clone, PartialEq)]
pub struct InstallmentRow {
    pub index: u32,
    pub due_date: NaiveDate,
    pub rent: f64,
    pub contract: f64,
    pub total: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ScheduleError {
    #[error("contract installment count must be greater than zero")]
    ZeroInstallments,
}

/// Builds the 12-row schedule, spreading [`CONTRACT_FEE`] evenly over the
/// first `installment_count` rows.
///
/// The upper bound of `installment_count` is not checked here; counts above
/// twelve leave part of the fee outside the schedule.
pub fn generate_schedule(
    monthly_rent: f64,
    installment_count: u32,
    issued_on: NaiveDate,
) -> Result<Vec<InstallmentRow>, ScheduleError> {
    if installment_count == 0 {
        return Err(ScheduleError::ZeroInstallments);
    }

    let contract_share = CONTRACT_FEE / f64::from(installment_count);
    let first_due = issued_on + Duration::days(PERIOD_DAYS);

    let rows = (1..=SCHEDULE_LENGTH)
        .map(|index| {
            let contract = if index <= installment_count {
                contract_share
            } else {
                0.0
            };
            InstallmentRow {
                index,
                due_date: first_due + Duration::days(PERIOD_DAYS * i64::from(index - 1)),
                rent: monthly_rent,
                contract,
                total: monthly_rent + contract,
            }
        })
        .collect();

    Ok(rows)
}
