use chrono::{Local, NaiveDate};
use clap::Args;
use rent_quote::config::AppConfig;
use rent_quote::error::AppError;
use rent_quote::quote::export::write_schedule;
use rent_quote::quote::{generate_schedule, InstallmentRow, QuoteRequest, QuoteSummary};
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

/// Property attributes shared by the quote and schedule commands.
#[derive(Args, Debug, Clone)]
pub(crate) struct PropertyArgs {
    /// Property category: apartment, house or studio
    #[arg(long)]
    pub(crate) property_type: String,
    /// Number of bedrooms (apartments and houses)
    #[arg(long, default_value_t = 1)]
    pub(crate) bedrooms: u32,
    /// Include a garage (apartments and houses)
    #[arg(long)]
    pub(crate) garage: bool,
    /// Household includes children (apartments)
    #[arg(long)]
    pub(crate) children: bool,
    /// Parking spots (studios)
    #[arg(long, default_value_t = 0)]
    pub(crate) parking_spots: u32,
    /// Contract installments, 1 to 5 (defaults to QUOTE_DEFAULT_INSTALLMENTS)
    #[arg(long)]
    pub(crate) installments: Option<u32>,
}

impl PropertyArgs {
    fn into_request(self) -> QuoteRequest {
        QuoteRequest {
            property_type: self.property_type,
            bedrooms: self.bedrooms,
            has_garage: self.garage,
            has_children: self.children,
            parking_spots: self.parking_spots,
            contract_installments: self.installments,
        }
    }
}

#[derive(Args, Debug)]
pub(crate) struct QuoteArgs {
    #[command(flatten)]
    pub(crate) property: PropertyArgs,
}

#[derive(Args, Debug)]
pub(crate) struct ScheduleArgs {
    #[command(flatten)]
    pub(crate) property: PropertyArgs,
    /// Issue date the schedule counts from (YYYY-MM-DD, defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) issued_on: Option<NaiveDate>,
    /// Write the CSV to this file instead of stdout
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
}

pub(crate) fn run_quote(args: QuoteArgs) -> Result<(), AppError> {
    let summary = build_summary(args.property, default_installments()?)?;
    println!("{summary}");
    Ok(())
}

pub(crate) fn run_schedule(args: ScheduleArgs) -> Result<(), AppError> {
    let ScheduleArgs {
        property,
        issued_on,
        output,
    } = args;

    let issued_on = issued_on.unwrap_or_else(|| Local::now().date_naive());
    let rows = build_schedule(property, default_installments()?, issued_on)?;

    match output {
        Some(path) => {
            let file = File::create(&path)?;
            write_schedule(BufWriter::new(file), &rows)?;
            eprintln!("Schedule written to {}", path.display());
        }
        None => write_schedule(io::stdout().lock(), &rows)?,
    }

    Ok(())
}

fn default_installments() -> Result<u32, AppError> {
    Ok(AppConfig::load()?.quote.default_installments)
}

fn build_summary(
    property: PropertyArgs,
    default_installments: u32,
) -> Result<QuoteSummary, AppError> {
    let validated = property.into_request().validate(default_installments)?;
    Ok(QuoteSummary::new(
        &validated.property,
        validated.contract_installments,
    )?)
}

fn build_schedule(
    property: PropertyArgs,
    default_installments: u32,
    issued_on: NaiveDate,
) -> Result<Vec<InstallmentRow>, AppError> {
    let validated = property.into_request().validate(default_installments)?;
    let rows = generate_schedule(
        validated.property.monthly_rent(),
        validated.contract_installments,
        issued_on,
    )?;
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rent_quote::quote::{PropertyCategory, QuoteError};

    fn property_args(property_type: &str) -> PropertyArgs {
        PropertyArgs {
            property_type: property_type.to_string(),
            bedrooms: 1,
            garage: false,
            children: false,
            parking_spots: 0,
            installments: None,
        }
    }

    #[test]
    fn summary_uses_default_installments() {
        let summary = build_summary(property_args("apartment"), 5).expect("summary builds");

        assert_eq!(summary.property_type, PropertyCategory::Apartment);
        assert_eq!(summary.contract_installments, 5);
        assert_eq!(summary.installment_value, 400.0);
    }

    #[test]
    fn schedule_reflects_chosen_installments() {
        let args = PropertyArgs {
            installments: Some(4),
            ..property_args("house")
        };
        let issued_on = NaiveDate::from_ymd_opt(2025, 9, 24).expect("valid date");
        let rows = build_schedule(args, 5, issued_on).expect("schedule builds");

        assert_eq!(rows.len(), 12);
        assert_eq!(rows[3].contract, 500.0);
        assert_eq!(rows[4].contract, 0.0);
        assert_eq!(rows[0].total, 1400.0);
    }

    #[test]
    fn unknown_property_type_is_reported() {
        let err = build_summary(property_args("loft"), 5).unwrap_err();
        assert!(matches!(
            err,
            AppError::Quote(QuoteError::InvalidCategory(ref tag)) if tag == "loft"
        ));
    }
}
