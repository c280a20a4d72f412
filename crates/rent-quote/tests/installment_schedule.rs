use chrono::{Duration, NaiveDate};
use rent_quote::quote::export::{schedule_csv, SCHEDULE_HEADER};
use rent_quote::quote::{generate_schedule, Property, QuoteSummary, ScheduleError, CONTRACT_FEE};

fn issued_on() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 9, 24).expect("valid issue date")
}

#[test]
fn contract_fee_spread_over_leading_installments() {
    let rows = generate_schedule(665.0, 5, issued_on()).expect("schedule builds");

    assert_eq!(rows.len(), 12);
    for row in &rows[..5] {
        assert_eq!(row.contract, 400.0);
        assert_eq!(row.total, 1065.0);
    }
    for row in &rows[5..] {
        assert_eq!(row.contract, 0.0);
        assert_eq!(row.total, 665.0);
    }
    let indexes: Vec<u32> = rows.iter().map(|row| row.index).collect();
    assert_eq!(indexes, (1..=12).collect::<Vec<_>>());
}

#[test]
fn schedule_always_has_twelve_rows() {
    for count in 1..=20 {
        let rows = generate_schedule(1200.0, count, issued_on()).expect("schedule builds");
        assert_eq!(rows.len(), 12, "installment count {count}");
    }
}

#[test]
fn contract_portions_sum_to_fee_within_schedule() {
    for count in 1..=12u32 {
        let rows = generate_schedule(1000.0, count, issued_on()).expect("schedule builds");
        let total: f64 = rows.iter().map(|row| row.contract).sum();
        assert!(
            (total - CONTRACT_FEE).abs() < 1e-6,
            "count {count} summed to {total}"
        );
    }
}

#[test]
fn due_dates_advance_thirty_days() {
    let rows = generate_schedule(1450.0, 3, issued_on()).expect("schedule builds");

    assert_eq!(rows[0].due_date, issued_on() + Duration::days(30));
    for pair in rows.windows(2) {
        assert_eq!(pair[1].due_date - pair[0].due_date, Duration::days(30));
    }
}

#[test]
fn zero_installments_fail_instead_of_dividing() {
    assert_eq!(
        generate_schedule(665.0, 0, issued_on()),
        Err(ScheduleError::ZeroInstallments)
    );
}

#[test]
fn quote_and_csv_agree_on_amounts() {
    let property = Property::Studio { parking_spots: 4 };
    let summary = QuoteSummary::new(&property, 2).expect("summary builds");
    let rows = generate_schedule(summary.monthly_rent, summary.contract_installments, issued_on())
        .expect("schedule builds");
    let csv = schedule_csv(&rows).expect("csv renders");

    let lines: Vec<&str> = csv.trim_end().split("\r\n").collect();
    assert_eq!(lines.len(), 13);
    assert_eq!(lines[0], SCHEDULE_HEADER.join(","));
    assert_eq!(lines[1], "1,24/10/2025,1570.00,1000.00,2570.00");
    assert_eq!(lines[2], "2,23/11/2025,1570.00,1000.00,2570.00");
    assert_eq!(lines[3], "3,23/12/2025,1570.00,0.00,1570.00");
    assert!(lines[12].starts_with("12,19/09/2026,"));
}
