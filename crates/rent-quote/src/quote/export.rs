use csv::{Terminator, WriterBuilder};
use std::io::Write;

use super::schedule::InstallmentRow;

/// File name offered to browsers downloading a schedule.
pub const SCHEDULE_FILE_NAME: &str = "orcamento_12_parcelas.csv";

pub const SCHEDULE_HEADER: [&str; 5] = [
    "Parcela",
    "Data de Vencimento",
    "Valor do Aluguel (R$)",
    "Valor do Contrato (R$)",
    "Valor Total da Parcela (R$)",
];

const DUE_DATE_FORMAT: &str = "%d/%m/%Y";

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to write schedule CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to flush schedule CSV: {0}")]
    Io(#[from] std::io::Error),
    #[error("schedule CSV is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// MIME type of the exported schedule.
pub fn schedule_mime() -> mime::Mime {
    mime::TEXT_CSV
}

/// Value for the `Content-Disposition` header of a schedule download.
pub fn schedule_disposition() -> String {
    format!("attachment; filename={SCHEDULE_FILE_NAME}")
}

/// Writes the header and one record per row, CRLF-terminated.
pub fn write_schedule<W: Write>(sink: W, rows: &[InstallmentRow]) -> Result<(), ExportError> {
    let mut writer = WriterBuilder::new()
        .terminator(Terminator::CRLF)
        .from_writer(sink);

    writer.write_record(SCHEDULE_HEADER)?;
    for row in rows {
        writer.write_record([
            row.index.to_string(),
            row.due_date.format(DUE_DATE_FORMAT).to_string(),
            format!("{:.2}", row.rent),
            format!("{:.2}", row.contract),
            format!("{:.2}", row.total),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

pub fn schedule_csv(rows: &[InstallmentRow]) -> Result<String, ExportError> {
    let mut buffer = Vec::new();
    write_schedule(&mut buffer, rows)?;
    Ok(String::from_utf8(buffer)?)
}
