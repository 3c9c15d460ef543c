//! XLSX rendering for the customer export.
//!
//! The output workbook contains a single sheet with a fixed 8-column layout;
//! column labels and order match the download contract exactly.

use chrono::{DateTime, Utc};
use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};
use veltis_db::Customer;

/// Sheet name of the export workbook.
pub const SHEET_NAME: &str = "Customers";

/// Column labels, in the order they appear in the sheet.
pub const EXPORT_HEADERS: [&str; 8] = [
    "Customer Account",
    "Customer Name",
    "Invitation Code",
    "Password",
    "Create Time",
    "Update Time",
    "Created By",
    "Updated By",
];

/// Render one workbook with a header row and one row per customer,
/// serialized to XLSX bytes.
pub fn write_workbook(customers: &[Customer]) -> Result<Vec<u8>, XlsxError> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;

    let header_format = Format::new().set_bold();
    write_headers(sheet, &EXPORT_HEADERS, &header_format)?;

    for (i, customer) in customers.iter().enumerate() {
        let row = (i + 1) as u32;
        sheet.write_string(row, 0, &customer.customer_num)?;
        sheet.write_string(row, 1, &customer.customer_name)?;
        sheet.write_string(row, 2, &customer.invitation_code)?;
        sheet.write_string(row, 3, &customer.password)?;
        sheet.write_string(row, 4, format_timestamp(&customer.created_at))?;
        sheet.write_string(row, 5, format_timestamp(&customer.updated_at))?;
        sheet.write_string(row, 6, customer.created_by.to_string())?;
        sheet.write_string(row, 7, customer.updated_by.to_string())?;
    }

    workbook.save_to_buffer()
}

fn write_headers(
    sheet: &mut Worksheet,
    headers: &[&str],
    format: &Format,
) -> Result<(), XlsxError> {
    for (col, header) in headers.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *header, format)?;
    }
    Ok(())
}

fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M:%S").to_string()
}
