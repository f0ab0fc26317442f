//! Spreadsheet export of the order list.
//!
//! A pure data-to-bytes transform: the (already filtered and sorted)
//! orders become one worksheet with a header row and one row per order.
//! No network side effects; the route handler wraps the bytes in a file
//! download response.

use marigold_client::Order;
use rust_decimal::prelude::ToPrimitive;
use rust_xlsxwriter::{Workbook, Worksheet, XlsxError};

/// Column headers, in sheet order.
const HEADERS: [&str; 9] = [
    "Order",
    "Date",
    "Customer",
    "Status",
    "Payment",
    "Items",
    "Total",
    "Tracking",
    "Carrier",
];

/// Serialize orders into an `.xlsx` workbook.
///
/// # Errors
///
/// Returns [`XlsxError`] if the workbook cannot be assembled; writing is
/// in-memory, so this does not happen for well-formed input.
pub fn orders_to_xlsx(orders: &[Order]) -> Result<Vec<u8>, XlsxError> {
    let mut workbook = Workbook::new();
    let mut worksheet = Worksheet::new();

    for (col, header) in HEADERS.iter().enumerate() {
        worksheet.write_string(0, col_num(col), *header)?;
    }

    let mut row: u32 = 1;
    for order in orders {
        let item_count: i64 = order.items.iter().map(|item| item.quantity).sum();

        worksheet.write_string(row, 0, &order.order_number)?;
        worksheet.write_string(row, 1, &order.created_at.format("%Y-%m-%d %H:%M").to_string())?;
        worksheet.write_string(row, 2, &order.customer_name())?;
        worksheet.write_string(row, 3, order.status.label())?;
        worksheet.write_string(row, 4, order.payment_status.label())?;
        // Counts and totals are bounded well below f64 precision; this is
        // display data.
        #[allow(clippy::cast_precision_loss)]
        worksheet.write_number(row, 5, item_count as f64)?;
        worksheet.write_number(row, 6, order.total.to_f64().unwrap_or(0.0))?;
        worksheet.write_string(
            row,
            7,
            order.shipping.tracking_number.as_deref().unwrap_or(""),
        )?;
        worksheet.write_string(row, 8, order.shipping.carrier.as_deref().unwrap_or(""))?;
        row += 1;
    }

    workbook.push_worksheet(worksheet);
    workbook.save_to_buffer()
}

/// Column index as the sheet column type.
fn col_num(col: usize) -> u16 {
    u16::try_from(col).unwrap_or(u16::MAX)
}

/// File name offered for the download.
#[must_use]
pub fn export_file_name(date: chrono::NaiveDate) -> String {
    format!("marigold-orders-{date}.xlsx")
}
