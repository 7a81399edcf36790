//! Simplified Form 1040 document rendering.
//!
//! The renderer is a sink: it consumes the flat calculation record and
//! produces a self-contained HTML document by placeholder substitution over
//! an embedded template. Nothing here recomputes tax figures; the record
//! arrives fully assembled.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ten40_core::FilingStatus;
use ten40_core::money::format_usd;

const TEMPLATE: &str = include_str!("form.html");
const CSS: &str = include_str!("form.css");

/// Flat record consumed by the renderer, produced by the web layer from a
/// completed calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormData {
    pub income: Decimal,
    pub deductions: Decimal,
    pub status: FilingStatus,
    pub tax_owed: Decimal,
    pub after_tax_income: Decimal,
    pub taxable_income: Decimal,
    #[serde(default)]
    pub federal_withheld: Decimal,
    pub is_refund: bool,
    #[serde(default)]
    pub net_payment: Decimal,
}

/// Renders the filled 1040 summary document.
///
/// `prepared_on` is stamped by the caller so rendering itself stays
/// deterministic.
pub fn render_form(data: &FormData, tax_year: i32, prepared_on: &str) -> String {
    let status_label = match data.status {
        FilingStatus::Single => "Single",
        FilingStatus::Married => "Married Filing Jointly",
    };

    let (payment_section, payment_label, payment_class) = if data.is_refund {
        ("Refund", "Refund Amount", "refund")
    } else {
        ("Amount Owed", "Additional Tax Owed", "owed")
    };

    TEMPLATE
        .replace("__CSS__", CSS)
        .replace("__TAX_YEAR__", &tax_year.to_string())
        .replace("__STATUS__", status_label)
        .replace("__PREPARED__", prepared_on)
        .replace("__INCOME__", &format_usd(data.income))
        .replace("__AGI__", &format_usd(data.income))
        .replace("__DEDUCTIONS__", &format_usd(data.deductions))
        .replace("__TAXABLE_INCOME__", &format_usd(data.taxable_income))
        .replace("__TAX_OWED__", &format_usd(data.tax_owed))
        .replace("__AFTER_TAX__", &format_usd(data.after_tax_income))
        .replace("__WITHHELD__", &format_usd(data.federal_withheld))
        .replace("__PAYMENT_SECTION__", payment_section)
        .replace("__PAYMENT_LABEL__", payment_label)
        .replace("__PAYMENT_CLASS__", payment_class)
        .replace("__NET_PAYMENT__", &format_usd(data.net_payment))
}
