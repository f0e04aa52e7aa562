//! Customer invoicing for warehouse services.
//!
//! A [`BillingRecord`] carries its line items plus stored `subtotal`, `tax`
//! and `total`, recomputed whenever the items are written.

pub mod invoice;

pub use invoice::{
    BillingCategory, BillingFilter, BillingItem, BillingPatch, BillingRecord, BillingStatus,
    INVOICE_NUMBER, NewBillingItem, NewBillingRecord, PAYMENT_TERMS_DAYS, TAX_RATE,
};
