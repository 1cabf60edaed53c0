//! HTTP handlers

pub mod invoices;
