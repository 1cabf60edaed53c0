//! Data transfer objects

pub mod invoices;
