// Salary engine: line items, totals, Indian-locale currency and amount-in-words.
// Everything below handlers.rs is pure and synchronous.

pub mod currency;
pub mod handlers;
pub mod models;
pub mod slip;
pub mod totals;
pub mod validation;
pub mod words;
