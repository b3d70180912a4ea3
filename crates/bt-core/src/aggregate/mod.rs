//! Pure merge of fetched resources into display-ready view models.
//!
//! Aggregation never fails: an unavailable resource degrades its fields to
//! [`ViewDefaults`](view_defaults::ViewDefaults) and adds a notice. The
//! clock is passed in so identical inputs always give identical output.

pub mod analytics;
pub mod dashboard;
pub mod date_label;
pub mod percent;
pub mod transaction_row;
pub mod transactions;
pub mod view_defaults;
