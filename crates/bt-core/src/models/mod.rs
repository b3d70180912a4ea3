pub mod balance;
pub mod budget;
pub mod lenient;
pub mod report;
pub mod transaction;
pub mod transaction_draft;
pub mod transaction_type;
