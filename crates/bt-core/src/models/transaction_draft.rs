use crate::{CoreError, Result as CoreResult, TransactionType};

/// A validated income or expense entry, ready to be posted.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionDraft {
    pub kind: TransactionType,
    pub amount: f64,
    pub description: String,
    pub category: String,
}

impl TransactionDraft {
    /// Validates raw form input.
    ///
    /// All fields are required and the amount must parse to a finite
    /// value greater than zero.
    #[track_caller]
    pub fn new(
        kind: TransactionType,
        amount: &str,
        description: &str,
        category: &str,
    ) -> CoreResult<Self> {
        let amount = amount.trim();
        let description = description.trim();
        let category = category.trim();

        if amount.is_empty() || description.is_empty() || category.is_empty() {
            return Err(CoreError::validation("Please fill in all fields"));
        }

        let amount = match amount.parse::<f64>() {
            Ok(value) if value.is_finite() && value > 0.0 => value,
            _ => return Err(CoreError::validation("Please enter a valid amount")),
        };

        Ok(Self {
            kind,
            amount,
            description: description.to_string(),
            category: category.to_string(),
        })
    }
}
