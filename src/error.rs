use crate::checkout::Field;

/// A single failed form field. Submission collects every failure rather than
/// stopping at the first so the whole form can be marked up in one pass.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("{field}: {message}")]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

impl FieldError {
    pub fn new(field: Field, message: &str) -> Self {
        Self {
            field,
            message: message.to_string(),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum CheckoutError {
    #[error("cart is empty")]
    EmptyCart,
    #[error("{} form field(s) failed validation", .0.len())]
    Invalid(Vec<FieldError>),
    #[error("order has already been placed")]
    AlreadyCompleted,
    #[error("payment processing failed: {0}")]
    Processing(String),
    #[error("payment processing was cancelled")]
    Cancelled,
    #[error(transparent)]
    Storage(#[from] sled::Error),
    #[error(transparent)]
    Encoding(#[from] serde_json::Error),
}

impl CheckoutError {
    /// The field errors carried by a validation failure, empty otherwise.
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            CheckoutError::Invalid(errors) => errors,
            _ => &[],
        }
    }
}
