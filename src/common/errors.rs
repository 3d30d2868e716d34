use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing environment variable {0}")]
    Missing(&'static str),

    #[error("Invalid value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Failures reported by the external auth/storage provider.
///
/// `Api` carries the provider's own message so it can be shown to the
/// user unmodified.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("{0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected provider response: {0}")]
    Decode(String),
}

impl ProviderError {
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// True when the provider refused the credentials it was given.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Api { status: 401 | 403, .. })
    }
}

#[derive(Error, Debug, Clone, Copy, Eq, PartialEq)]
pub enum WizardError {
    #[error("Please fill in all the details.")]
    MissingFields,

    #[error("Passwords do not match.")]
    PasswordMismatch,

    #[error("Please select a payment method")]
    MissingPaymentMethod,

    #[error("Payment screenshot required")]
    MissingEvidence,

    #[error("Registration can only be completed from the payment step")]
    NotAtPayment,
}

/// Problems reading the payment step's multipart body.
#[derive(Error, Debug)]
pub enum UploadError {
    #[error("Payment screenshot must be at most {limit} bytes")]
    TooLarge { limit: usize },

    #[error("Could not read the uploaded form: {0}")]
    Malformed(String),
}
