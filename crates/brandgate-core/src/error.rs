//! # Error Hierarchy
//!
//! Structured error types for brandgate, built with `thiserror`.
//!
//! Routing and selection failures are recoverable and carry the offending
//! input. [`ConfigError`] is the only fatal class: a process that cannot
//! load its site configuration cannot serve any brand.

use thiserror::Error;

/// User-facing message for a ZIP that is not five digits.
pub const MALFORMED_ZIP_MESSAGE: &str = "Please enter a valid 5-digit ZIP code.";

/// User-facing message for a well-formed ZIP outside every brand's area.
pub const UNSERVED_AREA_MESSAGE: &str = "Sorry, we do not serve your area yet.";

/// Validation errors for domain primitive newtypes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// ZIP code is not exactly five ASCII digits.
    #[error("invalid ZIP code: \"{0}\" (expected 5 digits)")]
    InvalidZip(String),

    /// Brand identifier is empty or whitespace-only.
    #[error("invalid brand ID: must be non-empty")]
    InvalidBrandId,
}

/// Why a ZIP did not route to a brand.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// The input is not a 5-digit ZIP.
    #[error("malformed ZIP code: \"{0}\"")]
    Malformed(String),

    /// The ZIP is well-formed but no brand serves its prefix.
    #[error("ZIP code {0} is outside every served area")]
    Unserved(String),
}

impl RouteError {
    /// The message shown to the visitor for this rejection.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Malformed(_) => MALFORMED_ZIP_MESSAGE,
            Self::Unserved(_) => UNSERVED_AREA_MESSAGE,
        }
    }
}

/// Failure of an explicit brand switch.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SwitchError {
    /// The requested brand is not in the registry. Selection is unchanged.
    #[error("unknown brand: \"{0}\"")]
    UnknownBrand(String),
}

/// Rejection of a lead submission.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LeadError {
    /// The payload is valid JSON but not an object.
    #[error("lead payload must be a JSON object, got {0}")]
    NotAnObject(&'static str),
}

/// Fatal configuration errors raised while loading the site.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The brand list is empty.
    #[error("no brands configured")]
    NoBrands,

    /// Two brand records share an id.
    #[error("duplicate brand id \"{0}\"")]
    DuplicateBrand(String),

    /// More than one brand is flagged as the default.
    #[error("more than one default brand: {0:?}")]
    MultipleDefaults(Vec<String>),

    /// A brand record failed field validation.
    #[error("brand #{index}: {reason}")]
    InvalidBrand {
        /// Position of the record in the brand list.
        index: usize,
        /// What is wrong with it.
        reason: String,
    },

    /// A ZIP prefix key is not exactly two ASCII digits.
    #[error("invalid ZIP prefix \"{0}\" (expected 2 digits)")]
    InvalidPrefix(String),

    /// A ZIP prefix appears twice in the table.
    #[error("duplicate ZIP prefix \"{0}\"")]
    DuplicatePrefix(String),

    /// A ZIP prefix points at a brand that is not registered.
    #[error("ZIP prefix \"{prefix}\" maps to unknown brand \"{brand}\"")]
    DanglingPrefix {
        /// The prefix key.
        prefix: String,
        /// The missing brand id.
        brand: String,
    },

    /// A phone override has a blank source or number.
    #[error("invalid phone override for source \"{0}\"")]
    InvalidPhoneOverride(String),

    /// The document could not be parsed as YAML.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The document could not be parsed as JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The document could not be read.
    #[error("I/O error reading {path}: {source}")]
    Io {
        /// Path that failed.
        path: String,
        /// Underlying error.
        source: std::io::Error,
    },
}
