#![deny(missing_docs)]

//! # brandgate-core: ZIP Routing & Brand Selection
//!
//! Every other crate in the workspace depends on this one. It has no
//! internal dependencies and performs no I/O beyond reading a site
//! document at startup.
//!
//! ## Design Principles
//!
//! 1. **Immutable catalog, scoped selection.** A [`Site`] and its
//!    [`BrandRegistry`] never change after load. The only mutable state is
//!    a [`BrandSelection`], which borrows the registry and belongs to a
//!    single visitor.
//!
//! 2. **Exact ZIP matching.** [`PrefixTable`] keys are two ASCII digits;
//!    a ZIP is five ASCII digits. Nothing is trimmed or normalized.
//!
//! 3. **Signaled failures.** An unknown brand switch returns
//!    [`SwitchError::UnknownBrand`] and leaves the selection as it was.
//!    Configuration problems are [`ConfigError`]s and are fatal to the
//!    caller.

pub mod attribution;
pub mod brand;
pub mod error;
pub mod landing;
pub mod lead;
pub mod registry;
pub mod site;
pub mod zip;

// Re-export primary types at crate root for ergonomic imports.
pub use attribution::Attribution;
pub use brand::{BrandConfig, BrandId};
pub use error::{
    ConfigError, LeadError, RouteError, SwitchError, ValidationError, MALFORMED_ZIP_MESSAGE,
    UNSERVED_AREA_MESSAGE,
};
pub use landing::{LandingRequest, LandingView};
pub use lead::{LeadReceipt, LeadSubmission, LEAD_RECEIVED};
pub use registry::{BrandRegistry, BrandSelection};
pub use site::{Site, SiteDocument, BUILTIN_SITE_JSON};
pub use zip::{PrefixTable, ZipCode, ZipPrefixRule};
