//! # intl-tel-input
//!
//! Phone number normalization for international telephone inputs.
//!
//! Raw keystrokes plus the selected country go in; a validated, formatted
//! number, a possibly corrected country and a stable caret position come
//! out. Countries sharing a calling code (`+1`, `+44`, `+7`, ...) are told
//! apart by area code and catalog priority.
//!
//! ## Quick Start
//!
//! ```rust
//! use intl_tel_input::{CountryCatalog, NumberValidator, RegionCode, ValidationOutcome};
//!
//! let catalog = CountryCatalog::bundled();
//! let validator = NumberValidator::default();
//! let us = RegionCode::new("US").unwrap();
//!
//! // A Dominica number typed while the US is selected.
//! let result = validator.validate(Some("+1 767 225 1234"), Some(&us), catalog.countries());
//!
//! assert_eq!(result.outcome, ValidationOutcome::Valid);
//! assert_eq!(result.country.unwrap().as_str(), "DM");
//! assert!(result.country_changed);
//! ```
//!
//! ## Architecture
//!
//! ```text
//! PhoneInput<G>            (per-field session, optional)
//!     │
//!     ├── GeoLocator       (initial country: GeoIpClient, ...)
//!     ▼
//! NumberValidator<G> ──► infer_country ──► CountryCatalog
//!     │
//!     ├── max_length       (digit limit, adaptive field length)
//!     ▼
//! PhoneGrammar             (trait: LibPhoneNumber, ...)
//! ```
//!
//! `adjust_cursor` is independent and only needs the old and new field text.
//!
//! ## Features
//!
//! - `tracing` - OpenTelemetry tracing instrumentation (enabled by default)

pub mod catalog;
pub mod cursor;
pub mod errors;
pub mod geo_ip;
pub mod grammar;
pub mod inference;
pub mod input;
pub mod max_length;
pub mod types;
pub mod validator;

// Re-export commonly used types at the crate root
pub use catalog::{CatalogOptions, Country, CountryCatalog, CountryNames, CountryRecord, InputMask};
pub use cursor::{adjust_cursor, adjust_cursor_with};
pub use errors::{CatalogError, GrammarError};
pub use geo_ip::{GeoData, GeoIpClient, GeoIpError, GeoLocator};
pub use grammar::{LibPhoneNumber, ParsedNumber, PhoneGrammar};
pub use inference::{CountryInference, infer_country};
pub use input::{FieldError, InputUpdate, PhoneInput, PhoneInputConfig, TextLabels};
pub use types::{DialCode, FormatKind, NumberKind, RegionCode};
pub use validator::{NumberValidator, Validation, ValidationOutcome, ValidatorConfig};
