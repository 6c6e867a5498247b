//! Per-field session tying the pipeline together: country selection,
//! per-keystroke validation, caret handling and form errors.

pub(crate) mod config;
pub(crate) mod errors;
pub(crate) mod labels;
pub(crate) mod session;

pub use config::{PhoneInputConfig, PhoneInputConfigBuilder};
pub use errors::FieldError;
pub use labels::TextLabels;
pub use session::{InputUpdate, PhoneInput};
