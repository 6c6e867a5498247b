//! [`PhoneGrammar`] backed by the `phonenumber` crate (libphonenumber metadata).

use super::{ParsedNumber, PhoneGrammar};
use crate::errors::GrammarError;
use crate::types::{DialCode, FormatKind, NumberKind, RegionCode};
use phonenumber::metadata::DATABASE;
use phonenumber::{Mode, PhoneNumber, country};
use std::panic::{self, AssertUnwindSafe};

#[cfg(feature = "tracing")]
use tracing::warn;

/// Grammar engine using Google's libphonenumber metadata via `phonenumber`.
///
/// Every call into the engine runs behind `catch_unwind`: the engine has a few
/// internal unwraps on odd input, and a panic there must end up as
/// [`GrammarError::Panicked`] rather than tearing down the caller.
#[derive(Debug, Clone, Copy, Default)]
pub struct LibPhoneNumber;

impl LibPhoneNumber {
    /// Create a new engine handle. The metadata database is shared and lazily loaded.
    pub fn new() -> Self {
        Self
    }

    fn region_id(region: &RegionCode) -> Option<country::Id> {
        region.as_str().parse::<country::Id>().ok()
    }
}

fn guarded<T>(operation: &'static str, f: impl FnOnce() -> T) -> Result<T, GrammarError> {
    panic::catch_unwind(AssertUnwindSafe(f)).map_err(|_| {
        #[cfg(feature = "tracing")]
        warn!(operation, "phonenumber panicked, treating as grammar failure");

        GrammarError::Panicked { operation }
    })
}

fn mode(kind: FormatKind) -> Mode {
    match kind {
        FormatKind::E164 => Mode::E164,
        FormatKind::International => Mode::International,
        FormatKind::National => Mode::National,
        FormatKind::Rfc3966 => Mode::Rfc3966,
    }
}

impl ParsedNumber for PhoneNumber {
    fn calling_code(&self) -> DialCode {
        DialCode::from_value(self.code().value())
    }

    fn national_number(&self) -> String {
        let national = self.national();
        let zeros = "0".repeat(national.zeros() as usize);
        format!("{zeros}{}", national.value())
    }
}

impl PhoneGrammar for LibPhoneNumber {
    type Number = PhoneNumber;

    fn parse(&self, text: &str, region: Option<&RegionCode>) -> Result<PhoneNumber, GrammarError> {
        let id = match region {
            Some(region) => Some(Self::region_id(region).ok_or_else(|| {
                GrammarError::UnknownRegion {
                    region: region.to_string(),
                }
            })?),
            None => None,
        };

        guarded("parse", || phonenumber::parse(id, text))?
            .map_err(|e| GrammarError::unparseable(text, e))
    }

    fn format(&self, number: &PhoneNumber, kind: FormatKind) -> Result<String, GrammarError> {
        guarded("format", || number.format().mode(mode(kind)).to_string())
    }

    fn is_valid(&self, number: &PhoneNumber) -> bool {
        guarded("is_valid", || phonenumber::is_valid(number)).unwrap_or(false)
    }

    fn example_number(&self, region: &RegionCode, kind: NumberKind) -> Option<PhoneNumber> {
        let id = Self::region_id(region)?;
        let metadata = DATABASE.by_id(region.as_str())?;
        let descriptors = metadata.descriptors();

        // libphonenumber answers FIXED_LINE_OR_MOBILE from the fixed-line descriptor.
        let descriptor = match kind {
            NumberKind::Mobile => descriptors.mobile(),
            NumberKind::FixedLine | NumberKind::FixedLineOrMobile => descriptors.fixed_line(),
        }?;
        let example = descriptor.example()?;

        guarded("example_number", || phonenumber::parse(Some(id), example))
            .ok()?
            .ok()
    }
}
