use std::num::ParseFloatError;

use failure::Fail;

#[derive(Debug, Fail)]
pub enum CoordinatesError {
    /// The text did not contain a `,` separating latitude and longitude.
    #[fail(display = "expected \"<latitude>,<longitude>\", got {:?}", _0)]
    MissingLongitude(String),

    #[fail(display = "invalid {} {:?}: {}", axis, value, cause)]
    InvalidNumber {
        axis: &'static str,
        value: String,
        #[cause] cause: ParseFloatError,
    },

    /// A slice based constructor received fewer values than it reads.
    #[fail(display = "expected at least {} values, got {}", expected, found)]
    NotEnoughValues {
        expected: usize,
        found: usize,
    },
}
