//! Canonical, transport-agnostic status codes.
//!
//! The taxonomy is closed and its integers are a stable public contract: transports
//! map them to protocol-specific codes and logs record them alongside requests, so
//! existing codes are never renumbered.
//!
//! - [`Code`] is itself an error value, its message derived from the canonical name.
//! - [`wrap`] attaches a code to an underlying error, [`is`] matches a code anywhere
//!   in an error chain.
//! - [`with_description`] keeps the bare code semantics but carries extra text.
//! - [`HasStatus`] and [`register`] let other error types declare a status.

mod error;

pub use error::{
    code_of, description_of, is, register, with_description, wrap, wrap_option, Described,
    HasStatus, StatusError,
};

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;

/// Canonical status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[repr(i32)]
pub enum Code {
    /// Not an error.
    #[default]
    Ok = 0,
    Canceled = 1,
    Unknown = 2,
    InvalidArgument = 3,
    DeadlineExceeded = 4,
    NotFound = 5,
    AlreadyExists = 6,
    PermissionDenied = 7,
    ResourceExhausted = 8,
    FailedPrecondition = 9,
    Aborted = 10,
    OutOfRange = 11,
    Unimplemented = 12,
    Internal = 13,
    Unavailable = 14,
    DataLoss = 15,
    Unauthenticated = 16,
}

/// Canonical names, indexed by code value.
const CANONICAL: [(&str, Code); 17] = [
    ("OK", Code::Ok),
    ("CANCELED", Code::Canceled),
    ("UNKNOWN", Code::Unknown),
    ("INVALID_ARGUMENT", Code::InvalidArgument),
    ("DEADLINE_EXCEEDED", Code::DeadlineExceeded),
    ("NOT_FOUND", Code::NotFound),
    ("ALREADY_EXISTS", Code::AlreadyExists),
    ("PERMISSION_DENIED", Code::PermissionDenied),
    ("RESOURCE_EXHAUSTED", Code::ResourceExhausted),
    ("FAILED_PRECONDITION", Code::FailedPrecondition),
    ("ABORTED", Code::Aborted),
    ("OUT_OF_RANGE", Code::OutOfRange),
    ("UNIMPLEMENTED", Code::Unimplemented),
    ("INTERNAL", Code::Internal),
    ("UNAVAILABLE", Code::Unavailable),
    ("DATA_LOSS", Code::DataLoss),
    ("UNAUTHENTICATED", Code::Unauthenticated),
];

/// Human messages, derived once from the canonical names and never mutated.
static MESSAGES: Lazy<HashMap<Code, String>> = Lazy::new(|| {
    CANONICAL
        .iter()
        .map(|(name, code)| (*code, name.replace('_', " ").to_lowercase()))
        .collect()
});

impl Code {
    /// Every member of the taxonomy, in integer order.
    pub const ALL: [Code; 17] = [
        Code::Ok,
        Code::Canceled,
        Code::Unknown,
        Code::InvalidArgument,
        Code::DeadlineExceeded,
        Code::NotFound,
        Code::AlreadyExists,
        Code::PermissionDenied,
        Code::ResourceExhausted,
        Code::FailedPrecondition,
        Code::Aborted,
        Code::OutOfRange,
        Code::Unimplemented,
        Code::Internal,
        Code::Unavailable,
        Code::DataLoss,
        Code::Unauthenticated,
    ];

    /// Maps a stable integer back to its code, [`Code::Unknown`] if unrecognized.
    pub fn from_i32(value: i32) -> Code {
        usize::try_from(value)
            .ok()
            .and_then(|idx| CANONICAL.get(idx))
            .map_or(Code::Unknown, |(_, code)| *code)
    }

    /// Parses a canonical name such as `"NOT_FOUND"`, [`Code::Unknown`] if unrecognized.
    pub fn from_name(name: &str) -> Code {
        CANONICAL
            .iter()
            .find(|(canonical, _)| *canonical == name)
            .map_or(Code::Unknown, |(_, code)| *code)
    }

    /// Stable integer value.
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Canonical upper-case name, e.g. `FAILED_PRECONDITION`.
    pub fn name(self) -> &'static str {
        CANONICAL[self as usize].0
    }

    /// Lower-case human message, e.g. `failed precondition`.
    pub fn message(self) -> &'static str {
        MESSAGES.get(&self).map(String::as_str).unwrap_or_default()
    }

    pub fn is_ok(self) -> bool {
        self == Code::Ok
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for Code {}

impl From<Code> for i32 {
    fn from(code: Code) -> Self {
        code.as_i32()
    }
}

impl From<i32> for Code {
    fn from(value: i32) -> Self {
        Code::from_i32(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_table_is_indexed_by_value() {
        for (idx, (_, code)) in CANONICAL.iter().enumerate() {
            assert_eq!(code.as_i32() as usize, idx);
            assert_eq!(Code::ALL[idx], *code);
        }
    }

    #[test]
    fn message_is_lowercase_spaced_name() {
        for code in Code::ALL {
            let expected = code.name().to_lowercase().replace('_', " ");
            assert_eq!(code.message(), expected);
            assert_eq!(code.to_string(), expected);
        }
        assert_eq!(Code::FailedPrecondition.message(), "failed precondition");
        assert_eq!(Code::DeadlineExceeded.to_string(), "deadline exceeded");
    }

    #[test]
    fn integers_are_stable() {
        assert_eq!(Code::Ok.as_i32(), 0);
        assert_eq!(Code::NotFound.as_i32(), 5);
        assert_eq!(Code::FailedPrecondition.as_i32(), 9);
        assert_eq!(Code::Unauthenticated.as_i32(), 16);
        assert_eq!(i32::from(Code::Internal), 13);
    }

    #[test]
    fn unrecognized_values_become_unknown() {
        assert_eq!(Code::from_i32(14), Code::Unavailable);
        assert_eq!(Code::from_i32(17), Code::Unknown);
        assert_eq!(Code::from_i32(-1), Code::Unknown);
        assert_eq!(Code::from(99), Code::Unknown);
        assert_eq!(Code::from_name("ALREADY_EXISTS"), Code::AlreadyExists);
        assert_eq!(Code::from_name("already_exists"), Code::Unknown);
    }

    #[test]
    fn default_is_ok() {
        assert!(Code::default().is_ok());
        assert!(!Code::Aborted.is_ok());
    }
}
