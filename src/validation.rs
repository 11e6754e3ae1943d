//! # Validation Layer
//!
//! Raw request payloads are decoded into *draft* structs whose fields are [`Patch`] values, then
//! checked into validated payload types. Every offending field is reported, not just the first.
//!
//! ```rust
//! use crud_recipe::validation::{text_length, Patch, Violation, Violations};
//!
//! let name: Patch<String> = Patch::Value("ab".into());
//! let mut violations = Violations::new();
//! let checked = violations.check("name", name.required().and_then(|n| text_length(n, 3, 512)));
//!
//! assert!(checked.is_none());
//! let err = violations.into_error();
//! assert_eq!(err.violations()[0].violation, Violation::TooShort { min: 3 });
//! ```

use serde::{Deserialize, Deserializer};
use std::fmt;
use std::num::{IntErrorKind, NonZeroUsize};

/// One constraint broken by one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    Missing,
    Null,
    TooShort { min: usize },
    TooLong { max: usize },
    InvalidChoice { allowed: &'static str },
    NotInteger,
    NotFinite,
    Negative,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::Missing => write!(f, "field required"),
            Violation::Null => write!(f, "must not be null"),
            Violation::TooShort { min } => write!(f, "must be at least {min} characters"),
            Violation::TooLong { max } => write!(f, "must be at most {max} characters"),
            Violation::InvalidChoice { allowed } => write!(f, "must be one of {allowed}"),
            Violation::NotInteger => write!(f, "must be an integer"),
            Violation::NotFinite => write!(f, "must be a finite number"),
            Violation::Negative => write!(f, "must not be negative"),
        }
    }
}

/// A [`Violation`] tagged with the wire name of the field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: &'static str,
    pub violation: Violation,
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.violation)
    }
}

/// Structured validation failure naming every offending field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("validation failed: {}", join(.violations))]
pub struct ValidationError {
    violations: Vec<FieldViolation>,
}

fn join(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationError {
    /// A failure with exactly one offending field.
    pub fn single(field: &'static str, violation: Violation) -> Self {
        Self {
            violations: vec![FieldViolation { field, violation }],
        }
    }

    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    /// Whether `field` is among the offenders.
    pub fn has(&self, field: &str) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }
}

/// Accumulates violations while a draft is being checked.
#[derive(Debug, Default)]
pub struct Violations(Vec<FieldViolation>);

impl Violations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Records the violation, if any, and passes the value through.
    pub fn check<T>(&mut self, field: &'static str, result: Result<T, Violation>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(violation) => {
                self.0.push(FieldViolation { field, violation });
                None
            }
        }
    }

    pub fn into_error(self) -> ValidationError {
        ValidationError { violations: self.0 }
    }
}

/// A payload field that distinguishes "omitted" from "explicitly null".
///
/// Use with `#[serde(default)]`: an absent key stays [`Patch::Missing`], a JSON `null` becomes
/// [`Patch::Null`].
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Patch<T> {
    #[default]
    Missing,
    Null,
    Value(T),
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Patch<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(|value| value.map_or(Patch::Null, Patch::Value))
    }
}

impl<T> From<T> for Patch<T> {
    fn from(value: T) -> Self {
        Patch::Value(value)
    }
}

impl<T> Patch<T> {
    /// The field must be present and non-null.
    pub fn required(self) -> Result<T, Violation> {
        match self {
            Patch::Value(value) => Ok(value),
            Patch::Missing => Err(Violation::Missing),
            Patch::Null => Err(Violation::Null),
        }
    }

    /// The field may be omitted, in which case `default` is used. Null is still rejected.
    pub fn or(self, default: T) -> Result<T, Violation> {
        match self {
            Patch::Value(value) => Ok(value),
            Patch::Missing => Ok(default),
            Patch::Null => Err(Violation::Null),
        }
    }

    /// Merge semantics: an omitted field means "leave unchanged".
    pub fn optional(self) -> Result<Option<T>, Violation> {
        match self {
            Patch::Value(value) => Ok(Some(value)),
            Patch::Missing => Ok(None),
            Patch::Null => Err(Violation::Null),
        }
    }
}

/// Checks the length of `value` in characters, bounds inclusive.
pub fn text_length(value: String, min: usize, max: usize) -> Result<String, Violation> {
    let len = value.chars().count();
    if len < min {
        Err(Violation::TooShort { min })
    } else if len > max {
        Err(Violation::TooLong { max })
    } else {
        Ok(value)
    }
}

pub fn finite(value: f64) -> Result<f64, Violation> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Violation::NotFinite)
    }
}

/// Parses a "first N records" query value.
///
/// An absent or empty value and `0` both mean "no limit".
pub fn parse_limit(field: &'static str, raw: Option<&str>) -> Result<Option<NonZeroUsize>, ValidationError> {
    let raw = match raw.map(str::trim) {
        None | Some("") => return Ok(None),
        Some(raw) => raw,
    };
    let value: i64 = match raw.parse() {
        Ok(value) => value,
        // Larger than any collection
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => return Ok(None),
        Err(e) if *e.kind() == IntErrorKind::NegOverflow => {
            return Err(ValidationError::single(field, Violation::Negative))
        }
        Err(_) => return Err(ValidationError::single(field, Violation::NotInteger)),
    };
    if value < 0 {
        return Err(ValidationError::single(field, Violation::Negative));
    }
    let value = usize::try_from(value).unwrap_or(usize::MAX);
    Ok(NonZeroUsize::new(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Draft {
        #[serde(default)]
        name: Patch<String>,
    }

    #[test]
    fn patch_distinguishes_missing_null_and_value() {
        let missing: Draft = serde_json::from_str("{}").unwrap();
        let null: Draft = serde_json::from_str(r#"{"name": null}"#).unwrap();
        let value: Draft = serde_json::from_str(r#"{"name": "x"}"#).unwrap();

        assert_eq!(missing.name, Patch::Missing);
        assert_eq!(null.name, Patch::Null);
        assert_eq!(value.name, Patch::Value("x".to_string()));
    }

    #[test]
    fn merge_semantics_leave_omitted_fields_alone() {
        assert_eq!(Patch::<u8>::Missing.optional(), Ok(None));
        assert_eq!(Patch::Value(4).optional(), Ok(Some(4)));
        assert_eq!(Patch::<u8>::Null.optional(), Err(Violation::Null));
    }

    #[test]
    fn defaults_apply_only_to_omitted_fields() {
        assert_eq!(Patch::<u8>::Missing.or(3), Ok(3));
        assert_eq!(Patch::<u8>::Null.or(3), Err(Violation::Null));
    }

    #[test]
    fn text_length_counts_characters_not_bytes() {
        assert!(text_length("äöü".to_string(), 3, 3).is_ok());
        assert_eq!(
            text_length("ab".to_string(), 3, 512),
            Err(Violation::TooShort { min: 3 })
        );
        assert_eq!(
            text_length("x".repeat(513), 3, 512),
            Err(Violation::TooLong { max: 512 })
        );
    }

    #[test]
    fn violations_are_all_reported() {
        let mut violations = Violations::new();
        violations.check::<()>("name", Err(Violation::Missing));
        violations.check::<()>("price", Err(Violation::NotFinite));
        violations.check("ok", Ok(1));

        let err = violations.into_error();
        assert_eq!(err.violations().len(), 2);
        assert!(err.has("name") && err.has("price"));
        assert_eq!(
            err.to_string(),
            "validation failed: name: field required; price: must be a finite number"
        );
    }

    #[test]
    fn limit_zero_and_absent_mean_everything() {
        assert_eq!(parse_limit("first_n", None), Ok(None));
        assert_eq!(parse_limit("first_n", Some("")), Ok(None));
        assert_eq!(parse_limit("first_n", Some("0")), Ok(None));
        assert_eq!(parse_limit("first_n", Some("3")), Ok(NonZeroUsize::new(3)));
    }

    #[test]
    fn limit_rejects_negative_and_non_integer_values() {
        let negative = parse_limit("first_n", Some("-1")).unwrap_err();
        assert_eq!(negative.violations()[0].violation, Violation::Negative);

        let text = parse_limit("first_n", Some("three")).unwrap_err();
        assert_eq!(text.violations()[0].violation, Violation::NotInteger);
        assert!(text.has("first_n"));
    }

    #[test]
    fn limit_beyond_integer_range_means_everything() {
        assert_eq!(parse_limit("limit", Some("99999999999999999999")), Ok(None));

        let huge_negative = parse_limit("limit", Some("-99999999999999999999")).unwrap_err();
        assert_eq!(huge_negative.violations()[0].violation, Violation::Negative);
    }
}
