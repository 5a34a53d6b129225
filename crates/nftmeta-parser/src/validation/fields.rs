//! Primitive field validators
//!
//! Every primitive shares one contract, parameterized by the mode carried in
//! the [`ValidationContext`]:
//!
//! | mode    | value present, valid | value present, invalid | value absent                              |
//! |---------|----------------------|------------------------|-------------------------------------------|
//! | strict  | value                | missing-or-invalid     | missing-or-invalid if required, else default |
//! | lenient | value                | invalid                | default                                   |
//!
//! JSON `null` counts as a present value. The primitives know nothing about
//! document shape; composers hand them the raw value for one key.
//!
//! Copyright (c) 2025 NFTMeta Team
//! Licensed under the Apache-2.0 license

use crate::validation::base::ValidationContext;
use crate::validation::error::{ErrorTag, ValidationError, ValidationResult};
use serde_json::{Number, Value};

/// Static description of one field: its key, strict-mode requirement and error tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    pub name: &'static str,
    pub required_in_strict: bool,
    pub tag: ErrorTag,
}

impl FieldRule {
    /// A field that must be present (and non-empty, for text) in strict mode
    pub const fn required(name: &'static str, tag: ErrorTag) -> Self {
        Self {
            name,
            required_in_strict: true,
            tag,
        }
    }

    /// A field that is optional in both modes
    pub const fn optional(name: &'static str, tag: ErrorTag) -> Self {
        Self {
            name,
            required_in_strict: false,
            tag,
        }
    }
}

/// A closed set of text values, used by [`enumeration`]
pub trait EnumValue: Copy + 'static {
    fn as_str(&self) -> &'static str;
}

/// Element constraint for [`array`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    String,
    Object,
}

impl ElementKind {
    fn matches(&self, element: &Value) -> bool {
        match self {
            ElementKind::String => element.is_string(),
            ElementKind::Object => element.is_object(),
        }
    }
}

fn field_path(rule: &FieldRule, ctx: &ValidationContext) -> String {
    ctx.child(rule.name).path
}

fn absent<T>(rule: &FieldRule, default: Option<T>, ctx: &ValidationContext) -> ValidationResult<Option<T>> {
    if ctx.is_strict() && rule.required_in_strict {
        Err(ValidationError::missing_or_invalid_field(
            rule.name,
            None,
            rule.tag,
            &field_path(rule, ctx),
        ))
    } else {
        Ok(default)
    }
}

fn reject(rule: &FieldRule, raw: &Value, ctx: &ValidationContext) -> ValidationError {
    let path = field_path(rule, ctx);
    if ctx.is_strict() {
        ValidationError::missing_or_invalid_field(rule.name, Some(raw), rule.tag, &path)
    } else {
        ValidationError::invalid_field(rule.name, raw, rule.tag, &path)
    }
}

/// Validate a text field
///
/// The empty string is a valid value, except for strict-mode required fields
/// where it is treated like an absent value.
pub fn string(
    value: Option<&Value>,
    rule: &FieldRule,
    default: Option<&str>,
    ctx: &ValidationContext,
) -> ValidationResult<Option<String>> {
    match value {
        None => absent(rule, default.map(str::to_string), ctx),
        Some(Value::String(s)) if s.is_empty() && ctx.is_strict() && rule.required_in_strict => {
            Err(ValidationError::missing_or_invalid_field(
                rule.name,
                value,
                rule.tag,
                &field_path(rule, ctx),
            ))
        }
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(raw) => Err(reject(rule, raw, ctx)),
    }
}

/// Interpret a JSON number as a whole `i64`, accepting floats such as `5.0`
fn whole_number(number: &Number) -> Option<i64> {
    if let Some(i) = number.as_i64() {
        return Some(i);
    }
    if number.is_u64() {
        return None;
    }
    let f = number.as_f64()?;
    // i64::MAX as f64 rounds up to 2^63, hence the strict upper bound
    if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}

/// Validate an integer field
///
/// A number that is not whole (or does not fit an `i64`) is `invalid` in both modes.
pub fn integer(
    value: Option<&Value>,
    rule: &FieldRule,
    default: Option<i64>,
    ctx: &ValidationContext,
) -> ValidationResult<Option<i64>> {
    match value {
        None => absent(rule, default, ctx),
        Some(raw @ Value::Number(n)) => match whole_number(n) {
            Some(i) => Ok(Some(i)),
            None => Err(ValidationError::invalid_field(
                rule.name,
                raw,
                rule.tag,
                &field_path(rule, ctx),
            )),
        },
        Some(raw) => Err(reject(rule, raw, ctx)),
    }
}

/// Validate a boolean field
pub fn boolean(
    value: Option<&Value>,
    rule: &FieldRule,
    default: Option<bool>,
    ctx: &ValidationContext,
) -> ValidationResult<Option<bool>> {
    match value {
        None => absent(rule, default, ctx),
        Some(Value::Bool(b)) => Ok(Some(*b)),
        Some(raw) => Err(reject(rule, raw, ctx)),
    }
}

/// Validate a text field restricted to a closed set of values
pub fn enumeration<E: EnumValue>(
    value: Option<&Value>,
    rule: &FieldRule,
    allowed: &[E],
    default: Option<E>,
    ctx: &ValidationContext,
) -> ValidationResult<Option<E>> {
    match value {
        None => absent(rule, default, ctx),
        Some(raw) => raw
            .as_str()
            .and_then(|s| allowed.iter().copied().find(|candidate| candidate.as_str() == s))
            .map(Some)
            .ok_or_else(|| reject(rule, raw, ctx)),
    }
}

/// Validate an array whose every element matches `element`
///
/// Elements are only type-checked here; composers validate object elements.
pub fn array<'v>(
    value: Option<&'v Value>,
    rule: &FieldRule,
    element: ElementKind,
    ctx: &ValidationContext,
) -> ValidationResult<Option<&'v [Value]>> {
    match value {
        None => absent(rule, None, ctx),
        Some(Value::Array(items)) if items.iter().all(|item| element.matches(item)) => {
            Ok(Some(items.as_slice()))
        }
        Some(raw) => Err(reject(rule, raw, ctx)),
    }
}

/// Validate an array of text values
pub fn string_array(
    value: Option<&Value>,
    rule: &FieldRule,
    ctx: &ValidationContext,
) -> ValidationResult<Option<Vec<String>>> {
    Ok(array(value, rule, ElementKind::String, ctx)?.map(|items| {
        items
            .iter()
            .filter_map(|item| item.as_str().map(str::to_string))
            .collect()
    }))
}
