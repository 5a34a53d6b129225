//! Ordered variant probing for fields without a type discriminator
//!
//! Some fields accept more than one JSON type. They are resolved by trying
//! each variant in a fixed priority order: a variant that rejects the value
//! with a validation error, or yields nothing, is declined and the next one
//! is tried. The last variant is never probed; its errors propagate as-is.
//! Errors that are not validation failures are never swallowed.
//!
//! Copyright (c) 2025 NFTMeta Team
//! Licensed under the Apache-2.0 license

use crate::error::{Error, Result};
use crate::types::StringOrInteger;
use crate::validation::base::ValidationContext;
use crate::validation::error::ValidationError;
use crate::validation::fields::{self, FieldRule};
use serde_json::Value;
use tracing::trace;

/// Outcome of probing a single variant
#[derive(Debug)]
pub enum Probe<T> {
    /// The variant produced a value
    Accepted(T),
    /// The variant produced nothing, or rejected the value
    Declined(Option<ValidationError>),
}

/// One variant attempt, evaluated lazily
pub type Attempt<'a, T> = Box<dyn FnOnce() -> Result<Option<T>> + 'a>;

/// Classify one attempt: validation failures decline, other errors are returned
pub fn try_variant<T>(attempt: Result<Option<T>>) -> Result<Probe<T>> {
    match attempt {
        Ok(Some(value)) => Ok(Probe::Accepted(value)),
        Ok(None) => Ok(Probe::Declined(None)),
        Err(Error::Validation(err)) => Ok(Probe::Declined(Some(err))),
        Err(other) => Err(other),
    }
}

/// Run attempts in priority order and return the first accepted value
pub fn first_accepted<'a, T>(attempts: Vec<Attempt<'a, T>>) -> Result<Option<T>> {
    let mut attempts = attempts.into_iter().peekable();
    while let Some(attempt) = attempts.next() {
        if attempts.peek().is_none() {
            return attempt();
        }
        match try_variant(attempt())? {
            Probe::Accepted(value) => return Ok(Some(value)),
            Probe::Declined(Some(reason)) => {
                trace!(path = %reason.path, reason = %reason, "variant declined, trying next");
            }
            Probe::Declined(None) => {}
        }
    }
    Ok(None)
}

/// JSON types a dual-type field can resolve to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarKind {
    Text,
    Integer,
}

/// Text is tried first, so `"7"` stays text rather than becoming `7`
pub const TEXT_THEN_INTEGER: [ScalarKind; 2] = [ScalarKind::Text, ScalarKind::Integer];

fn scalar_attempt<'a>(
    kind: ScalarKind,
    value: Option<&'a Value>,
    rule: &'a FieldRule,
    ctx: &'a ValidationContext,
) -> Attempt<'a, StringOrInteger> {
    match kind {
        ScalarKind::Text => Box::new(move || {
            Ok(fields::string(value, rule, None, ctx)?.map(StringOrInteger::String))
        }),
        ScalarKind::Integer => Box::new(move || {
            Ok(fields::integer(value, rule, None, ctx)?.map(StringOrInteger::Integer))
        }),
    }
}

/// Resolve a field that accepts text or an integer
///
/// Fails with `missing-or-invalid` when no variant yields a value.
pub fn string_or_integer(
    value: Option<&Value>,
    rule: &FieldRule,
    ctx: &ValidationContext,
) -> Result<StringOrInteger> {
    let attempts = TEXT_THEN_INTEGER
        .iter()
        .map(|&kind| scalar_attempt(kind, value, rule, ctx))
        .collect();

    first_accepted(attempts)?.ok_or_else(|| {
        ValidationError::missing_or_invalid_field(rule.name, value, rule.tag, &ctx.child(rule.name).path)
            .into()
    })
}
