//! Top-level CHIP-0007 document, its attributes and sensitive content
//!
//! Copyright (c) 2025 NFTMeta Team
//! Licensed under the Apache-2.0 license

use super::collection::{self, COLLECTION};
use crate::error::Result;
use crate::types::{Attribute, Format, Metadata, SensitiveContent};
use crate::validation::fields::{self, ElementKind, FieldRule};
use crate::validation::{
    first_accepted, string_or_integer, Attempt, ErrorTag, ObjectShape, ValidationContext,
    ValidationError,
};
use serde_json::{Map, Value};

pub(crate) const FORMAT: FieldRule = FieldRule::required("format", ErrorTag::InvalidFormat);
pub(crate) const NAME: FieldRule = FieldRule::required("name", ErrorTag::InvalidName);
pub(crate) const DESCRIPTION: FieldRule = FieldRule::required("description", ErrorTag::InvalidDescription);
pub(crate) const MINTING_TOOL: FieldRule = FieldRule::optional("minting_tool", ErrorTag::InvalidMintingTool);
pub(crate) const SENSITIVE_CONTENT: FieldRule =
    FieldRule::optional("sensitive_content", ErrorTag::InvalidSensitiveContent);
pub(crate) const SERIES_NUMBER: FieldRule = FieldRule::optional("series_number", ErrorTag::InvalidSeriesNumber);
pub(crate) const SERIES_TOTAL: FieldRule = FieldRule::optional("series_total", ErrorTag::InvalidSeriesTotal);
pub(crate) const ATTRIBUTES: FieldRule = FieldRule::optional("attributes", ErrorTag::InvalidAttributes);
const DATA: &str = "data";

const TRAIT_TYPE: FieldRule = FieldRule::required("trait_type", ErrorTag::InvalidAttributeTraitType);
const VALUE: FieldRule = FieldRule::required("value", ErrorTag::InvalidAttributeValue);
const MIN_VALUE: FieldRule = FieldRule::optional("min_value", ErrorTag::InvalidAttributeMinValue);
const MAX_VALUE: FieldRule = FieldRule::optional("max_value", ErrorTag::InvalidAttributeMaxValue);

/// Top-level document: no key is structurally required, strictness is enforced per field
pub(crate) const METADATA_SHAPE: ObjectShape = ObjectShape {
    name: "metadata",
    required: &[],
    optional: &[
        FORMAT.name,
        NAME.name,
        DESCRIPTION.name,
        MINTING_TOOL.name,
        SENSITIVE_CONTENT.name,
        SERIES_NUMBER.name,
        SERIES_TOTAL.name,
        ATTRIBUTES.name,
        COLLECTION.name,
        DATA,
    ],
    tag: ErrorTag::InvalidMetadata,
};

pub(crate) const ATTRIBUTE_SHAPE: ObjectShape = ObjectShape {
    name: "attribute",
    required: &[TRAIT_TYPE.name, VALUE.name],
    optional: &[MIN_VALUE.name, MAX_VALUE.name],
    tag: ErrorTag::InvalidAttributes,
};

/// Validate a decoded document and assemble the metadata record
pub(crate) fn compose_metadata(raw: &Value, ctx: &ValidationContext) -> Result<Metadata> {
    let object = raw.as_object().ok_or_else(|| {
        ValidationError::invalid_field(METADATA_SHAPE.name, raw, METADATA_SHAPE.tag, &ctx.path)
    })?;
    METADATA_SHAPE.check(object, ctx)?;

    // Only a missing key defaults; `""` and `null` are malformed values
    let format = fields::enumeration(
        object.get(FORMAT.name),
        &FORMAT,
        &Format::ALL,
        Some(Format::Chip0007),
        ctx,
    )?
    .unwrap_or_default();
    let name = fields::string(object.get(NAME.name), &NAME, Some(""), ctx)?.unwrap_or_default();
    let description =
        fields::string(object.get(DESCRIPTION.name), &DESCRIPTION, Some(""), ctx)?.unwrap_or_default();

    Ok(Metadata {
        format,
        name,
        description,
        minting_tool: fields::string(object.get(MINTING_TOOL.name), &MINTING_TOOL, None, ctx)?,
        sensitive_content: parse_sensitive_content(object.get(SENSITIVE_CONTENT.name), ctx)?,
        series_number: fields::integer(object.get(SERIES_NUMBER.name), &SERIES_NUMBER, None, ctx)?,
        series_total: fields::integer(object.get(SERIES_TOTAL.name), &SERIES_TOTAL, None, ctx)?,
        attributes: parse_attributes(object.get(ATTRIBUTES.name), ctx)?,
        collection: collection::parse_collection(object.get(COLLECTION.name), ctx)?,
        data: object.get(DATA).cloned(),
    })
}

fn text_flag(text: &str) -> Option<bool> {
    if text.eq_ignore_ascii_case("true") {
        Some(true)
    } else if text.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

/// Resolve `sensitive_content`: boolean, then (lenient only) `"true"`/`"false"`, then text array
pub(crate) fn parse_sensitive_content(
    value: Option<&Value>,
    ctx: &ValidationContext,
) -> Result<Option<SensitiveContent>> {
    let rule = &SENSITIVE_CONTENT;
    let mut attempts: Vec<Attempt<'_, SensitiveContent>> = Vec::with_capacity(3);

    attempts.push(Box::new(move || {
        Ok(fields::boolean(value, rule, None, ctx)?.map(SensitiveContent::Flag))
    }));
    // Text other than "true"/"false" is rejected, never coerced to `false`
    if !ctx.is_strict() {
        attempts.push(Box::new(move || {
            let text = fields::string(value, rule, None, ctx)?;
            Ok(text.as_deref().and_then(text_flag).map(SensitiveContent::Flag))
        }));
    }
    attempts.push(Box::new(move || {
        Ok(fields::string_array(value, rule, ctx)?.map(SensitiveContent::Labels))
    }));

    first_accepted(attempts)
}

/// Validate the `attributes` array and every attribute object in it
pub(crate) fn parse_attributes(value: Option<&Value>, ctx: &ValidationContext) -> Result<Option<Vec<Attribute>>> {
    let Some(items) = fields::array(value, &ATTRIBUTES, ElementKind::Object, ctx)? else {
        return Ok(None);
    };

    // Elements are already known to be objects
    let list_ctx = ctx.child(ATTRIBUTES.name);
    items
        .iter()
        .filter_map(Value::as_object)
        .enumerate()
        .map(|(index, object)| parse_attribute(object, &list_ctx.child_index(index)))
        .collect::<Result<Vec<_>>>()
        .map(Some)
}

/// Validate one attribute object
pub(crate) fn parse_attribute(object: &Map<String, Value>, ctx: &ValidationContext) -> Result<Attribute> {
    ATTRIBUTE_SHAPE.check(object, ctx)?;

    Ok(Attribute {
        trait_type: string_or_integer(object.get(TRAIT_TYPE.name), &TRAIT_TYPE, ctx)?,
        value: string_or_integer(object.get(VALUE.name), &VALUE, ctx)?,
        min_value: fields::integer(object.get(MIN_VALUE.name), &MIN_VALUE, None, ctx)?,
        max_value: fields::integer(object.get(MAX_VALUE.name), &MAX_VALUE, None, ctx)?,
    })
}
