//! CHIP-0007 `collection` object and its attributes
//!
//! Copyright (c) 2025 NFTMeta Team
//! Licensed under the Apache-2.0 license

use crate::error::Result;
use crate::types::{Collection, CollectionAttribute};
use crate::validation::fields::{self, ElementKind, FieldRule};
use crate::validation::{string_or_integer, ErrorTag, ObjectShape, ValidationContext, ValidationError};
use serde_json::{Map, Value};

pub(crate) const COLLECTION: FieldRule = FieldRule::optional("collection", ErrorTag::InvalidCollection);

const ID: FieldRule = FieldRule::required("id", ErrorTag::InvalidCollectionId);
const NAME: FieldRule = FieldRule::required("name", ErrorTag::InvalidCollectionName);
const ATTRIBUTES: FieldRule = FieldRule::optional("attributes", ErrorTag::InvalidCollectionAttributes);

const TYPE: FieldRule = FieldRule::required("type", ErrorTag::InvalidCollectionAttributeType);
const VALUE: FieldRule = FieldRule::required("value", ErrorTag::InvalidCollectionAttributeValue);

pub(crate) const COLLECTION_SHAPE: ObjectShape = ObjectShape {
    name: "collection",
    required: &[ID.name, NAME.name],
    optional: &[ATTRIBUTES.name],
    tag: ErrorTag::InvalidCollection,
};

pub(crate) const COLLECTION_ATTRIBUTE_SHAPE: ObjectShape = ObjectShape {
    name: "collection attribute",
    required: &[TYPE.name, VALUE.name],
    optional: &[],
    tag: ErrorTag::InvalidCollectionAttributes,
};

/// Validate the `collection` field of a document
///
/// Anything other than a non-empty object is a shape error on `collection`
/// itself, in both modes.
pub(crate) fn parse_collection(value: Option<&Value>, ctx: &ValidationContext) -> Result<Option<Collection>> {
    let Some(raw) = value else {
        return Ok(None);
    };

    let collection_ctx = ctx.child(COLLECTION.name);
    match raw {
        Value::Object(object) if !object.is_empty() => compose_collection(object, &collection_ctx).map(Some),
        other => Err(ValidationError::invalid_field(COLLECTION.name, other, COLLECTION.tag, &collection_ctx.path).into()),
    }
}

fn compose_collection(object: &Map<String, Value>, ctx: &ValidationContext) -> Result<Collection> {
    COLLECTION_SHAPE.check(object, ctx)?;

    Ok(Collection {
        id: fields::string(object.get(ID.name), &ID, Some(""), ctx)?.unwrap_or_default(),
        name: fields::string(object.get(NAME.name), &NAME, Some(""), ctx)?.unwrap_or_default(),
        attributes: parse_collection_attributes(object.get(ATTRIBUTES.name), ctx)?,
    })
}

fn parse_collection_attributes(
    value: Option<&Value>,
    ctx: &ValidationContext,
) -> Result<Option<Vec<CollectionAttribute>>> {
    let Some(items) = fields::array(value, &ATTRIBUTES, ElementKind::Object, ctx)? else {
        return Ok(None);
    };

    // Elements are already known to be objects
    let list_ctx = ctx.child(ATTRIBUTES.name);
    let mut attributes = Vec::with_capacity(items.len());
    for (index, object) in items.iter().filter_map(Value::as_object).enumerate() {
        attributes.push(parse_collection_attribute(object, &list_ctx.child_index(index))?);
    }
    Ok(Some(attributes))
}

fn parse_collection_attribute(object: &Map<String, Value>, ctx: &ValidationContext) -> Result<CollectionAttribute> {
    COLLECTION_ATTRIBUTE_SHAPE.check(object, ctx)?;

    Ok(CollectionAttribute {
        kind: string_or_integer(object.get(TYPE.name), &TYPE, ctx)?,
        value: string_or_integer(object.get(VALUE.name), &VALUE, ctx)?,
    })
}
