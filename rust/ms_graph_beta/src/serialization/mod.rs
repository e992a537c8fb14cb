/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! The reader and writer abstractions models are decoded from and encoded to,
//! along with the machinery shared by every model: field deserializer tables,
//! discriminator registries and the enum codec.
//!
//! Models never touch a wire format directly. Decoding walks a tree of
//! [`ParseNode`]s and encoding pushes values into a [`SerializationWriter`];
//! [`json`] provides the implementations used with the Graph API.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde_json::{Map, Value};
use time::{format_description::well_known::Rfc3339, OffsetDateTime};

use crate::Error;

mod discriminator;
mod enums;
mod field_deserializers;
pub mod json;

pub use discriminator::{Constructor, DiscriminatorRegistry, ODATA_TYPE_KEY};
pub use enums::GraphEnum;
pub use field_deserializers::{FieldDeserializer, FieldDeserializers};

/// Creates the model instance a node should be decoded into, typically by
/// inspecting the node's discriminator.
pub type ParsableFactory<T> = fn(&dyn ParseNode) -> Result<T, Error>;

/// A model carrying a bag of properties that were present on the wire but
/// unknown to the model.
pub trait AdditionalDataHolder {
    fn additional_data(&self) -> &Map<String, Value>;

    fn additional_data_mut(&mut self) -> &mut Map<String, Value>;
}

/// A model which can be decoded from a [`ParseNode`] and encoded to a
/// [`SerializationWriter`].
pub trait Parsable: AdditionalDataHolder {
    /// Decodes a single wire property into `self`.
    ///
    /// Returns `Ok(false)` if the model has no deserializer for `name`, in
    /// which case the caller is expected to keep the value as additional data.
    fn deserialize_field(&mut self, name: &str, node: &dyn ParseNode) -> Result<bool, Error>;

    /// Writes every property of `self`, inherited ones first.
    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), Error>;
}

/// A node in a tree of decoded wire data.
///
/// Typed accessors return `Ok(None)` for an explicit null and an
/// [`Error::UnexpectedType`] when the node holds a value of another kind.
pub trait ParseNode {
    /// The child property `name` of an object node, if present.
    fn child_node(&self, name: &str) -> Option<Box<dyn ParseNode + '_>>;

    fn is_null(&self) -> bool;

    /// The properties of an object node, in wire order.
    fn object_properties(&self) -> Result<Option<Vec<(&str, Box<dyn ParseNode + '_>)>>, Error>;

    /// The elements of a collection node.
    fn collection(&self) -> Result<Option<Vec<Box<dyn ParseNode + '_>>>, Error>;

    fn string_value(&self) -> Result<Option<String>, Error>;

    fn bool_value(&self) -> Result<Option<bool>, Error>;

    fn i32_value(&self) -> Result<Option<i32>, Error>;

    fn i64_value(&self) -> Result<Option<i64>, Error>;

    fn f64_value(&self) -> Result<Option<f64>, Error>;

    /// An RFC 3339 timestamp, as used for `Edm.DateTimeOffset` properties.
    fn date_time_value(&self) -> Result<Option<OffsetDateTime>, Error> {
        Ok(self
            .string_value()?
            .map(|value| OffsetDateTime::parse(&value, &Rfc3339))
            .transpose()?)
    }

    /// Base64-encoded binary content, as used for `Edm.Binary` properties.
    fn byte_array_value(&self) -> Result<Option<Vec<u8>>, Error> {
        Ok(self
            .string_value()?
            .map(|value| STANDARD.decode(value))
            .transpose()?)
    }

    /// The node's content without any interpretation, used to keep
    /// properties unknown to a model.
    fn untyped_value(&self) -> Value;

    /// Whether enum values unknown to this client should decode to the
    /// enum's `unknownFutureValue` member rather than fail.
    fn include_unknown_enum_members(&self) -> bool;
}

impl<'a> dyn ParseNode + 'a {
    pub fn enum_value<E: GraphEnum>(&self) -> Result<Option<E>, Error> {
        self.string_value()?
            .map(|value| E::parse_evolvable(&value, self.include_unknown_enum_members()))
            .transpose()
    }

    /// Reads a flags enum, whose members travel as a single comma-separated
    /// string.
    pub fn enum_flags_value<E: GraphEnum>(&self) -> Result<Option<Vec<E>>, Error> {
        let Some(value) = self.string_value()? else {
            return Ok(None);
        };

        let include_unknown = self.include_unknown_enum_members();
        value
            .split(',')
            .map(str::trim)
            .filter(|member| !member.is_empty())
            .map(|member| E::parse_evolvable(member, include_unknown))
            .collect::<Result<Vec<_>, Error>>()
            .map(Some)
    }

    pub fn collection_of_enum_values<E: GraphEnum>(&self) -> Result<Option<Vec<E>>, Error> {
        let Some(elements) = self.collection()? else {
            return Ok(None);
        };

        elements
            .iter()
            .map(|element| element.enum_value::<E>()?.ok_or_else(null_element))
            .collect::<Result<Vec<_>, Error>>()
            .map(Some)
    }

    pub fn collection_of_string_values(&self) -> Result<Option<Vec<String>>, Error> {
        let Some(elements) = self.collection()? else {
            return Ok(None);
        };

        elements
            .iter()
            .map(|element| element.string_value()?.ok_or_else(null_element))
            .collect::<Result<Vec<_>, Error>>()
            .map(Some)
    }

    /// Decodes an object node into the model chosen by `factory`.
    ///
    /// Properties the model has no deserializer for end up in its additional
    /// data. The first property which fails to decode aborts the whole object.
    pub fn object_value<T: Parsable>(
        &self,
        factory: ParsableFactory<T>,
    ) -> Result<Option<T>, Error> {
        let Some(properties) = self.object_properties()? else {
            return Ok(None);
        };

        let mut model = factory(self)?;
        for (name, node) in properties {
            if !model.deserialize_field(name, &*node)? {
                model
                    .additional_data_mut()
                    .insert(name.to_owned(), node.untyped_value());
            }
        }

        Ok(Some(model))
    }

    pub fn collection_of_object_values<T: Parsable>(
        &self,
        factory: ParsableFactory<T>,
    ) -> Result<Option<Vec<T>>, Error> {
        let Some(elements) = self.collection()? else {
            return Ok(None);
        };

        elements
            .iter()
            .map(|element| element.object_value(factory)?.ok_or_else(null_element))
            .collect::<Result<Vec<_>, Error>>()
            .map(Some)
    }
}

fn null_element() -> Error {
    Error::UnexpectedType {
        expected: "collection element",
        actual: "null".to_owned(),
    }
}

/// A sink for encoded model properties.
///
/// Every `write_*` method skips `None` values entirely; use
/// [`SerializationWriter::write_null_value`] to emit an explicit null.
pub trait SerializationWriter {
    fn write_string_value(&mut self, key: &str, value: Option<&str>) -> Result<(), Error>;

    fn write_bool_value(&mut self, key: &str, value: Option<bool>) -> Result<(), Error>;

    fn write_i32_value(&mut self, key: &str, value: Option<i32>) -> Result<(), Error>;

    fn write_i64_value(&mut self, key: &str, value: Option<i64>) -> Result<(), Error>;

    fn write_f64_value(&mut self, key: &str, value: Option<f64>) -> Result<(), Error>;

    fn write_date_time_value(
        &mut self,
        key: &str,
        value: Option<&OffsetDateTime>,
    ) -> Result<(), Error> {
        let formatted = value.map(|value| value.format(&Rfc3339)).transpose()?;
        self.write_string_value(key, formatted.as_deref())
    }

    fn write_byte_array_value(&mut self, key: &str, value: Option<&[u8]>) -> Result<(), Error> {
        let encoded = value.map(|value| STANDARD.encode(value));
        self.write_string_value(key, encoded.as_deref())
    }

    fn write_collection_of_string_values(
        &mut self,
        key: &str,
        values: Option<&[String]>,
    ) -> Result<(), Error>;

    fn write_object_value(&mut self, key: &str, value: Option<&dyn Parsable>) -> Result<(), Error>;

    fn write_collection_of_object_values(
        &mut self,
        key: &str,
        values: Option<&[&dyn Parsable]>,
    ) -> Result<(), Error>;

    fn write_null_value(&mut self, key: &str) -> Result<(), Error>;

    /// Writes back properties a model kept without understanding them.
    fn write_additional_data(&mut self, data: &Map<String, Value>) -> Result<(), Error>;
}

impl<'a> dyn SerializationWriter + 'a {
    pub fn write_enum_value<E: GraphEnum>(
        &mut self,
        key: &str,
        value: Option<E>,
    ) -> Result<(), Error> {
        self.write_string_value(key, value.map(E::as_str))
    }

    pub fn write_enum_flags_value<E: GraphEnum>(
        &mut self,
        key: &str,
        value: Option<&[E]>,
    ) -> Result<(), Error> {
        let joined = value.map(|members| E::serialize_values(members).join(","));
        self.write_string_value(key, joined.as_deref())
    }

    pub fn write_collection_of_enum_values<E: GraphEnum>(
        &mut self,
        key: &str,
        values: Option<&[E]>,
    ) -> Result<(), Error> {
        let serialized = values.map(E::serialize_values);
        self.write_collection_of_string_values(key, serialized.as_deref())
    }

    /// Convenience over [`SerializationWriter::write_collection_of_object_values`]
    /// for a slice of a single model type.
    pub fn write_collection<T: Parsable>(
        &mut self,
        key: &str,
        values: Option<&[T]>,
    ) -> Result<(), Error> {
        match values {
            Some(values) => {
                let cast = values
                    .iter()
                    .map(|value| value as &dyn Parsable)
                    .collect::<Vec<_>>();
                self.write_collection_of_object_values(key, Some(cast.as_slice()))
            }
            None => Ok(()),
        }
    }
}
