/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! JSON implementations of [`ParseNode`] and [`SerializationWriter`], the
//! format used by the Graph API.

use http::{HeaderMap, HeaderValue};
use serde_json::{Map, Number, Value};

use super::{Parsable, ParsableFactory, ParseNode, SerializationWriter};
use crate::Error;

/// The `Prefer` header token with which a client asks the service to send
/// members of evolvable enumerations added after `unknownFutureValue`.
pub const PREFER_INCLUDE_UNKNOWN_ENUM_MEMBERS: &str = "include-unknown-enum-members";

const PREFER: &str = "prefer";

/// Options controlling how a document is decoded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Decode unrecognized members of evolvable enumerations to their
    /// `unknownFutureValue` sentinel instead of failing.
    pub include_unknown_enum_members: bool,
}

impl ParseOptions {
    /// Derives decode options from the preferences sent with a request.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let include_unknown_enum_members = headers
            .get_all(PREFER)
            .iter()
            .filter_map(|value| match value.to_str() {
                Ok(value) => Some(value),
                Err(_) => {
                    log::warn!("ignoring Prefer header which isn't valid ASCII");
                    None
                }
            })
            .flat_map(|value| value.split(','))
            .filter_map(|preference| preference.split(';').next())
            .any(|token| token.trim().eq_ignore_ascii_case(PREFER_INCLUDE_UNKNOWN_ENUM_MEMBERS));

        Self {
            include_unknown_enum_members,
        }
    }

    /// Adds the preferences matching these options to a request's headers.
    pub fn apply_to(&self, headers: &mut HeaderMap) {
        if self.include_unknown_enum_members {
            headers.append(
                PREFER,
                HeaderValue::from_static(PREFER_INCLUDE_UNKNOWN_ENUM_MEMBERS),
            );
        }
    }
}

/// A [`ParseNode`] over a borrowed JSON value.
#[derive(Clone, Copy, Debug)]
pub struct JsonParseNode<'a> {
    value: &'a Value,
    options: ParseOptions,
}

impl<'a> JsonParseNode<'a> {
    pub fn new(value: &'a Value) -> Self {
        Self::with_options(value, ParseOptions::default())
    }

    pub fn with_options(value: &'a Value, options: ParseOptions) -> Self {
        Self { value, options }
    }

    fn child(&self, value: &'a Value) -> Box<dyn ParseNode + 'a> {
        Box::new(JsonParseNode {
            value,
            options: self.options,
        })
    }

    fn unexpected(&self, expected: &'static str) -> Error {
        Error::UnexpectedType {
            expected,
            actual: kind(self.value).to_owned(),
        }
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl<'a> ParseNode for JsonParseNode<'a> {
    fn child_node(&self, name: &str) -> Option<Box<dyn ParseNode + '_>> {
        let child = self.value.as_object()?.get(name)?;

        Some(self.child(child))
    }

    fn is_null(&self) -> bool {
        self.value.is_null()
    }

    fn object_properties(&self) -> Result<Option<Vec<(&str, Box<dyn ParseNode + '_>)>>, Error> {
        match self.value {
            Value::Null => Ok(None),
            Value::Object(properties) => Ok(Some(
                properties
                    .iter()
                    .map(|(name, value)| (name.as_str(), self.child(value)))
                    .collect(),
            )),
            _ => Err(self.unexpected("object")),
        }
    }

    fn collection(&self) -> Result<Option<Vec<Box<dyn ParseNode + '_>>>, Error> {
        match self.value {
            Value::Null => Ok(None),
            Value::Array(elements) => Ok(Some(
                elements.iter().map(|element| self.child(element)).collect(),
            )),
            _ => Err(self.unexpected("array")),
        }
    }

    fn string_value(&self) -> Result<Option<String>, Error> {
        match self.value {
            Value::Null => Ok(None),
            Value::String(value) => Ok(Some(value.clone())),
            _ => Err(self.unexpected("string")),
        }
    }

    fn bool_value(&self) -> Result<Option<bool>, Error> {
        match self.value {
            Value::Null => Ok(None),
            Value::Bool(value) => Ok(Some(*value)),
            _ => Err(self.unexpected("boolean")),
        }
    }

    fn i32_value(&self) -> Result<Option<i32>, Error> {
        self.i64_value()?
            .map(|value| {
                i32::try_from(value)
                    .map_err(|_| Error::InvalidValue(format!("{value} does not fit in 32 bits")))
            })
            .transpose()
    }

    fn i64_value(&self) -> Result<Option<i64>, Error> {
        match self.value {
            Value::Null => Ok(None),
            Value::Number(number) => number
                .as_i64()
                .map(Some)
                .ok_or_else(|| Error::InvalidValue(format!("{number} is not a 64-bit integer"))),
            _ => Err(self.unexpected("integer")),
        }
    }

    fn f64_value(&self) -> Result<Option<f64>, Error> {
        match self.value {
            Value::Null => Ok(None),
            Value::Number(number) => number
                .as_f64()
                .map(Some)
                .ok_or_else(|| Error::InvalidValue(format!("{number} is not a double"))),
            _ => Err(self.unexpected("number")),
        }
    }

    fn untyped_value(&self) -> Value {
        self.value.clone()
    }

    fn include_unknown_enum_members(&self) -> bool {
        self.options.include_unknown_enum_members
    }
}

/// A [`SerializationWriter`] building a JSON object.
#[derive(Debug, Default)]
pub struct JsonSerializationWriter {
    properties: Map<String, Value>,
}

impl JsonSerializationWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.properties)
    }

    pub fn into_bytes(self) -> Result<Vec<u8>, Error> {
        Ok(serde_json::to_vec(&self.properties)?)
    }

    fn insert(&mut self, key: &str, value: Value) {
        self.properties.insert(key.to_owned(), value);
    }

    fn encode(value: &dyn Parsable) -> Result<Value, Error> {
        let mut writer = JsonSerializationWriter::new();
        value.serialize(&mut writer)?;

        Ok(writer.into_value())
    }
}

impl SerializationWriter for JsonSerializationWriter {
    fn write_string_value(&mut self, key: &str, value: Option<&str>) -> Result<(), Error> {
        if let Some(value) = value {
            self.insert(key, Value::from(value));
        }

        Ok(())
    }

    fn write_bool_value(&mut self, key: &str, value: Option<bool>) -> Result<(), Error> {
        if let Some(value) = value {
            self.insert(key, Value::from(value));
        }

        Ok(())
    }

    fn write_i32_value(&mut self, key: &str, value: Option<i32>) -> Result<(), Error> {
        if let Some(value) = value {
            self.insert(key, Value::from(value));
        }

        Ok(())
    }

    fn write_i64_value(&mut self, key: &str, value: Option<i64>) -> Result<(), Error> {
        if let Some(value) = value {
            self.insert(key, Value::from(value));
        }

        Ok(())
    }

    fn write_f64_value(&mut self, key: &str, value: Option<f64>) -> Result<(), Error> {
        if let Some(value) = value {
            let number = Number::from_f64(value).ok_or_else(|| {
                Error::InvalidValue(format!("{value} cannot be represented in JSON"))
            })?;
            self.insert(key, Value::Number(number));
        }

        Ok(())
    }

    fn write_collection_of_string_values(
        &mut self,
        key: &str,
        values: Option<&[String]>,
    ) -> Result<(), Error> {
        if let Some(values) = values {
            self.insert(key, Value::from(values.to_vec()));
        }

        Ok(())
    }

    fn write_object_value(&mut self, key: &str, value: Option<&dyn Parsable>) -> Result<(), Error> {
        if let Some(value) = value {
            let encoded = Self::encode(value)?;
            self.insert(key, encoded);
        }

        Ok(())
    }

    fn write_collection_of_object_values(
        &mut self,
        key: &str,
        values: Option<&[&dyn Parsable]>,
    ) -> Result<(), Error> {
        if let Some(values) = values {
            let encoded = values
                .iter()
                .map(|value| Self::encode(*value))
                .collect::<Result<Vec<_>, Error>>()?;
            self.insert(key, Value::Array(encoded));
        }

        Ok(())
    }

    fn write_null_value(&mut self, key: &str) -> Result<(), Error> {
        self.insert(key, Value::Null);

        Ok(())
    }

    fn write_additional_data(&mut self, data: &Map<String, Value>) -> Result<(), Error> {
        for (key, value) in data {
            self.insert(key, value.clone());
        }

        Ok(())
    }
}

/// Decodes a JSON document into the model chosen by `factory`.
///
/// The document's root must be an object.
pub fn deserialize<T: Parsable>(
    content: &[u8],
    factory: ParsableFactory<T>,
    options: ParseOptions,
) -> Result<T, Error> {
    log::trace!("decoding {} byte JSON document", content.len());

    let value: Value = serde_json::from_slice(content)?;
    let node = JsonParseNode::with_options(&value, options);
    let node: &dyn ParseNode = &node;

    node.object_value(factory)?
        .ok_or_else(|| Error::UnexpectedType {
            expected: "object",
            actual: kind(&value).to_owned(),
        })
}

/// Encodes a model as a JSON document.
pub fn serialize<T: Parsable + ?Sized>(model: &T) -> Result<Vec<u8>, Error> {
    let mut writer = JsonSerializationWriter::new();
    model.serialize(&mut writer)?;

    let content = writer.into_bytes()?;
    log::trace!("encoded {} byte JSON document", content.len());

    Ok(content)
}
