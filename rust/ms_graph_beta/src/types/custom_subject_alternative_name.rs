/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

#![doc = "Types related to CustomSubjectAlternativeName."]
use std::sync::LazyLock;

use serde_json::{Map, Value};

use crate::serialization::{
    AdditionalDataHolder, FieldDeserializers, Parsable, ParseNode, SerializationWriter,
    ODATA_TYPE_KEY,
};
use crate::types::SubjectAlternativeNameType;
use crate::Error;

/// A subject alternative name entry added to issued certificates.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CustomSubjectAlternativeName {
    additional_data: Map<String, Value>,
    name: Option<String>,
    odata_type: Option<String>,
    san_type: Option<SubjectAlternativeNameType>,
}

impl CustomSubjectAlternativeName {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_discriminator_value(_node: &dyn ParseNode) -> Result<Self, Error> {
        Ok(Self::new())
    }

    pub fn field_deserializers() -> &'static FieldDeserializers<Self> {
        &FIELD_DESERIALIZERS
    }

    /// Custom SAN name.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, value: Option<String>) {
        self.name = value;
    }

    pub fn odata_type(&self) -> Option<&str> {
        self.odata_type.as_deref()
    }

    pub fn set_odata_type(&mut self, value: Option<String>) {
        self.odata_type = value;
    }

    pub fn san_type(&self) -> Option<SubjectAlternativeNameType> {
        self.san_type
    }

    pub fn set_san_type(&mut self, value: Option<SubjectAlternativeNameType>) {
        self.san_type = value;
    }
}

static FIELD_DESERIALIZERS: LazyLock<FieldDeserializers<CustomSubjectAlternativeName>> =
    LazyLock::new(|| {
        FieldDeserializers::<CustomSubjectAlternativeName>::new()
            .with("name", |model, node| {
                model.name = node.string_value()?;
                Ok(())
            })
            .with(ODATA_TYPE_KEY, |model, node| {
                model.odata_type = node.string_value()?;
                Ok(())
            })
            .with("sanType", |model, node| {
                model.san_type = node.enum_value()?;
                Ok(())
            })
    });

impl AdditionalDataHolder for CustomSubjectAlternativeName {
    fn additional_data(&self) -> &Map<String, Value> {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut Map<String, Value> {
        &mut self.additional_data
    }
}

impl Parsable for CustomSubjectAlternativeName {
    fn deserialize_field(&mut self, name: &str, node: &dyn ParseNode) -> Result<bool, Error> {
        FIELD_DESERIALIZERS.deserialize(self, name, node)
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), Error> {
        writer.write_string_value("name", self.name())?;
        writer.write_string_value(ODATA_TYPE_KEY, self.odata_type())?;
        writer.write_enum_value("sanType", self.san_type)?;
        writer.write_additional_data(&self.additional_data)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::test_utils::parse;

    #[test]
    fn table_covers_every_property() {
        let table = CustomSubjectAlternativeName::field_deserializers();

        for name in ["name", "@odata.type", "sanType"] {
            assert!(table.contains(name), "missing property {name}");
        }
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn san_type_decodes_as_enum() {
        let value = json!({ "name": "upn", "sanType": "userPrincipalName" });

        let san = parse(&value, CustomSubjectAlternativeName::from_discriminator_value);

        assert_eq!(san.name(), Some("upn"));
        assert_eq!(san.san_type(), Some(SubjectAlternativeNameType::UserPrincipalName));
        assert_eq!(san.odata_type(), None);
    }
}
