/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

#![doc = "Types related to ExtendedKeyUsage."]
use std::sync::LazyLock;

use serde_json::{Map, Value};

use crate::serialization::{
    AdditionalDataHolder, FieldDeserializers, Parsable, ParseNode, SerializationWriter,
    ODATA_TYPE_KEY,
};
use crate::Error;

/// An extended key usage, identified by its object identifier.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExtendedKeyUsage {
    additional_data: Map<String, Value>,
    name: Option<String>,
    object_identifier: Option<String>,
    odata_type: Option<String>,
}

impl ExtendedKeyUsage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_discriminator_value(_node: &dyn ParseNode) -> Result<Self, Error> {
        Ok(Self::new())
    }

    pub fn field_deserializers() -> &'static FieldDeserializers<Self> {
        &FIELD_DESERIALIZERS
    }

    /// Display name of the usage, e.g. "Client Authentication".
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, value: Option<String>) {
        self.name = value;
    }

    /// The usage's OID, e.g. "1.3.6.1.5.5.7.3.2".
    pub fn object_identifier(&self) -> Option<&str> {
        self.object_identifier.as_deref()
    }

    pub fn set_object_identifier(&mut self, value: Option<String>) {
        self.object_identifier = value;
    }

    pub fn odata_type(&self) -> Option<&str> {
        self.odata_type.as_deref()
    }

    pub fn set_odata_type(&mut self, value: Option<String>) {
        self.odata_type = value;
    }
}

static FIELD_DESERIALIZERS: LazyLock<FieldDeserializers<ExtendedKeyUsage>> = LazyLock::new(|| {
    FieldDeserializers::<ExtendedKeyUsage>::new()
        .with("name", |model, node| {
            model.name = node.string_value()?;
            Ok(())
        })
        .with("objectIdentifier", |model, node| {
            model.object_identifier = node.string_value()?;
            Ok(())
        })
        .with(ODATA_TYPE_KEY, |model, node| {
            model.odata_type = node.string_value()?;
            Ok(())
        })
});

impl AdditionalDataHolder for ExtendedKeyUsage {
    fn additional_data(&self) -> &Map<String, Value> {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut Map<String, Value> {
        &mut self.additional_data
    }
}

impl Parsable for ExtendedKeyUsage {
    fn deserialize_field(&mut self, name: &str, node: &dyn ParseNode) -> Result<bool, Error> {
        FIELD_DESERIALIZERS.deserialize(self, name, node)
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), Error> {
        writer.write_string_value("name", self.name())?;
        writer.write_string_value("objectIdentifier", self.object_identifier())?;
        writer.write_string_value(ODATA_TYPE_KEY, self.odata_type())?;
        writer.write_additional_data(&self.additional_data)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::test_utils::{parse, to_json};

    #[test]
    fn table_covers_every_property() {
        let table = ExtendedKeyUsage::field_deserializers();

        for name in ["name", "objectIdentifier", "@odata.type"] {
            assert!(table.contains(name), "missing property {name}");
        }
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn round_trips_with_unknown_properties() {
        let value = json!({
            "name": "Client Authentication",
            "objectIdentifier": "1.3.6.1.5.5.7.3.2",
            "@odata.type": "#microsoft.graph.extendedKeyUsage",
            "critical": false,
        });

        let usage = parse(&value, ExtendedKeyUsage::from_discriminator_value);

        assert_eq!(usage.object_identifier(), Some("1.3.6.1.5.5.7.3.2"));
        assert_eq!(usage.additional_data().get("critical"), Some(&json!(false)));
        assert_eq!(to_json(&usage), value);
    }
}
