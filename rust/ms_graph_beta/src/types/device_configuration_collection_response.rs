/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

#![doc = "Types related to DeviceConfigurationCollectionResponse."]
use std::sync::LazyLock;

use serde_json::{Map, Value};

use crate::serialization::{
    AdditionalDataHolder, FieldDeserializers, Parsable, ParseNode, SerializationWriter,
};
use crate::types::AnyDeviceConfiguration;
use crate::Error;

/// One page of a device configuration listing. Each element of `value` is
/// decoded into its most derived known type.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DeviceConfigurationCollectionResponse {
    additional_data: Map<String, Value>,
    odata_count: Option<i64>,
    odata_next_link: Option<String>,
    value: Option<Vec<AnyDeviceConfiguration>>,
}

impl DeviceConfigurationCollectionResponse {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_discriminator_value(_node: &dyn ParseNode) -> Result<Self, Error> {
        Ok(Self::new())
    }

    pub fn field_deserializers() -> &'static FieldDeserializers<Self> {
        &FIELD_DESERIALIZERS
    }

    pub fn odata_count(&self) -> Option<i64> {
        self.odata_count
    }

    pub fn set_odata_count(&mut self, value: Option<i64>) {
        self.odata_count = value;
    }

    /// The URL of the next page, if any.
    pub fn odata_next_link(&self) -> Option<&str> {
        self.odata_next_link.as_deref()
    }

    pub fn set_odata_next_link(&mut self, value: Option<String>) {
        self.odata_next_link = value;
    }

    pub fn value(&self) -> Option<&[AnyDeviceConfiguration]> {
        self.value.as_deref()
    }

    pub fn set_value(&mut self, value: Option<Vec<AnyDeviceConfiguration>>) {
        self.value = value;
    }
}

static FIELD_DESERIALIZERS: LazyLock<FieldDeserializers<DeviceConfigurationCollectionResponse>> =
    LazyLock::new(|| {
        FieldDeserializers::<DeviceConfigurationCollectionResponse>::new()
            .with("@odata.count", |model, node| {
                model.odata_count = node.i64_value()?;
                Ok(())
            })
            .with("@odata.nextLink", |model, node| {
                model.odata_next_link = node.string_value()?;
                Ok(())
            })
            .with("value", |model, node| {
                model.value = node
                    .collection_of_object_values(AnyDeviceConfiguration::from_discriminator_value)?;
                Ok(())
            })
    });

impl AdditionalDataHolder for DeviceConfigurationCollectionResponse {
    fn additional_data(&self) -> &Map<String, Value> {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut Map<String, Value> {
        &mut self.additional_data
    }
}

impl Parsable for DeviceConfigurationCollectionResponse {
    fn deserialize_field(&mut self, name: &str, node: &dyn ParseNode) -> Result<bool, Error> {
        FIELD_DESERIALIZERS.deserialize(self, name, node)
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), Error> {
        writer.write_i64_value("@odata.count", self.odata_count)?;
        writer.write_string_value("@odata.nextLink", self.odata_next_link())?;
        writer.write_collection("value", self.value())?;
        writer.write_additional_data(&self.additional_data)
    }
}
