/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

#![doc = "Types related to AndroidWorkProfileTrustedRootCertificate."]
use std::ops::{Deref, DerefMut};
use std::sync::LazyLock;

use serde_json::{Map, Value};

use crate::serialization::{
    AdditionalDataHolder, FieldDeserializers, Parsable, ParseNode, SerializationWriter,
};
use crate::types::DeviceConfiguration;
use crate::Error;

/// A trusted root certificate deployed to Android work profile devices.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AndroidWorkProfileTrustedRootCertificate {
    device_configuration: DeviceConfiguration,
    cert_file_name: Option<String>,
    trusted_root_certificate: Option<Vec<u8>>,
}

impl AndroidWorkProfileTrustedRootCertificate {
    pub const ODATA_TYPE: &'static str =
        "#microsoft.graph.androidWorkProfileTrustedRootCertificate";

    pub fn new() -> Self {
        let mut certificate = Self::default();
        certificate.set_odata_type(Some(Self::ODATA_TYPE.to_owned()));

        certificate
    }

    pub fn from_discriminator_value(_node: &dyn ParseNode) -> Result<Self, Error> {
        Ok(Self::new())
    }

    pub fn field_deserializers() -> &'static FieldDeserializers<Self> {
        &FIELD_DESERIALIZERS
    }

    /// Accessor to inherited properties from `DeviceConfiguration`.
    pub fn device_configuration(&self) -> &DeviceConfiguration {
        &self.device_configuration
    }

    pub fn device_configuration_mut(&mut self) -> &mut DeviceConfiguration {
        &mut self.device_configuration
    }

    /// File name to display in UI.
    pub fn cert_file_name(&self) -> Option<&str> {
        self.cert_file_name.as_deref()
    }

    pub fn set_cert_file_name(&mut self, value: Option<String>) {
        self.cert_file_name = value;
    }

    /// The DER-encoded certificate.
    pub fn trusted_root_certificate(&self) -> Option<&[u8]> {
        self.trusted_root_certificate.as_deref()
    }

    pub fn set_trusted_root_certificate(&mut self, value: Option<Vec<u8>>) {
        self.trusted_root_certificate = value;
    }
}

impl Deref for AndroidWorkProfileTrustedRootCertificate {
    type Target = DeviceConfiguration;

    fn deref(&self) -> &Self::Target {
        &self.device_configuration
    }
}

impl DerefMut for AndroidWorkProfileTrustedRootCertificate {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.device_configuration
    }
}

static FIELD_DESERIALIZERS: LazyLock<FieldDeserializers<AndroidWorkProfileTrustedRootCertificate>> =
    LazyLock::new(|| {
        FieldDeserializers::<AndroidWorkProfileTrustedRootCertificate>::inherit(
            DeviceConfiguration::field_deserializers(),
            AndroidWorkProfileTrustedRootCertificate::device_configuration_mut,
        )
        .with("certFileName", |model, node| {
            model.cert_file_name = node.string_value()?;
            Ok(())
        })
        .with("trustedRootCertificate", |model, node| {
            model.trusted_root_certificate = node.byte_array_value()?;
            Ok(())
        })
    });

impl AdditionalDataHolder for AndroidWorkProfileTrustedRootCertificate {
    fn additional_data(&self) -> &Map<String, Value> {
        self.device_configuration.additional_data()
    }

    fn additional_data_mut(&mut self) -> &mut Map<String, Value> {
        self.device_configuration.additional_data_mut()
    }
}

impl Parsable for AndroidWorkProfileTrustedRootCertificate {
    fn deserialize_field(&mut self, name: &str, node: &dyn ParseNode) -> Result<bool, Error> {
        FIELD_DESERIALIZERS.deserialize(self, name, node)
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), Error> {
        self.device_configuration.serialize(writer)?;
        writer.write_string_value("certFileName", self.cert_file_name())?;
        writer.write_byte_array_value("trustedRootCertificate", self.trusted_root_certificate())
    }
}
