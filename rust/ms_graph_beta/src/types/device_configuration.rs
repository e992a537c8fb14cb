/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

#![doc = "Types related to DeviceConfiguration."]
use std::ops::{Deref, DerefMut};
use std::sync::LazyLock;

use serde_json::{Map, Value};
use time::OffsetDateTime;

use crate::serialization::{
    AdditionalDataHolder, DiscriminatorRegistry, FieldDeserializers, Parsable, ParseNode,
    SerializationWriter,
};
use crate::types::{
    AndroidWorkProfileCertificateProfileBase, AndroidWorkProfilePkcsCertificateProfile,
    AndroidWorkProfileScepCertificateProfile, AndroidWorkProfileTrustedRootCertificate,
    AnyAndroidWorkProfileCertificateProfileBase, Entity,
};
use crate::Error;

/// Device configuration profile, the base of every platform-specific
/// configuration.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DeviceConfiguration {
    entity: Entity,
    created_date_time: Option<OffsetDateTime>,
    description: Option<String>,
    display_name: Option<String>,
    last_modified_date_time: Option<OffsetDateTime>,
    role_scope_tag_ids: Option<Vec<String>>,
    supports_scope_tags: Option<bool>,
    version: Option<i32>,
}

impl DeviceConfiguration {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.deviceConfiguration";

    pub fn new() -> Self {
        let mut configuration = Self::default();
        configuration.set_odata_type(Some(Self::ODATA_TYPE.to_owned()));

        configuration
    }

    pub fn from_discriminator_value(_node: &dyn ParseNode) -> Result<Self, Error> {
        Ok(Self::new())
    }

    pub fn field_deserializers() -> &'static FieldDeserializers<Self> {
        &FIELD_DESERIALIZERS
    }

    /// Accessor to inherited properties from `Entity`.
    pub fn entity(&self) -> &Entity {
        &self.entity
    }

    pub fn entity_mut(&mut self) -> &mut Entity {
        &mut self.entity
    }

    /// DateTime the object was created.
    pub fn created_date_time(&self) -> Option<&OffsetDateTime> {
        self.created_date_time.as_ref()
    }

    pub fn set_created_date_time(&mut self, value: Option<OffsetDateTime>) {
        self.created_date_time = value;
    }

    /// Admin provided description of the Device Configuration.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn set_description(&mut self, value: Option<String>) {
        self.description = value;
    }

    /// Admin provided name of the device configuration.
    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    pub fn set_display_name(&mut self, value: Option<String>) {
        self.display_name = value;
    }

    /// DateTime the object was last modified.
    pub fn last_modified_date_time(&self) -> Option<&OffsetDateTime> {
        self.last_modified_date_time.as_ref()
    }

    pub fn set_last_modified_date_time(&mut self, value: Option<OffsetDateTime>) {
        self.last_modified_date_time = value;
    }

    /// List of Scope Tags for this Entity instance.
    pub fn role_scope_tag_ids(&self) -> Option<&[String]> {
        self.role_scope_tag_ids.as_deref()
    }

    pub fn set_role_scope_tag_ids(&mut self, value: Option<Vec<String>>) {
        self.role_scope_tag_ids = value;
    }

    /// Indicates whether or not the underlying Device Configuration supports
    /// the assignment of scope tags.
    pub fn supports_scope_tags(&self) -> Option<bool> {
        self.supports_scope_tags
    }

    pub fn set_supports_scope_tags(&mut self, value: Option<bool>) {
        self.supports_scope_tags = value;
    }

    /// Version of the device configuration.
    pub fn version(&self) -> Option<i32> {
        self.version
    }

    pub fn set_version(&mut self, value: Option<i32>) {
        self.version = value;
    }
}

impl Deref for DeviceConfiguration {
    type Target = Entity;

    fn deref(&self) -> &Self::Target {
        &self.entity
    }
}

impl DerefMut for DeviceConfiguration {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.entity
    }
}

static FIELD_DESERIALIZERS: LazyLock<FieldDeserializers<DeviceConfiguration>> =
    LazyLock::new(|| {
        FieldDeserializers::<DeviceConfiguration>::inherit(
            Entity::field_deserializers(),
            DeviceConfiguration::entity_mut,
        )
        .with("createdDateTime", |model, node| {
            model.created_date_time = node.date_time_value()?;
            Ok(())
        })
        .with("description", |model, node| {
            model.description = node.string_value()?;
            Ok(())
        })
        .with("displayName", |model, node| {
            model.display_name = node.string_value()?;
            Ok(())
        })
        .with("lastModifiedDateTime", |model, node| {
            model.last_modified_date_time = node.date_time_value()?;
            Ok(())
        })
        .with("roleScopeTagIds", |model, node| {
            model.role_scope_tag_ids = node.collection_of_string_values()?;
            Ok(())
        })
        .with("supportsScopeTags", |model, node| {
            model.supports_scope_tags = node.bool_value()?;
            Ok(())
        })
        .with("version", |model, node| {
            model.version = node.i32_value()?;
            Ok(())
        })
    });

impl AdditionalDataHolder for DeviceConfiguration {
    fn additional_data(&self) -> &Map<String, Value> {
        self.entity.additional_data()
    }

    fn additional_data_mut(&mut self) -> &mut Map<String, Value> {
        self.entity.additional_data_mut()
    }
}

impl Parsable for DeviceConfiguration {
    fn deserialize_field(&mut self, name: &str, node: &dyn ParseNode) -> Result<bool, Error> {
        FIELD_DESERIALIZERS.deserialize(self, name, node)
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), Error> {
        self.entity.serialize(writer)?;
        writer.write_date_time_value("createdDateTime", self.created_date_time())?;
        writer.write_string_value("description", self.description())?;
        writer.write_string_value("displayName", self.display_name())?;
        writer.write_date_time_value("lastModifiedDateTime", self.last_modified_date_time())?;
        writer.write_collection_of_string_values("roleScopeTagIds", self.role_scope_tag_ids())?;
        writer.write_bool_value("supportsScopeTags", self.supports_scope_tags)?;
        writer.write_i32_value("version", self.version)
    }
}

/// Any type derived from [`DeviceConfiguration`] known to this crate.
#[derive(Clone, Debug, PartialEq)]
pub enum AnyDeviceConfiguration {
    DeviceConfiguration(DeviceConfiguration),
    AndroidWorkProfileCertificateProfileBase(AndroidWorkProfileCertificateProfileBase),
    AndroidWorkProfilePkcsCertificateProfile(AndroidWorkProfilePkcsCertificateProfile),
    AndroidWorkProfileScepCertificateProfile(AndroidWorkProfileScepCertificateProfile),
    AndroidWorkProfileTrustedRootCertificate(AndroidWorkProfileTrustedRootCertificate),
}

static REGISTRY: DiscriminatorRegistry<AnyDeviceConfiguration> = DiscriminatorRegistry::new(
    || AnyDeviceConfiguration::DeviceConfiguration(DeviceConfiguration::new()),
    &[
        (AndroidWorkProfileCertificateProfileBase::ODATA_TYPE, || {
            AnyDeviceConfiguration::AndroidWorkProfileCertificateProfileBase(
                AndroidWorkProfileCertificateProfileBase::new(),
            )
        }),
        (AndroidWorkProfilePkcsCertificateProfile::ODATA_TYPE, || {
            AnyDeviceConfiguration::AndroidWorkProfilePkcsCertificateProfile(
                AndroidWorkProfilePkcsCertificateProfile::new(),
            )
        }),
        (AndroidWorkProfileScepCertificateProfile::ODATA_TYPE, || {
            AnyDeviceConfiguration::AndroidWorkProfileScepCertificateProfile(
                AndroidWorkProfileScepCertificateProfile::new(),
            )
        }),
        (AndroidWorkProfileTrustedRootCertificate::ODATA_TYPE, || {
            AnyDeviceConfiguration::AndroidWorkProfileTrustedRootCertificate(
                AndroidWorkProfileTrustedRootCertificate::new(),
            )
        }),
    ],
);

impl AnyDeviceConfiguration {
    pub fn from_discriminator_value(node: &dyn ParseNode) -> Result<Self, Error> {
        REGISTRY.create(node)
    }

    pub fn registry() -> &'static DiscriminatorRegistry<Self> {
        &REGISTRY
    }

    pub fn device_configuration(&self) -> &DeviceConfiguration {
        match self {
            Self::DeviceConfiguration(value) => value,
            Self::AndroidWorkProfileCertificateProfileBase(value) => value,
            Self::AndroidWorkProfilePkcsCertificateProfile(value) => value,
            Self::AndroidWorkProfileScepCertificateProfile(value) => value,
            Self::AndroidWorkProfileTrustedRootCertificate(value) => value,
        }
    }

    pub fn device_configuration_mut(&mut self) -> &mut DeviceConfiguration {
        match self {
            Self::DeviceConfiguration(value) => value,
            Self::AndroidWorkProfileCertificateProfileBase(value) => value,
            Self::AndroidWorkProfilePkcsCertificateProfile(value) => value,
            Self::AndroidWorkProfileScepCertificateProfile(value) => value,
            Self::AndroidWorkProfileTrustedRootCertificate(value) => value,
        }
    }

    pub fn odata_type(&self) -> Option<&str> {
        self.device_configuration().odata_type()
    }

    fn as_parsable(&self) -> &dyn Parsable {
        match self {
            Self::DeviceConfiguration(value) => value,
            Self::AndroidWorkProfileCertificateProfileBase(value) => value,
            Self::AndroidWorkProfilePkcsCertificateProfile(value) => value,
            Self::AndroidWorkProfileScepCertificateProfile(value) => value,
            Self::AndroidWorkProfileTrustedRootCertificate(value) => value,
        }
    }

    fn as_parsable_mut(&mut self) -> &mut dyn Parsable {
        match self {
            Self::DeviceConfiguration(value) => value,
            Self::AndroidWorkProfileCertificateProfileBase(value) => value,
            Self::AndroidWorkProfilePkcsCertificateProfile(value) => value,
            Self::AndroidWorkProfileScepCertificateProfile(value) => value,
            Self::AndroidWorkProfileTrustedRootCertificate(value) => value,
        }
    }
}

impl AdditionalDataHolder for AnyDeviceConfiguration {
    fn additional_data(&self) -> &Map<String, Value> {
        self.as_parsable().additional_data()
    }

    fn additional_data_mut(&mut self) -> &mut Map<String, Value> {
        self.as_parsable_mut().additional_data_mut()
    }
}

impl Parsable for AnyDeviceConfiguration {
    fn deserialize_field(&mut self, name: &str, node: &dyn ParseNode) -> Result<bool, Error> {
        self.as_parsable_mut().deserialize_field(name, node)
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), Error> {
        self.as_parsable().serialize(writer)
    }
}

impl From<DeviceConfiguration> for AnyDeviceConfiguration {
    fn from(value: DeviceConfiguration) -> Self {
        Self::DeviceConfiguration(value)
    }
}

impl From<AndroidWorkProfileTrustedRootCertificate> for AnyDeviceConfiguration {
    fn from(value: AndroidWorkProfileTrustedRootCertificate) -> Self {
        Self::AndroidWorkProfileTrustedRootCertificate(value)
    }
}

impl From<AndroidWorkProfileCertificateProfileBase> for AnyDeviceConfiguration {
    fn from(value: AndroidWorkProfileCertificateProfileBase) -> Self {
        Self::AndroidWorkProfileCertificateProfileBase(value)
    }
}

impl From<AndroidWorkProfilePkcsCertificateProfile> for AnyDeviceConfiguration {
    fn from(value: AndroidWorkProfilePkcsCertificateProfile) -> Self {
        Self::AndroidWorkProfilePkcsCertificateProfile(value)
    }
}

impl From<AndroidWorkProfileScepCertificateProfile> for AnyDeviceConfiguration {
    fn from(value: AndroidWorkProfileScepCertificateProfile) -> Self {
        Self::AndroidWorkProfileScepCertificateProfile(value)
    }
}

impl From<AnyAndroidWorkProfileCertificateProfileBase> for AnyDeviceConfiguration {
    fn from(value: AnyAndroidWorkProfileCertificateProfileBase) -> Self {
        match value {
            AnyAndroidWorkProfileCertificateProfileBase::AndroidWorkProfileCertificateProfileBase(
                value,
            ) => Self::AndroidWorkProfileCertificateProfileBase(value),
            AnyAndroidWorkProfileCertificateProfileBase::AndroidWorkProfilePkcsCertificateProfile(
                value,
            ) => Self::AndroidWorkProfilePkcsCertificateProfile(value),
            AnyAndroidWorkProfileCertificateProfileBase::AndroidWorkProfileScepCertificateProfile(
                value,
            ) => Self::AndroidWorkProfileScepCertificateProfile(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use time::macros::datetime;

    use super::*;
    use crate::test_utils::{parse, to_json, try_parse_with};
    use crate::ParseOptions;

    #[test]
    fn new_presets_discriminator() {
        let configuration = DeviceConfiguration::new();

        assert_eq!(configuration.odata_type(), Some(DeviceConfiguration::ODATA_TYPE));
        assert!(configuration.additional_data().is_empty());
    }

    #[test]
    fn table_includes_inherited_properties() {
        let table = DeviceConfiguration::field_deserializers();

        for name in Entity::field_deserializers().names() {
            assert!(table.contains(name), "missing inherited property {name}");
        }
        assert_eq!(table.len(), Entity::field_deserializers().len() + 7);
    }

    #[test]
    fn decodes_own_and_inherited_properties() {
        let value = json!({
            "@odata.type": "#microsoft.graph.deviceConfiguration",
            "id": "config-1",
            "createdDateTime": "2023-01-10T08:00:00Z",
            "displayName": "Baseline",
            "roleScopeTagIds": ["0", "7"],
            "supportsScopeTags": true,
            "version": 3,
            "deviceStatusOverview": { "pendingCount": 1 },
        });

        let configuration = parse(&value, DeviceConfiguration::from_discriminator_value);

        assert_eq!(configuration.id(), Some("config-1"));
        assert_eq!(
            configuration.created_date_time(),
            Some(&datetime!(2023-01-10 08:00:00 UTC))
        );
        assert_eq!(configuration.display_name(), Some("Baseline"));
        assert_eq!(configuration.description(), None);
        assert_eq!(
            configuration.role_scope_tag_ids(),
            Some(&["0".to_owned(), "7".to_owned()][..])
        );
        assert_eq!(configuration.supports_scope_tags(), Some(true));
        assert_eq!(configuration.version(), Some(3));
        assert_eq!(
            configuration.additional_data().get("deviceStatusOverview"),
            Some(&json!({ "pendingCount": 1 }))
        );

        assert_eq!(to_json(&configuration), value);
    }

    #[test]
    fn bad_property_aborts_decoding() {
        let value = json!({ "displayName": "Baseline", "version": "three" });

        let result = try_parse_with(
            &value,
            AnyDeviceConfiguration::from_discriminator_value,
            ParseOptions::default(),
        );

        assert!(matches!(result, Err(Error::UnexpectedType { .. })));
    }

    #[test]
    fn registry_is_sorted_and_selects_descendants() {
        let discriminators: Vec<_> = AnyDeviceConfiguration::registry().discriminators().collect();
        assert!(discriminators.windows(2).all(|pair| pair[0] < pair[1]));

        let value = json!({
            "@odata.type": "#microsoft.graph.androidWorkProfileTrustedRootCertificate",
            "displayName": "Root CA",
            "certFileName": "root.cer",
        });

        let configuration = parse(&value, AnyDeviceConfiguration::from_discriminator_value);

        let AnyDeviceConfiguration::AndroidWorkProfileTrustedRootCertificate(root) = &configuration
        else {
            panic!("unexpected variant {configuration:?}");
        };
        assert_eq!(root.cert_file_name(), Some("root.cer"));
        assert_eq!(configuration.device_configuration().display_name(), Some("Root CA"));
    }

    #[test]
    fn missing_discriminator_falls_back_to_base() {
        let value = json!({ "displayName": "Untyped" });

        let configuration = parse(&value, AnyDeviceConfiguration::from_discriminator_value);

        assert!(matches!(
            configuration,
            AnyDeviceConfiguration::DeviceConfiguration(_)
        ));
        assert_eq!(configuration.odata_type(), Some(DeviceConfiguration::ODATA_TYPE));
    }

    #[test]
    fn mutation_through_the_union_reaches_the_variant() {
        let mut configuration =
            AnyDeviceConfiguration::from(AndroidWorkProfileTrustedRootCertificate::new());

        configuration
            .device_configuration_mut()
            .set_display_name(Some("Renamed".to_owned()));
        configuration
            .additional_data_mut()
            .insert("extra".to_owned(), json!(1));

        assert_eq!(
            to_json(&configuration),
            json!({
                "@odata.type": "#microsoft.graph.androidWorkProfileTrustedRootCertificate",
                "displayName": "Renamed",
                "extra": 1,
            })
        );
    }
}
