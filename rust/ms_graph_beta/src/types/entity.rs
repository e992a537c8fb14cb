/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

#![doc = "Types related to Entity."]
use std::sync::LazyLock;

use serde_json::{Map, Value};

use crate::serialization::{
    AdditionalDataHolder, DiscriminatorRegistry, FieldDeserializers, Parsable, ParseNode,
    SerializationWriter, ODATA_TYPE_KEY,
};
use crate::types::{
    AndroidWorkProfileCertificateProfileBase, AndroidWorkProfilePkcsCertificateProfile,
    AndroidWorkProfileScepCertificateProfile, AndroidWorkProfileTrustedRootCertificate,
    AnyAndroidWorkProfileCertificateProfileBase, AnyDeviceConfiguration, DeviceConfiguration,
    ManagedDeviceCertificateState,
};
use crate::Error;

/// The root of every addressable Graph resource.
///
/// Derived types hold an `Entity` at the bottom of their base chain, which
/// also owns the additional data for the whole object.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Entity {
    additional_data: Map<String, Value>,
    id: Option<String>,
    odata_type: Option<String>,
}

impl Entity {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.entity";

    pub fn new() -> Self {
        Self {
            odata_type: Some(Self::ODATA_TYPE.to_owned()),
            ..Default::default()
        }
    }

    pub fn from_discriminator_value(_node: &dyn ParseNode) -> Result<Self, Error> {
        Ok(Self::new())
    }

    pub fn field_deserializers() -> &'static FieldDeserializers<Self> {
        &FIELD_DESERIALIZERS
    }

    /// The unique identifier for an entity. Read-only.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn set_id(&mut self, value: Option<String>) {
        self.id = value;
    }

    /// The concrete type of the object, e.g. `#microsoft.graph.deviceConfiguration`.
    pub fn odata_type(&self) -> Option<&str> {
        self.odata_type.as_deref()
    }

    pub fn set_odata_type(&mut self, value: Option<String>) {
        self.odata_type = value;
    }
}

static FIELD_DESERIALIZERS: LazyLock<FieldDeserializers<Entity>> = LazyLock::new(|| {
    FieldDeserializers::<Entity>::new()
        .with("id", |model, node| {
            model.id = node.string_value()?;
            Ok(())
        })
        .with(ODATA_TYPE_KEY, |model, node| {
            // A null discriminator leaves the constructor's value in place.
            if let Some(odata_type) = node.string_value()? {
                model.odata_type = Some(odata_type);
            }
            Ok(())
        })
});

impl AdditionalDataHolder for Entity {
    fn additional_data(&self) -> &Map<String, Value> {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut Map<String, Value> {
        &mut self.additional_data
    }
}

impl Parsable for Entity {
    fn deserialize_field(&mut self, name: &str, node: &dyn ParseNode) -> Result<bool, Error> {
        FIELD_DESERIALIZERS.deserialize(self, name, node)
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), Error> {
        writer.write_string_value("id", self.id())?;
        writer.write_string_value(ODATA_TYPE_KEY, self.odata_type())?;
        writer.write_additional_data(&self.additional_data)
    }
}

/// Any type derived from [`Entity`] known to this crate.
///
/// Objects whose discriminator isn't recognized decode as
/// [`AnyEntity::Entity`], with every property other than the identifier
/// kept as additional data.
#[derive(Clone, Debug, PartialEq)]
pub enum AnyEntity {
    Entity(Entity),
    AndroidWorkProfileCertificateProfileBase(AndroidWorkProfileCertificateProfileBase),
    AndroidWorkProfilePkcsCertificateProfile(AndroidWorkProfilePkcsCertificateProfile),
    AndroidWorkProfileScepCertificateProfile(AndroidWorkProfileScepCertificateProfile),
    AndroidWorkProfileTrustedRootCertificate(AndroidWorkProfileTrustedRootCertificate),
    DeviceConfiguration(DeviceConfiguration),
    ManagedDeviceCertificateState(ManagedDeviceCertificateState),
}

static REGISTRY: DiscriminatorRegistry<AnyEntity> = DiscriminatorRegistry::new(
    || AnyEntity::Entity(Entity::new()),
    &[
        (AndroidWorkProfileCertificateProfileBase::ODATA_TYPE, || {
            AnyEntity::AndroidWorkProfileCertificateProfileBase(
                AndroidWorkProfileCertificateProfileBase::new(),
            )
        }),
        (AndroidWorkProfilePkcsCertificateProfile::ODATA_TYPE, || {
            AnyEntity::AndroidWorkProfilePkcsCertificateProfile(
                AndroidWorkProfilePkcsCertificateProfile::new(),
            )
        }),
        (AndroidWorkProfileScepCertificateProfile::ODATA_TYPE, || {
            AnyEntity::AndroidWorkProfileScepCertificateProfile(
                AndroidWorkProfileScepCertificateProfile::new(),
            )
        }),
        (AndroidWorkProfileTrustedRootCertificate::ODATA_TYPE, || {
            AnyEntity::AndroidWorkProfileTrustedRootCertificate(
                AndroidWorkProfileTrustedRootCertificate::new(),
            )
        }),
        (DeviceConfiguration::ODATA_TYPE, || {
            AnyEntity::DeviceConfiguration(DeviceConfiguration::new())
        }),
        (ManagedDeviceCertificateState::ODATA_TYPE, || {
            AnyEntity::ManagedDeviceCertificateState(ManagedDeviceCertificateState::new())
        }),
    ],
);

impl AnyEntity {
    /// Builds the type selected by the discriminator of `node`, without
    /// decoding any of its properties.
    pub fn from_discriminator_value(node: &dyn ParseNode) -> Result<Self, Error> {
        REGISTRY.create(node)
    }

    pub fn registry() -> &'static DiscriminatorRegistry<Self> {
        &REGISTRY
    }

    pub fn entity(&self) -> &Entity {
        match self {
            Self::Entity(value) => value,
            Self::AndroidWorkProfileCertificateProfileBase(value) => value,
            Self::AndroidWorkProfilePkcsCertificateProfile(value) => value,
            Self::AndroidWorkProfileScepCertificateProfile(value) => value,
            Self::AndroidWorkProfileTrustedRootCertificate(value) => value,
            Self::DeviceConfiguration(value) => value,
            Self::ManagedDeviceCertificateState(value) => value,
        }
    }

    pub fn entity_mut(&mut self) -> &mut Entity {
        match self {
            Self::Entity(value) => value,
            Self::AndroidWorkProfileCertificateProfileBase(value) => value,
            Self::AndroidWorkProfilePkcsCertificateProfile(value) => value,
            Self::AndroidWorkProfileScepCertificateProfile(value) => value,
            Self::AndroidWorkProfileTrustedRootCertificate(value) => value,
            Self::DeviceConfiguration(value) => value,
            Self::ManagedDeviceCertificateState(value) => value,
        }
    }

    pub fn odata_type(&self) -> Option<&str> {
        self.entity().odata_type()
    }

    fn as_parsable(&self) -> &dyn Parsable {
        match self {
            Self::Entity(value) => value,
            Self::AndroidWorkProfileCertificateProfileBase(value) => value,
            Self::AndroidWorkProfilePkcsCertificateProfile(value) => value,
            Self::AndroidWorkProfileScepCertificateProfile(value) => value,
            Self::AndroidWorkProfileTrustedRootCertificate(value) => value,
            Self::DeviceConfiguration(value) => value,
            Self::ManagedDeviceCertificateState(value) => value,
        }
    }

    fn as_parsable_mut(&mut self) -> &mut dyn Parsable {
        match self {
            Self::Entity(value) => value,
            Self::AndroidWorkProfileCertificateProfileBase(value) => value,
            Self::AndroidWorkProfilePkcsCertificateProfile(value) => value,
            Self::AndroidWorkProfileScepCertificateProfile(value) => value,
            Self::AndroidWorkProfileTrustedRootCertificate(value) => value,
            Self::DeviceConfiguration(value) => value,
            Self::ManagedDeviceCertificateState(value) => value,
        }
    }
}

impl AdditionalDataHolder for AnyEntity {
    fn additional_data(&self) -> &Map<String, Value> {
        self.as_parsable().additional_data()
    }

    fn additional_data_mut(&mut self) -> &mut Map<String, Value> {
        self.as_parsable_mut().additional_data_mut()
    }
}

impl Parsable for AnyEntity {
    fn deserialize_field(&mut self, name: &str, node: &dyn ParseNode) -> Result<bool, Error> {
        self.as_parsable_mut().deserialize_field(name, node)
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), Error> {
        self.as_parsable().serialize(writer)
    }
}

impl From<Entity> for AnyEntity {
    fn from(value: Entity) -> Self {
        Self::Entity(value)
    }
}

impl From<ManagedDeviceCertificateState> for AnyEntity {
    fn from(value: ManagedDeviceCertificateState) -> Self {
        Self::ManagedDeviceCertificateState(value)
    }
}

impl From<AnyDeviceConfiguration> for AnyEntity {
    fn from(value: AnyDeviceConfiguration) -> Self {
        match value {
            AnyDeviceConfiguration::DeviceConfiguration(value) => Self::DeviceConfiguration(value),
            AnyDeviceConfiguration::AndroidWorkProfileCertificateProfileBase(value) => {
                Self::AndroidWorkProfileCertificateProfileBase(value)
            }
            AnyDeviceConfiguration::AndroidWorkProfilePkcsCertificateProfile(value) => {
                Self::AndroidWorkProfilePkcsCertificateProfile(value)
            }
            AnyDeviceConfiguration::AndroidWorkProfileScepCertificateProfile(value) => {
                Self::AndroidWorkProfileScepCertificateProfile(value)
            }
            AnyDeviceConfiguration::AndroidWorkProfileTrustedRootCertificate(value) => {
                Self::AndroidWorkProfileTrustedRootCertificate(value)
            }
        }
    }
}

impl From<DeviceConfiguration> for AnyEntity {
    fn from(value: DeviceConfiguration) -> Self {
        AnyDeviceConfiguration::from(value).into()
    }
}

impl From<AnyAndroidWorkProfileCertificateProfileBase> for AnyEntity {
    fn from(value: AnyAndroidWorkProfileCertificateProfileBase) -> Self {
        AnyDeviceConfiguration::from(value).into()
    }
}

impl From<AndroidWorkProfileCertificateProfileBase> for AnyEntity {
    fn from(value: AndroidWorkProfileCertificateProfileBase) -> Self {
        Self::AndroidWorkProfileCertificateProfileBase(value)
    }
}

impl From<AndroidWorkProfilePkcsCertificateProfile> for AnyEntity {
    fn from(value: AndroidWorkProfilePkcsCertificateProfile) -> Self {
        Self::AndroidWorkProfilePkcsCertificateProfile(value)
    }
}

impl From<AndroidWorkProfileScepCertificateProfile> for AnyEntity {
    fn from(value: AndroidWorkProfileScepCertificateProfile) -> Self {
        Self::AndroidWorkProfileScepCertificateProfile(value)
    }
}

impl From<AndroidWorkProfileTrustedRootCertificate> for AnyEntity {
    fn from(value: AndroidWorkProfileTrustedRootCertificate) -> Self {
        Self::AndroidWorkProfileTrustedRootCertificate(value)
    }
}
