/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

#![doc = "Types related to AndroidWorkProfileCertificateProfileBase."]
use std::ops::{Deref, DerefMut};
use std::sync::LazyLock;

use serde_json::{Map, Value};

use crate::serialization::{
    AdditionalDataHolder, DiscriminatorRegistry, FieldDeserializers, Parsable, ParseNode,
    SerializationWriter,
};
use crate::types::{
    AndroidWorkProfilePkcsCertificateProfile, AndroidWorkProfileScepCertificateProfile,
    AndroidWorkProfileTrustedRootCertificate, CertificateValidityPeriodScale, DeviceConfiguration,
    ExtendedKeyUsage, SubjectAlternativeNameType, SubjectNameFormat,
};
use crate::Error;

/// Properties shared by the SCEP and PKCS certificate profiles for Android
/// work profile devices.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AndroidWorkProfileCertificateProfileBase {
    device_configuration: DeviceConfiguration,
    certificate_validity_period_scale: Option<CertificateValidityPeriodScale>,
    certificate_validity_period_value: Option<i32>,
    extended_key_usages: Option<Vec<ExtendedKeyUsage>>,
    renewal_threshold_percentage: Option<i32>,
    root_certificate: Option<AndroidWorkProfileTrustedRootCertificate>,
    subject_alternative_name_type: Option<Vec<SubjectAlternativeNameType>>,
    subject_name_format: Option<SubjectNameFormat>,
}

impl AndroidWorkProfileCertificateProfileBase {
    pub const ODATA_TYPE: &'static str =
        "#microsoft.graph.androidWorkProfileCertificateProfileBase";

    pub fn new() -> Self {
        let mut profile = Self::default();
        profile.set_odata_type(Some(Self::ODATA_TYPE.to_owned()));

        profile
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

    /// Scale for the certificate validity period.
    pub fn certificate_validity_period_scale(&self) -> Option<CertificateValidityPeriodScale> {
        self.certificate_validity_period_scale
    }

    pub fn set_certificate_validity_period_scale(
        &mut self,
        value: Option<CertificateValidityPeriodScale>,
    ) {
        self.certificate_validity_period_scale = value;
    }

    /// Value for the certificate validity period.
    pub fn certificate_validity_period_value(&self) -> Option<i32> {
        self.certificate_validity_period_value
    }

    pub fn set_certificate_validity_period_value(&mut self, value: Option<i32>) {
        self.certificate_validity_period_value = value;
    }

    /// Extended key usage (EKU) settings.
    pub fn extended_key_usages(&self) -> Option<&[ExtendedKeyUsage]> {
        self.extended_key_usages.as_deref()
    }

    pub fn set_extended_key_usages(&mut self, value: Option<Vec<ExtendedKeyUsage>>) {
        self.extended_key_usages = value;
    }

    /// Certificate renewal threshold percentage. Valid values 1 to 99.
    pub fn renewal_threshold_percentage(&self) -> Option<i32> {
        self.renewal_threshold_percentage
    }

    pub fn set_renewal_threshold_percentage(&mut self, value: Option<i32>) {
        self.renewal_threshold_percentage = value;
    }

    pub fn root_certificate(&self) -> Option<&AndroidWorkProfileTrustedRootCertificate> {
        self.root_certificate.as_ref()
    }

    pub fn set_root_certificate(
        &mut self,
        value: Option<AndroidWorkProfileTrustedRootCertificate>,
    ) {
        self.root_certificate = value;
    }

    pub fn subject_alternative_name_type(&self) -> Option<&[SubjectAlternativeNameType]> {
        self.subject_alternative_name_type.as_deref()
    }

    pub fn set_subject_alternative_name_type(
        &mut self,
        value: Option<Vec<SubjectAlternativeNameType>>,
    ) {
        self.subject_alternative_name_type = value;
    }

    pub fn subject_name_format(&self) -> Option<SubjectNameFormat> {
        self.subject_name_format
    }

    pub fn set_subject_name_format(&mut self, value: Option<SubjectNameFormat>) {
        self.subject_name_format = value;
    }
}

impl Deref for AndroidWorkProfileCertificateProfileBase {
    type Target = DeviceConfiguration;

    fn deref(&self) -> &Self::Target {
        &self.device_configuration
    }
}

impl DerefMut for AndroidWorkProfileCertificateProfileBase {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.device_configuration
    }
}

static FIELD_DESERIALIZERS: LazyLock<FieldDeserializers<AndroidWorkProfileCertificateProfileBase>> =
    LazyLock::new(|| {
        FieldDeserializers::<AndroidWorkProfileCertificateProfileBase>::inherit(
            DeviceConfiguration::field_deserializers(),
            AndroidWorkProfileCertificateProfileBase::device_configuration_mut,
        )
        .with("certificateValidityPeriodScale", |model, node| {
            model.certificate_validity_period_scale = node.enum_value()?;
            Ok(())
        })
        .with("certificateValidityPeriodValue", |model, node| {
            model.certificate_validity_period_value = node.i32_value()?;
            Ok(())
        })
        .with("extendedKeyUsages", |model, node| {
            model.extended_key_usages =
                node.collection_of_object_values(ExtendedKeyUsage::from_discriminator_value)?;
            Ok(())
        })
        .with("renewalThresholdPercentage", |model, node| {
            model.renewal_threshold_percentage = node.i32_value()?;
            Ok(())
        })
        .with("rootCertificate", |model, node| {
            model.root_certificate = node
                .object_value(AndroidWorkProfileTrustedRootCertificate::from_discriminator_value)?;
            Ok(())
        })
        .with("subjectAlternativeNameType", |model, node| {
            model.subject_alternative_name_type = node.enum_flags_value()?;
            Ok(())
        })
        .with("subjectNameFormat", |model, node| {
            model.subject_name_format = node.enum_value()?;
            Ok(())
        })
    });

impl AdditionalDataHolder for AndroidWorkProfileCertificateProfileBase {
    fn additional_data(&self) -> &Map<String, Value> {
        self.device_configuration.additional_data()
    }

    fn additional_data_mut(&mut self) -> &mut Map<String, Value> {
        self.device_configuration.additional_data_mut()
    }
}

impl Parsable for AndroidWorkProfileCertificateProfileBase {
    fn deserialize_field(&mut self, name: &str, node: &dyn ParseNode) -> Result<bool, Error> {
        FIELD_DESERIALIZERS.deserialize(self, name, node)
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), Error> {
        self.device_configuration.serialize(writer)?;
        writer.write_enum_value(
            "certificateValidityPeriodScale",
            self.certificate_validity_period_scale,
        )?;
        writer.write_i32_value(
            "certificateValidityPeriodValue",
            self.certificate_validity_period_value,
        )?;
        writer.write_collection("extendedKeyUsages", self.extended_key_usages())?;
        writer.write_i32_value("renewalThresholdPercentage", self.renewal_threshold_percentage)?;
        writer.write_object_value(
            "rootCertificate",
            self.root_certificate().map(|value| value as &dyn Parsable),
        )?;
        writer.write_enum_flags_value(
            "subjectAlternativeNameType",
            self.subject_alternative_name_type(),
        )?;
        writer.write_enum_value("subjectNameFormat", self.subject_name_format)
    }
}

/// Any type derived from [`AndroidWorkProfileCertificateProfileBase`] known to
/// this crate.
#[derive(Clone, Debug, PartialEq)]
pub enum AnyAndroidWorkProfileCertificateProfileBase {
    AndroidWorkProfileCertificateProfileBase(AndroidWorkProfileCertificateProfileBase),
    AndroidWorkProfilePkcsCertificateProfile(AndroidWorkProfilePkcsCertificateProfile),
    AndroidWorkProfileScepCertificateProfile(AndroidWorkProfileScepCertificateProfile),
}

static REGISTRY: DiscriminatorRegistry<AnyAndroidWorkProfileCertificateProfileBase> =
    DiscriminatorRegistry::<AnyAndroidWorkProfileCertificateProfileBase>::new(
        || AndroidWorkProfileCertificateProfileBase::new().into(),
        &[
            (AndroidWorkProfilePkcsCertificateProfile::ODATA_TYPE, || {
                AndroidWorkProfilePkcsCertificateProfile::new().into()
            }),
            (AndroidWorkProfileScepCertificateProfile::ODATA_TYPE, || {
                AndroidWorkProfileScepCertificateProfile::new().into()
            }),
        ],
    );

impl AnyAndroidWorkProfileCertificateProfileBase {
    pub fn from_discriminator_value(node: &dyn ParseNode) -> Result<Self, Error> {
        REGISTRY.create(node)
    }

    pub fn registry() -> &'static DiscriminatorRegistry<Self> {
        &REGISTRY
    }

    pub fn android_work_profile_certificate_profile_base(
        &self,
    ) -> &AndroidWorkProfileCertificateProfileBase {
        match self {
            Self::AndroidWorkProfileCertificateProfileBase(value) => value,
            Self::AndroidWorkProfilePkcsCertificateProfile(value) => value,
            Self::AndroidWorkProfileScepCertificateProfile(value) => value,
        }
    }

    pub fn android_work_profile_certificate_profile_base_mut(
        &mut self,
    ) -> &mut AndroidWorkProfileCertificateProfileBase {
        match self {
            Self::AndroidWorkProfileCertificateProfileBase(value) => value,
            Self::AndroidWorkProfilePkcsCertificateProfile(value) => value,
            Self::AndroidWorkProfileScepCertificateProfile(value) => value,
        }
    }

    pub fn odata_type(&self) -> Option<&str> {
        self.android_work_profile_certificate_profile_base()
            .odata_type()
    }

    fn as_parsable(&self) -> &dyn Parsable {
        match self {
            Self::AndroidWorkProfileCertificateProfileBase(value) => value,
            Self::AndroidWorkProfilePkcsCertificateProfile(value) => value,
            Self::AndroidWorkProfileScepCertificateProfile(value) => value,
        }
    }

    fn as_parsable_mut(&mut self) -> &mut dyn Parsable {
        match self {
            Self::AndroidWorkProfileCertificateProfileBase(value) => value,
            Self::AndroidWorkProfilePkcsCertificateProfile(value) => value,
            Self::AndroidWorkProfileScepCertificateProfile(value) => value,
        }
    }
}

impl AdditionalDataHolder for AnyAndroidWorkProfileCertificateProfileBase {
    fn additional_data(&self) -> &Map<String, Value> {
        self.as_parsable().additional_data()
    }

    fn additional_data_mut(&mut self) -> &mut Map<String, Value> {
        self.as_parsable_mut().additional_data_mut()
    }
}

impl Parsable for AnyAndroidWorkProfileCertificateProfileBase {
    fn deserialize_field(&mut self, name: &str, node: &dyn ParseNode) -> Result<bool, Error> {
        self.as_parsable_mut().deserialize_field(name, node)
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), Error> {
        self.as_parsable().serialize(writer)
    }
}

impl From<AndroidWorkProfileCertificateProfileBase>
    for AnyAndroidWorkProfileCertificateProfileBase
{
    fn from(value: AndroidWorkProfileCertificateProfileBase) -> Self {
        Self::AndroidWorkProfileCertificateProfileBase(value)
    }
}

impl From<AndroidWorkProfilePkcsCertificateProfile>
    for AnyAndroidWorkProfileCertificateProfileBase
{
    fn from(value: AndroidWorkProfilePkcsCertificateProfile) -> Self {
        Self::AndroidWorkProfilePkcsCertificateProfile(value)
    }
}

impl From<AndroidWorkProfileScepCertificateProfile>
    for AnyAndroidWorkProfileCertificateProfileBase
{
    fn from(value: AndroidWorkProfileScepCertificateProfile) -> Self {
        Self::AndroidWorkProfileScepCertificateProfile(value)
    }
}
