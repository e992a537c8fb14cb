/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

#![doc = "Types related to AndroidWorkProfileScepCertificateProfile."]
use std::ops::{Deref, DerefMut};
use std::sync::LazyLock;

use serde_json::{Map, Value};

use crate::serialization::{
    AdditionalDataHolder, FieldDeserializers, Parsable, ParseNode, SerializationWriter,
};
use crate::types::{
    AndroidWorkProfileCertificateProfileBase, CertificateStore, CustomSubjectAlternativeName,
    HashAlgorithms, KeySize, KeyUsages, ManagedDeviceCertificateState,
};
use crate::Error;

/// A certificate profile enrolling Android work profile devices through a
/// SCEP server.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AndroidWorkProfileScepCertificateProfile {
    base: AndroidWorkProfileCertificateProfileBase,
    certificate_store: Option<CertificateStore>,
    custom_subject_alternative_names: Option<Vec<CustomSubjectAlternativeName>>,
    hash_algorithm: Option<Vec<HashAlgorithms>>,
    key_size: Option<KeySize>,
    key_usage: Option<Vec<KeyUsages>>,
    managed_device_certificate_states: Option<Vec<ManagedDeviceCertificateState>>,
    scep_server_urls: Option<Vec<String>>,
    subject_alternative_name_format_string: Option<String>,
    subject_name_format_string: Option<String>,
}

impl AndroidWorkProfileScepCertificateProfile {
    pub const ODATA_TYPE: &'static str =
        "#microsoft.graph.androidWorkProfileScepCertificateProfile";

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

    /// Accessor to inherited properties from `AndroidWorkProfileCertificateProfileBase`.
    pub fn android_work_profile_certificate_profile_base(
        &self,
    ) -> &AndroidWorkProfileCertificateProfileBase {
        &self.base
    }

    pub fn android_work_profile_certificate_profile_base_mut(
        &mut self,
    ) -> &mut AndroidWorkProfileCertificateProfileBase {
        &mut self.base
    }

    /// Target store certificate.
    pub fn certificate_store(&self) -> Option<CertificateStore> {
        self.certificate_store
    }

    pub fn set_certificate_store(&mut self, value: Option<CertificateStore>) {
        self.certificate_store = value;
    }

    /// Custom subject alternative name settings. This collection can contain
    /// a maximum of 500 elements.
    pub fn custom_subject_alternative_names(&self) -> Option<&[CustomSubjectAlternativeName]> {
        self.custom_subject_alternative_names.as_deref()
    }

    pub fn set_custom_subject_alternative_names(
        &mut self,
        value: Option<Vec<CustomSubjectAlternativeName>>,
    ) {
        self.custom_subject_alternative_names = value;
    }

    pub fn hash_algorithm(&self) -> Option<&[HashAlgorithms]> {
        self.hash_algorithm.as_deref()
    }

    pub fn set_hash_algorithm(&mut self, value: Option<Vec<HashAlgorithms>>) {
        self.hash_algorithm = value;
    }

    pub fn key_size(&self) -> Option<KeySize> {
        self.key_size
    }

    pub fn set_key_size(&mut self, value: Option<KeySize>) {
        self.key_size = value;
    }

    pub fn key_usage(&self) -> Option<&[KeyUsages]> {
        self.key_usage.as_deref()
    }

    pub fn set_key_usage(&mut self, value: Option<Vec<KeyUsages>>) {
        self.key_usage = value;
    }

    /// Certificate state for devices.
    pub fn managed_device_certificate_states(&self) -> Option<&[ManagedDeviceCertificateState]> {
        self.managed_device_certificate_states.as_deref()
    }

    pub fn set_managed_device_certificate_states(
        &mut self,
        value: Option<Vec<ManagedDeviceCertificateState>>,
    ) {
        self.managed_device_certificate_states = value;
    }

    /// SCEP Server Url(s).
    pub fn scep_server_urls(&self) -> Option<&[String]> {
        self.scep_server_urls.as_deref()
    }

    pub fn set_scep_server_urls(&mut self, value: Option<Vec<String>>) {
        self.scep_server_urls = value;
    }

    pub fn subject_alternative_name_format_string(&self) -> Option<&str> {
        self.subject_alternative_name_format_string.as_deref()
    }

    pub fn set_subject_alternative_name_format_string(&mut self, value: Option<String>) {
        self.subject_alternative_name_format_string = value;
    }

    pub fn subject_name_format_string(&self) -> Option<&str> {
        self.subject_name_format_string.as_deref()
    }

    pub fn set_subject_name_format_string(&mut self, value: Option<String>) {
        self.subject_name_format_string = value;
    }
}

impl Deref for AndroidWorkProfileScepCertificateProfile {
    type Target = AndroidWorkProfileCertificateProfileBase;

    fn deref(&self) -> &Self::Target {
        &self.base
    }
}

impl DerefMut for AndroidWorkProfileScepCertificateProfile {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.base
    }
}

static FIELD_DESERIALIZERS: LazyLock<FieldDeserializers<AndroidWorkProfileScepCertificateProfile>> =
    LazyLock::new(|| {
        FieldDeserializers::<AndroidWorkProfileScepCertificateProfile>::inherit(
            AndroidWorkProfileCertificateProfileBase::field_deserializers(),
            |profile| &mut profile.base,
        )
        .with("certificateStore", |model, node| {
            model.certificate_store = node.enum_value()?;
            Ok(())
        })
        .with("customSubjectAlternativeNames", |model, node| {
            model.custom_subject_alternative_names = node.collection_of_object_values(
                CustomSubjectAlternativeName::from_discriminator_value,
            )?;
            Ok(())
        })
        .with("hashAlgorithm", |model, node| {
            model.hash_algorithm = node.enum_flags_value()?;
            Ok(())
        })
        .with("keySize", |model, node| {
            model.key_size = node.enum_value()?;
            Ok(())
        })
        .with("keyUsage", |model, node| {
            model.key_usage = node.enum_flags_value()?;
            Ok(())
        })
        .with("managedDeviceCertificateStates", |model, node| {
            model.managed_device_certificate_states = node.collection_of_object_values(
                ManagedDeviceCertificateState::from_discriminator_value,
            )?;
            Ok(())
        })
        .with("scepServerUrls", |model, node| {
            model.scep_server_urls = node.collection_of_string_values()?;
            Ok(())
        })
        .with("subjectAlternativeNameFormatString", |model, node| {
            model.subject_alternative_name_format_string = node.string_value()?;
            Ok(())
        })
        .with("subjectNameFormatString", |model, node| {
            model.subject_name_format_string = node.string_value()?;
            Ok(())
        })
    });

impl AdditionalDataHolder for AndroidWorkProfileScepCertificateProfile {
    fn additional_data(&self) -> &Map<String, Value> {
        self.base.additional_data()
    }

    fn additional_data_mut(&mut self) -> &mut Map<String, Value> {
        self.base.additional_data_mut()
    }
}

impl Parsable for AndroidWorkProfileScepCertificateProfile {
    fn deserialize_field(&mut self, name: &str, node: &dyn ParseNode) -> Result<bool, Error> {
        FIELD_DESERIALIZERS.deserialize(self, name, node)
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), Error> {
        self.base.serialize(writer)?;
        writer.write_enum_value("certificateStore", self.certificate_store)?;
        writer.write_collection(
            "customSubjectAlternativeNames",
            self.custom_subject_alternative_names(),
        )?;
        writer.write_enum_flags_value("hashAlgorithm", self.hash_algorithm())?;
        writer.write_enum_value("keySize", self.key_size)?;
        writer.write_enum_flags_value("keyUsage", self.key_usage())?;
        writer.write_collection(
            "managedDeviceCertificateStates",
            self.managed_device_certificate_states(),
        )?;
        writer.write_collection_of_string_values("scepServerUrls", self.scep_server_urls())?;
        writer.write_string_value(
            "subjectAlternativeNameFormatString",
            self.subject_alternative_name_format_string(),
        )?;
        writer.write_string_value("subjectNameFormatString", self.subject_name_format_string())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::types::{AnyAndroidWorkProfileCertificateProfileBase, SubjectAlternativeNameType};
    use crate::{deserialize, serialize, ParseOptions};

    fn fixture() -> Value {
        json!({
            "@odata.type": "#microsoft.graph.androidWorkProfileScepCertificateProfile",
            "id": "4a2b9e77",
            "displayName": "Work profile Wi-Fi certificate",
            "version": 2,
            "renewalThresholdPercentage": 20,
            "subjectNameFormat": "custom",
            "certificateStore": "user",
            "customSubjectAlternativeNames": [
                { "name": "{{UserPrincipalName}}", "sanType": "userPrincipalName" },
            ],
            "hashAlgorithm": "sha1,sha2",
            "keySize": "size2048",
            "keyUsage": "digitalSignature",
            "managedDeviceCertificateStates": [
                {
                    "@odata.type": "#microsoft.graph.managedDeviceCertificateState",
                    "id": "state-1",
                    "certificateThumbprint": "A1B2",
                },
            ],
            "scepServerUrls": ["https://scep.contoso.com/certsrv/mscep/mscep.dll"],
            "subjectNameFormatString": "CN={{UserName}}",
        })
    }

    #[test]
    fn new_presets_discriminator() {
        let profile = AndroidWorkProfileScepCertificateProfile::new();

        assert_eq!(
            profile.odata_type(),
            Some("#microsoft.graph.androidWorkProfileScepCertificateProfile")
        );
        assert_eq!(profile.key_size(), None);
        assert!(profile.additional_data().is_empty());
    }

    #[test]
    fn decodes_through_the_base_factory() {
        let content = serde_json::to_vec(&fixture()).unwrap();

        let profile = deserialize(
            &content,
            AnyAndroidWorkProfileCertificateProfileBase::from_discriminator_value,
            ParseOptions::default(),
        )
        .expect("profile should decode");

        let AnyAndroidWorkProfileCertificateProfileBase::AndroidWorkProfileScepCertificateProfile(
            scep,
        ) = &profile
        else {
            panic!("unexpected variant {profile:?}");
        };

        assert_eq!(scep.id(), Some("4a2b9e77"));
        assert_eq!(scep.display_name(), Some("Work profile Wi-Fi certificate"));
        assert_eq!(scep.renewal_threshold_percentage(), Some(20));
        assert_eq!(scep.certificate_store(), Some(CertificateStore::User));
        assert_eq!(
            scep.hash_algorithm(),
            Some(&[HashAlgorithms::Sha1, HashAlgorithms::Sha2][..])
        );
        assert_eq!(scep.key_size(), Some(KeySize::Size2048));
        assert_eq!(scep.key_usage(), Some(&[KeyUsages::DigitalSignature][..]));

        let names = scep.custom_subject_alternative_names().unwrap();
        assert_eq!(names[0].san_type(), Some(SubjectAlternativeNameType::UserPrincipalName));

        let states = scep.managed_device_certificate_states().unwrap();
        assert_eq!(states.len(), 1);
        assert_eq!(states[0].certificate_thumbprint(), Some("A1B2"));

        assert_eq!(
            scep.scep_server_urls(),
            Some(&["https://scep.contoso.com/certsrv/mscep/mscep.dll".to_owned()][..])
        );
    }

    #[test]
    fn serializes_base_properties_too() {
        let profile = crate::test_utils::parse(
            &fixture(),
            AndroidWorkProfileScepCertificateProfile::from_discriminator_value,
        );

        let content = serialize(&profile).expect("profile should encode");
        let value: Value = serde_json::from_slice(&content).unwrap();

        assert_eq!(value, fixture());
    }

    #[test]
    fn table_layers_every_ancestor() {
        let table = AndroidWorkProfileScepCertificateProfile::field_deserializers();
        let base = AndroidWorkProfileCertificateProfileBase::field_deserializers();

        for name in base.names() {
            assert!(table.contains(name), "missing inherited property {name}");
        }
        for name in ["id", "displayName", "renewalThresholdPercentage", "scepServerUrls"] {
            assert!(table.contains(name), "missing property {name}");
        }
        assert_eq!(table.len(), base.len() + 9);
    }
}
