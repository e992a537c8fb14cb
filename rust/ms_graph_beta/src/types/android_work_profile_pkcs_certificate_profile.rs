/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

#![doc = "Types related to AndroidWorkProfilePkcsCertificateProfile."]
use std::ops::{Deref, DerefMut};
use std::sync::LazyLock;

use serde_json::{Map, Value};

use crate::serialization::{
    AdditionalDataHolder, FieldDeserializers, Parsable, ParseNode, SerializationWriter,
};
use crate::types::{
    AndroidWorkProfileCertificateProfileBase, CertificateStore, CustomSubjectAlternativeName,
    ManagedDeviceCertificateState,
};
use crate::Error;

/// A certificate profile issuing PKCS certificates to Android work profile
/// devices through a certification authority.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AndroidWorkProfilePkcsCertificateProfile {
    base: AndroidWorkProfileCertificateProfileBase,
    certificate_store: Option<CertificateStore>,
    certificate_template_name: Option<String>,
    certification_authority: Option<String>,
    certification_authority_name: Option<String>,
    custom_subject_alternative_names: Option<Vec<CustomSubjectAlternativeName>>,
    managed_device_certificate_states: Option<Vec<ManagedDeviceCertificateState>>,
    subject_alternative_name_format_string: Option<String>,
    subject_name_format_string: Option<String>,
}

impl AndroidWorkProfilePkcsCertificateProfile {
    pub const ODATA_TYPE: &'static str =
        "#microsoft.graph.androidWorkProfilePkcsCertificateProfile";

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

    pub fn certificate_store(&self) -> Option<CertificateStore> {
        self.certificate_store
    }

    pub fn set_certificate_store(&mut self, value: Option<CertificateStore>) {
        self.certificate_store = value;
    }

    /// PKCS certificate template name.
    pub fn certificate_template_name(&self) -> Option<&str> {
        self.certificate_template_name.as_deref()
    }

    pub fn set_certificate_template_name(&mut self, value: Option<String>) {
        self.certificate_template_name = value;
    }

    /// PKCS certification authority FQDN.
    pub fn certification_authority(&self) -> Option<&str> {
        self.certification_authority.as_deref()
    }

    pub fn set_certification_authority(&mut self, value: Option<String>) {
        self.certification_authority = value;
    }

    pub fn certification_authority_name(&self) -> Option<&str> {
        self.certification_authority_name.as_deref()
    }

    pub fn set_certification_authority_name(&mut self, value: Option<String>) {
        self.certification_authority_name = value;
    }

    pub fn custom_subject_alternative_names(&self) -> Option<&[CustomSubjectAlternativeName]> {
        self.custom_subject_alternative_names.as_deref()
    }

    pub fn set_custom_subject_alternative_names(
        &mut self,
        value: Option<Vec<CustomSubjectAlternativeName>>,
    ) {
        self.custom_subject_alternative_names = value;
    }

    pub fn managed_device_certificate_states(&self) -> Option<&[ManagedDeviceCertificateState]> {
        self.managed_device_certificate_states.as_deref()
    }

    pub fn set_managed_device_certificate_states(
        &mut self,
        value: Option<Vec<ManagedDeviceCertificateState>>,
    ) {
        self.managed_device_certificate_states = value;
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

impl Deref for AndroidWorkProfilePkcsCertificateProfile {
    type Target = AndroidWorkProfileCertificateProfileBase;

    fn deref(&self) -> &Self::Target {
        &self.base
    }
}

impl DerefMut for AndroidWorkProfilePkcsCertificateProfile {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.base
    }
}

static FIELD_DESERIALIZERS: LazyLock<FieldDeserializers<AndroidWorkProfilePkcsCertificateProfile>> =
    LazyLock::new(|| {
        FieldDeserializers::<AndroidWorkProfilePkcsCertificateProfile>::inherit(
            AndroidWorkProfileCertificateProfileBase::field_deserializers(),
            |profile| &mut profile.base,
        )
        .with("certificateStore", |model, node| {
            model.certificate_store = node.enum_value()?;
            Ok(())
        })
        .with("certificateTemplateName", |model, node| {
            model.certificate_template_name = node.string_value()?;
            Ok(())
        })
        .with("certificationAuthority", |model, node| {
            model.certification_authority = node.string_value()?;
            Ok(())
        })
        .with("certificationAuthorityName", |model, node| {
            model.certification_authority_name = node.string_value()?;
            Ok(())
        })
        .with("customSubjectAlternativeNames", |model, node| {
            model.custom_subject_alternative_names = node.collection_of_object_values(
                CustomSubjectAlternativeName::from_discriminator_value,
            )?;
            Ok(())
        })
        .with("managedDeviceCertificateStates", |model, node| {
            model.managed_device_certificate_states = node.collection_of_object_values(
                ManagedDeviceCertificateState::from_discriminator_value,
            )?;
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

impl AdditionalDataHolder for AndroidWorkProfilePkcsCertificateProfile {
    fn additional_data(&self) -> &Map<String, Value> {
        self.base.additional_data()
    }

    fn additional_data_mut(&mut self) -> &mut Map<String, Value> {
        self.base.additional_data_mut()
    }
}

impl Parsable for AndroidWorkProfilePkcsCertificateProfile {
    fn deserialize_field(&mut self, name: &str, node: &dyn ParseNode) -> Result<bool, Error> {
        FIELD_DESERIALIZERS.deserialize(self, name, node)
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), Error> {
        self.base.serialize(writer)?;
        writer.write_enum_value("certificateStore", self.certificate_store)?;
        writer.write_string_value("certificateTemplateName", self.certificate_template_name())?;
        writer.write_string_value("certificationAuthority", self.certification_authority())?;
        writer.write_string_value(
            "certificationAuthorityName",
            self.certification_authority_name(),
        )?;
        writer.write_collection(
            "customSubjectAlternativeNames",
            self.custom_subject_alternative_names(),
        )?;
        writer.write_collection(
            "managedDeviceCertificateStates",
            self.managed_device_certificate_states(),
        )?;
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
    use crate::test_utils::{parse, to_json, try_parse_with};
    use crate::types::AnyEntity;
    use crate::ParseOptions;

    #[test]
    fn round_trip_through_the_entity_factory() {
        let value = json!({
            "@odata.type": "#microsoft.graph.androidWorkProfilePkcsCertificateProfile",
            "id": "pkcs-1",
            "certificateStore": "machine",
            "certificateTemplateName": "WorkProfileUser",
            "certificationAuthority": "ca01.contoso.com",
            "certificationAuthorityName": "Contoso-CA01",
            "managedDeviceCertificateStates": [],
            "roleScopeTagIds": ["0"],
        });

        let entity = parse(&value, AnyEntity::from_discriminator_value);

        let AnyEntity::AndroidWorkProfilePkcsCertificateProfile(pkcs) = &entity else {
            panic!("unexpected variant {entity:?}");
        };
        assert_eq!(pkcs.certificate_store(), Some(CertificateStore::Machine));
        assert_eq!(pkcs.certification_authority_name(), Some("Contoso-CA01"));
        assert_eq!(pkcs.managed_device_certificate_states(), Some(&[][..]));
        assert_eq!(pkcs.role_scope_tag_ids(), Some(&["0".to_owned()][..]));

        assert_eq!(to_json(&entity), value);
    }

    #[test]
    fn null_collection_element_is_an_error() {
        let value = json!({ "customSubjectAlternativeNames": [null] });

        let result = try_parse_with(
            &value,
            AndroidWorkProfilePkcsCertificateProfile::from_discriminator_value,
            ParseOptions::default(),
        );

        assert!(matches!(result, Err(Error::UnexpectedType { .. })));
    }

    #[test]
    fn explicit_nulls_leave_properties_unset() {
        let value = json!({
            "certificateTemplateName": null,
            "customSubjectAlternativeNames": null,
        });

        let pkcs =
            parse(&value, AndroidWorkProfilePkcsCertificateProfile::from_discriminator_value);

        assert_eq!(pkcs.certificate_template_name(), None);
        assert_eq!(pkcs.custom_subject_alternative_names(), None);
        assert!(pkcs.additional_data().is_empty());
    }
}
