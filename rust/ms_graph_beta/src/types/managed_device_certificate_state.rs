/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

#![doc = "Types related to ManagedDeviceCertificateState."]
use std::ops::{Deref, DerefMut};
use std::sync::LazyLock;

use serde_json::{Map, Value};
use time::OffsetDateTime;

use crate::serialization::{
    AdditionalDataHolder, FieldDeserializers, Parsable, ParseNode, SerializationWriter,
};
use crate::types::{
    CertificateRevocationStatus, CertificateValidityPeriodScale, DevicePlatformType, Entity,
    KeyUsages, SubjectAlternativeNameType, SubjectNameFormat,
};
use crate::Error;

/// The state of a certificate issued to a managed device by a certificate
/// profile.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ManagedDeviceCertificateState {
    entity: Entity,
    certificate_enhanced_key_usage: Option<String>,
    certificate_error_code: Option<i32>,
    certificate_expiration_date_time: Option<OffsetDateTime>,
    certificate_issuance_date_time: Option<OffsetDateTime>,
    certificate_issuer: Option<String>,
    certificate_key_length: Option<i32>,
    certificate_key_usage: Option<Vec<KeyUsages>>,
    certificate_last_issuance_state_changed_date_time: Option<OffsetDateTime>,
    certificate_profile_display_name: Option<String>,
    certificate_revoke_status: Option<CertificateRevocationStatus>,
    certificate_serial_number: Option<String>,
    certificate_subject_alternative_name_format: Option<Vec<SubjectAlternativeNameType>>,
    certificate_subject_alternative_name_format_string: Option<String>,
    certificate_subject_name_format: Option<SubjectNameFormat>,
    certificate_subject_name_format_string: Option<String>,
    certificate_thumbprint: Option<String>,
    certificate_validity_period: Option<i32>,
    certificate_validity_period_units: Option<CertificateValidityPeriodScale>,
    device_display_name: Option<String>,
    device_platform: Option<DevicePlatformType>,
    last_certificate_state_change_date_time: Option<OffsetDateTime>,
    user_display_name: Option<String>,
}

impl ManagedDeviceCertificateState {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.managedDeviceCertificateState";

    pub fn new() -> Self {
        let mut state = Self::default();
        state.set_odata_type(Some(Self::ODATA_TYPE.to_owned()));

        state
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

    /// Extended key usage.
    pub fn certificate_enhanced_key_usage(&self) -> Option<&str> {
        self.certificate_enhanced_key_usage.as_deref()
    }

    pub fn set_certificate_enhanced_key_usage(&mut self, value: Option<String>) {
        self.certificate_enhanced_key_usage = value;
    }

    pub fn certificate_error_code(&self) -> Option<i32> {
        self.certificate_error_code
    }

    pub fn set_certificate_error_code(&mut self, value: Option<i32>) {
        self.certificate_error_code = value;
    }

    /// Certificate expiry date.
    pub fn certificate_expiration_date_time(&self) -> Option<&OffsetDateTime> {
        self.certificate_expiration_date_time.as_ref()
    }

    pub fn set_certificate_expiration_date_time(&mut self, value: Option<OffsetDateTime>) {
        self.certificate_expiration_date_time = value;
    }

    pub fn certificate_issuance_date_time(&self) -> Option<&OffsetDateTime> {
        self.certificate_issuance_date_time.as_ref()
    }

    pub fn set_certificate_issuance_date_time(&mut self, value: Option<OffsetDateTime>) {
        self.certificate_issuance_date_time = value;
    }

    pub fn certificate_issuer(&self) -> Option<&str> {
        self.certificate_issuer.as_deref()
    }

    pub fn set_certificate_issuer(&mut self, value: Option<String>) {
        self.certificate_issuer = value;
    }

    /// Key length, in bits.
    pub fn certificate_key_length(&self) -> Option<i32> {
        self.certificate_key_length
    }

    pub fn set_certificate_key_length(&mut self, value: Option<i32>) {
        self.certificate_key_length = value;
    }

    pub fn certificate_key_usage(&self) -> Option<&[KeyUsages]> {
        self.certificate_key_usage.as_deref()
    }

    pub fn set_certificate_key_usage(&mut self, value: Option<Vec<KeyUsages>>) {
        self.certificate_key_usage = value;
    }

    pub fn certificate_last_issuance_state_changed_date_time(&self) -> Option<&OffsetDateTime> {
        self.certificate_last_issuance_state_changed_date_time.as_ref()
    }

    pub fn set_certificate_last_issuance_state_changed_date_time(
        &mut self,
        value: Option<OffsetDateTime>,
    ) {
        self.certificate_last_issuance_state_changed_date_time = value;
    }

    pub fn certificate_profile_display_name(&self) -> Option<&str> {
        self.certificate_profile_display_name.as_deref()
    }

    pub fn set_certificate_profile_display_name(&mut self, value: Option<String>) {
        self.certificate_profile_display_name = value;
    }

    pub fn certificate_revoke_status(&self) -> Option<CertificateRevocationStatus> {
        self.certificate_revoke_status
    }

    pub fn set_certificate_revoke_status(&mut self, value: Option<CertificateRevocationStatus>) {
        self.certificate_revoke_status = value;
    }

    pub fn certificate_serial_number(&self) -> Option<&str> {
        self.certificate_serial_number.as_deref()
    }

    pub fn set_certificate_serial_number(&mut self, value: Option<String>) {
        self.certificate_serial_number = value;
    }

    pub fn certificate_subject_alternative_name_format(
        &self,
    ) -> Option<&[SubjectAlternativeNameType]> {
        self.certificate_subject_alternative_name_format.as_deref()
    }

    pub fn set_certificate_subject_alternative_name_format(
        &mut self,
        value: Option<Vec<SubjectAlternativeNameType>>,
    ) {
        self.certificate_subject_alternative_name_format = value;
    }

    /// Subject alternative name format string for custom formats.
    pub fn certificate_subject_alternative_name_format_string(&self) -> Option<&str> {
        self.certificate_subject_alternative_name_format_string
            .as_deref()
    }

    pub fn set_certificate_subject_alternative_name_format_string(
        &mut self,
        value: Option<String>,
    ) {
        self.certificate_subject_alternative_name_format_string = value;
    }

    pub fn certificate_subject_name_format(&self) -> Option<SubjectNameFormat> {
        self.certificate_subject_name_format
    }

    pub fn set_certificate_subject_name_format(&mut self, value: Option<SubjectNameFormat>) {
        self.certificate_subject_name_format = value;
    }

    /// Subject name format string for custom subject name formats.
    pub fn certificate_subject_name_format_string(&self) -> Option<&str> {
        self.certificate_subject_name_format_string.as_deref()
    }

    pub fn set_certificate_subject_name_format_string(&mut self, value: Option<String>) {
        self.certificate_subject_name_format_string = value;
    }

    pub fn certificate_thumbprint(&self) -> Option<&str> {
        self.certificate_thumbprint.as_deref()
    }

    pub fn set_certificate_thumbprint(&mut self, value: Option<String>) {
        self.certificate_thumbprint = value;
    }

    /// Validity period, counted in [`Self::certificate_validity_period_units`].
    pub fn certificate_validity_period(&self) -> Option<i32> {
        self.certificate_validity_period
    }

    pub fn set_certificate_validity_period(&mut self, value: Option<i32>) {
        self.certificate_validity_period = value;
    }

    pub fn certificate_validity_period_units(&self) -> Option<CertificateValidityPeriodScale> {
        self.certificate_validity_period_units
    }

    pub fn set_certificate_validity_period_units(
        &mut self,
        value: Option<CertificateValidityPeriodScale>,
    ) {
        self.certificate_validity_period_units = value;
    }

    pub fn device_display_name(&self) -> Option<&str> {
        self.device_display_name.as_deref()
    }

    pub fn set_device_display_name(&mut self, value: Option<String>) {
        self.device_display_name = value;
    }

    pub fn device_platform(&self) -> Option<DevicePlatformType> {
        self.device_platform
    }

    pub fn set_device_platform(&mut self, value: Option<DevicePlatformType>) {
        self.device_platform = value;
    }

    /// Last certificate issuance state change.
    pub fn last_certificate_state_change_date_time(&self) -> Option<&OffsetDateTime> {
        self.last_certificate_state_change_date_time.as_ref()
    }

    pub fn set_last_certificate_state_change_date_time(&mut self, value: Option<OffsetDateTime>) {
        self.last_certificate_state_change_date_time = value;
    }

    pub fn user_display_name(&self) -> Option<&str> {
        self.user_display_name.as_deref()
    }

    pub fn set_user_display_name(&mut self, value: Option<String>) {
        self.user_display_name = value;
    }
}

impl Deref for ManagedDeviceCertificateState {
    type Target = Entity;

    fn deref(&self) -> &Self::Target {
        &self.entity
    }
}

impl DerefMut for ManagedDeviceCertificateState {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.entity
    }
}

static FIELD_DESERIALIZERS: LazyLock<FieldDeserializers<ManagedDeviceCertificateState>> =
    LazyLock::new(|| {
        FieldDeserializers::<ManagedDeviceCertificateState>::inherit(
            Entity::field_deserializers(),
            ManagedDeviceCertificateState::entity_mut,
        )
        .with("certificateEnhancedKeyUsage", |model, node| {
            model.certificate_enhanced_key_usage = node.string_value()?;
            Ok(())
        })
        .with("certificateErrorCode", |model, node| {
            model.certificate_error_code = node.i32_value()?;
            Ok(())
        })
        .with("certificateExpirationDateTime", |model, node| {
            model.certificate_expiration_date_time = node.date_time_value()?;
            Ok(())
        })
        .with("certificateIssuanceDateTime", |model, node| {
            model.certificate_issuance_date_time = node.date_time_value()?;
            Ok(())
        })
        .with("certificateIssuer", |model, node| {
            model.certificate_issuer = node.string_value()?;
            Ok(())
        })
        .with("certificateKeyLength", |model, node| {
            model.certificate_key_length = node.i32_value()?;
            Ok(())
        })
        .with("certificateKeyUsage", |model, node| {
            model.certificate_key_usage = node.enum_flags_value()?;
            Ok(())
        })
        .with("certificateLastIssuanceStateChangedDateTime", |model, node| {
            model.certificate_last_issuance_state_changed_date_time = node.date_time_value()?;
            Ok(())
        })
        .with("certificateProfileDisplayName", |model, node| {
            model.certificate_profile_display_name = node.string_value()?;
            Ok(())
        })
        .with("certificateRevokeStatus", |model, node| {
            model.certificate_revoke_status = node.enum_value()?;
            Ok(())
        })
        .with("certificateSerialNumber", |model, node| {
            model.certificate_serial_number = node.string_value()?;
            Ok(())
        })
        .with("certificateSubjectAlternativeNameFormat", |model, node| {
            model.certificate_subject_alternative_name_format = node.enum_flags_value()?;
            Ok(())
        })
        .with("certificateSubjectAlternativeNameFormatString", |model, node| {
            model.certificate_subject_alternative_name_format_string = node.string_value()?;
            Ok(())
        })
        .with("certificateSubjectNameFormat", |model, node| {
            model.certificate_subject_name_format = node.enum_value()?;
            Ok(())
        })
        .with("certificateSubjectNameFormatString", |model, node| {
            model.certificate_subject_name_format_string = node.string_value()?;
            Ok(())
        })
        .with("certificateThumbprint", |model, node| {
            model.certificate_thumbprint = node.string_value()?;
            Ok(())
        })
        .with("certificateValidityPeriod", |model, node| {
            model.certificate_validity_period = node.i32_value()?;
            Ok(())
        })
        .with("certificateValidityPeriodUnits", |model, node| {
            model.certificate_validity_period_units = node.enum_value()?;
            Ok(())
        })
        .with("deviceDisplayName", |model, node| {
            model.device_display_name = node.string_value()?;
            Ok(())
        })
        .with("devicePlatform", |model, node| {
            model.device_platform = node.enum_value()?;
            Ok(())
        })
        .with("lastCertificateStateChangeDateTime", |model, node| {
            model.last_certificate_state_change_date_time = node.date_time_value()?;
            Ok(())
        })
        .with("userDisplayName", |model, node| {
            model.user_display_name = node.string_value()?;
            Ok(())
        })
    });

impl AdditionalDataHolder for ManagedDeviceCertificateState {
    fn additional_data(&self) -> &Map<String, Value> {
        self.entity.additional_data()
    }

    fn additional_data_mut(&mut self) -> &mut Map<String, Value> {
        self.entity.additional_data_mut()
    }
}

impl Parsable for ManagedDeviceCertificateState {
    fn deserialize_field(&mut self, name: &str, node: &dyn ParseNode) -> Result<bool, Error> {
        FIELD_DESERIALIZERS.deserialize(self, name, node)
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), Error> {
        self.entity.serialize(writer)?;
        writer.write_string_value(
            "certificateEnhancedKeyUsage",
            self.certificate_enhanced_key_usage(),
        )?;
        writer.write_i32_value("certificateErrorCode", self.certificate_error_code)?;
        writer.write_date_time_value(
            "certificateExpirationDateTime",
            self.certificate_expiration_date_time(),
        )?;
        writer.write_date_time_value(
            "certificateIssuanceDateTime",
            self.certificate_issuance_date_time(),
        )?;
        writer.write_string_value("certificateIssuer", self.certificate_issuer())?;
        writer.write_i32_value("certificateKeyLength", self.certificate_key_length)?;
        writer.write_enum_flags_value("certificateKeyUsage", self.certificate_key_usage())?;
        writer.write_date_time_value(
            "certificateLastIssuanceStateChangedDateTime",
            self.certificate_last_issuance_state_changed_date_time(),
        )?;
        writer.write_string_value(
            "certificateProfileDisplayName",
            self.certificate_profile_display_name(),
        )?;
        writer.write_enum_value("certificateRevokeStatus", self.certificate_revoke_status)?;
        writer.write_string_value("certificateSerialNumber", self.certificate_serial_number())?;
        writer.write_enum_flags_value(
            "certificateSubjectAlternativeNameFormat",
            self.certificate_subject_alternative_name_format(),
        )?;
        writer.write_string_value(
            "certificateSubjectAlternativeNameFormatString",
            self.certificate_subject_alternative_name_format_string(),
        )?;
        writer.write_enum_value(
            "certificateSubjectNameFormat",
            self.certificate_subject_name_format,
        )?;
        writer.write_string_value(
            "certificateSubjectNameFormatString",
            self.certificate_subject_name_format_string(),
        )?;
        writer.write_string_value("certificateThumbprint", self.certificate_thumbprint())?;
        writer.write_i32_value("certificateValidityPeriod", self.certificate_validity_period)?;
        writer.write_enum_value(
            "certificateValidityPeriodUnits",
            self.certificate_validity_period_units,
        )?;
        writer.write_string_value("deviceDisplayName", self.device_display_name())?;
        writer.write_enum_value("devicePlatform", self.device_platform)?;
        writer.write_date_time_value(
            "lastCertificateStateChangeDateTime",
            self.last_certificate_state_change_date_time(),
        )?;
        writer.write_string_value("userDisplayName", self.user_display_name())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use time::macros::datetime;

    use super::*;
    use crate::test_utils::{parse, parse_with, to_json, try_parse_with};
    use crate::ParseOptions;

    fn fixture() -> Value {
        json!({
            "@odata.type": "#microsoft.graph.managedDeviceCertificateState",
            "id": "b4c3a2f1",
            "certificateExpirationDateTime": "2025-06-30T00:00:00Z",
            "certificateIssuer": "CN=Contoso Issuing CA",
            "certificateKeyLength": 2048,
            "certificateKeyUsage": "keyEncipherment,digitalSignature",
            "certificateRevokeStatus": "issuePending",
            "certificateSubjectAlternativeNameFormat": "emailAddress,userPrincipalName",
            "certificateSubjectNameFormat": "commonNameAsIMEI",
            "certificateThumbprint": "3F2A9C",
            "certificateValidityPeriod": 1,
            "certificateValidityPeriodUnits": "years",
            "deviceDisplayName": "Galaxy S23",
            "devicePlatform": "androidWorkProfile",
            "userDisplayName": "Adele Vance",
        })
    }

    #[test]
    fn decodes_every_kind_of_property() {
        let state = parse(&fixture(), ManagedDeviceCertificateState::from_discriminator_value);

        assert_eq!(state.id(), Some("b4c3a2f1"));
        assert_eq!(
            state.certificate_expiration_date_time(),
            Some(&datetime!(2025-06-30 00:00:00 UTC))
        );
        assert_eq!(state.certificate_key_length(), Some(2048));
        assert_eq!(
            state.certificate_key_usage(),
            Some(&[KeyUsages::KeyEncipherment, KeyUsages::DigitalSignature][..])
        );
        assert_eq!(
            state.certificate_revoke_status(),
            Some(CertificateRevocationStatus::IssuePending)
        );
        assert_eq!(
            state.certificate_subject_alternative_name_format(),
            Some(
                &[
                    SubjectAlternativeNameType::EmailAddress,
                    SubjectAlternativeNameType::UserPrincipalName
                ][..]
            )
        );
        assert_eq!(
            state.certificate_subject_name_format(),
            Some(SubjectNameFormat::CommonNameAsImei)
        );
        assert_eq!(
            state.certificate_validity_period_units(),
            Some(CertificateValidityPeriodScale::Years)
        );
        assert_eq!(state.device_platform(), Some(DevicePlatformType::AndroidWorkProfile));
        assert_eq!(state.user_display_name(), Some("Adele Vance"));
        assert!(state.additional_data().is_empty());
    }

    #[test]
    fn round_trips_to_the_same_document() {
        let state = parse(&fixture(), ManagedDeviceCertificateState::from_discriminator_value);

        assert_eq!(to_json(&state), fixture());
    }

    #[test]
    fn new_platforms_need_the_capability_flag() {
        let value = json!({ "devicePlatform": "androidXR" });

        let strict = try_parse_with(
            &value,
            ManagedDeviceCertificateState::from_discriminator_value,
            ParseOptions::default(),
        );
        assert!(matches!(
            strict,
            Err(Error::UnknownEnumValue { type_name: "DevicePlatformType", .. })
        ));

        let lenient = parse_with(
            &value,
            ManagedDeviceCertificateState::from_discriminator_value,
            ParseOptions {
                include_unknown_enum_members: true,
            },
        );
        assert_eq!(
            lenient.device_platform(),
            Some(DevicePlatformType::UnknownFutureValue)
        );
    }
}
