/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! Graph models and enumerations, one module per Graph type.
//!
//! Polymorphic base types come with an `Any*` union in their module, which is
//! the type to decode into whenever the concrete type is only known from the
//! object's discriminator.

pub mod account_status;
pub mod admin_consent;
pub mod admin_consent_state;
pub mod android_work_profile_certificate_profile_base;
pub mod android_work_profile_pkcs_certificate_profile;
pub mod android_work_profile_scep_certificate_profile;
pub mod android_work_profile_trusted_root_certificate;
pub mod certificate_revocation_status;
pub mod certificate_store;
pub mod certificate_validity_period_scale;
pub mod custom_subject_alternative_name;
pub mod device_configuration;
pub mod device_configuration_collection_response;
pub mod device_platform_type;
pub mod entity;
pub mod extended_key_usage;
pub mod hash_algorithms;
pub mod key_size;
pub mod key_usages;
pub mod managed_device_certificate_state;
pub mod subject_alternative_name_type;
pub mod subject_name_format;

pub use account_status::AccountStatus;
pub use admin_consent::AdminConsent;
pub use admin_consent_state::AdminConsentState;
pub use android_work_profile_certificate_profile_base::{
    AndroidWorkProfileCertificateProfileBase, AnyAndroidWorkProfileCertificateProfileBase,
};
pub use android_work_profile_pkcs_certificate_profile::AndroidWorkProfilePkcsCertificateProfile;
pub use android_work_profile_scep_certificate_profile::AndroidWorkProfileScepCertificateProfile;
pub use android_work_profile_trusted_root_certificate::AndroidWorkProfileTrustedRootCertificate;
pub use certificate_revocation_status::CertificateRevocationStatus;
pub use certificate_store::CertificateStore;
pub use certificate_validity_period_scale::CertificateValidityPeriodScale;
pub use custom_subject_alternative_name::CustomSubjectAlternativeName;
pub use device_configuration::{AnyDeviceConfiguration, DeviceConfiguration};
pub use device_configuration_collection_response::DeviceConfigurationCollectionResponse;
pub use device_platform_type::DevicePlatformType;
pub use entity::{AnyEntity, Entity};
pub use extended_key_usage::ExtendedKeyUsage;
pub use hash_algorithms::HashAlgorithms;
pub use key_size::KeySize;
pub use key_usages::KeyUsages;
pub use managed_device_certificate_state::ManagedDeviceCertificateState;
pub use subject_alternative_name_type::SubjectAlternativeNameType;
pub use subject_name_format::SubjectNameFormat;
