/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

#![doc = "Types related to AdminConsent."]
use std::sync::LazyLock;

use serde_json::{Map, Value};

use crate::serialization::{
    AdditionalDataHolder, FieldDeserializers, Parsable, ParseNode, SerializationWriter,
    ODATA_TYPE_KEY,
};
use crate::types::AdminConsentState;
use crate::Error;

/// The data sharing consents given by a tenant administrator.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AdminConsent {
    additional_data: Map<String, Value>,
    odata_type: Option<String>,
    share_apns_data: Option<AdminConsentState>,
    share_user_experience_analytics_data: Option<AdminConsentState>,
}

impl AdminConsent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_discriminator_value(_node: &dyn ParseNode) -> Result<Self, Error> {
        Ok(Self::new())
    }

    pub fn field_deserializers() -> &'static FieldDeserializers<Self> {
        &FIELD_DESERIALIZERS
    }

    pub fn odata_type(&self) -> Option<&str> {
        self.odata_type.as_deref()
    }

    pub fn set_odata_type(&mut self, value: Option<String>) {
        self.odata_type = value;
    }

    /// Whether the administrator consented to sharing Apple Push Notification
    /// Service data with Microsoft.
    pub fn share_apns_data(&self) -> Option<AdminConsentState> {
        self.share_apns_data
    }

    pub fn set_share_apns_data(&mut self, value: Option<AdminConsentState>) {
        self.share_apns_data = value;
    }

    /// Whether the administrator consented to sharing user experience
    /// analytics data.
    pub fn share_user_experience_analytics_data(&self) -> Option<AdminConsentState> {
        self.share_user_experience_analytics_data
    }

    pub fn set_share_user_experience_analytics_data(&mut self, value: Option<AdminConsentState>) {
        self.share_user_experience_analytics_data = value;
    }
}

static FIELD_DESERIALIZERS: LazyLock<FieldDeserializers<AdminConsent>> = LazyLock::new(|| {
    FieldDeserializers::<AdminConsent>::new()
        .with(ODATA_TYPE_KEY, |model, node| {
            model.odata_type = node.string_value()?;
            Ok(())
        })
        .with("shareAPNSData", |model, node| {
            model.share_apns_data = node.enum_value()?;
            Ok(())
        })
        .with("shareUserExperienceAnalyticsData", |model, node| {
            model.share_user_experience_analytics_data = node.enum_value()?;
            Ok(())
        })
});

impl AdditionalDataHolder for AdminConsent {
    fn additional_data(&self) -> &Map<String, Value> {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut Map<String, Value> {
        &mut self.additional_data
    }
}

impl Parsable for AdminConsent {
    fn deserialize_field(&mut self, name: &str, node: &dyn ParseNode) -> Result<bool, Error> {
        FIELD_DESERIALIZERS.deserialize(self, name, node)
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), Error> {
        writer.write_string_value(ODATA_TYPE_KEY, self.odata_type())?;
        writer.write_enum_value("shareAPNSData", self.share_apns_data)?;
        writer.write_enum_value(
            "shareUserExperienceAnalyticsData",
            self.share_user_experience_analytics_data,
        )?;
        writer.write_additional_data(&self.additional_data)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::test_utils::{parse, to_json, try_parse_with};
    use crate::{deserialize, serialize, ParseOptions};

    #[test]
    fn round_trip() {
        let mut consent = AdminConsent::new();
        consent.set_share_apns_data(Some(AdminConsentState::Granted));

        let content = serialize(&consent).expect("consent should encode");
        let decoded: AdminConsent = deserialize(
            &content,
            AdminConsent::from_discriminator_value,
            ParseOptions::default(),
        )
        .expect("consent should decode");

        assert_eq!(decoded.share_apns_data(), Some(AdminConsentState::Granted));
        assert_eq!(decoded.share_user_experience_analytics_data(), None);
        assert_eq!(decoded, consent);
    }

    #[test]
    fn complex_types_have_no_preset_discriminator() {
        assert_eq!(AdminConsent::new().odata_type(), None);
        assert_eq!(to_json(&AdminConsent::new()), json!({}));
    }

    #[test]
    fn unknown_properties_are_kept() {
        let value = json!({
            "shareUserExperienceAnalyticsData": "notConfigured",
            "shareDiagnostics": { "enabled": true },
        });

        let consent = parse(&value, AdminConsent::from_discriminator_value);

        assert_eq!(
            consent.share_user_experience_analytics_data(),
            Some(AdminConsentState::NotConfigured)
        );
        assert_eq!(
            consent.additional_data().get("shareDiagnostics"),
            Some(&json!({ "enabled": true }))
        );
        assert_eq!(to_json(&consent), value);
    }

    #[test]
    fn invalid_member_fails_the_object() {
        let value = json!({ "shareAPNSData": "maybe" });

        let result = try_parse_with(
            &value,
            AdminConsent::from_discriminator_value,
            ParseOptions::default(),
        );

        assert!(matches!(
            result,
            Err(Error::UnknownEnumValue {
                type_name: "AdminConsentState",
                ..
            })
        ));
    }
}
