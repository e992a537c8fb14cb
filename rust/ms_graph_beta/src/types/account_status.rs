/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

#![doc = "Types related to AccountStatus."]
use strum::{Display, EnumString, IntoStaticStr, VariantArray};

use crate::GraphEnum;

/// The lifecycle state of an account.
#[derive(
    Copy, Clone, Debug, Display, EnumString, IntoStaticStr, VariantArray, PartialEq, Eq, Hash,
)]
#[strum(serialize_all = "camelCase")]
pub enum AccountStatus {
    Unknown,
    Staged,
    Active,
    Suspended,
    Deleted,
    UnknownFutureValue,
}

impl GraphEnum for AccountStatus {
    const NAME: &'static str = "AccountStatus";
    const UNKNOWN_FUTURE_VALUE: Option<Self> = Some(Self::UnknownFutureValue);
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::serialization::json::{JsonParseNode, JsonSerializationWriter};
    use crate::test_utils::assert_enum_round_trips;
    use crate::{Error, ParseNode, ParseOptions, SerializationWriter};

    #[test]
    fn wire_names_round_trip() {
        assert_enum_round_trips::<AccountStatus>();
    }

    #[test]
    fn serialize_values_keeps_order() {
        assert_eq!(
            AccountStatus::serialize_values(&[AccountStatus::Staged, AccountStatus::Active]),
            ["staged", "active"]
        );
        assert!(AccountStatus::serialize_values(&[]).is_empty());
    }

    #[test]
    fn unknown_future_value_is_distinct() {
        assert_eq!(AccountStatus::UnknownFutureValue.to_string(), "unknownFutureValue");
        assert_ne!(AccountStatus::Unknown.as_str(), AccountStatus::UnknownFutureValue.as_str());
        assert_eq!(AccountStatus::parse("unknown").unwrap(), AccountStatus::Unknown);
    }

    #[test]
    fn unrecognized_members_need_opt_in() {
        let value = json!("archived");

        let strict = JsonParseNode::new(&value);
        let strict: &dyn ParseNode = &strict;
        let err = strict.enum_value::<AccountStatus>().unwrap_err();
        assert!(matches!(err, Error::UnknownEnumValue { .. }));
        assert_eq!(err.to_string(), "Unknown AccountStatus value: archived");

        let lenient = JsonParseNode::with_options(
            &value,
            ParseOptions {
                include_unknown_enum_members: true,
            },
        );
        let lenient: &dyn ParseNode = &lenient;
        assert_eq!(
            lenient.enum_value::<AccountStatus>().unwrap(),
            Some(AccountStatus::UnknownFutureValue)
        );
    }

    #[test]
    fn parsing_is_case_sensitive() {
        assert!(AccountStatus::parse("Active").is_err());
        assert!(AccountStatus::parse("").is_err());
    }

    #[test]
    fn collection_with_unrecognized_member_is_strict_by_default() {
        let value = json!(["staged", "active", "archived"]);
        let node = JsonParseNode::new(&value);
        let node: &dyn ParseNode = &node;

        let err = node.collection_of_enum_values::<AccountStatus>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown AccountStatus value: archived");
    }

    #[test]
    fn collection_maps_unrecognized_members_when_opted_in() {
        let value = json!(["staged", "active", "archived"]);
        let node = JsonParseNode::with_options(
            &value,
            ParseOptions {
                include_unknown_enum_members: true,
            },
        );
        let node: &dyn ParseNode = &node;

        assert_eq!(
            node.collection_of_enum_values::<AccountStatus>().unwrap(),
            Some(vec![
                AccountStatus::Staged,
                AccountStatus::Active,
                AccountStatus::UnknownFutureValue,
            ])
        );

        let null = json!(null);
        let null = JsonParseNode::new(&null);
        let null: &dyn ParseNode = &null;
        assert_eq!(null.collection_of_enum_values::<AccountStatus>().unwrap(), None);
    }

    #[test]
    fn collection_is_written_in_order() {
        let statuses = [
            AccountStatus::Suspended,
            AccountStatus::Staged,
            AccountStatus::UnknownFutureValue,
        ];

        let mut writer = JsonSerializationWriter::new();
        let sink: &mut dyn SerializationWriter = &mut writer;
        sink.write_collection_of_enum_values("statuses", Some(&statuses[..])).unwrap();
        sink.write_collection_of_enum_values::<AccountStatus>("absent", None).unwrap();

        assert_eq!(
            writer.into_value(),
            json!({ "statuses": ["suspended", "staged", "unknownFutureValue"] })
        );
    }
}
