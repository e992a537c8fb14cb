/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

#![doc = "Types related to KeyUsages."]
use strum::{Display, EnumString, IntoStaticStr, VariantArray};

use crate::GraphEnum;

/// Permitted uses of a certificate's key. A flags enumeration.
#[derive(
    Copy, Clone, Debug, Display, EnumString, IntoStaticStr, VariantArray, PartialEq, Eq, Hash,
)]
#[strum(serialize_all = "camelCase")]
pub enum KeyUsages {
    KeyEncipherment,
    DigitalSignature,
}

impl GraphEnum for KeyUsages {
    const NAME: &'static str = "KeyUsages";
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::serialization::json::{JsonParseNode, JsonSerializationWriter};
    use crate::test_utils::assert_enum_round_trips;
    use crate::{ParseNode, SerializationWriter};

    #[test]
    fn wire_names_round_trip() {
        assert_enum_round_trips::<KeyUsages>();
    }

    #[test]
    fn flags_travel_as_one_string() {
        let value = json!("keyEncipherment, digitalSignature");
        let node = JsonParseNode::new(&value);
        let node: &dyn ParseNode = &node;

        let usages = node.enum_flags_value::<KeyUsages>().unwrap();
        assert_eq!(
            usages.as_deref(),
            Some(&[KeyUsages::KeyEncipherment, KeyUsages::DigitalSignature][..])
        );

        let mut writer = JsonSerializationWriter::new();
        let sink: &mut dyn SerializationWriter = &mut writer;
        sink.write_enum_flags_value("keyUsage", usages.as_deref()).unwrap();
        assert_eq!(
            writer.into_value(),
            json!({ "keyUsage": "keyEncipherment,digitalSignature" })
        );
    }

    #[test]
    fn empty_flags_string_has_no_members() {
        let value = json!("");
        let node = JsonParseNode::new(&value);
        let node: &dyn ParseNode = &node;

        assert_eq!(node.enum_flags_value::<KeyUsages>().unwrap(), Some(vec![]));
    }

    #[test]
    fn unknown_flag_is_rejected() {
        let value = json!("digitalSignature,nonRepudiation");
        let node = JsonParseNode::new(&value);
        let node: &dyn ParseNode = &node;

        assert!(node.enum_flags_value::<KeyUsages>().is_err());
    }
}
