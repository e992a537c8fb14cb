/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

#![doc = "Types related to SubjectNameFormat."]
use strum::{Display, EnumString, IntoStaticStr, VariantArray};

use crate::GraphEnum;

/// How the subject name of an issued certificate is built.
#[derive(
    Copy, Clone, Debug, Display, EnumString, IntoStaticStr, VariantArray, PartialEq, Eq, Hash,
)]
#[strum(serialize_all = "camelCase")]
pub enum SubjectNameFormat {
    CommonName,
    CommonNameIncludingEmail,
    CommonNameAsEmail,
    Custom,
    #[strum(serialize = "commonNameAsIMEI")]
    CommonNameAsImei,
    CommonNameAsSerialNumber,
    CommonNameAsAadDeviceId,
    CommonNameAsIntuneDeviceId,
    CommonNameAsDurableDeviceId,
}

impl GraphEnum for SubjectNameFormat {
    const NAME: &'static str = "SubjectNameFormat";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_enum_round_trips;

    #[test]
    fn wire_names_round_trip() {
        assert_enum_round_trips::<SubjectNameFormat>();
        assert_eq!(SubjectNameFormat::CommonNameAsImei.as_str(), "commonNameAsIMEI");
        assert_eq!(
            SubjectNameFormat::parse("commonNameAsAadDeviceId").unwrap(),
            SubjectNameFormat::CommonNameAsAadDeviceId
        );
    }
}
