/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

#![doc = "Types related to DevicePlatformType."]
use strum::{Display, EnumString, IntoStaticStr, VariantArray};

use crate::GraphEnum;

/// The platform a managed device runs.
#[derive(
    Copy, Clone, Debug, Display, EnumString, IntoStaticStr, VariantArray, PartialEq, Eq, Hash,
)]
#[strum(serialize_all = "camelCase")]
pub enum DevicePlatformType {
    Android,
    AndroidForWork,
    #[strum(serialize = "iOS")]
    Ios,
    #[strum(serialize = "macOS")]
    MacOs,
    #[strum(serialize = "windowsPhone81")]
    WindowsPhone81,
    #[strum(serialize = "windows81AndLater")]
    Windows81AndLater,
    #[strum(serialize = "windows10AndLater")]
    Windows10AndLater,
    AndroidWorkProfile,
    Unknown,
    #[strum(serialize = "androidAOSP")]
    AndroidAosp,
    AndroidMobileApplicationManagement,
    #[strum(serialize = "iOSMobileApplicationManagement")]
    IosMobileApplicationManagement,
    UnknownFutureValue,
}

impl GraphEnum for DevicePlatformType {
    const NAME: &'static str = "DevicePlatformType";
    const UNKNOWN_FUTURE_VALUE: Option<Self> = Some(Self::UnknownFutureValue);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_enum_round_trips;

    #[test]
    fn irregular_names_match_the_service() {
        assert_enum_round_trips::<DevicePlatformType>();

        for (member, name) in [
            (DevicePlatformType::Ios, "iOS"),
            (DevicePlatformType::MacOs, "macOS"),
            (DevicePlatformType::WindowsPhone81, "windowsPhone81"),
            (DevicePlatformType::AndroidAosp, "androidAOSP"),
            (DevicePlatformType::IosMobileApplicationManagement, "iOSMobileApplicationManagement"),
            (DevicePlatformType::AndroidForWork, "androidForWork"),
        ] {
            assert_eq!(member.as_str(), name);
        }
    }

    #[test]
    fn evolvable_fallback() {
        assert_eq!(
            DevicePlatformType::parse_evolvable("visionOS", true).unwrap(),
            DevicePlatformType::UnknownFutureValue
        );
        assert!(DevicePlatformType::parse_evolvable("visionOS", false).is_err());
        assert_eq!(
            DevicePlatformType::parse_evolvable("android", true).unwrap(),
            DevicePlatformType::Android
        );
    }
}
