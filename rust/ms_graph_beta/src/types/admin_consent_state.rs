/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

#![doc = "Types related to AdminConsentState."]
use strum::{Display, EnumString, IntoStaticStr, VariantArray};

use crate::GraphEnum;

/// Whether an administrator has consented to sharing a category of data.
#[derive(
    Copy, Clone, Debug, Display, EnumString, IntoStaticStr, VariantArray, PartialEq, Eq, Hash,
)]
#[strum(serialize_all = "camelCase")]
pub enum AdminConsentState {
    NotConfigured,
    Granted,
    NotGranted,
}

impl GraphEnum for AdminConsentState {
    const NAME: &'static str = "AdminConsentState";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_enum_round_trips;

    #[test]
    fn wire_names_round_trip() {
        assert_enum_round_trips::<AdminConsentState>();
        assert_eq!(AdminConsentState::NotGranted.as_str(), "notGranted");
    }
}
