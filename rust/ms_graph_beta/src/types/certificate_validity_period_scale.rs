/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

#![doc = "Types related to CertificateValidityPeriodScale."]
use strum::{Display, EnumString, IntoStaticStr, VariantArray};

use crate::GraphEnum;

#[derive(
    Copy, Clone, Debug, Display, EnumString, IntoStaticStr, VariantArray, PartialEq, Eq, Hash,
)]
#[strum(serialize_all = "camelCase")]
pub enum CertificateValidityPeriodScale {
    Days,
    Months,
    Years,
}

impl GraphEnum for CertificateValidityPeriodScale {
    const NAME: &'static str = "CertificateValidityPeriodScale";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_enum_round_trips;

    #[test]
    fn wire_names_round_trip() {
        assert_enum_round_trips::<CertificateValidityPeriodScale>();
    }
}
