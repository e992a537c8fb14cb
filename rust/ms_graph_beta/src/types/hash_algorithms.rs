/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

#![doc = "Types related to HashAlgorithms."]
use strum::{Display, EnumString, IntoStaticStr, VariantArray};

use crate::GraphEnum;

/// Hash algorithms usable when signing a SCEP request.
///
/// This is a flags enumeration: a property of this type holds any number of
/// members, sent as a single comma-separated string.
#[derive(
    Copy, Clone, Debug, Display, EnumString, IntoStaticStr, VariantArray, PartialEq, Eq, Hash,
)]
pub enum HashAlgorithms {
    #[strum(serialize = "sha1")]
    Sha1,
    #[strum(serialize = "sha2")]
    Sha2,
}

impl GraphEnum for HashAlgorithms {
    const NAME: &'static str = "HashAlgorithms";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_enum_round_trips;

    #[test]
    fn wire_names_round_trip() {
        assert_enum_round_trips::<HashAlgorithms>();
    }
}
