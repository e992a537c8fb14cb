/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

#![doc = "Types related to KeySize."]
use strum::{Display, EnumString, IntoStaticStr, VariantArray};

use crate::GraphEnum;

/// Key length, in bits, of a requested certificate.
#[derive(
    Copy, Clone, Debug, Display, EnumString, IntoStaticStr, VariantArray, PartialEq, Eq, Hash,
)]
pub enum KeySize {
    #[strum(serialize = "size1024")]
    Size1024,
    #[strum(serialize = "size2048")]
    Size2048,
    #[strum(serialize = "size4096")]
    Size4096,
}

impl GraphEnum for KeySize {
    const NAME: &'static str = "KeySize";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_enum_round_trips;

    #[test]
    fn wire_names_round_trip() {
        assert_enum_round_trips::<KeySize>();
        assert_eq!(KeySize::parse("size2048").unwrap(), KeySize::Size2048);
    }
}
