/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

#![doc = "Types related to CertificateStore."]
use strum::{Display, EnumString, IntoStaticStr, VariantArray};

use crate::GraphEnum;

/// Where on the device an issued certificate is stored.
#[derive(
    Copy, Clone, Debug, Display, EnumString, IntoStaticStr, VariantArray, PartialEq, Eq, Hash,
)]
#[strum(serialize_all = "camelCase")]
pub enum CertificateStore {
    User,
    Machine,
}

impl GraphEnum for CertificateStore {
    const NAME: &'static str = "CertificateStore";
}
