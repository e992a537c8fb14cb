/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

#![doc = "Types related to SubjectAlternativeNameType."]
use strum::{Display, EnumString, IntoStaticStr, VariantArray};

use crate::GraphEnum;

/// Which identities are included in a certificate's subject alternative
/// name. A flags enumeration.
#[derive(
    Copy, Clone, Debug, Display, EnumString, IntoStaticStr, VariantArray, PartialEq, Eq, Hash,
)]
#[strum(serialize_all = "camelCase")]
pub enum SubjectAlternativeNameType {
    None,
    EmailAddress,
    UserPrincipalName,
    #[strum(serialize = "customAzureADAttribute")]
    CustomAzureAdAttribute,
    DomainNameService,
    UniversalResourceIdentifier,
}

impl GraphEnum for SubjectAlternativeNameType {
    const NAME: &'static str = "SubjectAlternativeNameType";
}
