/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

#![doc = "Types related to CertificateRevocationStatus."]
use strum::{Display, EnumString, IntoStaticStr, VariantArray};

use crate::GraphEnum;

/// Progress of a request to revoke a managed device's certificate.
#[derive(
    Copy, Clone, Debug, Display, EnumString, IntoStaticStr, VariantArray, PartialEq, Eq, Hash,
)]
#[strum(serialize_all = "camelCase")]
pub enum CertificateRevocationStatus {
    /// Not revoked.
    None,
    /// Revocation is scheduled.
    Pending,
    /// Revocation command has been issued.
    IssuePending,
    /// Revocation has been issued.
    Issued,
    /// Revocation failed.
    Failed,
    /// Certificate has been revoked.
    Revoked,
}

impl GraphEnum for CertificateRevocationStatus {
    const NAME: &'static str = "CertificateRevocationStatus";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_enum_round_trips;

    #[test]
    fn wire_names_round_trip() {
        assert_enum_round_trips::<CertificateRevocationStatus>();
        assert_eq!(CertificateRevocationStatus::IssuePending.as_str(), "issuePending");
    }
}
