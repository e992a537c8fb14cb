/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use std::fmt::Debug;
use std::str::FromStr;

use strum::VariantArray;

use crate::Error;

/// A Graph enumeration with a fixed set of wire names.
///
/// Implementors derive their wire names with `strum`, which gives a
/// case-sensitive, reversible mapping between each member and its name.
pub trait GraphEnum:
    Copy + Debug + Eq + FromStr + Into<&'static str> + VariantArray + 'static
{
    /// The enumeration's name, as used in error messages.
    const NAME: &'static str;

    /// The sentinel member of an evolvable enumeration, which stands in for
    /// members added to the service after this client was built.
    const UNKNOWN_FUTURE_VALUE: Option<Self> = None;

    fn as_str(self) -> &'static str {
        self.into()
    }

    fn parse(value: &str) -> Result<Self, Error> {
        value.parse().map_err(|_| Error::UnknownEnumValue {
            type_name: Self::NAME,
            value: value.to_owned(),
        })
    }

    /// Parses `value`, decoding members this client doesn't know to the
    /// `unknownFutureValue` sentinel when `include_unknown` is set and the
    /// enumeration has one.
    fn parse_evolvable(value: &str, include_unknown: bool) -> Result<Self, Error> {
        match (Self::parse(value), Self::UNKNOWN_FUTURE_VALUE) {
            (Ok(member), _) => Ok(member),
            (Err(_), Some(sentinel)) if include_unknown => {
                log::debug!(
                    "decoding unrecognized {} value {value} as {}",
                    Self::NAME,
                    sentinel.as_str()
                );
                Ok(sentinel)
            }
            (Err(err), _) => Err(err),
        }
    }

    /// The wire names of `values`, in order.
    fn serialize_values(values: &[Self]) -> Vec<String> {
        values.iter().map(|value| value.as_str().to_owned()).collect()
    }
}
