/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use super::ParseNode;
use crate::Error;

/// The wire property carrying an object's concrete type.
pub const ODATA_TYPE_KEY: &str = "@odata.type";

/// Builds a fresh, empty instance of a model.
pub type Constructor<T> = fn() -> T;

/// Maps the discriminators of every type derived from a polymorphic base to
/// the constructor of that type.
///
/// Entries must be sorted by discriminator, which is verified by the tests of
/// each hierarchy.
pub struct DiscriminatorRegistry<T: 'static> {
    fallback: Constructor<T>,
    entries: &'static [(&'static str, Constructor<T>)],
}

impl<T: 'static> DiscriminatorRegistry<T> {
    /// Creates a registry which builds `fallback` for any discriminator not
    /// found in `entries`.
    pub const fn new(
        fallback: Constructor<T>,
        entries: &'static [(&'static str, Constructor<T>)],
    ) -> Self {
        Self { fallback, entries }
    }

    pub fn lookup(&self, discriminator: &str) -> Option<Constructor<T>> {
        self.entries
            .binary_search_by(|(key, _)| (*key).cmp(discriminator))
            .ok()
            .map(|index| self.entries[index].1)
    }

    pub fn discriminators(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(key, _)| *key)
    }

    /// Builds the instance `node` should be decoded into.
    ///
    /// A missing, null or unrecognized discriminator produces the fallback
    /// instance. Only a discriminator which isn't a string is an error.
    pub fn create(&self, node: &dyn ParseNode) -> Result<T, Error> {
        let discriminator = match node.child_node(ODATA_TYPE_KEY) {
            Some(child) => child.string_value()?,
            None => None,
        };

        let Some(discriminator) = discriminator else {
            return Ok((self.fallback)());
        };

        match self.lookup(&discriminator) {
            Some(constructor) => Ok(constructor()),
            None => {
                log::debug!(
                    "no type registered for discriminator {discriminator}, using base type"
                );
                Ok((self.fallback)())
            }
        }
    }
}

impl<T: 'static> std::fmt::Debug for DiscriminatorRegistry<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.discriminators()).finish()
    }
}
