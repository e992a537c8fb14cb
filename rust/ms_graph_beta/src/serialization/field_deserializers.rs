/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use std::collections::HashMap;
use std::fmt;

use super::ParseNode;
use crate::Error;

/// Decodes one wire property into a model of type `T`.
pub type FieldDeserializer<T> =
    Box<dyn Fn(&mut T, &dyn ParseNode) -> Result<(), Error> + Send + Sync>;

/// A table mapping wire property names to the deserializers which decode them
/// into a model.
///
/// A derived model's table is built from its base's table with
/// [`FieldDeserializers::inherit`], so it answers for every property in the
/// inheritance chain. Tables are built once per type and kept in a static.
pub struct FieldDeserializers<T> {
    entries: HashMap<&'static str, FieldDeserializer<T>>,
}

impl<T: 'static> FieldDeserializers<T> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Starts a table containing every entry of `base`, each of which decodes
    /// into the part of `T` returned by `upcast`.
    pub fn inherit<B: 'static>(
        base: &'static FieldDeserializers<B>,
        upcast: fn(&mut T) -> &mut B,
    ) -> Self {
        let entries = base
            .entries
            .iter()
            .map(|(&name, deserializer)| {
                let inherited: FieldDeserializer<T> =
                    Box::new(move |model: &mut T, node: &dyn ParseNode| {
                        deserializer(upcast(model), node)
                    });

                (name, inherited)
            })
            .collect();

        Self { entries }
    }

    /// Adds the deserializer for the property `name`.
    ///
    /// A type never declares a property twice, nor redeclares one it inherits.
    pub fn with<F>(mut self, name: &'static str, deserializer: F) -> Self
    where
        F: Fn(&mut T, &dyn ParseNode) -> Result<(), Error> + Send + Sync + 'static,
    {
        let previous = self.entries.insert(name, Box::new(deserializer));
        debug_assert!(previous.is_none(), "duplicate field deserializer for {name}");

        self
    }

    pub fn get(&self, name: &str) -> Option<&FieldDeserializer<T>> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Decodes `node` into `model` if the table has an entry for `name`.
    ///
    /// Returns whether an entry was found.
    pub fn deserialize(
        &self,
        model: &mut T,
        name: &str,
        node: &dyn ParseNode,
    ) -> Result<bool, Error> {
        match self.entries.get(name) {
            Some(deserializer) => {
                deserializer(model, node)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

impl<T: 'static> Default for FieldDeserializers<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for FieldDeserializers<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<_> = self.entries.keys().collect();
        names.sort();

        f.debug_struct("FieldDeserializers")
            .field("names", &names)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::LazyLock;

    use serde_json::json;

    use super::*;
    use crate::serialization::json::JsonParseNode;

    #[derive(Debug, Default)]
    struct Base {
        name: Option<String>,
    }

    #[derive(Debug, Default)]
    struct Derived {
        base: Base,
        count: Option<i32>,
    }

    static BASE: LazyLock<FieldDeserializers<Base>> = LazyLock::new(|| {
        FieldDeserializers::<Base>::new().with("name", |model, node| {
            model.name = node.string_value()?;
            Ok(())
        })
    });

    fn derived_table() -> FieldDeserializers<Derived> {
        FieldDeserializers::<Derived>::inherit(&*BASE, |derived| &mut derived.base).with(
            "count",
            |model, node| {
                model.count = node.i32_value()?;
                Ok(())
            },
        )
    }

    #[test]
    fn inherited_table_is_a_superset_of_its_base() {
        let table = derived_table();

        assert_eq!(table.len(), BASE.len() + 1);
        for name in BASE.names() {
            assert!(table.contains(name), "missing inherited entry {name}");
        }
        assert!(table.contains("count"));
        assert!(!BASE.contains("count"));
    }

    #[test]
    fn inherited_entries_decode_into_the_base() {
        let table = derived_table();
        let name = json!("widget");
        let count = json!(3);

        let mut model = Derived::default();
        assert!(table
            .deserialize(&mut model, "name", &JsonParseNode::new(&name))
            .expect("name should decode"));
        assert!(table
            .deserialize(&mut model, "count", &JsonParseNode::new(&count))
            .expect("count should decode"));

        assert_eq!(model.base.name.as_deref(), Some("widget"));
        assert_eq!(model.count, Some(3));
    }

    #[test]
    fn unknown_names_are_not_handled() {
        let table = derived_table();
        let value = json!(true);

        let mut model = Derived::default();
        let handled = table
            .deserialize(&mut model, "somethingElse", &JsonParseNode::new(&value))
            .expect("lookup should not fail");

        assert!(!handled);
        assert!(table.get("somethingElse").is_none());
    }

    #[test]
    fn decode_errors_are_propagated() {
        let table = derived_table();
        let value = json!("not a number");

        let mut model = Derived::default();
        let result = table.deserialize(&mut model, "count", &JsonParseNode::new(&value));

        assert!(matches!(result, Err(Error::UnexpectedType { .. })));
        assert_eq!(model.count, None);
    }
}
