/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use std::collections::HashSet;

use serde_json::Value;

use crate::serialization::json::{JsonParseNode, JsonSerializationWriter};
use crate::{GraphEnum, Parsable, ParsableFactory, ParseNode, ParseOptions};

/// Decodes `value` with default options, panicking on failure.
pub(crate) fn parse<T: Parsable>(value: &Value, factory: ParsableFactory<T>) -> T {
    parse_with(value, factory, ParseOptions::default())
}

pub(crate) fn parse_with<T: Parsable>(
    value: &Value,
    factory: ParsableFactory<T>,
    options: ParseOptions,
) -> T {
    try_parse_with(value, factory, options).expect("value should decode")
}

pub(crate) fn try_parse_with<T: Parsable>(
    value: &Value,
    factory: ParsableFactory<T>,
    options: ParseOptions,
) -> Result<T, crate::Error> {
    let node = JsonParseNode::with_options(value, options);
    let node: &dyn ParseNode = &node;

    node.object_value(factory)
        .map(|model| model.expect("value should be an object"))
}

/// Encodes `model` as a JSON value, panicking on failure.
pub(crate) fn to_json(model: &dyn Parsable) -> Value {
    let mut writer = JsonSerializationWriter::new();
    model.serialize(&mut writer).expect("model should encode");

    writer.into_value()
}

/// Asserts that every member of `E` maps to a distinct wire name which parses
/// back to the same member.
pub(crate) fn assert_enum_round_trips<E: GraphEnum>() {
    let mut seen = HashSet::new();

    for &member in E::VARIANTS {
        let name = member.as_str();
        assert!(seen.insert(name), "{} has duplicate wire name {name}", E::NAME);

        let parsed = E::parse(name).unwrap_or_else(|err| panic!("{name} should parse: {err}"));
        assert_eq!(parsed, member, "{} member {name} did not round-trip", E::NAME);
    }
}
