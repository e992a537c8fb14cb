/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! Typed models for the Microsoft Graph beta endpoint.
//!
//! Every model is a plain record of optional properties plus an ordered bag of
//! additional data for properties the model does not know about. Models are
//! read from a [`serialization::ParseNode`] and written to a
//! [`serialization::SerializationWriter`]; the JSON implementation of both
//! lives in [`serialization::json`].
//!
//! Types which take part in an inheritance hierarchy are decoded through a
//! discriminator registry: the `@odata.type` property of the incoming object
//! selects which concrete model to build, falling back to the base type when
//! the discriminator is missing or unrecognized. See
//! [`serialization::DiscriminatorRegistry`].

use thiserror::Error;

pub mod serialization;
pub mod types;

#[cfg(test)]
mod test_utils;

pub use serialization::json::{deserialize, serialize, ParseOptions};
pub use serialization::{
    AdditionalDataHolder, GraphEnum, Parsable, ParsableFactory, ParseNode, SerializationWriter,
};

#[derive(Debug, Error)]
pub enum Error {
    #[error("Unknown {type_name} value: {value}")]
    UnknownEnumValue {
        type_name: &'static str,
        value: String,
    },

    #[error("property has an unexpected type: expected {expected}, got {actual}")]
    UnexpectedType {
        expected: &'static str,
        actual: String,
    },

    #[error("property value is out of range: {0}")]
    InvalidValue(String),

    #[error("failed to read JSON content")]
    Json(#[from] serde_json::Error),

    #[error("failed to parse date and time")]
    DateTimeParse(#[from] time::error::Parse),

    #[error("failed to format date and time")]
    DateTimeFormat(#[from] time::error::Format),

    #[error("failed to decode binary content")]
    Base64(#[from] base64::DecodeError),
}
