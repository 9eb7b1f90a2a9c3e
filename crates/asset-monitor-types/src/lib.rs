//! Shared API Types for Asset Monitor
//!
//! This crate is the SINGLE SOURCE OF TRUTH for all types crossing HTTP boundaries.
//!
//! ## Boundaries
//!
//! ```text
//! ┌──────────────────┐         ┌──────────────────┐
//! │  Rust Server     │  JSON   │  WASM UI         │
//! │  (Axum)          │ ◄─────► │  (egui)          │
//! └──────────────────┘         └──────────────────┘
//! ```
//!
//! ## Rules
//!
//! 1. All API types live here - no inline struct definitions in handlers
//! 2. `children` is accepted as a single object or an array, but is always
//!    held (and emitted) as an ordered `Vec`
//! 3. Optional collections deserialize from absent keys and `null` alike

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity key for expansion and selection state.
pub type AssetId = i64;

// ============================================================================
// ASSET MODEL
// ============================================================================

/// A node in the monitored asset hierarchy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub id: AssetId,
    /// Empty when the producer left it out
    #[serde(default)]
    pub name: String,
    /// Short categorical tag ("A".."E" in the bundled dataset). An empty
    /// type never matches a type filter.
    #[serde(rename = "type", default)]
    pub asset_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Display order is insertion order; keys are not required to be unique
    #[serde(
        default,
        deserialize_with = "deserialize_null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub attributes: Vec<AssetAttribute>,
    #[serde(
        default,
        deserialize_with = "deserialize_one_or_many",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub children: Vec<Asset>,
}

impl Asset {
    pub fn new(id: AssetId, name: impl Into<String>, asset_type: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            asset_type: asset_type.into(),
            description: None,
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        self.attributes.push(AssetAttribute {
            key: key.into(),
            value: value.into(),
        });
        self
    }

    pub fn with_child(mut self, child: Asset) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: Vec<Asset>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    pub fn attribute_count(&self) -> usize {
        self.attributes.len()
    }
}

/// Key/value pair shown in the details panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetAttribute {
    pub key: String,
    pub value: AttributeValue,
}

/// Attribute values arrive as JSON strings, numbers or booleans.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Bool(bool),
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::Bool(b) => write!(f, "{}", b),
            AttributeValue::Number(n) => write!(f, "{}", n),
            AttributeValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::Text(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        AttributeValue::Text(value)
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        AttributeValue::Bool(value)
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        AttributeValue::Number(value.into())
    }
}

// ============================================================================
// ASSETS API
// ============================================================================

/// Envelope returned by `GET /api/assets`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetsResponse {
    pub success: bool,
    pub data: Vec<Asset>,
    pub message: String,
}

impl AssetsResponse {
    pub const OK_MESSAGE: &'static str = "Assets fetched successfully";

    pub fn ok(data: Vec<Asset>) -> Self {
        Self {
            success: true,
            data,
            message: Self::OK_MESSAGE.to_string(),
        }
    }
}

// ============================================================================
// DESERIALIZATION HELPERS
// ============================================================================

/// Accepts `null`, a single asset object, or an array of assets.
fn deserialize_one_or_many<'de, D>(deserializer: D) -> Result<Vec<Asset>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de;

    struct OneOrManyVisitor;

    impl<'de> de::Visitor<'de> for OneOrManyVisitor {
        type Value = Vec<Asset>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("an asset or a sequence of assets")
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(Vec::new())
        }

        fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(Vec::new())
        }

        fn visit_some<D: de::Deserializer<'de>>(
            self,
            deserializer: D,
        ) -> Result<Self::Value, D::Error> {
            deserializer.deserialize_any(OneOrManyVisitor)
        }

        fn visit_seq<A: de::SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
            let mut children = Vec::with_capacity(seq.size_hint().unwrap_or(0));
            while let Some(child) = seq.next_element::<Asset>()? {
                children.push(child);
            }
            Ok(children)
        }

        fn visit_map<A: de::MapAccess<'de>>(self, map: A) -> Result<Self::Value, A::Error> {
            let child = Asset::deserialize(de::value::MapAccessDeserializer::new(map))?;
            Ok(vec![child])
        }
    }

    deserializer.deserialize_any(OneOrManyVisitor)
}

fn deserialize_null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
