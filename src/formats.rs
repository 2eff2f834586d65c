use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Raw "list entries" response from the Contentful delivery API. Linked
/// assets and entries arrive out-of-band in `includes`, keyed by id from
/// link objects inside `items[].fields`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawResponse {
    #[serde(default)]
    pub items: Vec<RawEntry>,
    #[serde(default)]
    pub includes: Option<Includes>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Includes {
    #[serde(rename = "Asset", default)]
    pub assets: Vec<RawAsset>,
    #[serde(rename = "Entry", default)]
    pub entries: Vec<RawEntry>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawEntry {
    #[serde(default)]
    pub sys: Sys,
    #[serde(default)]
    pub fields: HashMap<String, Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Sys {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(rename = "contentType", default)]
    pub content_type: Option<ContentTypeRef>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContentTypeRef {
    pub sys: ContentTypeSys,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContentTypeSys {
    #[serde(default)]
    pub id: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawAsset {
    #[serde(default)]
    pub sys: Sys,
    #[serde(default)]
    pub fields: AssetFields,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AssetFields {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub file: Option<AssetFile>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssetFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(rename = "contentType", default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<FileDetails>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageSize>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ImageSize {
    pub width: u64,
    pub height: u64,
}

/// An asset link flattened to the fields the site actually consumes.
/// `width`/`height` are omitted from the serialized form when the asset has
/// no image details, matching the resolved-record shape downstream templates
/// expect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedAsset {
    pub url: Option<String>,
    pub title: String,
    pub description: String,
    #[serde(rename = "contentType")]
    pub content_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u64>,
}
