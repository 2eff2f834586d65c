use std::collections::HashMap;

use serde_json::{Map, Value};

use crate::formats::{RawAsset, RawResponse, ResolvedAsset};

/// A flattened entry: original field names mapped to scalars, resolved
/// assets/entries, or `null` for dangling links, plus the synthetic `_id`
/// and `_contentType` keys.
pub type ResolvedFields = Map<String, Value>;

/// The shape of a single field value, decided once at ingestion.
///
/// Contentful marks references with a `{ sys: { type: "Link", linkType,
/// id } }` object in place of the data; everything else is payload.
#[derive(Debug, Clone, PartialEq, Eq)]
enum FieldShape {
    AssetLink(String),
    EntryLink(String),
    Array,
    Scalar,
}

fn classify(value: &Value) -> FieldShape {
    if value.is_array() {
        return FieldShape::Array;
    }

    let sys = value.get("sys");
    let link_type = sys.and_then(|s| s.get("type")).and_then(Value::as_str);
    if link_type != Some("Link") {
        return FieldShape::Scalar;
    }

    let target = sys.and_then(|s| s.get("linkType")).and_then(Value::as_str);
    let id = sys.and_then(|s| s.get("id")).and_then(Value::as_str);
    match (target, id) {
        (Some("Asset"), Some(id)) => FieldShape::AssetLink(id.to_owned()),
        (Some("Entry"), Some(id)) => FieldShape::EntryLink(id.to_owned()),
        _ => FieldShape::Scalar,
    }
}

/// Flatten a paginated delivery-API response into self-contained records.
///
/// Top-level items get full link substitution against the `includes`
/// payload; included entries are only flattened, their own link fields are
/// deliberately left as raw link objects. Downstream consumers depend on
/// that one-hop shape, so it must not be "fixed" here.
pub fn resolve(raw: &RawResponse) -> Vec<ResolvedFields> {
    let mut asset_map: HashMap<&str, ResolvedAsset> = HashMap::new();
    let mut entry_map: HashMap<&str, ResolvedFields> = HashMap::new();

    if let Some(includes) = raw.includes.as_ref() {
        for asset in &includes.assets {
            if let Some(id) = asset.sys.id.as_deref() {
                asset_map.insert(id, resolve_asset(asset));
            }
        }
        for entry in &includes.entries {
            if let Some(id) = entry.sys.id.as_deref() {
                entry_map.insert(id, flatten_fields(&entry.fields));
            }
        }
    }

    raw.items
        .iter()
        .map(|item| {
            let mut fields = flatten_fields(&item.fields);

            for (key, value) in &item.fields {
                match classify(value) {
                    FieldShape::AssetLink(id) => {
                        fields.insert(key.clone(), asset_value(asset_map.get(id.as_str())));
                    }
                    FieldShape::EntryLink(id) => {
                        fields.insert(key.clone(), entry_value(entry_map.get(id.as_str())));
                    }
                    FieldShape::Array => {
                        let elements = value
                            .as_array()
                            .map(Vec::as_slice)
                            .unwrap_or_default()
                            .iter()
                            .map(|element| match classify(element) {
                                FieldShape::AssetLink(id) => {
                                    asset_value(asset_map.get(id.as_str()))
                                }
                                FieldShape::EntryLink(id) => {
                                    entry_value(entry_map.get(id.as_str()))
                                }
                                _ => element.clone(),
                            })
                            .collect();
                        fields.insert(key.clone(), Value::Array(elements));
                    }
                    FieldShape::Scalar => {}
                }
            }

            fields.insert("_id".to_owned(), opt_string(item.sys.id.clone()));
            fields.insert(
                "_contentType".to_owned(),
                opt_string(
                    item.sys
                        .content_type
                        .as_ref()
                        .and_then(|ct| ct.sys.id.clone()),
                ),
            );
            fields
        })
        .collect()
}

fn resolve_asset(asset: &RawAsset) -> ResolvedAsset {
    let file = asset.fields.file.as_ref();
    let image = file.and_then(|f| f.details.as_ref()).and_then(|d| d.image);

    ResolvedAsset {
        url: file
            .and_then(|f| f.url.as_deref())
            .map(|url| format!("https:{url}")),
        title: asset.fields.title.clone().unwrap_or_default(),
        description: asset.fields.description.clone().unwrap_or_default(),
        content_type: file
            .and_then(|f| f.content_type.clone())
            .unwrap_or_default(),
        width: image.map(|i| i.width),
        height: image.map(|i| i.height),
    }
}

fn flatten_fields(fields: &HashMap<String, Value>) -> ResolvedFields {
    fields
        .iter()
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

fn asset_value(asset: Option<&ResolvedAsset>) -> Value {
    asset
        .and_then(|a| serde_json::to_value(a).ok())
        .unwrap_or(Value::Null)
}

fn entry_value(entry: Option<&ResolvedFields>) -> Value {
    entry
        .map(|fields| Value::Object(fields.clone()))
        .unwrap_or(Value::Null)
}

fn opt_string(value: Option<String>) -> Value {
    value.map(Value::String).unwrap_or(Value::Null)
}
