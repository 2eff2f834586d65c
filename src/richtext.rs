use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::formats::AssetFile;
use crate::youtube;

/// A Contentful rich-text document: a root node holding block children.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub content: Vec<Node>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Node {
    #[serde(rename = "nodeType", default)]
    pub node_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub marks: Vec<Mark>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<NodeData>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub content: Vec<Node>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mark {
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NodeData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<EmbedTarget>,
}

/// Target of an embedded block. Assets and entries share the shape; an
/// entry target is only recognized when it carries a `youtubeUrl` field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmbedTarget {
    #[serde(default)]
    pub fields: EmbedFields,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmbedFields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<AssetFile>,
    #[serde(rename = "youtubeUrl", default, skip_serializing_if = "Option::is_none")]
    pub youtube_url: Option<String>,
}

/// Render a rich-text document to an HTML fragment. A missing document or
/// one without content renders to the empty string.
pub fn render(document: Option<&Document>) -> String {
    let Some(document) = document else {
        return String::new();
    };
    render_children(&document.content)
}

/// Parse a raw rich-text field value and render it. Values that are not a
/// document (or absent) render to the empty string.
pub fn render_value(value: Option<&Value>) -> String {
    let document = value
        .cloned()
        .and_then(|v| serde_json::from_value::<Document>(v).ok());
    render(document.as_ref())
}

fn render_children(nodes: &[Node]) -> String {
    nodes.iter().map(render_node).collect()
}

// Dispatch order matters: embedded blocks must be checked before the block
// tag table so an embedded entry never falls through to the child
// pass-through.
fn render_node(node: &Node) -> String {
    match node.node_type.as_str() {
        "text" => {
            let mut text = escape_html(node.value.as_deref().unwrap_or_default());
            // First mark ends up outermost.
            for mark in node.marks.iter().rev() {
                if let Some(tag) = inline_tag(&mark.kind) {
                    text = format!("<{tag}>{text}</{tag}>");
                }
            }
            text
        }
        "hyperlink" => {
            let uri = node
                .data
                .as_ref()
                .and_then(|data| data.uri.as_deref())
                .unwrap_or_default();
            format!(
                "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>",
                escape_html(uri),
                render_children(&node.content)
            )
        }
        "embedded-asset-block" => render_asset_embed(node),
        "embedded-entry-block" => {
            let youtube_url = node
                .data
                .as_ref()
                .and_then(|data| data.target.as_ref())
                .and_then(|target| target.fields.youtube_url.as_deref());
            match youtube_url {
                Some(url) => youtube::embed_html(url),
                None => String::new(),
            }
        }
        "hr" => "<hr />".to_owned(),
        other => match block_tag(other) {
            Some(tag) => format!("<{tag}>{}</{tag}>", render_children(&node.content)),
            None => render_children(&node.content),
        },
    }
}

fn render_asset_embed(node: &Node) -> String {
    let Some(target) = node.data.as_ref().and_then(|data| data.target.as_ref()) else {
        return String::new();
    };
    let Some(file) = target.fields.file.as_ref() else {
        return String::new();
    };
    let Some(file_url) = file.url.as_deref() else {
        return String::new();
    };

    let url = format!("https:{file_url}");
    let alt = [
        target.fields.title.as_deref(),
        target.fields.description.as_deref(),
    ]
    .into_iter()
    .flatten()
    .find(|text| !text.is_empty())
    .unwrap_or_default();
    let content_type = file.content_type.as_deref().unwrap_or_default();

    if content_type.starts_with("image/") {
        return format!(
            "<div class=\"rich-media\"><img src=\"{url}\" alt=\"{}\" loading=\"lazy\" /></div>",
            escape_html(alt)
        );
    }
    if content_type.starts_with("video/") {
        return format!("<div class=\"rich-media\"><video src=\"{url}\" controls></video></div>");
    }

    String::new()
}

fn inline_tag(mark: &str) -> Option<&'static str> {
    Some(match mark {
        "bold" => "strong",
        "italic" => "em",
        "underline" => "u",
        "code" => "code",
        _ => return None,
    })
}

fn block_tag(node_type: &str) -> Option<&'static str> {
    Some(match node_type {
        "heading-1" => "h1",
        "heading-2" => "h2",
        "heading-3" => "h3",
        "heading-4" => "h4",
        "heading-5" => "h5",
        "heading-6" => "h6",
        "paragraph" => "p",
        "blockquote" => "blockquote",
        "unordered-list" => "ul",
        "ordered-list" => "ol",
        "list-item" => "li",
        _ => return None,
    })
}

// Only the four markup-significant characters; apostrophes pass through
// unchanged.
fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}
