use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::client::Client;
use crate::formats::ResolvedAsset;
use crate::resolve::ResolvedFields;

/// Everything the page needs, assembled from the seven content collections.
/// The same shape backs the static placeholder dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteData {
    pub name: String,
    pub initials: String,
    pub eyebrow: String,
    pub title: String,
    pub subtitle: String,
    pub location: String,
    pub email: String,
    pub instagram: String,
    pub linkedin: String,
    pub stats: Vec<Stat>,
    pub pillars: Vec<Pillar>,
    pub clusters: Vec<Cluster>,
    pub projects: Vec<Project>,
    pub experience: Vec<ExperienceEntry>,
    pub tech_stack: Vec<TechCategory>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pillar {
    pub icon: String,
    pub title: String,
    pub tagline: String,
    pub description: String,
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cluster {
    pub name: String,
    pub color: String,
    pub projects: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub title: String,
    pub subtitle: String,
    /// Rich-text document JSON, rendered to markup by the caller.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<Value>,
    pub tags: Vec<String>,
    pub year: String,
    pub featured: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media: Option<ResolvedAsset>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub youtube_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub date: String,
    pub role: String,
    pub org: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechCategory {
    pub category: String,
    pub color: String,
    pub items: Vec<String>,
}

const DEFAULT_ACCENT: &str = "var(--color-accent-1)";

/// Load the full site dataset. Collections are fetched concurrently and
/// independently; a failed collection becomes an empty section. Returns
/// `Ok(None)` only when settings, pillars and projects are all absent, the
/// trigger for the static placeholder dataset.
pub async fn load(client: &Client) -> anyhow::Result<Option<SiteData>> {
    let (settings, stats, pillars, projects, clusters, experience, tech_stack) = tokio::join!(
        client.single_entry("siteSettings"),
        client.entries("stat", &[]),
        client.entries("pillar", &[]),
        client.entries("project", &[]),
        client.entries("cluster", &[]),
        client.entries("experience", &[]),
        client.entries("techCategory", &[]),
    );

    let settings = collection("siteSettings", settings);
    let stats = collection("stat", stats);
    let pillars = collection("pillar", pillars);
    let projects = collection("project", projects);
    let clusters = collection("cluster", clusters);
    let experience = collection("experience", experience);
    let tech_stack = collection("techCategory", tech_stack);

    if settings.is_none() && pillars.is_none() && projects.is_none() {
        return Ok(None);
    }

    let settings = settings.unwrap_or_default();

    Ok(Some(SiteData {
        name: text_or(&settings, "name", "Your Name"),
        initials: text_or(&settings, "initials", "YN"),
        eyebrow: text_or(&settings, "eyebrow", "Developer · Designer · Builder"),
        title: text_or(&settings, "title", ""),
        subtitle: text_or(&settings, "subtitle", ""),
        location: text_or(&settings, "location", ""),
        email: text_or(&settings, "email", ""),
        instagram: text_or(&settings, "instagramUrl", "https://www.instagram.com"),
        linkedin: text_or(&settings, "linkedinUrl", "https://www.linkedin.com"),
        stats: map_collection(stats, stat_from),
        pillars: map_collection(pillars, pillar_from),
        clusters: map_collection(clusters, cluster_from),
        projects: map_collection(projects, project_from),
        experience: map_collection(experience, experience_from),
        tech_stack: map_collection(tech_stack, tech_category_from),
    }))
}

fn collection<T>(name: &str, result: anyhow::Result<Option<T>>) -> Option<T> {
    match result {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(collection = name, error = %err, "collection unavailable");
            None
        }
    }
}

fn map_collection<T>(
    records: Option<Vec<ResolvedFields>>,
    convert: fn(&ResolvedFields) -> T,
) -> Vec<T> {
    records
        .unwrap_or_default()
        .iter()
        .map(convert)
        .collect()
}

fn stat_from(fields: &ResolvedFields) -> Stat {
    Stat {
        label: text_or(fields, "label", ""),
        value: text_or(fields, "value", ""),
    }
}

fn pillar_from(fields: &ResolvedFields) -> Pillar {
    Pillar {
        icon: text_or(fields, "icon", "⚡"),
        title: text_or(fields, "title", ""),
        tagline: text_or(fields, "tagline", ""),
        description: text_or(fields, "description", ""),
        keywords: string_list(fields, "keywords"),
    }
}

fn cluster_from(fields: &ResolvedFields) -> Cluster {
    Cluster {
        name: text_or(fields, "name", ""),
        color: text_or(fields, "color", DEFAULT_ACCENT),
        projects: string_list(fields, "projectNames"),
    }
}

fn project_from(fields: &ResolvedFields) -> Project {
    Project {
        title: text_or(fields, "title", ""),
        subtitle: text_or(fields, "subtitle", ""),
        description: fields.get("description").filter(|v| v.is_object()).cloned(),
        tags: string_list(fields, "tags"),
        year: text_or(fields, "year", ""),
        featured: fields
            .get("featured")
            .and_then(Value::as_bool)
            .unwrap_or(false),
        media: fields
            .get("media")
            .filter(|v| v.is_object())
            .and_then(|v| serde_json::from_value(v.clone()).ok()),
        youtube_url: fields
            .get("youtubeUrl")
            .and_then(Value::as_str)
            .map(str::to_owned),
    }
}

fn experience_from(fields: &ResolvedFields) -> ExperienceEntry {
    ExperienceEntry {
        date: text_or(fields, "dateRange", ""),
        role: text_or(fields, "role", ""),
        org: text_or(fields, "organization", ""),
        description: text_or(fields, "description", ""),
    }
}

fn tech_category_from(fields: &ResolvedFields) -> TechCategory {
    TechCategory {
        category: text_or(fields, "category", ""),
        color: text_or(fields, "color", DEFAULT_ACCENT),
        items: string_list(fields, "items"),
    }
}

fn text_or(fields: &ResolvedFields, key: &str, default: &str) -> String {
    fields
        .get(key)
        .and_then(Value::as_str)
        .filter(|text| !text.is_empty())
        .unwrap_or(default)
        .to_owned()
}

fn string_list(fields: &ResolvedFields, key: &str) -> Vec<String> {
    fields
        .get(key)
        .and_then(Value::as_array)
        .map(|values| {
            values
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_owned)
                .collect()
        })
        .unwrap_or_default()
}
