use crate::domain::error::LoadError;
use crate::domain::model::{BookmarkNode, ProfileInfo};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::path::Path;
use tokio::fs;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct LocalStateDto {
    pub profile: ProfileSectionDto,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct ProfileSectionDto {
    /// Keyed by profile directory; file order is kept (`preserve_order`).
    pub info_cache: Map<String, Value>,
}

/// Fields stay untyped so a wrongly typed value reads as absent.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ProfileInfoDto {
    #[serde(default)]
    pub name: Option<Value>,

    #[serde(default)]
    pub user_name: Option<Value>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct BookmarksFileDto {
    #[serde(default)]
    pub roots: Map<String, Value>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct BookmarkNodeDto {
    #[serde(rename = "type", default)]
    pub node_type: String,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub url: Option<String>,

    #[serde(default)]
    pub children: Vec<BookmarkNodeDto>,

    /// A decimal string in files Chrome writes; some tools write a number.
    #[serde(default)]
    pub date_added: Option<Value>,

    #[serde(default)]
    pub guid: Option<String>,
}

impl BookmarkNodeDto {
    /// Nodes that are neither folders nor URLs are dropped, along with their subtree.
    pub fn into_node(self) -> Option<BookmarkNode> {
        match self.node_type.as_str() {
            "folder" => Some(BookmarkNode::Folder {
                name: self.name.unwrap_or_default(),
                children: self
                    .children
                    .into_iter()
                    .filter_map(BookmarkNodeDto::into_node)
                    .collect(),
            }),
            "url" => Some(BookmarkNode::Url {
                name: self.name.unwrap_or_default(),
                url: self.url.unwrap_or_default(),
                date_added: parse_chrome_time(self.date_added.as_ref()),
                guid: self.guid.unwrap_or_default(),
            }),
            _ => None,
        }
    }
}

/// Accepts a decimal string or a JSON number; absent or garbled values read as 0.
fn parse_chrome_time(raw: Option<&Value>) -> i64 {
    match raw {
        Some(Value::String(s)) => s.trim().parse::<i64>().ok(),
        Some(Value::Number(n)) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        _ => None,
    }
    .unwrap_or(0)
}

fn parse_error(path: &Path) -> impl FnOnce(serde_json::Error) -> LoadError + '_ {
    move |source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    }
}

/// Reads `path` and parses it as JSON. One read per call, no caching.
///
/// Nesting depth is not limited: folder trees can go deeper than serde_json's
/// default of 128 levels.
pub async fn load_json(path: &Path) -> Result<Value, LoadError> {
    let raw = fs::read_to_string(path).await.map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut de = serde_json::Deserializer::from_str(&raw);
    de.disable_recursion_limit();
    let value = Value::deserialize(&mut de).map_err(parse_error(path))?;
    de.end().map_err(parse_error(path))?;
    Ok(value)
}

fn decode<T: serde::de::DeserializeOwned>(path: &Path, value: Value) -> Result<T, LoadError> {
    serde_json::from_value(value).map_err(parse_error(path))
}

/// One `info_cache` entry. A malformed entry fails only its own profile.
#[derive(Debug)]
pub struct RegistryEntry {
    pub key: String,
    pub profile: Result<ProfileInfo, LoadError>,
}

/// Profiles listed in the registry file, in file order.
pub async fn read_local_state(path: &Path) -> Result<Vec<RegistryEntry>, LoadError> {
    let dto: LocalStateDto = decode(path, load_json(path).await?)?;

    let entries = dto
        .profile
        .info_cache
        .into_iter()
        .map(|(key, value)| {
            let profile = decode::<ProfileInfoDto>(path, value).map(|info| ProfileInfo {
                key: key.clone(),
                name: string_field(info.name).unwrap_or_default(),
                email: string_field(info.user_name),
            });
            RegistryEntry { key, profile }
        })
        .collect();
    Ok(entries)
}

fn string_field(value: Option<Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) => Some(s),
        _ => None,
    }
}

/// The top-level roots of a bookmark file, in file order.
pub async fn read_bookmarks(path: &Path) -> Result<Vec<BookmarkNode>, LoadError> {
    let dto: BookmarksFileDto = decode(path, load_json(path).await?)?;

    let mut roots = Vec::with_capacity(dto.roots.len());
    for (_key, value) in dto.roots {
        // Non-object entries under `roots` are not nodes.
        if !value.is_object() {
            continue;
        }
        let node: BookmarkNodeDto = decode(path, value)?;
        roots.extend(node.into_node());
    }
    Ok(roots)
}
