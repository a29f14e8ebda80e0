use serde::Serialize;

/// One local browser profile, as listed in the profile registry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileInfo {
    /// Directory segment under the profile root, e.g. "Default" or "Profile 1".
    pub key: String,
    pub name: String,
    pub email: Option<String>,
}

/// Input tree node. Folders are only traversed; URLs become records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookmarkNode {
    Folder {
        name: String,
        children: Vec<BookmarkNode>,
    },
    Url {
        name: String,
        url: String,
        /// Microseconds since 1601-01-01 UTC.
        date_added: i64,
        guid: String,
    },
}

impl BookmarkNode {
    pub fn name(&self) -> &str {
        match self {
            BookmarkNode::Folder { name, .. } | BookmarkNode::Url { name, .. } => name.as_str(),
        }
    }
}

/// Flattened output row. Field order here is the serialized key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookmarkRecord {
    pub name: String,
    pub url: String,
    pub date_added: String,
    pub guid: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub folder_name: String,
    pub folder_path: String,
    pub profile_name: String,
    pub profile_email: Option<String>,
}

impl BookmarkRecord {
    pub const KIND_URL: &'static str = "url";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_serializes_with_stable_key_order() {
        let rec = BookmarkRecord {
            name: "Rust".to_string(),
            url: "https://www.rust-lang.org/".to_string(),
            date_added: "1970-01-01T00:00:00.000Z".to_string(),
            guid: "g".to_string(),
            kind: BookmarkRecord::KIND_URL.to_string(),
            folder_name: "Dev".to_string(),
            folder_path: "Bookmarks bar/Dev".to_string(),
            profile_name: "Person 1".to_string(),
            profile_email: None,
        };

        let raw = serde_json::to_string(&rec).expect("serialize");
        let keys: Vec<usize> = [
            "\"name\"",
            "\"url\"",
            "\"date_added\"",
            "\"guid\"",
            "\"type\"",
            "\"folder_name\"",
            "\"folder_path\"",
            "\"profile_name\"",
            "\"profile_email\"",
        ]
        .iter()
        .map(|k| raw.find(k).expect("key present"))
        .collect();

        assert!(keys.windows(2).all(|w| w[0] < w[1]), "keys out of order: {raw}");
        assert!(raw.contains("\"profile_email\":null"));
    }

    #[test]
    fn node_name_for_both_variants() {
        let folder = BookmarkNode::Folder {
            name: "Dev".to_string(),
            children: vec![],
        };
        let url = BookmarkNode::Url {
            name: "Rust".to_string(),
            url: "https://www.rust-lang.org/".to_string(),
            date_added: 0,
            guid: String::new(),
        };

        assert_eq!(folder.name(), "Dev");
        assert_eq!(url.name(), "Rust");
    }
}
