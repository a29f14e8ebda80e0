use crate::domain::model::{BookmarkNode, BookmarkRecord, ProfileInfo};
use chrono::{DateTime, SecondsFormat, Utc};

/// Milliseconds between 1601-01-01 and 1970-01-01.
const CHROME_EPOCH_OFFSET_MS: i64 = 11_644_473_600_000;

/// Converts a Chrome timestamp (µs since 1601) to `YYYY-MM-DDTHH:MM:SS.mmmZ`.
///
/// Returns `None` when the instant is outside the representable range.
pub fn chrome_time_to_iso(micros: i64) -> Option<String> {
    let millis = micros / 1000 - CHROME_EPOCH_OFFSET_MS;
    DateTime::<Utc>::from_timestamp_millis(millis)
        .map(|dt| dt.to_rfc3339_opts(SecondsFormat::Millis, true))
}

/// Depth-first, pre-order walk over `nodes`, emitting one record per URL.
///
/// `parent_path` is the slash-terminated chain of enclosing folder names
/// (empty at the top). Sibling order is kept and each folder's records stay
/// contiguous.
pub fn flatten(
    nodes: &[BookmarkNode],
    parent_path: &str,
    profile: &ProfileInfo,
) -> Vec<BookmarkRecord> {
    let mut records = Vec::new();

    for node in nodes {
        match node {
            BookmarkNode::Folder { name, children } => {
                let folder_path = format!("{parent_path}{name}/");
                records.extend(flatten(children, &folder_path, profile));
            }
            BookmarkNode::Url {
                name,
                url,
                date_added,
                guid,
            } => {
                let folder_path = parent_path.strip_suffix('/').unwrap_or(parent_path);
                records.push(BookmarkRecord {
                    name: name.clone(),
                    url: url.clone(),
                    date_added: chrome_time_to_iso(*date_added).unwrap_or_default(),
                    guid: guid.clone(),
                    kind: BookmarkRecord::KIND_URL.to_string(),
                    folder_name: immediate_folder(folder_path).to_string(),
                    folder_path: folder_path.to_string(),
                    profile_name: profile.name.clone(),
                    profile_email: profile.email.clone(),
                });
            }
        }
    }

    records
}

fn immediate_folder(folder_path: &str) -> &str {
    folder_path.rsplit('/').next().unwrap_or(folder_path)
}
