use crate::domain::model::BookmarkRecord;

pub const CSV_HEADER: &str =
    "Name,URL,Date Added,GUID,Type,Folder Name,Folder Path,Profile Name,Profile Email";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Json,
    Raw,
    Csv,
    Text,
    Markdown,
}

impl OutputFormat {
    /// Never fails: anything unrecognized renders as JSON.
    pub fn parse_lenient(s: &str) -> Self {
        match s {
            "json" => OutputFormat::Json,
            "raw" => OutputFormat::Raw,
            "csv" => OutputFormat::Csv,
            "text" => OutputFormat::Text,
            "markdown" => OutputFormat::Markdown,
            _ => OutputFormat::Json,
        }
    }
}

/// Renders all records as a single string, without a trailing newline.
pub fn render(records: &[BookmarkRecord], format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Json | OutputFormat::Raw => serde_json::to_string_pretty(records),
        OutputFormat::Csv => Ok(to_csv(records)),
        OutputFormat::Text => Ok(to_text(records)),
        OutputFormat::Markdown => Ok(to_markdown(records)),
    }
}

/// Fields are wrapped in quotes as-is. Embedded quotes and commas are not
/// escaped, so such values do not survive a CSV round trip.
fn to_csv(records: &[BookmarkRecord]) -> String {
    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(CSV_HEADER.to_string());
    for r in records {
        lines.push(format!(
            "\"{}\",\"{}\",\"{}\",\"{}\",\"{}\",\"{}\",\"{}\",\"{}\",\"{}\"",
            r.name,
            r.url,
            r.date_added,
            r.guid,
            r.kind,
            r.folder_name,
            r.folder_path,
            r.profile_name,
            r.profile_email.as_deref().unwrap_or_default(),
        ));
    }
    lines.join("\n")
}

fn to_text(records: &[BookmarkRecord]) -> String {
    records
        .iter()
        .map(|r| {
            format!(
                "{}: {} (added on {}) in {}, Profile: {}",
                r.name, r.url, r.date_added, r.folder_path, r.profile_name
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn to_markdown(records: &[BookmarkRecord]) -> String {
    records
        .iter()
        .map(|r| {
            format!(
                "- [{}]({}) added on {} in _{}_, Profile: _{}_",
                r.name, r.url, r.date_added, r.folder_path, r.profile_name
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
