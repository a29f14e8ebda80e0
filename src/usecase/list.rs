use crate::domain::error::AppError;
use crate::domain::model::BookmarkRecord;
use crate::domain::traits::ProfileLocator;
use crate::infrastructure::serde_json_adapter::{read_bookmarks, read_local_state, RegistryEntry};
use crate::usecase::flatten::flatten;
use crate::usecase::stats::ListStats;
use futures::future::join_all;
use tracing::{debug, error, info};

/// Loads every profile's bookmarks and returns them flattened, in registry order.
///
/// Registry failures abort. A profile whose registry entry or bookmark file
/// cannot be loaded is logged and contributes nothing; the remaining profiles
/// still come through.
pub async fn list_bookmarks(
    locator: &dyn ProfileLocator,
) -> Result<(Vec<BookmarkRecord>, ListStats), AppError> {
    let registry = locator.registry_path()?;
    debug!(path = %registry.display(), "reading profile registry");
    let entries = read_local_state(&registry)
        .await
        .map_err(AppError::RegistryLoad)?;

    let mut stats = ListStats {
        profiles_seen: entries.len(),
        ..ListStats::default()
    };

    // Joined positionally: output follows registry order, not completion order.
    let results = join_all(
        entries
            .into_iter()
            .map(|entry| load_profile(locator, entry)),
    )
    .await;

    let mut records = Vec::new();
    for result in results {
        match result {
            Ok(flat) => records.extend(flat),
            Err(err) if err.is_fatal() => return Err(err),
            Err(err) => {
                stats.profiles_failed += 1;
                error!("{err}");
            }
        }
    }
    stats.bookmarks_emitted = records.len();

    info!(
        profiles_seen = stats.profiles_seen,
        profiles_failed = stats.profiles_failed,
        bookmarks_emitted = stats.bookmarks_emitted,
        "summary"
    );

    Ok((records, stats))
}

async fn load_profile(
    locator: &dyn ProfileLocator,
    entry: RegistryEntry,
) -> Result<Vec<BookmarkRecord>, AppError> {
    let RegistryEntry { key, profile } = entry;
    let profile_error = |source| AppError::ProfileLoad {
        profile: key.clone(),
        source,
    };
    let profile = profile.map_err(profile_error)?;

    let path = locator.bookmark_path(&profile.key);
    debug!(profile = %profile.key, path = %path.display(), "reading bookmarks");

    let roots = read_bookmarks(&path).await.map_err(profile_error)?;

    Ok(flatten(&roots, "", &profile))
}
