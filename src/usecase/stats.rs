#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListStats {
    pub profiles_seen: usize,
    pub profiles_failed: usize,
    pub bookmarks_emitted: usize,
}
