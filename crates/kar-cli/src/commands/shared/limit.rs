/// Page size for a list: `--page-size`, then the global `--limit`, then the
/// configured default. Zero counts as unset at every level.
#[must_use]
pub fn effective_limit(page_size: Option<u32>, global: Option<u32>, default_limit: u32) -> u32 {
    [page_size, global]
        .into_iter()
        .flatten()
        .find(|limit| *limit > 0)
        .unwrap_or(default_limit)
}
