use classboard_client::Searchable;

/// Filter the loaded page in memory.
///
/// An empty term returns every item. Otherwise an item survives when any
/// of its [`search_fields`](Searchable::search_fields) contains the term,
/// case-insensitively. Pure: the input is never mutated and a fresh
/// sequence comes back on every call.
///
/// This only ever sees the currently loaded page; matching across the
/// whole dataset is what server-mode search is for.
#[must_use]
pub fn filter_items<'a, T: Searchable>(items: &'a [T], term: &str) -> Vec<&'a T> {
    if term.is_empty() {
        return items.iter().collect();
    }
    let needle = term.to_lowercase();
    items
        .iter()
        .filter(|item| {
            item.search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
        })
        .collect()
}
