use crate::diary_entry::DiaryEntry;

/// Case-insensitive substring match over title or content.
/// Surrounding whitespace in the query is ignored; a blank query matches all.
pub fn matches(entry: &DiaryEntry, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    matches_normalized(entry, &needle)
}

fn matches_normalized(entry: &DiaryEntry, needle: &str) -> bool {
    needle.is_empty()
        || entry.title.to_lowercase().contains(needle)
        || entry.content.to_lowercase().contains(needle)
}

/// Entries matching `query`, in input order.
pub fn filter_entries<'a, I>(entries: I, query: &str) -> Vec<&'a DiaryEntry>
where
    I: IntoIterator<Item = &'a DiaryEntry>,
{
    let needle = query.trim().to_lowercase();
    entries
        .into_iter()
        .filter(|e| matches_normalized(e, &needle))
        .collect()
}
