use crate::item::InventoryItem;

/// Presentation filter over the item list. Empty filters pass everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemFilter {
    /// Case-insensitive substring matched against name OR sku.
    pub search: Option<String>,
    /// Exact category match.
    pub category: Option<String>,
}

/// Filter items by search term and category (both predicates ANDed),
/// preserving order.
pub fn filter_items<'a>(items: &'a [InventoryItem], filter: &ItemFilter) -> Vec<&'a InventoryItem> {
    let search = filter
        .search
        .as_deref()
        .map(str::to_lowercase)
        .filter(|s| !s.is_empty());
    let category = filter.category.as_deref().filter(|c| !c.is_empty());

    items
        .iter()
        .filter(|item| {
            let search_ok = search.as_deref().is_none_or(|term| {
                item.name.to_lowercase().contains(term) || item.sku.to_lowercase().contains(term)
            });
            let category_ok = category.is_none_or(|c| item.category == c);
            search_ok && category_ok
        })
        .collect()
}

/// Zero-based page slice of `[page * page_size, page * page_size + page_size)`,
/// clipped to the available length. Out-of-range pages (and a zero page size)
/// yield an empty slice.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let start = page.saturating_mul(page_size).min(items.len());
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}
