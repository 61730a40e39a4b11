/// Slice one 1-indexed page out of `items` and report the page count
///
/// Pages past the end (and page 0) are empty rather than errors. A zero
/// `page_size` yields an empty page and no pages.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> (&[T], usize) {
    if page_size == 0 {
        return (&[], 0);
    }

    let total_pages = items.len().div_ceil(page_size);

    if page == 0 {
        return (&[], total_pages);
    }

    let start = (page - 1).saturating_mul(page_size).min(items.len());
    let end = page.saturating_mul(page_size).min(items.len());

    (&items[start..end], total_pages)
}
