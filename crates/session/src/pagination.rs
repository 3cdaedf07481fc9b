//! Pagination over a filtered list.
//!
//! Pure derivations only: page count, the current page slice, and the
//! display sequence of page numbers. Who owns `current_page` and when it
//! resets is the composition layer's business.

/// Default number of candidates per page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

// Show every page number up to this many pages; collapse with
// ellipses beyond it.
const FULL_DISPLAY_LIMIT: usize = 7;

/// One entry in the page-number display sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageEntry {
    /// A literal page number
    Page(usize),
    /// A collapsed run of pages
    Ellipsis,
}

/// Total pages for a list of `len` items, never less than 1.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size).max(1)
}

/// Clamp a requested page into `[1, total_pages]`.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages)
}

/// The slice of `items` shown on `current_page`.
///
/// The page is clamped before slicing, so the result is always a valid
/// (possibly short last) page; its length never exceeds `page_size`.
pub fn page_slice<T>(items: &[T], page_size: usize, current_page: usize) -> &[T] {
    let total = total_pages(items.len(), page_size);
    let page = clamp_page(current_page, total);

    let start = (page - 1) * page_size;
    let end = (start + page_size).min(items.len());
    // start can only reach items.len() when the list is empty
    &items[start.min(items.len())..end]
}

/// Display-friendly page sequence mixing numbers and ellipsis markers.
///
/// ## Windowing policy
/// - `total_pages` up to 7: every page, no ellipsis
/// - beyond that: first page, last page, current page ± 1, with each
///   collapsed gap shown as a single ellipsis
///
/// Guarantees: first/last/current always present, no two consecutive
/// ellipses, numeric entries strictly increasing.
pub fn page_numbers(total_pages: usize, current_page: usize) -> Vec<PageEntry> {
    let current = clamp_page(current_page, total_pages);

    if total_pages <= FULL_DISPLAY_LIMIT {
        return (1..=total_pages).map(PageEntry::Page).collect();
    }

    let mut entries = vec![PageEntry::Page(1)];

    let window_start = current.saturating_sub(1).max(2);
    let window_end = (current + 1).min(total_pages - 1);

    if window_start > 2 {
        entries.push(PageEntry::Ellipsis);
    }
    for page in window_start..=window_end {
        entries.push(PageEntry::Page(page));
    }
    if window_end < total_pages - 1 {
        entries.push(PageEntry::Ellipsis);
    }

    entries.push(PageEntry::Page(total_pages));
    entries
}
