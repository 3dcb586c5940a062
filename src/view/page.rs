//! Pagination windowing: slice a sequence into one page and compress the
//! page-control labels down to at most seven slots with ellipsis markers.

/// One page cut out of a larger sequence.
///
/// `start_index`/`end_index` are positions in the source sequence
/// (`end_index` exclusive), for "Showing 11-20 of 43" style captions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageWindow<'a, T> {
    pub items: &'a [T],
    pub total_pages: usize,
    pub start_index: usize,
    pub end_index: usize,
}

/// Cuts `page` (1-based) out of `items`. A page beyond the end yields an
/// empty window, never an error; the caller decides whether to clamp its
/// page state back into range.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> PageWindow<'_, T> {
    let page_size = page_size.max(1);
    let total_pages = items.len().div_ceil(page_size);
    let start = page.saturating_sub(1).saturating_mul(page_size);
    let slice = if start >= items.len() {
        &[]
    } else {
        &items[start..(start + page_size).min(items.len())]
    };
    PageWindow {
        items: slice,
        total_pages,
        start_index: start,
        end_index: start + slice.len(),
    }
}

/// One slot in the rendered page controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLabel {
    Page(usize),
    Ellipsis,
}

/// Label sequence for the page controls: every page when seven or fewer
/// exist, otherwise a compressed form that always anchors the first and last
/// page and never places two ellipsis markers next to each other.
pub fn page_labels(current: usize, total: usize) -> Vec<PageLabel> {
    use PageLabel::{Ellipsis, Page};

    if total <= 7 {
        return (1..=total).map(Page).collect();
    }
    if current <= 3 {
        vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(total)]
    } else if current >= total - 2 {
        vec![
            Page(1),
            Ellipsis,
            Page(total - 3),
            Page(total - 2),
            Page(total - 1),
            Page(total),
        ]
    } else {
        vec![
            Page(1),
            Ellipsis,
            Page(current - 1),
            Page(current),
            Page(current + 1),
            Ellipsis,
            Page(total),
        ]
    }
}
