use std::fmt;

use crate::model::page::PageResult;

const FULL_WINDOW_MAX_PAGES: u32 = 7;

/// Entry of the page-number list below a table
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PageLink {
    /// one-based page number
    Page { number: u32, current: bool },
    /// non-interactive gap
    Ellipsis,
}

/// Compressed page-number list for direct navigation.
///
/// Page 1 and the last page are always present, at most 7 entries carry a number
/// and a gap is rendered as [`PageLink::Ellipsis`]. A collection without pages
/// still shows page 1.
pub fn page_window(page_index: u32, total_pages: u32) -> Vec<PageLink> {
    let last = total_pages.max(1);
    let current = page_index.saturating_add(1);

    let page = |number: u32| PageLink::Page {
        number,
        current: number == current,
    };

    if last <= FULL_WINDOW_MAX_PAGES {
        return (1..=last).map(page).collect();
    }

    let mut links = vec![page(1)];
    if current <= 3 {
        links.extend((2..=4).map(page));
        links.push(PageLink::Ellipsis);
        links.push(page(last));
    } else if current >= last - 2 {
        links.push(PageLink::Ellipsis);
        links.extend((last - 3..=last).map(page));
    } else {
        links.push(PageLink::Ellipsis);
        links.extend((current - 1..=current + 1).map(page));
        links.push(PageLink::Ellipsis);
        links.push(page(last));
    }
    links
}

/// State of the pager below a table
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PaginationControls {
    pub previous_enabled: bool,
    pub next_enabled: bool,
    /// one-based
    pub page_number: u32,
    /// at least 1
    pub page_count: u32,
    pub links: Vec<PageLink>,
}

impl PaginationControls {
    pub fn new<T>(page_index: u32, page: Option<&PageResult<T>>) -> Self {
        let total_pages = page.map(|page| page.total_pages).unwrap_or_default();

        Self {
            previous_enabled: page.is_some_and(|page| !page.is_first) && page_index > 0,
            next_enabled: page.is_some_and(|page| !page.is_last),
            page_number: page_index.saturating_add(1),
            page_count: total_pages.max(1),
            links: page_window(page_index, total_pages),
        }
    }

    /// Page links are only worth showing for more than one page
    pub fn has_links(&self) -> bool {
        self.page_count > 1
    }
}

impl fmt::Display for PaginationControls {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Page {} of {}", self.page_number, self.page_count)
    }
}
