//! Page windowing and page-control layout.
//!
//! Both functions are pure: the window is derived from (dataset length,
//! active page, page size) on every render and never stored.

/// Items per page unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 12;

/// Above this many pages the number row collapses with ellipses.
const MAX_UNCOLLAPSED_PAGES: u32 = 7;

/// Number of pages needed for `total_items`, i.e. `ceil(total / size)`.
pub fn total_pages(total_items: usize, page_size: usize) -> u32 {
    let pages = total_items.div_ceil(page_size.max(1));
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// The half-open window `[(page-1)*size, page*size)` of `data`.
///
/// Out-of-range pages yield an empty slice. Page 0 is treated as page 1.
pub fn paginate<T>(data: &[T], page: u32, page_size: usize) -> &[T] {
    let index = usize::try_from(page.max(1) - 1).unwrap_or(usize::MAX);
    let start = index.saturating_mul(page_size).min(data.len());
    let end = start.saturating_add(page_size).min(data.len());
    data.get(start..end).unwrap_or_default()
}

/// One entry in the page-number row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    /// Jump to `number`; `active` marks the current page.
    Page { number: u32, active: bool },
    /// Collapsed run of pages.
    Ellipsis,
}

/// A Previous/Next button. `target` is `None` when the button is disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavButton {
    pub target: Option<u32>,
}

impl NavButton {
    pub fn is_disabled(self) -> bool {
        self.target.is_none()
    }
}

/// Everything the surface needs to draw a pagination bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageControls {
    pub current: u32,
    pub total_pages: u32,
    pub previous: NavButton,
    pub next: NavButton,
    pub items: Vec<PageItem>,
    /// `"Showing 13 - 24 of 40"`
    pub summary: String,
}

impl PageControls {
    /// Page numbers in the row, ignoring ellipses.
    pub fn page_numbers(&self) -> impl Iterator<Item = u32> + '_ {
        self.items.iter().filter_map(|item| match item {
            PageItem::Page { number, .. } => Some(*number),
            PageItem::Ellipsis => None,
        })
    }

    pub fn ellipsis_count(&self) -> usize {
        self.items
            .iter()
            .filter(|item| matches!(item, PageItem::Ellipsis))
            .count()
    }
}

/// Lay out the pagination bar. Returns `None` when everything fits on one
/// page.
pub fn build_page_controls(
    total_items: usize,
    current_page: u32,
    page_size: usize,
) -> Option<PageControls> {
    let page_size = page_size.max(1);
    let total = total_pages(total_items, page_size);
    if total <= 1 {
        return None;
    }

    let current = current_page.max(1);
    let page = |number: u32| PageItem::Page {
        number,
        active: number == current,
    };

    let items: Vec<PageItem> = if total <= MAX_UNCOLLAPSED_PAGES {
        (1..=total).map(page).collect()
    } else if current <= 3 {
        (1..=4)
            .map(page)
            .chain([PageItem::Ellipsis, page(total)])
            .collect()
    } else if current >= total - 2 {
        [page(1), PageItem::Ellipsis]
            .into_iter()
            .chain((total - 3..=total).map(page))
            .collect()
    } else {
        [page(1), PageItem::Ellipsis]
            .into_iter()
            .chain((current - 1..=current + 1).map(page))
            .chain([PageItem::Ellipsis, page(total)])
            .collect()
    };

    let start = usize::try_from(current - 1)
        .unwrap_or(usize::MAX)
        .saturating_mul(page_size);
    let end = usize::try_from(current)
        .unwrap_or(usize::MAX)
        .saturating_mul(page_size)
        .min(total_items);

    Some(PageControls {
        current,
        total_pages: total,
        previous: NavButton {
            target: (current > 1).then(|| current - 1),
        },
        next: NavButton {
            target: (current < total).then(|| current + 1),
        },
        items,
        summary: format!("Showing {} - {end} of {total_items}", start + 1),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn numbers(controls: &PageControls) -> Vec<u32> {
        controls.page_numbers().collect()
    }

    // ── paginate ────────────────────────────────────────────────────

    #[test]
    fn paginate_returns_expected_counts() {
        let data: Vec<u32> = (0..30).collect();
        for (len, size) in [(0usize, 12usize), (1, 12), (12, 12), (13, 12), (30, 12), (30, 7)] {
            let slice = &data[..len];
            for page in 1..=6u32 {
                let skip = (usize::try_from(page).unwrap_or(0) - 1) * size;
                let expected = size.min(len.saturating_sub(skip));
                assert_eq!(
                    paginate(slice, page, size).len(),
                    expected,
                    "len={len} size={size} page={page}"
                );
            }
        }
    }

    #[test]
    fn pages_concatenate_back_to_data() {
        let data: Vec<u32> = (0..41).collect();
        let pages = total_pages(data.len(), 12);
        let rebuilt: Vec<u32> = (1..=pages)
            .flat_map(|p| paginate(&data, p, 12).iter().copied())
            .collect();
        assert_eq!(rebuilt, data);
    }

    #[test]
    fn out_of_range_page_is_empty() {
        let data = [1, 2, 3];
        assert!(paginate(&data, 2, 12).is_empty());
        assert!(paginate(&data, u32::MAX, 12).is_empty());
    }

    #[test]
    fn page_zero_acts_as_first_page() {
        let data = [1, 2, 3];
        assert_eq!(paginate(&data, 0, 2), &[1, 2]);
    }

    // ── build_page_controls ─────────────────────────────────────────

    #[test]
    fn single_page_has_no_controls() {
        assert!(build_page_controls(0, 1, 12).is_none());
        assert!(build_page_controls(12, 1, 12).is_none());
    }

    #[test]
    fn few_pages_show_every_number() {
        for total_items in [13usize, 40, 84] {
            let controls = build_page_controls(total_items, 2, 12).expect("controls");
            assert_eq!(controls.ellipsis_count(), 0);
            assert_eq!(
                numbers(&controls).len(),
                usize::try_from(controls.total_pages).unwrap_or(0)
            );
        }
    }

    #[test]
    fn near_start_shows_first_four_and_last() {
        // 120 items → 10 pages
        let controls = build_page_controls(120, 2, 12).expect("controls");
        assert_eq!(
            controls.items,
            vec![
                PageItem::Page { number: 1, active: false },
                PageItem::Page { number: 2, active: true },
                PageItem::Page { number: 3, active: false },
                PageItem::Page { number: 4, active: false },
                PageItem::Ellipsis,
                PageItem::Page { number: 10, active: false },
            ]
        );
    }

    #[test]
    fn near_end_shows_first_and_last_four() {
        let controls = build_page_controls(120, 8, 12).expect("controls");
        assert_eq!(numbers(&controls), vec![1, 7, 8, 9, 10]);
        assert_eq!(controls.items[1], PageItem::Ellipsis);
        assert_eq!(controls.ellipsis_count(), 1);
    }

    #[test]
    fn middle_shows_window_with_two_ellipses() {
        for current in 4..=7u32 {
            let controls = build_page_controls(120, current, 12).expect("controls");
            assert_eq!(
                numbers(&controls),
                vec![1, current - 1, current, current + 1, 10]
            );
            assert_eq!(controls.ellipsis_count(), 2);
        }
    }

    #[test]
    fn nav_buttons_disable_at_edges() {
        let first = build_page_controls(50, 1, 12).expect("controls");
        assert!(first.previous.is_disabled());
        assert_eq!(first.next.target, Some(2));

        let last = build_page_controls(50, 5, 12).expect("controls");
        assert_eq!(last.previous.target, Some(4));
        assert!(last.next.is_disabled());
    }

    #[test]
    fn summary_clamps_to_total() {
        let controls = build_page_controls(40, 4, 12).expect("controls");
        assert_eq!(controls.summary, "Showing 37 - 40 of 40");

        let controls = build_page_controls(40, 2, 12).expect("controls");
        assert_eq!(controls.summary, "Showing 13 - 24 of 40");
    }
}
