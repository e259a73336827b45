use crate::models::{Category, StoredSignature};

/// 10 columns of 10 signatures.
pub const PAGE_SIZE: usize = 100;
pub const COLUMN_SIZE: usize = 10;

/// Filters for the wall of support: case-insensitive substring on the name,
/// exact category. No sort beyond insertion order (oldest first).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardFilter {
    pub search: String,
    pub category: Option<Category>,
}

impl BoardFilter {
    pub fn matches(&self, signature: &StoredSignature) -> bool {
        let term = self.search.trim();
        if !term.is_empty()
            && !signature
                .name
                .to_lowercase()
                .contains(&term.to_lowercase())
        {
            return false;
        }
        match self.category {
            Some(category) => Category::parse(&signature.category) == Some(category),
            None => true,
        }
    }
}

pub fn total_pages(filtered_len: usize) -> usize {
    filtered_len.div_ceil(PAGE_SIZE).max(1)
}

/// Contiguous slice for a 1-based page index. Out-of-range pages are empty.
pub fn page_slice<T>(items: &[T], page: usize) -> &[T] {
    if page == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(PAGE_SIZE);
    if start >= items.len() {
        return &[];
    }
    let end = (start + PAGE_SIZE).min(items.len());
    &items[start..end]
}

/// Layout columns within one page.
pub fn columns<T>(page_items: &[T]) -> std::slice::Chunks<'_, T> {
    page_items.chunks(COLUMN_SIZE)
}

/// Page cursor for the board. Any filter change snaps back to page 1.
#[derive(Debug, Clone)]
pub struct Pager {
    filter: BoardFilter,
    page: usize,
}

impl Default for Pager {
    fn default() -> Self {
        Self {
            filter: BoardFilter::default(),
            page: 1,
        }
    }
}

impl Pager {
    pub fn page(&self) -> usize {
        self.page
    }

    pub fn filter(&self) -> &BoardFilter {
        &self.filter
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        let term = term.into();
        if self.filter.search != term {
            self.filter.search = term;
            self.page = 1;
        }
    }

    pub fn set_category(&mut self, category: Option<Category>) {
        if self.filter.category != category {
            self.filter.category = category;
            self.page = 1;
        }
    }

    pub fn next(&mut self, filtered_len: usize) {
        if self.page < total_pages(filtered_len) {
            self.page += 1;
        }
    }

    pub fn previous(&mut self) {
        if self.page > 1 {
            self.page -= 1;
        }
    }
}

/// Lifecycle of one signature form instance. A begin while a submission is
/// in flight is refused; Success and Error clear back to Idle once the
/// display window has passed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormState {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

impl FormState {
    pub fn begin(&mut self) -> bool {
        if *self == Self::Submitting {
            return false;
        }
        *self = Self::Submitting;
        true
    }

    pub fn finish(&mut self, ok: bool) {
        if *self == Self::Submitting {
            *self = if ok { Self::Success } else { Self::Error };
        }
    }

    pub fn acknowledge(&mut self) {
        if matches!(self, Self::Success | Self::Error) {
            *self = Self::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(count: usize) -> Vec<StoredSignature> {
        (0..count)
            .map(|index| StoredSignature {
                id: index.to_string(),
                name: format!("Supporter {index}"),
                email: format!("supporter{index}@example.com"),
                category: if index % 2 == 0 { "student" } else { "alumni" }.into(),
                timestamp: "November 27, 2025 at 02:45:30 PM".into(),
            })
            .collect()
    }

    #[test]
    fn pages_are_disjoint_contiguous_slices() {
        let items = records(250);
        let first = page_slice(&items, 1);
        let second = page_slice(&items, 2);
        let third = page_slice(&items, 3);

        assert_eq!(first.len(), 100);
        assert_eq!(second.len(), 100);
        assert_eq!(third.len(), 50);
        assert_eq!(first[0].id, "0");
        assert_eq!(first[99].id, "99");
        assert_eq!(second[0].id, "100");
        assert_eq!(third[49].id, "249");
        assert_eq!(total_pages(250), 3);
        assert!(page_slice(&items, 4).is_empty());
    }

    #[test]
    fn empty_board_still_has_one_page() {
        assert_eq!(total_pages(0), 1);
        let items: Vec<StoredSignature> = Vec::new();
        assert!(page_slice(&items, 1).is_empty());
    }

    #[test]
    fn columns_chunk_by_ten() {
        let items = records(25);
        let cols: Vec<_> = columns(&items).collect();
        assert_eq!(cols.len(), 3);
        assert_eq!(cols[0].len(), 10);
        assert_eq!(cols[2].len(), 5);
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let items = records(3);
        let filter = BoardFilter {
            search: "SUPPORTER 1".into(),
            category: None,
        };
        let matched: Vec<_> = items.iter().filter(|s| filter.matches(s)).collect();
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].id, "1");
    }

    #[test]
    fn category_filter_is_exact() {
        let items = records(4);
        let filter = BoardFilter {
            search: String::new(),
            category: Some(Category::Alumni),
        };
        let matched: Vec<_> = items.iter().filter(|s| filter.matches(s)).collect();
        assert_eq!(matched.len(), 2);
        assert!(matched.iter().all(|s| s.category == "alumni"));
    }

    #[test]
    fn filter_change_resets_page() {
        let mut pager = Pager::default();
        pager.next(250);
        pager.next(250);
        assert_eq!(pager.page(), 3);

        pager.set_search("priya");
        assert_eq!(pager.page(), 1);

        pager.next(250);
        pager.set_category(Some(Category::Student));
        assert_eq!(pager.page(), 1);

        // Setting the same filter again keeps the page.
        pager.next(250);
        pager.set_category(Some(Category::Student));
        assert_eq!(pager.page(), 2);
    }

    #[test]
    fn pager_clamps_at_bounds() {
        let mut pager = Pager::default();
        pager.previous();
        assert_eq!(pager.page(), 1);
        pager.next(50);
        assert_eq!(pager.page(), 1);
    }

    #[test]
    fn form_refuses_reentrant_submission() {
        let mut form = FormState::default();
        assert!(form.begin());
        assert!(!form.begin());
        form.finish(true);
        assert_eq!(form, FormState::Success);
        form.acknowledge();
        assert_eq!(form, FormState::Idle);
    }

    #[test]
    fn form_error_path_returns_to_idle() {
        let mut form = FormState::default();
        assert!(form.begin());
        form.finish(false);
        assert_eq!(form, FormState::Error);
        assert!(form.begin());
        form.finish(true);
        form.acknowledge();
        assert_eq!(form, FormState::Idle);
    }
}
