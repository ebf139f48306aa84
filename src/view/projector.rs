//! View projector: filter then paginate the working order
//!
//! Read-only. Nothing here touches `position`, and nothing here hands out
//! indices a caller could feed back into a reorder operation; moves are
//! addressed by id.

use crate::config::ViewConfig;
use crate::order::OrderedItem;
use serde::Serialize;

/// One page of the filtered working order
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<'a> {
    /// Items on this page, in working-order sequence
    pub items: Vec<&'a OrderedItem>,

    /// 1-based page index after clamping
    pub page_index: usize,

    /// Number of pages in the filtered sequence (0 when nothing matched)
    pub page_count: usize,

    /// Items that passed the filter
    pub filtered_count: usize,

    /// Items in the working order
    pub total_count: usize,
}

impl Page<'_> {
    pub fn ids(&self) -> Vec<&str> {
        self.items.iter().map(|item| item.id.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Filters and paginates according to a [`ViewConfig`]
#[derive(Debug, Clone, Default)]
pub struct Projector {
    config: ViewConfig,
}

impl Projector {
    pub fn new(config: ViewConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    /// Project `working` through `query` onto page `page_index`
    ///
    /// `page_index` is 1-based and clamped to `1..=page_count` (page 1 when
    /// nothing matches). `page_size` is clamped by the view config.
    pub fn project<'a>(
        &self,
        working: &'a [OrderedItem],
        query: &str,
        page_index: usize,
        page_size: usize,
    ) -> Page<'a> {
        let page_size = self.config.effective_page_size(page_size);
        let filtered = self.filter(working, query);

        let filtered_count = filtered.len();
        let page_count = filtered_count.div_ceil(page_size);
        let page_index = page_index.clamp(1, page_count.max(1));

        let start = (page_index - 1) * page_size;
        let items = filtered.into_iter().skip(start).take(page_size).collect();

        Page {
            items,
            page_index,
            page_count,
            filtered_count,
            total_count: working.len(),
        }
    }

    /// Items matching `query`, in working-order sequence
    ///
    /// Case-insensitive substring match over the configured search fields.
    /// A blank query matches everything.
    pub fn filter<'a>(&self, working: &'a [OrderedItem], query: &str) -> Vec<&'a OrderedItem> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return working.iter().collect();
        }
        working
            .iter()
            .filter(|item| self.matches(item, &needle))
            .collect()
    }

    fn matches(&self, item: &OrderedItem, needle: &str) -> bool {
        if self.config.search_fields.is_empty() {
            return item
                .fields
                .values()
                .any(|value| value.to_lowercase().contains(needle));
        }
        self.config
            .search_fields
            .iter()
            .filter_map(|name| item.field(name))
            .any(|value| value.to_lowercase().contains(needle))
    }
}
