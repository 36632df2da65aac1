//! Review queue state: the loaded page, selection sets, and reload
//! generations.
//!
//! Everything here is synchronous. [`crate::Workspace`] drives the network
//! side and feeds results back in with the [`LoadTicket`] it was handed when
//! the reload began.

use std::collections::BTreeSet;

use tc_client::ApiError;
use tc_client::payloads::ListFilters;
use tc_core::entities::{OpportunityId, OpportunityListItem, OpportunityStats, Page};

use crate::query::{ListQuery, QueryParams};

/// Generation stamp for one reload. Results carrying an older ticket than
/// the queue's current one are discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LoadTicket(u64);

impl LoadTicket {
    #[must_use]
    pub const fn generation(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone)]
pub struct ReviewQueue {
    params: QueryParams,
    query: ListQuery,
    page_size: u32,
    items: Vec<OpportunityListItem>,
    total_count: u64,
    stats: Option<OpportunityStats>,
    is_loading: bool,
    selected: BTreeSet<OpportunityId>,
    expanded: BTreeSet<OpportunityId>,
    select_all: bool,
    generation: u64,
}

impl ReviewQueue {
    #[must_use]
    pub fn new(page_size: u32) -> Self {
        Self {
            params: QueryParams::default(),
            query: ListQuery::default(),
            page_size,
            items: Vec::new(),
            total_count: 0,
            stats: None,
            is_loading: false,
            selected: BTreeSet::new(),
            expanded: BTreeSet::new(),
            select_all: false,
            generation: 0,
        }
    }

    // ── Loading ────────────────────────────────────────────────────

    /// Adopt new params and start a reload.
    ///
    /// Both selection sets are cleared before any data arrives, and every
    /// earlier ticket becomes stale.
    pub fn begin_reload(&mut self, params: QueryParams) -> LoadTicket {
        self.query = ListQuery::from_params(&params);
        self.params = params;
        self.generation += 1;
        self.is_loading = true;
        self.selected.clear();
        self.expanded.clear();
        self.select_all = false;
        tracing::debug!(generation = self.generation, params = %self.params, "reload started");
        LoadTicket(self.generation)
    }

    /// Restart the current view, e.g. after a status-changing action.
    pub fn begin_refresh(&mut self) -> LoadTicket {
        self.begin_reload(self.params.clone())
    }

    #[must_use]
    pub const fn is_current(&self, ticket: LoadTicket) -> bool {
        ticket.0 == self.generation
    }

    /// Apply a list response. Returns `false` when the ticket is stale.
    ///
    /// A failed load keeps the previous items in place.
    pub fn apply_page(
        &mut self,
        ticket: LoadTicket,
        result: Result<Page<OpportunityListItem>, ApiError>,
    ) -> bool {
        if !self.is_current(ticket) {
            tracing::debug!(
                stale = ticket.0,
                current = self.generation,
                "discarding superseded page"
            );
            return false;
        }
        self.is_loading = false;
        match result {
            Ok(page) => {
                self.total_count = page.count;
                self.items = page.results;
            }
            Err(error) => {
                tracing::warn!(%error, "opportunity list load failed; keeping previous page");
            }
        }
        true
    }

    /// A failed stats load clears the counters.
    pub fn apply_stats(&mut self, result: Result<OpportunityStats, ApiError>) {
        self.stats = match result {
            Ok(stats) => Some(stats),
            Err(error) => {
                tracing::warn!(%error, "stats load failed");
                None
            }
        };
    }

    #[must_use]
    pub fn filters(&self) -> ListFilters {
        self.query.to_filters(self.page_size)
    }

    // ── Accessors ──────────────────────────────────────────────────

    #[must_use]
    pub const fn params(&self) -> &QueryParams {
        &self.params
    }

    #[must_use]
    pub const fn query(&self) -> &ListQuery {
        &self.query
    }

    #[must_use]
    pub const fn page_size(&self) -> u32 {
        self.page_size
    }

    #[must_use]
    pub fn items(&self) -> &[OpportunityListItem] {
        &self.items
    }

    #[must_use]
    pub fn item(&self, id: &str) -> Option<&OpportunityListItem> {
        self.items.iter().find(|item| item.id == id)
    }

    #[must_use]
    pub const fn total_count(&self) -> u64 {
        self.total_count
    }

    #[must_use]
    pub const fn stats(&self) -> Option<&OpportunityStats> {
        self.stats.as_ref()
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.is_loading
    }

    #[must_use]
    pub const fn select_all(&self) -> bool {
        self.select_all
    }

    // ── Selection ──────────────────────────────────────────────────

    /// All-or-nothing over the rendered items.
    pub fn toggle_select_all(&mut self) {
        self.select_all = !self.select_all;
        if self.select_all {
            self.selected = self.items.iter().map(|item| item.id.clone()).collect();
        } else {
            self.selected.clear();
        }
    }

    /// Flip one item. Ids not on the loaded page are ignored and reported
    /// as `false`.
    pub fn toggle_selection(&mut self, id: &str) -> bool {
        if self.item(id).is_none() {
            return false;
        }
        if !self.selected.remove(id) {
            self.selected.insert(id.to_string());
        }
        self.select_all = !self.items.is_empty() && self.selected.len() == self.items.len();
        true
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
        self.select_all = false;
    }

    #[must_use]
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    #[must_use]
    pub fn has_selections(&self) -> bool {
        !self.selected.is_empty()
    }

    #[must_use]
    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    /// Selected ids in page order.
    #[must_use]
    pub fn selected_ids(&self) -> Vec<OpportunityId> {
        self.selected_where(|_| true)
    }

    /// Selected items that still need drafts.
    #[must_use]
    pub fn selected_without_drafts(&self) -> Vec<OpportunityId> {
        self.selected_where(|item| !item.has_drafts)
    }

    /// Selected items that have drafts to approve.
    #[must_use]
    pub fn selected_with_drafts(&self) -> Vec<OpportunityId> {
        self.selected_where(|item| item.has_drafts)
    }

    #[must_use]
    pub fn can_bulk_generate(&self) -> bool {
        self.items
            .iter()
            .any(|item| !item.has_drafts && self.selected.contains(&item.id))
    }

    #[must_use]
    pub fn can_bulk_approve(&self) -> bool {
        self.items
            .iter()
            .any(|item| item.has_drafts && self.selected.contains(&item.id))
    }

    fn selected_where(&self, keep: impl Fn(&OpportunityListItem) -> bool) -> Vec<OpportunityId> {
        self.items
            .iter()
            .filter(|item| self.selected.contains(&item.id) && keep(item))
            .map(|item| item.id.clone())
            .collect()
    }

    // ── Draft previews ─────────────────────────────────────────────

    pub fn toggle_draft_preview(&mut self, id: &str) {
        if !self.expanded.remove(id) {
            self.expanded.insert(id.to_string());
        }
    }

    #[must_use]
    pub fn is_draft_expanded(&self, id: &str) -> bool {
        self.expanded.contains(id)
    }

    // ── Local patches ──────────────────────────────────────────────

    /// Flip `is_read` in place without a reload.
    pub fn mark_read_locally(&mut self, ids: &[OpportunityId]) {
        for item in &mut self.items {
            if ids.contains(&item.id) {
                item.is_read = true;
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;
    use tc_core::enums::OpportunityStatus;

    pub(crate) fn item(id: &str, has_drafts: bool) -> OpportunityListItem {
        let at = Utc.with_ymd_and_hms(2026, 3, 1, 10, 0, 0).unwrap();
        OpportunityListItem {
            id: id.to_string(),
            subreddit_name: "selfhosted".into(),
            post_title: format!("Post {id}"),
            post_body_preview: String::new(),
            post_author: "someone".into(),
            post_score: 1,
            post_num_comments: 0,
            post_created_at: at,
            post_flair: String::new(),
            relevance_score: 0.5,
            status: OpportunityStatus::PendingReview,
            is_read: false,
            discovered_at: at,
            age_hours: 2.0,
            has_drafts,
            scheduled_for: None,
            intent_tier: None,
        }
    }

    fn page(items: Vec<OpportunityListItem>) -> Page<OpportunityListItem> {
        Page {
            count: items.len() as u64,
            next: None,
            previous: None,
            results: items,
        }
    }

    fn loaded(items: Vec<OpportunityListItem>) -> ReviewQueue {
        let mut queue = ReviewQueue::new(20);
        let ticket = queue.begin_reload(QueryParams::default());
        assert!(queue.apply_page(ticket, Ok(page(items))));
        queue
    }

    #[test]
    fn reload_clears_selection_and_previews() {
        let mut queue = loaded(vec![item("a", true), item("b", false)]);
        queue.toggle_select_all();
        queue.toggle_draft_preview("a");

        let _ticket = queue.begin_refresh();

        assert!(!queue.has_selections());
        assert!(!queue.select_all());
        assert!(!queue.is_draft_expanded("a"));
        assert!(queue.is_loading());
    }

    #[test]
    fn select_all_twice_is_empty() {
        let mut queue = loaded(vec![item("a", true), item("b", false)]);
        queue.toggle_select_all();
        assert_eq!(queue.selected_ids(), vec!["a".to_string(), "b".to_string()]);
        queue.toggle_select_all();
        assert!(!queue.has_selections());
    }

    #[test]
    fn toggle_selection_tracks_select_all() {
        let mut queue = loaded(vec![item("a", true), item("b", false)]);
        assert!(queue.toggle_selection("a"));
        assert!(!queue.select_all());
        assert!(queue.toggle_selection("b"));
        assert!(queue.select_all());
        assert!(queue.toggle_selection("a"));
        assert!(!queue.select_all());
        assert!(!queue.toggle_selection("zzz"));
        assert_eq!(queue.selected_ids(), vec!["b".to_string()]);
    }

    #[test]
    fn bulk_eligibility_follows_selection() {
        let mut queue = loaded(vec![item("a", true), item("b", false)]);
        assert!(!queue.can_bulk_generate());
        assert!(!queue.can_bulk_approve());

        queue.toggle_selection("a");
        assert!(!queue.can_bulk_generate());
        assert!(queue.can_bulk_approve());

        queue.toggle_selection("b");
        assert!(queue.can_bulk_generate());
        assert_eq!(queue.selected_without_drafts(), vec!["b".to_string()]);
        assert_eq!(queue.selected_with_drafts(), vec!["a".to_string()]);
    }

    #[test]
    fn stale_ticket_is_discarded() {
        let mut queue = ReviewQueue::new(20);
        let first = queue.begin_reload(QueryParams::parse("status=approved"));
        let second = queue.begin_reload(QueryParams::parse("status=posted"));

        assert!(!queue.apply_page(first, Ok(page(vec![item("old", false)]))));
        assert!(queue.items().is_empty());
        assert!(queue.is_loading());

        assert!(queue.apply_page(second, Ok(page(vec![item("new", false)]))));
        assert_eq!(queue.items()[0].id, "new");
        assert!(!queue.is_loading());
    }

    #[test]
    fn failed_load_keeps_previous_items() {
        let mut queue = loaded(vec![item("a", false)]);
        let ticket = queue.begin_refresh();
        let error = ApiError::Api {
            status: 500,
            message: None,
        };
        assert!(queue.apply_page(ticket, Err(error)));
        assert!(!queue.is_loading());
        assert_eq!(queue.items().len(), 1);
    }

    #[test]
    fn failed_stats_clear_counters() {
        let mut queue = ReviewQueue::new(20);
        queue.apply_stats(Ok(OpportunityStats::default()));
        assert!(queue.stats().is_some());
        queue.apply_stats(Err(ApiError::UnexpectedResponse("bad".into())));
        assert!(queue.stats().is_none());
    }

    #[test]
    fn mark_read_locally_patches_only_listed_items() {
        let mut queue = loaded(vec![item("a", false), item("b", false)]);
        queue.mark_read_locally(&["b".to_string()]);
        assert!(!queue.items()[0].is_read);
        assert!(queue.items()[1].is_read);
    }
}
