//! The admin table controller.
//!
//! Consumes UI events (page clicks, header clicks, keystrokes, fetch
//! outcomes) and emits fetch effects. The controller never performs IO;
//! the host shell executes [`FetchRequest`]s against the listing
//! endpoints and feeds the outcome back in.
//!
//! Every issued fetch carries a sequence token. Only the newest token is
//! accepted back, so a slow earlier response can never overwrite the
//! result of a later one.

use std::time::Instant;

use serde::Serialize;

use crate::{Debouncer, Selection, SortChain, TRACING_TARGET_LIST};

/// Loading state of the table.
///
/// Previously loaded rows are retained during `Loading` and `Failed` so
/// the table keeps showing its last-known-good data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadPhase {
    /// Nothing in flight.
    Idle,
    /// A fetch is in flight.
    Loading,
    /// The most recent fetch failed.
    Failed {
        /// Message for the error toast.
        message: String,
    },
}

/// A fetch the host shell must execute.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchRequest<S, F> {
    /// Sequence token to echo back with the outcome.
    pub seq: u64,
    /// 1-indexed page to load.
    pub page: i64,
    /// Page size.
    pub limit: i64,
    /// Sort chain to encode into the `sort` parameter.
    pub sort: Vec<crate::SortEntry<S>>,
    /// Committed search text (empty means no search).
    pub search: String,
    /// Entity filter.
    pub filter: F,
}

/// Effect returned by controller transitions.
#[derive(Debug, Clone, PartialEq)]
pub enum ListEffect<S, F> {
    /// Execute this fetch and report the outcome.
    Fetch(FetchRequest<S, F>),
}

/// State machine behind one admin listing screen.
#[derive(Debug, Clone)]
pub struct ListController<S, F> {
    page: i64,
    limit: i64,
    sort: SortChain<S>,
    search: String,
    filter: F,
    debouncer: Debouncer,

    phase: LoadPhase,
    seq: u64,
    visible: Vec<i64>,
    total: i64,

    selection: Selection,
}

impl<S, F> ListController<S, F>
where
    S: Copy + Eq + Serialize,
    F: Clone + PartialEq,
{
    /// Creates a controller for the given page size and initial filter.
    pub fn new(limit: i64, filter: F) -> Self {
        Self {
            page: 1,
            limit: limit.max(1),
            sort: SortChain::new(),
            search: String::new(),
            filter,
            debouncer: Debouncer::default(),
            phase: LoadPhase::Idle,
            seq: 0,
            visible: Vec::new(),
            total: 0,
            selection: Selection::None,
        }
    }

    // Accessors

    /// Current 1-indexed page.
    pub fn page(&self) -> i64 {
        self.page
    }

    /// Filtered row count reported by the last accepted fetch.
    pub fn total(&self) -> i64 {
        self.total
    }

    /// Row ids of the currently loaded page.
    pub fn visible(&self) -> &[i64] {
        &self.visible
    }

    /// Current loading phase.
    pub fn phase(&self) -> &LoadPhase {
        &self.phase
    }

    /// Current sort chain.
    pub fn sort(&self) -> &SortChain<S> {
        &self.sort
    }

    /// Committed search text.
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Current filter.
    pub fn filter(&self) -> &F {
        &self.filter
    }

    /// Current selection.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Number of rows the current selection covers.
    pub fn selected_count(&self) -> i64 {
        self.selection.selected_count(self.total)
    }

    // Fetch lifecycle

    /// Issues the initial fetch.
    pub fn start(&mut self) -> ListEffect<S, F> {
        self.issue_fetch()
    }

    /// Navigates to another page.
    pub fn set_page(&mut self, page: i64) -> Option<ListEffect<S, F>> {
        let page = page.max(1);
        if page == self.page {
            return None;
        }
        self.page = page;
        Some(self.issue_fetch())
    }

    /// Applies a header click (asc → desc → removed) and re-fetches.
    ///
    /// Sorting rearranges the same universe of rows, so the selection
    /// survives.
    pub fn toggle_sort(&mut self, key: S) -> ListEffect<S, F> {
        self.sort.toggle(key);
        self.issue_fetch()
    }

    /// Records a search keystroke; the fetch follows via [`Self::poll`]
    /// once the debounce window elapses.
    pub fn input_search(&mut self, text: impl Into<String>, now: Instant) {
        self.debouncer.input(text, now);
    }

    /// Advances debounced work; call from the host tick loop.
    pub fn poll(&mut self, now: Instant) -> Option<ListEffect<S, F>> {
        let committed = self.debouncer.poll(now)?;
        if committed == self.search {
            return None;
        }
        self.search = committed;
        // The universe of matching rows changed under the selection.
        self.selection.clear();
        self.page = 1;
        Some(self.issue_fetch())
    }

    /// Replaces the filter, clearing the selection and resetting to
    /// page 1.
    pub fn set_filter(&mut self, filter: F) -> Option<ListEffect<S, F>> {
        if filter == self.filter {
            return None;
        }
        self.filter = filter;
        self.selection.clear();
        self.page = 1;
        Some(self.issue_fetch())
    }

    /// Applies a successful fetch outcome.
    ///
    /// Stale responses (a token older than the newest issued) are
    /// discarded. An empty page above page 1 triggers page-underflow
    /// recovery: the controller steps back one page and re-fetches.
    pub fn apply_success(
        &mut self,
        seq: u64,
        visible: Vec<i64>,
        total: i64,
    ) -> Option<ListEffect<S, F>> {
        if seq != self.seq {
            tracing::debug!(
                target: TRACING_TARGET_LIST,
                stale = seq,
                newest = self.seq,
                "discarding out-of-order fetch response",
            );
            return None;
        }

        if visible.is_empty() && self.page > 1 {
            tracing::debug!(
                target: TRACING_TARGET_LIST,
                page = self.page,
                total,
                "page underflow, stepping back",
            );
            self.page -= 1;
            return Some(self.issue_fetch());
        }

        self.visible = visible;
        self.total = total;
        self.phase = LoadPhase::Idle;
        None
    }

    /// Applies a failed fetch outcome.
    ///
    /// The previous rows stay visible; only the phase changes.
    pub fn apply_failure(&mut self, seq: u64, message: impl Into<String>) {
        if seq != self.seq {
            return;
        }
        self.phase = LoadPhase::Failed {
            message: message.into(),
        };
    }

    // Selection

    /// Toggles one row in or out of the selection.
    pub fn toggle_row(&mut self, id: i64) {
        self.selection.toggle(id);
    }

    /// Selects every row matching the current filter.
    pub fn select_all(&mut self) {
        self.selection.select_all();
    }

    /// Clears the selection.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Acknowledges a completed bulk delete: the selection is spent and
    /// the current page must be reloaded.
    pub fn bulk_delete_completed(&mut self) -> ListEffect<S, F> {
        self.selection.clear();
        self.issue_fetch()
    }

    fn issue_fetch(&mut self) -> ListEffect<S, F> {
        self.seq += 1;
        self.phase = LoadPhase::Loading;
        ListEffect::Fetch(FetchRequest {
            seq: self.seq,
            page: self.page,
            limit: self.limit,
            sort: self.sort.entries().to_vec(),
            search: self.search.clone(),
            filter: self.filter.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
    #[serde(rename_all = "snake_case")]
    enum Key {
        Name,
        Price,
    }

    #[derive(Debug, Clone, Default, PartialEq)]
    struct Filter {
        status: Option<&'static str>,
    }

    type Controller = ListController<Key, Filter>;

    fn fetch(effect: ListEffect<Key, Filter>) -> FetchRequest<Key, Filter> {
        match effect {
            ListEffect::Fetch(request) => request,
        }
    }

    #[test]
    fn start_issues_first_fetch() {
        let mut controller = Controller::new(10, Filter::default());
        let request = fetch(controller.start());
        assert_eq!(request.seq, 1);
        assert_eq!(request.page, 1);
        assert_eq!(request.limit, 10);
        assert_eq!(controller.phase(), &LoadPhase::Loading);
    }

    #[test]
    fn success_loads_rows_and_total() {
        let mut controller = Controller::new(10, Filter::default());
        let request = fetch(controller.start());

        let followup = controller.apply_success(request.seq, vec![1, 2, 3], 23);
        assert!(followup.is_none());
        assert_eq!(controller.visible(), &[1, 2, 3]);
        assert_eq!(controller.total(), 23);
        assert_eq!(controller.phase(), &LoadPhase::Idle);
    }

    #[test]
    fn stale_response_is_discarded() {
        let mut controller = Controller::new(10, Filter::default());
        let first = fetch(controller.start());
        let second = fetch(controller.set_page(2).unwrap());

        // The slow first response arrives after the second was issued.
        assert!(controller.apply_success(first.seq, vec![99], 1).is_none());
        assert_eq!(controller.visible(), &[] as &[i64]);
        assert_eq!(controller.phase(), &LoadPhase::Loading);

        controller.apply_success(second.seq, vec![11, 12], 12);
        assert_eq!(controller.visible(), &[11, 12]);
    }

    #[test]
    fn failure_keeps_last_known_rows() {
        let mut controller = Controller::new(10, Filter::default());
        let request = fetch(controller.start());
        controller.apply_success(request.seq, vec![1, 2], 2);

        let request = fetch(controller.set_page(2).unwrap());
        controller.apply_failure(request.seq, "boom");

        assert_eq!(controller.visible(), &[1, 2]);
        assert_eq!(
            controller.phase(),
            &LoadPhase::Failed {
                message: "boom".into()
            },
        );
    }

    #[test]
    fn page_underflow_steps_back_and_refetches() {
        // 11 rows, limit 10: page 2 holds one row. Deleting it makes the
        // next fetch of page 2 come back empty.
        let mut controller = Controller::new(10, Filter::default());
        let request = fetch(controller.start());
        controller.apply_success(request.seq, (1..=10).collect(), 11);

        let request = fetch(controller.set_page(2).unwrap());
        controller.apply_success(request.seq, vec![11], 11);

        let request = fetch(controller.bulk_delete_completed());
        let recovery = controller
            .apply_success(request.seq, vec![], 10)
            .expect("page underflow must refetch");
        let recovery = fetch(recovery);

        assert_eq!(recovery.page, 1);
        controller.apply_success(recovery.seq, (1..=10).collect(), 10);
        assert_eq!(controller.page(), 1);
        assert_eq!(controller.visible().len(), 10);
    }

    #[test]
    fn empty_first_page_does_not_recover() {
        let mut controller = Controller::new(10, Filter::default());
        let request = fetch(controller.start());
        assert!(controller.apply_success(request.seq, vec![], 0).is_none());
        assert_eq!(controller.page(), 1);
    }

    #[test]
    fn search_debounce_commits_once() {
        let start = Instant::now();
        let mut controller = Controller::new(10, Filter::default());
        let request = fetch(controller.start());
        controller.apply_success(request.seq, vec![1], 1);

        controller.input_search("s", start);
        controller.input_search("sofa", start + Duration::from_millis(150));

        assert!(controller.poll(start + Duration::from_millis(200)).is_none());

        let effect = controller
            .poll(start + Duration::from_millis(500))
            .expect("debounce window elapsed");
        let request = fetch(effect);
        assert_eq!(request.search, "sofa");
        assert_eq!(request.page, 1);

        // Nothing further is pending.
        assert!(controller.poll(start + Duration::from_millis(900)).is_none());
    }

    #[test]
    fn unchanged_search_does_not_refetch() {
        let start = Instant::now();
        let mut controller = Controller::new(10, Filter::default());
        controller.start();

        controller.input_search("", start);
        assert!(controller.poll(start + Duration::from_secs(1)).is_none());
    }

    #[test]
    fn search_change_clears_selection() {
        let start = Instant::now();
        let mut controller = Controller::new(10, Filter::default());
        let request = fetch(controller.start());
        controller.apply_success(request.seq, vec![1, 2, 3], 3);

        controller.select_all();
        assert_eq!(controller.selected_count(), 3);

        controller.input_search("sofa", start);
        controller.poll(start + Duration::from_secs(1)).unwrap();
        assert_eq!(controller.selection(), &Selection::None);
    }

    #[test]
    fn filter_change_clears_selection_and_resets_page() {
        let mut controller = Controller::new(10, Filter::default());
        let request = fetch(controller.start());
        controller.apply_success(request.seq, (1..=10).collect(), 30);
        controller.set_page(3);
        controller.toggle_row(4);

        let effect = controller.set_filter(Filter {
            status: Some("pending"),
        });
        let request = fetch(effect.unwrap());
        assert_eq!(request.page, 1);
        assert_eq!(controller.selection(), &Selection::None);

        // Setting the identical filter is a no-op.
        assert!(
            controller
                .set_filter(Filter {
                    status: Some("pending"),
                })
                .is_none()
        );
    }

    #[test]
    fn sort_toggle_keeps_selection() {
        let mut controller = Controller::new(10, Filter::default());
        let request = fetch(controller.start());
        controller.apply_success(request.seq, vec![1, 2], 2);
        controller.toggle_row(1);

        let request = fetch(controller.toggle_sort(Key::Price));
        assert_eq!(request.sort.len(), 1);
        assert_eq!(controller.selected_count(), 1);
    }

    #[test]
    fn bulk_delete_clears_selection_and_refetches() {
        let mut controller = Controller::new(10, Filter::default());
        let request = fetch(controller.start());
        controller.apply_success(request.seq, vec![1, 2, 3], 3);
        controller.select_all();

        let request = fetch(controller.bulk_delete_completed());
        assert_eq!(controller.selection(), &Selection::None);
        assert_eq!(request.page, 1);
        controller.apply_success(request.seq, vec![], 0);
        assert_eq!(controller.total(), 0);
    }

    #[test]
    fn all_except_count_tracks_total() {
        let mut controller = Controller::new(10, Filter::default());
        let request = fetch(controller.start());
        controller.apply_success(request.seq, (1..=10).collect(), 23);

        controller.select_all();
        controller.toggle_row(7);
        assert_eq!(controller.selected_count(), 22);

        controller.toggle_row(7);
        assert_eq!(controller.selected_count(), 23);
    }
}
