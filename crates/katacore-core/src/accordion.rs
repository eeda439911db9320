//! Accordion sections.
//!
//! An accordion is a list of headers, each of which shows or hides a block
//! of content. Each item keeps its own open/closed flag: several items can
//! be open at once and two accordions never share state.
//!
//! Pages are rendered on the server, so the state of an accordion lives in
//! the query string of the current URL, keyed by the accordion id
//! (`?five-foundations=0,3`). Clicking a header follows a link to the same
//! page with that one item flipped. Nothing is persisted; navigating away
//! drops the state.

use std::collections::{BTreeMap, BTreeSet};

/// One collapsible entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccordionItem {
    pub title: &'static str,
    /// Trusted HTML fragment shown while the item is open.
    pub body: &'static str,
}

/// A named group of collapsible entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Accordion {
    /// Query parameter and anchor name; unique per page.
    pub id: &'static str,
    pub items: &'static [AccordionItem],
}

/// Open/closed flags for the items of one accordion.
///
/// Every item starts closed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccordionState {
    open: BTreeSet<usize>,
}

impl AccordionState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip one item. Returns whether it is open afterwards.
    pub fn toggle(&mut self, index: usize) -> bool {
        if self.open.remove(&index) {
            false
        } else {
            self.open.insert(index);
            true
        }
    }

    /// A copy of this state with one item flipped.
    #[must_use]
    pub fn toggled(&self, index: usize) -> Self {
        let mut next = self.clone();
        next.toggle(index);
        next
    }

    #[must_use]
    pub fn is_open(&self, index: usize) -> bool {
        self.open.contains(&index)
    }

    /// Number of open items.
    #[must_use]
    pub fn open_count(&self) -> usize {
        self.open.len()
    }

    /// Parse the comma-separated list of open indices.
    ///
    /// Entries that are not indices are skipped.
    #[must_use]
    pub fn from_query(value: &str) -> Self {
        let open = value
            .split(',')
            .filter_map(|part| part.trim().parse::<usize>().ok())
            .collect();
        Self { open }
    }

    /// Encode as a comma-separated list, lowest index first.
    #[must_use]
    pub fn to_query(&self) -> String {
        self.open
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl Accordion {
    /// Read this accordion's state out of the request query.
    ///
    /// Indices past the end of the item list are dropped.
    #[must_use]
    pub fn state_from(&self, query: &BTreeMap<String, String>) -> AccordionState {
        let mut state = query
            .get(self.id)
            .map(|v| AccordionState::from_query(v))
            .unwrap_or_default();
        state.open.retain(|&i| i < self.items.len());
        state
    }

    /// Link followed when the header of item `index` is clicked.
    ///
    /// Points at `path` with the item flipped and every other query
    /// parameter carried over unchanged.
    #[must_use]
    pub fn toggle_href(
        &self,
        path: &str,
        query: &BTreeMap<String, String>,
        index: usize,
    ) -> String {
        let next = self.state_from(query).toggled(index);

        let mut params = query.clone();
        if next.open_count() == 0 {
            params.remove(self.id);
        } else {
            params.insert(self.id.to_owned(), next.to_query());
        }

        let encoded = params
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");

        if encoded.is_empty() {
            format!("{path}#{}", self.id)
        } else {
            format!("{path}?{encoded}#{}", self.id)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ITEMS: &[AccordionItem] = &[
        AccordionItem { title: "A", body: "<p>a</p>" },
        AccordionItem { title: "B", body: "<p>b</p>" },
        AccordionItem { title: "C", body: "<p>c</p>" },
    ];

    const FIRST: Accordion = Accordion { id: "first", items: ITEMS };
    const SECOND: Accordion = Accordion { id: "second", items: ITEMS };

    #[test]
    fn items_start_closed() {
        let state = AccordionState::new();
        assert!((0..ITEMS.len()).all(|i| !state.is_open(i)));
    }

    #[test]
    fn odd_toggles_open_even_toggles_close() {
        for clicks in 1..=6 {
            let mut state = AccordionState::new();
            for _ in 0..clicks {
                state.toggle(1);
            }
            assert_eq!(state.is_open(1), clicks % 2 == 1, "after {clicks} clicks");
        }
    }

    #[test]
    fn items_are_independent() {
        let mut state = AccordionState::new();
        state.toggle(0);
        state.toggle(2);
        assert!(state.is_open(0));
        assert!(!state.is_open(1));
        assert!(state.is_open(2));

        state.toggle(0);
        assert!(!state.is_open(0));
        assert!(state.is_open(2));
    }

    #[test]
    fn query_parsing_skips_garbage() {
        let state = AccordionState::from_query("2, x,0,,-1");
        assert_eq!(state.to_query(), "0,2");
    }

    #[test]
    fn state_from_ignores_out_of_range_indices() {
        let mut query = BTreeMap::new();
        query.insert("first".to_owned(), "1,7".to_owned());
        let state = FIRST.state_from(&query);
        assert!(state.is_open(1));
        assert_eq!(state.open_count(), 1);
    }

    #[test]
    fn accordions_on_one_page_do_not_share_state() {
        let mut query = BTreeMap::new();
        query.insert("first".to_owned(), "0".to_owned());
        assert!(FIRST.state_from(&query).is_open(0));
        assert!(!SECOND.state_from(&query).is_open(0));
    }

    #[test]
    fn toggle_href_opens_and_preserves_other_params() {
        let mut query = BTreeMap::new();
        query.insert("second".to_owned(), "2".to_owned());

        let href = FIRST.toggle_href("/page", &query, 1);
        assert_eq!(href, "/page?first=1&second=2#first");
    }

    #[test]
    fn toggle_href_closing_last_item_drops_param() {
        let mut query = BTreeMap::new();
        query.insert("first".to_owned(), "1".to_owned());

        assert_eq!(FIRST.toggle_href("/page", &query, 1), "/page#first");
    }

    #[test]
    fn toggle_href_encodes_multiple_open_items() {
        let mut query = BTreeMap::new();
        query.insert("first".to_owned(), "0".to_owned());

        assert_eq!(FIRST.toggle_href("/", &query, 2), "/?first=0%2C2#first");
    }
}
