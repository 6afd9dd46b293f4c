//! Topic list state owned by the topics page.
//!
//! The page holds one [`TopicsState`] per mount and settles the outcome of
//! its single request here: success replaces the list wholesale,
//! failure keeps the previous list and records the error for diagnostics.

#[cfg(test)]
#[path = "topics_test.rs"]
mod topics_test;

use std::collections::HashMap;

use crate::net::types::{Topic, TopicFetchError};
use crate::util::lifetime::ViewLifetime;

/// Render identity of a row: the topic id text plus how many earlier rows
/// share that id. Unique even when the API repeats an id.
pub type TopicRowKey = (String, usize);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TopicRow {
    pub key: TopicRowKey,
    pub title: String,
}

/// Outcome of settling a fetch result against the view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Settlement {
    /// The list was replaced with this many topics.
    Applied(usize),
    /// The fetch failed; the list is unchanged.
    Failed(TopicFetchError),
    /// The view was gone when the result arrived.
    Dropped,
}

#[derive(Clone, Debug, Default)]
pub struct TopicsState {
    pub items: Vec<Topic>,
    /// Last failure, kept for diagnostics. Never rendered.
    pub last_error: Option<TopicFetchError>,
}

impl TopicsState {
    /// Apply a fetch result if the view is still alive.
    pub fn settle(
        &mut self,
        lifetime: &ViewLifetime,
        result: Result<Vec<Topic>, TopicFetchError>,
    ) -> Settlement {
        if !lifetime.is_alive() {
            return Settlement::Dropped;
        }
        match result {
            Ok(items) => {
                let count = items.len();
                self.items = items;
                self.last_error = None;
                Settlement::Applied(count)
            }
            Err(e) => {
                self.last_error = Some(e.clone());
                Settlement::Failed(e)
            }
        }
    }

    /// One row per topic, in response order.
    pub fn rows(&self) -> Vec<TopicRow> {
        let mut seen: HashMap<String, usize> = HashMap::new();
        self.items
            .iter()
            .map(|topic| {
                let id = topic.id_text().to_owned();
                let occurrence = seen.entry(id.clone()).or_insert(0);
                let key = (id, *occurrence);
                *occurrence += 1;
                TopicRow { key, title: topic.display_title().to_owned() }
            })
            .collect()
    }
}
