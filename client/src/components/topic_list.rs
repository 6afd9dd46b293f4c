//! Topic list: heading plus one keyed `<li>` per topic.

#[cfg(test)]
#[path = "topic_list_test.rs"]
mod topic_list_test;

use leptos::prelude::*;

use crate::state::topics::TopicsState;

/// Renders whatever the state currently holds. The heading is always
/// present; an empty or failed fetch leaves the list with no items.
#[component]
pub fn TopicList(topics: ReadSignal<TopicsState>) -> impl IntoView {
    view! {
        <div class="topics-page">
            <h1>"Topics"</h1>
            <ul>
                <For
                    each=move || topics.with(TopicsState::rows)
                    key=|row| row.key.clone()
                    children=|row| view! { <li>{row.title}</li> }
                />
            </ul>
        </div>
    }
}
