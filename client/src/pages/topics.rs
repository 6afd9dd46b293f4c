//! Topics page: fetches the topic collection once on mount and lists it.

#[cfg(test)]
#[path = "topics_test.rs"]
mod topics_test;

use leptos::prelude::*;

use crate::components::topic_list::TopicList;
use crate::state::topics::TopicsState;

/// Topic list page. Failures are logged and leave the list empty.
#[component]
pub fn TopicsPage() -> impl IntoView {
    let topics = RwSignal::new(TopicsState::default());

    // Component bodies run once per mount, so this is the page's only request.
    #[cfg(feature = "hydrate")]
    {
        use crate::net::config::ApiConfig;
        use crate::state::topics::Settlement;
        use crate::util::lifetime::ViewLifetime;

        let config = expect_context::<ApiConfig>();
        let lifetime = ViewLifetime::new();
        on_cleanup({
            let lifetime = lifetime.clone();
            move || lifetime.end()
        });

        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_topics(&config).await;
            match topics.try_update(|s| s.settle(&lifetime, result)) {
                Some(Settlement::Applied(count)) => log::debug!("loaded {count} topics"),
                Some(Settlement::Failed(e)) => log::error!("Error fetching topics: {e}"),
                Some(Settlement::Dropped) | None => {
                    log::debug!("topics response dropped: view unmounted");
                }
            }
        });
    }

    view! { <TopicList topics=topics.read_only()/> }
}
