#![cfg(feature = "ssr")]

use leptos::prelude::*;

use super::*;
use crate::net::api::parse_topics;
use crate::net::types::TopicFetchError;
use crate::util::lifetime::ViewLifetime;

fn render(state: TopicsState) -> String {
    let owner = Owner::new();
    owner.with(|| {
        let topics = RwSignal::new(state);
        view! { <TopicList topics=topics.read_only()/> }.to_html()
    })
}

fn settled(result: Result<Vec<crate::net::types::Topic>, TopicFetchError>) -> TopicsState {
    let mut state = TopicsState::default();
    state.settle(&ViewLifetime::new(), result);
    state
}

#[test]
fn renders_titles_in_response_order() {
    let html = render(settled(parse_topics(
        r#"[{"id":1,"title":"Alpha topic"},{"id":2,"title":"Beta topic"}]"#,
    )));

    assert!(html.contains("<h1>Topics</h1>"));
    assert_eq!(html.matches("<li").count(), 2);
    let alpha = html.find("Alpha topic").unwrap();
    let beta = html.find("Beta topic").unwrap();
    assert!(alpha < beta);
}

#[test]
fn empty_body_keeps_heading_and_renders_no_items() {
    let html = render(settled(parse_topics("[]")));

    assert!(html.contains("<h1>Topics</h1>"));
    assert!(html.contains("<ul"));
    assert_eq!(html.matches("<li").count(), 0);
}

#[test]
fn network_failure_keeps_heading_and_renders_no_items() {
    let state = settled(Err(TopicFetchError::Network("connection refused".into())));
    assert!(state.last_error.is_some());

    let html = render(state);

    assert!(html.contains("<h1>Topics</h1>"));
    assert_eq!(html.matches("<li").count(), 0);
    assert!(!html.contains("connection refused"));
}

#[test]
fn duplicate_ids_render_every_item() {
    let html = render(settled(parse_topics(
        r#"[{"id":1,"title":"One"},{"id":1,"title":"Again"},{"id":1,"title":"Thrice"}]"#,
    )));

    assert_eq!(html.matches("<li").count(), 3);
}
