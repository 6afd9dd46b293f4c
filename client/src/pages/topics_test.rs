#![cfg(feature = "ssr")]

use super::*;

fn render_page() -> String {
    let owner = Owner::new();
    owner.with(|| view! { <TopicsPage/> }.to_html())
}

#[test]
fn mounted_page_renders_heading_with_empty_list() {
    let html = render_page();

    assert!(html.contains("<h1>Topics</h1>"));
    assert!(html.contains("<ul"));
    assert_eq!(html.matches("<li").count(), 0);
}

#[test]
fn page_renders_without_api_context_outside_browser() {
    // No ApiConfig is provided here; only the browser build reads it.
    let html = render_page();
    assert!(html.contains("topics-page"));
}
