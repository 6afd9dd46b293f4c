//! Login page placeholder.

use leptos::prelude::*;

/// Login page. Sign-in is handled elsewhere; this route only renders a heading.
#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <div class="login-page">
            <h1>"Login"</h1>
        </div>
    }
}
