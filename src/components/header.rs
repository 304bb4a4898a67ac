//! Header Component

use leptos::prelude::*;

/// Top bar with the "new dish" button
#[component]
pub fn Header(#[prop(into)] on_open_modal: Callback<()>) -> impl IntoView {
    view! {
        <header class="header">
            <div class="header-content">
                <span class="logo">"Food Admin"</span>
                <nav>
                    <button type="button" on:click=move |_| on_open_modal.run(())>
                        <span class="text">"Novo Prato"</span>
                        <span class="icon">"+"</span>
                    </button>
                </nav>
            </div>
        </header>
    }
}
