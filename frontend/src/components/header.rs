use leptos::*;
use leptos_router::*;

use crate::APP_NAME;

/// Fixed top bar with the route links.
#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header>
            <div class="header-left">
                <div class="logo-mark">"📄"</div>
                <A href="/" class="logo">{APP_NAME}</A>
            </div>
            <nav class="header-right">
                <A href="/" exact=true class="nav-link" active_class="active">
                    "Upload"
                </A>
                <A href="/dashboard" class="nav-link" active_class="active">
                    "Dashboard"
                </A>
                <A href="/historico" class="nav-link" active_class="active">
                    "Histórico"
                </A>
            </nav>
        </header>
    }
}
