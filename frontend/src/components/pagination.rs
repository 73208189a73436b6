use leptos::*;
use pecas_core::Pagination;

/// "Anterior" / "Próxima" buttons around the page label.
///
/// Buttons disable themselves at the first and last page; clicks are
/// reported to the parent, which owns the page number.
#[component]
pub fn PaginationControls(
    #[prop(into)] pagination: Signal<Pagination>,
    on_previous: Callback<()>,
    on_next: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="pagination">
            <button
                class="btn btn-secondary"
                disabled=move || !pagination.with(|p| p.has_previous())
                on:click=move |_| on_previous.call(())
            >
                "Anterior"
            </button>
            <span class="pagination-label">{move || pagination.with(|p| p.label())}</span>
            <button
                class="btn btn-secondary"
                disabled=move || !pagination.with(|p| p.has_next())
                on:click=move |_| on_next.call(())
            >
                "Próxima"
            </button>
        </div>
    }
}
