//! Overlay with a single part's statistics and sub-parts.

use leptos::*;
use pecas_core::{detail_cards, format_datetime, subpart_rows, DetailState, PartDetail};

/// Detail overlay. Open whenever `detail` is not `Closed`.
///
/// Closing (button, backdrop click or `Escape`) only notifies the parent;
/// the parent clears the state.
#[component]
pub fn PartDetailModal(
    #[prop(into)] detail: Signal<DetailState>,
    on_close: Callback<()>,
) -> impl IntoView {
    let is_open = move || detail.with(|d| d.is_open());

    // Keep the page behind the overlay from scrolling
    create_effect(move |_| {
        let open = is_open();
        let _ = gloo_utils::body()
            .class_list()
            .toggle_with_force("modal-open", open);
    });

    let escape = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" && detail.with_untracked(|d| d.is_open()) {
            on_close.call(());
        }
    });
    on_cleanup(move || {
        escape.remove();
        let _ = gloo_utils::body().class_list().remove_1("modal-open");
    });

    view! {
        <Show when=is_open fallback=|| view! { }>
            <div class="modal-backdrop" on:click=move |_| on_close.call(())>
                <div class="modal" on:click=|ev| ev.stop_propagation()>
                    <div class="modal-header">
                        <h2>
                            {move || {
                                let codigo = detail.with(|d| d.codigo().unwrap_or_default().to_string());
                                format!("Peça {}", codigo)
                            }}
                        </h2>
                        <button class="modal-close" title="Fechar" on:click=move |_| on_close.call(())>
                            "✕"
                        </button>
                    </div>
                    <div class="modal-body" aria-busy=move || detail.with(|d| d.is_loading().to_string())>
                        {move || match detail.get() {
                            DetailState::Closed => view! { }.into_view(),
                            DetailState::Loading { codigo } => view! {
                                <div class="loading">
                                    {format!("Carregando detalhes da peça {}...", codigo)}
                                </div>
                            }
                            .into_view(),
                            DetailState::Failed { message, .. } => view! {
                                <div class="error-banner">{message}</div>
                            }
                            .into_view(),
                            DetailState::Loaded(part) => view! { <DetailBody part=part/> }.into_view(),
                        }}
                    </div>
                </div>
            </div>
        </Show>
    }
}

#[component]
fn DetailBody(part: PartDetail) -> impl IntoView {
    let cards = detail_cards(&part.estatisticas);
    let rows = subpart_rows(&part);
    let has_rows = !rows.is_empty();

    view! {
        <div class="detail-dates">
            <span>"Criada em: " {format_datetime(part.peca.created_at.as_ref())}</span>
            <span>"Atualizada em: " {format_datetime(part.peca.updated_at.as_ref())}</span>
        </div>

        <div class="stats-grid compact">
            {cards
                .into_iter()
                .map(|card| view! {
                    <div class="stat-card">
                        <div class="stat-title">{card.title}</div>
                        <div class="stat-value">{card.value}</div>
                    </div>
                })
                .collect_view()}
        </div>

        <h3>"Subpeças"</h3>
        {if has_rows {
            view! {
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Código"</th>
                            <th>"Nome"</th>
                            <th>"Material"</th>
                            <th>"Espessura"</th>
                            <th>"Perímetro (mm)"</th>
                            <th>"Tempo de Corte (s)"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {rows
                            .into_iter()
                            .map(|row| view! {
                                <tr>
                                    <td>{row.codigo}</td>
                                    <td>{row.nome}</td>
                                    <td>{row.material}</td>
                                    <td>{row.espessura}</td>
                                    <td>{row.perimeter}</td>
                                    <td>{row.cut_time}</td>
                                </tr>
                            })
                            .collect_view()}
                    </tbody>
                </table>
            }
            .into_view()
        } else {
            view! { <p class="empty">"Nenhuma subpeça registrada."</p> }.into_view()
        }}
    }
}
