//! Dashboard page: polled statistics, the searchable part table and the
//! part detail overlay.
//!
//! All state lives in one [`DashboardState`]; this module only wires
//! network results into [`DashboardAction`]s.

use gloo_timers::future::TimeoutFuture;
use leptos::*;
use pecas_core::{
    format_date, material_bars, run_polling, stat_cards, thickness_bars, BarDatum, CancelToken,
    DashboardAction, DashboardState, DashboardStats, PAGE_SIZE_OPTIONS,
};

use crate::components::{PaginationControls, PartDetailModal};
use crate::services::{fetch_part_detail, fetch_parts, fetch_stats};
use crate::{DEFAULT_PAGE_SIZE, STATS_POLL_INTERVAL_MS};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let state = create_rw_signal(DashboardState::new(DEFAULT_PAGE_SIZE));
    let dispatch = move |action: DashboardAction| {
        let _ = state.try_update(|s| s.apply(action));
    };

    // =========================================================================
    // Stats polling
    // =========================================================================

    let token = CancelToken::new();
    on_cleanup({
        let token = token.clone();
        move || token.cancel()
    });

    spawn_local(async move {
        run_polling(
            token,
            || TimeoutFuture::new(STATS_POLL_INTERVAL_MS),
            move || async move {
                let action = match fetch_stats().await {
                    Ok(stats) => DashboardAction::StatsLoaded(stats),
                    Err(error) => DashboardAction::StatsFailed(error),
                };
                dispatch(action);
            },
        )
        .await;
    });

    // =========================================================================
    // Part listing
    // =========================================================================

    // Refetch only when page, size or search actually change
    let query = create_memo(move |_| state.with(|s| s.parts_query()));

    create_effect(move |_| {
        query.track();
        let Some((request, query)) = state.try_update(|s| s.begin_parts_request()) else {
            return;
        };

        log::debug!("Fetching parts page {} ({:?})", query.page, request);
        spawn_local(async move {
            let action = match fetch_parts(&query).await {
                Ok(page) => DashboardAction::PartsLoaded { request, page },
                Err(error) => DashboardAction::PartsFailed { request, error },
            };
            dispatch(action);
        });
    });

    let open_detail = move |codigo: String| {
        let Some(request) = state.try_update(|s| s.open_detail(codigo.clone())) else {
            return;
        };

        spawn_local(async move {
            let action = match fetch_part_detail(&codigo).await {
                Ok(detail) => DashboardAction::DetailLoaded { request, detail },
                Err(error) => DashboardAction::DetailFailed { request, error },
            };
            dispatch(action);
        });
    };

    // =========================================================================
    // Derived signals
    // =========================================================================

    let stats = create_memo(move |_| state.with(|s| s.stats.clone()));
    let stats_error = create_memo(move |_| state.with(|s| s.stats_error.clone()));
    let stats_loading = move || state.with(|s| s.stats_loading());
    let rows = create_memo(move |_| state.with(|s| s.part_rows()));
    let parts_loading = move || state.with(|s| s.parts_loading);
    let parts_error = create_memo(move |_| state.with(|s| s.parts_error.clone()));
    let pagination = Signal::derive(move || state.with(|s| s.pagination));
    let detail = create_memo(move |_| state.with(|s| s.detail.clone()));

    let on_previous = Callback::new(move |_| dispatch(DashboardAction::PreviousPage));
    let on_next = Callback::new(move |_| dispatch(DashboardAction::NextPage));
    let on_close_detail = Callback::new(move |_| dispatch(DashboardAction::CloseDetail));

    let on_search = move |ev: web_sys::Event| dispatch(DashboardAction::SearchChanged(event_target_value(&ev)));
    let on_page_size = move |ev: web_sys::Event| {
        match event_target_value(&ev).parse::<u32>() {
            Ok(size) => dispatch(DashboardAction::PageSizeChanged(size)),
            Err(e) => log::warn!("Ignoring page size selection: {}", e),
        }
    };

    view! {
        <div class="container dashboard">
            <h1>"Dashboard"</h1>

            <Show
                when=move || !stats_loading()
                fallback=|| view! { <div class="loading">"Carregando estatísticas..."</div> }
            >
                {move || match (stats.get(), stats_error.get()) {
                    (None, Some(error)) => view! {
                        <div class="error-banner full">{error}</div>
                    }
                    .into_view(),
                    (Some(stats), error) => view! {
                        {error.map(|e| view! { <div class="error-banner">{e}</div> })}
                        <StatsOverview stats=stats on_open=open_detail/>
                    }
                    .into_view(),
                    (None, None) => view! { }.into_view(),
                }}
            </Show>

            <section class="parts-section">
                <div class="parts-toolbar">
                    <h2>"Peças"</h2>
                    <input
                        type="search"
                        class="search-input"
                        placeholder="Buscar por código..."
                        prop:value=move || state.with(|s| s.search.clone())
                        on:input=on_search
                    />
                    <label class="page-size">
                        "Itens por página "
                        <select on:change=on_page_size>
                            {PAGE_SIZE_OPTIONS
                                .into_iter()
                                .map(|size| view! {
                                    <option
                                        value=size.to_string()
                                        selected=move || pagination.with(|p| p.tamanho_pagina == size)
                                    >
                                        {size}
                                    </option>
                                })
                                .collect_view()}
                        </select>
                    </label>
                </div>

                {move || parts_error.get().map(|e| view! { <div class="error-banner">{e}</div> })}

                <div class="table-wrapper" class:loading=parts_loading>
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Código"</th>
                                <th>"Data"</th>
                                <th>"Subpeças"</th>
                                <th>"Materiais"</th>
                                <th>"Espessuras"</th>
                                <th>"Perímetro Total (mm)"</th>
                                <th>"Tempo de Corte (s)"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || rows.get()
                                key=|row| row.codigo.clone()
                                children=move |row| {
                                    let codigo = row.codigo.clone();
                                    view! {
                                        <tr class="clickable" on:click=move |_| open_detail(codigo.clone())>
                                            <td class="code">{row.codigo}</td>
                                            <td>{row.date}</td>
                                            <td>{row.subparts}</td>
                                            <td>{row.materials}</td>
                                            <td>{row.thicknesses}</td>
                                            <td>{row.perimeter}</td>
                                            <td>{row.cut_time}</td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                    <Show
                        when=move || rows.with(|r| r.is_empty()) && !parts_loading()
                        fallback=|| view! { }
                    >
                        <p class="empty">"Nenhuma peça encontrada."</p>
                    </Show>
                </div>

                <PaginationControls
                    pagination=pagination
                    on_previous=on_previous
                    on_next=on_next
                />
            </section>

            <PartDetailModal detail=detail on_close=on_close_detail/>
        </div>
    }
}

/// Stat cards, breakdown charts and the latest parts.
#[component]
fn StatsOverview<F>(stats: DashboardStats, on_open: F) -> impl IntoView
where
    F: Fn(String) + Copy + 'static,
{
    let cards = stat_cards(&stats);
    let materials = material_bars(&stats);
    let thicknesses = thickness_bars(&stats);
    let recent = stats.ultimas_pecas;

    view! {
        <div class="stats-grid">
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

        <div class="charts-grid">
            <BreakdownChart title="Peças por Material" bars=materials/>
            <BreakdownChart title="Peças por Espessura" bars=thicknesses/>
        </div>

        {(!recent.is_empty()).then(|| view! {
            <div class="recent-parts">
                <h3>"Últimas Peças"</h3>
                <ul>
                    {recent
                        .into_iter()
                        .map(|part| {
                            let codigo = part.codigo.clone();
                            view! {
                                <li class="clickable" on:click=move |_| on_open(codigo.clone())>
                                    <span class="code">{part.codigo}</span>
                                    <span>{format_date(part.created_at.as_ref())}</span>
                                    <span>{format!("{} subpeça(s)", part.total_subpecas)}</span>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        })}
    }
}

/// Horizontal bars scaled against the largest quantity.
#[component]
fn BreakdownChart(title: &'static str, bars: Vec<BarDatum>) -> impl IntoView {
    let empty = bars.is_empty();

    view! {
        <div class="chart-card">
            <h3>{title}</h3>
            {if empty {
                view! { <p class="empty">"Sem dados."</p> }.into_view()
            } else {
                bars.into_iter()
                    .map(|bar| view! {
                        <div class="bar-row">
                            <span class="bar-label">{bar.label}</span>
                            <div class="bar-track">
                                <div class="bar-fill" style=format!("width: {:.1}%;", bar.percent)></div>
                            </div>
                            <span class="bar-value">{bar.quantity}</span>
                        </div>
                    })
                    .collect_view()
            }}
        </div>
    }
}
