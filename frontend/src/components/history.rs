//! Upload history page.
//!
//! The backend's history payload has no fixed schema, so entries are
//! kept as raw JSON and pretty-printed.

use leptos::*;
use serde_json::Value;

use crate::services::{fetch_upload_details, fetch_upload_history};

#[component]
pub fn HistoryPage() -> impl IntoView {
    let history = create_local_resource(|| (), |_| async move { fetch_upload_history().await });
    let (selected, set_selected) = create_signal(None::<String>);
    let details = create_local_resource(
        move || selected.get(),
        |id| async move {
            match id {
                Some(id) => Some(fetch_upload_details(&id).await),
                None => None,
            }
        },
    );

    view! {
        <div class="container history">
            <h1>"Histórico de Uploads"</h1>

            <Suspense fallback=|| view! { <div class="loading">"Carregando histórico..."</div> }>
                {move || history.get().map(|result| match result {
                    Err(e) => view! {
                        <div class="error-banner">{format!("Erro ao carregar histórico: {}", e)}</div>
                    }
                    .into_view(),
                    Ok(payload) => {
                        let entries = history_entries(payload);
                        if entries.is_empty() {
                            view! { <p class="empty">"Nenhum upload registrado."</p> }.into_view()
                        } else {
                            entries
                                .into_iter()
                                .map(|entry| view! {
                                    <HistoryEntry entry=entry on_select=set_selected/>
                                })
                                .collect_view()
                        }
                    }
                })}
            </Suspense>

            <Show when=move || selected.with(Option::is_some) fallback=|| view! { }>
                <div class="history-details">
                    <div class="modal-header">
                        <h2>{move || format!("Upload {}", selected.get().unwrap_or_default())}</h2>
                        <button class="modal-close" title="Fechar" on:click=move |_| set_selected.set(None)>
                            "✕"
                        </button>
                    </div>
                    <Suspense fallback=|| view! { <div class="loading">"Carregando detalhes..."</div> }>
                        {move || details.get().flatten().map(|result| match result {
                            Ok(value) => view! { <pre class="json">{pretty(&value)}</pre> }.into_view(),
                            Err(e) => view! { <div class="error-banner">{e.to_string()}</div> }.into_view(),
                        })}
                    </Suspense>
                </div>
            </Show>
        </div>
    }
}

#[component]
fn HistoryEntry(entry: Value, on_select: WriteSignal<Option<String>>) -> impl IntoView {
    let id = entry_id(&entry);
    let title = id
        .as_deref()
        .map(|id| format!("Upload {}", id))
        .unwrap_or_else(|| "Upload".to_string());

    view! {
        <div class="history-entry">
            <div class="history-entry-header">
                <h3>{title}</h3>
                {id.map(|id| view! {
                    <button
                        class="btn btn-secondary"
                        on:click=move |_| on_select.set(Some(id.clone()))
                    >
                        "Detalhes"
                    </button>
                })}
            </div>
            <pre class="json">{pretty(&entry)}</pre>
        </div>
    }
}

/// Entries of a history payload: a bare array, or the array under one of
/// the usual envelope keys. Anything else is shown as a single entry.
fn history_entries(payload: Value) -> Vec<Value> {
    match payload {
        Value::Array(items) => items,
        Value::Object(mut map) => {
            for key in ["uploads", "results", "items"] {
                if let Some(Value::Array(items)) = map.remove(key) {
                    return items;
                }
            }
            vec![Value::Object(map)]
        }
        Value::Null => Vec::new(),
        other => vec![other],
    }
}

/// Identifier used for `/uploads/{id}/`, from `id` or `upload_id`.
fn entry_id(entry: &Value) -> Option<String> {
    ["id", "upload_id"]
        .iter()
        .filter_map(|key| entry.get(*key))
        .find_map(|value| match value {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        })
}

fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_history_entries_shapes() {
        assert_eq!(history_entries(json!([{"id": 1}, {"id": 2}])).len(), 2);
        assert_eq!(history_entries(json!({"uploads": [{"id": 1}]})), vec![json!({"id": 1})]);
        assert_eq!(history_entries(json!({"results": []})), Vec::<Value>::new());
        assert_eq!(history_entries(Value::Null), Vec::<Value>::new());
        assert_eq!(history_entries(json!({"status": "ok"})), vec![json!({"status": "ok"})]);
    }

    #[test]
    fn test_entry_id() {
        assert_eq!(entry_id(&json!({"id": 7})), Some("7".to_string()));
        assert_eq!(entry_id(&json!({"upload_id": "abc"})), Some("abc".to_string()));
        assert_eq!(entry_id(&json!({"id": ""})), None);
        assert_eq!(entry_id(&json!({"nome": "lote.zip"})), None);
    }
}
