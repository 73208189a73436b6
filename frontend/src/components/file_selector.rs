//! Archive picker with drag & drop support.
//!
//! Holds its own [`FileSelection`] and reports every change (new selection
//! or removal) through `on_files_selected`. It does not validate type or
//! size; the upload service does.

use leptos::*;
use pecas_core::{DragEvent as DragPhase, DragState, FileSelection, DEFAULT_MAX_FILES};
use web_sys::{Event, File, HtmlInputElement};

use crate::types::{files_from_list, BrowserFile};

#[component]
pub fn FileSelector(
    /// Receives the full, truncated selection after every change
    on_files_selected: Callback<Vec<BrowserFile>>,
    /// Files beyond this count are silently dropped
    #[prop(default = DEFAULT_MAX_FILES)]
    max_files: usize,
    /// `accept` attribute of the hidden file input
    #[prop(default = "*")]
    accept: &'static str,
) -> impl IntoView {
    let selection = create_rw_signal(FileSelection::<File>::new(max_files));
    let drag = create_rw_signal(DragState::default());
    let file_input = create_node_ref::<html::Input>();

    let report = move || {
        on_files_selected.call(selection.with_untracked(|s| s.to_vec()));
    };

    let process_files = move |files: Vec<BrowserFile>| {
        let changed = selection.try_update(|s| s.replace(files)).unwrap_or(false);
        if changed {
            report();
        }
    };

    // Every drag handler swallows the event so the browser does not
    // navigate to the dropped file
    let on_drag = move |phase: DragPhase| {
        move |ev: web_sys::DragEvent| {
            ev.prevent_default();
            ev.stop_propagation();
            drag.update(|d| d.apply(phase));
        }
    };

    let on_drop = move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        drag.update(|d| d.apply(DragPhase::Drop));

        if let Some(list) = ev.data_transfer().and_then(|dt| dt.files()) {
            process_files(files_from_list(&list));
        }
    };

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(list) = input.files() {
            process_files(files_from_list(&list));
        }
        // Picking the same file again must fire `change` again
        input.set_value("");
    };

    let open_picker = move |_| {
        if let Some(input) = file_input.get() {
            input.click();
        }
    };

    let remove_file = move |index: usize| {
        let removed = selection.try_update(|s| s.remove(index)).flatten();
        if let Some(file) = removed {
            log::debug!("Removed {} from selection", file.name);
            report();
        }
    };

    view! {
        <div class="file-selector">
            <div
                class="upload-section"
                class:dragover=move || drag.get().is_drag_over
                on:dragenter=on_drag(DragPhase::Enter)
                on:dragleave=on_drag(DragPhase::Leave)
                on:dragover=on_drag(DragPhase::Over)
                on:drop=on_drop
                on:click=open_picker
            >
                <div class="upload-icon">"📤"</div>
                <div class="upload-text">"Arraste e solte seus arquivos aqui"</div>
                <div class="upload-hint">
                    "ou " <span class="accent">"clique para selecionar"</span>
                </div>
                <div class="upload-hint small">"Suporta arquivos ZIP e RAR até 200MB"</div>
            </div>

            <input
                type="file"
                multiple=true
                accept=accept
                style="display:none"
                node_ref=file_input
                on:change=on_file_change
            />

            <Show
                when=move || selection.with(|s| !s.is_empty())
                fallback=|| view! { }
            >
                <div class="selected-files">
                    <h4>
                        {move || format!("Arquivos Selecionados ({})", selection.with(|s| s.len()))}
                    </h4>
                    <For
                        each=move || selection.with(|s| s.files().iter().cloned().enumerate().collect::<Vec<_>>())
                        key=|(idx, file)| format!("{}-{}", file.name, idx)
                        children=move |(idx, file)| {
                            view! {
                                <div class="selected-file">
                                    <div class="file-icon">"🗜️"</div>
                                    <div class="file-info">
                                        <p class="file-name">{file.name.clone()}</p>
                                        <p class="file-size">{file.display_size()}</p>
                                    </div>
                                    <button
                                        class="file-remove"
                                        title="Remover arquivo"
                                        on:click=move |_| remove_file(idx)
                                    >
                                        "✕"
                                    </button>
                                </div>
                            }
                        }
                    />
                </div>
            </Show>
        </div>
    }
}
