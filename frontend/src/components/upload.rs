//! Upload page: file selection, submit button and status banner.
//!
//! Drives [`UploadState`] either from real XHR progress events or, when
//! `SIMULATED_UPLOAD` is set, from fixed timed steps.

use gloo_timers::future::TimeoutFuture;
use leptos::*;
use pecas_core::upload::{simulated_steps, submit_label, transport_progress};
use pecas_core::{RequestId, UploadEvent, UploadResponse, UploadState, ACCEPT_ATTRIBUTE};

use crate::components::{FileSelector, UploadStatusBanner};
use crate::services::{upload_files, validate_batch};
use crate::types::BrowserFile;
use crate::{MAX_FILES, SIMULATED_FINISH_MS, SIMULATED_STEP_MS, SIMULATED_UPLOAD};

#[component]
pub fn UploadSection() -> impl IntoView {
    let (files, set_files) = create_signal(Vec::<BrowserFile>::new());
    let state = create_rw_signal(UploadState::default());

    let on_files_selected = Callback::new(move |selected: Vec<BrowserFile>| {
        set_files.set(selected);
        state.update(|s| s.reset());
    });

    let on_submit = move |_| {
        let batch = files.get_untracked();
        let Some(upload) = state.try_update(|s| s.start(batch.len())).flatten() else {
            return;
        };

        spawn_local(async move {
            let outcome = if SIMULATED_UPLOAD {
                simulate_upload(&batch, state, upload).await
            } else {
                send_batch(&batch, state, upload).await
            };
            push(state, upload, outcome);
        });
    };

    let show_submit = move || files.with(|f| !f.is_empty()) && !state.with(|s| s.is_uploading());

    view! {
        <div class="upload-box">
            <FileSelector
                on_files_selected=on_files_selected
                max_files=MAX_FILES
                accept=ACCEPT_ATTRIBUTE
            />

            <Show when=show_submit fallback=|| view! { }>
                <button class="btn btn-primary upload-submit" on:click=on_submit>
                    {move || submit_label(files.with(|f| f.len()))}
                </button>
            </Show>

            <UploadStatusBanner state=state/>
        </div>
    }
}

/// Applies an event of `upload` unless the page has been torn down
/// meanwhile.
fn push(state: RwSignal<UploadState>, upload: RequestId, event: UploadEvent) {
    let _ = state.try_update(|s| s.apply(upload, event));
}

async fn send_batch(
    batch: &[BrowserFile],
    state: RwSignal<UploadState>,
    upload: RequestId,
) -> UploadEvent {
    let on_progress = move |sent: u64, total: u64| {
        push(state, upload, UploadEvent::Progress(transport_progress(sent, total)));
    };

    match upload_files(batch, on_progress).await {
        Ok(response) => upload_outcome(&response),
        Err(e) => UploadEvent::Failed(e.to_string()),
    }
}

async fn simulate_upload(
    batch: &[BrowserFile],
    state: RwSignal<UploadState>,
    upload: RequestId,
) -> UploadEvent {
    if let Err(e) = validate_batch(batch) {
        return UploadEvent::Failed(e.to_string());
    }

    for pct in simulated_steps() {
        push(state, upload, UploadEvent::Progress(pct));
        TimeoutFuture::new(SIMULATED_STEP_MS).await;
    }
    TimeoutFuture::new(SIMULATED_FINISH_MS).await;

    UploadEvent::Completed
}

/// A 2xx response can still report that nothing was persisted.
fn upload_outcome(response: &UploadResponse) -> UploadEvent {
    match &response.validacao {
        Some(validation) if !validation.sucesso => {
            let reason = if validation.erros_validacao.is_empty() {
                "validação falhou no servidor".to_string()
            } else {
                validation.erros_validacao.join("; ")
            };
            UploadEvent::Failed(reason)
        }
        Some(validation) => {
            log::info!(
                "✅ {} peça(s) salvas: {}",
                validation.pecas_salvas.len(),
                validation.pecas_salvas.join(", ")
            );
            UploadEvent::Completed
        }
        None => {
            log::info!("✅ Upload accepted with status {}", response.status);
            UploadEvent::Completed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pecas_core::UploadValidation;

    fn response(validacao: Option<UploadValidation>) -> UploadResponse {
        UploadResponse {
            status: "success".to_string(),
            formato_arquivo: Some("zip".to_string()),
            total_arquivos: Some(2),
            grupos: serde_json::Value::Null,
            validacao,
        }
    }

    #[test]
    fn test_response_without_validation_completes() {
        assert_eq!(upload_outcome(&response(None)), UploadEvent::Completed);
    }

    #[test]
    fn test_successful_validation_completes() {
        let outcome = upload_outcome(&response(Some(UploadValidation {
            sucesso: true,
            pecas_salvas: vec!["P-001".to_string()],
            erros_validacao: vec![],
        })));
        assert_eq!(outcome, UploadEvent::Completed);
    }

    #[test]
    fn test_failed_validation_carries_server_errors() {
        let outcome = upload_outcome(&response(Some(UploadValidation {
            sucesso: false,
            pecas_salvas: vec![],
            erros_validacao: vec!["DXF ausente".to_string(), "PDF ilegível".to_string()],
        })));
        assert_eq!(
            outcome,
            UploadEvent::Failed("DXF ausente; PDF ilegível".to_string())
        );
    }

    #[test]
    fn test_failed_validation_without_errors_has_reason() {
        let outcome = upload_outcome(&response(Some(UploadValidation {
            sucesso: false,
            pecas_salvas: vec![],
            erros_validacao: vec![],
        })));
        assert!(matches!(outcome, UploadEvent::Failed(reason) if !reason.is_empty()));
    }
}
