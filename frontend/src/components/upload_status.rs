use leptos::*;
use pecas_core::{UploadState, UploadStatus};

/// Banner below the upload button: phase message, error detail and the
/// progress bar while an upload runs. Renders nothing while idle.
#[component]
pub fn UploadStatusBanner(#[prop(into)] state: Signal<UploadState>) -> impl IntoView {
    let status = move || state.with(|s| s.status);

    view! {
        <Show
            when=move || status() != UploadStatus::Idle
            fallback=|| view! { }
        >
            <div class=move || format!("upload-status {}", status().css_class())>
                <div class="status-icon">
                    {move || match status() {
                        UploadStatus::Uploading => "⏳",
                        UploadStatus::Success => "✅",
                        UploadStatus::Error => "⚠️",
                        UploadStatus::Idle => "",
                    }}
                </div>
                <div class="status-body">
                    <p class="status-message">{move || state.with(|s| s.message.clone())}</p>
                    {move || {
                        state
                            .with(|s| s.detail.clone())
                            .map(|detail| view! { <p class="status-detail">{detail}</p> })
                    }}
                    <Show
                        when=move || state.with(|s| s.show_progress_bar())
                        fallback=|| view! { }
                    >
                        <div class="progress-bar">
                            <div
                                class="progress-fill"
                                style=move || format!("width: {}%;", state.with(|s| s.progress))
                            ></div>
                        </div>
                        <p class="progress-label">
                            {move || format!("{}% concluído", state.with(|s| s.progress))}
                        </p>
                    </Show>
                </div>
            </div>
        </Show>
    }
}
