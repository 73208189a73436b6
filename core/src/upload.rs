//! Upload status machine.
//!
//! Four states (`Idle`, `Uploading`, `Success`, `Error`) driven by
//! [`UploadEvent`]s. The frontend feeds it either real bytes-sent events
//! from the transport or the fixed simulated steps; the status banner only
//! ever reads [`UploadState`].

use crate::request::{Generation, RequestId};

/// Message while the request is being prepared.
pub const MSG_STARTING: &str = "Iniciando processamento...";
/// Message from 30% on.
pub const MSG_EXTRACTING: &str = "Extraindo arquivos...";
/// Message from 60% on.
pub const MSG_PROCESSING: &str = "Processando PDFs e DXFs...";
/// Message from 90% on.
pub const MSG_PERSISTING: &str = "Salvando no banco de dados...";
/// Message for any failure.
pub const MSG_FAILED: &str = "Erro durante o processamento. Tente novamente.";

/// Share of the bar covered by bytes on the wire; the rest waits for the
/// backend to finish extracting and saving.
pub const TRANSPORT_PROGRESS_CEILING: u8 = 90;

/// Simulated progress increment, in percent.
pub const SIMULATED_STEP: u8 = 10;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UploadStatus {
    #[default]
    Idle,
    Uploading,
    Success,
    Error,
}

impl UploadStatus {
    /// CSS modifier for the status banner.
    pub fn css_class(&self) -> &'static str {
        match self {
            UploadStatus::Idle => "status-idle",
            UploadStatus::Uploading => "status-uploading",
            UploadStatus::Success => "status-success",
            UploadStatus::Error => "status-error",
        }
    }
}

/// Inputs to the status machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadEvent {
    /// Progress in percent (`0..=100`).
    Progress(u8),
    /// Backend accepted the archives.
    Completed,
    /// Anything went wrong; the string is the technical reason.
    Failed(String),
}

/// Snapshot rendered by the status banner.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadState {
    pub status: UploadStatus,
    pub message: String,
    /// Technical reason behind an `Error`, shown in small print.
    pub detail: Option<String>,
    pub progress: u8,
    file_count: usize,
    generation: Generation,
}

impl UploadState {
    pub fn is_uploading(&self) -> bool {
        self.status == UploadStatus::Uploading
    }

    /// Enters `Uploading` at 0% for `file_count` files and returns the id
    /// its events must carry.
    ///
    /// Returns `None` without touching the state when there is nothing to
    /// upload or an upload is already running.
    pub fn start(&mut self, file_count: usize) -> Option<RequestId> {
        if file_count == 0 || self.is_uploading() {
            return None;
        }

        self.status = UploadStatus::Uploading;
        self.message = MSG_STARTING.to_string();
        self.detail = None;
        self.progress = 0;
        self.file_count = file_count;
        Some(self.generation.issue())
    }

    /// Back to `Idle`; used when the selection changes. Events of the
    /// upload that was running are dropped from now on.
    pub fn reset(&mut self) {
        let mut generation = std::mem::take(&mut self.generation);
        generation.invalidate();
        *self = UploadState {
            generation,
            ..UploadState::default()
        };
    }

    /// Applies an event of the upload `upload`. Events of an older upload,
    /// or arriving outside `Uploading`, are ignored so a late callback
    /// cannot resurrect or finish someone else's upload.
    pub fn apply(&mut self, upload: RequestId, event: UploadEvent) {
        if !self.generation.is_current(upload) {
            log::debug!("Dropping {:?} from stale upload {:?}", event, upload);
            return;
        }
        if !self.is_uploading() {
            log::debug!("Ignoring {:?} in state {:?}", event, self.status);
            return;
        }

        match event {
            UploadEvent::Progress(pct) => {
                let pct = pct.min(100);
                if pct < self.progress {
                    return;
                }
                self.progress = pct;
                self.message = phase_message(self.progress).to_string();
            }
            UploadEvent::Completed => {
                self.progress = 100;
                self.status = UploadStatus::Success;
                self.message = success_message(self.file_count);
                log::info!("Upload finished: {} file(s)", self.file_count);
            }
            UploadEvent::Failed(reason) => {
                log::warn!("Upload failed: {}", reason);
                self.status = UploadStatus::Error;
                self.message = MSG_FAILED.to_string();
                self.detail = Some(reason);
            }
        }
    }

    /// Progress bar is only drawn once something has moved.
    pub fn show_progress_bar(&self) -> bool {
        self.is_uploading() && self.progress > 0
    }
}

/// Phase message for a progress value.
pub fn phase_message(progress: u8) -> &'static str {
    match progress {
        0..=29 => MSG_STARTING,
        30..=59 => MSG_EXTRACTING,
        60..=89 => MSG_PROCESSING,
        _ => MSG_PERSISTING,
    }
}

/// Completion message carrying the file count.
pub fn success_message(file_count: usize) -> String {
    format!(
        "Processamento concluído! {} arquivo(s) processado(s) com sucesso.",
        file_count
    )
}

/// Label for the submit button: "Processar 1 arquivo", "Processar 3 arquivos".
pub fn submit_label(file_count: usize) -> String {
    let plural = if file_count > 1 { "s" } else { "" };
    format!("Processar {} arquivo{}", file_count, plural)
}

/// Maps bytes sent onto `0..=TRANSPORT_PROGRESS_CEILING`.
///
/// An unknown total (`0`) reports no progress.
pub fn transport_progress(sent: u64, total: u64) -> u8 {
    if total == 0 {
        return 0;
    }
    let ratio = sent.min(total) as f64 / total as f64;
    (ratio * TRANSPORT_PROGRESS_CEILING as f64).floor() as u8
}

/// Percentages visited by the simulated sequence: 0, 10, ..., 100.
pub fn simulated_steps() -> impl Iterator<Item = u8> {
    (0..=100).step_by(SIMULATED_STEP as usize)
}
