//! Archive upload with bytes-sent progress.
//!
//! `fetch` cannot report upload progress, so this goes through
//! `XMLHttpRequest` and forwards `upload.onprogress` to the caller.

use std::cell::RefCell;
use std::rc::Rc;

use futures::channel::oneshot;
use pecas_core::{validate_file, ApiError, ApiResult, UploadResponse};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, FormData, ProgressEvent, XmlHttpRequest};

use crate::services::endpoints;
use crate::types::BrowserFile;

fn js_error(context: &str, err: JsValue) -> ApiError {
    let detail = err
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| err.as_string())
        .unwrap_or_else(|| format!("{:?}", err));
    ApiError::Transport(format!("{}: {}", context, detail))
}

type Completion = Rc<RefCell<Option<oneshot::Sender<Result<(), String>>>>>;

fn settle(tx: &Completion, outcome: Result<(), String>) {
    if let Some(sender) = tx.borrow_mut().take() {
        let _ = sender.send(outcome);
    }
}

/// Rejects the batch if any archive fails the size/extension check.
pub fn validate_batch(files: &[BrowserFile]) -> ApiResult<()> {
    for file in files {
        validate_file(&file.name, file.size).map_err(|source| ApiError::Validation {
            file: file.name.clone(),
            source,
        })?;
    }
    Ok(())
}

/// Uploads `files` as repeated `file` multipart fields.
///
/// `on_progress(sent, total)` fires for every progress event the browser
/// emits while the body is on the wire. Validation runs first; nothing is
/// sent if any file is rejected.
pub async fn upload_files<F>(files: &[BrowserFile], on_progress: F) -> ApiResult<UploadResponse>
where
    F: Fn(u64, u64) + 'static,
{
    validate_batch(files)?;

    let form = FormData::new().map_err(|e| js_error("Failed to create FormData", e))?;
    for file in files {
        form.append_with_blob_and_filename("file", &file.handle, &file.name)
            .map_err(|e| js_error("Failed to append file", e))?;
    }

    let xhr = XmlHttpRequest::new().map_err(|e| js_error("Failed to create request", e))?;
    xhr.open_with_async("POST", &endpoints().upload(), true)
        .map_err(|e| js_error("Failed to open request", e))?;

    // Settled once by whichever of load/error/abort fires first
    let (tx, rx) = oneshot::channel::<Result<(), String>>();
    let tx: Completion = Rc::new(RefCell::new(Some(tx)));

    let on_load = Closure::<dyn FnMut(Event)>::new({
        let tx = tx.clone();
        move |_: Event| settle(&tx, Ok(()))
    });
    let on_error = Closure::<dyn FnMut(Event)>::new({
        let tx = tx.clone();
        move |_: Event| settle(&tx, Err("connection failed".to_string()))
    });
    let on_abort = Closure::<dyn FnMut(Event)>::new({
        let tx = tx.clone();
        move |_: Event| settle(&tx, Err("request aborted".to_string()))
    });
    let on_upload_progress = Closure::<dyn FnMut(ProgressEvent)>::new(move |ev: ProgressEvent| {
        if ev.length_computable() {
            on_progress(ev.loaded() as u64, ev.total() as u64);
        }
    });

    xhr.set_onload(Some(on_load.as_ref().unchecked_ref()));
    xhr.set_onerror(Some(on_error.as_ref().unchecked_ref()));
    xhr.set_onabort(Some(on_abort.as_ref().unchecked_ref()));
    xhr.upload()
        .map_err(|e| js_error("Upload progress unavailable", e))?
        .set_onprogress(Some(on_upload_progress.as_ref().unchecked_ref()));

    log::info!("📤 Uploading {} archive(s)...", files.len());
    xhr.send_with_opt_form_data(Some(&form))
        .map_err(|e| js_error("HTTP request failed", e))?;

    let outcome = rx
        .await
        .map_err(|_| ApiError::Transport("request dropped".to_string()));

    // Closures must outlive the request; detach them before they are freed
    xhr.set_onload(None);
    xhr.set_onerror(None);
    xhr.set_onabort(None);
    if let Ok(upload) = xhr.upload() {
        upload.set_onprogress(None);
    }
    drop((on_load, on_error, on_abort, on_upload_progress));

    outcome?.map_err(ApiError::Transport)?;

    let status = xhr.status().map_err(|e| js_error("Failed to read status", e))?;
    let body = xhr
        .response_text()
        .map_err(|e| js_error("Failed to read response", e))?
        .unwrap_or_default();

    if !(200..300).contains(&status) {
        return Err(ApiError::from_response(status, &body));
    }

    Ok(serde_json::from_str::<UploadResponse>(&body)?)
}
