//! HTTP service for the JSON GET endpoints.

use gloo_net::http::{Request, Response};
use pecas_core::{
    ApiError, ApiResult, DashboardStats, Endpoints, PartDetail, PartPage, PartsQuery,
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::API_BASE_URL;

/// Endpoint layout under the configured base URL.
pub fn endpoints() -> Endpoints {
    Endpoints::new(API_BASE_URL)
}

/// Turns a response into `T`, or an [`ApiError`] for non-2xx statuses.
async fn read_json<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    if !response.ok() {
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::from_response(response.status(), &body));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

async fn get_json<T: DeserializeOwned>(url: &str) -> ApiResult<T> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    read_json(response).await
}

/// `GET /dashboard/stats/`
pub async fn fetch_stats() -> ApiResult<DashboardStats> {
    get_json(&endpoints().stats()).await
}

/// `GET /dashboard/pecas/?page=&page_size=&search=`
pub async fn fetch_parts(query: &PartsQuery) -> ApiResult<PartPage> {
    let params = query.params();
    let response = Request::get(&endpoints().parts())
        .query(params.iter().map(|(key, value)| (*key, value.as_str())))
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    read_json(response).await
}

/// `GET /dashboard/pecas/{codigo}/`
pub async fn fetch_part_detail(codigo: &str) -> ApiResult<PartDetail> {
    get_json(&endpoints().part_detail(codigo)).await
}

/// `GET /uploads/` - opaque list of past uploads.
pub async fn fetch_upload_history() -> ApiResult<Value> {
    get_json(&endpoints().upload_history()).await
}

/// `GET /uploads/{id}/`
pub async fn fetch_upload_details(upload_id: &str) -> ApiResult<Value> {
    get_json(&endpoints().upload_details(upload_id)).await
}
