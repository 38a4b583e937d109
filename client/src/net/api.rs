//! REST API helpers for communicating with the maintenance server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call resolves to `ApiError::Unavailable` since
//! these endpoints are only meaningful in the browser.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every request passes through `request_builder`, which reads the session
//! token from `localStorage` at send time and attaches
//! `Authorization: Token <value>` when one is present. Pages never set the
//! header themselves.
//!
//! ERROR HANDLING
//! ==============
//! Transport, status and decode failures are returned unchanged as
//! `ApiError`; there is no retry, backoff, or cancellation.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::types::{
    CustomUser, Equipment, Id, LoginCredentials, LoginResponse, RegisterPayload, Task, TaskPayload, TaskStatus,
    TaskStatusPayload,
};
#[cfg(feature = "hydrate")]
use super::types::TaskStatusImage;

/// Multipart field carrying the image file.
pub const IMAGE_FIELD: &str = "image";
/// Multipart field carrying the owning status id.
pub const IMAGE_STATUS_FIELD: &str = "task_status_FK";

/// HTTP verbs used by the REST endpoints.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

/// Every REST operation the client performs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endpoint {
    Login,
    Logout,
    Register,
    Me,
    ListTasks,
    GetTask(Id),
    CreateTask,
    UpdateTask(Id),
    DeleteTask(Id),
    ListUsers,
    ListEquipments,
    CreateTaskStatus,
    UploadTaskStatusImage,
}

impl Endpoint {
    pub fn method(self) -> Method {
        match self {
            Self::Me | Self::ListTasks | Self::GetTask(_) | Self::ListUsers | Self::ListEquipments => Method::Get,
            Self::Login
            | Self::Logout
            | Self::Register
            | Self::CreateTask
            | Self::CreateTaskStatus
            | Self::UploadTaskStatusImage => Method::Post,
            Self::UpdateTask(_) => Method::Put,
            Self::DeleteTask(_) => Method::Delete,
        }
    }

    /// Path relative to the API base URL, with the server's trailing slash.
    pub fn path(self) -> String {
        match self {
            Self::Login => "/auth/token/login/".to_owned(),
            Self::Logout => "/auth/token/logout/".to_owned(),
            Self::Register => "/auth/users/".to_owned(),
            Self::Me => "/auth/users/me/".to_owned(),
            Self::ListTasks | Self::CreateTask => "/task/".to_owned(),
            Self::GetTask(id) | Self::UpdateTask(id) | Self::DeleteTask(id) => format!("/task/{id}/"),
            Self::ListUsers => "/custom-user/".to_owned(),
            Self::ListEquipments => "/equipment/".to_owned(),
            Self::CreateTaskStatus => "/task-status/".to_owned(),
            Self::UploadTaskStatusImage => "/task-status-image/".to_owned(),
        }
    }
}

fn endpoint_url(base_url: &str, endpoint: Endpoint) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), endpoint.path())
}

/// `Authorization` header value for a stored token, if any.
fn authorization_header(token: Option<&str>) -> Option<String> {
    token
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(|t| format!("Token {t}"))
}

#[cfg(any(test, feature = "hydrate"))]
fn status_failed_message(endpoint: Endpoint, status: u16) -> String {
    format!("{} {} failed: {status}", endpoint.method().as_str(), endpoint.path())
}

#[cfg(feature = "hydrate")]
fn request_builder(endpoint: Endpoint) -> gloo_net::http::RequestBuilder {
    use gloo_net::http::Request;

    use crate::state::auth::TOKEN_STORAGE_KEY;
    use crate::util::storage::{KeyValueStore, LocalStorage};

    let url = endpoint_url(&crate::config::api_base_url(), endpoint);
    log::debug!("{} {}", endpoint.method().as_str(), endpoint.path());
    let builder = match endpoint.method() {
        Method::Get => Request::get(&url),
        Method::Post => Request::post(&url),
        Method::Put => Request::put(&url),
        Method::Delete => Request::delete(&url),
    };
    match authorization_header(LocalStorage.get_item(TOKEN_STORAGE_KEY).as_deref()) {
        Some(value) => builder.header("Authorization", &value),
        None => builder,
    }
}

#[cfg(feature = "hydrate")]
async fn send(endpoint: Endpoint, request: gloo_net::http::Request) -> Result<gloo_net::http::Response, ApiError> {
    let resp = request.send().await.map_err(|e| {
        log::warn!("{} {} network error: {e}", endpoint.method().as_str(), endpoint.path());
        ApiError::Network(e.to_string())
    })?;
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    log::warn!("{}", status_failed_message(endpoint, status));
    let body = resp.text().await.unwrap_or_default();
    Err(ApiError::Status { status, body })
}

/// Issue `endpoint` with an optional JSON body and return the raw response.
async fn dispatch<B>(endpoint: Endpoint, body: Option<&B>) -> Result<Response, ApiError>
where
    B: Serialize + ?Sized,
{
    #[cfg(feature = "hydrate")]
    {
        let builder = request_builder(endpoint);
        let request = match body {
            Some(body) => builder.json(body),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Network(e.to_string()))?;
        send(endpoint, request).await.map(Response)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (endpoint, body);
        Err(ApiError::Unavailable)
    }
}

/// Successful HTTP response, opaque outside the browser.
struct Response(#[cfg(feature = "hydrate")] gloo_net::http::Response);

impl Response {
    async fn decode<T: DeserializeOwned>(self) -> Result<T, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            self.0.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }
}

const NO_BODY: Option<&()> = None;

/// Exchange credentials for a session token via `POST /auth/token/login/`.
///
/// # Errors
///
/// Returns an error if the request fails or the credentials are rejected.
pub async fn login(credentials: &LoginCredentials) -> Result<LoginResponse, ApiError> {
    dispatch(Endpoint::Login, Some(credentials)).await?.decode().await
}

/// Invalidate the current token server-side via `POST /auth/token/logout/`.
///
/// # Errors
///
/// Returns an error if the request fails; callers clear local state regardless.
pub async fn logout() -> Result<(), ApiError> {
    dispatch(Endpoint::Logout, NO_BODY).await.map(|_| ())
}

/// Create an account via `POST /auth/users/`.
///
/// # Errors
///
/// Returns an error if the request fails or the server rejects the payload.
pub async fn register(payload: &RegisterPayload) -> Result<CustomUser, ApiError> {
    dispatch(Endpoint::Register, Some(payload)).await?.decode().await
}

/// Fetch the user that owns the stored token via `GET /auth/users/me/`.
///
/// # Errors
///
/// Returns an error if the request fails or the token is not accepted.
pub async fn get_me() -> Result<CustomUser, ApiError> {
    dispatch(Endpoint::Me, NO_BODY).await?.decode().await
}

/// List tasks visible to the current user via `GET /task/`.
///
/// # Errors
///
/// Returns an error if the request fails or the body is not a task list.
pub async fn get_tasks() -> Result<Vec<Task>, ApiError> {
    dispatch(Endpoint::ListTasks, NO_BODY).await?.decode().await
}

/// Fetch one task with its status history via `GET /task/{id}/`.
///
/// # Errors
///
/// Returns an error if the request fails or the task does not exist.
pub async fn get_task(id: Id) -> Result<Task, ApiError> {
    dispatch(Endpoint::GetTask(id), NO_BODY).await?.decode().await
}

/// Create a task via `POST /task/`.
///
/// The server answers with the write serializer's shape, so only the raw
/// JSON is returned; callers refetch when they need the nested record.
///
/// # Errors
///
/// Returns an error if the request fails or the payload is rejected.
pub async fn create_task(payload: &TaskPayload) -> Result<serde_json::Value, ApiError> {
    dispatch(Endpoint::CreateTask, Some(payload)).await?.decode().await
}

/// Replace a task via `PUT /task/{id}/`.
///
/// # Errors
///
/// Returns an error if the request fails or the payload is rejected.
pub async fn update_task(id: Id, payload: &TaskPayload) -> Result<serde_json::Value, ApiError> {
    dispatch(Endpoint::UpdateTask(id), Some(payload)).await?.decode().await
}

/// Delete a task via `DELETE /task/{id}/`.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn delete_task(id: Id) -> Result<(), ApiError> {
    dispatch(Endpoint::DeleteTask(id), NO_BODY).await.map(|_| ())
}

/// List users for the responsibles picker via `GET /custom-user/`.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn get_users() -> Result<Vec<CustomUser>, ApiError> {
    dispatch(Endpoint::ListUsers, NO_BODY).await?.decode().await
}

/// List equipment for the task form via `GET /equipment/`.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn get_equipments() -> Result<Vec<Equipment>, ApiError> {
    dispatch(Endpoint::ListEquipments, NO_BODY).await?.decode().await
}

/// Post a status event via `POST /task-status/`.
///
/// # Errors
///
/// Returns an error if the request fails or the payload is rejected.
pub async fn create_task_status(payload: &TaskStatusPayload) -> Result<TaskStatus, ApiError> {
    dispatch(Endpoint::CreateTaskStatus, Some(payload)).await?.decode().await
}

/// Attach an image to a status event via multipart `POST /task-status-image/`.
///
/// # Errors
///
/// Returns an error if the form cannot be built, the request fails, or the
/// server rejects the file.
#[cfg(feature = "hydrate")]
pub async fn upload_task_status_image(status_id: Id, file: &web_sys::File) -> Result<TaskStatusImage, ApiError> {
    let endpoint = Endpoint::UploadTaskStatusImage;
    let form = web_sys::FormData::new().map_err(|e| ApiError::Network(format!("{e:?}")))?;
    form.append_with_blob_and_filename(IMAGE_FIELD, file, &file.name())
        .map_err(|e| ApiError::Network(format!("{e:?}")))?;
    form.append_with_str(IMAGE_STATUS_FIELD, &status_id.to_string())
        .map_err(|e| ApiError::Network(format!("{e:?}")))?;
    // No explicit Content-Type: the browser adds the multipart boundary.
    let request = request_builder(endpoint)
        .body(form)
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let resp = send(endpoint, request).await?;
    resp.json::<TaskStatusImage>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

/// Post a status event, then upload each image against the new status id.
///
/// Uploads run one after another; the first failure stops the sequence and
/// is returned, leaving the status itself in place.
///
/// # Errors
///
/// Returns the first error from either step.
#[cfg(feature = "hydrate")]
pub async fn create_task_status_with_images(
    payload: &TaskStatusPayload,
    files: &[web_sys::File],
) -> Result<TaskStatus, ApiError> {
    let mut status = create_task_status(payload).await?;
    for file in files {
        let image = upload_task_status_image(status.id, file).await?;
        status.images.push(image);
    }
    Ok(status)
}
