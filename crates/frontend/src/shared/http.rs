//! Thin layer over `gloo-net` shared by all module APIs.
//!
//! Non-2xx responses are turned into [`ApiError::Http`] with the message
//! extracted from the body; transport failures into [`ApiError::Network`].

use contracts::shared::api_error::ApiError;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

async fn check(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let err = ApiError::from_response(status, &body);
    log::warn!("{} -> HTTP {}: {}", response.url(), status, err);
    Err(err)
}

async fn send(builder: RequestBuilder) -> Result<Response, ApiError> {
    let response = builder
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    check(response).await
}

async fn send_json<B: Serialize>(builder: RequestBuilder, body: &B) -> Result<Response, ApiError> {
    let request: Request = builder
        .header("Accept", "application/json")
        .json(body)
        .map_err(|e| ApiError::Serialize(e.to_string()))?;
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    check(response).await
}

pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    send(Request::get(url))
        .await?
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

pub async fn post_json<B: Serialize>(url: &str, body: &B) -> Result<(), ApiError> {
    send_json(Request::post(url), body).await.map(|_| ())
}

pub async fn put_json<B: Serialize>(url: &str, body: &B) -> Result<(), ApiError> {
    send_json(Request::put(url), body).await.map(|_| ())
}

pub async fn patch_json<B: Serialize>(url: &str, body: &B) -> Result<(), ApiError> {
    send_json(Request::patch(url), body).await.map(|_| ())
}

pub async fn delete(url: &str) -> Result<(), ApiError> {
    send(Request::delete(url)).await.map(|_| ())
}
