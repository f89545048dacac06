//! Request extractors whose rejections go through `ApiError`.

use axum::{Json, extract::FromRequest};

use super::error::ApiError;

/// `Json` body extractor that rejects with 422
#[derive(Debug, FromRequest)]
#[from_request(via(Json), rejection(ApiError))]
pub struct JsonBody<T>(pub T);
