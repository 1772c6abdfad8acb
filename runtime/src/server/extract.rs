//! Request extractors whose rejections use the API error shape.

use super::error::ApiError;
use axum::extract::FromRequest;

/// `axum::Json`, but a bad body becomes `{"detail": ...}` like every other
/// error instead of axum's plain-text rejection.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);
