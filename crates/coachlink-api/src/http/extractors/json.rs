//! JSON body extractor with envelope-formatted rejections.

use axum::extract::FromRequest;

use crate::http::error::AppError;

/// Like [`axum::Json`], but a malformed or incomplete body becomes a
/// `VALIDATION_ERROR` envelope instead of axum's plain-text 4xx.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);
