//! HTTP API endpoint handlers.
//!
//! The caller identifies itself with the `User` header.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
};

use crate::{
    domain::{MessageId, MessageText, ParticipantName},
    infrastructure::dto::http::{
        EditMessageRequestDto, JoinRequestDto, ListMessagesQuery, MessageDto, ParticipantDto,
        SendMessageRequestDto,
    },
    ui::{error::ApiError, extract::JsonBody, state::AppState},
    usecase::{ChatError, EditMessageCommand},
};

const USER_HEADER: &str = "user";

/// Name sent in the `User` header, if it is a valid participant name
fn caller(headers: &HeaderMap) -> Option<ParticipantName> {
    let raw = headers.get(USER_HEADER)?;
    let value = String::from_utf8(raw.as_bytes().to_vec()).ok()?;
    ParticipantName::new(value).ok()
}

/// An unparsable id can never match a stored message
fn message_id(raw: &str) -> Result<MessageId, ApiError> {
    MessageId::parse(raw).map_err(|_| ChatError::NotFound(format!("message {raw}")).into())
}

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// `POST /participants`
pub async fn join(
    State(state): State<Arc<AppState>>,
    JsonBody(body): JsonBody<JoinRequestDto>,
) -> Result<StatusCode, ApiError> {
    let name = ParticipantName::new(body.name)?;
    state.connect.execute(name).await?;
    Ok(StatusCode::CREATED)
}

/// `GET /participants`
pub async fn list_participants(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ParticipantDto>>, ApiError> {
    let participants = state.presence.list_active().await?;
    Ok(Json(participants.into_iter().map(Into::into).collect()))
}

/// `POST /messages`
pub async fn send_message(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    JsonBody(body): JsonBody<SendMessageRequestDto>,
) -> Result<(StatusCode, Json<MessageDto>), ApiError> {
    let from = caller(&headers).ok_or_else(|| {
        ApiError::new(StatusCode::UNPROCESSABLE_ENTITY, "missing or invalid User header")
    })?;
    let command = body.into_command(from)?;

    let message = state
        .log
        .append(command)
        .await
        .map_err(ApiError::from_send_error)?;

    Ok((StatusCode::CREATED, Json(message.into())))
}

/// `GET /messages?limit=N`
pub async fn list_messages(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(query): Query<ListMessagesQuery>,
) -> Result<Json<Vec<MessageDto>>, ApiError> {
    let viewer = caller(&headers);
    let messages = state.log.list(viewer.as_ref(), query.limit()).await?;
    Ok(Json(messages.into_iter().map(Into::into).collect()))
}

/// `PUT /messages/{id}`
pub async fn edit_message(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
    JsonBody(body): JsonBody<EditMessageRequestDto>,
) -> Result<Json<MessageDto>, ApiError> {
    let requestor = caller(&headers)
        .ok_or_else(|| ApiError::new(StatusCode::UNAUTHORIZED, "missing or invalid User header"))?;
    let command = EditMessageCommand {
        id: message_id(&id)?,
        requestor,
        text: MessageText::new(body.text)?,
    };

    let message = state.log.edit(command).await?;
    Ok(Json(message.into()))
}

/// `DELETE /messages/{id}`
pub async fn delete_message(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let requestor = caller(&headers)
        .ok_or_else(|| ApiError::new(StatusCode::UNAUTHORIZED, "missing or invalid User header"))?;
    let id = message_id(&id)?;

    state.log.delete(&id, &requestor).await?;
    Ok(StatusCode::OK)
}

/// `POST /status`
pub async fn heartbeat(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<StatusCode, ApiError> {
    let name = caller(&headers)
        .ok_or_else(|| ApiError::new(StatusCode::NOT_FOUND, "missing or invalid User header"))?;
    state.presence.heartbeat(&name).await?;
    Ok(StatusCode::OK)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_caller_reads_user_header() {
        // テスト項目: User ヘッダーから参加者名を取り出せる（大文字小文字を問わないヘッダー名）
        // given (前提条件):
        let mut headers = HeaderMap::new();
        headers.insert("User", HeaderValue::from_static("Ana"));

        // then (期待する結果):
        assert_eq!(caller(&headers).unwrap().as_str(), "Ana");
    }

    #[test]
    fn test_caller_accepts_utf8_bytes() {
        // テスト項目: 非 ASCII の名前も UTF-8 として受け付ける
        // given (前提条件):
        let mut headers = HeaderMap::new();
        headers.insert(
            "user",
            HeaderValue::from_bytes("João".as_bytes()).unwrap(),
        );

        // then (期待する結果):
        assert_eq!(caller(&headers).unwrap().as_str(), "João");
    }

    #[test]
    fn test_caller_missing_or_empty() {
        // テスト項目: ヘッダーが無い、または空なら None
        // given (前提条件):
        let mut headers = HeaderMap::new();
        assert!(caller(&headers).is_none());
        headers.insert("user", HeaderValue::from_static(""));

        // then (期待する結果):
        assert!(caller(&headers).is_none());
    }

    #[test]
    fn test_message_id_invalid_is_not_found() {
        // テスト項目: UUID でない ID は 404 として扱う
        // when (操作):
        let result = message_id("42");

        // then (期待する結果):
        assert_eq!(result.unwrap_err().status(), StatusCode::NOT_FOUND);
    }
}
