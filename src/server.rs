use std::sync::Arc;

use axum::{body::Bytes, extract::State, http::Method, routing::any, Router};
use serde::Deserialize;

use crate::{config::App, event, logging};

/// 觸發播報的指令前綴
const COMMAND_PREFIX: &str = "/g";

/// Telegram webhook 送來的更新，只取用到的欄位
#[derive(Deserialize)]
pub struct Update {
    pub message: Option<Message>,
}

#[derive(Deserialize)]
pub struct Message {
    pub chat: Chat,
    pub text: Option<String>,
}

#[derive(Deserialize)]
pub struct Chat {
    pub id: i64,
}

pub fn router(cfg: Arc<App>) -> Router {
    Router::new()
        .route("/", any(webhook))
        .fallback(ack)
        .with_state(cfg)
}

async fn ack() -> &'static str {
    "OK"
}

/// Telegram webhook，不論內部結果如何一律回應 OK
///
/// body 以 Bytes 接收，非 UTF-8 的內容也要回應 OK 而不是 400
async fn webhook(State(cfg): State<Arc<App>>, method: Method, body: Bytes) -> &'static str {
    if method != Method::POST {
        return "OK";
    }

    match serde_json::from_slice::<Update>(&body) {
        Ok(update) => {
            if let Some(chat_id) = triggered_chat_id(&update) {
                if let Err(why) = event::market_index::execute(&cfg, chat_id, None).await {
                    logging::error_file_async(format!(
                        "Failed to market_index::execute because {:?}",
                        why
                    ));
                }
            }
        }
        Err(why) => {
            logging::error_file_async(format!(
                "Failed to parse webhook payload because {:?}",
                why
            ));
        }
    }

    "OK"
}

/// 訊息內含指令時回傳要回覆的聊天室 id
fn triggered_chat_id(update: &Update) -> Option<i64> {
    let message = update.message.as_ref()?;
    let text = message.text.as_deref()?;

    if text.trim().starts_with(COMMAND_PREFIX) {
        return Some(message.chat.id);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn update(text: &str) -> Update {
        serde_json::from_str(&format!(
            r#"{{ "message": {{ "chat": {{ "id": 42 }}, "text": "{}" }} }}"#,
            text
        ))
        .expect("update json")
    }

    #[test]
    fn test_triggered_chat_id_with_command() {
        assert_eq!(triggered_chat_id(&update("/g")), Some(42));
        assert_eq!(triggered_chat_id(&update(" /g 指數")), Some(42));
    }

    #[test]
    fn test_triggered_chat_id_without_command() {
        assert_eq!(triggered_chat_id(&update("hello")), None);
        assert_eq!(triggered_chat_id(&update("g")), None);
    }

    #[test]
    fn test_triggered_chat_id_with_missing_fields() {
        let no_message = serde_json::from_str::<Update>(r#"{ "update_id": 1 }"#).expect("json");
        assert!(triggered_chat_id(&no_message).is_none());

        let no_text =
            serde_json::from_str::<Update>(r#"{ "message": { "chat": { "id": 42 } } }"#)
                .expect("json");
        assert!(triggered_chat_id(&no_text).is_none());
    }

    #[test]
    fn test_malformed_payload_is_not_an_update() {
        assert!(serde_json::from_str::<Update>("not json").is_err());
    }

    #[tokio::test]
    async fn test_webhook_acknowledges_non_utf8_body() {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let cfg = Arc::new(App::default());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind");
        let addr = listener.local_addr().expect("local_addr");

        tokio::spawn(async move {
            axum::serve(listener, router(cfg)).await.ok();
        });

        let mut stream = tokio::net::TcpStream::connect(addr).await.expect("connect");
        let body = [0xff_u8, 0xfe, 0xfd];
        let head = format!(
            "POST / HTTP/1.1\r\nHost: localhost\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            body.len()
        );
        stream.write_all(head.as_bytes()).await.expect("write head");
        stream.write_all(&body).await.expect("write body");

        let mut response = String::new();
        stream
            .read_to_string(&mut response)
            .await
            .expect("read response");

        assert!(
            response.starts_with("HTTP/1.1 200"),
            "response: {}",
            response
        );
        assert!(response.ends_with("OK"), "response: {}", response);
    }
}
