use anyhow::{anyhow, Result};
use serde::Serialize;

use crate::{config::App, util};

#[derive(Serialize)]
pub struct SendMessageRequest<'a> {
    pub chat_id: i64,
    pub text: &'a str,
    pub parse_mode: &'a str,
}

impl<'a> SendMessageRequest<'a> {
    pub fn new(chat_id: i64, text: &'a str) -> SendMessageRequest<'a> {
        SendMessageRequest {
            chat_id,
            text,
            parse_mode: "HTML",
        }
    }
}

/// 向 Telegram 發送訊息，不讀取回應內容也不重試
pub async fn send(cfg: &App, chat_id: i64, text: &str) -> Result<()> {
    let url = format!(
        "https://api.telegram.org/bot{token}/sendMessage",
        token = cfg.bot.telegram.token
    );
    let payload = SendMessageRequest::new(chat_id, text);

    util::http::post_json(&url, None, Some(&payload))
        .await
        .map_err(|err| anyhow!("Failed to send_message because: {:?}", err))?;

    Ok(())
}
