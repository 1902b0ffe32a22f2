use std::{env, path::PathBuf, str::FromStr};

use anyhow::Result;
use config::{Config as config_config, File as config_file};
use serde::{Deserialize, Serialize};

use crate::logging;

const CONFIG_PATH: &str = "app.json";

#[derive(Serialize, Deserialize, Default, Debug, Clone)]
pub struct App {
    pub bot: Bot,
    pub system: System,
}

const SYSTEM_HTTP_PORT: &str = "SYSTEM_HTTP_PORT";

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct System {
    #[serde(default = "default_http_port")]
    pub http_port: u16,
}

impl Default for System {
    fn default() -> Self {
        System {
            http_port: default_http_port(),
        }
    }
}

fn default_http_port() -> u16 {
    8080
}

#[derive(Serialize, Deserialize, Default, Debug, Clone)]
pub struct Bot {
    pub telegram: Telegram,
}

const TELEGRAM_TOKEN: &str = "TELEGRAM_TOKEN";
const TELEGRAM_CHAT_ID: &str = "TELEGRAM_CHAT_ID";

/// chat_id 為 0 時表示未設定預設聊天室，定時播報不會發送
#[derive(Serialize, Deserialize, Default, Debug, Clone)]
pub struct Telegram {
    #[serde(default)]
    pub token: String,
    #[serde(default)]
    pub chat_id: i64,
}

impl App {
    /// 載入設定，存在 app.json 時以其為底，env 內的設定值可覆蓋
    pub fn get() -> Result<Self> {
        let config_path = config_path();
        if config_path.exists() {
            let config: App = config_config::builder()
                .add_source(config_file::from(config_path))
                .build()?
                .try_deserialize()?;
            return Ok(config.override_with_env());
        }

        Ok(App::from_env())
    }

    /// 從 env 中讀取設定值
    fn from_env() -> Self {
        App {
            bot: Bot {
                telegram: Telegram {
                    token: env::var(TELEGRAM_TOKEN).unwrap_or_default(),
                    chat_id: env::var(TELEGRAM_CHAT_ID)
                        .ok()
                        .and_then(|id| i64::from_str(&id).ok())
                        .unwrap_or(0),
                },
            },
            system: System {
                http_port: env::var(SYSTEM_HTTP_PORT)
                    .ok()
                    .and_then(|port| port.parse::<u16>().ok())
                    .unwrap_or_else(default_http_port),
            },
        }
    }

    /// 將來至於 env 的設定值覆蓋掉 json 上的設定值
    fn override_with_env(mut self) -> Self {
        if let Ok(token) = env::var(TELEGRAM_TOKEN) {
            self.bot.telegram.token = token;
        }

        if let Ok(chat_id) = env::var(TELEGRAM_CHAT_ID) {
            match i64::from_str(&chat_id) {
                Ok(id) => self.bot.telegram.chat_id = id,
                Err(why) => {
                    logging::error_file_async(format!(
                        "Failed to parse {} because {:?}",
                        TELEGRAM_CHAT_ID, why
                    ));
                }
            }
        }

        if let Ok(port) = env::var(SYSTEM_HTTP_PORT) {
            if let Ok(p) = port.parse::<u16>() {
                self.system.http_port = p;
            }
        }

        self
    }
}

/// 回傳設定檔的路徑
fn config_path() -> PathBuf {
    PathBuf::from(CONFIG_PATH)
}
