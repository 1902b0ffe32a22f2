use std::time::Instant;

use anyhow::{anyhow, Result};
use once_cell::sync::{Lazy, OnceCell};
use reqwest::{header, Client, Method, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};

use crate::logging::Logger;

pub mod user_agent;

/// A singleton instance of the reqwest client.
static CLIENT: OnceCell<Client> = OnceCell::new();

static LOGGER: Lazy<Logger> = Lazy::new(|| Logger::new("http"));

/// Returns the reqwest client singleton instance or creates one if it doesn't exist.
fn get_client() -> Result<&'static Client> {
    CLIENT.get_or_try_init(|| {
        Client::builder()
            .brotli(true)
            .gzip(true)
            .pool_max_idle_per_host(4)
            // 帶上瀏覽器的 User-Agent，避免被當成自動化程式而擋下
            .user_agent(user_agent::gen_random_ua())
            .build()
            .map_err(|e| anyhow!("Failed to create reqwest client: {:?}", e))
    })
}

/// Performs an HTTP GET request and deserializes the JSON response into the specified type.
///
/// Non-success HTTP statuses and undeserializable bodies are both errors.
pub async fn get_json<RES: DeserializeOwned>(
    url: &str,
    headers: Option<header::HeaderMap>,
) -> Result<RES> {
    let response = send(Method::GET, url, headers, None::<fn(_) -> _>).await?;
    let status = response.status();

    if !status.is_success() {
        return Err(anyhow!("Request to {} returned HTTP {}", url, status));
    }

    response
        .json::<RES>()
        .await
        .map_err(|e| anyhow!("Error parsing response JSON: {:?}", e))
}

/// Performs an HTTP POST request with a JSON body and returns the raw response.
///
/// 回應內容由呼叫端決定是否要讀取
pub async fn post_json<REQ: Serialize>(
    url: &str,
    headers: Option<header::HeaderMap>,
    req: Option<&REQ>,
) -> Result<Response> {
    send(
        Method::POST,
        url,
        headers,
        Some(|rb: RequestBuilder| {
            if let Some(r) = req {
                rb.json(r)
            } else {
                rb
            }
        }),
    )
    .await
}

/// Sends a single HTTP request with the specified method, URL, headers, and body.
///
/// 只發送一次，不重試
async fn send(
    method: Method,
    url: &str,
    headers: Option<header::HeaderMap>,
    body: Option<impl FnOnce(RequestBuilder) -> RequestBuilder>,
) -> Result<Response> {
    let visit_log = format!("{method}:{url}");
    let client = get_client()?;
    let mut rb = client.request(method, url);

    if let Some(h) = headers {
        rb = rb.headers(h);
    }

    if let Some(body_fn) = body {
        rb = body_fn(rb);
    }

    let start = Instant::now();
    let res = rb.send().await;
    let elapsed = start.elapsed().as_millis();

    match res {
        Ok(response) => {
            LOGGER.info(format!("{} {} ms", visit_log, elapsed));
            Ok(response)
        }
        Err(why) => {
            LOGGER.error(format!("{} failed because {:?}. {} ms", visit_log, why, elapsed));
            Err(anyhow!("Failed to send request to {} because {:?}", url, why))
        }
    }
}
