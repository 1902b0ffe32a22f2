use anyhow::{anyhow, Result};
use serde::Deserialize;

use crate::{crawler::yahoo::HOST, util};

#[derive(Deserialize)]
struct ChartResponse {
    chart: Chart,
}

#[derive(Deserialize)]
struct Chart {
    #[serde(default)]
    result: Option<Vec<ChartResult>>,
}

#[derive(Deserialize)]
struct ChartResult {
    meta: Meta,
}

#[derive(Deserialize)]
struct Meta {
    #[serde(rename = "regularMarketPrice")]
    regular_market_price: Option<f64>,
}

/// 從 chart API 取得指數的最新報價
pub async fn fetch(symbol: &str) -> Result<f64> {
    let url = format!(
        "https://{host}/v8/finance/chart/{symbol}?interval=1d&range=1d",
        host = HOST,
        symbol = urlencoding::encode(symbol)
    );
    let response: ChartResponse = util::http::get_json(&url, None).await?;

    extract_price(response)
        .ok_or_else(|| anyhow!("Missing regularMarketPrice for {} in chart response", symbol))
}

fn extract_price(response: ChartResponse) -> Option<f64> {
    response
        .chart
        .result?
        .into_iter()
        .next()?
        .meta
        .regular_market_price
}

#[cfg(test)]
mod tests {
    use crate::logging;

    use super::*;

    #[test]
    fn test_extract_price() {
        let json = r#"
        {
            "chart": {
                "result": [
                    { "meta": { "regularMarketPrice": 18.5, "symbol": "^VIX" } }
                ],
                "error": null
            }
        }"#;

        let response = serde_json::from_str::<ChartResponse>(json).expect("chart json");
        assert_eq!(extract_price(response), Some(18.5));
    }

    #[test]
    fn test_extract_price_with_empty_result() {
        let json = r#"{ "chart": { "result": [], "error": null } }"#;
        let response = serde_json::from_str::<ChartResponse>(json).expect("chart json");
        assert_eq!(extract_price(response), None);
    }

    #[test]
    fn test_extract_price_with_missing_result() {
        let json = r#"{ "chart": { "error": { "code": "Not Found" } } }"#;
        let response = serde_json::from_str::<ChartResponse>(json).expect("chart json");
        assert_eq!(extract_price(response), None);
    }

    #[test]
    fn test_extract_price_with_missing_price() {
        let json = r#"{ "chart": { "result": [ { "meta": {} } ] } }"#;
        let response = serde_json::from_str::<ChartResponse>(json).expect("chart json");
        assert_eq!(extract_price(response), None);
    }

    #[tokio::test]
    #[ignore]
    async fn test_fetch() {
        dotenv::dotenv().ok();
        logging::debug_file_async("開始 fetch".to_string());

        match fetch("000001.SS").await {
            Ok(price) => {
                dbg!(price);
                logging::debug_file_async(format!("price : {:#?}", price));
            }
            Err(why) => {
                logging::debug_file_async(format!("Failed to fetch because {:?}", why));
            }
        }

        logging::debug_file_async("結束 fetch".to_string());
    }
}
