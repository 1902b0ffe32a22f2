use anyhow::Result;

/// 雅虎財經
pub mod yahoo;

/// 取得指數目前的報價
pub async fn fetch_index_price(symbol: &str) -> Result<f64> {
    yahoo::price::fetch(symbol).await
}
