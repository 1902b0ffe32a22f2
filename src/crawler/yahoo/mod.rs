//! # Yahoo 財經採集模組
//!
//! 從 Yahoo 財經的 chart API 抓取市場指數的最新報價。
//!
//! - 來源域名：`query1.finance.yahoo.com`
//! - 抓取技術：HTTP GET 搭配 JSON 解析。

/// 即時報價採集子模組
pub mod price;

/// Yahoo 財經 chart API 的主機域名
const HOST: &str = "query1.finance.yahoo.com";
