/// 要播報的市場指數
#[derive(Debug, Copy, Clone)]
pub struct IndexTarget {
    /// 顯示在訊息內的名稱
    pub label: &'static str,
    /// Yahoo 財經使用的代號
    pub symbol: &'static str,
}

/// 單次抓取的報價結果，valid 為 false 時 price 無意義
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Quote {
    pub price: f64,
    pub valid: bool,
}

impl Quote {
    pub fn valid(price: f64) -> Self {
        Quote { price, valid: true }
    }

    pub fn invalid() -> Self {
        Quote {
            price: 0.0,
            valid: false,
        }
    }
}
