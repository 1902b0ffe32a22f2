use std::fmt::Write as _;

use anyhow::Result;
use futures::future::join_all;

use crate::{
    bot,
    config::App,
    crawler,
    declare::{IndexTarget, Quote},
    logging, util,
};

/// 要播報的指數清單
pub const TARGETS: [IndexTarget; 2] = [
    IndexTarget {
        label: "恐慌指數 (VIX)",
        symbol: "^VIX",
    },
    IndexTarget {
        label: "上證指數 (SSEC)",
        symbol: "000001.SS",
    },
];

const DEFAULT_TITLE: &str = "<b>全球市場指數</b>";
const FAILURE_PLACEHOLDER: &str = "獲取失敗";
const ALL_FAILED_TEXT: &str = "所有數據獲取失敗，請稍後再試。";

/// 抓取清單內所有指數後組成訊息發送到指定的聊天室
///
/// 就算部分或全部指數抓取失敗，訊息仍然會發送。
pub async fn execute(cfg: &App, chat_id: i64, title: Option<&str>) -> Result<()> {
    let quotes = fetch_quotes(&TARGETS).await;
    let msg = build_message(&TARGETS, &quotes, title);

    bot::telegram::send(cfg, chat_id, &msg).await
}

/// 同時抓取清單內所有指數，全數完成後才回傳
async fn fetch_quotes(targets: &[IndexTarget]) -> Vec<Quote> {
    let futures: Vec<_> = targets.iter().map(fetch_one).collect();

    join_all(futures).await
}

async fn fetch_one(target: &IndexTarget) -> Quote {
    match crawler::fetch_index_price(target.symbol).await {
        Ok(price) => Quote::valid(price),
        Err(why) => {
            logging::error_file_async(format!(
                "Failed to fetch_index_price({}) because {:?}",
                target.symbol, why
            ));
            Quote::invalid()
        }
    }
}

/// 組合播報訊息，抓取失敗的指數以「獲取失敗」代替
fn build_message(targets: &[IndexTarget], quotes: &[Quote], title: Option<&str>) -> String {
    if !quotes.iter().any(|quote| quote.valid) {
        return ALL_FAILED_TEXT.to_string();
    }

    let mut msg = String::with_capacity(256);
    let _ = writeln!(&mut msg, "{}", title.unwrap_or(DEFAULT_TITLE));
    let _ = writeln!(&mut msg);

    for (target, quote) in targets.iter().zip(quotes.iter()) {
        if quote.valid {
            let _ = writeln!(&mut msg, "{}: <b>{:.2}</b>", target.label, quote.price);
        } else {
            let _ = writeln!(&mut msg, "{}: {}", target.label, FAILURE_PLACEHOLDER);
        }
    }

    let _ = writeln!(&mut msg);
    let _ = write!(
        &mut msg,
        "更新時間: {} (北京)",
        util::datetime::beijing_now().format("%H:%M:%S")
    );

    msg
}
