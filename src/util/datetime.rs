use chrono::{DateTime, FixedOffset, Utc};

/// 北京時間與 UTC 的固定時差（中國無日光節約時間）
const BEIJING_UTC_OFFSET_SECS: i32 = 8 * 60 * 60;

/// 取得目前的北京時間
pub fn beijing_now() -> DateTime<FixedOffset> {
    match FixedOffset::east_opt(BEIJING_UTC_OFFSET_SECS) {
        Some(offset) => Utc::now().with_timezone(&offset),
        None => Utc::now().fixed_offset(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_beijing_now() {
        let now = beijing_now();
        assert_eq!(now.offset().local_minus_utc(), BEIJING_UTC_OFFSET_SECS);
        assert!((now.timestamp() - Utc::now().timestamp()).abs() <= 1);
    }
}
