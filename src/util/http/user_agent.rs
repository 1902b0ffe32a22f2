use rand::Rng;

const CHROME_VERSIONS: [&str; 8] = [
    "133.0.6943.88", "132.0.6834.110", "131.0.6778.108", "130.0.6723.117",
    "129.0.6668.89", "128.0.6613.138", "127.0.6533.119", "126.0.6478.182",
];

const OS_STRINGS: [&str; 6] = [
    "Windows NT 10.0; Win64; x64",
    "Windows NT 10.0; Win64; x64",
    "Macintosh; Intel Mac OS X 10_15_7",
    "Macintosh; Intel Mac OS X 14_7_1",
    "X11; Linux x86_64",
    "X11; Ubuntu; Linux x86_64",
];

/// 產生一個桌面版 Chrome 的 User-Agent
pub fn gen_random_ua() -> String {
    let mut rng = rand::rng();
    let version = CHROME_VERSIONS[rng.random_range(0..CHROME_VERSIONS.len())];
    let os = OS_STRINGS[rng.random_range(0..OS_STRINGS.len())];

    format!(
        "Mozilla/5.0 ({}) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/{} Safari/537.36",
        os, version
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ua_formats() {
        for _ in 0..100 {
            let ua = gen_random_ua();
            assert!(ua.starts_with("Mozilla/5.0"), "UA should start with Mozilla/5.0: {}", ua);
            assert!(ua.contains("Chrome/"), "UA should be Chrome-like: {}", ua);
        }
    }
}
