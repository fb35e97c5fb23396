use super::*;

/// # Safety
/// Env mutation races with other threads; these tests touch only the host's
/// own variables.
unsafe fn clear_host_env() {
    unsafe {
        std::env::remove_var("PORT");
        std::env::remove_var("BIND_ADDR");
        std::env::remove_var("WISHINGWALL_API_URL");
        std::env::remove_var("API_REQUEST_TIMEOUT_SECS");
        std::env::remove_var("API_CONNECT_TIMEOUT_SECS");
    }
}

#[test]
fn from_env_defaults_and_overrides() {
    unsafe { clear_host_env() };
    let cfg = Config::from_env().unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.socket_addr().to_string(), "0.0.0.0:3000");
    assert_eq!(cfg.api_url, DEFAULT_API_URL);
    assert_eq!(
        cfg.timeouts,
        ApiTimeouts { request_secs: DEFAULT_API_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_API_CONNECT_TIMEOUT_SECS }
    );

    unsafe {
        std::env::set_var("PORT", "8080");
        std::env::set_var("BIND_ADDR", "127.0.0.1");
        std::env::set_var("WISHINGWALL_API_URL", "https://api.example.test/");
        std::env::set_var("API_REQUEST_TIMEOUT_SECS", "5");
        std::env::set_var("API_CONNECT_TIMEOUT_SECS", "2");
    }
    let cfg = Config::from_env().unwrap();
    assert_eq!(cfg.socket_addr().to_string(), "127.0.0.1:8080");
    assert_eq!(cfg.api_url, "https://api.example.test");
    assert_eq!(cfg.timeouts, ApiTimeouts { request_secs: 5, connect_secs: 2 });

    unsafe {
        std::env::set_var("PORT", "eighty");
    }
    assert_eq!(
        Config::from_env(),
        Err(ConfigError::Invalid { var: "PORT", value: "eighty".to_owned() })
    );

    unsafe { clear_host_env() };
}

#[test]
fn env_parse_blank_falls_back_to_default() {
    let key = "__TEST_WW_BLANK_4411__";
    unsafe { std::env::set_var(key, "   ") };
    assert_eq!(env_parse::<u64>(key, 7), Ok(7));
    unsafe { std::env::remove_var(key) };
    assert_eq!(env_parse::<u64>(key, 9), Ok(9));
}

#[test]
fn env_parse_trims_value() {
    let key = "__TEST_WW_TRIM_4412__";
    unsafe { std::env::set_var(key, " 42 ") };
    assert_eq!(env_parse::<u16>(key, 1), Ok(42));
    unsafe { std::env::remove_var(key) };
}

#[test]
fn api_url_must_be_absolute_http() {
    assert_eq!(parse_api_url(None).unwrap(), DEFAULT_API_URL);
    assert_eq!(parse_api_url(Some("  ")).unwrap(), DEFAULT_API_URL);
    assert_eq!(parse_api_url(Some("http://api:8000//")).unwrap(), "http://api:8000");
    assert!(parse_api_url(Some("api:8000")).is_err());
    assert!(parse_api_url(Some("ftp://api.example.test")).is_err());
    assert!(parse_api_url(Some("/relative")).is_err());
}
