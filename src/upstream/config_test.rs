use super::*;

/// # Safety
/// Tests must run with `--test-threads=1` to avoid env races.
unsafe fn clear_upstream_env() {
    unsafe {
        std::env::remove_var("PREDICTION_API_URL");
        std::env::remove_var("PREDICTION_API_REQUEST_TIMEOUT_SECS");
        std::env::remove_var("PREDICTION_API_CONNECT_TIMEOUT_SECS");
    }
}

#[test]
fn from_env_uses_local_default_base_url() {
    unsafe { clear_upstream_env() };

    let cfg = UpstreamConfig::from_env();
    assert_eq!(cfg.base_url, DEFAULT_BASE_URL);
    assert_eq!(
        cfg.timeouts,
        UpstreamTimeouts {
            request_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
        }
    );
}

#[test]
fn from_env_trims_trailing_slash_and_parses_timeouts() {
    unsafe {
        clear_upstream_env();
        std::env::set_var("PREDICTION_API_URL", "https://predict.example.test/");
        std::env::set_var("PREDICTION_API_REQUEST_TIMEOUT_SECS", "42");
        std::env::set_var("PREDICTION_API_CONNECT_TIMEOUT_SECS", "7");
    }

    let cfg = UpstreamConfig::from_env();
    assert_eq!(cfg.base_url, "https://predict.example.test");
    assert_eq!(cfg.timeouts, UpstreamTimeouts { request_secs: 42, connect_secs: 7 });

    unsafe { clear_upstream_env() };
}

#[test]
fn env_parse_falls_back_on_garbage() {
    unsafe {
        clear_upstream_env();
        std::env::set_var("PREDICTION_API_REQUEST_TIMEOUT_SECS", "not-a-number");
    }

    let cfg = UpstreamConfig::from_env();
    assert_eq!(cfg.timeouts.request_secs, DEFAULT_REQUEST_TIMEOUT_SECS);

    unsafe { clear_upstream_env() };
}
