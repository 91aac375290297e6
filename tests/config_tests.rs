use std::time::Duration;

use statusboard::config::Config;

// Environment mutation lives in its own test binary so nothing else reads it concurrently.
#[test]
fn gemini_config_defaults() {
    // SAFETY: this is the only test in this binary.
    unsafe {
        std::env::set_var("GEMINI_API_KEY", "from-env");
        std::env::remove_var("GEMINI_MODEL");
        std::env::remove_var("STATUSBOARD_GENERATION_TIMEOUT_SECS");
    }

    let config = Config::from_env().unwrap();
    let gemini = config.gemini.expect("key set, generation should be configured");
    assert_eq!(gemini.api_key, "from-env");
    assert_eq!(gemini.model, "gemini-2.5-flash");
    assert_eq!(gemini.timeout, Duration::from_secs(30));

    // A blank key counts as unset.
    unsafe {
        std::env::set_var("GEMINI_API_KEY", "  ");
    }
    assert!(Config::from_env().unwrap().gemini.is_none());
}
