use eduzz_client::utils::config::{get_env_or_default, get_env_or_none};
use std::env;

#[test]
fn test_get_env_or_default_with_existing_var() {
    unsafe {
        env::set_var("EDUZZ_TEST_VAR_STRING", "test_value");
        let result: String = get_env_or_default("EDUZZ_TEST_VAR_STRING", "default".to_string());
        assert_eq!(result, "test_value");
        env::remove_var("EDUZZ_TEST_VAR_STRING");
    }
}

#[test]
fn test_get_env_or_default_with_missing_var() {
    unsafe {
        env::remove_var("EDUZZ_TEST_MISSING_VAR");
    }
    let result: String = get_env_or_default("EDUZZ_TEST_MISSING_VAR", "default".to_string());
    assert_eq!(result, "default");
}

#[test]
fn test_get_env_or_default_with_invalid_parse() {
    unsafe {
        env::set_var("EDUZZ_TEST_VAR_INVALID", "not_a_number");
        let result: u32 = get_env_or_default("EDUZZ_TEST_VAR_INVALID", 99);
        assert_eq!(result, 99);
        env::remove_var("EDUZZ_TEST_VAR_INVALID");
    }
}

#[test]
fn test_get_env_or_default_treats_blank_as_unset() {
    unsafe {
        env::set_var("EDUZZ_TEST_VAR_BLANK", "   ");
        let result: String = get_env_or_default("EDUZZ_TEST_VAR_BLANK", "default".to_string());
        assert_eq!(result, "default");
        env::remove_var("EDUZZ_TEST_VAR_BLANK");
    }
}

#[test]
fn test_get_env_or_none() {
    unsafe {
        env::set_var("EDUZZ_TEST_VAR_SOME", " 42 ");
        let present: Option<u64> = get_env_or_none("EDUZZ_TEST_VAR_SOME");
        assert_eq!(present, Some(42));
        env::remove_var("EDUZZ_TEST_VAR_SOME");
    }
    let missing: Option<u64> = get_env_or_none("EDUZZ_TEST_VAR_NEVER_SET");
    assert_eq!(missing, None);
}
