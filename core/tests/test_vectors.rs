//! Verify request building and conversions against JSON vectors stored in
//! `test-vectors/`.
//!
//! Request vectors describe a configuration and either the expected plain-data
//! request or the expected error kind. Conversion vectors list inputs and the
//! parsed value, with `null` meaning the strict parser must fail.

use serde_json::Value;
use utils_core::convert::{parse_bool, parse_f64, parse_i64, value_to_string};
use utils_core::{HttpMethod, RequestConfig, RequestError};

/// Build a `RequestConfig` from a vector's `config` object.
fn config_from(value: &Value) -> RequestConfig {
    let mut config = RequestConfig::new(value["url"].as_str().unwrap());
    if let Some(method) = value["method"].as_str() {
        config = config.with_method(method);
    }
    if let Some(body) = value["body"].as_str() {
        config = config.with_body(body);
    }
    if let Some(content_type) = value["content_type"].as_str() {
        config = config.with_content_type(content_type);
    }
    config
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

#[test]
fn request_test_vectors() {
    let raw = include_str!("../../test-vectors/requests.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let result = config_from(&case["config"]).build();

        if let Some(expected_error) = case.get("expected_error") {
            let err = result.unwrap_err();
            match expected_error.as_str().unwrap() {
                "Construction" => assert!(
                    matches!(err, RequestError::Construction(_)),
                    "{name}: expected Construction, got {err}"
                ),
                other => panic!("{name}: unknown expected_error: {other}"),
            }
            continue;
        }

        let req = result.unwrap();
        let expected = &case["expected_request"];
        let method: HttpMethod = expected["method"].as_str().unwrap().parse().unwrap();
        assert_eq!(req.method, method, "{name}: method");
        assert_eq!(req.url, expected["url"].as_str().unwrap(), "{name}: url");

        let expected_headers: Vec<(String, String)> = expected["headers"]
            .as_array()
            .unwrap()
            .iter()
            .map(|h| {
                let arr = h.as_array().unwrap();
                (arr[0].as_str().unwrap().to_string(), arr[1].as_str().unwrap().to_string())
            })
            .collect();
        assert_eq!(req.headers, expected_headers, "{name}: headers");

        let expected_body = expected["body"].as_str().map(|b| b.as_bytes().to_vec());
        assert_eq!(req.body, expected_body, "{name}: body");
    }
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

fn conversion_cases(key: &str) -> Vec<Value> {
    let raw = include_str!("../../test-vectors/conversions.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();
    vectors[key].as_array().unwrap().clone()
}

#[test]
fn bool_test_vectors() {
    for case in conversion_cases("bool") {
        let input = case["input"].as_str().unwrap();
        match case["expected"].as_bool() {
            Some(expected) => assert_eq!(parse_bool(input).unwrap(), expected, "{input:?}"),
            None => assert!(parse_bool(input).is_err(), "{input:?} should fail"),
        }
    }
}

#[test]
fn f64_test_vectors() {
    for case in conversion_cases("f64") {
        let input = case["input"].as_str().unwrap();
        match case["expected"].as_f64() {
            Some(expected) => assert_eq!(parse_f64(input).unwrap(), expected, "{input:?}"),
            None => assert!(parse_f64(input).is_err(), "{input:?} should fail"),
        }
    }
}

#[test]
fn i64_test_vectors() {
    for case in conversion_cases("i64") {
        let input = case["input"].as_str().unwrap();
        match case["expected"].as_i64() {
            Some(expected) => assert_eq!(parse_i64(input).unwrap(), expected, "{input:?}"),
            None => assert!(parse_i64(input).is_err(), "{input:?} should fail"),
        }
    }
}

#[test]
fn to_string_test_vectors() {
    for case in conversion_cases("to_string") {
        let expected = case["expected"].as_str().unwrap();
        assert_eq!(value_to_string(&case["input"]), expected, "{}", case["input"]);
    }
}
