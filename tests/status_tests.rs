// Host-side tests for weather status parsing and the speech request body.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core {
    pub mod speech {
        include!("../src/core/speech.rs");
    }
    pub mod status {
        include!("../src/core/status.rs");
    }
}

use crate::core::speech::SpeechRequest;
use crate::core::status::{parse_report, status_text, WeatherReport};
use constants::*;

#[test]
fn report_renders_two_lines() {
    let outcome = parse_report(r#"{"datetime":"2024-01-01 10:00","weather":"Sunny"}"#);
    assert_eq!(status_text(&outcome), "2024-01-01 10:00<br>Sunny");
}

#[test]
fn backend_shaped_report_is_rendered_verbatim() {
    let body = r#"{"weather":"31.5°C, scattered clouds","datetime":"2024-06-01 14:02:09"}"#;
    let report = parse_report(body).expect("valid body");
    assert_eq!(
        report,
        WeatherReport {
            datetime: "2024-06-01 14:02:09".into(),
            weather: "31.5°C, scattered clouds".into(),
        }
    );
    assert_eq!(report.to_html(), "2024-06-01 14:02:09<br>31.5°C, scattered clouds");
}

#[test]
fn network_failure_falls_back() {
    let outcome: Result<WeatherReport, &str> = Err("TypeError: Failed to fetch");
    assert_eq!(status_text(&outcome), STATUS_FALLBACK);
}

#[test]
fn malformed_bodies_fall_back() {
    for body in [
        "",
        "<html>502 Bad Gateway</html>",
        r#"{"datetime":"2024-01-01 10:00"}"#,
        r#"{"weather":"Sunny"}"#,
        r#"{"datetime":1,"weather":"Sunny"}"#,
    ] {
        let outcome = parse_report(body);
        assert!(outcome.is_err(), "accepted {body:?}");
        assert_eq!(status_text(&outcome), "Weather unavailable");
    }
}

#[test]
fn extra_fields_are_ignored() {
    let outcome = parse_report(r#"{"datetime":"d","weather":"w","city":"Bangkok,TH"}"#);
    assert_eq!(status_text(&outcome), "d<br>w");
}

#[test]
fn speech_request_serializes_text_field() {
    let body = serde_json::to_string(&SpeechRequest { text: "hello" }).unwrap();
    assert_eq!(body, r#"{"text":"hello"}"#);
}

#[test]
fn greeting_survives_json_encoding() {
    let body = serde_json::to_string(&SpeechRequest {
        text: GREETING_TEXT,
    })
    .unwrap();
    let back: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(back["text"], GREETING_TEXT);
}
