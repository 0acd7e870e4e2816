//! Integration tests for /api/question.

mod common;

use axum::http::StatusCode;
use common::fixtures::hues;
use common::{assert_api_error, assert_hex, assert_ok, TestApp};
use oklch_map::{find_hue, is_displayable};

#[tokio::test]
async fn test_question_for_hue() {
    let app = TestApp::new();
    let response = app.get("/api/question?hue=245").await;
    assert_ok(&response);

    let json: serde_json::Value = response.json();
    assert_eq!(json["hue"]["id"], "blue");
    assert_eq!(json["color"]["h"], hues::BLUE);

    let l = json["color"]["l"].as_f64().unwrap();
    let c = json["color"]["c"].as_f64().unwrap();
    assert!(is_displayable(l, c, hues::BLUE));

    assert_hex(&json["hex"]);
    assert_hex(&json["gamutHex"]);
    assert!(json["css"].as_str().unwrap().starts_with("oklch("));
    assert_eq!(json["prefixes"].as_array().unwrap().len(), 6);

    let shades = json["shades"]["colors"].as_array().unwrap();
    assert_eq!(shades.len(), 4);
    shades.iter().for_each(assert_hex);
    assert_hex(&json["shades"]["back"]);
}

#[tokio::test]
async fn test_question_without_hue_picks_catalog_hue() {
    let app = TestApp::new();
    for _ in 0..10 {
        let response = app.get("/api/question").await;
        assert_ok(&response);
        let json: serde_json::Value = response.json();
        let h = json["color"]["h"].as_f64().unwrap();
        assert!(find_hue(h).is_some(), "hue {h} not in catalog");
    }
}

#[tokio::test]
async fn test_question_unknown_hue() {
    let app = TestApp::new();
    let response = app.get("/api/question?hue=30").await;
    assert_api_error(&response, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_question_questions_stay_in_gamut() {
    let app = TestApp::new();
    for hue in [5, 105, 205, 305] {
        let response = app.get(&format!("/api/question?hue={hue}")).await;
        let json: serde_json::Value = response.json();
        let l = json["color"]["l"].as_f64().unwrap();
        let c = json["color"]["c"].as_f64().unwrap();
        assert!(is_displayable(l, c, hue as f64));
        // An in-gamut color needs no chroma reduction
        assert_eq!(json["hex"], json["gamutHex"]);
    }
}
