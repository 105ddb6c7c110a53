mod common;

use park_previewer::ParkRecord;
use reqwest::{Client, StatusCode};

async fn get(url: &str, query: &[(&str, &str)]) -> reqwest::Response {
    Client::new().get(url).query(query).send().await.unwrap()
}

fn content_type(response: &reqwest::Response) -> String {
    response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

#[tokio::test]
async fn test_state_lists_parks_in_file_order() {
    let data_dir = common::seed_data_dir();
    let base = common::spawn_server(common::store_for(&data_dir)).await;

    let response = get(&base, &[("state", "WA")]).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(content_type(&response).starts_with("text/plain"));

    let body = response.text().await.unwrap();
    assert_eq!(body, "Mount Rainier\nNorth Cascades\nOlympic");
}

#[tokio::test]
async fn test_unknown_or_parkless_state_is_empty_ok() {
    let data_dir = common::seed_data_dir();
    let base = common::spawn_server(common::store_for(&data_dir)).await;

    for code in ["DE", "ZZ", "wa"] {
        let response = get(&base, &[("state", code)]).await;
        assert_eq!(response.status(), StatusCode::OK, "state {}", code);
        assert_eq!(response.text().await.unwrap(), "");
    }
}

#[tokio::test]
async fn test_json_state_list_separates_unknown_from_empty() {
    let data_dir = common::seed_data_dir();
    let base = common::spawn_server(common::store_for(&data_dir)).await;

    let response = get(&base, &[("state", "WA"), ("format", "json")]).await;
    assert_eq!(response.status(), StatusCode::OK);
    let names: Vec<String> = response.json().await.unwrap();
    assert_eq!(names, common::WA_PARKS);

    let empty = get(&base, &[("state", "DE"), ("format", "json")]).await;
    assert_eq!(empty.status(), StatusCode::OK);
    assert_eq!(empty.json::<Vec<String>>().await.unwrap(), Vec::<String>::new());

    let unknown = get(&base, &[("state", "ZZ"), ("format", "json")]).await;
    assert_eq!(unknown.status(), StatusCode::NOT_FOUND);
    assert_eq!(unknown.text().await.unwrap(), "State not found.");
}

#[tokio::test]
async fn test_park_record_uses_formatted_name() {
    let data_dir = common::seed_data_dir();
    let base = common::spawn_server(common::store_for(&data_dir)).await;

    let response = get(&base, &[("park", "STATUE of lIBERTY")]).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(content_type(&response).starts_with("application/json"));

    let record: ParkRecord = response.json().await.unwrap();
    assert_eq!(record.name, "Statue of Liberty");
    assert_eq!(record.year, "1924");
    assert_eq!(record.image, "https://images.example.org/statue-of-liberty.jpg");
}

#[tokio::test]
async fn test_uppercase_of_misses_the_record() {
    let data_dir = common::seed_data_dir();
    let base = common::spawn_server(common::store_for(&data_dir)).await;

    let response = get(&base, &[("park", "statue OF liberty")]).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(response.text().await.unwrap(), "National Park not found.");
}

#[tokio::test]
async fn test_every_listed_park_has_a_record() {
    let data_dir = common::seed_data_dir();
    let base = common::spawn_server(common::store_for(&data_dir)).await;

    let list = get(&base, &[("state", "WA")]).await.text().await.unwrap();
    for name in list.lines() {
        let response = get(&base, &[("park", name)]).await;
        assert_eq!(response.status(), StatusCode::OK, "park {}", name);
        let record: ParkRecord = response.json().await.unwrap();
        assert!(!record.image.is_empty());
        assert!(!record.year.is_empty());
        assert_eq!(record.name, name);
    }
}

#[tokio::test]
async fn test_unknown_park_is_400_with_fixed_text() {
    let data_dir = common::seed_data_dir();
    let base = common::spawn_server(common::store_for(&data_dir)).await;

    let response = get(&base, &[("park", "atlantis")]).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(content_type(&response).starts_with("text/plain"));
    assert_eq!(response.text().await.unwrap(), "National Park not found.");
}

#[tokio::test]
async fn test_path_like_names_are_not_found() {
    let data_dir = common::seed_data_dir();
    std::fs::write(data_dir.path().join("secret"), "x\n1\n").unwrap();
    let base = common::spawn_server(common::store_for(&data_dir)).await;

    let park = get(&base, &[("park", "../secret")]).await;
    assert_eq!(park.status(), StatusCode::BAD_REQUEST);

    let state = get(&base, &[("state", "../secret")]).await;
    assert_eq!(state.status(), StatusCode::OK);
    assert_eq!(state.text().await.unwrap(), "");
}

#[tokio::test]
async fn test_query_must_name_state_or_park() {
    let data_dir = common::seed_data_dir();
    let base = common::spawn_server(common::store_for(&data_dir)).await;

    let none = get(&base, &[]).await;
    assert_eq!(none.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        none.text().await.unwrap(),
        "Missing required parameter: state or park."
    );

    let both = get(&base, &[("state", "WA"), ("park", "olympic")]).await;
    assert_eq!(both.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        both.text().await.unwrap(),
        "Provide either state or park, not both."
    );
}

#[tokio::test]
async fn test_parks_alias_and_health() {
    let data_dir = common::seed_data_dir();
    let base = common::spawn_server(common::store_for(&data_dir)).await;

    let alias = get(&format!("{}parks", base), &[("state", "NY")]).await;
    assert_eq!(alias.status(), StatusCode::OK);
    assert_eq!(alias.text().await.unwrap(), "Statue of Liberty");

    let health = get(&format!("{}health", base), &[]).await;
    assert_eq!(health.status(), StatusCode::OK);
    assert_eq!(health.text().await.unwrap(), "ok");
}

#[tokio::test]
async fn test_malformed_record_is_internal_error() {
    let data_dir = common::seed_data_dir();
    std::fs::write(
        data_dir.path().join("Parks").join("Broken"),
        "https://images.example.org/broken.jpg\n",
    )
    .unwrap();
    let base = common::spawn_server(common::store_for(&data_dir)).await;

    let response = get(&base, &[("park", "broken")]).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.text().await.unwrap(), "Internal server error.");
}
