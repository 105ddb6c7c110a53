mod common;

use park_previewer::core::browser::{EMPTY_SEARCH_ALERT, NO_PARKS_ALERT, PARK_PLACEHOLDER};
use park_previewer::{HttpParkClient, Mode, ParkBrowser, UiEvent};

async fn browser_against_live_server() -> (tempfile::TempDir, ParkBrowser<HttpParkClient>) {
    let data_dir = common::seed_data_dir();
    let base = common::spawn_server(common::store_for(&data_dir)).await;
    let client = HttpParkClient::new(&base).unwrap();
    (data_dir, ParkBrowser::new(client))
}

#[tokio::test]
async fn test_select_wa_then_park() {
    let (_data_dir, mut browser) = browser_against_live_server().await;

    browser.dispatch(UiEvent::StateChanged("WA".to_string())).await;
    let labels: Vec<String> = browser
        .screen()
        .park_options
        .iter()
        .map(|o| o.label.clone())
        .collect();
    let mut expected = vec![PARK_PLACEHOLDER.to_string()];
    expected.extend(common::WA_PARKS.iter().map(|p| p.to_string()));
    assert_eq!(labels, expected);

    browser
        .dispatch(UiEvent::ParkChanged("North Cascades".to_string()))
        .await;
    let panel = browser.screen().result.clone().unwrap();
    assert_eq!(panel.image, "https://images.example.org/north-cascades.jpg");
    assert_eq!(panel.alt, "North Cascades National Park");
    assert!(panel.caption.contains("WA"));
    assert_eq!(
        panel.caption,
        "North Cascades National Park of WA was established in 1968."
    );
    assert!(browser.take_alerts().is_empty());
}

#[tokio::test]
async fn test_parkless_state_alerts() {
    let (_data_dir, mut browser) = browser_against_live_server().await;

    browser.dispatch(UiEvent::StateChanged("DE".to_string())).await;
    assert_eq!(browser.take_alerts(), vec![NO_PARKS_ALERT.to_string()]);
    assert_eq!(browser.screen().park_options.len(), 1);
}

#[tokio::test]
async fn test_search_then_refresh() {
    let (_data_dir, mut browser) = browser_against_live_server().await;

    browser
        .dispatch(UiEvent::SearchTyped("statue of liberty".to_string()))
        .await;
    browser.dispatch(UiEvent::SearchClicked).await;

    let panel = browser.screen().result.clone().unwrap();
    assert_eq!(
        panel.caption,
        "Statue of Liberty National Park was established in 1924."
    );
    assert!(browser.screen().refresh_visible);

    browser.dispatch(UiEvent::RefreshClicked).await;
    assert_eq!(browser.mode(), &Mode::Idle);
    assert!(browser.screen().result.is_none());
    assert_eq!(
        browser.screen().background.as_deref(),
        Some("https://images.example.org/statue-of-liberty.jpg")
    );
}

#[tokio::test]
async fn test_search_alerts() {
    let (_data_dir, mut browser) = browser_against_live_server().await;

    browser.dispatch(UiEvent::SearchClicked).await;
    assert_eq!(browser.take_alerts(), vec![EMPTY_SEARCH_ALERT.to_string()]);

    browser
        .dispatch(UiEvent::SearchTyped("atlantis".to_string()))
        .await;
    browser.dispatch(UiEvent::SearchClicked).await;
    assert_eq!(
        browser.take_alerts(),
        vec!["National Park not found.".to_string()]
    );
}
