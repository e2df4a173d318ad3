use std::env;

use aromi_menu::{fetch_menu_text, parse_week, MenuConfig, MenuError};

// The render-service path is driven by the PAGE_RENDER_URL environment
// variable, so both cases run inside one test to keep the variable from
// racing across test threads.
#[tokio::test]
async fn test_render_service_fetch() {
    let mut server = mockito::Server::new_async().await;
    env::set_var("PAGE_RENDER_URL", server.url());

    let rendered = "ma 2.2.2026\nLounas\nKasvissosekeitto, Veg\nAjankohtaista: tauko";
    let _m = server
        .mock("POST", "/api/render")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(serde_json::json!({ "content": rendered }).to_string())
        .create();

    let config = MenuConfig::default();
    let text = fetch_menu_text(&config).await.unwrap();
    assert_eq!(text, rendered);

    let menu = parse_week(&text);
    assert_eq!(
        menu.get("ma 2.2.2026"),
        Some(&["Kasvissosekeitto".to_string()][..])
    );

    // A failing service surfaces as an error instead of silent fallback.
    let mut failing = mockito::Server::new_async().await;
    env::set_var("PAGE_RENDER_URL", failing.url());
    let _m = failing.mock("POST", "/api/render").with_status(503).create();

    let err = fetch_menu_text(&config).await.unwrap_err();
    assert!(matches!(err, MenuError::RenderServiceError(_)));

    env::remove_var("PAGE_RENDER_URL");
}
