pub mod support;

mod portfolio_flow {
    use actix_web::{cookie::Cookie, http::StatusCode, test, web, App};
    use std::sync::Arc;

    use crate::{
        init_routes,
        shared::api::{custom_json_config, custom_query_config},
        tests::support::app_state_builder::TestAppStateBuilder,
        theme::{
            adapter::{incoming::web::extractors::visitor::VISITOR_COOKIE, outgoing::InMemoryThemeStore},
            application::ports::outgoing::ThemePreferenceStore,
            domain::{ThemePreference, VisitorId},
        },
    };

    macro_rules! portfolio_app {
        ($builder:expr) => {{
            let builder = $builder;
            let store: Arc<dyn ThemePreferenceStore> = Arc::new(builder.theme_store().clone());
            test::init_service(
                App::new()
                    .app_data(builder.build())
                    .app_data(web::Data::new(store))
                    .app_data(custom_json_config())
                    .app_data(custom_query_config())
                    .configure(init_routes),
            )
            .await
        }};
    }

    macro_rules! page_html {
        ($app:expr, $cookie:expr) => {{
            let req = test::TestRequest::get().uri("/").cookie($cookie).to_request();
            let body = test::call_and_read_body($app, req).await;
            String::from_utf8(body.to_vec()).unwrap()
        }};
    }

    #[actix_web::test]
    async fn visitor_toggle_changes_rendered_theme() {
        let app = portfolio_app!(TestAppStateBuilder::default());

        // first visit mints the visitor cookie
        let req = test::TestRequest::get().uri("/").to_request();
        let resp = test::call_service(&app, req).await;
        let visitor_id = resp
            .response()
            .cookies()
            .find(|c| c.name() == VISITOR_COOKIE)
            .map(|c| c.value().to_string())
            .unwrap();
        let cookie = Cookie::new(VISITOR_COOKIE, visitor_id);

        assert!(page_html!(&app, cookie.clone()).contains(r#"class="dark""#));

        let req = test::TestRequest::post()
            .uri("/api/theme/toggle")
            .cookie(cookie.clone())
            .to_request();
        let json: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(json["data"]["theme"], "light");

        let html = page_html!(&app, cookie.clone());
        assert!(html.contains(r#"<html lang="en">"#));

        let req = test::TestRequest::get()
            .uri("/api/theme")
            .cookie(cookie)
            .to_request();
        let json: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(json["data"]["theme"], "light");
        assert_eq!(json["data"]["dark"], false);
    }

    #[actix_web::test]
    async fn concurrent_toggles_from_one_visitor_both_persist() {
        let builder = TestAppStateBuilder::default();
        let store = builder.theme_store().clone();
        let app = portfolio_app!(builder);

        let req = test::TestRequest::get().uri("/").to_request();
        let resp = test::call_service(&app, req).await;
        let visitor_id = resp
            .response()
            .cookies()
            .find(|c| c.name() == VISITOR_COOKIE)
            .map(|c| c.value().to_string())
            .unwrap();
        let visitor: VisitorId = visitor_id.parse::<uuid::Uuid>().unwrap().into();
        let cookie = Cookie::new(VISITOR_COOKIE, visitor_id);

        let toggle = || {
            test::TestRequest::post()
                .uri("/api/theme/toggle")
                .cookie(cookie.clone())
                .to_request()
        };
        let (a, b): (serde_json::Value, serde_json::Value) = tokio::join!(
            test::call_and_read_body_json(&app, toggle()),
            test::call_and_read_body_json(&app, toggle())
        );

        let mut themes = vec![
            a["data"]["theme"].as_str().unwrap().to_string(),
            b["data"]["theme"].as_str().unwrap().to_string(),
        ];
        themes.sort();
        assert_eq!(themes, vec!["dark", "light"]);
        assert_eq!(store.read(&visitor).await, Ok(Some(ThemePreference::Dark)));
    }

    #[actix_web::test]
    async fn anonymous_traffic_stays_within_store_capacity() {
        let store = InMemoryThemeStore::with_limits(50, 3600);
        let app = portfolio_app!(TestAppStateBuilder::over_store(store.clone()));

        for _ in 0..200 {
            let req = test::TestRequest::get().uri("/").to_request();
            assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
        }

        assert_eq!(store.len().await, 50);
    }

    #[actix_web::test]
    async fn skills_filter_and_navigation_over_http() {
        let app = portfolio_app!(TestAppStateBuilder::default());

        let req = test::TestRequest::get()
            .uri("/api/skills?category=Networking")
            .to_request();
        let json: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(
            json["data"]["skills"]
                .as_array()
                .unwrap()
                .iter()
                .map(|s| s["name"].as_str().unwrap())
                .collect::<Vec<_>>(),
            vec!["DHCP", "DNS", "TCP/IP"]
        );

        let req = test::TestRequest::post()
            .uri("/api/navigation/active-section")
            .set_json(serde_json::json!({
                "scrollOffset": 4000.0,
                "viewportHeight": 800.0,
                "regions": [{ "id": "hero", "top": 0.0, "bottom": 800.0 }],
                "previous": "about"
            }))
            .to_request();
        let json: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(json["data"]["active"], "about");
        assert_eq!(json["data"]["changed"], false);
    }

    #[actix_web::test]
    async fn health_and_readiness_ok_with_in_memory_store() {
        let app = portfolio_app!(TestAppStateBuilder::default());

        let req = test::TestRequest::get().uri("/health").to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

        let req = test::TestRequest::get().uri("/ready").to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
    }
}
