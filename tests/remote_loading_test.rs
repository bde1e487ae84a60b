//! Remote bundle loading against a mock HTTP server

mod helpers;

use assert_matches::assert_matches;
use helpers::bundle_mock::BundleMockServer;
use helpers::*;
use qrcode_i18n::config::BundleSourceConfig;
use qrcode_i18n::i18n::{load_configured_bundles, LocaleService, SchemaViolation, TranslationLoader};
use qrcode_i18n::I18nError;
use serde_json::json;

#[tokio::test]
async fn test_remote_bundle_is_validated_and_registered() {
    let mock = BundleMockServer::new().await;
    mock.mount_bundle("/locales/es.json", &spanish_bundle()).await;
    let mut service = LocaleService::default();

    service
        .load_translation_from_url("es", &mock.url("/locales/es.json"))
        .await
        .unwrap();
    service.set_active_locale("es");

    assert_eq!(service.t("html5QrcodeScanner.scanningStatus"), "Escaneando");
    assert!(service.loader().is_cached("es"));
}

#[tokio::test]
async fn test_non_success_status_is_a_transport_error() {
    let mock = BundleMockServer::new().await;
    mock.mount_status("/missing.json", 404).await;
    mock.mount_status("/flaky.json", 503).await;
    let mut loader = TranslationLoader::default();

    let err = loader
        .load_from_remote("fr", &mock.url("/missing.json"))
        .await
        .unwrap_err();
    assert_matches!(err, I18nError::Transport { status, .. } if status.as_u16() == 404);
    assert!(!err.is_recoverable());

    let err = loader
        .load_from_remote("fr", &mock.url("/flaky.json"))
        .await
        .unwrap_err();
    assert!(err.is_recoverable());
    assert!(!loader.is_cached("fr"));
}

#[tokio::test]
async fn test_malformed_remote_body_is_a_parse_error() {
    let mock = BundleMockServer::new().await;
    mock.mount_raw("/broken.json", "{\"html5Qrcode\": ").await;
    let mut service = LocaleService::default();

    let err = service
        .load_translation_from_url("de", &mock.url("/broken.json"))
        .await
        .unwrap_err();

    assert_matches!(err, I18nError::Parse { .. });
    assert!(!service.is_registered("de"));
}

#[tokio::test]
async fn test_incomplete_remote_bundle_is_rejected() {
    let mock = BundleMockServer::new().await;
    let mut partial = spanish_bundle();
    partial["libraryInfo"] = json!({ "poweredBy": "Desarrollado por " });
    mock.mount_bundle("/es.json", &partial).await;
    let mut service = LocaleService::default();

    let err = service
        .load_translation_from_url("es", &mock.url("/es.json"))
        .await
        .unwrap_err();

    assert_eq!(
        err.violations(),
        &[SchemaViolation::MissingKey {
            section: "libraryInfo".to_string(),
            key: "reportIssues".to_string(),
        }]
    );
    assert!(!service.is_registered("es"));
}

#[tokio::test]
async fn test_detached_fetch_then_register() {
    let mock = BundleMockServer::new().await;
    mock.mount_bundle("/es.json", &spanish_bundle()).await;
    let mut service = LocaleService::default();

    let url = mock.url("/es.json");
    let fetcher = service.fetcher();
    let pending = fetcher.fetch("es", &url);
    // The fetch holds no borrow of the service.
    assert_eq!(service.t("libraryInfo.reportIssues"), "Report issues");
    let body = pending.await.unwrap();

    service.load_translation_from_string("es", &body).unwrap();
    service.set_active_locale("es");
    assert_eq!(service.t("libraryInfo.reportIssues"), "Reportar problemas");
}

#[tokio::test]
async fn test_configured_sources_load_concurrently() {
    let mock = BundleMockServer::new().await;
    mock.mount_bundle("/es.json", &spanish_bundle()).await;
    mock.mount_status("/fr.json", 500).await;
    let sources = vec![
        BundleSourceConfig {
            locale: "es".to_string(),
            path: None,
            url: Some(mock.url("/es.json")),
        },
        BundleSourceConfig {
            locale: "fr".to_string(),
            path: None,
            url: Some(mock.url("/fr.json")),
        },
    ];
    let mut service = LocaleService::default();

    let failures = load_configured_bundles(&mut service, &sources).await;

    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].locale, "fr");
    assert_matches!(failures[0].error, I18nError::Transport { .. });
    assert!(service.is_registered("es"));
    assert!(!service.is_registered("fr"));
}
