//! Test helpers module
//!
//! Shared fixtures for the integration tests: a complete Spanish bundle, a
//! mock HTTP server for remote bundles and a service wired to an in-memory
//! diagnostics sink.

#![allow(dead_code)]

pub mod bundle_mock;

use std::sync::Arc;

use qrcode_i18n::i18n::{LocaleService, RecordingDiagnostics};
use serde_json::{json, Map, Value};

/// Service that records diagnostics instead of logging them
pub fn recording_service() -> (LocaleService, RecordingDiagnostics) {
    let sink = RecordingDiagnostics::new();
    let service = LocaleService::default().with_diagnostics(Arc::new(sink.clone()));
    (service, sink)
}

/// Unwrap a `json!` object literal
pub fn object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected a JSON object, got {}", other),
    }
}

/// The built-in English bundle as plain JSON
pub fn english_json() -> Value {
    serde_json::from_str(include_str!("../../locales/en.json")).unwrap()
}

/// A complete, valid Spanish bundle
pub fn spanish_bundle() -> Value {
    json!({
        "html5Qrcode": {
            "codeParseError": "Error al analizar código QR, error = {error}",
            "errorGettingUserMedia": "Error al obtener userMedia, error = {error}",
            "onlyDeviceSupportedError": "El dispositivo no admite navigator.mediaDevices",
            "cameraStreamingNotSupported": "Transmisión de cámara no compatible con el navegador",
            "unableToQuerySupportedDevices": "No se pueden consultar los dispositivos compatibles",
            "insecureContextCameraQueryError": "El acceso a la cámara solo se admite en contexto seguro como https o localhost",
            "scannerPaused": "Escáner pausado"
        },
        "html5QrcodeScanner": {
            "scanningStatus": "Escaneando",
            "idleStatus": "Inactivo",
            "errorStatus": "Error",
            "permissionStatus": "Permiso",
            "noCameraFoundErrorStatus": "Sin Cámaras",
            "lastMatch": "Última Coincidencia: {decodedText}",
            "codeScannerTitle": "Escáner de Códigos",
            "cameraPermissionTitle": "Solicitar Permisos de Cámara",
            "cameraPermissionRequesting": "Solicitando permisos de cámara...",
            "noCameraFound": "No se encontró cámara",
            "scanButtonStopScanningText": "Detener Escaneo",
            "scanButtonStartScanningText": "Iniciar Escaneo",
            "torchOnButton": "Encender Linterna",
            "torchOffButton": "Apagar Linterna",
            "torchOnFailedMessage": "Error al encender la linterna",
            "torchOffFailedMessage": "Error al apagar la linterna",
            "scanButtonScanningStarting": "Iniciando Cámara...",
            "textIfCameraScanSelected": "Escanear un Archivo de Imagen",
            "textIfFileScanSelected": "Escanear usando cámara directamente",
            "selectCamera": "Seleccionar Cámara",
            "fileSelectionChooseImage": "Elegir Imagen",
            "fileSelectionChooseAnother": "Elegir Otra",
            "fileSelectionNoImageSelected": "Ninguna imagen elegida",
            "anonymousCameraPrefix": "Cámara Anónima",
            "dragAndDropMessage": "O arrastra una imagen para escanear",
            "dragAndDropMessageOnlyImages": "O arrastra una imagen para escanear (otros archivos no compatibles)",
            "zoom": "zoom",
            "loadingImage": "Cargando imagen...",
            "cameraScanAltText": "Escaneo basado en cámara",
            "fileScanAltText": "Escaneo basado en archivo"
        },
        "libraryInfo": {
            "poweredBy": "Desarrollado por ",
            "reportIssues": "Reportar problemas"
        }
    })
}
