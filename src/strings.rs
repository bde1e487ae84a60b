//! Typed accessors for every schema key
//!
//! The scanner UI asks for display strings through these views rather than
//! spelling out dotted keys.
//!
//! ```
//! use qrcode_i18n::LocaleService;
//!
//! let mut service = LocaleService::default();
//! assert_eq!(service.scanner_strings().scanning_status(), "Scanning");
//! assert_eq!(
//!     service.scanner_strings().last_match("https://example.com"),
//!     "Last Match: https://example.com"
//! );
//! ```

use crate::i18n::format::params;
use crate::i18n::LocaleService;

macro_rules! plain_strings {
    ($section:literal; $( $(#[$meta:meta])* $name:ident => $key:literal ),* $(,)?) => {
        $(
            $(#[$meta])*
            pub fn $name(&mut self) -> String {
                self.service.translate(concat!($section, ".", $key), None)
            }
        )*
    };
}

/// Strings used by the low-level scanner
#[derive(Debug)]
pub struct Html5QrcodeStrings<'a> {
    service: &'a mut LocaleService,
}

impl Html5QrcodeStrings<'_> {
    pub fn code_parse_error(&mut self, error: impl ToString) -> String {
        self.service.translate(
            "html5Qrcode.codeParseError",
            Some(&params([("error", error.to_string())])),
        )
    }

    pub fn error_getting_user_media(&mut self, error: impl ToString) -> String {
        self.service.translate(
            "html5Qrcode.errorGettingUserMedia",
            Some(&params([("error", error.to_string())])),
        )
    }

    plain_strings! { "html5Qrcode";
        only_device_supported_error => "onlyDeviceSupportedError",
        camera_streaming_not_supported => "cameraStreamingNotSupported",
        unable_to_query_supported_devices => "unableToQuerySupportedDevices",
        insecure_context_camera_query_error => "insecureContextCameraQueryError",
        scanner_paused => "scannerPaused",
    }
}

/// Strings used by the end-to-end scanner widget
#[derive(Debug)]
pub struct ScannerStrings<'a> {
    service: &'a mut LocaleService,
}

impl ScannerStrings<'_> {
    pub fn last_match(&mut self, decoded_text: &str) -> String {
        self.service.translate(
            "html5QrcodeScanner.lastMatch",
            Some(&params([("decodedText", decoded_text)])),
        )
    }

    plain_strings! { "html5QrcodeScanner";
        scanning_status => "scanningStatus",
        idle_status => "idleStatus",
        error_status => "errorStatus",
        permission_status => "permissionStatus",
        no_camera_found_error_status => "noCameraFoundErrorStatus",
        code_scanner_title => "codeScannerTitle",
        camera_permission_title => "cameraPermissionTitle",
        camera_permission_requesting => "cameraPermissionRequesting",
        no_camera_found => "noCameraFound",
        scan_button_stop_scanning_text => "scanButtonStopScanningText",
        scan_button_start_scanning_text => "scanButtonStartScanningText",
        torch_on_button => "torchOnButton",
        torch_off_button => "torchOffButton",
        torch_on_failed_message => "torchOnFailedMessage",
        torch_off_failed_message => "torchOffFailedMessage",
        scan_button_scanning_starting => "scanButtonScanningStarting",
        /// Link text offered while camera scanning is selected
        text_if_camera_scan_selected => "textIfCameraScanSelected",
        /// Link text offered while file scanning is selected
        text_if_file_scan_selected => "textIfFileScanSelected",
        select_camera => "selectCamera",
        file_selection_choose_image => "fileSelectionChooseImage",
        file_selection_choose_another => "fileSelectionChooseAnother",
        file_selection_no_image_selected => "fileSelectionNoImageSelected",
        /// Prefix given to cameras that report no label
        anonymous_camera_prefix => "anonymousCameraPrefix",
        drag_and_drop_message => "dragAndDropMessage",
        drag_and_drop_message_only_images => "dragAndDropMessageOnlyImages",
        zoom => "zoom",
        loading_image => "loadingImage",
        camera_scan_alt_text => "cameraScanAltText",
        file_scan_alt_text => "fileScanAltText",
    }
}

/// Library attribution strings
#[derive(Debug)]
pub struct LibraryInfoStrings<'a> {
    service: &'a mut LocaleService,
}

impl LibraryInfoStrings<'_> {
    plain_strings! { "libraryInfo";
        powered_by => "poweredBy",
        report_issues => "reportIssues",
    }
}

impl LocaleService {
    pub fn html5_qrcode_strings(&mut self) -> Html5QrcodeStrings<'_> {
        Html5QrcodeStrings { service: self }
    }

    pub fn scanner_strings(&mut self) -> ScannerStrings<'_> {
        ScannerStrings { service: self }
    }

    pub fn library_info_strings(&mut self) -> LibraryInfoStrings<'_> {
        LibraryInfoStrings { service: self }
    }
}
