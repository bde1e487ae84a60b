//! Translation schema
//!
//! A bundle is a JSON object with exactly three required sections, each a flat
//! mapping of string keys to string values. Unknown sections and keys are
//! tolerated and kept, but never required.

use std::fmt;

use serde::Serialize;
use serde_json::{Map, Value};

/// Section holding strings used by the low-level scanner
pub const HTML5_QRCODE: &str = "html5Qrcode";
/// Section holding strings used by the end-to-end scanner widget
pub const HTML5_QRCODE_SCANNER: &str = "html5QrcodeScanner";
/// Section holding library attribution strings
pub const LIBRARY_INFO: &str = "libraryInfo";

/// Placeholder used for every leaf of an authoring template
pub const TEMPLATE_PLACEHOLDER: &str = "[Translation needed]";

/// Required keys of a single section
#[derive(Debug, Clone, Copy)]
pub struct SectionSchema {
    pub name: &'static str,
    pub keys: &'static [&'static str],
}

/// Every required section, in validation order
pub const SECTIONS: [SectionSchema; 3] = [
    SectionSchema {
        name: HTML5_QRCODE,
        keys: &[
            "codeParseError",
            "errorGettingUserMedia",
            "onlyDeviceSupportedError",
            "cameraStreamingNotSupported",
            "unableToQuerySupportedDevices",
            "insecureContextCameraQueryError",
            "scannerPaused",
        ],
    },
    SectionSchema {
        name: HTML5_QRCODE_SCANNER,
        keys: &[
            "scanningStatus",
            "idleStatus",
            "errorStatus",
            "permissionStatus",
            "noCameraFoundErrorStatus",
            "lastMatch",
            "codeScannerTitle",
            "cameraPermissionTitle",
            "cameraPermissionRequesting",
            "noCameraFound",
            "scanButtonStopScanningText",
            "scanButtonStartScanningText",
            "torchOnButton",
            "torchOffButton",
            "torchOnFailedMessage",
            "torchOffFailedMessage",
            "scanButtonScanningStarting",
            "textIfCameraScanSelected",
            "textIfFileScanSelected",
            "selectCamera",
            "fileSelectionChooseImage",
            "fileSelectionChooseAnother",
            "fileSelectionNoImageSelected",
            "anonymousCameraPrefix",
            "dragAndDropMessage",
            "dragAndDropMessageOnlyImages",
            "zoom",
            "loadingImage",
            "cameraScanAltText",
            "fileScanAltText",
        ],
    },
    SectionSchema {
        name: LIBRARY_INFO,
        keys: &["poweredBy", "reportIssues"],
    },
];

/// Iterate every required `section.key` path
pub fn required_keys() -> impl Iterator<Item = String> {
    SECTIONS.iter().flat_map(|section| {
        section
            .keys
            .iter()
            .map(move |key| format!("{}.{}", section.name, key))
    })
}

/// A single reason a JSON value is not a valid bundle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaViolation {
    NotAnObject,
    MissingSection { section: String },
    SectionNotAnObject { section: String },
    MissingKey { section: String, key: String },
    NotAString { section: String, key: String },
}

impl fmt::Display for SchemaViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaViolation::NotAnObject => write!(f, "translation JSON must be an object"),
            SchemaViolation::MissingSection { section } => {
                write!(f, "missing required section '{}'", section)
            }
            SchemaViolation::SectionNotAnObject { section } => {
                write!(f, "section '{}' must be an object", section)
            }
            SchemaViolation::MissingKey { section, key } => {
                write!(f, "missing required key '{}' in section '{}'", key, section)
            }
            SchemaViolation::NotAString { section, key } => {
                write!(f, "value for '{}' in section '{}' must be a string", key, section)
            }
        }
    }
}

/// Check `value` against the schema, collecting every violation found.
///
/// Sections are checked in [`SECTIONS`] order and keys in their declared
/// order, so the first element is always the first offense a reader of the
/// schema tables would hit.
pub fn validate(value: &Value) -> std::result::Result<(), Vec<SchemaViolation>> {
    let Value::Object(root) = value else {
        return Err(vec![SchemaViolation::NotAnObject]);
    };

    let mut violations = Vec::new();
    for section in &SECTIONS {
        match root.get(section.name) {
            None => violations.push(SchemaViolation::MissingSection {
                section: section.name.to_string(),
            }),
            Some(Value::Object(entries)) => validate_section(section, entries, &mut violations),
            Some(_) => violations.push(SchemaViolation::SectionNotAnObject {
                section: section.name.to_string(),
            }),
        }
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

fn validate_section(
    section: &SectionSchema,
    entries: &Map<String, Value>,
    violations: &mut Vec<SchemaViolation>,
) {
    for key in section.keys {
        match entries.get(*key) {
            None => violations.push(SchemaViolation::MissingKey {
                section: section.name.to_string(),
                key: key.to_string(),
            }),
            Some(Value::String(_)) => {}
            Some(_) => violations.push(SchemaViolation::NotAString {
                section: section.name.to_string(),
                key: key.to_string(),
            }),
        }
    }
}

/// A translation set that has passed schema validation.
///
/// The only ways to obtain one are [`Bundle::try_from_value`] and
/// [`Bundle::template`], so holding a `Bundle` is proof of validity.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Bundle(Map<String, Value>);

impl Bundle {
    /// Validate and wrap a raw JSON value
    pub fn try_from_value(value: Value) -> std::result::Result<Self, Vec<SchemaViolation>> {
        validate(&value)?;
        match value {
            Value::Object(map) => Ok(Self(map)),
            _ => Err(vec![SchemaViolation::NotAnObject]),
        }
    }

    /// Bundle with every required key set to [`TEMPLATE_PLACEHOLDER`]
    pub fn template() -> Self {
        let mut root = Map::new();
        for section in &SECTIONS {
            let entries = section
                .keys
                .iter()
                .map(|key| (key.to_string(), Value::String(TEMPLATE_PLACEHOLDER.to_string())))
                .collect();
            root.insert(section.name.to_string(), Value::Object(entries));
        }
        Self(root)
    }

    /// Look up a single leaf by section and key
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.0.get(section)?.get(key)?.as_str()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }

    /// Number of string leaves, extra keys included
    pub fn key_count(&self) -> usize {
        count_leaves(&self.0)
    }
}

pub(crate) fn count_leaves(map: &Map<String, Value>) -> usize {
    map.values()
        .map(|value| match value {
            Value::Object(nested) => count_leaves(nested),
            _ => 1,
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_template_is_valid_and_complete() {
        let template = Bundle::template();

        assert!(validate(&template.clone().into_value()).is_ok());
        assert_eq!(template.key_count(), 39);
        for path in required_keys() {
            let (section, key) = path.split_once('.').unwrap();
            assert_eq!(template.get(section, key), Some(TEMPLATE_PLACEHOLDER));
        }
    }

    #[test]
    fn test_rejects_non_object_root() {
        for value in [json!(null), json!("text"), json!([1, 2]), json!(42)] {
            assert_eq!(validate(&value), Err(vec![SchemaViolation::NotAnObject]));
        }
    }

    #[test]
    fn test_reports_missing_and_malformed_sections() {
        let value = json!({
            "html5Qrcode": [],
            "libraryInfo": { "poweredBy": "x", "reportIssues": "y" }
        });

        let violations = validate(&value).unwrap_err();
        assert_eq!(
            violations,
            vec![
                SchemaViolation::SectionNotAnObject {
                    section: HTML5_QRCODE.to_string()
                },
                SchemaViolation::MissingSection {
                    section: HTML5_QRCODE_SCANNER.to_string()
                },
            ]
        );
    }

    #[test]
    fn test_reports_every_missing_or_non_string_key() {
        let mut value = Bundle::template().into_value();
        value[LIBRARY_INFO]
            .as_object_mut()
            .unwrap()
            .remove("reportIssues");
        value[HTML5_QRCODE]["scannerPaused"] = json!(7);
        value[HTML5_QRCODE_SCANNER]["zoom"] = json!(null);

        let violations = validate(&value).unwrap_err();
        assert_eq!(violations.len(), 3);
        assert!(violations.contains(&SchemaViolation::NotAString {
            section: HTML5_QRCODE.to_string(),
            key: "scannerPaused".to_string(),
        }));
        assert!(violations.contains(&SchemaViolation::NotAString {
            section: HTML5_QRCODE_SCANNER.to_string(),
            key: "zoom".to_string(),
        }));
        assert!(violations.contains(&SchemaViolation::MissingKey {
            section: LIBRARY_INFO.to_string(),
            key: "reportIssues".to_string(),
        }));
    }

    #[test]
    fn test_each_missing_required_key_is_named() {
        for schema in SECTIONS {
            for key in schema.keys {
                let mut value = Bundle::template().into_value();
                value[schema.name].as_object_mut().unwrap().remove(*key);

                assert_eq!(
                    validate(&value),
                    Err(vec![SchemaViolation::MissingKey {
                        section: schema.name.to_string(),
                        key: key.to_string(),
                    }]),
                    "removing {}.{}",
                    schema.name,
                    key
                );
            }
        }
    }

    #[test]
    fn test_extra_keys_are_kept_but_not_required() {
        let mut value = Bundle::template().into_value();
        value[LIBRARY_INFO]["homepage"] = json!("https://example.com");
        value["custom"] = json!({ "greeting": "hi" });

        let bundle = Bundle::try_from_value(value).unwrap();
        assert_eq!(bundle.get(LIBRARY_INFO, "homepage"), Some("https://example.com"));
        assert_eq!(bundle.get("custom", "greeting"), Some("hi"));
        assert_eq!(bundle.key_count(), 41);
    }
}
