//! Property tests for override layering

use proptest::prelude::*;
use qrcode_i18n::i18n::merge::deep_merge;
use qrcode_i18n::i18n::LocaleService;
use serde_json::{Map, Value};

type Sections = Vec<(String, Vec<(String, String)>)>;

fn sections() -> impl Strategy<Value = Sections> {
    prop::collection::vec(
        (
            "[a-c]",
            prop::collection::vec(("[a-e]", "[a-z]{0,6}"), 0..5),
        ),
        0..4,
    )
}

fn to_map(sections: &Sections) -> Map<String, Value> {
    let mut root = Map::new();
    for (section, entries) in sections {
        let slot = root
            .entry(section.clone())
            .or_insert_with(|| Value::Object(Map::new()));
        if let Value::Object(map) = slot {
            for (key, value) in entries {
                map.insert(key.clone(), Value::String(value.clone()));
            }
        }
    }
    root
}

proptest! {
    #[test]
    fn merge_keeps_untouched_leaves_and_applies_overlay(base in sections(), overlay in sections()) {
        let base = to_map(&base);
        let overlay = to_map(&overlay);
        let merged = deep_merge(&base, &overlay);

        for (section, entries) in &base {
            for (key, value) in entries.as_object().unwrap() {
                let touched = overlay
                    .get(section)
                    .and_then(Value::as_object)
                    .is_some_and(|entries| entries.contains_key(key));
                if !touched {
                    prop_assert_eq!(&merged[section][key], value);
                }
            }
        }
        for (section, entries) in &overlay {
            for (key, value) in entries.as_object().unwrap() {
                prop_assert_eq!(&merged[section][key], value);
            }
        }
    }

    #[test]
    fn successive_overrides_equal_one_merged_override(first in sections(), second in sections()) {
        let first = to_map(&first);
        let second = to_map(&second);

        let mut layered = LocaleService::default();
        layered.register_overrides("en", first.clone());
        layered.register_overrides("en", second.clone());

        let mut combined = LocaleService::default();
        combined.register_overrides("en", deep_merge(&first, &second));

        prop_assert_eq!(layered.overrides_for("en").cloned(), combined.overrides_for("en").cloned());
    }
}
