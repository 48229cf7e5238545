//! Lenient JSON parsing for both configuration shapes.
//!
//! Current files are an object with display options and a `programs` array.
//! Legacy files are a bare array of program objects. Nothing in here fails:
//! malformed text, wrong shapes, and mistyped fields all fall back to
//! defaults.

use serde_json::{Map, Value};

use super::defaults::{DEFAULT_PROGRAM_NAME, DEFAULT_SEPARATOR_COMMANDS, DEFAULT_SEPARATOR_SUBTITLE};
use super::{ColorSpec, DisplayConfig, Program};

/// Parse raw config file text into the full display configuration.
///
/// Malformed JSON is treated as an empty object.
pub fn parse_display_config(raw: &str) -> DisplayConfig {
    display_config_from_value(&parse_json_or_empty(raw))
}

/// Parse raw config file text into its program list.
pub fn parse_config(raw: &str) -> Vec<Program> {
    parse_programs(&parse_json_or_empty(raw))
}

/// Extract the program list from either config shape.
///
/// Any value that is neither an object with a `programs` array nor a bare
/// array yields an empty list.
pub fn parse_programs(config: &Value) -> Vec<Program> {
    let items = match config {
        Value::Object(map) => match map.get("programs") {
            Some(Value::Array(items)) => items,
            _ => return Vec::new(),
        },
        Value::Array(items) => items,
        _ => return Vec::new(),
    };

    items
        .iter()
        .enumerate()
        .filter_map(|(idx, item)| match item {
            Value::Object(fields) => Some(program_from_fields(fields)),
            other => {
                tracing::warn!("skipping program entry {idx}: expected object, got {other}");
                None
            }
        })
        .collect()
}

/// Build the display configuration from an already-parsed JSON value.
pub fn display_config_from_value(config: &Value) -> DisplayConfig {
    let mut display = DisplayConfig::empty();
    display.programs = parse_programs(config);

    // Legacy arrays carry no display options.
    let Value::Object(map) = config else {
        return display;
    };
    display.separator_subtitle =
        string_field(map, "separator_subtitle", DEFAULT_SEPARATOR_SUBTITLE);
    display.separator_commands =
        string_field(map, "separator_commands", DEFAULT_SEPARATOR_COMMANDS);
    display.color_art = color_field(map, "color_art");
    display.color_subtitle = color_field(map, "color_subtitle");
    display.color_commands = color_field(map, "color_commands");
    display
}

fn parse_json_or_empty(raw: &str) -> Value {
    match serde_json::from_str::<Value>(raw) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!("config is not valid JSON ({e}); using an empty configuration");
            Value::Object(Map::new())
        }
    }
}

fn program_from_fields(fields: &Map<String, Value>) -> Program {
    Program {
        name: string_field(fields, "name", DEFAULT_PROGRAM_NAME),
        icon: string_field(fields, "icon", ""),
        shortcut: string_field(fields, "shortcut", ""),
        command: string_field(fields, "command", ""),
    }
}

/// Read a string field, substituting `default` when absent or not a string.
fn string_field(map: &Map<String, Value>, key: &str, default: &str) -> String {
    map.get(key)
        .and_then(Value::as_str)
        .unwrap_or(default)
        .to_string()
}

fn color_field(map: &Map<String, Value>, key: &str) -> ColorSpec {
    map.get(key)
        .and_then(Value::as_str)
        .map(ColorSpec::resolve)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn object_shape_fills_missing_program_fields_with_defaults() {
        let programs = parse_config(r#"{"programs":[{"name":"A","command":"x"}]}"#);
        assert_eq!(programs, vec![Program::new("A", "", "", "x")]);
    }

    #[test]
    fn legacy_array_shape_yields_same_programs() {
        let programs =
            parse_config(r#"[{"name":"A","icon":"i","shortcut":"s","command":"c"}]"#);
        assert_eq!(programs, vec![Program::new("A", "i", "s", "c")]);
    }

    #[test]
    fn malformed_json_yields_empty_program_list() {
        assert!(parse_config("{\"programs\": [").is_empty());
        assert!(parse_config("").is_empty());
    }

    #[test]
    fn other_shapes_yield_empty_program_list() {
        assert!(parse_config("42").is_empty());
        assert!(parse_config(r#""programs""#).is_empty());
        assert!(parse_config(r#"{"programs":{"name":"A"}}"#).is_empty());
        assert!(parse_config(r#"{"apps":[{"name":"A"}]}"#).is_empty());
    }

    #[test]
    fn missing_name_defaults_to_unknown() {
        let programs = parse_config(r#"[{"shortcut":"x"}]"#);
        assert_eq!(programs[0].name, "unknown");
        assert_eq!(programs[0].shortcut, "x");
    }

    #[test]
    fn mistyped_fields_fall_back_to_defaults() {
        let programs = parse_config(r#"[{"name":7,"icon":null,"shortcut":["a"],"command":"c"}]"#);
        assert_eq!(programs, vec![Program::new("unknown", "", "", "c")]);
    }

    #[test]
    fn non_object_entries_are_skipped() {
        let programs = parse_config(r#"[1, {"name":"B"}, "c"]"#);
        assert_eq!(programs.len(), 1);
        assert_eq!(programs[0].name, "B");
    }

    #[test]
    fn display_options_are_read_from_object_shape() {
        let display = parse_display_config(
            r#"{"separator_subtitle":"|","separator_commands":" - ",
                "color_art":"RED","color_subtitle":"white","color_commands":"CYAN",
                "programs":[]}"#,
        );
        assert_eq!(display.separator_subtitle, "|");
        assert_eq!(display.separator_commands, " - ");
        assert_eq!(display.color_art, ColorSpec::Red);
        // Color names are case-sensitive.
        assert_eq!(display.color_subtitle, ColorSpec::Random);
        assert_eq!(display.color_commands, ColorSpec::Cyan);
    }

    #[test]
    fn legacy_shape_uses_default_display_options() {
        let display = parse_display_config(r#"[{"name":"A"}]"#);
        assert_eq!(display.separator_subtitle, "\u{f444} ");
        assert_eq!(display.separator_commands, "\t");
        assert_eq!(display.color_art, ColorSpec::Random);
        assert_eq!(display.programs.len(), 1);
    }

    #[test]
    fn malformed_json_yields_empty_display_defaults() {
        assert_eq!(parse_display_config("not json"), DisplayConfig::empty());
    }

    #[test]
    fn resolve_color_maps_known_names_and_defaults_to_random() {
        assert_eq!(ColorSpec::resolve("GREEN"), ColorSpec::Green);
        assert_eq!(ColorSpec::resolve("MAGENTA"), ColorSpec::Magenta);
        assert_eq!(ColorSpec::resolve("RANDOM"), ColorSpec::Random);
        assert_eq!(ColorSpec::resolve("Purple"), ColorSpec::Random);
        assert_eq!(ColorSpec::resolve(""), ColorSpec::Random);
    }

    #[cfg(feature = "fuzz-tests")]
    mod prop_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn arbitrary_text_never_panics(raw in ".{0,64}") {
                let display = parse_display_config(&raw);
                prop_assert!(display.programs.len() <= raw.len());
            }

            #[test]
            fn legacy_arrays_keep_every_object_entry(
                names in proptest::collection::vec("[a-z]{1,8}", 0..6),
            ) {
                let items: Vec<Value> = names
                    .iter()
                    .map(|name| serde_json::json!({ "name": name, "shortcut": name }))
                    .collect();
                let programs = parse_programs(&Value::Array(items));
                let parsed: Vec<&str> = programs.iter().map(|p| p.name.as_str()).collect();
                let expected: Vec<&str> = names.iter().map(String::as_str).collect();
                prop_assert_eq!(parsed, expected);
            }
        }
    }
}
