//! Migration of stored settings from legacy codes to directive arrays
//!
//! Operates on the settings document in memory; persisting the result is the
//! host's job. Object key order and array order are preserved.

use super::{code_to_kinds, LegacyCode, DEFAULT_DIRECTIVES};
use crate::catalog::DirectiveKind;
use crate::logging::codes;
use serde_json::{json, Map, Value};
use thiserror::Error;

/// Rule list for per-URL meta robots
pub const META_ROBOTS_PATH: &str = "meta_robots";
/// Single-code setting applied to HTTPS pages
pub const HTTPS_META_ROBOTS_PATH: &str = "https_meta_robots";
/// Single-code setting applied to paginated pages
pub const PAGINATED_ROBOTS_PATH: &str = "paginated_robots_type";

const CODE_SETTING_PATHS: [&str; 2] = [HTTPS_META_ROBOTS_PATH, PAGINATED_ROBOTS_PATH];

const RULE_OPTION: &str = "option";
const RULE_PRIORITY: &str = "priority";
const RULE_PATTERN: &str = "pattern";
const RULE_DIRECTIVES: &str = "meta_directives";

#[derive(Debug, Error)]
pub enum MigrationError {
    #[error("Stored value at '{path}' is not valid JSON: {source}")]
    MalformedStoredValue {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Settings document must be a JSON object, found {found}")]
    NotAnObject { found: &'static str },
}

impl MigrationError {
    pub fn malformed_stored_value(path: &str, source: serde_json::Error) -> Self {
        Self::MalformedStoredValue {
            path: path.to_string(),
            source,
        }
    }
}

/// Result of migrating one rule list
#[derive(Debug, Clone, PartialEq)]
pub struct RulesMigration {
    pub rules: Value,
    /// Whether any rule still used a legacy `option` code
    pub migrated: bool,
}

/// Result of migrating a whole settings document
#[derive(Debug)]
pub struct MigrationReport {
    pub document: Value,
    pub migrated_paths: Vec<String>,
    /// Paths left untouched because their stored value could not be read
    pub failures: Vec<MigrationError>,
}

impl MigrationReport {
    pub fn is_noop(&self) -> bool {
        self.migrated_paths.is_empty()
    }
}

/// Migrate a list of meta robots rules, stored as a JSON array or keyed object.
///
/// Rules with a numeric `option` become `{priority, pattern, meta_directives}`.
/// Rules that already carry `meta_directives` are kept. Any other object rule
/// gets `meta_directives: [index, follow]` added; on its own that does not
/// count as a migration.
pub fn migrate_rules(rules: &Value) -> RulesMigration {
    let mut migrated = false;

    let rules = match rules {
        Value::Object(entries) => {
            let mut migrated_entries = Map::new();
            for (key, rule) in entries {
                let (rule, changed) = migrate_rule(rule);
                migrated |= changed;
                migrated_entries.insert(key.clone(), rule);
            }
            Value::Object(migrated_entries)
        }
        Value::Array(entries) => Value::Array(
            entries
                .iter()
                .map(|rule| {
                    let (rule, changed) = migrate_rule(rule);
                    migrated |= changed;
                    rule
                })
                .collect(),
        ),
        other => other.clone(),
    };

    RulesMigration { rules, migrated }
}

fn migrate_rule(rule: &Value) -> (Value, bool) {
    let Value::Object(fields) = rule else {
        crate::log_warning!(
            codes::migration::UNKNOWN_RULE_FORMAT,
            "Meta robots rule is not an object, keeping it unchanged",
            "rule" => rule
        );
        return (rule.clone(), false);
    };

    if let Some(code) = fields.get(RULE_OPTION).and_then(numeric_code) {
        let mut migrated = Map::new();
        migrated.insert(
            RULE_PRIORITY.to_string(),
            present(fields.get(RULE_PRIORITY)).unwrap_or_else(|| json!(0)),
        );
        migrated.insert(
            RULE_PATTERN.to_string(),
            present(fields.get(RULE_PATTERN)).unwrap_or_else(|| json!("")),
        );
        migrated.insert(RULE_DIRECTIVES.to_string(), directive_names(code_to_kinds(code)));
        return (Value::Object(migrated), true);
    }

    if present(fields.get(RULE_DIRECTIVES)).is_some() {
        return (rule.clone(), false);
    }

    let mut completed = fields.clone();
    completed.insert(RULE_DIRECTIVES.to_string(), directive_names(DEFAULT_DIRECTIVES));
    (Value::Object(completed), false)
}

/// Migrate a single-code setting.
///
/// Returns `None` when there is nothing to migrate: blank, `0`, non-numeric,
/// or already a directive array.
pub fn migrate_code_setting(value: &Value) -> Option<Value> {
    if is_blank(value) {
        return None;
    }

    numeric_code(value).map(|code| directive_names(code_to_kinds(code)))
}

/// Migrate every legacy path of a settings object.
///
/// A malformed rule list is logged, recorded in the report and skipped; the
/// remaining paths are still migrated.
pub fn migrate_configuration(document: &Value) -> Result<MigrationReport, MigrationError> {
    let Value::Object(settings) = document else {
        return Err(MigrationError::NotAnObject {
            found: json_type_name(document),
        });
    };

    let mut settings = settings.clone();
    let mut migrated_paths = Vec::new();
    let mut failures = Vec::new();

    if let Some(stored) = settings.get(META_ROBOTS_PATH) {
        match migrate_stored_rules(META_ROBOTS_PATH, stored) {
            Ok(Some(rules)) => {
                settings.insert(META_ROBOTS_PATH.to_string(), rules);
                migrated_paths.push(META_ROBOTS_PATH.to_string());
            }
            Ok(None) => {}
            Err(error) => {
                crate::log_warning!(
                    codes::migration::MALFORMED_STORED_VALUE,
                    &error.to_string(),
                    "path" => META_ROBOTS_PATH
                );
                failures.push(error);
            }
        }
    }

    for path in CODE_SETTING_PATHS {
        if let Some(directives) = settings.get(path).and_then(migrate_code_setting) {
            settings.insert(path.to_string(), directives);
            migrated_paths.push(path.to_string());
        }
    }

    crate::log_success!(
        codes::success::MIGRATION_COMPLETE,
        "Robots configuration migration finished",
        "migrated_paths" => migrated_paths.len(),
        "failures" => failures.len()
    );

    Ok(MigrationReport {
        document: Value::Object(settings),
        migrated_paths,
        failures,
    })
}

/// Rule lists may be stored as JSON text; text stays text after migration
fn migrate_stored_rules(path: &str, stored: &Value) -> Result<Option<Value>, MigrationError> {
    match stored {
        Value::String(text) => {
            if text.trim().is_empty() {
                return Ok(None);
            }

            let rules: Value = serde_json::from_str(text)
                .map_err(|source| MigrationError::malformed_stored_value(path, source))?;
            let migration = migrate_rules(&rules);
            Ok(migration
                .migrated
                .then(|| Value::String(migration.rules.to_string())))
        }
        other => {
            let migration = migrate_rules(other);
            Ok(migration.migrated.then_some(migration.rules))
        }
    }
}

fn numeric_code(value: &Value) -> Option<LegacyCode> {
    match value {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().map(|float| float.trunc() as LegacyCode)),
        Value::String(text) => {
            let text = text.trim();
            text.parse::<LegacyCode>().ok().or_else(|| {
                text.parse::<f64>()
                    .ok()
                    .filter(|float| float.is_finite())
                    .map(|float| float.trunc() as LegacyCode)
            })
        }
        _ => None,
    }
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => number.as_f64() == Some(0.0),
        Value::String(text) => text.is_empty() || text == "0",
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
    }
}

fn present(value: Option<&Value>) -> Option<Value> {
    value.filter(|value| !value.is_null()).cloned()
}

fn directive_names(kinds: &[DirectiveKind]) -> Value {
    Value::Array(
        kinds
            .iter()
            .map(|kind| Value::String(kind.as_str().to_string()))
            .collect(),
    )
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_rules_with_option_code_migrated() {
        let rules = json!({
            "_1700000000000_1": {"priority": 10, "pattern": "/checkout/*", "option": "1"},
            "_1700000000000_2": {"pattern": "/blog/*", "option": 6}
        });

        let migration = migrate_rules(&rules);
        assert!(migration.migrated);
        assert_eq!(
            migration.rules,
            json!({
                "_1700000000000_1": {
                    "priority": 10,
                    "pattern": "/checkout/*",
                    "meta_directives": ["noindex", "nofollow"]
                },
                "_1700000000000_2": {
                    "priority": 0,
                    "pattern": "/blog/*",
                    "meta_directives": ["noindex", "follow", "noarchive"]
                }
            })
        );
    }

    #[test]
    fn test_unknown_code_in_rule_defaults() {
        let migration = migrate_rules(&json!([{"option": 42}]));
        assert_eq!(
            migration.rules,
            json!([{"priority": 0, "pattern": "", "meta_directives": ["index", "follow"]}])
        );
    }

    #[test]
    fn test_already_migrated_rules_untouched() {
        let rules = json!([{"priority": 1, "pattern": "*", "meta_directives": ["noindex"]}]);
        let migration = migrate_rules(&rules);
        assert!(!migration.migrated);
        assert_eq!(migration.rules, rules);
    }

    #[test]
    fn test_rule_without_directives_gets_default_only() {
        let migration = migrate_rules(&json!([{"pattern": "/a", "option": "abc"}]));
        assert!(!migration.migrated);
        assert_eq!(
            migration.rules,
            json!([{"pattern": "/a", "option": "abc", "meta_directives": ["index", "follow"]}])
        );
    }

    #[test]
    fn test_code_setting() {
        assert_eq!(migrate_code_setting(&json!("5")), Some(json!(["noindex", "nofollow", "noarchive"])));
        assert_eq!(migrate_code_setting(&json!(3)), Some(json!(["index", "nofollow"])));
        assert_eq!(migrate_code_setting(&json!(99)), Some(json!(["index", "follow"])));
        assert_eq!(migrate_code_setting(&json!("0")), None);
        assert_eq!(migrate_code_setting(&json!("")), None);
        assert_eq!(migrate_code_setting(&json!("noindex")), None);
        assert_eq!(migrate_code_setting(&json!(["noindex"])), None);
        assert_eq!(migrate_code_setting(&Value::Null), None);
    }

    #[test]
    fn test_configuration_document() {
        let document = json!({
            "enabled": "1",
            "meta_robots": "[{\"priority\":\"5\",\"pattern\":\"/search*\",\"option\":\"2\"}]",
            "https_meta_robots": "1",
            "paginated_robots_type": "0"
        });

        let report = migrate_configuration(&document).unwrap();
        assert_eq!(report.migrated_paths, vec!["meta_robots", "https_meta_robots"]);
        assert!(report.failures.is_empty());
        assert_eq!(report.document["enabled"], "1");
        assert_eq!(report.document["https_meta_robots"], json!(["noindex", "nofollow"]));
        assert_eq!(report.document["paginated_robots_type"], "0");

        let stored = report.document["meta_robots"].as_str().unwrap();
        let rules: Value = serde_json::from_str(stored).unwrap();
        assert_eq!(
            rules,
            json!([{"priority": "5", "pattern": "/search*", "meta_directives": ["noindex", "follow"]}])
        );
    }

    #[test]
    fn test_malformed_rules_recorded_and_rest_migrated() {
        let document = json!({
            "meta_robots": "{not json",
            "paginated_robots_type": "8"
        });

        let report = migrate_configuration(&document).unwrap();
        assert_eq!(report.migrated_paths, vec!["paginated_robots_type"]);
        assert_matches!(
            report.failures.as_slice(),
            [MigrationError::MalformedStoredValue { path, .. }] if path == "meta_robots"
        );
        assert_eq!(report.document["meta_robots"], "{not json");
    }

    #[test]
    fn test_nothing_to_migrate() {
        let document = json!({"meta_robots": "", "https_meta_robots": ["noindex", "follow"]});
        let report = migrate_configuration(&document).unwrap();
        assert!(report.is_noop());
        assert_eq!(report.document, document);
    }

    #[test]
    fn test_document_must_be_object() {
        assert_matches!(
            migrate_configuration(&json!([1, 2])),
            Err(MigrationError::NotAnObject { found: "array" })
        );
    }
}
