//! `package.json` rewriting for freshly bootstrapped projects.

use serde_json::{Map, Value};

use crate::domain::error::DomainError;

pub const INITIAL_VERSION: &str = "1.0.0";
pub const GENERATED_DESCRIPTION: &str = "Backend generated with crudforge";

/// Stamp the project identity onto a template manifest.
///
/// Key order of the template manifest is preserved; missing keys are
/// appended. Output is pretty-printed with two-space indentation.
pub fn rewrite_package_manifest(source: &str, project_name: &str) -> Result<String, DomainError> {
    let value: Value = serde_json::from_str(source).map_err(|e| DomainError::InvalidManifest {
        reason: e.to_string(),
    })?;

    let Value::Object(mut object) = value else {
        return Err(DomainError::InvalidManifest {
            reason: "top-level value is not an object".into(),
        });
    };

    set(&mut object, "name", project_name);
    set(&mut object, "version", INITIAL_VERSION);
    set(&mut object, "description", GENERATED_DESCRIPTION);

    serde_json::to_string_pretty(&Value::Object(object)).map_err(|e| {
        DomainError::InvalidManifest {
            reason: e.to_string(),
        }
    })
}

fn set(object: &mut Map<String, Value>, key: &str, value: &str) {
    object.insert(key.to_string(), Value::String(value.to_string()));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_key_order() {
        let src = r#"{"name":"t","scripts":{"dev":"tsx src/server.ts"},"version":"0.0.1"}"#;
        let out = rewrite_package_manifest(src, "api").unwrap();
        let name_at = out.find("\"name\"").unwrap();
        let scripts_at = out.find("\"scripts\"").unwrap();
        let version_at = out.find("\"version\"").unwrap();
        assert!(name_at < scripts_at && scripts_at < version_at);
        assert!(out.contains(r#""dev": "tsx src/server.ts""#));
    }

    #[test]
    fn appends_missing_description() {
        let out = rewrite_package_manifest(r#"{"name":"t"}"#, "api").unwrap();
        assert!(out.contains(GENERATED_DESCRIPTION));
    }

    #[test]
    fn rejects_non_object() {
        assert!(matches!(
            rewrite_package_manifest("[1,2]", "api"),
            Err(DomainError::InvalidManifest { .. })
        ));
        assert!(rewrite_package_manifest("{oops", "api").is_err());
    }
}
