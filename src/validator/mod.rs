//! Structural validation
//!
//! Checks a decoded document for the shape the scorer relies on:
//! required root fields and resolvable local component references.
//! Failures are collected into a [`ValidationReport`] value instead of
//! being thrown, so callers can render every problem at once. Advisory
//! warnings (empty paths, upgrade hints, missing examples) ride along
//! and never flip `is_valid`.

use crate::errors::GradeError;
use crate::evaluators::access::{operations, request_media_types, response_contents};
use crate::loader;
use crate::models::{Document, Method};
use tracing::debug;

/// Outcome of validating one source.
#[derive(Debug, Default)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: Vec<GradeError>,
    pub warnings: Vec<String>,
}

impl ValidationReport {
    fn from_parts(errors: Vec<GradeError>, warnings: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
            warnings,
        }
    }

    fn failure(error: GradeError) -> Self {
        Self {
            is_valid: false,
            errors: vec![error],
            warnings: Vec::new(),
        }
    }
}

/// Load and validate a document from a path or URL. Retrieval and
/// decoding failures land in the report rather than propagating.
pub fn validate_source(source: &str) -> ValidationReport {
    match loader::load_document(source) {
        Ok(document) => validate_document(&document),
        Err(error) => ValidationReport::failure(error),
    }
}

/// Validate an already-decoded document.
pub fn validate_document(doc: &Document) -> ValidationReport {
    let mut errors = Vec::new();

    if doc.openapi.is_none() {
        errors.push(GradeError::SchemaValidation(
            "missing required field: openapi".to_string(),
        ));
    }
    if doc.info.title.is_none() {
        errors.push(GradeError::SchemaValidation(
            "missing required field: info.title".to_string(),
        ));
    }
    if doc.info.version.is_none() {
        errors.push(GradeError::SchemaValidation(
            "missing required field: info.version".to_string(),
        ));
    }

    check_references(doc, &mut errors);

    let warnings = collect_warnings(doc);
    debug!(
        "Validation: {} errors, {} warnings",
        errors.len(),
        warnings.len()
    );
    ValidationReport::from_parts(errors, warnings)
}

/// Resolve every local `#/components/...` reference the scorer can see.
/// External references are out of scope and left alone.
fn check_references(doc: &Document, errors: &mut Vec<GradeError>) {
    let mut check = |reference: &str, location: String| {
        if !reference.starts_with("#/") {
            return;
        }
        if !resolves(doc, reference) {
            errors.push(GradeError::ReferenceResolution {
                reference: reference.to_string(),
                location,
            });
        }
    };

    for (name, schema) in &doc.components.schemas {
        if let Some(reference) = &schema.reference {
            check(reference, format!("components.schemas.{}", name));
        }
    }

    for opref in operations(doc, &Method::ALL) {
        let location = format!("paths.{}.{}", opref.path, opref.method);
        for media_type in request_media_types(opref.operation) {
            if let Some(reference) = media_type.schema.as_ref().and_then(|s| s.reference.as_ref())
            {
                check(reference, format!("{}.requestBody", location));
            }
        }
        for content in response_contents(opref.operation) {
            for media_type in content.values() {
                if let Some(reference) =
                    media_type.schema.as_ref().and_then(|s| s.reference.as_ref())
                {
                    check(reference, format!("{}.responses", location));
                }
            }
        }
    }
}

fn resolves(doc: &Document, reference: &str) -> bool {
    let parts: Vec<&str> = reference.trim_start_matches("#/").split('/').collect();
    let [root, category, name] = parts.as_slice() else {
        return false;
    };
    if *root != "components" {
        return false;
    }
    let components = &doc.components;
    match *category {
        "schemas" => components.schemas.contains_key(*name),
        "responses" => components.responses.contains_key(*name),
        "parameters" => components.parameters.contains_key(*name),
        "examples" => components.examples.contains_key(*name),
        "requestBodies" => components.request_bodies.contains_key(*name),
        "headers" => components.headers.contains_key(*name),
        "securitySchemes" => components.security_schemes.contains_key(*name),
        _ => false,
    }
}

fn collect_warnings(doc: &Document) -> Vec<String> {
    let mut warnings = Vec::new();

    if doc.paths.is_empty() {
        warnings.push("Document defines no paths".to_string());
    }
    if doc.info.description.is_none() {
        warnings.push("info.description is missing".to_string());
    }
    if doc.components.security_schemes.is_empty() {
        warnings.push("No security schemes defined".to_string());
    }
    if let Some(version) = &doc.openapi {
        if version.starts_with("3.0") {
            warnings.push(format!(
                "Document declares OpenAPI {}; consider upgrading to 3.1",
                version
            ));
        }
    }

    let missing_examples = operations(doc, &Method::ALL)
        .flat_map(|opref| response_contents(opref.operation))
        .filter(|content| !content.values().any(|mt| mt.has_example()))
        .count();
    if missing_examples > 0 {
        let noun = if missing_examples == 1 {
            "response content entry has"
        } else {
            "response content entries have"
        };
        warnings.push(format!("{} {} no example", missing_examples, noun));
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(v: serde_json::Value) -> Document {
        serde_json::from_value(v).unwrap()
    }

    #[test]
    fn complete_document_is_valid() {
        let report = validate_document(&doc(serde_json::json!({
            "openapi": "3.1.0",
            "info": {"title": "T", "version": "1.0.0", "description": "d"},
            "paths": {"/a": {"get": {"responses": {"200": {"description": "ok"}}}}},
            "components": {"securitySchemes": {"k": {"type": "apiKey"}}}
        })));
        assert!(report.is_valid, "errors: {:?}", report.errors);
    }

    #[test]
    fn missing_root_fields_each_raise_an_error() {
        let report = validate_document(&doc(serde_json::json!({})));
        assert!(!report.is_valid);
        assert_eq!(report.errors.len(), 3);
        assert!(report
            .errors
            .iter()
            .all(|e| matches!(e, GradeError::SchemaValidation(_))));
    }

    #[test]
    fn dangling_reference_is_flagged_with_location() {
        let report = validate_document(&doc(serde_json::json!({
            "openapi": "3.1.0",
            "info": {"title": "T", "version": "1.0.0"},
            "paths": {"/users": {"get": {"responses": {"200": {
                "description": "ok",
                "content": {"application/json": {"schema": {"$ref": "#/components/schemas/Missing"}}}
            }}}}}
        })));
        assert!(!report.is_valid);
        match &report.errors[0] {
            GradeError::ReferenceResolution {
                reference,
                location,
            } => {
                assert_eq!(reference, "#/components/schemas/Missing");
                assert!(location.contains("/users"));
            }
            other => panic!("expected ReferenceResolution, got {other:?}"),
        }
    }

    #[test]
    fn advisory_findings_are_warnings_not_errors() {
        let report = validate_document(&doc(serde_json::json!({
            "openapi": "3.0.3",
            "info": {"title": "T", "version": "1.0.0"}
        })));
        assert!(report.is_valid);
        assert!(report.warnings.iter().any(|w| w.contains("no paths")));
        assert!(report.warnings.iter().any(|w| w.contains("3.1")));
        assert!(report
            .warnings
            .iter()
            .any(|w| w.contains("security schemes")));
    }

    #[test]
    fn unreadable_source_fails_validation_with_one_error() {
        let report = validate_source("/nope/missing.yaml");
        assert!(!report.is_valid);
        assert_eq!(report.errors.len(), 1);
        assert!(matches!(report.errors[0], GradeError::FileNotFound(_)));
    }
}
