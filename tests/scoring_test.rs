//! Scoring contract tests
//!
//! Exercises the public scoring API end-to-end: rubric totals, grade
//! bands, determinism, and the short-circuit behavior for documents
//! with no paths.

use apigrade::models::{Document, Grade};
use apigrade::scoring::score_document;

fn doc(v: serde_json::Value) -> Document {
    serde_json::from_value(v).unwrap()
}

/// A document built to earn every point the rubric can award except
/// the CRUD and naming terms it intentionally leaves partial.
fn well_kept_document() -> Document {
    doc(serde_json::json!({
        "openapi": "3.1.0",
        "info": {
            "title": "Petstore",
            "version": "2.1.0",
            "description": "A thoroughly documented API for managing pets"
        },
        "servers": [{"url": "https://api.example.com"}],
        "externalDocs": {"url": "https://docs.example.com"},
        "security": [{"bearer": []}],
        "paths": {
            "/pets": {
                "description": "The pet collection",
                "get": {
                    "tags": ["pets"],
                    "description": "List pets with paging",
                    "security": [{"bearer": []}],
                    "parameters": [
                        {"name": "page", "in": "query", "description": "Page number"}
                    ],
                    "responses": {
                        "200": {
                            "description": "A page of pets",
                            "content": {"application/json": {
                                "schema": {"$ref": "#/components/schemas/Pet"},
                                "example": [{"id": 1, "name": "Rex"}]
                            }}
                        },
                        "500": {
                            "description": "Server error",
                            "content": {"application/json": {
                                "schema": {"$ref": "#/components/schemas/Error"},
                                "example": {"message": "boom"}
                            }}
                        }
                    }
                },
                "post": {
                    "tags": ["pets"],
                    "description": "Register a new pet",
                    "security": [{"bearer": []}],
                    "requestBody": {"content": {"application/json": {
                        "schema": {"$ref": "#/components/schemas/Pet"},
                        "example": {"name": "Rex"}
                    }}},
                    "responses": {
                        "201": {
                            "description": "Created",
                            "content": {"application/json": {
                                "schema": {"$ref": "#/components/schemas/Pet"},
                                "example": {"id": 2, "name": "Rex"}
                            }}
                        },
                        "400": {
                            "description": "Invalid pet",
                            "content": {"application/json": {
                                "schema": {"$ref": "#/components/schemas/Error"},
                                "example": {"message": "name required"}
                            }}
                        }
                    }
                }
            }
        },
        "components": {
            "schemas": {
                "Pet": {"type": "object", "properties": {
                    "id": {"type": "integer"},
                    "name": {"type": "string"}
                }},
                "Error": {"type": "object", "properties": {
                    "message": {"type": "string"}
                }}
            },
            "parameters": {
                "page": {"name": "page", "in": "query"}
            },
            "securitySchemes": {
                "bearer": {"type": "http"},
                "apiKey": {"type": "apiKey"},
                "oauth": {"type": "oauth2"}
            }
        }
    }))
}

#[test]
fn well_kept_document_scores_97() {
    let result = score_document(well_kept_document());

    let scores: Vec<(String, u32)> = result
        .criteria
        .iter()
        .map(|c| (c.name.clone(), c.score))
        .collect();
    assert_eq!(
        scores,
        vec![
            ("Schema & Types".to_string(), 20),
            ("Descriptions & Documentation".to_string(), 20),
            // /pets exposes one CRUD pair: 7 + min(5, 2) + 3.
            ("Paths & Operations".to_string(), 12),
            ("Response Codes".to_string(), 15),
            ("Examples & Samples".to_string(), 10),
            ("Security".to_string(), 10),
            ("Best Practices".to_string(), 10),
        ]
    );
    assert_eq!(result.total_score, 97);
    assert_eq!(result.grade, Grade::A);
    // Nothing under threshold, so only the narrative line remains.
    assert_eq!(result.feedback.len(), 1);
}

#[test]
fn minimal_document_end_to_end() {
    let result = score_document(doc(serde_json::json!({
        "info": {"title": "Minimal API", "version": "1.0.0"},
        "paths": {
            "/test": {
                "get": {"responses": {"200": {"description": "ok"}}}
            }
        }
    })));

    let by_name = |name: &str| result.criteria.iter().find(|c| c.name == name).unwrap();
    assert_eq!(by_name("Security").score, 0);
    assert!(by_name("Best Practices").score <= 2);
    assert_eq!(by_name("Examples & Samples").score, 0);
    assert!(matches!(result.grade, Grade::D | Grade::F));

    // Six criteria fall under the weak-area threshold; only the three
    // lowest are named, in ascending percentage order.
    assert_eq!(result.feedback.len(), 2);
    assert!(result.feedback[1].contains("Schema & Types"));
    assert!(result.feedback[1].contains("Examples & Samples"));
    assert!(result.feedback[1].contains("Security"));
    assert!(!result.feedback[1].contains("Response Codes"));
}

#[test]
fn zero_path_document_zeros_path_dependent_criteria() {
    let result = score_document(doc(serde_json::json!({
        "info": {"title": "Empty", "version": "0.0.1"}
    })));

    for name in ["Paths & Operations", "Response Codes", "Examples & Samples"] {
        let criterion = result.criteria.iter().find(|c| c.name == name).unwrap();
        assert_eq!(criterion.score, 0, "{name} should be 0 without paths");
        assert!(
            criterion.findings.iter().any(|f| f.contains("No paths")),
            "{name} should report the missing paths"
        );
    }
}

#[test]
fn total_is_bounded_and_equals_criterion_sum() {
    for document in [
        Document::default(),
        well_kept_document(),
        doc(serde_json::json!({"paths": {"/a": {"get": {}}}})),
    ] {
        let result = score_document(document);
        let sum: u32 = result.criteria.iter().map(|c| c.score).sum();
        assert_eq!(result.total_score, sum);
        assert!(result.total_score <= 100);

        let maxes: Vec<u32> = result.criteria.iter().map(|c| c.max_score).collect();
        assert_eq!(maxes, vec![20, 20, 15, 15, 10, 10, 10]);
    }
}

#[test]
fn properly_typed_schemas_max_their_term() {
    // N object schemas, all with properties: the typing term contributes
    // its full 10 points on top of the 5 for having schemas at all.
    let result = score_document(doc(serde_json::json!({
        "components": {"schemas": {
            "A": {"type": "object", "properties": {"x": {"type": "string"}}},
            "B": {"type": "object", "properties": {"y": {"type": "integer"}}},
            "C": {"type": "object", "properties": {"z": {"type": "boolean"}}}
        }}
    })));
    let schema = result.criteria.iter().find(|c| c.name == "Schema & Types").unwrap();
    assert_eq!(schema.score, 15);
}

#[test]
fn scoring_is_deterministic() {
    let first = score_document(well_kept_document());
    let second = score_document(well_kept_document());

    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}
