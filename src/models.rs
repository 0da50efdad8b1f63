//! Core data models for apigrade
//!
//! These models are used throughout the codebase for representing
//! the parsed API description tree and scoring results.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// HTTP methods an operation can be registered under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
    Options,
    Trace,
}

impl Method {
    /// All eight methods a path item can define.
    pub const ALL: [Method; 8] = [
        Method::Get,
        Method::Post,
        Method::Put,
        Method::Patch,
        Method::Delete,
        Method::Head,
        Method::Options,
        Method::Trace,
    ];

    /// The methods most rubric criteria walk: the ones that carry
    /// request/response payloads in practice.
    pub const PRIMARY: [Method; 5] = [
        Method::Get,
        Method::Post,
        Method::Put,
        Method::Patch,
        Method::Delete,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "get",
            Method::Post => "post",
            Method::Put => "put",
            Method::Patch => "patch",
            Method::Delete => "delete",
            Method::Head => "head",
            Method::Options => "options",
            Method::Trace => "trace",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Root of the parsed API description. Immutable input to the engine.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Document {
    #[serde(default)]
    pub openapi: Option<String>,
    #[serde(default)]
    pub info: Info,
    #[serde(default)]
    pub servers: Option<Vec<Server>>,
    /// Global security requirements. `Some` means the document declares
    /// a top-level `security` list, empty or not.
    #[serde(default)]
    pub security: Option<Vec<SecurityRequirement>>,
    #[serde(default, rename = "externalDocs")]
    pub external_docs: Option<ExternalDocs>,
    #[serde(default)]
    pub paths: BTreeMap<String, PathItem>,
    #[serde(default)]
    pub components: Components,
}

/// API metadata block.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Info {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Server {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ExternalDocs {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// One security requirement entry: scheme name to required scopes.
pub type SecurityRequirement = BTreeMap<String, Vec<String>>;

/// Everything defined at one URL template.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PathItem {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub get: Option<Operation>,
    #[serde(default)]
    pub post: Option<Operation>,
    #[serde(default)]
    pub put: Option<Operation>,
    #[serde(default)]
    pub patch: Option<Operation>,
    #[serde(default)]
    pub delete: Option<Operation>,
    #[serde(default)]
    pub head: Option<Operation>,
    #[serde(default)]
    pub options: Option<Operation>,
    #[serde(default)]
    pub trace: Option<Operation>,
}

impl PathItem {
    /// Operation registered under `method`, if any.
    pub fn operation(&self, method: Method) -> Option<&Operation> {
        match method {
            Method::Get => self.get.as_ref(),
            Method::Post => self.post.as_ref(),
            Method::Put => self.put.as_ref(),
            Method::Patch => self.patch.as_ref(),
            Method::Delete => self.delete.as_ref(),
            Method::Head => self.head.as_ref(),
            Method::Options => self.options.as_ref(),
            Method::Trace => self.trace.as_ref(),
        }
    }
}

/// One HTTP-method handler within a path item.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Operation {
    #[serde(default, rename = "operationId")]
    pub operation_id: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    #[serde(default, rename = "requestBody")]
    pub request_body: Option<RequestBody>,
    #[serde(default)]
    pub responses: BTreeMap<String, Response>,
    /// Per-operation security override. Presence alone is meaningful:
    /// an explicit empty list disables the global requirements.
    #[serde(default)]
    pub security: Option<Vec<SecurityRequirement>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Parameter {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "in")]
    pub location: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub required: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RequestBody {
    #[serde(default)]
    pub description: Option<String>,
    /// Media-type string (e.g. `application/json`) to payload shape.
    #[serde(default)]
    pub content: BTreeMap<String, MediaType>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Response {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub content: Option<BTreeMap<String, MediaType>>,
}

/// A content-type-specific schema/example pair on a request or response.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MediaType {
    #[serde(default)]
    pub schema: Option<Schema>,
    #[serde(default)]
    pub example: Option<serde_json::Value>,
    #[serde(default)]
    pub examples: Option<BTreeMap<String, serde_json::Value>>,
}

impl MediaType {
    /// True when the entry carries an inline example or a named-examples map.
    pub fn has_example(&self) -> bool {
        self.example.is_some() || self.examples.as_ref().is_some_and(|e| !e.is_empty())
    }
}

/// Schema node, used only structurally. The engine never validates
/// schema contents recursively.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Schema {
    #[serde(default, rename = "type")]
    pub schema_type: Option<String>,
    #[serde(default)]
    pub properties: Option<BTreeMap<String, serde_json::Value>>,
    #[serde(default, rename = "additionalProperties")]
    pub additional_properties: Option<serde_json::Value>,
    #[serde(default, rename = "$ref")]
    pub reference: Option<String>,
}

impl Schema {
    /// `type: object` with at least one declared property.
    pub fn is_properly_typed(&self) -> bool {
        self.schema_type.as_deref() == Some("object")
            && self.properties.as_ref().is_some_and(|p| !p.is_empty())
    }

    /// `type: object` with no properties and no additionalProperties
    /// constraint. Accepts anything, guarantees nothing.
    pub fn is_free_form(&self) -> bool {
        self.schema_type.as_deref() == Some("object")
            && !self.properties.as_ref().is_some_and(|p| !p.is_empty())
            && self.additional_properties.is_none()
    }
}

/// Reusable components bag. Only existence and counts matter to the
/// engine; entries other than schemas are kept opaque.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Components {
    #[serde(default)]
    pub schemas: BTreeMap<String, Schema>,
    #[serde(default)]
    pub responses: BTreeMap<String, serde_json::Value>,
    #[serde(default)]
    pub parameters: BTreeMap<String, serde_json::Value>,
    #[serde(default)]
    pub examples: BTreeMap<String, serde_json::Value>,
    #[serde(default, rename = "requestBodies")]
    pub request_bodies: BTreeMap<String, serde_json::Value>,
    #[serde(default)]
    pub headers: BTreeMap<String, serde_json::Value>,
    #[serde(default, rename = "securitySchemes")]
    pub security_schemes: BTreeMap<String, serde_json::Value>,
}

/// Letter grade bands. Monotonic in total score, no gaps or overlaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    pub fn from_score(total: u32) -> Grade {
        match total {
            t if t >= 80 => Grade::A,
            t if t >= 70 => Grade::B,
            t if t >= 60 => Grade::C,
            t if t >= 50 => Grade::D,
            _ => Grade::F,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        }
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Outcome of one rubric criterion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriterionResult {
    pub name: String,
    /// Rounded once at construction; the aggregator sums these as-is.
    pub score: u32,
    pub max_score: u32,
    /// `round(score / max_score * 100)`, always in 0..=100.
    pub percentage: u32,
    /// Facts observed while scoring, in evaluation order.
    pub findings: Vec<String>,
    /// Possible improvements. May be empty.
    pub suggestions: Vec<String>,
}

impl CriterionResult {
    /// Build a result from a raw (pre-rounding) score. The raw value is
    /// clamped to `[0, max]` before rounding so formula drift can never
    /// push a criterion outside its band.
    pub fn new(
        name: impl Into<String>,
        raw_score: f64,
        max_score: u32,
        findings: Vec<String>,
        suggestions: Vec<String>,
    ) -> Self {
        let clamped = raw_score.clamp(0.0, max_score as f64);
        let score = clamped.round() as u32;
        let percentage = if max_score == 0 {
            0
        } else {
            (score as f64 / max_score as f64 * 100.0).round() as u32
        };
        Self {
            name: name.into(),
            score,
            max_score,
            percentage,
            findings,
            suggestions,
        }
    }
}

/// Full scoring outcome for one document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringResult {
    /// The seven criterion results in rubric order.
    pub criteria: Vec<CriterionResult>,
    /// Sum of the rounded per-criterion scores. In 0..=100.
    pub total_score: u32,
    pub grade: Grade,
    /// Narrative line, plus a weak-area line when any criterion
    /// falls under the improvement threshold.
    pub feedback: Vec<String>,
    /// The scored document, kept for report headers.
    pub document: Document,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grade_bands_are_exact() {
        assert_eq!(Grade::from_score(80), Grade::A);
        assert_eq!(Grade::from_score(79), Grade::B);
        assert_eq!(Grade::from_score(70), Grade::B);
        assert_eq!(Grade::from_score(69), Grade::C);
        assert_eq!(Grade::from_score(60), Grade::C);
        assert_eq!(Grade::from_score(59), Grade::D);
        assert_eq!(Grade::from_score(50), Grade::D);
        assert_eq!(Grade::from_score(49), Grade::F);
        assert_eq!(Grade::from_score(0), Grade::F);
        assert_eq!(Grade::from_score(100), Grade::A);
    }

    #[test]
    fn criterion_result_rounds_and_clamps() {
        let r = CriterionResult::new("Test", 12.6, 20, vec![], vec![]);
        assert_eq!(r.score, 13);
        assert_eq!(r.percentage, 65);

        let over = CriterionResult::new("Test", 25.0, 20, vec![], vec![]);
        assert_eq!(over.score, 20);
        assert_eq!(over.percentage, 100);

        let under = CriterionResult::new("Test", -1.0, 20, vec![], vec![]);
        assert_eq!(under.score, 0);
    }

    #[test]
    fn free_form_requires_absent_constraints() {
        let free: Schema = serde_json::from_value(serde_json::json!({"type": "object"})).unwrap();
        assert!(free.is_free_form());
        assert!(!free.is_properly_typed());

        let typed: Schema = serde_json::from_value(serde_json::json!({
            "type": "object",
            "properties": {"id": {"type": "integer"}}
        }))
        .unwrap();
        assert!(typed.is_properly_typed());
        assert!(!typed.is_free_form());

        let open: Schema = serde_json::from_value(serde_json::json!({
            "type": "object",
            "additionalProperties": true
        }))
        .unwrap();
        assert!(!open.is_free_form());
    }
}
