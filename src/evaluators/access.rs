//! Traversal helpers over the deeply optional document tree.
//!
//! Every criterion walks the same shape: paths → path item → operation →
//! parameters / request body / responses → media type → schema. The
//! helpers here keep the "if present" branches in one place so the
//! evaluators read as scoring formulas, not null-checking.

use crate::models::{Document, MediaType, Method, Operation};

/// One operation in document order, with its location.
#[derive(Debug, Clone, Copy)]
pub struct OperationRef<'a> {
    pub path: &'a str,
    pub method: Method,
    pub operation: &'a Operation,
}

/// All operations registered under the given methods, path by path.
///
/// Iteration order is deterministic: paths in key order, methods in the
/// order of the `methods` table.
pub fn operations<'a>(
    doc: &'a Document,
    methods: &'a [Method],
) -> impl Iterator<Item = OperationRef<'a>> {
    doc.paths.iter().flat_map(move |(path, item)| {
        methods.iter().filter_map(move |&method| {
            item.operation(method).map(|operation| OperationRef {
                path: path.as_str(),
                method,
                operation,
            })
        })
    })
}

/// Media-type entries of an operation's request body, if it has one.
pub fn request_media_types(op: &Operation) -> impl Iterator<Item = &MediaType> {
    op.request_body
        .iter()
        .flat_map(|body| body.content.values())
}

/// Content maps of the responses that declare one.
pub fn response_contents(
    op: &Operation,
) -> impl Iterator<Item = &std::collections::BTreeMap<String, MediaType>> {
    op.responses.values().filter_map(|resp| resp.content.as_ref())
}

/// Media-type entries across all of an operation's responses.
pub fn response_media_types(op: &Operation) -> impl Iterator<Item = &MediaType> {
    response_contents(op).flat_map(|content| content.values())
}

/// Fraction of `part` in `total`, or 0.0 when the population is empty.
///
/// Empty denominators award nothing: an API with no parameters earns no
/// parameter-description credit.
pub fn ratio(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64
    }
}

/// Pluralize a count in findings text.
pub fn plural(count: usize, singular: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}s", count, singular)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Document;

    fn doc(v: serde_json::Value) -> Document {
        serde_json::from_value(v).unwrap()
    }

    #[test]
    fn operations_iterates_in_fixed_order() {
        let d = doc(serde_json::json!({
            "paths": {
                "/b": {"post": {}, "get": {}},
                "/a": {"delete": {}}
            }
        }));
        let seen: Vec<(String, Method)> = operations(&d, &Method::PRIMARY)
            .map(|r| (r.path.to_string(), r.method))
            .collect();
        assert_eq!(
            seen,
            vec![
                ("/a".to_string(), Method::Delete),
                ("/b".to_string(), Method::Get),
                ("/b".to_string(), Method::Post),
            ]
        );
    }

    #[test]
    fn ratio_of_empty_population_is_zero() {
        assert_eq!(ratio(0, 0), 0.0);
        assert_eq!(ratio(3, 4), 0.75);
    }

    #[test]
    fn request_media_types_absent_body_is_empty() {
        let d = doc(serde_json::json!({
            "paths": {"/x": {"get": {}}}
        }));
        let op = operations(&d, &Method::PRIMARY).next().unwrap().operation;
        assert_eq!(request_media_types(op).count(), 0);
    }
}
