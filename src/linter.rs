//! Document linting - static checks of existing JSON documents.
//!
//! Applies the rules the assemblers in this crate guarantee to documents
//! produced elsewhere:
//! - JSON syntax errors
//! - illegal member names (JSON:API documents only)
//! - primary data shape (`data`/`errors` exclusivity, non-empty `errors`)
//! - link values and resource identifiers
//! - home document `resources` entries
//!
//! | Code | Severity | Rule |
//! |------|----------|------|
//! | E001 | error | not valid JSON |
//! | E002 | error | illegal member name |
//! | E003 | error | both `data` and `errors` at the top level |
//! | E004 | error | `errors` is not a non-empty array of objects |
//! | E005 | error | link value is neither a string nor an object with `href` |
//! | E006 | error | resource identifier lacks `type` or `id` |
//! | E007 | error | `included` without `data` |
//! | E008 | error | top level is not an object |
//! | E009 | error | malformed home document resource |
//! | E010 | error | none of `data`, `errors` or `meta` at the top level |
//! | W001 | warning | empty `links` object |
//! | W002 | warning | `null` member in an error object |
//! | W003 | warning | blank `jsonapi.version` |
//! | W004 | warning | home resource relation is neither registered nor a URI |

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::loader::load_document;
use crate::{member_name, relation};

/// Severity level for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// A single diagnostic message from linting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub code: String,
    /// JSON Pointer to the offending member (e.g. "/errors/0/source").
    pub path: String,
    pub message: String,
}

impl Diagnostic {
    fn error(code: &str, path: &str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code: code.to_string(),
            path: display_path(path),
            message: message.into(),
        }
    }

    fn warning(code: &str, path: &str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code: code.to_string(),
            path: display_path(path),
            message: message.into(),
        }
    }
}

/// Result of linting a single file.
#[derive(Debug, Clone, Serialize)]
pub struct FileResult {
    pub file: PathBuf,
    pub status: FileStatus,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub diagnostics: Vec<Diagnostic>,
}

/// Status of a linted file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileStatus {
    Ok,
    Error,
    Warning,
}

impl FileStatus {
    fn of(diagnostics: &[Diagnostic]) -> Self {
        if diagnostics.iter().any(|d| d.severity == Severity::Error) {
            FileStatus::Error
        } else if diagnostics.is_empty() {
            FileStatus::Ok
        } else {
            FileStatus::Warning
        }
    }
}

/// Result of linting a directory or set of files.
#[derive(Debug, Clone, Serialize)]
pub struct LintResult {
    pub path: PathBuf,
    pub files_checked: usize,
    pub passed: usize,
    pub failed: usize,
    pub errors: usize,
    pub warnings: usize,
    pub results: Vec<FileResult>,
}

impl LintResult {
    /// Returns true if all files passed (no errors).
    pub fn is_ok(&self) -> bool {
        self.errors == 0
    }
}

/// Options for linting.
#[derive(Debug, Clone, Default)]
pub struct LintOptions {
    /// Count files with only warnings as failed.
    pub strict: bool,
}

impl LintOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

/// Lint a file or directory.
///
/// If path is a directory, recursively finds all .json files.
/// Returns aggregated results for all files.
pub fn lint(path: &Path, options: &LintOptions) -> LintResult {
    let files = collect_document_files(path);
    let results: Vec<FileResult> = files.iter().map(|file| lint_file(file, path)).collect();

    let count = |severity: Severity| {
        results
            .iter()
            .flat_map(|r| &r.diagnostics)
            .filter(|d| d.severity == severity)
            .count()
    };
    let errors = count(Severity::Error);
    let warnings = count(Severity::Warning);

    let failed = results
        .iter()
        .filter(|r| {
            if options.strict {
                r.status != FileStatus::Ok
            } else {
                r.status == FileStatus::Error
            }
        })
        .count();

    debug!(
        path = %path.display(),
        files = files.len(),
        failed,
        errors,
        warnings,
        "lint finished"
    );

    LintResult {
        path: path.to_path_buf(),
        files_checked: files.len(),
        passed: files.len() - failed,
        failed,
        errors,
        warnings,
        results,
    }
}

/// Lint a single document file.
pub fn lint_file(file: &Path, base_path: &Path) -> FileResult {
    let display = file.strip_prefix(base_path).unwrap_or(file);
    let display = if display.as_os_str().is_empty() {
        file
    } else {
        display
    };

    let diagnostics = match load_document(file) {
        Ok(doc) => lint_value(&doc),
        Err(e) => vec![Diagnostic::error("E001", "", format!("syntax error: {}", e))],
    };

    FileResult {
        file: display.to_path_buf(),
        status: FileStatus::of(&diagnostics),
        diagnostics,
    }
}

/// Lint an in-memory document.
pub fn lint_value(doc: &Value) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    let Some(top) = doc.as_object() else {
        diagnostics.push(Diagnostic::error(
            "E008",
            "",
            format!("top level must be an object, got {}", json_type_name(doc)),
        ));
        return diagnostics;
    };

    // Home document relations may be URIs, so member name rules don't apply.
    if is_home_document(top) {
        check_home_document(top, &mut diagnostics);
    } else {
        check_member_names(doc, "", &mut diagnostics);
        check_top_level(top, &mut diagnostics);
    }
    diagnostics
}

/// Top-level members of which a JSON:API document needs at least one.
const REQUIRED_TOP_LEVEL: [&str; 3] = ["data", "errors", "meta"];

fn is_home_document(top: &Map<String, Value>) -> bool {
    top.contains_key("resources") && !has_required_member(top)
}

fn has_required_member(top: &Map<String, Value>) -> bool {
    REQUIRED_TOP_LEVEL.iter().any(|k| top.contains_key(*k))
}

/// Recursively check every member name.
fn check_member_names(value: &Value, path: &str, diagnostics: &mut Vec<Diagnostic>) {
    match value {
        Value::Object(map) => {
            for (key, val) in map {
                let child_path = child(path, key);
                if !member_name::is_valid(key.as_str()) {
                    diagnostics.push(Diagnostic::error(
                        "E002",
                        &child_path,
                        format!("invalid member name \"{}\"", key),
                    ));
                }
                check_member_names(val, &child_path, diagnostics);
            }
        }
        Value::Array(arr) => {
            for (i, item) in arr.iter().enumerate() {
                check_member_names(item, &child(path, &i.to_string()), diagnostics);
            }
        }
        _ => {}
    }
}

fn check_top_level(top: &Map<String, Value>, diagnostics: &mut Vec<Diagnostic>) {
    let data = top.get("data");
    let errors = top.get("errors");

    if !has_required_member(top) {
        diagnostics.push(Diagnostic::error(
            "E010",
            "",
            "document must contain data, errors or meta",
        ));
    }

    if data.is_some() && errors.is_some() {
        diagnostics.push(Diagnostic::error(
            "E003",
            "",
            "data and errors must not coexist in one document",
        ));
    }

    if let Some(data) = data {
        match data {
            Value::Null => {}
            Value::Array(items) => {
                for (i, item) in items.iter().enumerate() {
                    check_resource(item, &format!("/data/{}", i), diagnostics);
                }
            }
            other => check_resource(other, "/data", diagnostics),
        }
    }

    if let Some(errors) = errors {
        check_errors(errors, diagnostics);
    }

    match top.get("included") {
        Some(_) if data.is_none() => {
            diagnostics.push(Diagnostic::error(
                "E007",
                "/included",
                "included requires top-level data",
            ));
        }
        Some(Value::Array(items)) => {
            for (i, item) in items.iter().enumerate() {
                check_resource(item, &format!("/included/{}", i), diagnostics);
            }
        }
        _ => {}
    }

    if let Some(version) = top
        .get("jsonapi")
        .and_then(|api| api.get("version"))
        .and_then(Value::as_str)
    {
        if version.trim().is_empty() {
            diagnostics.push(Diagnostic::warning(
                "W003",
                "/jsonapi/version",
                "blank version should be omitted",
            ));
        }
    }

    if let Some(links) = top.get("links") {
        check_links(links, "/links", diagnostics);
    }
}

fn check_resource(value: &Value, path: &str, diagnostics: &mut Vec<Diagnostic>) {
    let Some(resource) = value.as_object() else {
        diagnostics.push(Diagnostic::error(
            "E006",
            path,
            format!("resource must be an object, got {}", json_type_name(value)),
        ));
        return;
    };

    match resource.get("type") {
        Some(Value::String(_)) => {}
        Some(other) => diagnostics.push(Diagnostic::error(
            "E006",
            &child(path, "type"),
            format!("type must be a string, got {}", json_type_name(other)),
        )),
        None => diagnostics.push(Diagnostic::error("E006", path, "resource missing type")),
    }
    if !resource.contains_key("id") {
        diagnostics.push(Diagnostic::error("E006", path, "resource missing id"));
    }

    if let Some(links) = resource.get("links") {
        check_links(links, &child(path, "links"), diagnostics);
    }
}

fn check_errors(errors: &Value, diagnostics: &mut Vec<Diagnostic>) {
    let entries = match errors {
        Value::Array(entries) if !entries.is_empty() => entries,
        Value::Array(_) => {
            diagnostics.push(Diagnostic::error(
                "E004",
                "/errors",
                "errors must contain at least one error object",
            ));
            return;
        }
        other => {
            diagnostics.push(Diagnostic::error(
                "E004",
                "/errors",
                format!("errors must be an array, got {}", json_type_name(other)),
            ));
            return;
        }
    };

    for (i, entry) in entries.iter().enumerate() {
        let path = format!("/errors/{}", i);
        let Some(error) = entry.as_object() else {
            diagnostics.push(Diagnostic::error(
                "E004",
                &path,
                format!("error entry must be an object, got {}", json_type_name(entry)),
            ));
            continue;
        };

        for (key, val) in error {
            if val.is_null() {
                diagnostics.push(Diagnostic::warning(
                    "W002",
                    &child(&path, key),
                    format!("null {} should be omitted", key),
                ));
            }
        }

        if let Some(links) = error.get("links") {
            check_links(links, &child(&path, "links"), diagnostics);
        }
    }
}

fn check_links(links: &Value, path: &str, diagnostics: &mut Vec<Diagnostic>) {
    let Some(map) = links.as_object() else {
        if !links.is_null() {
            diagnostics.push(Diagnostic::error(
                "E005",
                path,
                format!("links must be an object, got {}", json_type_name(links)),
            ));
        }
        return;
    };

    if map.is_empty() {
        diagnostics.push(Diagnostic::warning(
            "W001",
            path,
            "empty links object should be omitted",
        ));
    }

    for (name, value) in map {
        let valid = match value {
            Value::String(_) | Value::Null => true,
            Value::Object(link) => matches!(link.get("href"), Some(Value::String(_))),
            _ => false,
        };
        if !valid {
            diagnostics.push(Diagnostic::error(
                "E005",
                &child(path, name),
                format!(
                    "link \"{}\" must be a string or an object with an href, got {}",
                    name,
                    json_type_name(value)
                ),
            ));
        }
    }
}

fn check_home_document(top: &Map<String, Value>, diagnostics: &mut Vec<Diagnostic>) {
    let resources = match top.get("resources") {
        Some(Value::Object(resources)) if !resources.is_empty() => resources,
        _ => {
            diagnostics.push(Diagnostic::error(
                "E009",
                "/resources",
                "resources must be a non-empty object",
            ));
            return;
        }
    };

    for (rel, descriptor) in resources {
        let path = child("/resources", rel);

        if !relation::is_registered(rel) && !looks_like_uri(rel) {
            diagnostics.push(Diagnostic::warning(
                "W004",
                &path,
                format!(
                    "relation \"{}\" is not registered; extension relations should be URIs",
                    rel
                ),
            ));
        }

        let Some(descriptor) = descriptor.as_object() else {
            diagnostics.push(Diagnostic::error(
                "E009",
                &path,
                format!("resource must be an object, got {}", json_type_name(descriptor)),
            ));
            continue;
        };

        let has_href = matches!(descriptor.get("href"), Some(Value::String(_)));
        let has_template = matches!(descriptor.get("hrefTemplate"), Some(Value::String(_)));
        if !has_href && !has_template {
            diagnostics.push(Diagnostic::error(
                "E009",
                &path,
                "resource needs an href or an hrefTemplate",
            ));
        }
        if has_template {
            let vars_ok = matches!(
                descriptor.get("hrefVars"),
                Some(Value::Object(vars)) if !vars.is_empty()
            );
            if !vars_ok {
                diagnostics.push(Diagnostic::error(
                    "E009",
                    &child(&path, "hrefVars"),
                    "hrefTemplate requires a non-empty hrefVars object",
                ));
            }
        }
    }
}

fn looks_like_uri(rel: &str) -> bool {
    match rel.split_once(':') {
        Some((scheme, rest)) => {
            !rest.is_empty()
                && scheme.starts_with(|c: char| c.is_ascii_alphabetic())
                && scheme
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        None => false,
    }
}

/// Returns the JSON type name for diagnostics.
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

/// Append a JSON Pointer segment, escaping `~` and `/`.
fn child(path: &str, segment: &str) -> String {
    format!("{}/{}", path, segment.replace('~', "~0").replace('/', "~1"))
}

fn display_path(path: &str) -> String {
    if path.is_empty() {
        "/".to_string()
    } else {
        path.to_string()
    }
}

/// Collect all .json files in a path (file or directory).
fn collect_document_files(path: &Path) -> Vec<PathBuf> {
    if path.is_file() {
        if path.extension().map(|e| e == "json").unwrap_or(false) {
            return vec![path.to_path_buf()];
        }
        return vec![];
    }

    let mut files = Vec::new();
    collect_files_recursive(path, &mut files);
    files.sort();
    files
}

fn collect_files_recursive(dir: &Path, files: &mut Vec<PathBuf>) {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return;
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_files_recursive(&path, files);
        } else if path.extension().map(|e| e == "json").unwrap_or(false) {
            files.push(path);
        }
    }
}
