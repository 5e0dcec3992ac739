use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::errors::Error;

/// Name used for the contract and its single source file when the explorer
/// does not report one.
pub const DEFAULT_CONTRACT_NAME: &str = "Contract";

/// A single `getsourcecode` result as returned by Etherscan-style explorers.
/// https://docs.etherscan.io/api-endpoints/contracts#get-contract-source-code-for-verified-contract-source-codes
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ContractMetadataRecord {
    #[serde(default)]
    pub source_code: String,
    #[serde(default)]
    pub contract_name: Option<String>,
    #[serde(default)]
    pub compiler_version: Option<String>,
    #[serde(default)]
    pub optimization_used: Option<String>,
    #[serde(default)]
    pub runs: Option<String>,
    #[serde(default)]
    pub license_type: Option<String>,
    #[serde(default)]
    pub proxy: Option<String>,
    #[serde(default)]
    pub implementation: Option<String>,
}

impl ContractMetadataRecord {
    pub fn new(source_code: impl Into<String>, contract_name: Option<&str>) -> Self {
        Self {
            source_code: source_code.into(),
            contract_name: contract_name.map(str::to_owned),
            ..Default::default()
        }
    }

    /// The reported contract name, or [`DEFAULT_CONTRACT_NAME`] when it is
    /// missing or empty.
    pub fn contract_name(&self) -> &str {
        match self.contract_name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => DEFAULT_CONTRACT_NAME,
        }
    }
}

/// Relative file path to file content, in the order the explorer listed them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SourceFileMap(IndexMap<String, String>);

impl SourceFileMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: impl Into<String>, content: impl Into<String>) {
        self.0.insert(path.into(), content.into());
    }

    pub fn get(&self, path: &str) -> Option<&str> {
        self.0.get(path).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(path, content)| (path.as_str(), content.as_str()))
    }
}

impl<P: Into<String>, C: Into<String>> FromIterator<(P, C)> for SourceFileMap {
    fn from_iter<I: IntoIterator<Item = (P, C)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(path, content)| (path.into(), content.into()))
                .collect(),
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PayloadFormat {
    /// Plain source text, stored as `<ContractName>.sol`.
    SingleFile,
    /// Standard JSON input with a `sources` object.
    StandardJsonInput,
    /// A bare `path -> {content}` object without the surrounding input.
    SourcesObject,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedSourcePayload {
    pub format: PayloadFormat,
    /// Whether the JSON was wrapped in an extra pair of braces.
    pub double_braced: bool,
    pub files: SourceFileMap,
}

/// Turns the `SourceCode` field of a metadata record into a set of files.
///
/// JSON payloads that fail to parse are not an error: some verified
/// contracts start with `{` without being JSON, so they are stored as a
/// single file holding the untouched original text.
pub fn parse(record: &ContractMetadataRecord) -> Result<ParsedSourcePayload, Error> {
    let raw = record.source_code.as_str();
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(Error::EmptySource);
    }

    let json_payload = if trimmed.starts_with('{') {
        parse_json_payload(trimmed)?
    } else {
        None
    };

    let payload = json_payload.unwrap_or_else(|| {
        let file_name = format!("{}.sol", record.contract_name());
        ParsedSourcePayload {
            format: PayloadFormat::SingleFile,
            double_braced: false,
            files: SourceFileMap::from_iter([(file_name, raw)]),
        }
    });

    if payload.files.is_empty() {
        return Err(Error::EmptySources);
    }

    debug!(
        format = ?payload.format,
        double_braced = payload.double_braced,
        files = payload.files.len(),
        "Parsed contract source code"
    );
    Ok(payload)
}

/// Returns `Ok(None)` when `text` is not valid JSON.
fn parse_json_payload(text: &str) -> Result<Option<ParsedSourcePayload>, Error> {
    let (json, double_braced) = match strip_double_braces(text) {
        Some(inner) => (inner, true),
        None => (text, false),
    };

    let mut object: Map<String, Value> = match serde_json::from_str(json) {
        Ok(object) => object,
        Err(err) => {
            warn!(%err, "Source code starts with a brace but is not JSON, saving it as a single file");
            return Ok(None);
        }
    };

    let has_sources = object.get("sources").is_some_and(|sources| !sources.is_null());
    let (format, files) = if has_sources {
        let sources = object.remove("sources").unwrap_or_default();
        (PayloadFormat::StandardJsonInput, source_entries(sources)?)
    } else {
        (PayloadFormat::SourcesObject, source_entries(Value::Object(object))?)
    };

    Ok(Some(ParsedSourcePayload {
        format,
        double_braced,
        files,
    }))
}

fn strip_double_braces(text: &str) -> Option<&str> {
    if text.starts_with("{{") && text.ends_with("}}") {
        text.strip_prefix('{')?.strip_suffix('}')
    } else {
        None
    }
}

fn source_entries(sources: Value) -> Result<SourceFileMap, Error> {
    let Value::Object(entries) = sources else {
        return Err(Error::InvalidSourceEntry {
            path: "sources".to_owned(),
            reason: "expected an object of source files".to_owned(),
        });
    };

    let mut files = SourceFileMap::new();
    for (path, entry) in entries {
        match entry.get("content").and_then(Value::as_str) {
            Some(content) => files.insert(path, content),
            None => {
                return Err(Error::InvalidSourceEntry {
                    path,
                    reason: "missing `content`".to_owned(),
                });
            }
        }
    }
    Ok(files)
}
