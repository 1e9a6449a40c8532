//! Raw scanner export shapes.
//!
//! These mirror the JSON the two scanners emit, tolerantly: any field a
//! record may legally omit is `Option` or defaulted, and required-field
//! enforcement happens in the normalizer where failures can name the
//! offending record. Unknown fields are ignored.

use serde::{Deserialize, Serialize};

/// Top-level export from the container/image vulnerability scanner.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageScanExport {
    /// Scanned artifact reference (e.g. "registry/app:1.4.2").
    #[serde(default)]
    pub artifact: Option<String>,

    /// Export creation timestamp, passed through as-is.
    #[serde(default)]
    pub generated_at: Option<String>,

    #[serde(default)]
    pub vulnerabilities: Vec<RawImageVulnerability>,
}

/// One vulnerability record from the image scanner.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawImageVulnerability {
    /// Advisory identifier (e.g. "CVE-2023-0464").
    #[serde(default)]
    pub id: Option<String>,

    /// Short issue name. Some exports label this field `name`.
    #[serde(default, alias = "name")]
    pub title: Option<String>,

    #[serde(default)]
    pub description: String,

    /// Native severity token (e.g. "CRITICAL", "medium", "UNKNOWN").
    #[serde(default)]
    pub severity: Option<String>,

    /// CVSS-like score. Arrives as a number or a numeric string depending
    /// on the exporter version; non-numeric text degrades to absent.
    #[serde(
        default,
        alias = "score",
        deserialize_with = "deserialize_lenient_score"
    )]
    pub cvss_score: Option<f64>,

    /// Affected package name.
    #[serde(default)]
    pub package_name: Option<String>,

    #[serde(default)]
    pub installed_version: Option<String>,

    /// Version that resolves the issue, when one exists.
    #[serde(default)]
    pub fixed_version: Option<String>,

    /// Explicit fix text; absent in most exports.
    #[serde(default)]
    pub remediation: Option<String>,

    #[serde(default)]
    pub references: Vec<String>,
}

/// Accepts a JSON number or a numeric string for the score field.
fn deserialize_lenient_score<'de, D>(deserializer: D) -> std::result::Result<Option<f64>, D::Error>
where
    D: serde::de::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum ScoreValue {
        Number(f64),
        Text(String),
        Null,
    }

    match ScoreValue::deserialize(deserializer)? {
        ScoreValue::Number(n) => Ok(Some(n)),
        ScoreValue::Text(s) => Ok(s.trim().parse::<f64>().ok().filter(|v| v.is_finite())),
        ScoreValue::Null => Ok(None),
    }
}

/// Top-level export from the dynamic web-application scanner.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DynamicScanExport {
    #[serde(default)]
    pub scan_id: Option<String>,

    #[serde(default)]
    pub timestamp: Option<String>,

    #[serde(default)]
    pub alerts: Vec<RawDynamicAlert>,
    // The export also carries a precomputed `summary` block; we recompute
    // statistics from normalized findings and ignore it.
}

/// One alert from the dynamic scanner.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDynamicAlert {
    /// Alert identifier. Exporters variously call this `id`, `alertRef`,
    /// or `pluginId`, and sometimes emit it as a bare number.
    #[serde(
        default,
        alias = "alertRef",
        alias = "pluginId",
        deserialize_with = "deserialize_lenient_id"
    )]
    pub id: Option<String>,

    /// Short issue name ("SQL Injection").
    #[serde(default)]
    pub name: Option<String>,

    /// Native risk token (e.g. "High", "Informational").
    #[serde(default)]
    pub risk: Option<String>,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub solution: Option<String>,

    /// Concrete occurrences of the alert.
    #[serde(default)]
    pub instances: Vec<RawAlertInstance>,

    /// Either a proper list or one newline/markup-separated text block.
    #[serde(default)]
    pub references: RawReferences,
}

/// One occurrence of a dynamic-scan alert.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAlertInstance {
    /// Location the alert fired on. Some exporters label this `uri`.
    #[serde(default, alias = "uri")]
    pub url: Option<String>,

    #[serde(default)]
    pub method: Option<String>,

    #[serde(default)]
    pub evidence: Option<String>,
}

/// Citation list as emitted by the dynamic scanner: either a JSON array
/// (one string per citation) or a single text block the exporter joined
/// with newlines or `<p>` markup.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawReferences {
    List(Vec<String>),
    Block(String),
}

impl Default for RawReferences {
    fn default() -> Self {
        RawReferences::List(Vec::new())
    }
}

/// Accepts a JSON string or a bare number for the alert id.
fn deserialize_lenient_id<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<String>, D::Error>
where
    D: serde::de::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum IdValue {
        Text(String),
        Number(i64),
        Null,
    }

    match IdValue::deserialize(deserializer)? {
        IdValue::Text(s) => Ok(Some(s)),
        IdValue::Number(n) => Ok(Some(n.to_string())),
        IdValue::Null => Ok(None),
    }
}
