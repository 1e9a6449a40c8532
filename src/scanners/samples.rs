//! Built-in sample exports.
//!
//! A deterministic pair of scanner exports for demos and tests, embedded
//! as the same JSON the real scanners emit and parsed through the normal
//! path, so sample mode exercises exactly the code live mode runs.

use async_trait::async_trait;

use super::provider::SnapshotProvider;
use super::snapshot::ScannerSnapshot;
use crate::errors::ScandeckError;
use crate::models::{DynamicScanExport, ImageScanExport};

pub const SAMPLE_IMAGE_EXPORT: &str = r#"{
  "artifact": "registry.example.com/storefront:1.4.2",
  "generatedAt": "2025-11-02T08:41:17Z",
  "vulnerabilities": [
    {
      "id": "CVE-2022-48174",
      "title": "busybox: stack overflow in ash applet",
      "description": "A stack overflow in ash.c allows attackers to execute arbitrary code via a crafted filename.",
      "severity": "CRITICAL",
      "cvssScore": 9.8,
      "packageName": "busybox",
      "installedVersion": "1.35.0-r15",
      "fixedVersion": "1.35.0-r18",
      "references": ["https://nvd.nist.gov/vuln/detail/CVE-2022-48174"]
    },
    {
      "id": "CVE-2023-45853",
      "title": "zlib: integer overflow in MiniZip",
      "description": "MiniZip in zlib has an integer overflow and resultant heap-based buffer overflow in zipOpenNewFileInZip4_64.",
      "severity": "CRITICAL",
      "cvssScore": 9.8,
      "packageName": "zlib",
      "installedVersion": "1.2.13-r0",
      "references": ["https://nvd.nist.gov/vuln/detail/CVE-2023-45853"]
    },
    {
      "id": "CVE-2023-0464",
      "title": "openssl: denial of service via policy constraint checking",
      "description": "Excessive resource use when verifying X.509 policy constraints in certificate chains.",
      "severity": "HIGH",
      "cvssScore": 7.5,
      "packageName": "libssl3",
      "installedVersion": "3.0.8-r0",
      "fixedVersion": "3.0.8-r1",
      "references": [
        "https://nvd.nist.gov/vuln/detail/CVE-2023-0464",
        "https://www.openssl.org/news/secadv/20230322.txt"
      ]
    },
    {
      "id": "CVE-2023-5363",
      "title": "openssl: incorrect cipher key and IV length processing",
      "description": "A truncated IV can be processed when certain key and IV lengths are set after cipher initialisation.",
      "severity": "HIGH",
      "cvssScore": 7.5,
      "packageName": "libcrypto3",
      "installedVersion": "3.1.3-r0",
      "fixedVersion": "3.1.4-r0",
      "references": ["https://nvd.nist.gov/vuln/detail/CVE-2023-5363"]
    },
    {
      "id": "CVE-2023-2650",
      "title": "openssl: possible DoS translating ASN.1 object identifiers",
      "description": "Processing a very long OBJECT IDENTIFIER in OBJ_obj2txt may take a very long time.",
      "severity": "MEDIUM",
      "cvssScore": 6.5,
      "packageName": "libssl3",
      "installedVersion": "3.0.8-r0",
      "fixedVersion": "3.0.9-r0",
      "references": ["https://nvd.nist.gov/vuln/detail/CVE-2023-2650"]
    },
    {
      "id": "CVE-2023-42363",
      "title": "busybox: use-after-free in awk",
      "description": "A use-after-free in awk evaluate_variable may be triggered by a crafted pattern.",
      "severity": "LOW",
      "cvssScore": 3.3,
      "packageName": "busybox",
      "installedVersion": "1.35.0-r15",
      "references": ["https://nvd.nist.gov/vuln/detail/CVE-2023-42363"]
    },
    {
      "id": "CVE-2024-2511",
      "title": "openssl: unbounded session cache growth",
      "description": "Session cache entries may grow without bound under TLSv1.3 with early data; not yet rated.",
      "severity": "UNKNOWN",
      "packageName": "libssl3",
      "installedVersion": "3.0.8-r0",
      "references": ["https://nvd.nist.gov/vuln/detail/CVE-2024-2511"]
    }
  ]
}"#;

pub const SAMPLE_DYNAMIC_EXPORT: &str = r#"{
  "scanId": "zap-2025-1102-0843",
  "timestamp": "2025-11-02T08:43:52Z",
  "alerts": [
    {
      "pluginId": "40018",
      "name": "SQL Injection",
      "risk": "High",
      "description": "SQL injection may be possible: the page results were manipulated via a crafted query parameter.",
      "solution": "Use parameterized queries and validate all user-supplied input server-side.",
      "instances": [
        {"url": "https://shop.example.com/search?q=1", "method": "GET"},
        {"url": "https://shop.example.com/account/orders?id=7", "method": "GET"}
      ],
      "references": "<p>https://owasp.org/www-community/attacks/SQL_Injection</p><p>https://cheatsheetseries.owasp.org/cheatsheets/SQL_Injection_Prevention_Cheat_Sheet.html</p>"
    },
    {
      "pluginId": "40012",
      "name": "Cross Site Scripting (Reflected)",
      "risk": "High",
      "description": "A reflected XSS probe in the search parameter was returned unescaped in the response body.",
      "solution": "Encode all user-controlled output for the HTML context it is rendered into.",
      "instances": [
        {"url": "https://shop.example.com/search?q=%3Cscript%3E", "method": "GET"}
      ],
      "references": ["https://owasp.org/www-community/attacks/xss/"]
    },
    {
      "pluginId": "10038",
      "name": "Content Security Policy (CSP) Header Not Set",
      "risk": "Medium",
      "description": "The response does not declare a Content-Security-Policy header.",
      "solution": "Configure the web server to set a restrictive Content-Security-Policy header.",
      "instances": [
        {"url": "https://shop.example.com/", "method": "GET"},
        {"url": "https://shop.example.com/login", "method": "GET"},
        {"url": "https://shop.example.com/checkout", "method": "GET"}
      ],
      "references": "https://developer.mozilla.org/en-US/docs/Web/HTTP/CSP\nhttps://www.w3.org/TR/CSP/"
    },
    {
      "pluginId": "10011",
      "name": "Cookie Without Secure Flag",
      "risk": "Low",
      "description": "A cookie was set without the Secure flag and can be sent over unencrypted connections.",
      "solution": "Set the Secure attribute on all cookies issued over HTTPS.",
      "instances": [
        {"url": "https://shop.example.com/login", "method": "POST", "evidence": "Set-Cookie: session"}
      ],
      "references": ["https://owasp.org/www-community/controls/SecureCookieAttribute"]
    },
    {
      "pluginId": "10021",
      "name": "X-Content-Type-Options Header Missing",
      "risk": "Low",
      "description": "The anti-MIME-sniffing header X-Content-Type-Options was not set to nosniff.",
      "solution": "Set the X-Content-Type-Options header to nosniff on all responses.",
      "instances": [
        {"url": "https://shop.example.com/assets/app.js", "method": "GET"},
        {"method": "GET"}
      ],
      "references": ["https://developer.mozilla.org/en-US/docs/Web/HTTP/Headers/X-Content-Type-Options"]
    },
    {
      "pluginId": "10027",
      "name": "Information Disclosure - Suspicious Comments",
      "risk": "Informational",
      "description": "The response contains developer comments that may disclose implementation details.",
      "solution": "Strip debug comments from production responses.",
      "instances": [
        {"url": "https://shop.example.com/checkout", "method": "GET"}
      ],
      "references": []
    }
  ],
  "summary": {"high": 2, "medium": 1, "low": 2, "informational": 1}
}"#;

/// Serves the embedded sample exports.
pub struct SampleProvider;

#[async_trait]
impl SnapshotProvider for SampleProvider {
    async fn fetch(&self) -> Result<ScannerSnapshot, ScandeckError> {
        let image: ImageScanExport = serde_json::from_str(SAMPLE_IMAGE_EXPORT)?;
        let dynamic: DynamicScanExport = serde_json::from_str(SAMPLE_DYNAMIC_EXPORT)?;
        Ok(ScannerSnapshot::new(Some(image), Some(dynamic)))
    }

    fn provider_name(&self) -> &str {
        "samples"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_samples_parse_through_the_normal_path() {
        let snapshot = SampleProvider.fetch().await.unwrap();
        assert_eq!(snapshot.image.as_ref().unwrap().vulnerabilities.len(), 7);
        assert_eq!(snapshot.dynamic.as_ref().unwrap().alerts.len(), 6);
    }

    #[tokio::test]
    async fn test_samples_normalize_deterministically() {
        let snapshot = SampleProvider.fetch().await.unwrap();
        let batch = snapshot.normalize(None).unwrap();
        assert_eq!(batch.findings.len(), 13);
        // One sample alert instance deliberately lacks a URL.
        assert_eq!(batch.warnings.skipped_instances, 1);
        assert_eq!(batch.warnings.unknown_severities, 0);
        assert_eq!(batch.warnings.clamped_scores, 0);
    }

    #[tokio::test]
    async fn test_sample_reference_blocks_are_split() {
        let snapshot = SampleProvider.fetch().await.unwrap();
        let batch = snapshot.normalize(None).unwrap();
        let sqli = batch.findings.iter().find(|f| f.id == "40018").unwrap();
        assert_eq!(sqli.references.len(), 2);
        let csp = batch.findings.iter().find(|f| f.id == "10038").unwrap();
        assert_eq!(csp.references.len(), 2);
    }
}
