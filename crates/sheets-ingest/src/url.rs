//! Spreadsheet URL validation and id extraction.

use crate::error::IngestError;

/// Markers the document id can follow, most specific first.
const ID_MARKERS: &[&str] = &["/spreadsheets/d/", "/d/", "id="];

/// Longest run of id characters (`[A-Za-z0-9_-]`) after `marker`.
fn id_after<'a>(url: &'a str, marker: &str) -> Option<&'a str> {
    let start = url.find(marker)? + marker.len();
    let rest = &url[start..];
    let end = rest
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '-' || c == '_'))
        .unwrap_or(rest.len());
    (end > 0).then(|| &rest[..end])
}

/// Extract the document id from a sharing URL.
///
/// # Errors
///
/// Returns [`IngestError::InvalidUrl`] when no id pattern matches.
pub fn extract_spreadsheet_id(url: &str) -> Result<&str, IngestError> {
    ID_MARKERS
        .iter()
        .find_map(|marker| id_after(url, marker))
        .ok_or_else(|| IngestError::InvalidUrl(url.to_string()))
}

/// Whether the URL plausibly points at a public Google Sheets document.
pub fn is_valid_sheets_url(url: &str) -> bool {
    let Ok(parsed) = reqwest::Url::parse(url) else {
        return false;
    };
    parsed
        .host_str()
        .is_some_and(|host| host.contains("google.com"))
        && (parsed.path().contains("/spreadsheets/")
            || parsed.query_pairs().any(|(key, _)| key == "id"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_id_from_sharing_url() {
        let url = "https://docs.google.com/spreadsheets/d/1AbC-dEf_G/edit#gid=0";
        assert_eq!(extract_spreadsheet_id(url).expect("id"), "1AbC-dEf_G");
    }

    #[test]
    fn extracts_id_from_short_and_query_forms() {
        assert_eq!(
            extract_spreadsheet_id("https://docs.google.com/d/xyz123/view").expect("id"),
            "xyz123"
        );
        assert_eq!(
            extract_spreadsheet_id("https://docs.google.com/open?id=abc_DEF-9").expect("id"),
            "abc_DEF-9"
        );
    }

    #[test]
    fn missing_id_is_an_error() {
        let result = extract_spreadsheet_id("https://docs.google.com/spreadsheets/");
        assert!(matches!(result, Err(IngestError::InvalidUrl(_))));
    }

    #[test]
    fn validates_host_and_path() {
        assert!(is_valid_sheets_url(
            "https://docs.google.com/spreadsheets/d/abc/edit"
        ));
        assert!(is_valid_sheets_url("https://drive.google.com/open?id=abc"));
        assert!(!is_valid_sheets_url("https://example.com/spreadsheets/d/abc"));
        assert!(!is_valid_sheets_url("not a url"));
    }
}
