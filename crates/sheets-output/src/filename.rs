//! Filename derivation from a document title.

/// Name used when the source exposes no title.
const DEFAULT_FILENAME: &str = "spreadsheet.csv";

/// Longest sanitized stem kept before the extension is appended.
const MAX_STEM_CHARS: usize = 50;

/// Derive a filesystem-safe `.csv` filename from an optional title.
///
/// Every character outside `[A-Za-z0-9]` becomes `_`, the result is
/// lowercased and truncated to 50 characters. Total and deterministic.
pub fn derive_filename(title: Option<&str>) -> String {
    let Some(title) = title.filter(|t| !t.is_empty()) else {
        return DEFAULT_FILENAME.to_string();
    };

    let stem: String = title
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .take(MAX_STEM_CHARS)
        .collect();

    format!("{stem}.csv")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_every_non_alphanumeric() {
        assert_eq!(
            derive_filename(Some("My/Test*Spreadsheet?")),
            "my_test_spreadsheet_.csv"
        );
        assert_eq!(derive_filename(Some("Relatório 2024")), "relat_rio_2024.csv");
    }

    #[test]
    fn missing_or_empty_title_uses_default() {
        assert_eq!(derive_filename(None), "spreadsheet.csv");
        assert_eq!(derive_filename(Some("")), "spreadsheet.csv");
    }

    #[test]
    fn long_titles_truncate_to_fifty_chars() {
        let title = "A".repeat(100);
        let filename = derive_filename(Some(&title));
        assert_eq!(filename.len(), MAX_STEM_CHARS + ".csv".len());
        assert!(filename.starts_with(&"a".repeat(50)));
    }
}
