//! Cell classification: explicit dispatch or heuristic interpretation.

use sheets_model::{ColumnType, CurrencyCode};

use crate::normalization::date::normalize_date;
use crate::normalization::money::{has_currency_symbol, normalize_currency};
use crate::normalization::numeric::normalize_number;

/// Classify one cell and render its canonical representation.
///
/// Empty or whitespace-only input yields `""` regardless of hint. With an
/// explicit `hint` the matching normalizer runs directly, degrading to the
/// trimmed original when it does not recognize the value. Without a hint
/// the heuristic interpreter chain runs instead.
///
/// `currency` only matters for [`ColumnType::Currency`]; it defaults to
/// the Brazilian real.
pub fn classify(raw: &str, hint: Option<ColumnType>, currency: Option<CurrencyCode>) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    match hint {
        Some(ColumnType::Date) => {
            normalize_date(trimmed).unwrap_or_else(|| trimmed.to_string())
        }
        Some(ColumnType::Currency) => normalize_currency(trimmed, currency.unwrap_or_default())
            .unwrap_or_else(|| trimmed.to_string()),
        Some(ColumnType::Email) => trimmed.to_lowercase(),
        Some(ColumnType::Phone) | Some(ColumnType::Text) => trimmed.to_string(),
        None => classify_heuristic(trimmed),
    }
}

/// Fallible interpreter: `Some` when the rule recognized the value.
type Interpreter = fn(&str) -> Option<String>;

/// Ordered interpreter chain for hint-less cells.
///
/// Date runs before Currency and Number because date patterns have fixed
/// digit-group widths and separators, so they are the least likely to
/// false-positive on a bare numeric string. The first interpreter whose
/// output differs from the trimmed input wins.
const INTERPRETERS: &[Interpreter] = &[interpret_date, interpret_currency, interpret_number];

fn classify_heuristic(trimmed: &str) -> String {
    for interpret in INTERPRETERS {
        if let Some(formatted) = interpret(trimmed) {
            if formatted != trimmed {
                return formatted;
            }
        }
    }
    trimmed.to_string()
}

fn interpret_date(value: &str) -> Option<String> {
    normalize_date(value)
}

/// Gated on a currency symbol so that bare numeric strings fall through to
/// the Number interpreter.
fn interpret_currency(value: &str) -> Option<String> {
    if !has_currency_symbol(value) {
        return None;
    }
    normalize_currency(value, CurrencyCode::default())
}

fn interpret_number(value: &str) -> Option<String> {
    normalize_number(value)
}
