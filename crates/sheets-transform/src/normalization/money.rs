//! Monetary amount normalization.

use sheets_model::CurrencyCode;

use super::numeric::{format_grouped, parse_flexible, strip_spaces};

/// Symbols stripped from amounts before parsing. Longer symbols first so
/// `US$` is not consumed as a bare `$`.
const SYMBOLS: &[&str] = &["R$", "US$", "$", "€"];

/// True when the value carries a recognizable currency symbol.
///
/// The heuristic interpreter chain uses this as a gate: a bare numeric
/// string without a symbol is a number, not an amount.
pub fn has_currency_symbol(value: &str) -> bool {
    value.contains('$') || value.contains('€')
}

/// Strip leading/trailing currency symbols from an already de-spaced string.
fn strip_symbols(mut cleaned: String) -> String {
    loop {
        let before = cleaned.len();
        for symbol in SYMBOLS {
            if let Some(rest) = cleaned.strip_prefix(symbol) {
                cleaned = rest.to_string();
            }
            if let Some(rest) = cleaned.strip_suffix(symbol) {
                cleaned = rest.to_string();
            }
        }
        if cleaned.len() == before {
            return cleaned;
        }
    }
}

/// Rewrite a monetary amount as `<symbol> 1.234,56`.
///
/// Grouping disambiguation is shared with plain numbers. Negative amounts
/// are not recognized. Returns `None` when the value does not parse.
pub fn normalize_currency(value: &str, code: CurrencyCode) -> Option<String> {
    let cleaned = strip_symbols(strip_spaces(value));
    if cleaned.starts_with('-') {
        return None;
    }
    let parsed = parse_flexible(&cleaned)?;
    Some(format!("{} {}", code.symbol(), format_grouped(parsed, 2)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brazilian_inputs_render_with_real_symbol() {
        assert_eq!(
            normalize_currency("1234,56", CurrencyCode::Brl),
            Some("R$ 1.234,56".to_string())
        );
        assert_eq!(
            normalize_currency("1.234,56", CurrencyCode::Brl),
            Some("R$ 1.234,56".to_string())
        );
        assert_eq!(
            normalize_currency("1.234.567,89", CurrencyCode::Brl),
            Some("R$ 1.234.567,89".to_string())
        );
    }

    #[test]
    fn symbols_and_spaces_are_stripped_before_parsing() {
        assert_eq!(
            normalize_currency("R$ 1 234,56", CurrencyCode::Brl),
            Some("R$ 1.234,56".to_string())
        );
        assert_eq!(
            normalize_currency("US$ 1,234.56", CurrencyCode::Usd),
            Some("$ 1.234,56".to_string())
        );
        assert_eq!(
            normalize_currency("1.234,56€", CurrencyCode::Eur),
            Some("€ 1.234,56".to_string())
        );
    }

    #[test]
    fn amounts_always_carry_two_decimals() {
        assert_eq!(
            normalize_currency("1234", CurrencyCode::Brl),
            Some("R$ 1.234,00".to_string())
        );
    }

    #[test]
    fn unparseable_and_negative_amounts_are_rejected() {
        assert_eq!(normalize_currency("not-currency", CurrencyCode::Brl), None);
        assert_eq!(normalize_currency("-1234,56", CurrencyCode::Brl), None);
        assert_eq!(normalize_currency("", CurrencyCode::Brl), None);
    }

    #[test]
    fn symbol_gate() {
        assert!(has_currency_symbol("R$ 10"));
        assert!(has_currency_symbol("10€"));
        assert!(!has_currency_symbol("1234,56"));
    }
}
