//! Parsing of `--column NAME[:TYPE[:CURRENCY]]` arguments.

use sheets_model::{ColumnRequest, ColumnSpec, ColumnType, CurrencyCode};

/// Parse one `--column` value.
///
/// A bare name keeps the column as Text. `NAME:TYPE` applies a type, and
/// `NAME:currency:CODE` additionally sets the render currency.
pub fn parse_column_arg(arg: &str) -> Result<ColumnRequest, String> {
    let mut parts = arg.splitn(3, ':');
    let name = parts.next().unwrap_or_default();
    if name.is_empty() {
        return Err("column name must not be empty".to_string());
    }

    let Some(type_part) = parts.next() else {
        return Ok(ColumnRequest::Name(name.to_string()));
    };
    let column_type: ColumnType = type_part.parse()?;

    let currency = match parts.next() {
        Some(code) => {
            if column_type != ColumnType::Currency {
                return Err(format!(
                    "currency code only applies to currency columns, not {type_part}"
                ));
            }
            Some(code.parse::<CurrencyCode>()?)
        }
        None => None,
    };

    Ok(ColumnRequest::Spec(ColumnSpec {
        name: name.to_string(),
        column_type,
        currency,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_name() {
        assert_eq!(
            parse_column_arg("Nome").expect("parse"),
            ColumnRequest::Name("Nome".to_string())
        );
    }

    #[test]
    fn typed_column() {
        let request = parse_column_arg("Nascimento:date").expect("parse");
        assert_eq!(
            request.clone().into_spec().column_type,
            ColumnType::Date
        );
        assert_eq!(request.name(), "Nascimento");
    }

    #[test]
    fn currency_with_code() {
        let spec = parse_column_arg("Total:currency:EUR")
            .expect("parse")
            .into_spec();
        assert_eq!(spec.column_type, ColumnType::Currency);
        assert_eq!(spec.currency, Some(CurrencyCode::Eur));
    }

    #[test]
    fn rejects_misuse() {
        assert!(parse_column_arg("").is_err());
        assert!(parse_column_arg("Total:bogus").is_err());
        assert!(parse_column_arg("Nascimento:date:EUR").is_err());
        assert!(parse_column_arg("Total:currency:XYZ").is_err());
    }
}
