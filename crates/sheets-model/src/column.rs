//! Column selection and typing requests.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How a column's cells should be normalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    /// Pass-through: trim only.
    #[default]
    Text,
    /// Monetary amount rendered with grouping, two decimals, and a symbol.
    Currency,
    /// Phone number; kept verbatim apart from trimming.
    Phone,
    /// E-mail address; trimmed and lowercased.
    Email,
    /// Calendar date rendered as DD/MM/YYYY.
    Date,
}

impl FromStr for ColumnType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" | "string" => Ok(Self::Text),
            "currency" => Ok(Self::Currency),
            "phone" | "telephone" => Ok(Self::Phone),
            "email" => Ok(Self::Email),
            "date" => Ok(Self::Date),
            other => Err(format!("unknown column type: {other}")),
        }
    }
}

/// ISO 4217 code of a supported render currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CurrencyCode {
    /// Brazilian real. The default target currency.
    #[default]
    Brl,
    /// US dollar.
    Usd,
    /// Euro.
    Eur,
}

impl CurrencyCode {
    /// Symbol prefixed to rendered amounts.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Brl => "R$",
            Self::Usd => "$",
            Self::Eur => "€",
        }
    }
}

impl FromStr for CurrencyCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "BRL" => Ok(Self::Brl),
            "USD" => Ok(Self::Usd),
            "EUR" => Ok(Self::Eur),
            other => Err(format!("unknown currency code: {other}")),
        }
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            Self::Brl => "BRL",
            Self::Usd => "USD",
            Self::Eur => "EUR",
        };
        f.write_str(code)
    }
}

/// A fully resolved column definition.
///
/// Identity is by `name`, matched exactly and case-sensitively against a
/// header cell. `currency` is meaningful only when `column_type` is
/// [`ColumnType::Currency`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSpec {
    pub name: String,
    #[serde(rename = "type", default)]
    pub column_type: ColumnType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<CurrencyCode>,
}

impl ColumnSpec {
    pub fn text(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            column_type: ColumnType::Text,
            currency: None,
        }
    }

    pub fn typed(name: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            column_type,
            currency: None,
        }
    }

    pub fn currency(name: impl Into<String>, currency: CurrencyCode) -> Self {
        Self {
            name: name.into(),
            column_type: ColumnType::Currency,
            currency: Some(currency),
        }
    }
}

/// Caller input for one requested column: either a bare header name
/// (implying [`ColumnType::Text`]) or a full [`ColumnSpec`].
///
/// Untagged so that a JSON request of `["A", {"name": "B", "type": "date"}]`
/// deserializes directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColumnRequest {
    Name(String),
    Spec(ColumnSpec),
}

impl ColumnRequest {
    /// Normalize to a full spec; bare names become Text columns.
    #[must_use]
    pub fn into_spec(self) -> ColumnSpec {
        match self {
            Self::Name(name) => ColumnSpec::text(name),
            Self::Spec(spec) => spec,
        }
    }

    /// The requested header name, without normalizing.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Name(name) => name,
            Self::Spec(spec) => &spec.name,
        }
    }
}

impl From<&str> for ColumnRequest {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<ColumnSpec> for ColumnRequest {
    fn from(spec: ColumnSpec) -> Self {
        Self::Spec(spec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_name_deserializes_as_text_request() {
        let requests: Vec<ColumnRequest> =
            serde_json::from_str(r#"["Nome", {"name": "Total", "type": "currency", "currency": "EUR"}]"#)
                .expect("deserialize requests");

        assert_eq!(requests[0].clone().into_spec(), ColumnSpec::text("Nome"));
        let spec = requests[1].clone().into_spec();
        assert_eq!(spec.column_type, ColumnType::Currency);
        assert_eq!(spec.currency, Some(CurrencyCode::Eur));
    }

    #[test]
    fn column_type_parses_aliases() {
        assert_eq!("telephone".parse::<ColumnType>(), Ok(ColumnType::Phone));
        assert_eq!("string".parse::<ColumnType>(), Ok(ColumnType::Text));
        assert_eq!("DATE".parse::<ColumnType>(), Ok(ColumnType::Date));
        assert!("bogus".parse::<ColumnType>().is_err());
    }

    #[test]
    fn currency_code_symbols() {
        assert_eq!(CurrencyCode::Brl.symbol(), "R$");
        assert_eq!(CurrencyCode::Usd.symbol(), "$");
        assert_eq!(CurrencyCode::Eur.symbol(), "€");
    }
}
