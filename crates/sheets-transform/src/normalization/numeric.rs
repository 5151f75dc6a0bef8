//! Flexible numeric parsing and pt-BR rendering.
//!
//! Spreadsheet exports mix Brazilian grouping (`1.234,56`), US grouping
//! (`1,234.56`), and bare decimals (`1234.56`). Parsing disambiguates the
//! three; rendering always uses Brazilian conventions (`.` thousands,
//! `,` decimal).

/// Remove every whitespace character, including non-breaking spaces.
pub(crate) fn strip_spaces(value: &str) -> String {
    value.chars().filter(|c| !c.is_whitespace()).collect()
}

/// True when the string ends with a comma followed by one or two digits,
/// which marks the comma as a Brazilian decimal separator.
fn ends_with_decimal_comma(body: &str) -> bool {
    match body.rfind(',') {
        Some(pos) => {
            let tail = &body[pos + 1..];
            (1..=2).contains(&tail.len()) && tail.bytes().all(|b| b.is_ascii_digit())
        }
        None => false,
    }
}

/// True when the dots form Brazilian thousands grouping with no decimal
/// part: a 1-3 digit leading group followed by 3-digit groups (`1.234`,
/// `1.234.567`).
fn is_dot_grouped(body: &str) -> bool {
    if !body.contains('.') || body.contains(',') {
        return false;
    }
    let mut groups = body.split('.');
    let Some(first) = groups.next() else {
        return false;
    };
    if first.is_empty() || first.len() > 3 || !first.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    groups.all(|g| g.len() == 3 && g.bytes().all(|b| b.is_ascii_digit()))
}

/// Parse a digit/separator string into a number, disambiguating grouping.
///
/// Accepts an optional leading minus sign. Returns `None` for anything that
/// is not purely digits and separators, or whose separators make no sense.
pub(crate) fn parse_flexible(cleaned: &str) -> Option<f64> {
    let (negative, body) = match cleaned.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, cleaned),
    };
    if body.is_empty() || !body.bytes().all(|b| b.is_ascii_digit() || b == b'.' || b == b',') {
        return None;
    }
    // Separators must sit between digits.
    if !body.as_bytes()[0].is_ascii_digit() || !body.as_bytes()[body.len() - 1].is_ascii_digit() {
        return None;
    }

    let canonical = if ends_with_decimal_comma(body) {
        // Brazilian: dots group thousands, the comma is the decimal mark.
        body.replace('.', "").replace(',', ".")
    } else if body.contains(',') {
        // Any other comma groups thousands, US style.
        body.replace(',', "")
    } else if is_dot_grouped(body) {
        body.replace('.', "")
    } else {
        body.to_string()
    };

    let value: f64 = canonical.parse().ok()?;
    Some(if negative { -value } else { value })
}

/// Render a number with Brazilian grouping and the given decimal places.
pub(crate) fn format_grouped(value: f64, decimals: usize) -> String {
    let negative = value < 0.0;
    let rendered = format!("{:.1$}", value.abs(), decimals);
    let (int_part, frac_part) = match rendered.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (rendered.as_str(), None),
    };

    let mut groups: Vec<&str> = Vec::new();
    let mut end = int_part.len();
    while end > 3 {
        groups.push(&int_part[end - 3..end]);
        end -= 3;
    }
    groups.push(&int_part[..end]);
    groups.reverse();

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&groups.join("."));
    if let Some(frac) = frac_part {
        out.push(',');
        out.push_str(frac);
    }
    out
}

/// Rewrite a numeric-looking string in Brazilian convention.
///
/// Integers keep zero decimal places, everything else gets exactly two.
/// Returns `None` when the value does not parse as a number.
pub fn normalize_number(value: &str) -> Option<String> {
    let cleaned = strip_spaces(value);
    let parsed = parse_flexible(&cleaned)?;
    let decimals = if parsed.fract() == 0.0 { 0 } else { 2 };
    Some(format_grouped(parsed, decimals))
}
