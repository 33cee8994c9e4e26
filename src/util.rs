use fxhash::FxHashMap;
use std::borrow::Cow;
use std::hash::Hash;

/// Build a mapping from elements of the given slice to their respective indices.
///
/// **Warning:** Duplicates are not detected or handled in any way, they are just overwritten
/// (i.e. the last occurrence wins).
pub fn build_index_map<T, F, R>(keys: &[T], transform_index: F) -> FxHashMap<T, R>
where
    F: Fn(&T, usize) -> R,
    T: Clone + Hash + PartialEq + Eq,
{
    let mut result = FxHashMap::default();
    for (i, item) in keys.iter().enumerate() {
        result.insert(item.clone(), transform_index(item, i));
    }
    result
}

/// Format a floating point number using the shortest decimal representation which
/// parses back to the same value.
///
/// Numbers with a decimal exponent in `[-4, 16)` use positional notation and always
/// carry a fractional part (`1.0`, `0.0001`), other numbers use scientific notation
/// with a signed, at least two-digit exponent (`1e-05`, `2.5e+16`). This is the
/// notation used by the reference BEELINE inputs, so the files can be compared textually.
pub fn format_decimal(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    let sign = if value.is_sign_negative() { "-" } else { "" };
    if value == 0.0 {
        return format!("{}0.0", sign);
    }

    // `{:e}` gives the shortest round-trip digits, e.g. `1.2345e-5`.
    let scientific = format!("{:e}", value.abs());
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();

    if !(-4..16).contains(&exponent) {
        let (head, tail) = digits.split_at(1);
        let exp_sign = if exponent < 0 { '-' } else { '+' };
        return if tail.is_empty() {
            format!("{}{}e{}{:02}", sign, head, exp_sign, exponent.abs())
        } else {
            format!("{}{}.{}e{}{:02}", sign, head, tail, exp_sign, exponent.abs())
        };
    }

    if exponent < 0 {
        let zeros = "0".repeat((-exponent - 1) as usize);
        format!("{}0.{}{}", sign, zeros, digits)
    } else {
        let int_len = (exponent + 1) as usize;
        if digits.len() <= int_len {
            let padding = "0".repeat(int_len - digits.len());
            format!("{}{}{}.0", sign, digits, padding)
        } else {
            let (int_part, frac_part) = digits.split_at(int_len);
            format!("{}{}.{}", sign, int_part, frac_part)
        }
    }
}

/// Quote a field of a delimited file if it contains the separator, a quote or a line break.
/// Inner quotes are doubled.
pub fn quote_field(field: &str, separator: char) -> Cow<'_, str> {
    let needs_quotes = field
        .chars()
        .any(|c| c == separator || c == '"' || c == '\n' || c == '\r');
    if needs_quotes {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

/// Split one line of a delimited file into fields, honouring quotes written
/// by [quote_field].
pub fn split_record(line: &str, separator: char) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();
    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                current.push(c);
            }
        } else if c == '"' {
            in_quotes = true;
        } else if c == separator {
            fields.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }
    fields.push(current);
    fields
}

#[cfg(test)]
mod tests {
    use crate::util::{build_index_map, format_decimal, quote_field, split_record};
    use pretty_assertions::assert_eq;

    #[test]
    fn index_map_last_duplicate_wins() {
        let keys = vec!["a".to_string(), "b".to_string(), "a".to_string()];
        let map = build_index_map(&keys, |_, i| i);
        assert_eq!(2, map.len());
        assert_eq!(2, map["a"]);
        assert_eq!(1, map["b"]);
    }

    #[test]
    fn decimal_positional_notation() {
        assert_eq!("0.0", format_decimal(0.0));
        assert_eq!("-0.0", format_decimal(-0.0));
        assert_eq!("1.0", format_decimal(1.0));
        assert_eq!("0.5", format_decimal(0.5));
        assert_eq!("-2.25", format_decimal(-2.25));
        assert_eq!("150.0", format_decimal(150.0));
        assert_eq!("12.345", format_decimal(12.345));
        assert_eq!("0.1", format_decimal(0.1));
        assert_eq!("0.0001", format_decimal(0.0001));
        assert_eq!("0.00012", format_decimal(0.00012));
        assert_eq!("0.7355149670829628", format_decimal(0.7355149670829628));
        assert_eq!("1234567890123456.0", format_decimal(1234567890123456.0));
    }

    #[test]
    fn decimal_scientific_notation() {
        assert_eq!("1e-05", format_decimal(0.00001));
        assert_eq!("1.5e-07", format_decimal(1.5e-7));
        assert_eq!("-3.25e-10", format_decimal(-3.25e-10));
        assert_eq!("1e+16", format_decimal(1e16));
        assert_eq!("2.5e+100", format_decimal(2.5e100));
    }

    #[test]
    fn decimal_special_values() {
        assert_eq!("nan", format_decimal(f64::NAN));
        assert_eq!("inf", format_decimal(f64::INFINITY));
        assert_eq!("-inf", format_decimal(f64::NEG_INFINITY));
    }

    #[test]
    fn quoting_is_minimal() {
        assert_eq!("G1", quote_field("G1", ','));
        assert_eq!("G1,2", quote_field("G1,2", '\t'));
        assert_eq!("\"G1,2\"", quote_field("G1,2", ','));
        assert_eq!("\"say \"\"hi\"\"\"", quote_field("say \"hi\"", ','));
    }

    #[test]
    fn split_record_with_quotes() {
        assert_eq!(vec!["", "Cell_0", "Cell_1"], split_record(",Cell_0,Cell_1", ','));
        assert_eq!(
            vec!["G1,2", "0.5", "say \"hi\""],
            split_record("\"G1,2\",0.5,\"say \"\"hi\"\"\"", ',')
        );
        assert_eq!(vec!["a", "b", "c"], split_record("a\tb\tc", '\t'));
    }
}
