use std::collections::HashSet;

use shortcon_core::{ConError, ConResult};

/// Splits every part on whitespace and flattens the pieces in order.
///
/// `["KING QUEEN", "ROOK"]` and `["KING", "QUEEN ROOK"]` both yield
/// `["KING", "QUEEN", "ROOK"]`.
pub fn split_names<I, S>(parts: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    parts
        .into_iter()
        .flat_map(|part| {
            part.as_ref()
                .split_whitespace()
                .map(str::to_owned)
                .collect::<Vec<_>>()
        })
        .collect()
}

/// Returns whether `name` can be used as a field name: a letter or `_`
/// followed by letters, digits, or `_`.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first == '_' || first.is_alphabetic() => {
            chars.all(|c| c == '_' || c.is_alphanumeric())
        }
        _ => false,
    }
}

/// Checks that every name is identifier-like and unique.
pub(crate) fn validate_names(names: &[String]) -> ConResult<()> {
    let mut seen = HashSet::with_capacity(names.len());
    for (index, name) in names.iter().enumerate() {
        if !is_identifier(name) {
            return Err(ConError::invalid_name(name, index));
        }
        if !seen.insert(name.as_str()) {
            return Err(ConError::duplicate_name(name, index));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers() {
        assert!(is_identifier("KING"));
        assert!(is_identifier("_private"));
        assert!(is_identifier("x1"));
        assert!(is_identifier("été"));
        assert!(!is_identifier(""));
        assert!(!is_identifier("1x"));
        assert!(!is_identifier("a-b"));
        assert!(!is_identifier("a b"));
        assert!(is_identifier("class"));
    }

    #[test]
    fn split_flattens_in_order() {
        let names = split_names(["  A B\tC ", "", "D\nE"]);
        assert_eq!(names, ["A", "B", "C", "D", "E"]);
    }

    #[test]
    fn duplicate_reports_second_position() {
        let names: Vec<String> = ["A", "B", "A"].iter().map(|s| s.to_string()).collect();
        let err = validate_names(&names).unwrap_err();
        assert_eq!(err.code(), "duplicate-name");
        assert_eq!(err.info().context["index"], 2);
    }
}
