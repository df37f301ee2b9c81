//! Closed placeholder template rendering
//!
//! Trigger SQL is rendered by substituting `{Name}` tokens against a closed
//! set of values. Substitution is all-or-nothing: a token with no value
//! fails the whole render, so a partially substituted line can never reach a
//! command sink or, worse, persisted migration history. Unknown tokens are
//! errors for the same reason; nothing is skipped silently.

use std::collections::BTreeMap;

use trilha_common::AuditError;

/// Placeholder values for one render, keyed by token name
pub type Placeholders = BTreeMap<String, String>;

/// Render a multi-line template into its output lines, in input order.
pub fn render(template: &str, values: &Placeholders) -> Result<Vec<String>, AuditError> {
    template
        .lines()
        .map(|line| substitute(line, values))
        .collect()
}

fn substitute(line: &str, values: &Placeholders) -> Result<String, AuditError> {
    let mut out = String::with_capacity(line.len());
    let mut rest = line;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        match after.find('}') {
            Some(end) => {
                let name = &after[..end];
                match values.get(name) {
                    Some(value) => out.push_str(value),
                    None => return Err(AuditError::Template(name.to_string())),
                }
                rest = &after[end + 1..];
            }
            None => {
                // Unterminated brace: literal text, not a token.
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn values(pairs: &[(&str, &str)]) -> Placeholders {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_renders_lines_in_order() {
        let template = "CREATE TRIGGER {Name}\nON {Table}";
        let lines = render(template, &values(&[("Name", "TR_X"), ("Table", "X")])).unwrap();
        assert_eq!(lines, ["CREATE TRIGGER TR_X", "ON X"]);
    }

    #[test]
    fn test_multiple_tokens_on_one_line() {
        let lines = render(
            "INSERT INTO {Table} ({Key}, {Key})",
            &values(&[("Table", "T"), ("Key", "Id")]),
        )
        .unwrap();
        assert_eq!(lines, ["INSERT INTO T (Id, Id)"]);
    }

    #[test]
    fn test_missing_value_fails_the_render() {
        let err = render("{Known} and {Unknown}", &values(&[("Known", "x")])).unwrap_err();
        assert!(matches!(err, AuditError::Template(name) if name == "Unknown"));
    }

    #[test]
    fn test_no_partial_line_on_failure() {
        // A later line failing must fail the whole render, not emit a prefix.
        let result = render("fine line\nbad {Gone} line", &Placeholders::new());
        assert!(result.is_err());
    }

    #[test]
    fn test_unterminated_brace_is_literal() {
        let lines = render("SET @x = '{'", &Placeholders::new()).unwrap();
        assert_eq!(lines, ["SET @x = '{'"]);
    }

    proptest! {
        #[test]
        fn render_is_deterministic(
            token in "[A-Za-z][A-Za-z0-9]{0,12}",
            value in "[A-Za-z0-9_ ]{0,24}",
        ) {
            let template = format!("SELECT {{{token}}} FROM t");
            let mut map = Placeholders::new();
            map.insert(token.clone(), value.clone());

            let first = render(&template, &map).unwrap();
            let second = render(&template, &map).unwrap();
            prop_assert_eq!(&first, &second);
            prop_assert_eq!(first, vec![format!("SELECT {value} FROM t")]);
        }

        #[test]
        fn render_fails_without_value(token in "[A-Za-z][A-Za-z0-9]{0,12}") {
            let template = format!("SELECT {{{token}}} FROM t");
            let err = render(&template, &Placeholders::new()).unwrap_err();
            prop_assert!(matches!(err, AuditError::Template(name) if name == token));
        }
    }
}
