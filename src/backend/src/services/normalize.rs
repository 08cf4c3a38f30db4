//! Employee name normalization for the `/normalize` form.

/// Bring a free-form name into `FIRST MIDDLE LAST` form.
///
/// Whitespace runs collapse to one space, `Last, First` is reordered, digits and
/// ASCII punctuation other than `,` `.` `-` are dropped and the result is
/// upper-cased.
pub fn normalize_name(name: &str) -> String {
    let collapsed = name.split_whitespace().collect::<Vec<_>>().join(" ");

    let ordered = match collapsed.split_once(',') {
        Some((last, rest)) if !rest.contains(',') && !rest.trim().is_empty() => {
            format!("{} {}", rest.trim(), last.trim())
        }
        _ => collapsed,
    };

    ordered
        .chars()
        .filter(|c| !c.is_ascii_digit())
        .filter(|c| !c.is_ascii_punctuation() || matches!(c, ',' | '.' | '-'))
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reorders_last_first() {
        assert_eq!(normalize_name("Doe,  John Q."), "JOHN Q. DOE");
    }

    #[test]
    fn collapses_whitespace_and_uppercases() {
        assert_eq!(normalize_name("  jane \t  smith-jones "), "JANE SMITH-JONES");
    }

    #[test]
    fn strips_digits_and_symbols() {
        assert_eq!(normalize_name("J0hn (Jack) O'Neil #2"), "JHN JACK ONEIL");
    }

    #[test]
    fn keeps_name_with_trailing_comma() {
        assert_eq!(normalize_name("Smith,"), "SMITH,");
    }
}
