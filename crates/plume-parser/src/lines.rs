//! Line normalization, the first pipeline stage.

/// Splits source text into trimmed, non-empty lines.
///
/// Both `\n` and `\r\n` line endings are accepted.
///
/// # Examples
///
/// ```
/// let lines = plume_parser::normalize("  @startuml\r\n\n  A -> B: hi  \n@enduml\n");
/// assert_eq!(lines, ["@startuml", "A -> B: hi", "@enduml"]);
/// ```
pub fn normalize(source: &str) -> Vec<&str> {
    source
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Iterates the lines a structural parser looks at: everything except the
/// `@start…`/`@end…` markers and other `@` directives.
pub(crate) fn body<'a>(lines: &'a [&'a str]) -> impl Iterator<Item = &'a str> + 'a {
    lines
        .iter()
        .copied()
        .filter(|line| !line.starts_with('@'))
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_empty_source() {
        assert!(normalize("").is_empty());
        assert!(normalize("   \n\t\n").is_empty());
    }

    #[test]
    fn test_trims_and_keeps_order() {
        assert_eq!(normalize("b\n  a  \n\tc"), ["b", "a", "c"]);
    }

    #[test]
    fn test_body_skips_directives() {
        let lines = normalize("@startuml\nA -> B: x\n@enduml");
        let body: Vec<&str> = body(&lines).collect();
        assert_eq!(body, ["A -> B: x"]);
    }

    proptest! {
        #[test]
        fn normalized_lines_are_trimmed_and_non_empty(source in "[ a-z\\t\\r\\n]{0,64}") {
            for line in normalize(&source) {
                prop_assert!(!line.is_empty());
                prop_assert_eq!(line, line.trim());
            }
        }
    }
}
