use std::collections::HashSet;

/// Strips every character that is not an ASCII digit. Length checking is
/// the validator's job, not this function's.
pub fn normalize_phone(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Splits a comma-separated skill string into trimmed, non-empty entries,
/// deduplicated case-insensitively while keeping the first-seen casing
/// and order. `"Python, python, SQL"` becomes `["Python", "SQL"]`.
pub fn parse_skills(raw: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut unique = Vec::new();

    for piece in raw.split(',') {
        let skill = piece.trim();
        if skill.is_empty() {
            continue;
        }
        if seen.insert(skill.to_lowercase()) {
            unique.push(skill.to_string());
        }
    }

    unique
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_phone_keeps_only_digits() {
        assert_eq!(normalize_phone("+1 (234) 567-8901"), "12345678901");
        assert_eq!(normalize_phone("abc"), "");
        assert_eq!(normalize_phone("0123456789"), "0123456789");
    }

    #[test]
    fn normalize_phone_preserves_digit_order() {
        let raw = "9a8b7c6d5e4f3g2h1i0";
        assert_eq!(normalize_phone(raw), "9876543210");
    }

    #[test]
    fn parse_skills_trims_and_drops_empties() {
        assert_eq!(
            parse_skills("  Rust , , Python,  ,SQL  "),
            vec!["Rust", "Python", "SQL"]
        );
        assert!(parse_skills("  ,  , ").is_empty());
        assert!(parse_skills("").is_empty());
    }

    #[test]
    fn parse_skills_dedupes_case_insensitively_keeping_first_casing() {
        assert_eq!(parse_skills("Python, python, SQL"), vec!["Python", "SQL"]);
        assert_eq!(parse_skills("sql, SQL, Sql"), vec!["sql"]);
    }
}
