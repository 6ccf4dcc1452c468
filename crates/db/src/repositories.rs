pub mod admin;
pub mod classroom;
pub mod teacher;
pub mod timetable;

/// True when the report wraps a Postgres unique-constraint violation.
pub fn is_unique_violation(report: &eyre::Report) -> bool {
    match report.downcast_ref::<sqlx::Error>() {
        Some(sqlx::Error::Database(e)) => e.is_unique_violation(),
        _ => false,
    }
}

/// Escapes `%`, `_` and `\` so user input matches literally inside `ILIKE`.
pub(crate) fn like_pattern(needle: &str) -> String {
    let mut escaped = String::with_capacity(needle.len() + 2);
    escaped.push('%');
    for c in needle.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("john"), "%john%");
        assert_eq!(like_pattern("50%_a\\b"), "%50\\%\\_a\\\\b%");
    }

    #[test]
    fn plain_reports_are_not_violations() {
        assert!(!is_unique_violation(&eyre::eyre!("boom")));
        assert!(!is_unique_violation(&eyre::Report::new(sqlx::Error::RowNotFound)));
    }
}
