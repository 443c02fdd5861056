/// Maps a raw language label onto the identifier the scanning product uses.
/// Labels outside this table are not supported by default setup and are
/// dropped from every canonical set.
pub fn canonical_language(raw: &str) -> Option<&'static str> {
    let lower = raw.to_ascii_lowercase();
    let canonical = match lower.as_str() {
        "actions" => "actions",
        "c" | "c++" | "cpp" | "c-cpp" => "c-cpp",
        "c#" | "csharp" => "csharp",
        "go" => "go",
        "java" | "kotlin" | "java-kotlin" => "java-kotlin",
        "javascript" | "javascript-typescript" => "javascript-typescript",
        "typescript" => "typescript",
        "python" => "python",
        "ruby" => "ruby",
        "swift" => "swift",
        _ => return None,
    };
    Some(canonical)
}

/// Collapses raw language names into canonical identifiers: first-seen
/// order, duplicates removed, unmapped names dropped.
pub fn normalize_languages<'a, I>(raw: I) -> Vec<&'static str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut normalized = Vec::new();
    for name in raw {
        if let Some(canonical) = canonical_language(name) {
            if !normalized.contains(&canonical) {
                normalized.push(canonical);
            }
        }
    }
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(canonical_language("Python"), Some("python"));
        assert_eq!(canonical_language("PYTHON"), Some("python"));
        assert_eq!(canonical_language("C++"), Some("c-cpp"));
        assert_eq!(canonical_language("C#"), Some("csharp"));
    }

    #[test]
    fn test_variants_collapse() {
        assert_eq!(
            normalize_languages(["Java", "Kotlin", "java-kotlin"]),
            vec!["java-kotlin"]
        );
        assert_eq!(normalize_languages(["c", "cpp", "C++"]), vec!["c-cpp"]);
    }

    #[test]
    fn test_unmapped_names_are_dropped() {
        assert_eq!(
            normalize_languages(["HTML", "Rust", "Dockerfile"]),
            Vec::<&str>::new()
        );
        assert_eq!(normalize_languages(["HTML", "Python"]), vec!["python"]);
    }

    #[test]
    fn test_first_seen_order_is_preserved() {
        assert_eq!(
            normalize_languages(["Ruby", "Go", "ruby", "Python"]),
            vec!["ruby", "go", "python"]
        );
    }

    #[test]
    fn test_normalization_is_idempotent() {
        let once = normalize_languages(["TypeScript", "JavaScript", "Swift"]);
        let twice = normalize_languages(once.iter().copied());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_typescript_is_distinct_from_javascript() {
        assert_eq!(
            normalize_languages(["typescript", "javascript"]),
            vec!["typescript", "javascript-typescript"]
        );
    }
}
