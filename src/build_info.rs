//! `BUILD_COMMIT`, `BUILD_DATE` and `VERSION_LINE`, generated by `build.rs`.
//! `VERSION_LINE` is what `word-warrior --version` prints.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commit_is_short_hash_or_unknown() {
        let is_short_hash =
            BUILD_COMMIT.len() == 7 && BUILD_COMMIT.chars().all(|c| c.is_ascii_hexdigit());
        assert!(is_short_hash || BUILD_COMMIT == "unknown");
    }

    #[test]
    fn test_date_is_iso_day() {
        let parts: Vec<&str> = BUILD_DATE.split('-').collect();
        assert_eq!(parts.len(), 3, "{BUILD_DATE}");
        assert_eq!(parts[0].len(), 4);
    }

    #[test]
    fn test_version_line_combines_version_date_and_commit() {
        assert_eq!(
            VERSION_LINE,
            format!(
                "{} ({} {})",
                env!("CARGO_PKG_VERSION"),
                BUILD_DATE,
                BUILD_COMMIT
            )
        );
    }
}
