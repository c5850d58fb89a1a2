#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::Path;

    // Entry points and module organization files need no mirror
    fn exempt(relative: &str) -> bool {
        matches!(
            Path::new(relative).file_name().and_then(|name| name.to_str()),
            Some("lib.rs" | "main.rs" | "mod.rs")
        )
    }

    // Every .rs file under root, as a path relative to it
    fn rust_files(root: &Path) -> Result<BTreeSet<String>, io::Error> {
        let mut found = BTreeSet::new();
        let mut pending = vec![root.to_path_buf()];
        while let Some(dir) = pending.pop() {
            for entry in fs::read_dir(&dir)? {
                let path = entry?.path();
                if path.is_dir() {
                    pending.push(path);
                } else if path.extension().and_then(|ext| ext.to_str()) == Some("rs") {
                    if let Ok(relative) = path.strip_prefix(root) {
                        found.insert(relative.to_string_lossy().to_string());
                    }
                }
            }
        }
        Ok(found)
    }

    #[test]
    fn test_every_src_file_has_a_unit_test_mirror() {
        assert!(Path::new("src").exists(), "run from the package root");
        let src = rust_files(Path::new("src")).unwrap_or_default();
        let mirror = rust_files(Path::new("tests/unit")).unwrap_or_default();

        let missing: Vec<&String> = src
            .iter()
            .filter(|relative| !exempt(relative) && !mirror.contains(*relative))
            .collect();
        assert!(
            missing.is_empty(),
            "src files without unit test mirrors under tests/unit: {missing:?}"
        );
    }

    #[test]
    fn test_no_orphaned_unit_tests() {
        assert!(Path::new("src").exists(), "run from the package root");
        let src = rust_files(Path::new("src")).unwrap_or_default();
        let mirror = rust_files(Path::new("tests/unit")).unwrap_or_default();

        let orphans: Vec<&String> = mirror
            .iter()
            .filter(|relative| !exempt(relative) && !src.contains(*relative))
            .collect();
        assert!(
            orphans.is_empty(),
            "unit test files without src counterparts: {orphans:?}"
        );
    }

    #[test]
    fn test_every_test_file_contains_tests() {
        assert!(Path::new("tests").exists(), "run from the package root");
        let files = rust_files(Path::new("tests")).unwrap_or_default();

        let mut missing = Vec::new();
        for relative in &files {
            if exempt(relative) {
                continue;
            }
            let content = fs::read_to_string(Path::new("tests").join(relative)).unwrap_or_default();
            if !content.contains("#[test]") {
                missing.push(relative.clone());
            }
        }
        assert!(
            missing.is_empty(),
            "test files without #[test] functions: {missing:?}"
        );
    }
}
