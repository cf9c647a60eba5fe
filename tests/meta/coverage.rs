#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::{Path, PathBuf};

    const SRC_DIR: &str = "src";
    const UNIT_DIR: &str = "tests/unit";
    const TESTS_DIR: &str = "tests";

    // Crate roots and module files carry no logic of their own
    fn is_organisational(relative: &str) -> bool {
        relative == "main.rs" || relative == "lib.rs" || relative.ends_with("mod.rs")
    }

    fn rust_files(dir: &Path) -> Result<Vec<PathBuf>, io::Error> {
        let mut files = Vec::new();
        if !dir.is_dir() {
            return Ok(files);
        }
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.is_dir() {
                files.extend(rust_files(&path)?);
            } else if path.extension().and_then(|ext| ext.to_str()) == Some("rs") {
                files.push(path);
            }
        }
        Ok(files)
    }

    fn relative_paths(dir: &str) -> BTreeSet<String> {
        let base = Path::new(dir);
        let files = rust_files(base).unwrap_or_else(|error| {
            assert!(!base.exists(), "Failed to read {dir}: {error}");
            Vec::new()
        });
        files
            .iter()
            .filter_map(|path| path.strip_prefix(base).ok())
            .map(|path| path.to_string_lossy().replace('\\', "/"))
            .collect()
    }

    fn format_list<'a>(items: impl Iterator<Item = &'a String>) -> String {
        items
            .map(|item| format!("  - {item}"))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_all_src_files_have_unit_tests() {
        let tests = relative_paths(UNIT_DIR);
        let src = relative_paths(SRC_DIR);
        let missing: Vec<&String> = src
            .iter()
            .filter(|path| !is_organisational(path) && !tests.contains(*path))
            .collect();

        assert!(
            missing.is_empty(),
            "src files without tests/unit counterparts:\n{}",
            format_list(missing.into_iter())
        );
    }

    #[test]
    fn test_all_unit_tests_have_src_counterparts() {
        let src = relative_paths(SRC_DIR);
        let tests = relative_paths(UNIT_DIR);
        let orphaned: Vec<&String> = tests
            .iter()
            .filter(|path| !is_organisational(path) && !src.contains(*path))
            .collect();

        assert!(
            orphaned.is_empty(),
            "tests/unit files without src counterparts:\n{}",
            format_list(orphaned.into_iter())
        );
    }

    #[test]
    fn test_all_test_files_contain_tests() {
        let without_tests: Vec<String> = rust_files(Path::new(TESTS_DIR))
            .unwrap_or_default()
            .into_iter()
            .filter(|path| {
                let name = path.file_name().and_then(|name| name.to_str());
                name != Some("main.rs") && name != Some("mod.rs")
            })
            .filter(|path| {
                fs::read_to_string(path).is_ok_and(|content| !content.contains("#[test]"))
            })
            .map(|path| path.display().to_string())
            .collect();

        assert!(
            without_tests.is_empty(),
            "test files without any #[test] function:\n{}",
            format_list(without_tests.iter())
        );
    }

    // A unit test file that no parent declares is silently never compiled
    #[test]
    fn test_all_unit_test_files_are_declared() {
        let mut undeclared = Vec::new();
        for relative in relative_paths(UNIT_DIR) {
            if is_organisational(&relative) {
                continue;
            }
            let path = Path::new(UNIT_DIR).join(&relative);
            let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };
            let Some(parent) = path.parent() else {
                continue;
            };
            let declaring_file = if parent == Path::new(UNIT_DIR) {
                parent.join("main.rs")
            } else {
                parent.join("mod.rs")
            };
            let declaration = format!("mod {stem};");
            let declared = fs::read_to_string(&declaring_file)
                .is_ok_and(|content| content.lines().any(|line| line.trim() == declaration));
            if !declared {
                undeclared.push(relative);
            }
        }

        assert!(
            undeclared.is_empty(),
            "unit test files missing a `mod` declaration:\n{}",
            format_list(undeclared.iter())
        );
    }
}
