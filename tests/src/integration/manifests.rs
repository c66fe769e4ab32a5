//! # Manifest Hygiene
//!
//! Every normal dependency a workspace crate declares must be referenced by
//! its non-test source. Crates only tests need belong under
//! `[dev-dependencies]`; optional ones are gated by features and skipped.

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::{Path, PathBuf};

    fn crates_dir() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("../crates")
    }

    /// Non-optional entries of the `[dependencies]` table.
    fn normal_dependencies(manifest: &str) -> Vec<String> {
        let mut in_table = false;
        let mut deps = Vec::new();
        for line in manifest.lines().map(str::trim) {
            if line.starts_with('[') {
                in_table = line == "[dependencies]";
                continue;
            }
            if !in_table
                || line.is_empty()
                || line.starts_with('#')
                || line.contains("optional = true")
            {
                continue;
            }
            if let Some(name) = line.split(['=', '.', ' ']).next() {
                deps.push(name.to_string());
            }
        }
        deps
    }

    /// Concatenated source of `dir`, without `tests.rs` files, inline test
    /// modules and comments.
    fn production_source(dir: &Path, out: &mut String) {
        for entry in fs::read_dir(dir).unwrap() {
            let path = entry.unwrap().path();
            if path.is_dir() {
                production_source(&path, out);
                continue;
            }
            let is_rust = path.extension().is_some_and(|ext| ext == "rs");
            let is_test_file = path.file_name().is_some_and(|name| name == "tests.rs");
            if !is_rust || is_test_file {
                continue;
            }
            let text = fs::read_to_string(&path).unwrap();
            let code = text.split("#[cfg(test)]\nmod tests {").next().unwrap_or("");
            for line in code.lines().filter(|l| !l.trim_start().starts_with("//")) {
                out.push_str(line);
                out.push('\n');
            }
        }
    }

    /// True if `source` names the crate as a path root, macro or attribute.
    fn is_referenced(source: &str, dependency: &str) -> bool {
        let ident = dependency.replace('-', "_");
        source.match_indices(ident.as_str()).any(|(at, _)| {
            let standalone = !source[..at]
                .chars()
                .next_back()
                .is_some_and(|c| c.is_alphanumeric() || c == '_');
            let rest = &source[at + ident.len()..];
            standalone && (rest.starts_with("::") || rest.starts_with('!') || rest.starts_with(']'))
        })
    }

    #[test]
    fn test_manifest_parsing() {
        let manifest = r#"
[package]
name = "demo"

[dependencies]
# Logging
tracing.workspace = true
async-trait = "0.1"
tokio = { version = "1", features = ["sync"] }
prometheus = { workspace = true, optional = true }

[dev-dependencies]
proptest.workspace = true
"#;
        assert_eq!(
            normal_dependencies(manifest),
            ["tracing", "async-trait", "tokio"]
        );
    }

    #[test]
    fn test_reference_detection() {
        let source = "use tracing_opentelemetry::layer;\n#[async_trait]\nimpl X for Y {}\n";
        assert!(is_referenced(source, "tracing-opentelemetry"));
        assert!(is_referenced(source, "async-trait"));
        assert!(!is_referenced(source, "opentelemetry"));
        assert!(!is_referenced(source, "tracing"));
    }

    #[test]
    fn test_normal_dependencies_are_used_outside_tests() {
        let mut unused = Vec::new();
        for entry in fs::read_dir(crates_dir()).unwrap() {
            let dir = entry.unwrap().path();
            let manifest = dir.join("Cargo.toml");
            if !manifest.exists() {
                continue;
            }
            let mut source = String::new();
            production_source(&dir.join("src"), &mut source);
            for dependency in normal_dependencies(&fs::read_to_string(&manifest).unwrap()) {
                if !is_referenced(&source, &dependency) {
                    let name = dir.file_name().unwrap().to_string_lossy().into_owned();
                    unused.push(format!("{name}: {dependency}"));
                }
            }
        }
        assert!(unused.is_empty(), "declared but unused outside tests: {unused:?}");
    }
}
