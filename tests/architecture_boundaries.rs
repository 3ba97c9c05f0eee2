use std::fs;
use std::path::{Path, PathBuf};

fn rs_files(root: &Path) -> Vec<PathBuf> {
    let mut out = Vec::new();
    let mut stack = vec![root.to_path_buf()];
    while let Some(dir) = stack.pop() {
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(_) => continue,
        };
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                stack.push(path);
            } else if path.extension().and_then(|s| s.to_str()) == Some("rs") {
                out.push(path);
            }
        }
    }
    out.sort();
    out
}

fn rel(path: &Path) -> String {
    let root = Path::new(env!("CARGO_MANIFEST_DIR"));
    let rel = path
        .strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .to_string();
    rel.replace('\\', "/")
}

/// The sampling pipeline hands values to the presentation layer, never the
/// other way around: nothing under src/psi may know about rendering.
#[test]
fn psi_module_is_presentation_free() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("src/psi");
    let mut violations = Vec::new();

    for file in rs_files(&root) {
        let content = fs::read_to_string(&file).unwrap_or_default();
        for forbidden in ["crate::ui", "crate::app", "ratatui", "crossterm"] {
            if content.contains(forbidden) {
                violations.push(format!(
                    "{} imports forbidden dependency `{}`",
                    rel(&file),
                    forbidden
                ));
            }
        }
    }

    assert!(
        violations.is_empty(),
        "PSI layering violations:\n{}",
        violations.join("\n")
    );
}

/// Terminal geometry belongs to the presentation layer alone.
#[test]
fn core_does_not_probe_terminal_size() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("src/psi");
    let mut violations = Vec::new();

    for file in rs_files(&root) {
        let content = fs::read_to_string(&file).unwrap_or_default();
        if content.contains("terminal") || content.contains("Frame") {
            violations.push(rel(&file));
        }
    }

    assert!(
        violations.is_empty(),
        "Core files referencing terminal concerns:\n{}",
        violations.join("\n")
    );
}
