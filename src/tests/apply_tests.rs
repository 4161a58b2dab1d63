use crate::apply::*;
use crate::splice::{Anchor, SpliceError};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[cfg(test)]
mod tests {
    use super::*;

    fn mark_anchor() -> Anchor {
        Anchor {
            primary: "\n\n// MARK".to_string(),
            fallback: "// MARK".to_string(),
        }
    }

    fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn splice_files_reads_without_writing() {
        let dir = TempDir::new().unwrap();
        let target = write_file(&dir, "app.js", "A\nB\n\n// MARK\nC\n");
        let content = write_file(&dir, "new.txt", "X\r\n");

        let outcome = splice_files(&target, &content, &mark_anchor()).unwrap();
        assert_eq!(outcome.document, "A\nB\nX\n\n// MARK\nC\n");
        assert_eq!(outcome.offset, 4);
        assert_eq!(outcome.inserted, 2);
        assert!(!outcome.used_fallback);

        // Target on disk is untouched until the caller writes.
        assert_eq!(fs::read_to_string(&target).unwrap(), "A\nB\n\n// MARK\nC\n");
    }

    #[test]
    fn rewrite_target_in_place() {
        let dir = TempDir::new().unwrap();
        let target = write_file(&dir, "app.js", "A\nB\n\n// MARK\nC\n");
        let content = write_file(&dir, "new.txt", "X\n");

        let outcome = splice_files(&target, &content, &mark_anchor()).unwrap();
        write_result(&target, &outcome.document).unwrap();
        assert_eq!(fs::read_to_string(&target).unwrap(), "A\nB\nX\n\n// MARK\nC\n");
    }

    #[test]
    fn redirected_output_leaves_target_alone() {
        let dir = TempDir::new().unwrap();
        let target = write_file(&dir, "app.js", "A\nB\n\n// MARK\nC\n");
        let content = write_file(&dir, "new.txt", "X\n");
        let dest = dir.path().join("out.js");

        let outcome = splice_files(&target, &content, &mark_anchor()).unwrap();
        write_result(&dest, &outcome.document).unwrap();

        assert_eq!(fs::read_to_string(&target).unwrap(), "A\nB\n\n// MARK\nC\n");
        assert_eq!(fs::read_to_string(&dest).unwrap(), "A\nB\nX\n\n// MARK\nC\n");
    }

    #[test]
    fn missing_anchor_fails_and_target_is_untouched() {
        let dir = TempDir::new().unwrap();
        let original = "A\nB\nC\n";
        let target = write_file(&dir, "app.js", original);
        let content = write_file(&dir, "new.txt", "X\n");

        let err = splice_files(&target, &content, &mark_anchor()).unwrap_err();
        assert_eq!(
            err.downcast_ref::<SpliceError>(),
            Some(&SpliceError::AnchorNotFound)
        );
        assert_eq!(fs::read_to_string(&target).unwrap(), original);
    }

    #[test]
    fn fallback_match_is_reported() {
        let dir = TempDir::new().unwrap();
        let target = write_file(&dir, "app.js", "A\nB\n// MARK tail\nC\n");
        let content = write_file(&dir, "new.txt", "X\n");

        let outcome = splice_files(&target, &content, &mark_anchor()).unwrap();
        assert!(outcome.used_fallback);
        assert_eq!(outcome.document, "A\nB\nX\n// MARK tail\nC\n");
    }

    #[test]
    fn missing_input_files_are_errors() {
        let dir = TempDir::new().unwrap();
        let content = write_file(&dir, "new.txt", "X\n");

        let err = splice_files(&dir.path().join("absent.js"), &content, &mark_anchor());
        assert!(err.is_err());

        let target = write_file(&dir, "app.js", "A\n\n// MARK\n");
        let err = splice_files(&target, &dir.path().join("absent.txt"), &mark_anchor());
        assert!(err.is_err());
    }
}
