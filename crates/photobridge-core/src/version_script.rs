//! Linker version-script generation from a flat exported-symbol list.
//!
//! The output format is a compatibility contract with the downstream linker
//! step: one `global:` section listing every symbol in input order, then a
//! `local: *;` catch-all hiding everything else. The text must reproduce
//! byte-for-byte, including the trailing `local: *; };` line, so the
//! generated artifact stays diff-friendly under version control.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SymbolListError {
    /// A line was blank or contained whitespace. Rejected rather than
    /// skipped: a silently shortened export list corrupts the shared
    /// library's ABI surface.
    #[error("malformed symbol entry at line {line}")]
    MalformedEntry { line: usize },
}

/// Parse a symbol list, one exported symbol per line.
///
/// Ordering is preserved and duplicates are passed through unmodified.
/// A trailing newline after the final symbol is accepted; an empty input
/// yields an empty list.
pub fn parse_symbol_lines(input: &str) -> Result<Vec<String>, SymbolListError> {
    let mut symbols = Vec::new();
    for (index, line) in input.lines().enumerate() {
        if line.is_empty() || line.chars().any(char::is_whitespace) {
            return Err(SymbolListError::MalformedEntry { line: index + 1 });
        }
        symbols.push(line.to_owned());
    }
    Ok(symbols)
}

/// Render the version-script fragment for `symbols`.
///
/// Pure single-pass transform; the empty list produces a script with an
/// empty `global:` section.
pub fn generate_version_script<S: AsRef<str>>(symbols: &[S]) -> String {
    let mut script = String::from("{ global:\n");
    for symbol in symbols {
        script.push_str(symbol.as_ref());
        script.push_str(";\n");
    }
    script.push_str("local: *; };\n");
    script
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_known_symbols() {
        let script =
            generate_version_script(&["gp_library_version", "gp_port_library_version"]);
        assert_eq!(
            script,
            "{ global:\ngp_library_version;\ngp_port_library_version;\nlocal: *; };\n"
        );
    }

    #[test]
    fn test_generate_empty_list() {
        assert_eq!(
            generate_version_script::<&str>(&[]),
            "{ global:\nlocal: *; };\n"
        );
    }

    #[test]
    fn test_generate_preserves_order() {
        let forward = generate_version_script(&["a_sym", "b_sym"]);
        let reversed = generate_version_script(&["b_sym", "a_sym"]);
        assert_eq!(forward, "{ global:\na_sym;\nb_sym;\nlocal: *; };\n");
        assert_eq!(reversed, "{ global:\nb_sym;\na_sym;\nlocal: *; };\n");
    }

    #[test]
    fn test_generate_passes_duplicates_through() {
        let script = generate_version_script(&["gp_camera_new", "gp_camera_new"]);
        assert_eq!(
            script,
            "{ global:\ngp_camera_new;\ngp_camera_new;\nlocal: *; };\n"
        );
    }

    #[test]
    fn test_parse_symbol_lines() {
        let symbols =
            parse_symbol_lines("gp_library_version\ngp_port_library_version\n").unwrap();
        assert_eq!(symbols, ["gp_library_version", "gp_port_library_version"]);
    }

    #[test]
    fn test_parse_without_trailing_newline() {
        let symbols = parse_symbol_lines("gp_camera_new").unwrap();
        assert_eq!(symbols, ["gp_camera_new"]);
    }

    #[test]
    fn test_parse_empty_input() {
        assert_eq!(parse_symbol_lines("").unwrap(), Vec::<String>::new());
    }

    #[test]
    fn test_parse_rejects_blank_line() {
        let err = parse_symbol_lines("gp_camera_new\n\ngp_camera_exit\n").unwrap_err();
        assert_eq!(err, SymbolListError::MalformedEntry { line: 2 });
    }

    #[test]
    fn test_parse_rejects_whitespace_only_line() {
        let err = parse_symbol_lines("gp_camera_new\n   \n").unwrap_err();
        assert_eq!(err, SymbolListError::MalformedEntry { line: 2 });
    }

    #[test]
    fn test_parse_rejects_interior_whitespace() {
        let err = parse_symbol_lines("gp camera new\n").unwrap_err();
        assert_eq!(err, SymbolListError::MalformedEntry { line: 1 });
    }

    #[test]
    fn test_parse_preserves_duplicates() {
        let symbols = parse_symbol_lines("gp_camera_new\ngp_camera_new\n").unwrap();
        assert_eq!(symbols, ["gp_camera_new", "gp_camera_new"]);
    }
}
