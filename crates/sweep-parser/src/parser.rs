//! ast-grep wrapper: dialect detection, CST parsing and lowering.

use std::path::Path;

use ast_grep_core::{Doc, Node};
use ast_grep_language::{LanguageExt, SupportLang};
use sweep_core::LineIndex;

use crate::ast::Program;
use crate::error::ParserError;
use crate::lower::Lowerer;

/// TypeScript dialect of a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    Ts,
    Tsx,
}

impl Dialect {
    /// Detect the dialect from a path's extension. `.ts`, `.mts` and `.cts`
    /// parse as TypeScript, `.tsx` as TSX.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "ts" | "mts" | "cts" => Some(Self::Ts),
            "tsx" => Some(Self::Tsx),
            _ => None,
        }
    }

    const fn language(self) -> SupportLang {
        match self {
            Self::Ts => SupportLang::TypeScript,
            Self::Tsx => SupportLang::Tsx,
        }
    }
}

/// One parsed file: its source, typed tree and line index.
#[derive(Debug, Clone)]
pub struct ParsedFile {
    pub source: String,
    pub dialect: Dialect,
    pub program: Program,
    pub line_index: LineIndex,
}

/// Parse `source` and lower it into the typed tree.
///
/// Files whose CST contains an `ERROR` node are rejected with the position of
/// the first one.
pub fn parse(source: &str, dialect: Dialect) -> Result<ParsedFile, ParserError> {
    let grep = dialect.language().ast_grep(source);
    let root = grep.root();
    let line_index = LineIndex::new(source);

    if let Some(offset) = first_error_offset(&root) {
        let position = line_index.position(source, offset);
        tracing::debug!(offset, line = position.line, "syntax error in source");
        return Err(ParserError::Syntax {
            offset,
            line: position.line,
            column: position.column,
        });
    }

    let program = Lowerer::new().lower_program(&root);
    Ok(ParsedFile {
        source: source.to_string(),
        dialect,
        program,
        line_index,
    })
}

/// Parse a file on disk, picking the dialect from its extension.
pub fn parse_path(path: &Path) -> Result<ParsedFile, ParserError> {
    let dialect = Dialect::from_path(path)
        .ok_or_else(|| ParserError::UnsupportedLanguage(path.display().to_string()))?;
    let source = std::fs::read_to_string(path)?;
    parse(&source, dialect)
}

fn first_error_offset<D: Doc>(node: &Node<'_, D>) -> Option<u32> {
    if node.kind().as_ref() == "ERROR" {
        return Some(u32::try_from(node.range().start).unwrap_or(u32::MAX));
    }
    node.children().find_map(|child| first_error_offset(&child))
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("src/Button.tsx", Some(Dialect::Tsx))]
    #[case("src/utils.ts", Some(Dialect::Ts))]
    #[case("src/config.mts", Some(Dialect::Ts))]
    #[case("src/legacy.js", None)]
    #[case("README", None)]
    fn detects_dialect(#[case] path: &str, #[case] expected: Option<Dialect>) {
        assert_eq!(Dialect::from_path(&PathBuf::from(path)), expected);
    }

    #[test]
    fn parses_valid_tsx() {
        let parsed = parse("export const A = () => <div />;\n", Dialect::Tsx).unwrap();
        assert_eq!(parsed.program.body.len(), 1);
        assert!(parsed.program.node_count > 1);
    }

    #[test]
    fn rejects_broken_source_with_position() {
        let error = parse("const a = {\n  b: ]]\n};\n", Dialect::Ts).unwrap_err();
        assert!(
            matches!(error, ParserError::Syntax { line, .. } if line >= 1),
            "expected syntax error, got {error:?}"
        );
    }
}
