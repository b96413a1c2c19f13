//! # sweep-parser
//!
//! ast-grep-based parsing of TypeScript and TSX for Sweepi.
//!
//! - [`parser`]: dialect detection and CST parsing through ast-grep's
//!   tree-sitter grammars
//! - [`ast`]: the typed tree the CST is lowered into
//! - [`semantic`]: node table, parent links, scopes, symbols and references
//! - [`types`]: the optional type-resolution service

pub mod ast;
pub mod error;
mod lower;
pub mod parser;
pub mod semantic;
pub mod types;
pub mod visit;

pub use error::ParserError;
pub use parser::{Dialect, ParsedFile, parse, parse_path};
pub use semantic::Semantic;
pub use types::{NoTypeService, ResolvedType, TypeService};
