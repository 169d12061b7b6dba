//! Heuristic per-file scanning.
//!
//! Not a parser: a line classifier plus indentation bookkeeping that trades
//! accuracy for speed across many files. Known blind spots (decorators,
//! multi-line signatures, non-indentation block syntax) are documented on
//! the individual components rather than special-cased.

pub mod extent;
pub mod file;
pub mod indent;
pub mod matcher;
pub mod scope;

pub use extent::block_end;
pub use file::FileScanner;
pub use indent::{indent_depth, TAB_WIDTH};
pub use matcher::{is_skippable, Definition, DefinitionMatcher};
pub use scope::ScopeStack;
