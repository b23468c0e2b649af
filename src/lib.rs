//! lcnt: line and size totals for Visual Studio build descriptors
//!
//! Parses a solution (`.sln`) or project (`.csproj`) descriptor, walks the
//! source files it references, and sums line counts and on-disk byte sizes.

pub mod cli;
pub mod counter;

// Re-export the descriptor tree for convenience
pub use counter::{Project, Solution, SourceFile};
