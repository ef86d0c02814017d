//! Output generation for the site tree.
//!
//! # Submodules
//!
//! - [`front_matter`]: Header block consumed by the downstream site renderer
//! - [`index`]: Turns the root document into `index.md`
//! - [`chapters`]: Writes each part's chapters with previous/next navigation
//!
//! # Output Structure
//!
//! ```text
//! docs/
//! ├── index.md                  # rewritten README.md
//! ├── Part1 Basics/
//! │   ├── 01 Function Templates.md
//! │   └── 02 Class Templates.md
//! └── Part2 Advanced/
//!     └── 01 Traits.md
//! ```

pub mod chapters;
pub mod front_matter;
pub mod index;
