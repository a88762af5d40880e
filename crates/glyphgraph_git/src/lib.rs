//! Git side of glyphgraph.
//!
//! [`Vcs`] is the seam between the pure calendar engine and the repository;
//! [`GitRepo`] implements it by shelling out to `git`. [`Painter`] replays a
//! commit schedule onto a branch and [`sweep_branches`] removes old ones.

pub mod error;
pub mod executor;
pub mod painter;
pub mod repo;
pub mod sweep;
pub mod vcs;

#[cfg(test)]
mod tests;

pub use error::{GitError, Result};
pub use executor::{GitCommand, GitExecutor, GitOutput};
pub use painter::{PaintPlan, PaintReport, Painter, branch_name};
pub use repo::{GIT_DATE_FORMAT, GitRepo};
pub use sweep::{SweepReport, sweep_branches};
pub use vcs::{BranchSwitch, Vcs};
