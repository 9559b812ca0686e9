//! Command implementations

pub mod base;
pub mod pr;
pub mod repo;

pub use base::{Command, CommandContext, print_json, print_lines};
pub use pr::{PrAuthorCommand, PrRepoCommand, PrRepoListing};
pub use repo::{RepoListCommand, RepoListing, RepoScope, RepoSection, RepoWorkflowCommand};
