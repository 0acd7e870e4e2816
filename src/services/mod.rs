pub mod entry_store;
pub mod moderator;
pub mod submission;

pub use entry_store::{EntryStore, InMemoryStore, PruneReport};
pub use moderator::{AcceptAllModerator, HttpModerator, ModerationError, Moderator, Verdict};
pub use submission::{SubmissionOutcome, SubmissionService};
