pub mod logging;
pub mod options;

pub mod discovery;
pub mod execute;
pub mod identity;
pub mod naming;
pub mod run;
pub mod strategy;
pub mod summary;

pub use discovery::{discover, Candidate};
pub use execute::{process_candidate, CandidateReport, Outcome, RenameError};
pub use options::RenameOptions;
pub use run::run;
pub use strategy::Strategy;
pub use summary::RunSummary;
