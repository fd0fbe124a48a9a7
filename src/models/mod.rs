pub mod preferences;
pub mod recommendation;

pub use preferences::PreferenceSubmission;
pub use recommendation::{Price, Recommendation};
