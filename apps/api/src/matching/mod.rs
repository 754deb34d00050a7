// Candidate ↔ job matching.
// Scoring is pure; handlers only decode requests and call through `AppState::scorer`.

pub mod breakdown;
pub mod handlers;
pub mod ranking;
pub mod scoring;
pub mod skills;
pub mod tenure;
pub mod weights;
