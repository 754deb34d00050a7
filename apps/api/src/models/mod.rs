pub mod candidate;
pub mod job;
pub(crate) mod lenient;
