pub mod group;

pub use group::{Group, GroupSummary, Student};
