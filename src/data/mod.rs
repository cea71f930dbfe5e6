//! Project records and the (stubbed) persistence layer

pub mod project;
pub mod store;
