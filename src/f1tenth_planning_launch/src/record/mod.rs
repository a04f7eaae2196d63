//! Record module for turning a launch plan into record.json

pub mod generator;
pub mod types;

pub use generator::CommandGenerator;
pub use types::{IncludeRecord, NodeRecord, RecordJson};
