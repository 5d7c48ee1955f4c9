pub mod store;
pub mod types;

pub use store::RecordingList;
pub use types::Recording;
