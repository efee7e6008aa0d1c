//! Snapshot export adapters.

mod local_file;

pub use local_file::LocalSnapshotExporter;
