pub mod adapter;
pub mod medium;
pub mod sqlite;

pub use adapter::{PersistenceAdapter, STORAGE_KEY};
pub use medium::{MemoryMedium, StorageMedium};
pub use sqlite::SqliteMedium;
