// Service exports
pub mod appwrite;
pub mod directory;
pub mod memory;
pub mod search;
pub mod styles;

pub use appwrite::{AppwriteDirectory, AppwriteCollections};
pub use directory::{DirectoryError, PartnerDirectory};
pub use memory::InMemoryDirectory;
pub use search::{PartnerSearch, SearchOutcome};
pub use styles::StyleCatalog;
