pub mod error;
pub mod loader;
pub mod parsed_url;
pub mod record;

pub use error::RecordError;
pub use loader::{load_records, parse_records};
pub use parsed_url::ParsedUrl;
pub use record::{NetworkRecord, ResourceType};
