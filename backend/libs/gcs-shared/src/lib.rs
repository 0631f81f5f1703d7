/// Gearshop GCS Shared Library
///
/// Cloud Storage JSON API client used by the catalog paths.
///
/// It handles:
/// - Multipart media upload with cache control and custom metadata
/// - Public-read ACL insert (make-public)
/// - Object metadata patching
/// - Prefix listing with pagination
/// - Public URL derivation

pub mod client;
pub mod errors;
pub mod models;

pub use client::StorageClient;
pub use errors::GcsError;
pub use models::StorageObject;
