/// Gearshop Firestore Shared Library
///
/// Firestore REST client for single-document inserts.
///
/// It handles:
/// - Client-side auto-ID generation (the platform SDK convention)
/// - Commit writes with REQUEST_TIME field transforms so creation/update
///   timestamps are assigned by the server
/// - Encoding plain JSON field maps into Firestore's typed value envelope

pub mod client;
pub mod errors;
pub mod values;

pub use client::FirestoreClient;
pub use errors::FirestoreError;
