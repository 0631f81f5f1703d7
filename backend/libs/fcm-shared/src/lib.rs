/// Gearshop FCM Shared Library
///
/// This library provides a Firebase Cloud Messaging (FCM) HTTP v1 client
/// for delivering push notifications to Android, iOS and Web devices.
///
/// It handles:
/// - Single message delivery returning the platform message id
/// - Per-token fan-out with aggregate success/failure counts
/// - The multi-channel message payload (notification, data map,
///   android/apns/webpush sections)

pub mod client;
pub mod errors;
pub mod models;

pub use client::FcmClient;
pub use errors::FcmError;
pub use models::{FcmBatchResult, FcmMessage, FcmSendResult};
