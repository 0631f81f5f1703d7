pub mod dispatcher;

pub use dispatcher::{build_push_message, PushDispatcher, CLICK_ACTION, FCM_BATCH_LIMIT};
