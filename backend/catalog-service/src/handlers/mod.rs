pub mod products;
pub mod storage_events;
