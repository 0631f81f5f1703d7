pub mod products;
pub mod publisher;

pub use products::{ProductService, DEFAULT_CATEGORY, PRODUCTS_COLLECTION};
pub use publisher::{ImagePublisher, ONE_YEAR_CACHE_CONTROL, PRODUCT_IMAGES_PREFIX};
