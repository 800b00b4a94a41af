pub mod search;

pub use search::{search_bucket, search_bucket_with, validate, validate_with};
