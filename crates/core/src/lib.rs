pub mod group;
pub mod rules;
pub mod types;

// Re-export main types
pub use group::{group_buckets, group_classes};
pub use rules::{classify_token, Rule, RULES};
pub use types::{Category, ClassToken, Variant};
