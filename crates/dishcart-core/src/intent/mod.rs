//! Intent classification over the completion provider.

pub mod classifier;

pub use classifier::IntentClassifier;
