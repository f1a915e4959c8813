pub mod selector;
pub mod weight;

// Re-export the main types for convenience
pub use selector::{
    draw_next_item, probabilities, weights, AdaptiveSelector, ItemSelector, UniformSelector,
};
pub use weight::{score_weight, weight, MAX_WEIGHT};
