pub mod normalize_flow;

pub use normalize_flow::NormalizeFlow;
