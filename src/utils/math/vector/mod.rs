pub mod math;

pub use math::{cosine, dot, norm, norm_sq};
