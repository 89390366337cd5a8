mod impact;
pub mod types;

pub use impact::ImpactSet;
pub use types::*;
