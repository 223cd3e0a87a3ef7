// Measure recognition: sign, number, units, compound "per" units and
// dash-joined forms, unioned into one grammar.

pub mod composer;
pub mod compound;
pub mod dash;
pub mod number;
pub mod sign;
pub mod types;


pub use composer::*;
pub use types::*;
