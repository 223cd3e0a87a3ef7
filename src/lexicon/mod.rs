pub mod loader;
pub mod plural;


pub use loader::*;
pub use plural::pluralize;
