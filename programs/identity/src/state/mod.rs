pub mod identity;
pub mod whitelist;

pub use identity::*;
pub use whitelist::*;
