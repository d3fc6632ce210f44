pub mod initialize;
pub mod query_operations;
pub mod whitelist_operations;

pub use initialize::*;
pub use query_operations::*;
pub use whitelist_operations::*;
