mod lookup;
mod resolve;
mod serve;

pub use lookup::run_lookup;
pub use resolve::run_resolve;
pub use serve::run_serve;
