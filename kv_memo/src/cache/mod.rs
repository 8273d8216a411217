mod cache_aside;
mod errors;
mod producer;

pub use cache_aside::CacheAside;
pub use errors::CacheError;
pub use producer::Producer;
