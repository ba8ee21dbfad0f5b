/// Binary package cache built from apt `Packages` indexes
mod in_memory_cache;

pub use in_memory_cache::InMemoryPackageCache;
