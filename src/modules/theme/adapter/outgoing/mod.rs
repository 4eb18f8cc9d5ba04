mod theme_store_memory;
mod theme_store_redis;

pub use theme_store_memory::InMemoryThemeStore;
pub use theme_store_redis::RedisThemeStore;
