pub mod db;
pub mod cart {
    pub mod memory_store;
    pub mod redis_store;
}
