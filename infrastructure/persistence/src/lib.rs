pub mod db;
pub mod cart {
    pub mod entity;
    pub mod repository;
}
pub mod key_value {
    pub mod entity;
    pub mod store;
}
