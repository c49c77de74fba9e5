pub mod error;
pub mod tags;
pub mod cart {
    pub mod dto;
    pub mod routes;
}
pub mod health {
    pub mod routes;
}
pub mod notification {
    pub mod dto;
    pub mod routes;
}
