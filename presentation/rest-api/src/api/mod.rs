pub mod error;
pub mod health {
    pub mod routes;
}
pub mod meal_plan {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
pub mod preferences {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
pub mod recipe {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
pub mod saved_recipe {
    pub mod dto;
    pub mod routes;
}
pub mod search {
    pub mod dto;
    pub mod routes;
}
pub mod tags;
