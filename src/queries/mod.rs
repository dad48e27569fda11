pub mod products_queries;
pub mod user_queries;
