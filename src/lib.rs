pub mod app;
pub mod config;
pub mod db;
pub mod dto;
pub mod error;
pub mod favorites;
pub mod planets;
pub mod routes;
pub mod site;
pub mod state;
pub mod users;

#[cfg(test)]
mod test_support;
