pub mod business;
pub mod health;
pub mod reservation;
