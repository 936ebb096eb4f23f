pub mod business;
pub mod calendar;
pub mod reservation;
pub mod slots;
