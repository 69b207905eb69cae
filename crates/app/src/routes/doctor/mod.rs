pub mod dashboard;
mod appointment_card;
