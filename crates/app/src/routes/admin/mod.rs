pub mod dashboard;
mod doctors;
mod patients;
