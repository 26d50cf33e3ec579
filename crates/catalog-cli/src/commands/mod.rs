pub mod add;
pub mod browse;
pub mod reset;
