pub mod day_8;
pub mod day_12;
pub mod day_15;
pub mod day_18;
pub mod day_25;
