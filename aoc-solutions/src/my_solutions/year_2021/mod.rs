pub mod day_22;
