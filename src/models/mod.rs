pub mod day_state;
pub mod strategy;
pub mod task;
pub mod write_off;
