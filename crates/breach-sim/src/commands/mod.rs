pub mod render;
pub mod run;
pub mod simulate;
pub mod super_round;
pub mod version;
