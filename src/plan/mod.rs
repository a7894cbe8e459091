pub mod plan_model;
pub mod runner;
