pub mod rules;
pub mod vehicle_class;
pub mod warning_engine;
pub mod warning_rule;
