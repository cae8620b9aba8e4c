pub mod geometry;
pub mod labeled_interval;
pub mod meters;
pub mod route_response;
