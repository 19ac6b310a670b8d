pub mod controller;
pub mod geom;
pub mod input;
pub mod intersect;
pub mod report;
pub mod surface;
