//! Geometric primitives shared by the picking and camera subsystems.

mod ray;

pub use ray::Ray;
