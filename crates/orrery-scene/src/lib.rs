//! Scene feed for the external renderer: static backdrop geometry built once
//! at startup (starfield, orbit paths) and a per-frame numeric snapshot of
//! body and camera state. The core never calls into rendering internals;
//! this crate is the entire surface it supplies.

mod orbit;
mod snapshot;
mod starfield;

pub use orbit::{ORBIT_PATH_SEGMENTS, orbit_path_points};
pub use snapshot::{BodyInstance, OrbitPath, Renderer, SceneSnapshot, StaticGeometry};
pub use starfield::{StarVertex, StarfieldGenerator};
