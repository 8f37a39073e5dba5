pub mod vector;
pub mod particle;
pub mod params;
pub mod engine;
pub mod forces;
pub mod integrator;
pub mod collision;
pub mod sandbox;
pub mod scenario;
