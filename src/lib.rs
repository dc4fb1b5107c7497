//! Deterministic procedural universe generation library
//!
//! Generates galaxies of star systems, planets, and moons from a single
//! seed, reproducibly, with save/restore of generator state so unrelated
//! generation calls never perturb each other.

pub mod bodies;
pub mod rng;
pub mod sector;
pub mod seeds;
pub mod verse;
pub mod word_banks;

pub use bodies::{Moon, MoonType, Planet, PlanetClass, StarSystem, StarType, TerrainPreset, Universe};
pub use rng::{GeneratorState, Lehmer32};
pub use seeds::SeedInput;
pub use verse::Verse;
