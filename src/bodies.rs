//! Celestial body data model and attribute tables.
//!
//! Star, planet, and moon types carry frozen weight tables; selection maps
//! a single range draw into a weighted bucket by cumulative scan. The
//! weights are part of the deterministic contract: changing them changes
//! every generated universe, so they stay frozen.

use rand::Rng;
use serde::{Deserialize, Serialize};

// =============================================================================
// STAR TYPES
// =============================================================================

/// Stellar classification, drawn per system from a weighted table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StarType {
    RedDwarf,
    OrangeDwarf,
    YellowDwarf,
    WhiteDwarf,
    RedGiant,
    BlueGiant,
    NeutronStar,
}

impl StarType {
    pub fn all() -> &'static [StarType] {
        &[
            StarType::RedDwarf,
            StarType::OrangeDwarf,
            StarType::YellowDwarf,
            StarType::WhiteDwarf,
            StarType::RedGiant,
            StarType::BlueGiant,
            StarType::NeutronStar,
        ]
    }

    /// Relative abundance. Dwarfs dominate, exotic remnants are rare.
    fn weight(self) -> u32 {
        match self {
            StarType::RedDwarf => 30,
            StarType::OrangeDwarf => 18,
            StarType::YellowDwarf => 22,
            StarType::WhiteDwarf => 10,
            StarType::RedGiant => 9,
            StarType::BlueGiant => 6,
            StarType::NeutronStar => 5,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StarType::RedDwarf => "Red Dwarf",
            StarType::OrangeDwarf => "Orange Dwarf",
            StarType::YellowDwarf => "Yellow Dwarf",
            StarType::WhiteDwarf => "White Dwarf",
            StarType::RedGiant => "Red Giant",
            StarType::BlueGiant => "Blue Giant",
            StarType::NeutronStar => "Neutron Star",
        }
    }
}

// =============================================================================
// PLANET CLASSES
// =============================================================================

/// Planet classification. Each class carries a terrain-noise preset that
/// the external mesh generator consumes as opaque configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlanetClass {
    Terran,
    Ocean,
    Desert,
    Ice,
    Lava,
    GasGiant,
    Barren,
    Toxic,
}

impl PlanetClass {
    pub fn all() -> &'static [PlanetClass] {
        &[
            PlanetClass::Terran,
            PlanetClass::Ocean,
            PlanetClass::Desert,
            PlanetClass::Ice,
            PlanetClass::Lava,
            PlanetClass::GasGiant,
            PlanetClass::Barren,
            PlanetClass::Toxic,
        ]
    }

    fn weight(self) -> u32 {
        match self {
            PlanetClass::Terran => 16,
            PlanetClass::Ocean => 12,
            PlanetClass::Desert => 15,
            PlanetClass::Ice => 14,
            PlanetClass::Lava => 8,
            PlanetClass::GasGiant => 18,
            PlanetClass::Barren => 12,
            PlanetClass::Toxic => 5,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PlanetClass::Terran => "Terran",
            PlanetClass::Ocean => "Ocean",
            PlanetClass::Desert => "Desert",
            PlanetClass::Ice => "Ice",
            PlanetClass::Lava => "Lava",
            PlanetClass::GasGiant => "Gas Giant",
            PlanetClass::Barren => "Barren",
            PlanetClass::Toxic => "Toxic",
        }
    }

    /// Terrain-noise parameters handed off to the mesh generator.
    pub fn terrain_preset(self) -> TerrainPreset {
        match self {
            PlanetClass::Terran => TerrainPreset {
                noise_scale: 1.6,
                octaves: 6,
                persistence: 0.5,
                lacunarity: 2.0,
                terrain_height: 0.12,
            },
            PlanetClass::Ocean => TerrainPreset {
                noise_scale: 1.2,
                octaves: 4,
                persistence: 0.45,
                lacunarity: 2.0,
                terrain_height: 0.05,
            },
            PlanetClass::Desert => TerrainPreset {
                noise_scale: 2.2,
                octaves: 5,
                persistence: 0.55,
                lacunarity: 2.1,
                terrain_height: 0.09,
            },
            PlanetClass::Ice => TerrainPreset {
                noise_scale: 1.4,
                octaves: 5,
                persistence: 0.4,
                lacunarity: 2.0,
                terrain_height: 0.08,
            },
            PlanetClass::Lava => TerrainPreset {
                noise_scale: 2.8,
                octaves: 7,
                persistence: 0.6,
                lacunarity: 2.3,
                terrain_height: 0.16,
            },
            PlanetClass::GasGiant => TerrainPreset {
                noise_scale: 0.8,
                octaves: 3,
                persistence: 0.35,
                lacunarity: 1.8,
                terrain_height: 0.0,
            },
            PlanetClass::Barren => TerrainPreset {
                noise_scale: 2.0,
                octaves: 6,
                persistence: 0.5,
                lacunarity: 2.2,
                terrain_height: 0.14,
            },
            PlanetClass::Toxic => TerrainPreset {
                noise_scale: 1.8,
                octaves: 5,
                persistence: 0.5,
                lacunarity: 2.0,
                terrain_height: 0.1,
            },
        }
    }
}

// =============================================================================
// MOON TYPES
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoonType {
    Rocky,
    Icy,
    Volcanic,
    Captured,
}

impl MoonType {
    pub fn all() -> &'static [MoonType] {
        &[
            MoonType::Rocky,
            MoonType::Icy,
            MoonType::Volcanic,
            MoonType::Captured,
        ]
    }

    fn weight(self) -> u32 {
        match self {
            MoonType::Rocky => 40,
            MoonType::Icy => 30,
            MoonType::Volcanic => 15,
            MoonType::Captured => 15,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MoonType::Rocky => "Rocky",
            MoonType::Icy => "Icy",
            MoonType::Volcanic => "Volcanic",
            MoonType::Captured => "Captured",
        }
    }
}

// =============================================================================
// WEIGHTED SELECTION
// =============================================================================

/// Pick a star type by cumulative weight from one range draw.
pub fn pick_star_type<R: Rng>(rng: &mut R) -> StarType {
    let types = StarType::all();
    let total: u32 = types.iter().map(|t| t.weight()).sum();
    let mut r = rng.gen_range(0..total);
    for &star_type in types {
        if r < star_type.weight() {
            return star_type;
        }
        r -= star_type.weight();
    }
    StarType::RedDwarf
}

/// Pick a planet class by cumulative weight from one range draw.
pub fn pick_planet_class<R: Rng>(rng: &mut R) -> PlanetClass {
    let classes = PlanetClass::all();
    let total: u32 = classes.iter().map(|c| c.weight()).sum();
    let mut r = rng.gen_range(0..total);
    for &class in classes {
        if r < class.weight() {
            return class;
        }
        r -= class.weight();
    }
    PlanetClass::Barren
}

/// Pick a moon type by cumulative weight from one range draw.
pub fn pick_moon_type<R: Rng>(rng: &mut R) -> MoonType {
    let types = MoonType::all();
    let total: u32 = types.iter().map(|t| t.weight()).sum();
    let mut r = rng.gen_range(0..total);
    for &moon_type in types {
        if r < moon_type.weight() {
            return moon_type;
        }
        r -= moon_type.weight();
    }
    MoonType::Rocky
}

// =============================================================================
// DATA MODEL
// =============================================================================

/// Terrain-noise configuration for one planet, selected by class.
///
/// Opaque to this crate beyond selection; the voxel-noise mesh generator
/// interprets the fields.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TerrainPreset {
    pub noise_scale: f64,
    pub octaves: u32,
    pub persistence: f64,
    pub lacunarity: f64,
    pub terrain_height: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Moon {
    pub moon_name: String,
    pub moon_type: MoonType,
    pub radius_km: f64,
    pub orbit_km: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Planet {
    pub planet_name: String,
    pub planet_type: PlanetClass,
    pub orbit_au: f64,
    pub radius_km: f64,
    /// Seed handed to the mesh generator alongside the terrain preset.
    pub terrain_seed: u32,
    pub terrain: TerrainPreset,
    /// Always present, possibly empty.
    pub moons: Vec<Moon>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StarSystem {
    pub star_name: String,
    pub star_type: StarType,
    pub planets: Vec<Planet>,
}

/// One star system per sector, in raster order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Universe {
    /// The resolved universe seed, kept for display and reference.
    pub seed: u32,
    pub systems: Vec<StarSystem>,
}
