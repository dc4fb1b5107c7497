//! Celestial generation pipeline: moons, planets, star systems, universes.
//!
//! All generation flows through a [`Verse`] context that owns the Lehmer32
//! stream and the current universe seed. Generation is layered bottom-up:
//! moons per planet, planets per system, one system per sector. Body-count
//! loops are capped in the loop condition itself, so the number of draws a
//! loop consumes is a function of the draws alone.

use std::collections::HashSet;

use rand::Rng;

use crate::bodies::{
    pick_moon_type, pick_planet_class, pick_star_type, Moon, Planet, PlanetClass, StarSystem,
    Universe,
};
use crate::rng::{GeneratorState, Lehmer32};
use crate::sector::{sector_index_to_coordinate, sector_to_seed};
use crate::seeds::SeedInput;
use crate::word_banks;

/// Hard ceiling on planets per system.
pub const MAX_PLANETS: usize = 6;
/// Hard ceiling on moons per planet.
pub const MAX_MOONS: usize = 5;

/// Seed used when a `Verse` is created without one. A fixed constant, not
/// ambient entropy: determinism is the product.
pub const DEFAULT_SEED: u32 = 0x5EED_BA5E;

// Continue-probabilities for the capped body-count loops.
const PLANET_CONTINUE_P: f64 = 0.72;
const MOON_CONTINUE_P: f64 = 0.55;

// Colliding names are redrawn this many times before the numeric-suffix
// disambiguation kicks in. The suffix search consumes no draws.
const NAME_RETRY_LIMIT: usize = 8;

/// Used-name ledger for one top-level generation call.
///
/// Star and planet names are unique across the whole call (the whole
/// universe when generating one). Moon names are unique per planet by
/// default; the global option widens their scope to the whole call.
struct NameLedger {
    stars: HashSet<String>,
    planets: HashSet<String>,
    moons: HashSet<String>,
    global_moons: bool,
}

impl NameLedger {
    fn new(global_moons: bool) -> Self {
        Self {
            stars: HashSet::new(),
            planets: HashSet::new(),
            moons: HashSet::new(),
            global_moons,
        }
    }

    /// Reset moon-name scope at each planet boundary, unless moons are
    /// globally scoped.
    fn begin_planet(&mut self) {
        if !self.global_moons {
            self.moons.clear();
        }
    }
}

/// Draw a name, redrawing on collision up to the retry limit, then
/// disambiguating with the first free numeric suffix. The accepted name is
/// recorded in `used` before returning.
fn unique_name<R, F>(rng: &mut R, used: &mut HashSet<String>, mut draw: F) -> String
where
    R: Rng,
    F: FnMut(&mut R) -> String,
{
    let mut candidate = draw(rng);
    let mut retries = 0;
    while used.contains(&candidate) {
        if retries < NAME_RETRY_LIMIT {
            candidate = draw(rng);
            retries += 1;
        } else {
            candidate = disambiguate(&candidate, used);
            break;
        }
    }
    used.insert(candidate.clone());
    candidate
}

/// Append `-2`, `-3`, ... until the name is free. Pure string search, no
/// PRNG draws, so stream position never depends on ledger contents.
fn disambiguate(base: &str, used: &HashSet<String>) -> String {
    let mut n = 2u32;
    loop {
        let candidate = format!("{base}-{n}");
        if !used.contains(&candidate) {
            return candidate;
        }
        n += 1;
    }
}

/// Generation context: the Lehmer32 stream plus the current universe seed.
///
/// All generator state lives here; there are no globals. `save_rng_state`
/// and `restore_rng_state` let a caller run an out-of-band generation (a
/// "regenerate this system" action) without perturbing the main stream.
#[derive(Clone, Debug)]
pub struct Verse {
    rng: Lehmer32,
    universe_seed: u32,
    global_moon_names: bool,
}

impl Default for Verse {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl Verse {
    /// Create a context and initialize the stream from `seed`.
    ///
    /// Accepts any seed shape; see [`SeedInput`] for the resolution policy.
    pub fn new(seed: impl Into<SeedInput>) -> Self {
        let mut verse = Self {
            rng: Lehmer32::new(DEFAULT_SEED),
            universe_seed: DEFAULT_SEED,
            global_moon_names: false,
        };
        verse.initialize_rng(seed);
        verse
    }

    /// Widen moon-name uniqueness from per-planet to per-generation-call.
    pub fn set_global_moon_names(&mut self, enabled: bool) {
        self.global_moon_names = enabled;
    }

    /// The seed sector-coordinate inputs resolve against.
    pub fn universe_seed(&self) -> u32 {
        self.universe_seed
    }

    /// Set the stream state from a seed, applying the resolution policy:
    /// numeric seeds are used as-is, sector coordinates resolve against the
    /// current universe seed, and anything else draws a fresh value from
    /// the live stream.
    pub fn initialize_rng(&mut self, seed: impl Into<SeedInput>) {
        let resolved = self.resolve_seed(seed.into());
        self.universe_seed = resolved;
        self.rng.initialize(resolved);
    }

    /// Snapshot the stream state. Side-effect-free.
    pub fn save_rng_state(&self) -> GeneratorState {
        self.rng.save()
    }

    /// Restore a previously saved stream state. Draws after the restore
    /// are bit-identical to the draws that followed the matching save.
    pub fn restore_rng_state(&mut self, state: GeneratorState) {
        self.rng.restore(state);
    }

    fn resolve_seed(&mut self, seed: SeedInput) -> u32 {
        match seed {
            SeedInput::Numeric(n) => n,
            SeedInput::Sector(coordinate) => self
                .universe_seed
                .wrapping_add(sector_to_seed(&coordinate)),
            SeedInput::Absent => self.rng.next_u32(),
        }
    }

    /// Generate a single star system.
    ///
    /// Resolves `seed`, re-initializes the stream from it, and runs the
    /// pipeline with a fresh name ledger. Never fails, whatever the seed
    /// input: malformed seeds resolve to "next from stream".
    pub fn generate_star_system(&mut self, seed: impl Into<SeedInput>) -> StarSystem {
        let resolved = self.resolve_seed(seed.into());
        self.rng.initialize(resolved);
        let mut ledger = NameLedger::new(self.global_moon_names);
        self.star_system(&mut ledger)
    }

    /// Generate a single planet, with moons, outside any system.
    ///
    /// Same seed policy as [`generate_star_system`](Self::generate_star_system).
    pub fn generate_planet(&mut self, seed: impl Into<SeedInput>) -> Planet {
        let resolved = self.resolve_seed(seed.into());
        self.rng.initialize(resolved);
        let mut ledger = NameLedger::new(self.global_moon_names);
        self.planet(&mut ledger)
    }

    /// Generate a single moon from the current stream position.
    pub fn generate_moon(&mut self) -> Moon {
        let mut ledger = NameLedger::new(self.global_moon_names);
        self.moon(&mut ledger)
    }

    /// Generate a universe of `sector_count` star systems in raster order.
    ///
    /// The resolved seed becomes the universe seed; each sector's system is
    /// generated from `(universe_seed + sector_offset) mod 2^32`, all
    /// sectors sharing one name ledger so star and planet names stay unique
    /// across the whole universe.
    pub fn generate_universe(
        &mut self,
        sector_count: usize,
        seed: impl Into<SeedInput>,
    ) -> Universe {
        let resolved = self.resolve_seed(seed.into());
        self.universe_seed = resolved;
        self.rng.initialize(resolved);

        let mut ledger = NameLedger::new(self.global_moon_names);
        let mut systems = Vec::with_capacity(sector_count);
        for index in 0..sector_count {
            let coordinate = sector_index_to_coordinate(index);
            let sector_seed = resolved.wrapping_add(sector_to_seed(&coordinate));
            self.rng.initialize(sector_seed);
            systems.push(self.star_system(&mut ledger));
        }

        Universe {
            seed: resolved,
            systems,
        }
    }

    fn star_system(&mut self, ledger: &mut NameLedger) -> StarSystem {
        let star_type = pick_star_type(&mut self.rng);
        let star_name = unique_name(&mut self.rng, &mut ledger.stars, word_banks::star_name);

        let mut planets = Vec::new();
        // Cap applied in the loop condition: once full, no further
        // continue-draw happens, and a shorter run consumes exactly the
        // draws its own bodies did.
        while planets.len() < MAX_PLANETS && self.rng.gen_bool(PLANET_CONTINUE_P) {
            planets.push(self.planet(ledger));
        }

        StarSystem {
            star_name,
            star_type,
            planets,
        }
    }

    fn planet(&mut self, ledger: &mut NameLedger) -> Planet {
        let planet_type = pick_planet_class(&mut self.rng);
        let planet_name =
            unique_name(&mut self.rng, &mut ledger.planets, word_banks::planet_name);
        let orbit_au = self.rng.gen_range(0.3..40.0);
        let radius_km = match planet_type {
            PlanetClass::GasGiant => self.rng.gen_range(18_000.0..75_000.0),
            _ => self.rng.gen_range(2_400.0..9_500.0),
        };
        let terrain_seed = self.rng.next_u32();
        let terrain = planet_type.terrain_preset();

        ledger.begin_planet();
        let mut moons = Vec::new();
        while moons.len() < MAX_MOONS && self.rng.gen_bool(MOON_CONTINUE_P) {
            moons.push(self.moon(ledger));
        }

        Planet {
            planet_name,
            planet_type,
            orbit_au,
            radius_km,
            terrain_seed,
            terrain,
            moons,
        }
    }

    fn moon(&mut self, ledger: &mut NameLedger) -> Moon {
        let moon_type = pick_moon_type(&mut self.rng);
        let moon_name = unique_name(&mut self.rng, &mut ledger.moons, word_banks::moon_name);
        let radius_km = self.rng.gen_range(150.0..2_500.0);
        let orbit_km = self.rng.gen_range(80_000.0..1_200_000.0);

        Moon {
            moon_name,
            moon_type,
            radius_km,
            orbit_km,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sector::sector_to_seed;

    /// Total bodies in a system: the star, its planets, and their moons.
    fn body_count(system: &StarSystem) -> usize {
        1 + system
            .planets
            .iter()
            .map(|p| 1 + p.moons.len())
            .sum::<usize>()
    }

    #[test]
    fn test_universe_generation_is_deterministic() {
        let mut a = Verse::new(12345u32);
        let mut b = Verse::new(12345u32);
        let u1 = a.generate_universe(9, 42u32);
        let u2 = b.generate_universe(9, 42u32);
        assert_eq!(u1, u2);
        assert_eq!(u1.systems.len(), 9);
    }

    #[test]
    fn test_regeneration_on_same_context_is_identical() {
        let mut verse = Verse::new(12345u32);
        let u1 = verse.generate_universe(9, 42u32);
        let u2 = verse.generate_universe(9, 42u32);
        assert_eq!(u1, u2);
    }

    #[test]
    fn test_sector_zero_matches_direct_generation() {
        let mut verse = Verse::new(12345u32);
        let universe = verse.generate_universe(9, 42u32);

        // Sector A0 has offset 0, so its seed is the universe seed itself.
        let mut direct = Verse::new(12345u32);
        let system = direct.generate_star_system(42u32.wrapping_add(sector_to_seed("A0")));
        assert_eq!(universe.systems[0], system);
    }

    #[test]
    fn test_sector_string_equals_numeric_seed() {
        let mut verse = Verse::new(1u32);
        verse.initialize_rng(42u32);
        let via_string = verse.generate_star_system("B1");
        let via_numeric =
            verse.generate_star_system(42u32.wrapping_add(sector_to_seed("B1")));
        assert_eq!(via_string, via_numeric);
    }

    #[test]
    fn test_planet_names_unique_across_universe() {
        let mut verse = Verse::new(7u32);
        let universe = verse.generate_universe(64, 1234u32);
        let names: Vec<&str> = universe
            .systems
            .iter()
            .flat_map(|s| s.planets.iter())
            .map(|p| p.planet_name.as_str())
            .collect();
        let distinct: HashSet<&str> = names.iter().copied().collect();
        assert_eq!(distinct.len(), names.len());
    }

    #[test]
    fn test_star_names_unique_across_universe() {
        let mut verse = Verse::new(7u32);
        let universe = verse.generate_universe(64, 1234u32);
        let names: Vec<&str> = universe
            .systems
            .iter()
            .map(|s| s.star_name.as_str())
            .collect();
        let distinct: HashSet<&str> = names.iter().copied().collect();
        assert_eq!(distinct.len(), names.len());
    }

    #[test]
    fn test_moon_names_unique_per_planet() {
        let mut verse = Verse::new(7u32);
        let universe = verse.generate_universe(64, 99u32);
        for system in &universe.systems {
            for planet in &system.planets {
                let names: Vec<&str> =
                    planet.moons.iter().map(|m| m.moon_name.as_str()).collect();
                let distinct: HashSet<&str> = names.iter().copied().collect();
                assert_eq!(distinct.len(), names.len(), "in {}", planet.planet_name);
            }
        }
    }

    #[test]
    fn test_global_moon_names_option() {
        let mut verse = Verse::new(7u32);
        verse.set_global_moon_names(true);
        let universe = verse.generate_universe(64, 99u32);
        let names: Vec<&str> = universe
            .systems
            .iter()
            .flat_map(|s| s.planets.iter())
            .flat_map(|p| p.moons.iter())
            .map(|m| m.moon_name.as_str())
            .collect();
        let distinct: HashSet<&str> = names.iter().copied().collect();
        assert_eq!(distinct.len(), names.len());
    }

    #[test]
    fn test_seed_sensitivity() {
        let mut a = Verse::new(1u32);
        let mut b = Verse::new(1u32);
        let u1 = a.generate_universe(9, 42u32);
        let u2 = b.generate_universe(9, 43u32);
        let stars1: Vec<&str> = u1.systems.iter().map(|s| s.star_name.as_str()).collect();
        let stars2: Vec<&str> = u2.systems.iter().map(|s| s.star_name.as_str()).collect();
        assert_ne!(stars1, stars2);
    }

    #[test]
    fn test_save_restore_replays_generation() {
        let mut verse = Verse::new(99u32);
        let saved = verse.save_rng_state();
        let first = verse.generate_star_system(SeedInput::Absent);
        verse.restore_rng_state(saved);
        let second = verse.generate_star_system(SeedInput::Absent);
        assert_eq!(first, second);
    }

    #[test]
    fn test_out_of_band_generation_does_not_disturb_stream() {
        // Baseline: generate two systems back to back from the stream.
        let mut baseline = Verse::new(2024u32);
        let _ = baseline.generate_star_system(SeedInput::Absent);
        let expected_next = baseline.generate_star_system(SeedInput::Absent);

        // Same sequence, but with a save/generate/restore detour between
        // the two stream-driven generations.
        let mut verse = Verse::new(2024u32);
        let _ = verse.generate_star_system(SeedInput::Absent);
        let saved = verse.save_rng_state();
        let _detour = verse.generate_star_system(777_777u32);
        verse.restore_rng_state(saved);
        let next = verse.generate_star_system(SeedInput::Absent);

        assert_eq!(next, expected_next);
    }

    #[test]
    fn test_regenerating_a_system_reproduces_it() {
        let mut verse = Verse::new(7u32);
        let first = verse.generate_star_system(1001u32);
        let saved = verse.save_rng_state();
        let _other = verse.generate_star_system(2002u32);
        verse.restore_rng_state(saved);
        let again = verse.generate_star_system(1001u32);
        assert_eq!(first, again);
    }

    #[test]
    fn test_body_count_bounds() {
        let mut verse = Verse::new(5u32);
        for seed in [0u32, 1, 42, 999, 123_456, 0xFFFF_FFFF] {
            let universe = verse.generate_universe(64, seed);
            for system in &universe.systems {
                assert!(body_count(system) < 40, "seed {seed}: {}", body_count(system));
                assert!(system.planets.len() <= MAX_PLANETS);
                for planet in &system.planets {
                    assert!(planet.moons.len() < 6);
                }
            }
        }
    }

    #[test]
    fn test_malformed_seeds_never_fail() {
        let mut verse = Verse::new(3u32);
        let cases = [
            SeedInput::Absent,
            SeedInput::from("invalid"),
            SeedInput::from("Z9"),
            SeedInput::from(None::<u32>),
            SeedInput::from(""),
        ];
        for seed in cases {
            let system = verse.generate_star_system(seed);
            assert!(!system.star_name.is_empty());
            for planet in &system.planets {
                assert!(!planet.planet_name.is_empty());
                // The moons list exists even when empty.
                assert!(planet.moons.len() <= MAX_MOONS);
            }
        }
    }

    #[test]
    fn test_garbage_seed_behaves_like_absent() {
        // Both resolve to "draw the next value from the stream", so from
        // identical stream positions they produce identical systems.
        let mut a = Verse::new(55u32);
        let mut b = Verse::new(55u32);
        let garbage = a.generate_star_system("not-a-seed");
        let absent = b.generate_star_system(SeedInput::Absent);
        assert_eq!(garbage, absent);
    }

    #[test]
    fn test_out_of_range_sector_is_deterministic() {
        let mut a = Verse::new(8u32);
        let mut b = Verse::new(8u32);
        a.initialize_rng(42u32);
        b.initialize_rng(42u32);
        assert_eq!(a.generate_star_system("Z9"), b.generate_star_system("Z9"));
    }

    #[test]
    fn test_concrete_scenario() {
        // initialize_rng(12345); generate_universe(9, seed=42) twice must
        // match, and sector A0 must match direct generation from its seed.
        let mut verse = Verse::new(SeedInput::Absent);
        verse.initialize_rng(12345u32);
        let u1 = verse.generate_universe(9, 42u32);
        verse.initialize_rng(12345u32);
        let u2 = verse.generate_universe(9, 42u32);
        assert_eq!(u1, u2);
        assert_eq!(u1.systems.len(), 9);

        let sector_seed = 42u32.wrapping_add(sector_to_seed("A0"));
        let direct = verse.generate_star_system(sector_seed);
        assert_eq!(u1.systems[0].star_name, direct.star_name);
        assert_eq!(u1.systems[0].star_type, direct.star_type);
    }

    #[test]
    fn test_single_planet_generation_is_deterministic() {
        let mut a = Verse::new(4u32);
        let mut b = Verse::new(4u32);
        let p1 = a.generate_planet(808u32);
        let p2 = b.generate_planet(808u32);
        assert_eq!(p1, p2);
        assert!(p1.moons.len() <= MAX_MOONS);
        assert!(p1.orbit_au > 0.0);
    }

    #[test]
    fn test_single_moon_generation() {
        let mut verse = Verse::new(4u32);
        let moon = verse.generate_moon();
        assert!(!moon.moon_name.is_empty());
        assert!(moon.radius_km > 0.0);
    }

    #[test]
    fn test_empty_universe() {
        let mut verse = Verse::new(1u32);
        let universe = verse.generate_universe(0, 42u32);
        assert!(universe.systems.is_empty());
        assert_eq!(universe.seed, 42);
        assert_eq!(verse.universe_seed(), 42);
    }

    #[test]
    fn test_oversized_universe_does_not_fail() {
        // More sectors than the grid holds: coordinates wrap, seeds repeat,
        // and name disambiguation keeps planet names distinct.
        let mut verse = Verse::new(1u32);
        let universe = verse.generate_universe(70, 42u32);
        assert_eq!(universe.systems.len(), 70);
        let names: Vec<&str> = universe
            .systems
            .iter()
            .flat_map(|s| s.planets.iter())
            .map(|p| p.planet_name.as_str())
            .collect();
        let distinct: HashSet<&str> = names.iter().copied().collect();
        assert_eq!(distinct.len(), names.len());
    }

    #[test]
    fn test_disambiguation_appends_first_free_suffix() {
        let mut used: HashSet<String> = HashSet::new();
        used.insert("Velaris".to_string());
        used.insert("Velaris-2".to_string());
        assert_eq!(disambiguate("Velaris", &used), "Velaris-3");
    }

    #[test]
    fn test_unique_name_exhaustion_falls_back_to_suffix() {
        // A draw function with a single possible output forces the retry
        // path and then the suffix fallback.
        let mut rng = Lehmer32::new(1);
        let mut used: HashSet<String> = HashSet::new();
        let first = unique_name(&mut rng, &mut used, |_| "Only".to_string());
        let second = unique_name(&mut rng, &mut used, |_| "Only".to_string());
        let third = unique_name(&mut rng, &mut used, |_| "Only".to_string());
        assert_eq!(first, "Only");
        assert_eq!(second, "Only-2");
        assert_eq!(third, "Only-3");
    }
}
