//! Name fragment pools for stars, planets, and moons.
//!
//! Names are assembled from fragment pools by concatenation, the same way
//! for every body of a kind, so a fixed draw sequence always produces the
//! same name. Pool sizes are generous relative to the per-system body
//! ceilings; collisions across a universe are handled by the generators,
//! not here.

use rand::Rng;

// ============================================================================
// STAR NAME COMPONENTS
// ============================================================================

const STAR_PREFIXES: &[&str] = &[
    "Alde", "Alta", "Antar", "Arca", "Bela", "Beta", "Cano", "Capel",
    "Casta", "Cygn", "Deneb", "Elna", "Foma", "Gaia", "Hada", "Izar",
    "Keid", "Kora", "Lyra", "Maia", "Mira", "Nash", "Nunki", "Orio",
    "Pola", "Procy", "Rigel", "Sabik", "Sarga", "Sirio", "Spica", "Tarf",
    "Thuba", "Vega", "Wezen", "Xami", "Yildu", "Zosma", "Zuben", "Atla",
];

const STAR_MIDDLES: &[&str] = &[
    "ran", "bar", "nis", "tar", "lor", "mus", "des", "rek",
    "vin", "sol", "gan", "tis", "nor", "phi", "sar", "don",
];

const STAR_SUFFIXES: &[&str] = &[
    "a", "is", "us", "ae", "ion", "ium", "ar", "es", "or", "ux",
];

const STAR_DESIGNATIONS: &[&str] = &[
    "Prime", "Secundus", "Tertius", "Majoris", "Minoris", "Australis",
    "Borealis", "Proxima", "Ultima",
];

// ============================================================================
// PLANET NAME COMPONENTS
// ============================================================================

const PLANET_ROOTS: &[&str] = &[
    "Vel", "Tor", "Kel", "Dra", "Mor", "Syl", "Zan", "Qua",
    "Fen", "Gol", "Hex", "Ily", "Jun", "Kry", "Lum", "Myr",
    "Nov", "Oph", "Pax", "Rha", "Sol", "Tal", "Umb", "Vor",
    "Wyr", "Xan", "Ych", "Zephy", "Arc", "Bront", "Cryo", "Dun",
    "Ebon", "Fulg", "Gryph", "Hal", "Ign", "Jor", "Kar", "Lor",
    "Mal", "Ner", "Oct", "Pyr", "Quil", "Rust", "Ser", "Thul",
];

const PLANET_ENDINGS: &[&str] = &[
    "aris", "eon", "ios", "ara", "oth", "une", "ax", "ion",
    "ia", "os", "ur", "ath", "ea", "im", "ol", "yr",
    "antha", "eris", "ova", "ule", "is", "on", "ument", "aia",
];

const PLANET_EPITHETS: &[&str] = &[
    "Prime", "Major", "Minor", "Alpha", "Beta", "Gamma", "Nova", "Verge",
];

// ============================================================================
// MOON NAME COMPONENTS
// ============================================================================

const MOON_PREFIXES: &[&str] = &[
    "Ana", "Bris", "Cal", "Dio", "Ela", "Fir", "Gan", "Hyp",
    "Io", "Jap", "Kal", "Leda", "Mim", "Ner", "Obe", "Pan",
    "Rhe", "Sin", "Teth", "Umb", "Vir", "Whi", "Xen", "Ymir",
];

const MOON_SUFFIXES: &[&str] = &[
    "ope", "eia", "ys", "on", "ara", "etta", "iel", "os",
    "une", "a", "is", "ix",
];

/// Pick a random element from a pool with a single range draw.
pub fn pick<'a, R: Rng>(rng: &mut R, options: &[&'a str]) -> &'a str {
    options[rng.gen_range(0..options.len())]
}

/// Assemble a star name: prefix + middle, usually a suffix, occasionally a
/// catalog designation.
pub fn star_name<R: Rng>(rng: &mut R) -> String {
    let mut name = String::new();
    name.push_str(pick(rng, STAR_PREFIXES));
    name.push_str(pick(rng, STAR_MIDDLES));
    if rng.gen_bool(0.6) {
        name.push_str(pick(rng, STAR_SUFFIXES));
    }
    if rng.gen_bool(0.2) {
        name.push(' ');
        name.push_str(pick(rng, STAR_DESIGNATIONS));
    }
    name
}

/// Assemble a planet name: root + ending, occasionally an epithet.
pub fn planet_name<R: Rng>(rng: &mut R) -> String {
    let mut name = String::new();
    name.push_str(pick(rng, PLANET_ROOTS));
    name.push_str(pick(rng, PLANET_ENDINGS));
    if rng.gen_bool(0.25) {
        name.push(' ');
        name.push_str(pick(rng, PLANET_EPITHETS));
    }
    name
}

/// Assemble a moon name: prefix + suffix.
pub fn moon_name<R: Rng>(rng: &mut R) -> String {
    let mut name = String::new();
    name.push_str(pick(rng, MOON_PREFIXES));
    name.push_str(pick(rng, MOON_SUFFIXES));
    name
}
