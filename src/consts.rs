/// English letters, most to least frequent.
/// Source: http://pi.math.cornell.edu/~mec/2003-2004/cryptography/subs/frequencies.html
pub const ENGLISH_FREQUENCY_ORDER: [char; 26] = [
    'e', 't', 'a', 'o', 'i', 'n', 's', 'r', 'h', 'd', 'l', 'u', 'c', 'm', 'f', 'y', 'w', 'g',
    'p', 'b', 'v', 'k', 'x', 'q', 'j', 'z',
];

/// The assumed character that separates transcript lines.
pub const LINE_SEPARATOR: char = '\n';

/// Scale of the exponential distribution behind the letter sampler.
/// Keeps most samples near 0 so frequent letters are preferred.
pub const SAMPLER_SCALE: f64 = 0.2;

/// Number of raw exponential draws per sampler refill.
pub const SAMPLER_BATCH_SIZE: usize = 10_000;

/// Collision retries before the generator reports an exhausted search space.
pub const DEFAULT_MAX_ATTEMPTS: usize = 10_000;

/// Requested key length for polishing. Clamped to the unknown-symbol count.
pub const DEFAULT_KEY_LENGTH: usize = 26;

pub const DEFAULT_POLISH_DEPTH: usize = 100;
pub const DEFAULT_POLISH_BREADTH: usize = 100;

pub const DEFAULT_DICTIONARY_PATH: &str = "/usr/share/dict/words";
pub const DEFAULT_HISTORY_PATH: &str = "checked_keys.json";
