// Hand-maintained corrections to the system word list, mostly collected by
// reading `show --words-only` output.

/// Dictionary entries that are never accepted as decoded words.
pub const DENY_LIST: &[&str] = &[
    "th", "ob", "li", "pei", "rn", "cali", "ani", "au", "sn", "ts", "os", "rs",
    "es", "nth", "o", "ti", "lind", "mo", "zed", "mani", "sh", "sade", "ni",
    "hg", "les", "ac", "zane", "ho", "ann", "si", "noe", "zr", "kate", "ur",
    "tare", "tsars", "jain", "pate", "mads", "al", "saar", "fa", "che", "hes",
    "em", "eco", "mi", "hob", "ben", "ci", "len", "ra", "jon", "mira", "ned",
    "md", "mg", "leo", "oz", "fain", "ah", "laue", "wot", "fay", "roy", "mu",
    "nu", "fez", "np", "sol", "rho", "pd", "ag", "mel", "gad", "ito", "la",
    "lam", "loth", "tads", "hz", "ref", "cain", "di", "ibo", "sb", "ay", "fer",
    "rio", "ado", "nd", "ed", "yo", "ty", "eh", "val", "hos", "e", "jo",
    "ken", "re", "cary", "ow", "lo", "aft", "cid", "l", "oh", "ins", "mn",
    "lon", "kr", "mes", "hans", "par", "id", "rood", "moog", "joe", "zn", "na",
    "carl", "noh", "ad", "vegas", "howe", "lew", "mil", "sago", "se", "hart",
    "dos", "rep", "cains", "las", "siva", "pone", "gte", "johns",
    "glaser", "ted", "hbo", "thanh", "cato", "iso", "dec", "ca", "hew", "faye",
    "jan", "asp", "hep", "bah", "lea", "zion", "yale", "le", "devin", "bate",
];

/// Words missing from the dictionary but known to be part of the plaintext.
pub const ALLOW_LIST: &[&str] = &[
    "illithid", "askelios", "areksul", "aundaire", "goblinoids", "agression",
    "choas",
];
