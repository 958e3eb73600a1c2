mod common;

use glyphbreak::cipher::Ciphertext;
use glyphbreak::key::Key;
use glyphbreak::optimizer::letter_index;
use proptest::prelude::*;
use regex::Regex;
use std::sync::OnceLock;

fn cipher() -> &'static Ciphertext {
    static CIPHER: OnceLock<Ciphertext> = OnceLock::new();
    CIPHER.get_or_init(common::transcript)
}

// --- STRATEGIES ---

// Valid pairs over the transcript's unknown symbols, letters may repeat.
fn arb_pairs() -> impl Strategy<Value = Vec<(u16, char)>> {
    let symbols = cipher().canonical_ranking().as_slice().to_vec();
    proptest::sample::subsequence(symbols, 0..=24)
        .prop_flat_map(|syms| {
            let n = syms.len();
            (Just(syms), proptest::collection::vec(0u8..26, n))
        })
        .prop_map(|(syms, letters)| {
            syms.into_iter()
                .zip(letters)
                .map(|(s, l)| (s, (b'a' + l) as char))
                .collect()
        })
}

fn arb_pairs_and_shuffle() -> impl Strategy<Value = (Vec<(u16, char)>, Vec<(u16, char)>)> {
    arb_pairs().prop_flat_map(|pairs| (Just(pairs.clone()), Just(pairs).prop_shuffle()))
}

proptest! {
    #[test]
    fn prop_canonical_ignores_construction_order((a, b) in arb_pairs_and_shuffle()) {
        let ka = cipher().key(&a).unwrap();
        let kb = cipher().key(&b).unwrap();
        prop_assert_eq!(&ka, &kb);
        prop_assert_eq!(ka.to_string(), kb.to_string());

        let ranks: Vec<usize> = ka
            .symbols()
            .map(|s| cipher().canonical_ranking().rank_of(s).unwrap())
            .collect();
        prop_assert!(ranks.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn prop_text_form_is_stable(pairs in arb_pairs()) {
        let re = Regex::new(r"^\(((\(\d+, '[a-z]'\)(, \(\d+, '[a-z]'\))*,?))?\)$").unwrap();
        let key = Key::new(pairs).unwrap();
        let text = key.to_string();

        prop_assert!(re.is_match(&text), "unexpected text form {}", text);
        prop_assert_eq!(text.parse::<Key>().unwrap(), key);
    }

    #[test]
    fn prop_letter_index_in_range(sample in 0.0f64..=1.0, remaining in 1usize..=26) {
        prop_assert!(letter_index(sample, remaining) < remaining);
    }

    #[test]
    fn prop_score_is_a_fraction(pairs in arb_pairs()) {
        let scorer = common::scorer(&["the", "of", "a", "and"]);
        let key = Key::new(pairs).unwrap();
        let score = scorer.score_key(cipher().words(), &key);
        prop_assert!((0.0..=1.0).contains(&score));
    }
}
