mod common;

use glyphbreak::history::History;
use glyphbreak::key::Key;
use glyphbreak::optimizer::{
    BiasedSampler, PolishObserver, PolishOptions, Polisher, ProgressCallback, RandomSearch,
};
use std::cell::Cell;

fn options(depth: usize, breadth: usize) -> PolishOptions {
    PolishOptions {
        depth,
        breadth,
        ..Default::default()
    }
}

fn the_key() -> Key {
    common::key(&[(1, 't'), (2, 'h'), (3, 'e')])
}

#[test]
fn test_polish_keeps_word_pairs_frozen() {
    let cipher = common::tiny_cipher();
    let scorer = common::scorer(&["the", "cat", "sat"]);
    let polisher = Polisher::new(&cipher, &scorer, options(3, 10));
    let mut history = History::new();
    let mut rng = BiasedSampler::with_seed(8);

    let report = polisher
        .polish(&mut rng, &mut history, &the_key(), &())
        .unwrap();

    assert_eq!(history.len(), report.evaluated);
    if !report.stopped_early {
        assert_eq!(report.evaluated, 30);
        assert_eq!(report.rounds, 3);
    }
    for (key, _) in history.iter() {
        assert_eq!(key.len(), 6, "full-length key expected: {}", key);
        assert_eq!(key.get(1), Some('t'));
        assert_eq!(key.get(2), Some('h'));
        assert_eq!(key.get(3), Some('e'));
    }
    assert!(report.best_score >= 1.0 / 3.0 - 1e-9);
    // The seed key is only in the local pool.
    assert!(!history.contains(&the_key()));
}

#[test]
fn test_later_rounds_freeze_the_improved_key() {
    let cipher = common::tiny_cipher();
    let scorer = common::scorer(&["the", "cat", "sat"]);
    let polisher = Polisher::new(&cipher, &scorer, options(2, 1));
    let mut history = History::new();
    // Round 1 redraws 5, 4, 6 as a, o, s ("the oat sat").
    // Round 2 keeps a and s from "sat" and redraws only 4.
    let mut rng = common::scripted(&[0.04, 0.04, 0.143, 0.1]);

    let report = polisher
        .polish(&mut rng, &mut history, &the_key(), &())
        .unwrap();

    assert_eq!(report.evaluated, 2);
    assert_eq!(report.rounds, 2);
    assert!(!report.stopped_early);
    assert_eq!(rng.next(), None);

    let keys: Vec<&Key> = history.iter().map(|(k, _)| k).collect();
    assert_eq!(keys[0].get(5), Some('a'));
    assert_eq!(keys[0].get(4), Some('o'));
    assert_eq!(keys[0].get(6), Some('s'));

    let second = keys[1];
    for (symbol, letter) in [(1, 't'), (2, 'h'), (3, 'e'), (5, 'a'), (6, 's')] {
        assert_eq!(second.get(symbol), Some(letter), "{}", second);
    }
    assert_eq!(second.get(4), Some('i'));
    assert!((report.best_score - 2.0 / 3.0).abs() < 1e-9);
}

#[test]
fn test_polish_stops_when_everything_is_frozen() {
    let cipher = common::tiny_cipher();
    let scorer = common::scorer(&["the", "cat", "sat"]);
    let polisher = Polisher::new(&cipher, &scorer, options(5, 5));
    let seed = common::key(&[(1, 't'), (2, 'h'), (3, 'e'), (4, 'c'), (5, 'a'), (6, 's')]);
    let mut history = History::new();

    let report = polisher
        .polish(&mut BiasedSampler::with_seed(1), &mut history, &seed, &())
        .unwrap();

    assert!(report.stopped_early);
    assert_eq!(report.evaluated, 0);
    assert_eq!(report.rounds, 0);
    assert_eq!(report.best_key, Some(seed));
    assert_eq!(report.best_score, 1.0);
    assert!(history.is_empty());
}

#[test]
fn test_polish_from_an_unscored_seed_draws_freely() {
    let cipher = common::tiny_cipher();
    let scorer = common::scorer(&["zzz"]);
    let polisher = Polisher::new(&cipher, &scorer, options(2, 4));
    let mut history = History::new();

    let report = polisher
        .polish(
            &mut BiasedSampler::with_seed(3),
            &mut history,
            &Key::default(),
            &(),
        )
        .unwrap();

    assert_eq!(report.evaluated, 8);
    assert_eq!(report.best_key, None);
    assert_eq!(report.best_score, 0.0);
    assert!(!report.stopped_early);
}

struct StopAfter {
    rounds: usize,
    seen: Cell<usize>,
}

impl PolishObserver for StopAfter {
    fn on_round(&self, round: usize, _best_score: f64, _best_key: Option<&Key>) -> bool {
        self.seen.set(round);
        round < self.rounds
    }
}

#[test]
fn test_observer_can_interrupt() {
    let cipher = common::tiny_cipher();
    let scorer = common::scorer(&["zzz"]);
    let polisher = Polisher::new(&cipher, &scorer, options(10, 3));
    let observer = StopAfter {
        rounds: 2,
        seen: Cell::new(0),
    };

    let report = polisher
        .polish(
            &mut BiasedSampler::with_seed(4),
            &mut History::new(),
            &Key::default(),
            &observer,
        )
        .unwrap();

    assert_eq!(observer.seen.get(), 2);
    assert_eq!(report.rounds, 2);
    assert_eq!(report.evaluated, 6);
    assert!(report.stopped_early);
}

#[test]
fn test_polish_stops_on_exhausted_search_space() {
    // One unknown symbol and a sampler that always picks the same letter.
    let cipher =
        glyphbreak::cipher::Ciphertext::new(vec![1, common::NEWLINE], common::assumed()).unwrap();
    let scorer = common::scorer(&["z"]);
    let polisher = Polisher::new(
        &cipher,
        &scorer,
        PolishOptions {
            depth: 3,
            breadth: 3,
            key_length: 1,
            max_attempts: 5,
        },
    );
    let mut history = History::new();

    let report = polisher
        .polish(
            &mut std::iter::repeat(0.0),
            &mut history,
            &Key::default(),
            &(),
        )
        .unwrap();

    assert!(report.stopped_early);
    assert_eq!(report.evaluated, 1);
    assert_eq!(history.get(&common::key(&[(1, 'z')])), Some(1.0));
}

struct Count(Cell<usize>);

impl ProgressCallback for Count {
    fn on_progress(&self, _evaluated: usize, _best: f64, _key: Option<&Key>) -> bool {
        self.0.set(self.0.get() + 1);
        true
    }
}

#[test]
fn test_random_search_checks_every_key() {
    let cipher = common::transcript();
    let scorer = common::scorer(&["the", "of", "a"]);
    let search = RandomSearch::new(&cipher, &scorer).with_report_every(10);
    let mut history = History::new();
    let calls = Count(Cell::new(0));

    let report = search
        .run(
            &mut BiasedSampler::with_seed(9),
            &mut history,
            6,
            50,
            &calls,
        )
        .unwrap();

    assert_eq!(report.evaluated, 50);
    assert_eq!(history.len(), 50);
    assert_eq!(calls.0.get(), 5);
    assert!(!report.exhausted);
    assert!(history.iter().all(|(k, _)| k.len() == 6));
    if let Some(best) = &report.best_key {
        assert_eq!(history.get(best), Some(report.best_score));
    }
}
