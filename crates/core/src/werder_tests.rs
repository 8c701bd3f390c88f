// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use yare::parameterized;

fn seeded(seed: u64) -> Werder<StdRng> {
    Werder::new(StdRng::seed_from_u64(seed))
}

#[test]
fn werd_is_at_least_min_syllables_long() {
    let mut werder = seeded(1);
    for _ in 0..100 {
        assert!(werder.werd(None).len() >= werder.config().syllables_min);
    }
}

#[test]
fn zero_syllables_is_empty() {
    assert_eq!(seeded(2).werd(Some(0)), "");
}

#[test]
fn single_syllable_is_a_vowel_or_beginning() {
    let mut werder = seeded(3);
    for _ in 0..100 {
        let werd = werder.werd(Some(1));
        assert!(
            VOWELS.contains(&werd.as_str()) || BEGINNINGS.contains(&werd.as_str()),
            "unexpected werd {werd:?}"
        );
    }
}

#[test]
fn same_seed_same_output() {
    assert_eq!(seeded(42).sentence(None), seeded(42).sentence(None));
}

#[test]
fn sentence_word_count_within_bounds() {
    let mut werder = seeded(4);
    for _ in 0..50 {
        let count = werder.sentence(None).split(' ').count();
        assert!((5..=9).contains(&count), "{count} werds");
    }
}

#[test]
fn sentence_is_capitalized_and_punctuated() {
    let sentence = seeded(5).sentence(Some(3));
    let first = sentence.chars().next().unwrap();
    assert!(first.is_ascii_uppercase());
    assert!(sentence.ends_with(['!', '.', '?']));
    assert_eq!(sentence.split(' ').count(), 3);
}

#[test]
fn empty_sentence_is_just_punctuation() {
    let sentence = seeded(6).sentence(Some(0));
    assert!(PUNCTUATION.contains(&sentence.as_str()));
}

#[parameterized(
    syllables = { WerderConfig { syllables_min: 8, ..WerderConfig::default() }, "syllable" },
    werds = { WerderConfig { werds_min: 10, werds_max: 2, ..WerderConfig::default() }, "werd" },
)]
fn inverted_bounds_are_rejected(config: WerderConfig, what: &str) {
    let err = Werder::with_config(config, StdRng::seed_from_u64(0)).unwrap_err();
    assert!(matches!(err, WerderError::InvalidBounds { what: w, .. } if w == what));
}

#[test]
fn config_from_toml_fills_defaults() {
    let config: WerderConfig = toml::from_str("werds_max = 5\nwerds_min = 5").unwrap();
    assert_eq!(config.syllables_min, 3);
    let mut werder = Werder::with_config(config, StdRng::seed_from_u64(7)).unwrap();
    assert_eq!(werder.sentence(None).split(' ').count(), 5);
}

proptest! {
    #[test]
    fn werds_are_lowercase_ascii(seed in any::<u64>(), syllables in 0usize..12) {
        let werd = seeded(seed).werd(Some(syllables));
        prop_assert!(werd.chars().all(|c| c.is_ascii_lowercase()));
    }
}
