use rand::rngs::StdRng;
use rand::SeedableRng;

use super::*;

fn pool() -> Vec<String> {
    ["Zebra", "Horse", "Donkey", "Mule", "Okapi"]
        .iter()
        .map(|name| name.to_string())
        .collect()
}

#[test]
fn includes_correct_answer_exactly_once() {
    let correct = "Zebra".to_owned();
    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let options = pick(&correct, &pool(), 4, &mut rng);
        assert_eq!(options.iter().filter(|option| **option == correct).count(), 1);
    }
}

#[test]
fn respects_option_count() {
    let correct = "Zebra".to_owned();
    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(pick(&correct, &pool(), 4, &mut rng).len(), 4);
    assert_eq!(pick(&correct, &pool(), 2, &mut rng).len(), 2);
}

#[test]
fn short_pool_returns_fewer_options() {
    let correct = "Zebra".to_owned();
    let mut rng = StdRng::seed_from_u64(0);

    let two = vec!["Zebra".to_owned(), "Horse".to_owned()];
    assert_eq!(pick(&correct, &two, 4, &mut rng).len(), 2);

    let lonely = vec!["Zebra".to_owned()];
    assert_eq!(pick(&correct, &lonely, 4, &mut rng), vec!["Zebra".to_owned()]);
}

#[test]
fn options_are_distinct() {
    let correct = "Zebra".to_owned();
    let noisy = vec![
        "Horse".to_owned(),
        "Horse".to_owned(),
        "Zebra".to_owned(),
        "Mule".to_owned(),
        "Mule".to_owned(),
    ];
    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let options = pick(&correct, &noisy, 4, &mut rng);
        assert_eq!(options.len(), 3);
        for option in &options {
            assert_eq!(options.iter().filter(|other| *other == option).count(), 1);
        }
    }
}

#[test]
fn correct_answer_missing_from_pool_still_appears() {
    let correct = "Okapi".to_owned();
    let decoys = vec!["Zebra".to_owned(), "Horse".to_owned(), "Donkey".to_owned()];
    let mut rng = StdRng::seed_from_u64(3);
    let options = pick(&correct, &decoys, 4, &mut rng);
    assert_eq!(options.len(), 4);
    assert!(options.contains(&correct));
}
