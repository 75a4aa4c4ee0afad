//! Behavioural checks of the merger over fixed and generated inputs.

use aws_cidr_merge::processing::{merge_networks, parse_cidrs};
use aws_cidr_merge::{merge_cidrs, Ipv4, MergeStrategy};
use itertools::Itertools;

const FIXTURES: &[&[&str]] = &[
    &["10.0.0.0/24", "10.0.1.0/24"],
    &["10.0.0.0/24", "10.0.0.0/25"],
    &["10.0.0.128/25", "10.0.1.0/25"],
    &["10.0.0.0/23", "10.0.1.128/25"],
    &["192.168.1.0/24", "192.168.0.0/24"],
    &["10.0.0.0/23", "10.0.2.0/24", "10.0.3.0/24"],
    &["10.0.3.0/24", "10.0.0.0/24", "10.0.2.0/24", "10.0.1.0/24", "10.0.4.0/24"],
    &["0.0.0.0/1", "128.0.0.0/2", "192.0.0.0/2", "10.0.0.0/8"],
    &["255.255.255.255/32", "255.255.255.254/32", "255.255.255.252/31"],
    &["52.80.0.0/16", "52.81.0.0/16", "54.222.0.0/19", "54.222.32.0/19", "54.222.48.0/22"],
];

/// Deterministic generator so failures reproduce.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u32 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (self.0 >> 32) as u32
    }
}

/// Random blocks inside 10.0.0.0/16 so that they collide often.
fn generated_inputs() -> Vec<Vec<String>> {
    let mut rng = Lcg(0x5eed);
    (0..200)
        .map(|_| {
            let count = 1 + rng.next() % 40;
            (0..count)
                .map(|_| {
                    let mask = 18 + rng.next() % 11;
                    let host = rng.next() & 0xFFFF;
                    format!("10.0.{}.{}/{mask}", host >> 8, host & 0xFF)
                })
                .collect()
        })
        .collect()
}

fn all_inputs() -> Vec<Vec<String>> {
    FIXTURES
        .iter()
        .map(|set| set.iter().map(|s| s.to_string()).collect())
        .chain(generated_inputs())
        .collect()
}

fn blocks(cidrs: &[String]) -> Vec<Ipv4> {
    parse_cidrs(cidrs).expect("valid CIDRs")
}

/// Union of covered addresses as sorted, non-touching half-open ranges.
fn covered(blocks: &[Ipv4]) -> Vec<(u64, u64)> {
    let mut ranges: Vec<(u64, u64)> = blocks
        .iter()
        .map(|b| (b.lo() as u64, b.hi() as u64 + 1))
        .collect();
    ranges.sort();

    let mut union: Vec<(u64, u64)> = Vec::new();
    for (start, end) in ranges {
        match union.last_mut() {
            Some(last) if start <= last.1 => last.1 = last.1.max(end),
            _ => union.push((start, end)),
        }
    }
    union
}

#[test]
fn test_idempotent() {
    for input in all_inputs() {
        let once = merge_cidrs(&input).unwrap();
        let twice = merge_cidrs(&once).unwrap();
        assert_eq!(once, twice, "input {input:?}");
    }
}

#[test]
fn test_coverage_preserved() {
    for strategy in [MergeStrategy::SinglePass, MergeStrategy::Fixpoint] {
        for input in all_inputs() {
            let before = blocks(&input);
            let after = merge_networks(before.clone(), strategy);
            assert_eq!(
                covered(&before),
                covered(&after),
                "{strategy} input {input:?} output {after:?}"
            );
        }
    }
}

#[test]
fn test_ascending_and_disjoint() {
    for strategy in [MergeStrategy::SinglePass, MergeStrategy::Fixpoint] {
        for input in all_inputs() {
            let merged = merge_networks(blocks(&input), strategy);
            for (a, b) in merged.iter().tuple_windows() {
                assert!(a.lo() < b.lo(), "{strategy} not ascending: {a} {b}");
                assert!(!a.overlaps(b), "{strategy} overlap: {a} {b}");
            }
        }
    }
}

#[test]
fn test_no_mergeable_siblings_left() {
    for input in all_inputs() {
        let merged = merge_networks(blocks(&input), MergeStrategy::Fixpoint);
        for (a, b) in merged.iter().tuple_windows() {
            let mergeable = a.is_followed_by(b)
                && a
                    .parent_if_lower_half()
                    .is_some_and(|parent| parent.hi() == b.hi());
            assert!(!mergeable, "siblings left unmerged: {a} {b}");
        }
    }
}

#[test]
fn test_permutations_give_same_output() {
    for set in FIXTURES.iter().copied().filter(|set| set.len() <= 5) {
        let expected = merge_cidrs(set).unwrap();
        for perm in set.iter().permutations(set.len()) {
            assert_eq!(merge_cidrs(&perm).unwrap(), expected, "permutation {perm:?}");
        }
    }
}

#[test]
fn test_generated_input_reversed() {
    for input in generated_inputs() {
        let reversed: Vec<String> = input.iter().rev().cloned().collect();
        assert_eq!(merge_cidrs(&input).unwrap(), merge_cidrs(&reversed).unwrap());
    }
}
