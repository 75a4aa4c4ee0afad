//! CIDR block consolidation.
//!
//! Sweeps a sorted block list once with a single open accumulator, folding in
//! every following block that is contained in it, completes it as an aligned
//! sibling, or overlaps it. [`merge_networks`] repeats the sweep until nothing
//! more can be folded.

use super::parse::{parse_cidrs, sort_cidrs};
use crate::models::{CidrParseError, Ipv4, MAX_LENGTH};
use std::fmt;
use std::str::FromStr;

/// How many sweeps [`merge_networks`] runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MergeStrategy {
    /// One greedy sweep. Blocks that only become siblings after a later merge
    /// stay separate.
    SinglePass,
    /// Sweep until a pass folds nothing.
    #[default]
    Fixpoint,
}

impl FromStr for MergeStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "single-pass" | "single_pass" | "single" => Ok(MergeStrategy::SinglePass),
            "fixpoint" | "full" => Ok(MergeStrategy::Fixpoint),
            other => Err(format!("Unknown merge strategy: {other}")),
        }
    }
}

impl fmt::Display for MergeStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MergeStrategy::SinglePass => write!(f, "single-pass"),
            MergeStrategy::Fixpoint => write!(f, "fixpoint"),
        }
    }
}

/// Outcome of comparing the open block with the next one in sort order.
#[derive(Debug, PartialEq, Eq)]
enum Step {
    /// `next` lies inside the open block.
    Contained,
    /// `next` is the upper sibling; the open block becomes their parent.
    Aggregated(Ipv4),
    /// The blocks overlap; the open block becomes the smallest block covering both.
    Covered(Ipv4),
    /// A gap (or an unmergeable neighbour) separates the blocks.
    Disjoint,
}

fn merge_step(current: Ipv4, next: &Ipv4) -> Step {
    if current.supernet_of(next) {
        return Step::Contained;
    }

    if current.is_followed_by(next) {
        // The parent must end exactly where `next` ends, otherwise it would
        // claim addresses that no input block covers.
        return match current.parent_if_lower_half() {
            Some(parent) if parent.hi() == next.hi() => Step::Aggregated(parent),
            _ => Step::Disjoint,
        };
    }

    if current.overlaps(next) {
        let start = current.lo().min(next.lo());
        let end = current.hi().max(next.hi());
        return Step::Covered(covering_block(start, end));
    }

    Step::Disjoint
}

/// Find the narrowest block holding `start` whose last address reaches `end`.
///
/// Prefix lengths are tried from 32 down; `0.0.0.0/0` always qualifies.
pub fn covering_block(start: u32, end: u32) -> Ipv4 {
    let mut mask = MAX_LENGTH;
    loop {
        let candidate = Ipv4::from_bits(start, mask);
        if candidate.hi() >= end || mask == 0 {
            return candidate;
        }
        mask -= 1;
    }
}

/// One left-to-right sweep over blocks sorted by `(address, prefix length)`.
///
/// Output is ascending by address. Empty input yields empty output.
pub fn merge_sweep(networks: &[Ipv4]) -> Vec<Ipv4> {
    let Some((first, rest)) = networks.split_first() else {
        return Vec::new();
    };

    let mut merged = Vec::with_capacity(networks.len());
    let mut current = *first;

    for next in rest {
        match merge_step(current, next) {
            Step::Contained => {
                log::trace!("{next} contained in {current}");
            }
            Step::Aggregated(parent) => {
                log::trace!("{current} + {next} => {parent}");
                current = parent;
            }
            Step::Covered(cover) => {
                log::trace!("{current} overlaps {next} => {cover}");
                current = cover;
            }
            Step::Disjoint => {
                merged.push(current);
                current = *next;
            }
        }
    }
    merged.push(current);

    merged
}

/// Sort and consolidate blocks with the given strategy.
pub fn merge_networks(networks: Vec<Ipv4>, strategy: MergeStrategy) -> Vec<Ipv4> {
    let input_count = networks.len();
    let mut merged = merge_sweep(&sort_cidrs(networks));
    let mut passes = 1;

    if strategy == MergeStrategy::Fixpoint {
        // A pass that folds nothing returns its input unchanged.
        loop {
            let next_pass = merge_sweep(&merged);
            if next_pass.len() == merged.len() {
                break;
            }
            merged = next_pass;
            passes += 1;
        }
    }

    log::debug!(
        "merge_networks({strategy}) {input_count} => {} blocks in {passes} pass(es)",
        merged.len()
    );
    merged
}

/// Merge raw CIDR strings into canonical, consolidated CIDR strings.
///
/// Fails on the first malformed entry.
///
/// # Examples
/// ```
/// use aws_cidr_merge::merge_cidrs;
/// let merged = merge_cidrs(&["10.0.1.0/24", "10.0.0.0/24"]).unwrap();
/// assert_eq!(merged, vec!["10.0.0.0/23"]);
/// ```
pub fn merge_cidrs<S: AsRef<str>>(cidrs: &[S]) -> Result<Vec<String>, CidrParseError> {
    merge_cidrs_with(cidrs, MergeStrategy::default())
}

/// [`merge_cidrs`] with an explicit [`MergeStrategy`].
pub fn merge_cidrs_with<S: AsRef<str>>(
    cidrs: &[S],
    strategy: MergeStrategy,
) -> Result<Vec<String>, CidrParseError> {
    let networks = parse_cidrs(cidrs)?;
    Ok(merge_networks(networks, strategy)
        .iter()
        .map(|net| net.to_string())
        .collect())
}
