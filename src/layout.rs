//! Slot size distribution
//!
//! A [`Layout`] splits an available size (in character cells) across a
//! sequence of slots. Columns and rows are both slots; the same policy code
//! sizes either axis.
//!
//! # Policies
//!
//! - `Proportional` - even split, remainder handed out one unit at a time from
//!   the first slot
//! - `Weighted` - split by positive integer weights, leftover units go to the
//!   largest fractional remainders (lowest index wins ties); with at least
//!   one cell per slot, no slot ends at zero
//! - `Content` - each slot gets its natural size; extra space is spread evenly,
//!   and overflow shrinks slots in proportion to their natural size

use tracing::debug;

use crate::error::{Error, Result};

/// Validated, non-empty list of positive weights
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Weights(Vec<u32>);

impl Weights {
    pub fn new(weights: &[u32]) -> Result<Self> {
        if weights.is_empty() {
            return Err(Error::layout("weighted layout needs at least one weight"));
        }
        if let Some(pos) = weights.iter().position(|&w| w == 0) {
            return Err(Error::layout(format!("weight at slot {pos} is zero")));
        }
        Ok(Self(weights.to_vec()))
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Sizing strategy for a sequence of slots
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Layout {
    #[default]
    Proportional,
    Weighted(Weights),
    Content,
}

impl Layout {
    /// Weighted layout; fails on an empty list or a zero weight
    pub fn weighted(weights: &[u32]) -> Result<Self> {
        Weights::new(weights).map(Layout::Weighted)
    }

    /// Number of slots the policy declares, if it declares any
    pub fn declared_slots(&self) -> Option<usize> {
        match self {
            Layout::Weighted(weights) => Some(weights.len()),
            Layout::Proportional | Layout::Content => None,
        }
    }

    /// Distribute `available` across `slots`
    ///
    /// `natural` holds per-slot natural sizes and is required by `Content`.
    /// The result has one entry per slot and sums to `available`.
    pub fn compute(
        &self,
        available: usize,
        slots: usize,
        natural: Option<&[usize]>,
    ) -> Result<Vec<usize>> {
        if slots == 0 {
            if available > 0 {
                return Err(Error::layout(format!(
                    "cannot distribute {available} cells across zero slots"
                )));
            }
            return Ok(Vec::new());
        }

        match self {
            Layout::Proportional => Ok(proportional(available, slots)),
            Layout::Weighted(weights) => {
                if weights.len() != slots {
                    return Err(Error::layout(format!(
                        "{} weights declared for {slots} slots",
                        weights.len()
                    )));
                }
                let weights: Vec<u64> =
                    weights.as_slice().iter().map(|&w| u64::from(w)).collect();
                let mut sizes = largest_remainder(available, &weights);
                lift_starved(&mut sizes, available);
                Ok(sizes)
            }
            Layout::Content => {
                let natural = natural.ok_or_else(|| {
                    Error::layout("content layout requires natural sizes")
                })?;
                if natural.len() != slots {
                    return Err(Error::layout(format!(
                        "{} natural sizes given for {slots} slots",
                        natural.len()
                    )));
                }
                Ok(content(available, natural))
            }
        }
    }
}

/// Even split, remainder to the leading slots
fn proportional(available: usize, slots: usize) -> Vec<usize> {
    let base = available / slots;
    let extra = available % slots;
    (0..slots)
        .map(|i| if i < extra { base + 1 } else { base })
        .collect()
}

/// Floor of each slot's share, then leftover units by largest remainder
fn largest_remainder(available: usize, weights: &[u64]) -> Vec<usize> {
    let total: u64 = weights.iter().sum();
    let available_wide = available as u64;

    let mut sizes = Vec::with_capacity(weights.len());
    let mut remainders = Vec::with_capacity(weights.len());
    for &w in weights {
        let scaled = available_wide * w;
        sizes.push((scaled / total) as usize);
        remainders.push(scaled % total);
    }

    let allocated: usize = sizes.iter().sum();
    let mut order: Vec<usize> = (0..weights.len()).collect();
    // Stable sort keeps the lowest index first among equal remainders
    order.sort_by(|&a, &b| remainders[b].cmp(&remainders[a]));
    for &i in order.iter().take(available - allocated) {
        sizes[i] += 1;
    }

    sizes
}

fn content(available: usize, natural: &[usize]) -> Vec<usize> {
    let slots = natural.len();
    let total: usize = natural.iter().sum();

    if total <= available {
        let spread = proportional(available - total, slots);
        return natural.iter().zip(spread).map(|(n, s)| n + s).collect();
    }

    debug!(available, total, slots, "content layout shrinking to fit");

    let weights: Vec<u64> = natural.iter().map(|&n| n as u64).collect();
    let mut sizes = largest_remainder(available, &weights);
    lift_starved(&mut sizes, available);
    sizes
}

/// Give every zero slot one cell, taken from the widest slot
///
/// Only applies when there is at least one cell per slot.
fn lift_starved(sizes: &mut [usize], available: usize) {
    if available < sizes.len() {
        return;
    }
    while let Some(starved) = sizes.iter().position(|&s| s == 0) {
        let widest = widest_slot(sizes);
        debug!(starved, widest, "lifting starved slot to one cell");
        sizes[widest] -= 1;
        sizes[starved] = 1;
    }
}

/// Index of the largest slot, lowest index on ties
fn widest_slot(sizes: &[usize]) -> usize {
    let mut best = 0;
    for (i, &s) in sizes.iter().enumerate() {
        if s > sizes[best] {
            best = i;
        }
    }
    best
}
