//! Usage-count ledger.
//!
//! Each character owns one ledger: a `current` and a `maximum` table indexed
//! `[type][level - 1]`. Maximums are derived (see [`crate::stats::UsageFormula`])
//! but stored anyway, because they only change on setup and level-up and the
//! host persists both tables verbatim in its save data.

use core::fmt;

use crate::config::MagicConfig;
use crate::error::{ErrorSeverity, GameError};
use crate::spell::{Coordinate, SpellLevel, SpellType};

/// Current and maximum uses at one coordinate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UsageCount {
    pub current: u32,
    pub maximum: u32,
}

impl UsageCount {
    pub const fn new(current: u32, maximum: u32) -> Self {
        Self { current, maximum }
    }

    #[inline]
    pub const fn is_available(&self) -> bool {
        self.current > 0
    }
}

impl fmt::Display for UsageCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.current, self.maximum)
    }
}

/// Per-character table of usage counts.
///
/// Invariant: `current <= maximum` at every coordinate once a mutating call
/// returns.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UsageLedger {
    current: Vec<Vec<u32>>,
    maximum: Vec<Vec<u32>>,
}

impl UsageLedger {
    /// Allocates an all-zero ledger shaped by `config`.
    pub fn new(config: &MagicConfig) -> Self {
        Self::with_shape(
            usize::from(config.spell_type_count),
            usize::from(config.max_level),
        )
    }

    /// Allocates an all-zero ledger with `types` rows of `levels` entries.
    pub fn with_shape(types: usize, levels: usize) -> Self {
        Self {
            current: vec![vec![0; levels]; types],
            maximum: vec![vec![0; levels]; types],
        }
    }

    /// `(types, levels)` of this ledger.
    pub fn shape(&self) -> (usize, usize) {
        (
            self.maximum.len(),
            self.maximum.first().map_or(0, Vec::len),
        )
    }

    /// True when this ledger was shaped by a configuration like `config`.
    pub fn matches(&self, config: &MagicConfig) -> bool {
        self.shape()
            == (
                usize::from(config.spell_type_count),
                usize::from(config.max_level),
            )
    }

    /// Counts at `coordinate`, or `None` if it lies outside the table.
    pub fn get(&self, coordinate: Coordinate) -> Option<UsageCount> {
        let (t, l) = self.indices(coordinate).ok()?;
        Some(UsageCount::new(self.current[t][l], self.maximum[t][l]))
    }

    /// Current uses at `coordinate` (0 outside the table).
    pub fn current(&self, coordinate: Coordinate) -> u32 {
        self.get(coordinate).map_or(0, |count| count.current)
    }

    /// Maximum uses at `coordinate` (0 outside the table).
    pub fn maximum(&self, coordinate: Coordinate) -> u32 {
        self.get(coordinate).map_or(0, |count| count.maximum)
    }

    /// True if at least one use remains at `coordinate`.
    pub fn can_afford(&self, coordinate: Coordinate) -> bool {
        self.current(coordinate) > 0
    }

    /// Counts of every level of `spell_type`, level 1 first.
    pub fn row(&self, spell_type: SpellType) -> Vec<UsageCount> {
        let t = spell_type.index();
        match (self.current.get(t), self.maximum.get(t)) {
            (Some(current), Some(maximum)) => current
                .iter()
                .zip(maximum)
                .map(|(&c, &m)| UsageCount::new(c, m))
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Raw `current` table, `[type][level - 1]`.
    pub fn current_table(&self) -> &[Vec<u32>] {
        &self.current
    }

    /// Raw `maximum` table, `[type][level - 1]`.
    pub fn maximum_table(&self) -> &[Vec<u32>] {
        &self.maximum
    }

    /// Stores a new maximum, pulling `current` down if it now exceeds it.
    pub fn set_maximum(&mut self, coordinate: Coordinate, value: u32) -> Result<(), LedgerError> {
        let (t, l) = self.indices(coordinate)?;
        self.maximum[t][l] = value;
        if self.current[t][l] > value {
            self.current[t][l] = value;
        }
        Ok(())
    }

    /// Zeroes every maximum (and current) of `spell_type`.
    pub fn clear_type(&mut self, spell_type: SpellType) {
        let t = spell_type.index();
        if let (Some(current), Some(maximum)) = (self.current.get_mut(t), self.maximum.get_mut(t))
        {
            current.fill(0);
            maximum.fill(0);
        }
    }

    /// Sets every maximum to `value`, pulling `current` down where needed.
    pub fn fill_maximum(&mut self, value: u32) {
        for (current_row, maximum_row) in self.current.iter_mut().zip(self.maximum.iter_mut()) {
            maximum_row.fill(value);
            for current in current_row.iter_mut() {
                *current = (*current).min(value);
            }
        }
    }

    /// `current := maximum` everywhere.
    pub fn full_recover(&mut self) {
        for (current_row, maximum_row) in self.current.iter_mut().zip(&self.maximum) {
            for (current, &maximum) in current_row.iter_mut().zip(maximum_row) {
                *current = maximum;
            }
        }
    }

    /// True if every coordinate is at its maximum.
    pub fn is_fully_recovered(&self) -> bool {
        self.current == self.maximum
    }

    /// Spends one use at `coordinate` and returns how many remain.
    ///
    /// # Errors
    ///
    /// `InsufficientUses` when nothing is left; the count never goes negative.
    pub fn pay(&mut self, coordinate: Coordinate) -> Result<u32, LedgerError> {
        let (t, l) = self.indices(coordinate)?;
        let current = &mut self.current[t][l];
        if *current == 0 {
            return Err(LedgerError::InsufficientUses(coordinate));
        }
        *current -= 1;
        Ok(*current)
    }

    /// Iterates `(coordinate, counts)` over the whole table.
    pub fn iter(&self) -> impl Iterator<Item = (Coordinate, UsageCount)> + '_ {
        self.current
            .iter()
            .zip(&self.maximum)
            .enumerate()
            .flat_map(|(t, (current_row, maximum_row))| {
                current_row
                    .iter()
                    .zip(maximum_row)
                    .enumerate()
                    .map(move |(l, (&c, &m))| {
                        (
                            Coordinate::new(SpellType(t as u8), SpellLevel::from_index(l)),
                            UsageCount::new(c, m),
                        )
                    })
            })
    }

    fn indices(&self, coordinate: Coordinate) -> Result<(usize, usize), LedgerError> {
        let (t, l) = (coordinate.spell_type.index(), coordinate.level.index());
        let in_range = coordinate.level.0 >= 1
            && self.maximum.get(t).is_some_and(|row| l < row.len())
            && self.current.get(t).is_some_and(|row| l < row.len());
        if in_range {
            Ok((t, l))
        } else {
            Err(LedgerError::CoordinateOutOfRange(coordinate))
        }
    }
}

/// Errors raised by ledger mutations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LedgerError {
    #[error("no uses left at {0}")]
    InsufficientUses(Coordinate),

    #[error("{0} is outside the ledger")]
    CoordinateOutOfRange(Coordinate),
}

impl GameError for LedgerError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InsufficientUses(_) => ErrorSeverity::Recoverable,
            Self::CoordinateOutOfRange(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InsufficientUses(_) => "LEDGER_INSUFFICIENT_USES",
            Self::CoordinateOutOfRange(_) => "LEDGER_COORDINATE_OUT_OF_RANGE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(t: u8, l: u8) -> Coordinate {
        Coordinate::new(SpellType(t), SpellLevel(l))
    }

    #[test]
    fn allocates_zeroed_tables_from_config() {
        let ledger = UsageLedger::new(&MagicConfig::default());
        assert_eq!(ledger.shape(), (3, 7));
        assert!(ledger.iter().all(|(_, count)| count == UsageCount::default()));
        assert!(ledger.matches(&MagicConfig::default()));
    }

    #[test]
    fn pay_stops_at_zero() {
        let mut ledger = UsageLedger::with_shape(1, 3);
        ledger.set_maximum(coord(0, 2), 2).unwrap();
        ledger.full_recover();

        assert_eq!(ledger.pay(coord(0, 2)), Ok(1));
        assert_eq!(ledger.pay(coord(0, 2)), Ok(0));
        assert_eq!(
            ledger.pay(coord(0, 2)),
            Err(LedgerError::InsufficientUses(coord(0, 2)))
        );
        assert_eq!(ledger.current(coord(0, 2)), 0);
        assert!(!ledger.can_afford(coord(0, 2)));
    }

    #[test]
    fn lowering_maximum_clamps_current() {
        let mut ledger = UsageLedger::with_shape(1, 3);
        ledger.set_maximum(coord(0, 1), 5).unwrap();
        ledger.full_recover();
        ledger.set_maximum(coord(0, 1), 3).unwrap();
        assert_eq!(ledger.get(coord(0, 1)), Some(UsageCount::new(3, 3)));
    }

    #[test]
    fn rejects_coordinates_outside_shape() {
        let mut ledger = UsageLedger::with_shape(2, 3);
        assert_eq!(
            ledger.set_maximum(coord(2, 1), 1),
            Err(LedgerError::CoordinateOutOfRange(coord(2, 1)))
        );
        assert_eq!(
            ledger.pay(coord(0, 4)),
            Err(LedgerError::CoordinateOutOfRange(coord(0, 4)))
        );
        assert_eq!(ledger.get(coord(0, 0)), None);
    }

    #[test]
    fn row_and_display_render_counts() {
        let mut ledger = UsageLedger::with_shape(1, 3);
        ledger.fill_maximum(9);
        ledger.full_recover();
        ledger.pay(coord(0, 3)).unwrap();

        let rendered: Vec<String> = ledger
            .row(SpellType(0))
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(rendered, ["9/9", "9/9", "8/9"]);
    }
}
