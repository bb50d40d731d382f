use std::fmt;

/// Discrete grid position expressed as (row, column), row 0 at the top.
///
/// Coordinates are signed so that a neighbour of an edge cell can be computed
/// and then rejected by a bounds check.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub row: i32,
    pub column: i32,
}

impl Position {
    pub const ORIGIN: Self = Self { row: 0, column: 0 };

    pub const fn new(row: i32, column: i32) -> Self {
        Self { row, column }
    }

    /// Returns the position shifted by a (row, column) delta.
    pub const fn offset(self, (row_delta, column_delta): (i32, i32)) -> Self {
        Self {
            row: self.row + row_delta,
            column: self.column + column_delta,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// Integer meter clamped to `[0, maximum]` on every mutation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceMeter {
    current: u32,
    maximum: u32,
}

impl ResourceMeter {
    /// Creates a meter, clamping `current` into range.
    pub fn new(current: u32, maximum: u32) -> Self {
        Self {
            current: current.min(maximum),
            maximum,
        }
    }

    pub fn full(maximum: u32) -> Self {
        Self::new(maximum, maximum)
    }

    pub fn empty(maximum: u32) -> Self {
        Self::new(0, maximum)
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn maximum(&self) -> u32 {
        self.maximum
    }

    /// Adds `delta` and clamps the result. Returns the applied change.
    pub fn adjust(&mut self, delta: i64) -> i64 {
        let before = self.current;
        let next = (i64::from(self.current) + delta).clamp(0, i64::from(self.maximum));
        // clamped into [0, u32::MAX]
        self.current = next as u32;
        i64::from(self.current) - i64::from(before)
    }

    pub fn is_empty(&self) -> bool {
        self.current == 0
    }

    pub fn is_full(&self) -> bool {
        self.current == self.maximum
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjust_clamps_at_both_ends() {
        let mut meter = ResourceMeter::new(95, 100);

        assert_eq!(meter.adjust(20), 5);
        assert_eq!(meter.current(), 100);

        assert_eq!(meter.adjust(-250), -100);
        assert_eq!(meter.current(), 0);
        assert!(meter.is_empty());
    }

    #[test]
    fn new_clamps_initial_value() {
        let meter = ResourceMeter::new(15, 10);
        assert_eq!(meter.current(), 10);
        assert!(meter.is_full());
    }

    #[test]
    fn offset_applies_row_then_column_delta() {
        let position = Position::new(2, 3).offset((-1, 1));
        assert_eq!(position, Position::new(1, 4));
    }

    #[test]
    fn default_position_is_origin() {
        assert_eq!(Position::default(), Position::ORIGIN);
    }
}
