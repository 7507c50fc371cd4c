//! Survive/birth rule sets for Life-like automata.
//!
//! A rule is stored as two bitmasks over neighbor counts 0..=8, so membership
//! checks are a shift and a mask.

use std::fmt;
use std::str::FromStr;

/// Highest neighbor count a Moore neighborhood can produce.
pub const MAX_NEIGHBORS: u8 = 8;

/// Rule string parsing errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleError {
    #[error(
        "Invalid rule string {0:?}: expected \"original\", \"copyworld\" or <survive digits>/<birth digits>"
    )]
    InvalidRuleFormat(String),
}

/// Neighbor counts at which a live cell survives and a dead cell is born.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RuleSet {
    survive: u16,
    birth: u16,
}

impl Default for RuleSet {
    /// Conway's Life, 23/3.
    fn default() -> Self {
        Self::conway()
    }
}

impl RuleSet {
    /// Build a rule set from explicit neighbor counts. Counts above 8 are ignored.
    pub fn new(survive: &[u8], birth: &[u8]) -> Self {
        Self {
            survive: to_mask(survive),
            birth: to_mask(birth),
        }
    }

    /// Conway's Game of Life (survive 2,3 / birth 3).
    pub fn conway() -> Self {
        Self::new(&[2, 3], &[3])
    }

    /// Copyworld (survive 1,3,5,7 / birth 1,3,5,7).
    pub fn copyworld() -> Self {
        Self::new(&[1, 3, 5, 7], &[1, 3, 5, 7])
    }

    /// Parse a rule string.
    ///
    /// Accepts the aliases `original` and `copyworld` (case-insensitive) or a
    /// literal `<survive>/<birth>` string where every character on either side
    /// is a digit 0-8.
    ///
    /// An empty side is an empty set, so `/2` (Seeds: nothing survives) and
    /// `23/` (nothing is born) both load. This is looser than requiring at
    /// least one digit per side and is kept on purpose.
    pub fn parse(rule: &str) -> Result<Self, RuleError> {
        let lowered = rule.trim().to_ascii_lowercase();
        match lowered.as_str() {
            "original" => return Ok(Self::conway()),
            "copyworld" => return Ok(Self::copyworld()),
            _ => {}
        }

        let invalid = || RuleError::InvalidRuleFormat(rule.to_string());
        let (survive, birth) = lowered.split_once('/').ok_or_else(invalid)?;
        Ok(Self {
            survive: parse_counts(survive).ok_or_else(invalid)?,
            birth: parse_counts(birth).ok_or_else(invalid)?,
        })
    }

    /// Parse the rule notation found in RLE headers.
    ///
    /// Handles `B3/S23`, `S23/B3` and plain `23/3`; whichever half carries the
    /// `b` prefix is taken as the birth half.
    pub fn from_rle_rule(rule: &str) -> Result<Self, RuleError> {
        let invalid = || RuleError::InvalidRuleFormat(rule.to_string());
        let lowered = rule.trim().to_ascii_lowercase();
        let (first, second) = lowered.split_once('/').ok_or_else(invalid)?;
        let (first, second) = (first.trim(), second.trim());

        let (survive, birth) = if first.starts_with('b') || second.starts_with('s') {
            (second, first)
        } else {
            (first, second)
        };
        let survive = survive.strip_prefix('s').unwrap_or(survive);
        let birth = birth.strip_prefix('b').unwrap_or(birth);

        Self::parse(&format!("{survive}/{birth}")).map_err(|_| invalid())
    }

    /// Whether a live cell with `count` live neighbors stays alive.
    #[inline]
    pub fn is_survive(&self, count: u8) -> bool {
        count <= MAX_NEIGHBORS && self.survive & (1 << count) != 0
    }

    /// Whether a dead cell with `count` live neighbors becomes alive.
    #[inline]
    pub fn is_birth(&self, count: u8) -> bool {
        count <= MAX_NEIGHBORS && self.birth & (1 << count) != 0
    }

    /// Survive counts in ascending order.
    pub fn survive_counts(&self) -> Vec<u8> {
        from_mask(self.survive)
    }

    /// Birth counts in ascending order.
    pub fn birth_counts(&self) -> Vec<u8> {
        from_mask(self.birth)
    }
}

impl FromStr for RuleSet {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for n in self.survive_counts() {
            write!(f, "{n}")?;
        }
        f.write_str("/")?;
        for n in self.birth_counts() {
            write!(f, "{n}")?;
        }
        Ok(())
    }
}

fn to_mask(counts: &[u8]) -> u16 {
    counts
        .iter()
        .filter(|&&n| n <= MAX_NEIGHBORS)
        .fold(0, |mask, &n| mask | (1 << n))
}

fn from_mask(mask: u16) -> Vec<u8> {
    (0..=MAX_NEIGHBORS).filter(|n| mask & (1 << n) != 0).collect()
}

/// Digits 0-8 only; anything else rejects the whole side.
fn parse_counts(side: &str) -> Option<u16> {
    side.chars().try_fold(0u16, |mask, c| {
        let n = c.to_digit(10).filter(|&n| n <= u32::from(MAX_NEIGHBORS))?;
        Some(mask | (1 << n))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_original_alias() {
        let rules = RuleSet::parse("original").unwrap();
        assert_eq!(rules, RuleSet::parse("23/3").unwrap());
        assert_eq!(rules.survive_counts(), vec![2, 3]);
        assert_eq!(rules.birth_counts(), vec![3]);
    }

    #[test]
    fn test_copyworld_alias() {
        let rules = RuleSet::parse("CopyWorld").unwrap();
        assert_eq!(rules.survive_counts(), vec![1, 3, 5, 7]);
        assert_eq!(rules.birth_counts(), vec![1, 3, 5, 7]);
    }

    #[test]
    fn test_repeated_digits_dedupe() {
        let rules = RuleSet::parse("2332/33").unwrap();
        assert_eq!(rules, RuleSet::conway());
    }

    #[test]
    fn test_empty_side() {
        let seeds = RuleSet::parse("/2").unwrap();
        assert!(seeds.survive_counts().is_empty());
        assert!(seeds.is_birth(2));

        let sterile = RuleSet::parse("23/").unwrap();
        assert_eq!(sterile.survive_counts(), vec![2, 3]);
        assert!(sterile.birth_counts().is_empty());

        let inert = RuleSet::parse("/").unwrap();
        assert_eq!(inert, RuleSet::new(&[], &[]));
    }

    #[test]
    fn test_invalid_rules() {
        for bad in ["23", "", "2a/3", "23/3x", "9/3", "2,3/3", "23/3/1", "life"] {
            assert!(
                matches!(RuleSet::parse(bad), Err(RuleError::InvalidRuleFormat(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_counts_out_of_range() {
        let rules = RuleSet::conway();
        assert!(!rules.is_survive(9));
        assert!(!rules.is_birth(200));
    }

    #[test]
    fn test_rle_rule_orders() {
        let conway = RuleSet::conway();
        assert_eq!(RuleSet::from_rle_rule("B3/S23").unwrap(), conway);
        assert_eq!(RuleSet::from_rle_rule("b3/s23").unwrap(), conway);
        assert_eq!(RuleSet::from_rle_rule("S23/B3").unwrap(), conway);
        assert_eq!(RuleSet::from_rle_rule("23/3").unwrap(), conway);
        assert_eq!(
            RuleSet::from_rle_rule("B36/S23").unwrap(),
            RuleSet::new(&[2, 3], &[3, 6])
        );
        assert!(RuleSet::from_rle_rule("B3S23").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(RuleSet::conway().to_string(), "23/3");
        assert_eq!(RuleSet::parse("/").unwrap().to_string(), "/");
    }

    proptest! {
        #[test]
        fn prop_membership_matches_digits(
            survive in proptest::collection::vec(0u8..=8, 0..12),
            birth in proptest::collection::vec(0u8..=8, 0..12),
        ) {
            let text = format!(
                "{}/{}",
                survive.iter().map(|n| n.to_string()).collect::<String>(),
                birth.iter().map(|n| n.to_string()).collect::<String>(),
            );
            let rules = RuleSet::parse(&text).unwrap();
            for n in 0..=MAX_NEIGHBORS {
                prop_assert_eq!(rules.is_survive(n), survive.contains(&n));
                prop_assert_eq!(rules.is_birth(n), birth.contains(&n));
            }
        }
    }
}
