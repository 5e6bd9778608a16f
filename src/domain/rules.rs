use std::fmt;

use super::Cell;
use crate::error::{AutomatonError, Result};

/// Largest neighbour count a cell can see on the 8-neighbourhood
pub const MAX_NEIGHBORS: u8 = 8;

/// Mask with one bit per possible neighbour count (bits 0..=8)
const MASK_BITS: u16 = (1 << (MAX_NEIGHBORS + 1)) - 1;

/// Encode a pair of digit strings into `(survive_mask, birth_mask)`.
///
/// Each digit `n` contributes `1 << n`. Duplicates are harmless and order is
/// irrelevant; an empty string yields 0.
pub fn encode_rule(survive: &str, birth: &str) -> Result<(u16, u16)> {
    Ok((encode_digits(survive)?, encode_digits(birth)?))
}

fn encode_digits(digits: &str) -> Result<u16> {
    digits.chars().try_fold(0u16, |mask, digit| {
        match digit.to_digit(10) {
            Some(n) if n <= u32::from(MAX_NEIGHBORS) => Ok(mask | (1 << n)),
            _ => Err(AutomatonError::InvalidRuleDigit { digit }),
        }
    })
}

/// Expand a mask into a dense table indexed by neighbour count
const fn lookup_table(mask: u16) -> [bool; 9] {
    let mut table = [false; 9];
    let mut count = 0;
    while count < table.len() {
        table[count] = ((mask >> count) & 1) == 1;
        count += 1;
    }
    table
}

/// Life-like rule: which neighbour counts keep a live cell alive and which
/// bring a dead cell to life.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Rule {
    survive_mask: u16,
    birth_mask: u16,
    survive: [bool; 9],
    birth: [bool; 9],
}

impl Rule {
    /// Build a rule from raw masks. Bits above 8 are ignored.
    pub const fn from_masks(survive_mask: u16, birth_mask: u16) -> Self {
        let survive_mask = survive_mask & MASK_BITS;
        let birth_mask = birth_mask & MASK_BITS;
        Self {
            survive_mask,
            birth_mask,
            survive: lookup_table(survive_mask),
            birth: lookup_table(birth_mask),
        }
    }

    /// Build a rule from digit strings such as `("23", "3")`
    pub fn from_digits(survive: &str, birth: &str) -> Result<Self> {
        let (survive_mask, birth_mask) = encode_rule(survive, birth)?;
        Ok(Self::from_masks(survive_mask, birth_mask))
    }

    pub const fn survive_mask(&self) -> u16 {
        self.survive_mask
    }

    pub const fn birth_mask(&self) -> u16 {
        self.birth_mask
    }

    /// Survive counts as a digit string, the inverse of `from_digits`
    pub fn survive_digits(&self) -> String {
        table_digits(&self.survive)
    }

    /// Birth counts as a digit string, the inverse of `from_digits`
    pub fn birth_digits(&self) -> String {
        table_digits(&self.birth)
    }

    /// Apply the rule to compute the next cell state.
    /// Counts above 8 cannot occur on the Moore neighbourhood and map to death.
    #[inline]
    pub fn evolve(&self, current: Cell, neighbors: u8) -> Cell {
        let table = match current {
            Cell::Alive => &self.survive,
            Cell::Dead => &self.birth,
        };
        Cell::from(table.get(neighbors as usize).copied().unwrap_or(false))
    }
}

impl Default for Rule {
    fn default() -> Self {
        conway()
    }
}

/// Survive/birth notation, e.g. `S23/B3`
impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S{}/B{}", self.survive_digits(), self.birth_digits())
    }
}

fn table_digits(table: &[bool; 9]) -> String {
    table
        .iter()
        .enumerate()
        .filter(|&(_, &set)| set)
        .map(|(n, _)| char::from(b'0' + n as u8))
        .collect()
}

/// Conway's Game of Life (S23/B3)
pub const fn conway() -> Rule {
    Rule::from_masks(0b1100, 0b1000)
}

/// HighLife (S23/B36): cells with 6 neighbours are also born
pub const fn high_life() -> Rule {
    Rule::from_masks(0b1100, 0b100_1000)
}

/// Seeds (S/B2): every live cell dies each generation
pub const fn seeds() -> Rule {
    Rule::from_masks(0, 0b100)
}

/// Day & Night (S34678/B3678): symmetric under inversion
pub const fn day_and_night() -> Rule {
    Rule::from_masks(0b1_1101_1000, 0b1_1100_1000)
}

/// Get all named rules
pub fn all_rules() -> Vec<(&'static str, Rule)> {
    vec![
        ("Conway", conway()),
        ("HighLife", high_life()),
        ("Seeds", seeds()),
        ("Day&Night", day_and_night()),
    ]
}

/// Look up a named rule, ignoring case
pub fn rule_by_name(name: &str) -> Result<Rule> {
    all_rules()
        .into_iter()
        .find(|(preset, _)| preset.eq_ignore_ascii_case(name))
        .map(|(_, rule)| rule)
        .ok_or_else(|| AutomatonError::UnknownRule { name: name.to_owned() })
}

/// Get default rule (Conway's Life)
pub const fn default_rule() -> Rule {
    conway()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_classic_rule() {
        assert_eq!(encode_rule("23", "3").unwrap(), (12, 8));
    }

    #[test]
    fn test_encode_empty_is_zero() {
        assert_eq!(encode_rule("", "").unwrap(), (0, 0));
        assert_eq!(encode_rule("", "2").unwrap(), (0, 4));
    }

    #[test]
    fn test_encode_duplicates_and_order() {
        assert_eq!(encode_rule("3223", "3").unwrap(), encode_rule("23", "3").unwrap());
        assert_eq!(encode_rule("8", "0").unwrap(), (256, 1));
    }

    #[test]
    fn test_encode_rejects_bad_digits() {
        assert!(matches!(
            encode_rule("29", "3"),
            Err(AutomatonError::InvalidRuleDigit { digit: '9' })
        ));
        assert!(matches!(
            encode_rule("23", "x"),
            Err(AutomatonError::InvalidRuleDigit { digit: 'x' })
        ));
        assert!(matches!(
            Rule::from_digits("2 3", "3"),
            Err(AutomatonError::InvalidRuleDigit { digit: ' ' })
        ));
    }

    #[test]
    fn test_conway_rules() {
        let rule = conway();

        // Underpopulation
        assert_eq!(rule.evolve(Cell::Alive, 0), Cell::Dead);
        assert_eq!(rule.evolve(Cell::Alive, 1), Cell::Dead);

        // Survival
        assert_eq!(rule.evolve(Cell::Alive, 2), Cell::Alive);
        assert_eq!(rule.evolve(Cell::Alive, 3), Cell::Alive);

        // Overpopulation
        assert_eq!(rule.evolve(Cell::Alive, 4), Cell::Dead);

        // Reproduction
        assert_eq!(rule.evolve(Cell::Dead, 3), Cell::Alive);
        assert_eq!(rule.evolve(Cell::Dead, 2), Cell::Dead);
    }

    #[test]
    fn test_survive_polarity() {
        // Survive bit set keeps a live cell; unset kills it
        let rule = Rule::from_masks(1 << 4, 0);
        assert_eq!(rule.evolve(Cell::Alive, 4), Cell::Alive);
        assert_eq!(rule.evolve(Cell::Alive, 3), Cell::Dead);
        assert_eq!(rule.evolve(Cell::Dead, 4), Cell::Dead);
    }

    #[test]
    fn test_birth_bit_zero_toggles_isolated_birth() {
        assert_eq!(Rule::from_masks(0, 0).evolve(Cell::Dead, 0), Cell::Dead);
        assert_eq!(Rule::from_masks(0, 1).evolve(Cell::Dead, 0), Cell::Alive);
    }

    #[test]
    fn test_presets_match_digit_encoding() {
        assert_eq!(conway(), Rule::from_digits("23", "3").unwrap());
        assert_eq!(high_life(), Rule::from_digits("23", "36").unwrap());
        assert_eq!(seeds(), Rule::from_digits("", "2").unwrap());
        assert_eq!(day_and_night(), Rule::from_digits("34678", "3678").unwrap());
    }

    #[test]
    fn test_seeds_always_dies() {
        let rule = seeds();
        for n in 0..=MAX_NEIGHBORS {
            assert_eq!(rule.evolve(Cell::Alive, n), Cell::Dead);
        }
        assert_eq!(rule.evolve(Cell::Dead, 2), Cell::Alive);
        assert_eq!(rule.evolve(Cell::Dead, 3), Cell::Dead);
    }

    #[test]
    fn test_from_masks_ignores_high_bits() {
        let rule = Rule::from_masks(0xFFFF, 0x200);
        assert_eq!(rule.survive_mask(), 0x1FF);
        assert_eq!(rule.birth_mask(), 0);
    }

    #[test]
    fn test_default_rule_is_conway() {
        assert_eq!(default_rule(), conway());
        assert_eq!(Rule::default(), default_rule());
    }

    #[test]
    fn test_every_preset_resolves_by_name() {
        for (name, rule) in all_rules() {
            assert_eq!(rule_by_name(name).unwrap(), rule);
            assert_eq!(rule_by_name(&name.to_lowercase()).unwrap(), rule);
        }
        assert!(matches!(
            rule_by_name("Brain"),
            Err(AutomatonError::UnknownRule { name }) if name == "Brain"
        ));
    }

    #[test]
    fn test_digits_round_trip_presets() {
        for (_, rule) in all_rules() {
            let rebuilt = Rule::from_digits(&rule.survive_digits(), &rule.birth_digits()).unwrap();
            assert_eq!(rebuilt, rule);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(conway().to_string(), "S23/B3");
        assert_eq!(seeds().to_string(), "S/B2");
    }
}
