//! Base parameter identifiers.
//!
//! The usage-count formula is driven by one base parameter, selected by its
//! numeric id in configuration. Ids follow the host engine's parameter table.

/// Base parameter of a character, indexed `0..=7`.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumCount,
    strum::EnumIter,
    strum::FromRepr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[repr(u8)]
pub enum ParamId {
    /// Maximum hit points.
    MaxHp = 0,
    /// Maximum magic points.
    MaxMp = 1,
    Attack = 2,
    Defense = 3,
    /// Magic attack, the default driver of usage counts.
    #[default]
    MagicAttack = 4,
    MagicDefense = 5,
    Agility = 6,
    Luck = 7,
}

impl ParamId {
    /// Position of this parameter in a `[i32; ParamId::COUNT]` table.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl From<ParamId> for u8 {
    fn from(param: ParamId) -> Self {
        param as u8
    }
}

impl TryFrom<u8> for ParamId {
    type Error = UnknownParamId;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_repr(value).ok_or(UnknownParamId(value))
    }
}

/// Raised when a numeric parameter id is outside `0..=7`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("parameter id {0} is outside 0..=7")]
pub struct UnknownParamId(pub u8);

#[cfg(test)]
mod tests {
    use super::*;
    use strum::EnumCount;

    #[test]
    fn numeric_ids_match_engine_table() {
        assert_eq!(ParamId::COUNT, 8);
        assert_eq!(ParamId::try_from(4), Ok(ParamId::MagicAttack));
        assert_eq!(ParamId::try_from(7), Ok(ParamId::Luck));
        assert_eq!(ParamId::try_from(8), Err(UnknownParamId(8)));
        assert_eq!(u8::from(ParamId::Agility), 6);
    }

    #[test]
    fn parses_snake_case_names() {
        assert_eq!("magic_attack".parse::<ParamId>(), Ok(ParamId::MagicAttack));
        assert_eq!("MAX_HP".parse::<ParamId>(), Ok(ParamId::MaxHp));
    }
}
