//! Static prefix and unit tables.
//!
//! Gram is the mass base, so every derived unit carrying kilograms folds the
//! factor 1000 into its power-of-ten entry (`N` is `10^3 g*m*s^-2`).

use crate::unit::{Conversion, DimensionVector, UnitKey};
use phf::phf_map;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnitKind {
    /// One of the seven fundamental units, exponent 1 on itself.
    Base,
    /// A named product of base powers and a power of ten.
    Derived,
    /// Dimensionless ratio kept under its own key.
    PerUnit,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UnitDef {
    pub kind: UnitKind,
    pub exponents: DimensionVector,
    pub conversion: Conversion,
    /// Whether a non-empty SI prefix may precede the symbol.
    pub prefixable: bool,
}

impl UnitDef {
    const fn base(key: UnitKey) -> Self {
        Self {
            kind: UnitKind::Base,
            exponents: DimensionVector::of(key, 1),
            conversion: Conversion::Identity,
            prefixable: true,
        }
    }

    const fn per_unit(key: UnitKey) -> Self {
        Self {
            kind: UnitKind::PerUnit,
            exponents: DimensionVector::of(key, 1),
            conversion: Conversion::Identity,
            prefixable: false,
        }
    }

    const fn derived(exponents: DimensionVector) -> Self {
        Self {
            kind: UnitKind::Derived,
            exponents,
            conversion: Conversion::Identity,
            prefixable: true,
        }
    }
}

/// Exponents in key order `10, g, m, s, A, K, cd, mol`.
#[allow(clippy::too_many_arguments)]
const fn dim(
    ten: i32,
    g: i32,
    m: i32,
    s: i32,
    a: i32,
    k: i32,
    cd: i32,
    mol: i32,
) -> DimensionVector {
    DimensionVector::new()
        .with(UnitKey::Ten, ten)
        .with(UnitKey::Gram, g)
        .with(UnitKey::Metre, m)
        .with(UnitKey::Second, s)
        .with(UnitKey::Ampere, a)
        .with(UnitKey::Kelvin, k)
        .with(UnitKey::Candela, cd)
        .with(UnitKey::Mole, mol)
}

const OHM: UnitDef = UnitDef::derived(dim(3, 1, 2, -3, -2, 0, 0, 0));

const CELSIUS: UnitDef = UnitDef {
    kind: UnitKind::Derived,
    exponents: DimensionVector::of(UnitKey::Kelvin, 1),
    conversion: Conversion::Affine { offset: 273.15 },
    prefixable: false,
};

/// SI prefixes and their power-of-ten offset.
pub static PREFIXES: phf::Map<&'static str, i32> = phf_map! {
    "Y" => 24,
    "Z" => 21,
    "E" => 18,
    "P" => 15,
    "T" => 12,
    "G" => 9,
    "M" => 6,
    "k" => 3,
    "h" => 2,
    "da" => 1,
    "d" => -1,
    "c" => -2,
    "m" => -3,
    "μ" => -6,
    "µ" => -6,
    "u" => -6,
    "n" => -9,
    "p" => -12,
    "f" => -15,
    "a" => -18,
    "z" => -21,
    "y" => -24,
};

pub static UNITS: phf::Map<&'static str, UnitDef> = phf_map! {
    "g" => UnitDef::base(UnitKey::Gram),
    "m" => UnitDef::base(UnitKey::Metre),
    "s" => UnitDef::base(UnitKey::Second),
    "A" => UnitDef::base(UnitKey::Ampere),
    "K" => UnitDef::base(UnitKey::Kelvin),
    "cd" => UnitDef::base(UnitKey::Candela),
    "mol" => UnitDef::base(UnitKey::Mole),

    "Hz" => UnitDef::derived(dim(0, 0, 0, -1, 0, 0, 0, 0)),
    "N" => UnitDef::derived(dim(3, 1, 1, -2, 0, 0, 0, 0)),
    "Pa" => UnitDef::derived(dim(3, 1, -1, -2, 0, 0, 0, 0)),
    "J" => UnitDef::derived(dim(3, 1, 2, -2, 0, 0, 0, 0)),
    "W" => UnitDef::derived(dim(3, 1, 2, -3, 0, 0, 0, 0)),
    "C" => UnitDef::derived(dim(0, 0, 0, 1, 1, 0, 0, 0)),
    "V" => UnitDef::derived(dim(3, 1, 2, -3, -1, 0, 0, 0)),
    "F" => UnitDef::derived(dim(-3, -1, -2, 4, 2, 0, 0, 0)),
    "Ω" => OHM,
    "Ω" => OHM,
    "Ohm" => OHM,
    "S" => UnitDef::derived(dim(-3, -1, -2, 3, 2, 0, 0, 0)),
    "Wb" => UnitDef::derived(dim(3, 1, 2, -2, -1, 0, 0, 0)),
    "T" => UnitDef::derived(dim(3, 1, 0, -2, -1, 0, 0, 0)),
    "H" => UnitDef::derived(dim(3, 1, 2, -2, -2, 0, 0, 0)),
    "°C" => CELSIUS,
    "lm" => UnitDef::derived(dim(0, 0, 0, 0, 0, 0, 1, 0)),
    "lx" => UnitDef::derived(dim(0, 0, -2, 0, 0, 0, 1, 0)),
    "Bq" => UnitDef::derived(dim(0, 0, 0, -1, 0, 0, 0, 0)),
    "Gy" => UnitDef::derived(dim(0, 0, 2, -2, 0, 0, 0, 0)),
    "Sv" => UnitDef::derived(dim(0, 0, 2, -2, 0, 0, 0, 0)),
    "kat" => UnitDef::derived(dim(0, 0, 0, -1, 0, 0, 0, 1)),
    "rad" => UnitDef::derived(DimensionVector::ZERO),
    "sr" => UnitDef::derived(DimensionVector::ZERO),

    "%" => UnitDef::per_unit(UnitKey::Percent),
    "ppm" => UnitDef::per_unit(UnitKey::Ppm),
    "ppb" => UnitDef::per_unit(UnitKey::Ppb),
    "ppt" => UnitDef::per_unit(UnitKey::Ppt),
    "ppq" => UnitDef::per_unit(UnitKey::Ppq),
};

/// Longest symbol in either table, in bytes.
pub const MAX_SYMBOL_LEN: usize = 3;

pub fn prefix(symbol: &str) -> Option<i32> {
    PREFIXES.get(symbol).copied()
}

pub fn unit(symbol: &str) -> Option<&'static UnitDef> {
    UNITS.get(symbol)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_symbol_len_covers_tables() {
        let longest = PREFIXES
            .keys()
            .chain(UNITS.keys())
            .map(|k| k.len())
            .max()
            .unwrap();
        assert_eq!(longest, MAX_SYMBOL_LEN);
    }

    #[test]
    fn kg_scaled_units_carry_power_of_ten() {
        assert_eq!(unit("Pa").unwrap().exponents.ten(), 3);
        assert_eq!(unit("N").unwrap().exponents.get(UnitKey::Gram), 1);
        assert_eq!(unit("S").unwrap().exponents.ten(), -3);
    }

    #[test]
    fn prefixless_units() {
        for sym in ["%", "ppm", "ppb", "ppt", "ppq", "°C"] {
            assert!(!unit(sym).unwrap().prefixable, "{sym}");
        }
        assert!(unit("Pa").unwrap().prefixable);
        assert!(unit("mol").unwrap().prefixable);
    }

    #[test]
    fn no_quecto_or_ronto() {
        for sym in ["q", "r", "Q", "R"] {
            assert!(prefix(sym).is_none(), "{sym}");
        }
        assert_eq!(prefix("da"), Some(1));
        assert_eq!(prefix("µ"), prefix("μ"));
    }
}
