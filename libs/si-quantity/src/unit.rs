use std::fmt;

/// A key of the exponent vector. The discriminant doubles as the index into
/// [`DimensionVector`] and fixes the canonical output order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnitKey {
    Ten = 0,
    Gram,
    Metre,
    Second,
    Ampere,
    Kelvin,
    Candela,
    Mole,
    Percent,
    Ppm,
    Ppb,
    Ppt,
    Ppq,
}

impl UnitKey {
    pub const COUNT: usize = 13;

    /// All keys in canonical order.
    pub const ALL: [UnitKey; UnitKey::COUNT] = [
        UnitKey::Ten,
        UnitKey::Gram,
        UnitKey::Metre,
        UnitKey::Second,
        UnitKey::Ampere,
        UnitKey::Kelvin,
        UnitKey::Candela,
        UnitKey::Mole,
        UnitKey::Percent,
        UnitKey::Ppm,
        UnitKey::Ppb,
        UnitKey::Ppt,
        UnitKey::Ppq,
    ];

    pub const fn symbol(self) -> &'static str {
        match self {
            UnitKey::Ten => "10",
            UnitKey::Gram => "g",
            UnitKey::Metre => "m",
            UnitKey::Second => "s",
            UnitKey::Ampere => "A",
            UnitKey::Kelvin => "K",
            UnitKey::Candela => "cd",
            UnitKey::Mole => "mol",
            UnitKey::Percent => "%",
            UnitKey::Ppm => "ppm",
            UnitKey::Ppb => "ppb",
            UnitKey::Ppt => "ppt",
            UnitKey::Ppq => "ppq",
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for UnitKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Integer powers over every [`UnitKey`]; a zero entry means the key is absent.
///
/// The vector is `Copy`, so combining two results always yields a fresh value
/// and never touches a vector still held by a nested parse result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DimensionVector(pub [i32; UnitKey::COUNT]);

impl DimensionVector {
    pub const ZERO: DimensionVector = DimensionVector([0; UnitKey::COUNT]);

    pub const fn new() -> Self {
        Self::ZERO
    }

    /// Vector with a single key raised to `exp`.
    pub const fn of(key: UnitKey, exp: i32) -> Self {
        Self::ZERO.with(key, exp)
    }

    pub const fn with(self, key: UnitKey, exp: i32) -> Self {
        let mut out = self.0;
        out[key.index()] = exp;
        Self(out)
    }

    pub const fn get(&self, key: UnitKey) -> i32 {
        self.0[key.index()]
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|e| *e == 0)
    }

    /// Exponent of the power-of-ten key.
    pub const fn ten(&self) -> i32 {
        self.get(UnitKey::Ten)
    }

    /// Same vector with the power-of-ten entry cleared.
    pub const fn without_ten(self) -> Self {
        self.with(UnitKey::Ten, 0)
    }

    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.zip_with(rhs, i32::checked_add)
    }

    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        self.zip_with(rhs, i32::checked_sub)
    }

    pub fn checked_neg(self) -> Option<Self> {
        self.map(i32::checked_neg)
    }

    /// Multiplies every entry, the power-of-ten key included.
    pub fn checked_scale(self, factor: i32) -> Option<Self> {
        self.map(|e| e.checked_mul(factor))
    }

    /// Adds `exp` to a single key.
    pub fn checked_shift(self, key: UnitKey, exp: i32) -> Option<Self> {
        let mut out = self;
        out.0[key.index()] = out.0[key.index()].checked_add(exp)?;
        Some(out)
    }

    /// Non-zero entries in canonical key order.
    pub fn iter(&self) -> impl Iterator<Item = (UnitKey, i32)> + '_ {
        UnitKey::ALL
            .into_iter()
            .map(move |k| (k, self.get(k)))
            .filter(|(_, e)| *e != 0)
    }

    fn map(self, f: impl Fn(i32) -> Option<i32>) -> Option<Self> {
        let mut out = [0; UnitKey::COUNT];
        for (slot, e) in out.iter_mut().zip(self.0) {
            *slot = f(e)?;
        }
        Some(Self(out))
    }

    fn zip_with(self, rhs: Self, f: impl Fn(i32, i32) -> Option<i32>) -> Option<Self> {
        let mut out = [0; UnitKey::COUNT];
        for ((slot, a), b) in out.iter_mut().zip(self.0).zip(rhs.0) {
            *slot = f(a, b)?;
        }
        Some(Self(out))
    }
}

/// Renders the unit part only: every key except `10`, exponent 1 omitted,
/// joined by `*`.
impl fmt::Display for DimensionVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (key, exp) in self.iter().filter(|(k, _)| *k != UnitKey::Ten) {
            if !first {
                f.write_str("*")?;
            }
            first = false;
            if exp == 1 {
                write!(f, "{key}")?;
            } else {
                write!(f, "{key}^{exp}")?;
            }
        }
        Ok(())
    }
}

/// Numeric conversion attached to a unit, applied to the significand.
///
/// Only affine offsets exist (`°C` is `x + 273.15`). Composition follows the
/// grammar: multiplication and division both compose, exponentiation keeps the
/// base's conversion untouched.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Conversion {
    #[default]
    Identity,
    Affine { offset: f64 },
}

impl Conversion {
    pub fn apply(self, x: f64) -> f64 {
        match self {
            Conversion::Identity => x,
            Conversion::Affine { offset } => x + offset,
        }
    }

    /// `self ∘ inner`, i.e. `x -> self(inner(x))`.
    pub fn compose(self, inner: Conversion) -> Conversion {
        match (self, inner) {
            (Conversion::Identity, c) | (c, Conversion::Identity) => c,
            (Conversion::Affine { offset: a }, Conversion::Affine { offset: b }) => {
                Conversion::Affine { offset: a + b }
            }
        }
    }

    pub fn is_identity(self) -> bool {
        matches!(self, Conversion::Identity)
    }
}
