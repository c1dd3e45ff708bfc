//! Sign attached to a digit buffer.

/// Sign of a [`LongInt`](crate::LongInt).
///
/// A zero magnitude always carries `Pos`, so equality and ordering never
/// have to distinguish +0 from -0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Pos,
    Neg,
}

impl Sign {
    /// The opposite sign.
    #[must_use]
    pub fn flip(self) -> Self {
        match self {
            Self::Pos => Self::Neg,
            Self::Neg => Self::Pos,
        }
    }

    /// Sign of a product of operands with signs `self` and `other`.
    #[must_use]
    pub fn xor(self, other: Self) -> Self {
        if self == other {
            Self::Pos
        } else {
            Self::Neg
        }
    }

    #[must_use]
    pub fn is_negative(self) -> bool {
        self == Self::Neg
    }
}
