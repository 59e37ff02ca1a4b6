use crate::SyntaxKind;

/// Set of kinds packed into one `u128`, usable in `const` context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SyntaxSet {
    bits: u128,
}

impl SyntaxSet {
    pub const EMPTY: Self = Self { bits: 0 };

    const fn bit(kind: SyntaxKind) -> u128 {
        let index = kind as u16;
        assert!(index < u128::BITS as u16, "SyntaxKind does not fit in a SyntaxSet");
        1 << index
    }

    pub const fn new<const N: usize>(kinds: [SyntaxKind; N]) -> Self {
        let mut bits = 0;

        let mut i = 0;
        while i < N {
            bits |= Self::bit(kinds[i]);
            i += 1;
        }

        Self { bits }
    }

    pub const fn union(self, other: &Self) -> Self {
        Self { bits: self.bits | other.bits }
    }

    pub const fn contains(&self, kind: SyntaxKind) -> bool {
        self.bits & Self::bit(kind) != 0
    }
}
