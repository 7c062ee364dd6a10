//! Types for representing the program throughout the compilation pipeline.

#[macro_use]
extern crate macro_rules_attribute;

pub mod ast;

use std::fmt;

derive_alias! {
    #[derive(NodeTraits!)] = #[derive(Debug, Clone, PartialEq, Eq)];
    #[derive(NodeCopyTraits!)] = #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)];
}

/// Symbol the executable starts running at.
pub const ENTRY_SYMBOL: &str = "main";

/// The integer types a function may declare as its return type.
#[derive(NodeCopyTraits!)]
pub enum Type {
    U8,
    U16,
    U32,
    U64,
    I8,
    I16,
    I32,
    I64,
}

impl Type {
    pub const ALL: [Type; 8] = [
        Type::U8,
        Type::U16,
        Type::U32,
        Type::U64,
        Type::I8,
        Type::I16,
        Type::I32,
        Type::I64,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|ty| ty.name() == name)
    }

    pub fn name(self) -> &'static str {
        match self {
            Type::U8 => "uint8",
            Type::U16 => "uint16",
            Type::U32 => "uint32",
            Type::U64 => "uint64",
            Type::I8 => "int8",
            Type::I16 => "int16",
            Type::I32 => "int32",
            Type::I64 => "int64",
        }
    }

    pub fn bits(self) -> u32 {
        match self {
            Type::U8 | Type::I8 => 8,
            Type::U16 | Type::I16 => 16,
            Type::U32 | Type::I32 => 32,
            Type::U64 | Type::I64 => 64,
        }
    }

    pub fn is_signed(self) -> bool {
        matches!(self, Type::I8 | Type::I16 | Type::I32 | Type::I64)
    }

    /// Largest value a literal of this type may hold.
    ///
    /// Literals are never negative, so this is the only bound to check.
    pub fn max_value(self) -> u64 {
        let magnitude_bits = if self.is_signed() {
            self.bits() - 1
        } else {
            self.bits()
        };

        u64::MAX >> (64 - magnitude_bits)
    }

    pub fn fits(self, value: u64) -> bool {
        value <= self.max_value()
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::Type;

    #[test]
    fn names_round_trip() {
        for ty in Type::ALL {
            assert_eq!(Type::from_name(ty.name()), Some(ty));
        }
        assert_eq!(Type::from_name("uint128"), None);
    }

    #[test]
    fn ranges() {
        assert_eq!(Type::U8.max_value(), 255);
        assert_eq!(Type::I8.max_value(), 127);
        assert_eq!(Type::U16.max_value(), 65_535);
        assert_eq!(Type::I32.max_value(), i32::MAX as u64);
        assert_eq!(Type::U64.max_value(), u64::MAX);
        assert_eq!(Type::I64.max_value(), i64::MAX as u64);

        assert!(Type::U8.fits(255));
        assert!(!Type::U8.fits(300));
        assert!(!Type::I8.fits(128));
    }
}
