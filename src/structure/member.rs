// Tue Jan 13 2026 - Alex

use crate::structure::TypeInfo;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberRole {
    /// Base class subobject, initialized before the declared fields.
    Base,
    Field,
}

/// Information about a bit field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BitFieldInfo {
    pub bits: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Member {
    name: String,
    role: MemberRole,
    type_info: TypeInfo,
    bit_field: Option<BitFieldInfo>,
}

impl Member {
    pub fn new(name: impl Into<String>, role: MemberRole, type_info: TypeInfo) -> Self {
        Self {
            name: name.into(),
            role,
            type_info,
            bit_field: None,
        }
    }

    pub fn field(name: impl Into<String>, type_info: TypeInfo) -> Self {
        Self::new(name, MemberRole::Field, type_info)
    }

    pub fn base(name: impl Into<String>, type_info: TypeInfo) -> Self {
        Self::new(name, MemberRole::Base, type_info)
    }

    pub fn with_bit_field(mut self, bits: usize) -> Self {
        self.bit_field = Some(BitFieldInfo { bits });
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn role(&self) -> MemberRole {
        self.role
    }

    pub fn is_base(&self) -> bool {
        self.role == MemberRole::Base
    }

    pub fn type_info(&self) -> &TypeInfo {
        &self.type_info
    }

    pub fn bit_field(&self) -> Option<BitFieldInfo> {
        self.bit_field
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_base() {
            return write!(f, "base {}", self.type_info.name());
        }
        write!(f, "{} {}", self.type_info, self.name)?;
        if let Some(bf) = self.bit_field() {
            write!(f, " : {}", bf.bits)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structure::PrimitiveType;

    #[test]
    fn test_display_shows_bit_width() {
        let ready = Member::field("ready", TypeInfo::Scalar(PrimitiveType::U8)).with_bit_field(1);
        assert_eq!(ready.bit_field(), Some(BitFieldInfo { bits: 1 }));
        assert_eq!(ready.to_string(), "uint8_t ready : 1");
        let base = Member::base("Base1", TypeInfo::aggregate("Base1", Vec::new()));
        assert_eq!(base.to_string(), "base Base1");
    }
}
