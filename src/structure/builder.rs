// Tue Jan 13 2026 - Alex

use crate::structure::{Member, PrimitiveType, TypeInfo};

/// Describes a foreign aggregate member by member.
pub struct AggregateBuilder {
    name: String,
    bases: Vec<Member>,
    fields: Vec<Member>,
}

impl AggregateBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bases: Vec::new(),
            fields: Vec::new(),
        }
    }

    pub fn base(mut self, name: impl Into<String>, type_info: TypeInfo) -> Self {
        self.bases.push(Member::base(name, type_info));
        self
    }

    pub fn field(mut self, name: impl Into<String>, type_info: TypeInfo) -> Self {
        self.fields.push(Member::field(name, type_info));
        self
    }

    pub fn scalar(self, name: impl Into<String>, ty: PrimitiveType) -> Self {
        self.field(name, TypeInfo::Scalar(ty))
    }

    pub fn bit_field(mut self, name: impl Into<String>, ty: PrimitiveType, bits: usize) -> Self {
        self.fields
            .push(Member::field(name, TypeInfo::Scalar(ty)).with_bit_field(bits));
        self
    }

    pub fn scalars(mut self, prefix: &str, ty: PrimitiveType, count: usize) -> Self {
        for i in 0..count {
            self = self.scalar(format!("{}{}", prefix, i), ty);
        }
        self
    }

    pub fn build(self) -> TypeInfo {
        let (name, members) = self.into_parts();
        TypeInfo::aggregate(name, members)
    }

    pub fn build_union(self) -> TypeInfo {
        let (name, members) = self.into_parts();
        TypeInfo::union(name, members)
    }

    fn into_parts(self) -> (String, Vec<Member>) {
        let Self { name, mut bases, fields } = self;
        bases.extend(fields);
        (name, bases)
    }
}
