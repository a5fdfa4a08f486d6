//! How each leaf type maps onto the `SerializedProperty` accessors.

use unityped_ir::{EnumWidth, LeafType};

/// C# binding of a leaf type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeafBinding {
    /// C# value type exposed as `Value`.
    pub value_type: &'static str,
    /// Suffix of the runtime view type name (`SerializedPropertyView{suffix}`).
    pub suffix: &'static str,
    /// `SerializedProperty` member holding the value.
    pub accessor: &'static str,
    /// Narrowing cast applied when reading.
    pub read_cast: Option<&'static str>,
    /// Cast applied when writing, when the value does not widen implicitly.
    pub write_cast: Option<&'static str>,
}

impl LeafBinding {
    const fn plain(value_type: &'static str, suffix: &'static str, accessor: &'static str) -> Self {
        Self {
            value_type,
            suffix,
            accessor,
            read_cast: None,
            write_cast: None,
        }
    }

    const fn narrowed(
        value_type: &'static str,
        suffix: &'static str,
        accessor: &'static str,
    ) -> Self {
        Self {
            value_type,
            suffix,
            accessor,
            read_cast: Some(value_type),
            write_cast: None,
        }
    }

    /// `get` expression reading the value from `Property`.
    pub fn read_expr(&self) -> String {
        match self.read_cast {
            Some(cast) => format!("({cast})Property.{}", self.accessor),
            None => format!("Property.{}", self.accessor),
        }
    }

    /// `set` statement expression writing `value` to `Property`.
    pub fn write_expr(&self) -> String {
        match self.write_cast {
            Some(cast) => format!("Property.{} = ({cast})value", self.accessor),
            None => format!("Property.{} = value", self.accessor),
        }
    }
}

/// Binding of a leaf type.
pub fn binding(leaf: LeafType) -> LeafBinding {
    match leaf {
        LeafType::Byte => LeafBinding::narrowed("byte", "Byte", "intValue"),
        LeafType::SByte => LeafBinding::narrowed("sbyte", "SByte", "intValue"),
        LeafType::Short => LeafBinding::narrowed("short", "Short", "intValue"),
        LeafType::UShort => LeafBinding::narrowed("ushort", "UShort", "intValue"),
        LeafType::Int => LeafBinding::plain("int", "Int", "intValue"),
        LeafType::UInt => LeafBinding::narrowed("uint", "UInt", "longValue"),
        LeafType::Long => LeafBinding::plain("long", "Long", "longValue"),
        LeafType::ULong => LeafBinding {
            write_cast: Some("long"),
            ..LeafBinding::narrowed("ulong", "ULong", "longValue")
        },
        LeafType::Float => LeafBinding::plain("float", "Float", "floatValue"),
        LeafType::Double => LeafBinding::plain("double", "Double", "doubleValue"),
        LeafType::Bool => LeafBinding::plain("bool", "Bool", "boolValue"),
        LeafType::String => LeafBinding::plain("string", "String", "stringValue"),
        LeafType::Char => LeafBinding::narrowed("char", "Char", "intValue"),
        LeafType::AnimationCurve => LeafBinding::plain(
            "global::UnityEngine.AnimationCurve",
            "AnimationCurve",
            "animationCurveValue",
        ),
        LeafType::BoundsInt => {
            LeafBinding::plain("global::UnityEngine.BoundsInt", "BoundsInt", "boundsIntValue")
        }
        LeafType::Bounds => {
            LeafBinding::plain("global::UnityEngine.Bounds", "Bounds", "boundsValue")
        }
        LeafType::Color => LeafBinding::plain("global::UnityEngine.Color", "Color", "colorValue"),
        LeafType::Hash128 => {
            LeafBinding::plain("global::UnityEngine.Hash128", "Hash128", "hash128Value")
        }
        LeafType::Quaternion => LeafBinding::plain(
            "global::UnityEngine.Quaternion",
            "Quaternion",
            "quaternionValue",
        ),
        LeafType::RectInt => {
            LeafBinding::plain("global::UnityEngine.RectInt", "RectInt", "rectIntValue")
        }
        LeafType::Rect => LeafBinding::plain("global::UnityEngine.Rect", "Rect", "rectValue"),
        LeafType::Vector2Int => LeafBinding::plain(
            "global::UnityEngine.Vector2Int",
            "Vector2Int",
            "vector2IntValue",
        ),
        LeafType::Vector2 => {
            LeafBinding::plain("global::UnityEngine.Vector2", "Vector2", "vector2Value")
        }
        LeafType::Vector3Int => LeafBinding::plain(
            "global::UnityEngine.Vector3Int",
            "Vector3Int",
            "vector3IntValue",
        ),
        LeafType::Vector3 => {
            LeafBinding::plain("global::UnityEngine.Vector3", "Vector3", "vector3Value")
        }
        LeafType::Vector4 => {
            LeafBinding::plain("global::UnityEngine.Vector4", "Vector4", "vector4Value")
        }
    }
}

/// Storage of an enum in the property store: (C# storage type, accessor).
pub fn enum_storage(width: EnumWidth) -> (&'static str, &'static str) {
    match width {
        EnumWidth::I8 => ("sbyte", "intValue"),
        EnumWidth::U8 => ("byte", "intValue"),
        EnumWidth::I16 => ("short", "intValue"),
        EnumWidth::U16 => ("ushort", "intValue"),
        EnumWidth::I32 => ("int", "intValue"),
        EnumWidth::U32 => ("uint", "longValue"),
        EnumWidth::I64 => ("long", "longValue"),
        EnumWidth::U64 => ("ulong", "longValue"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_leaf_has_a_distinct_suffix() {
        let mut suffixes: Vec<_> = LeafType::ALL.iter().map(|&l| binding(l).suffix).collect();
        suffixes.sort_unstable();
        suffixes.dedup();
        assert_eq!(suffixes.len(), LeafType::ALL.len());
    }

    #[test]
    fn test_narrow_integer_reads_are_cast() {
        let byte = binding(LeafType::Byte);
        assert_eq!(byte.read_expr(), "(byte)Property.intValue");
        assert_eq!(byte.write_expr(), "Property.intValue = value");
    }

    #[test]
    fn test_ulong_casts_both_ways() {
        let ulong = binding(LeafType::ULong);
        assert_eq!(ulong.read_expr(), "(ulong)Property.longValue");
        assert_eq!(ulong.write_expr(), "Property.longValue = (long)value");
    }

    #[test]
    fn test_unity_types_are_fully_qualified() {
        let color = binding(LeafType::Color);
        assert_eq!(color.value_type, "global::UnityEngine.Color");
        assert_eq!(color.read_expr(), "Property.colorValue");
    }
}
