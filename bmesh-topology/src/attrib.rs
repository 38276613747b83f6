use crate::*;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// The scalar kind of an attribute payload.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum BaseType {
    /// 32-bit signed integers.
    Int,
    /// IEEE-754 32-bit floats.
    Float,
}

/// The type of an attribute: a scalar kind and a fixed array dimension.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct AttributeFormat {
    /// The scalar kind of the payload.
    pub base_type: BaseType,
    /// The number of scalars per value, at least 1.
    pub dimensions: usize,
}

/// An attribute payload: a flat, fixed-dimension array of ints or floats.
///
/// Values are deep-copied by `Clone`; two entities never share a payload.
/// # Examples
/// ```
/// use bmesh_topology::AttributeValue;
/// let a = AttributeValue::from(vec![1.0_f32, 0.0, 0.0]);
/// let b = AttributeValue::from(vec![0.0_f32, 1.0, 0.0]);
/// assert!((a.distance(&b) - 2.0_f32.sqrt()).abs() < 1.0e-6);
///
/// // Distance across mismatched types or dimensions is infinite.
/// let c = AttributeValue::from(vec![1, 0, 0]);
/// assert_eq!(a.distance(&c), f32::INFINITY);
/// ```
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub enum AttributeValue {
    /// 32-bit signed integer payload.
    Int(Vec<i32>),
    /// IEEE-754 32-bit float payload.
    Float(Vec<f32>),
}

impl AttributeValue {
    /// Creates a zero-filled value of the given format.
    pub fn zeroed(format: AttributeFormat) -> AttributeValue {
        match format.base_type {
            BaseType::Int => AttributeValue::Int(vec![0; format.dimensions]),
            BaseType::Float => AttributeValue::Float(vec![0.0; format.dimensions]),
        }
    }

    /// Returns the format of this value.
    #[inline(always)]
    pub fn format(&self) -> AttributeFormat {
        match self {
            AttributeValue::Int(data) => AttributeFormat {
                base_type: BaseType::Int,
                dimensions: data.len(),
            },
            AttributeValue::Float(data) => AttributeFormat {
                base_type: BaseType::Float,
                dimensions: data.len(),
            },
        }
    }

    /// Returns whether this value has the given scalar kind and dimension.
    #[inline(always)]
    pub fn matches(&self, format: AttributeFormat) -> bool { self.format() == format }

    /// Returns the number of scalars in the payload.
    #[inline(always)]
    pub fn len(&self) -> usize {
        match self {
            AttributeValue::Int(data) => data.len(),
            AttributeValue::Float(data) => data.len(),
        }
    }

    /// Returns whether the payload is empty.
    #[inline(always)]
    pub fn is_empty(&self) -> bool { self.len() == 0 }

    /// Returns the integer payload, or `None` for a float value.
    #[inline(always)]
    pub fn as_int(&self) -> Option<&[i32]> {
        match self {
            AttributeValue::Int(data) => Some(data),
            AttributeValue::Float(_) => None,
        }
    }

    /// Returns the float payload, or `None` for an integer value.
    #[inline(always)]
    pub fn as_float(&self) -> Option<&[f32]> {
        match self {
            AttributeValue::Float(data) => Some(data),
            AttributeValue::Int(_) => None,
        }
    }

    /// Euclidean distance between two values of the same format.
    ///
    /// If the scalar kinds or dimensions differ, the values are incomparable
    /// and the distance is positive infinity.
    pub fn distance(&self, other: &AttributeValue) -> f32 {
        match (self, other) {
            (AttributeValue::Int(a), AttributeValue::Int(b)) if a.len() == b.len() => a
                .iter()
                .zip(b)
                .map(|(x, y)| {
                    let d = f64::from(x - y);
                    d * d
                })
                .sum::<f64>()
                .sqrt() as f32,
            (AttributeValue::Float(a), AttributeValue::Float(b)) if a.len() == b.len() => a
                .iter()
                .zip(b)
                .map(|(x, y)| {
                    let d = f64::from(x - y);
                    d * d
                })
                .sum::<f64>()
                .sqrt() as f32,
            _ => f32::INFINITY,
        }
    }
}

impl From<i32> for AttributeValue {
    #[inline(always)]
    fn from(value: i32) -> AttributeValue { AttributeValue::Int(vec![value]) }
}

impl From<f32> for AttributeValue {
    #[inline(always)]
    fn from(value: f32) -> AttributeValue { AttributeValue::Float(vec![value]) }
}

impl From<Vec<i32>> for AttributeValue {
    #[inline(always)]
    fn from(data: Vec<i32>) -> AttributeValue { AttributeValue::Int(data) }
}

impl From<Vec<f32>> for AttributeValue {
    #[inline(always)]
    fn from(data: Vec<f32>) -> AttributeValue { AttributeValue::Float(data) }
}

impl<const N: usize> From<[i32; N]> for AttributeValue {
    #[inline(always)]
    fn from(data: [i32; N]) -> AttributeValue { AttributeValue::Int(data.to_vec()) }
}

impl<const N: usize> From<[f32; N]> for AttributeValue {
    #[inline(always)]
    fn from(data: [f32; N]) -> AttributeValue { AttributeValue::Float(data.to_vec()) }
}

impl From<Vector3> for AttributeValue {
    #[inline(always)]
    fn from(v: Vector3) -> AttributeValue {
        AttributeValue::Float(vec![v.x as f32, v.y as f32, v.z as f32])
    }
}

/// A named, typed attribute declaration with the default payload that new
/// and back-filled entities receive.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct AttributeDefinition {
    /// The attribute name, unique within one registry.
    pub name: String,
    /// The scalar kind and dimension every value of this attribute has.
    pub format: AttributeFormat,
    /// The payload installed on entities. Must keep matching `format`.
    pub default: AttributeValue,
}

impl AttributeDefinition {
    /// Creates a definition with a zero-filled default.
    pub fn new(
        name: impl Into<String>,
        base_type: BaseType,
        dimensions: usize,
    ) -> AttributeDefinition {
        let format = AttributeFormat {
            base_type,
            dimensions,
        };
        AttributeDefinition {
            name: name.into(),
            format,
            default: AttributeValue::zeroed(format),
        }
    }

    /// Creates a definition whose format is inferred from `default`.
    pub fn with_default(
        name: impl Into<String>,
        default: impl Into<AttributeValue>,
    ) -> AttributeDefinition {
        let default = default.into();
        AttributeDefinition {
            name: name.into(),
            format: default.format(),
            default,
        }
    }
}

/// The per-entity attribute storage. The map allocates nothing until the
/// first value is inserted, so entities without attributes stay cheap.
pub type Attributes = FxHashMap<String, AttributeValue>;

/// Brings `attributes` in line with the registry `defs`: installs a deep
/// copy of the default under every registered name that is absent, and
/// resets any present value whose format drifted from its definition,
/// warning on the logging channel.
pub(crate) fn ensure_attributes(defs: &[AttributeDefinition], attributes: &mut Attributes) {
    for def in defs {
        let reset = match attributes.get(&def.name) {
            None => true,
            Some(value) if value.matches(def.format) => false,
            Some(value) => {
                log::warn!(
                    "attribute {:?} has format {:?} where {:?} was registered, resetting to the default",
                    def.name,
                    value.format(),
                    def.format,
                );
                true
            }
        };
        if reset {
            attributes.insert(def.name.clone(), def.default.clone());
        }
    }
}

macro_rules! attribute_registry {
    ($kind: literal, $registry: ident, $arena: ident, $has: ident, $add: ident, $get: ident, $get_mut: ident, $list: ident) => {
        impl Mesh {
            #[doc = concat!("Returns whether a ", $kind, " attribute named `name` is registered.")]
            #[inline(always)]
            pub fn $has(&self, name: &str) -> bool {
                self.$registry.iter().any(|def| def.name == name)
            }

            #[doc = concat!("Registers a ", $kind, " attribute definition and installs a deep ")]
            #[doc = "copy of its default on every existing entity of the kind."]
            #[doc = ""]
            #[doc = "If a definition with the same name is already registered, nothing is"]
            #[doc = "registered and the argument is handed back as-is; note that the"]
            #[doc = "returned definition is then *not* the registered one, so edits to its"]
            #[doc = concat!("default go nowhere. Use [`Mesh::", stringify!($get_mut), "`] to edit a registered default.")]
            pub fn $add(&mut self, attrib: AttributeDefinition) -> AttributeDefinition {
                if self.$has(&attrib.name) {
                    return attrib;
                }
                for (_, entity) in self.$arena.iter_mut() {
                    entity
                        .attributes
                        .insert(attrib.name.clone(), attrib.default.clone());
                }
                self.$registry.push(attrib.clone());
                attrib
            }

            #[doc = concat!("Returns the registered ", $kind, " attribute definition named `name`.")]
            #[inline(always)]
            pub fn $get(&self, name: &str) -> Option<&AttributeDefinition> {
                self.$registry.iter().find(|def| def.name == name)
            }

            #[doc = concat!("Returns the registered ", $kind, " attribute definition named `name`, mutably.")]
            #[doc = ""]
            #[doc = "Editing the returned default changes what entities created afterwards"]
            #[doc = "receive; values already installed are not touched."]
            #[inline(always)]
            pub fn $get_mut(&mut self, name: &str) -> Option<&mut AttributeDefinition> {
                self.$registry.iter_mut().find(|def| def.name == name)
            }

            #[doc = concat!("Returns the ordered registry of ", $kind, " attribute definitions.")]
            #[inline(always)]
            pub fn $list(&self) -> &[AttributeDefinition] { &self.$registry }
        }
    };
}

attribute_registry!(
    "vertex",
    vertex_attributes,
    vertices,
    has_vertex_attribute,
    add_vertex_attribute,
    vertex_attribute,
    vertex_attribute_mut,
    vertex_attributes
);
attribute_registry!(
    "edge",
    edge_attributes,
    edges,
    has_edge_attribute,
    add_edge_attribute,
    edge_attribute,
    edge_attribute_mut,
    edge_attributes
);
attribute_registry!(
    "loop",
    loop_attributes,
    loops,
    has_loop_attribute,
    add_loop_attribute,
    loop_attribute,
    loop_attribute_mut,
    loop_attributes
);
attribute_registry!(
    "face",
    face_attributes,
    faces,
    has_face_attribute,
    add_face_attribute,
    face_attribute,
    face_attribute_mut,
    face_attributes
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeroed_matches_its_format() {
        let format = AttributeFormat {
            base_type: BaseType::Float,
            dimensions: 4,
        };
        let value = AttributeValue::zeroed(format);
        assert!(value.matches(format));
        assert_eq!(value.as_float(), Some(&[0.0_f32; 4][..]));
    }

    #[test]
    fn distance_of_ints() {
        let a = AttributeValue::from(vec![0, 3]);
        let b = AttributeValue::from(vec![4, 0]);
        assert!((a.distance(&b) - 5.0).abs() < 1.0e-6);
    }

    #[test]
    fn ensure_fills_and_resets() {
        let defs = vec![
            AttributeDefinition::with_default("weight", 1.5_f32),
            AttributeDefinition::with_default("group", 7),
        ];
        let mut attributes = Attributes::default();
        attributes.insert("group".into(), AttributeValue::from(vec![0.0_f32; 3]));
        ensure_attributes(&defs, &mut attributes);
        assert_eq!(attributes["weight"], AttributeValue::from(1.5_f32));
        // wrong format went back to the default
        assert_eq!(attributes["group"], AttributeValue::from(7));
    }
}
