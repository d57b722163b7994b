//! Structural type descriptors.
//!
//! A [`TypeRef`] names a user type (the one an editor is generated for). A [`TypeDescriptor`] describes the
//! declared type of one of its fields, reduced to the handful of shapes the eligibility rules distinguish.

use std::fmt;

/// Identify a declared type by simple name and (possibly empty) namespace.
///
/// Two `TypeRef`s are equal iff they denote the same declared type, i.e. both parts match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeRef {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub namespace: String,
}

impl TypeRef {
    pub fn new(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
        }
    }

    /// A type declared outside any namespace.
    pub fn global(name: impl Into<String>) -> Self {
        Self::new(name, String::new())
    }

    pub fn has_namespace(&self) -> bool {
        !self.namespace.is_empty()
    }

    /// `Namespace.Name`, or just `Name` for global types.
    pub fn qualified_name(&self) -> String {
        if self.has_namespace() {
            format!("{}.{}", self.namespace, self.name)
        } else {
            self.name.clone()
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.qualified_name())
    }
}

/// Describe the declared type of a field.
///
/// ## Notes
/// - `EngineObject` covers every subtype of the host engine's base object type (components, assets, ...).
/// - `Value` covers structs and primitives alike; the rules never need to tell them apart.
/// - `List` is specifically the single-parameter generic list. Any other generic instantiation is `Generic`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum TypeDescriptor {
    #[cfg_attr(feature = "serde", serde(rename = "object"))]
    EngineObject { name: String },
    Enum { name: String },
    Value { name: String },
    String,
    Array { element: Box<TypeDescriptor> },
    List { element: Box<TypeDescriptor> },
    Class { name: String },
    Generic { name: String, args: Vec<TypeDescriptor> },
}

impl TypeDescriptor {
    pub fn engine_object(name: impl Into<String>) -> Self {
        Self::EngineObject { name: name.into() }
    }

    pub fn enumeration(name: impl Into<String>) -> Self {
        Self::Enum { name: name.into() }
    }

    pub fn value(name: impl Into<String>) -> Self {
        Self::Value { name: name.into() }
    }

    pub fn class(name: impl Into<String>) -> Self {
        Self::Class { name: name.into() }
    }

    pub fn array_of(element: TypeDescriptor) -> Self {
        Self::Array {
            element: Box::new(element),
        }
    }

    pub fn list_of(element: TypeDescriptor) -> Self {
        Self::List {
            element: Box::new(element),
        }
    }

    pub fn generic(name: impl Into<String>, args: Vec<TypeDescriptor>) -> Self {
        Self::Generic {
            name: name.into(),
            args,
        }
    }

    /// Element type of an array or list, `None` for every other shape.
    pub fn element_type(&self) -> Option<&TypeDescriptor> {
        match self {
            TypeDescriptor::Array { element } | TypeDescriptor::List { element } => Some(&**element),
            _ => None,
        }
    }

    pub fn is_container(&self) -> bool {
        self.element_type().is_some()
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeDescriptor::EngineObject { name }
            | TypeDescriptor::Enum { name }
            | TypeDescriptor::Value { name }
            | TypeDescriptor::Class { name } => write!(f, "{name}"),
            TypeDescriptor::String => write!(f, "string"),
            TypeDescriptor::Array { element } => write!(f, "{element}[]"),
            TypeDescriptor::List { element } => write!(f, "List<{element}>"),
            TypeDescriptor::Generic { name, args } => {
                write!(f, "{name}<")?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                write!(f, ">")
            }
        }
    }
}
