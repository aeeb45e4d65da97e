//! Members as reported by the oracle — pure data, no policy.

use std::sync::Arc;

/// The kind of member declared directly on a type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MemberKind {
    /// A method (constructors surface here too, with a `void` return).
    Method,
    /// A property with one or both accessors.
    Property,
    /// A field; promoted to property syntax in the synthesized interface.
    Field,
    /// An event.
    Event,
    /// A nested type (enum, class); rendered only as a placeholder.
    NestedType,
}

impl MemberKind {
    /// Get a display label for this member kind, matching the host
    /// platform's symbol interface names.
    pub fn display(&self) -> &'static str {
        match self {
            MemberKind::Method => "IMethodSymbol",
            MemberKind::Property => "IPropertySymbol",
            MemberKind::Field => "IFieldSymbol",
            MemberKind::Event => "IEventSymbol",
            MemberKind::NestedType => "INamedTypeSymbol",
        }
    }
}

/// Declared accessibility of a member.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Visibility {
    Public,
    Internal,
    Protected,
    Private,
}

impl Visibility {
    /// Returns true for members visible outside their own assembly.
    pub fn is_public(&self) -> bool {
        matches!(self, Visibility::Public)
    }
}

/// An ordered method parameter: type then name.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Parameter {
    /// Display form of the parameter type.
    pub ty: Arc<str>,
    /// Parameter name.
    pub name: Arc<str>,
}

impl Parameter {
    /// Create a parameter from its type and name.
    pub fn new(ty: impl Into<Arc<str>>, name: impl Into<Arc<str>>) -> Self {
        Self {
            ty: ty.into(),
            name: name.into(),
        }
    }
}

/// The accessor set a property was declared with.
///
/// Retained as reported even though the renderer currently emits
/// `{ get; set; }` unconditionally, so the declared set is not lost.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PropertyAccessors {
    pub get: bool,
    pub set: bool,
}

impl Default for PropertyAccessors {
    fn default() -> Self {
        Self {
            get: true,
            set: true,
        }
    }
}

/// A member declared directly on a type, as reported by the oracle.
///
/// `display_name` is the host platform's display string for the
/// member and may carry the fully-qualified declaring-type prefix
/// plus, for methods, a type-parameter list (`TwoClass.PerformGeneric<T>`).
/// The renderer strips the prefix and rebuilds parameter lists from
/// `parameters`, never from the display string.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Member {
    /// Simple name (`PerformGeneric`, `IntProp`).
    pub name: Arc<str>,
    /// Host display string, possibly type-qualified.
    pub display_name: Arc<str>,
    /// Fully-qualified declaring type (`LibToRefactor.TwoClass`).
    pub declaring_type: Arc<str>,
    /// What kind of member this is.
    pub kind: MemberKind,
    /// Declared accessibility.
    pub visibility: Visibility,
    /// Ordered parameters; empty unless `kind` is `Method`.
    pub parameters: Vec<Parameter>,
    /// Return type for methods, value type otherwise (`void` allowed).
    pub return_type: Arc<str>,
    /// Generic type parameters for generic methods (`["T"]`).
    pub type_parameters: Vec<Arc<str>>,
    /// Declaration-order index within the declaring type.
    pub index: u32,
    /// Compiler-synthesized property accessor (`Prop.get` / `Prop.set`).
    pub is_accessor: bool,
    /// Method that implements an interface member explicitly.
    pub is_explicit_interface_impl: bool,
    /// Enumerator-factory method (`GetEnumerator` and friends).
    pub is_enumerator_factory: bool,
    /// Accessor set for properties; `None` for other kinds.
    pub accessors: Option<PropertyAccessors>,
}

impl Member {
    /// Create a public method member with the given signature.
    pub fn method(
        declaring_type: impl Into<Arc<str>>,
        name: impl Into<Arc<str>>,
        return_type: impl Into<Arc<str>>,
        parameters: Vec<Parameter>,
        index: u32,
    ) -> Self {
        let declaring_type = declaring_type.into();
        let name = name.into();
        Self {
            display_name: Arc::from(format!("{declaring_type}.{name}")),
            name,
            declaring_type,
            kind: MemberKind::Method,
            visibility: Visibility::Public,
            parameters,
            return_type: return_type.into(),
            type_parameters: Vec::new(),
            index,
            is_accessor: false,
            is_explicit_interface_impl: false,
            is_enumerator_factory: false,
            accessors: None,
        }
    }

    /// Create a public property member.
    pub fn property(
        declaring_type: impl Into<Arc<str>>,
        name: impl Into<Arc<str>>,
        value_type: impl Into<Arc<str>>,
        index: u32,
    ) -> Self {
        let declaring_type = declaring_type.into();
        let name = name.into();
        Self {
            display_name: Arc::from(format!("{declaring_type}.{name}")),
            name,
            declaring_type,
            kind: MemberKind::Property,
            visibility: Visibility::Public,
            parameters: Vec::new(),
            return_type: value_type.into(),
            type_parameters: Vec::new(),
            index,
            is_accessor: false,
            is_explicit_interface_impl: false,
            is_enumerator_factory: false,
            accessors: Some(PropertyAccessors::default()),
        }
    }

    /// Create a field member with the given visibility.
    pub fn field(
        declaring_type: impl Into<Arc<str>>,
        name: impl Into<Arc<str>>,
        value_type: impl Into<Arc<str>>,
        visibility: Visibility,
        index: u32,
    ) -> Self {
        let declaring_type = declaring_type.into();
        let name = name.into();
        Self {
            display_name: Arc::from(format!("{declaring_type}.{name}")),
            name,
            declaring_type,
            kind: MemberKind::Field,
            visibility,
            parameters: Vec::new(),
            return_type: value_type.into(),
            type_parameters: Vec::new(),
            index,
            is_accessor: false,
            is_explicit_interface_impl: false,
            is_enumerator_factory: false,
            accessors: None,
        }
    }

    /// Create a public event member.
    pub fn event(
        declaring_type: impl Into<Arc<str>>,
        name: impl Into<Arc<str>>,
        handler_type: impl Into<Arc<str>>,
        index: u32,
    ) -> Self {
        let declaring_type = declaring_type.into();
        let name = name.into();
        Self {
            display_name: Arc::from(format!("{declaring_type}.{name}")),
            name,
            declaring_type,
            kind: MemberKind::Event,
            visibility: Visibility::Public,
            parameters: Vec::new(),
            return_type: handler_type.into(),
            type_parameters: Vec::new(),
            index,
            is_accessor: false,
            is_explicit_interface_impl: false,
            is_enumerator_factory: false,
            accessors: None,
        }
    }

    /// Create a nested type member with the given visibility.
    pub fn nested_type(
        declaring_type: impl Into<Arc<str>>,
        name: impl Into<Arc<str>>,
        visibility: Visibility,
        index: u32,
    ) -> Self {
        let declaring_type = declaring_type.into();
        let name = name.into();
        Self {
            display_name: Arc::from(format!("{declaring_type}.{name}")),
            name,
            declaring_type,
            kind: MemberKind::NestedType,
            visibility,
            parameters: Vec::new(),
            return_type: Arc::from(""),
            type_parameters: Vec::new(),
            index,
            is_accessor: false,
            is_explicit_interface_impl: false,
            is_enumerator_factory: false,
            accessors: None,
        }
    }

    /// Set the member's visibility.
    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Set the generic type-parameter list of a method.
    pub fn with_type_parameters(mut self, params: Vec<Arc<str>>) -> Self {
        self.type_parameters = params;
        self
    }

    /// Override the host display string.
    pub fn with_display_name(mut self, display: impl Into<Arc<str>>) -> Self {
        self.display_name = display.into();
        self
    }

    /// Mark this member as a compiler-synthesized property accessor.
    pub fn as_accessor(mut self) -> Self {
        self.is_accessor = true;
        self
    }

    /// Mark this method as an explicit interface implementation.
    pub fn as_explicit_interface_impl(mut self) -> Self {
        self.is_explicit_interface_impl = true;
        self
    }

    /// Mark this method as an enumerator factory.
    pub fn as_enumerator_factory(mut self) -> Self {
        self.is_enumerator_factory = true;
        self
    }

    /// Returns true if this member is a compiler-synthesized property
    /// accessor, either flagged by the oracle or recognizable from the
    /// `.get`/`.set` suffix the host platform appends to accessor names.
    pub fn is_property_accessor(&self) -> bool {
        if self.is_accessor {
            return true;
        }
        self.kind == MemberKind::Method
            && (self.name.ends_with(".get")
                || self.name.ends_with(".set")
                || self.display_name.ends_with(".get")
                || self.display_name.ends_with(".set"))
    }

    /// Returns true for generic methods.
    pub fn is_generic(&self) -> bool {
        !self.type_parameters.is_empty()
    }
}
