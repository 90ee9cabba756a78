//! Class diagram entities.

/// Optional classifier keyword written before the class name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stereotype {
    Abstract,
    Interface,
}

impl Stereotype {
    /// The guillemet label drawn in the class header.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Abstract => "«abstract»",
            Self::Interface => "«interface»",
        }
    }
}

/// A declared class with its members, kept as the raw source lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDecl {
    name: String,
    stereotype: Option<Stereotype>,
    attributes: Vec<String>,
    methods: Vec<String>,
}

impl ClassDecl {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            stereotype: None,
            attributes: Vec::new(),
            methods: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn stereotype(&self) -> Option<Stereotype> {
        self.stereotype
    }

    pub fn attributes(&self) -> &[String] {
        &self.attributes
    }

    pub fn methods(&self) -> &[String] {
        &self.methods
    }

    /// Number of member lines (attributes plus methods).
    pub fn member_count(&self) -> usize {
        self.attributes.len() + self.methods.len()
    }

    pub fn set_stereotype(&mut self, stereotype: Stereotype) {
        self.stereotype = Some(stereotype);
    }

    pub fn push_attribute(&mut self, attribute: impl Into<String>) {
        self.attributes.push(attribute.into());
    }

    pub fn push_method(&mut self, method: impl Into<String>) {
        self.methods.push(method.into());
    }
}

/// The meaning of a class relationship arrow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassRelationKind {
    /// `<|--` or `--|>`
    Inheritance,
    /// `<--` or `-->`
    Association,
}

/// A relationship between two class names, as written left to right.
///
/// Every kind is drawn the same way: an open triangle at the `to` class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassRelation {
    from: String,
    to: String,
    kind: ClassRelationKind,
}

impl ClassRelation {
    pub fn new(
        from: impl Into<String>,
        to: impl Into<String>,
        kind: ClassRelationKind,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            kind,
        }
    }

    pub fn from(&self) -> &str {
        &self.from
    }

    pub fn to(&self) -> &str {
        &self.to
    }

    pub fn kind(&self) -> ClassRelationKind {
        self.kind
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassDiagram {
    classes: Vec<ClassDecl>,
    relations: Vec<ClassRelation>,
}

impl ClassDiagram {
    pub fn new(classes: Vec<ClassDecl>, relations: Vec<ClassRelation>) -> Self {
        Self { classes, relations }
    }

    pub fn classes(&self) -> &[ClassDecl] {
        &self.classes
    }

    pub fn relations(&self) -> &[ClassRelation] {
        &self.relations
    }

    /// Returns the slot index of the class named `name`, if declared.
    pub fn class_index(&self, name: &str) -> Option<usize> {
        self.classes.iter().position(|class| class.name() == name)
    }
}
