//! Component diagram entities: packages, components and connections.

use super::ArrowDirection;

/// A component declared as `[Full Name]` or `[Full Name] as alias`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    name: String,
    alias: Option<String>,
}

impl Component {
    pub fn new(name: impl Into<String>, alias: Option<String>) -> Self {
        Self {
            name: name.into(),
            alias,
        }
    }

    /// The full name written inside the brackets.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    pub fn set_alias(&mut self, alias: impl Into<String>) {
        self.alias = Some(alias.into());
    }
}

/// A group of components.
///
/// Named packages come from `package "Name" {` blocks. Components declared
/// outside any block go to the single unnamed standalone group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Package {
    name: Option<String>,
    components: Vec<Component>,
}

impl Package {
    pub fn new(name: Option<String>) -> Self {
        Self {
            name,
            components: Vec::new(),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn push_component(&mut self, component: Component) {
        self.components.push(component);
    }

    pub fn component_mut(&mut self, index: usize) -> Option<&mut Component> {
        self.components.get_mut(index)
    }
}

/// A connection between two component references (alias or full name).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    from: String,
    to: String,
    direction: ArrowDirection,
    label: Option<String>,
}

impl Connection {
    pub fn new(
        from: impl Into<String>,
        to: impl Into<String>,
        direction: ArrowDirection,
        label: Option<String>,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            direction,
            label,
        }
    }

    pub fn from(&self) -> &str {
        &self.from
    }

    pub fn to(&self) -> &str {
        &self.to
    }

    pub fn direction(&self) -> ArrowDirection {
        self.direction
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComponentDiagram {
    packages: Vec<Package>,
    connections: Vec<Connection>,
}

impl ComponentDiagram {
    /// Builds a diagram from its packages, in declaration order.
    ///
    /// At most one package is expected to be unnamed (the standalone group).
    pub fn new(packages: Vec<Package>, connections: Vec<Connection>) -> Self {
        Self {
            packages,
            connections,
        }
    }

    /// All groups, named and standalone.
    pub fn packages(&self) -> &[Package] {
        &self.packages
    }

    /// Named packages in declaration order.
    pub fn named_packages(&self) -> impl Iterator<Item = &Package> {
        self.packages.iter().filter(|package| package.name().is_some())
    }

    /// Components declared outside any package.
    pub fn standalone(&self) -> &[Component] {
        self.packages
            .iter()
            .find(|package| package.name().is_none())
            .map(Package::components)
            .unwrap_or_default()
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_and_standalone_split() {
        let mut frontend = Package::new(Some("Frontend".to_string()));
        frontend.push_component(Component::new("Web Browser", Some("WB".to_string())));

        let mut standalone = Package::new(None);
        standalone.push_component(Component::new("Logger", None));

        let diagram = ComponentDiagram::new(vec![frontend, standalone], Vec::new());

        assert_eq!(diagram.named_packages().count(), 1);
        assert_eq!(diagram.standalone().len(), 1);
        assert_eq!(diagram.standalone()[0].name(), "Logger");
        assert_eq!(diagram.standalone()[0].alias(), None);
    }

    #[test]
    fn test_standalone_empty_without_unnamed_group() {
        let diagram = ComponentDiagram::new(vec![Package::new(Some("P".to_string()))], Vec::new());
        assert!(diagram.standalone().is_empty());
    }
}
