//! Use-case diagram entities.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    name: String,
}

impl Actor {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UseCase {
    label: String,
}

impl UseCase {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

/// An association between an actor name and a use-case label.
///
/// Neither end is checked at parse time; unresolved links are dropped when
/// the diagram is laid out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActorLink {
    actor: String,
    use_case: String,
}

impl ActorLink {
    pub fn new(actor: impl Into<String>, use_case: impl Into<String>) -> Self {
        Self {
            actor: actor.into(),
            use_case: use_case.into(),
        }
    }

    pub fn actor(&self) -> &str {
        &self.actor
    }

    pub fn use_case(&self) -> &str {
        &self.use_case
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UseCaseDiagram {
    actors: Vec<Actor>,
    use_cases: Vec<UseCase>,
    links: Vec<ActorLink>,
}

impl UseCaseDiagram {
    pub fn new(actors: Vec<Actor>, use_cases: Vec<UseCase>, links: Vec<ActorLink>) -> Self {
        Self {
            actors,
            use_cases,
            links,
        }
    }

    pub fn actors(&self) -> &[Actor] {
        &self.actors
    }

    pub fn use_cases(&self) -> &[UseCase] {
        &self.use_cases
    }

    pub fn links(&self) -> &[ActorLink] {
        &self.links
    }
}
