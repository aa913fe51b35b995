//! Minimal Dart declaration tree emitted by the generator.

/// A top-level item of a generated unit
#[derive(Debug, Clone, PartialEq)]
pub enum Declaration {
    /// `// text`
    Comment(String),
    /// `part of '<library>';`
    PartOf(String),
    Class(ClassDecl),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClassDecl {
    /// Class modifier such as `base`
    pub modifier: Option<String>,
    pub name: String,
    pub extends: Option<String>,
    pub members: Vec<Member>,
}

impl ClassDecl {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            modifier: None,
            name: name.into(),
            extends: None,
            members: Vec::new(),
        }
    }

    pub fn with_modifier(mut self, modifier: impl Into<String>) -> Self {
        self.modifier = Some(modifier.into());
        self
    }

    pub fn extends(mut self, superclass: impl Into<String>) -> Self {
        self.extends = Some(superclass.into());
        self
    }

    pub fn member(mut self, member: Member) -> Self {
        self.members.push(member);
        self
    }

    pub fn members(mut self, members: impl IntoIterator<Item = Member>) -> Self {
        self.members.extend(members);
        self
    }
}

/// Function body, either `=> expr;` or a braced statement list
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    Arrow(String),
    Block(Vec<String>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Member {
    /// `// text`
    Comment(String),
    /// `<modifiers> <ty> <name> = <init>;`
    Field {
        modifiers: Option<String>,
        ty: Option<String>,
        name: String,
        init: Option<String>,
    },
    /// Generative constructor, `name` is qualified (`Counter._internal`)
    Constructor { name: String, body: Body },
    /// `factory <name>() ...`
    Factory { name: String, body: Body },
    /// `<ty> get <name> ...`
    Getter { ty: String, name: String, body: Body },
    /// `set <name>(<ty> <param>) ...`
    Setter {
        name: String,
        ty: String,
        param: String,
        body: Body,
    },
    /// `<modifiers> <return_ty> <name>(<params>) ...`
    Method {
        modifiers: Option<String>,
        return_ty: String,
        name: String,
        params: String,
        body: Body,
    },
}

impl Member {
    /// Short arrow members that print without surrounding blank lines
    pub fn is_compact(&self) -> bool {
        match self {
            Member::Field { .. } | Member::Comment(_) => true,
            Member::Getter { body, .. } | Member::Setter { body, .. } => {
                matches!(body, Body::Arrow(_))
            }
            _ => false,
        }
    }
}
