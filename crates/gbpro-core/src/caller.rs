use uuid::Uuid;

/// Identity of whoever issued a request, as resolved by the request context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Caller {
    #[default]
    Anonymous,
    Authenticated(Uuid),
}

impl Caller {
    #[must_use]
    pub fn user_id(&self) -> Option<Uuid> {
        match self {
            Caller::Anonymous => None,
            Caller::Authenticated(id) => Some(*id),
        }
    }
}
