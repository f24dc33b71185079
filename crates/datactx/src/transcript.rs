use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Content shown while an assistant reply is in flight.
pub const PENDING_PLACEHOLDER: &str = "Thinking...";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, Serialize)]
pub struct Turn {
    pub id: Uuid,
    pub role: Role,
    pub content: String,
    /// Provisional placeholder awaiting in-place replacement.
    pub pending: bool,
}

/// Append-only conversation transcript, except that a pending assistant
/// turn is replaced in place by its id once the reply resolves. Turns are
/// never matched by content.
#[derive(Debug, Default)]
pub struct Transcript {
    turns: Vec<Turn>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_user(&mut self, content: impl Into<String>) -> Uuid {
        self.push(Role::User, content.into(), false)
    }

    /// Append the provisional assistant turn and return its id for later
    /// resolution.
    pub fn push_pending(&mut self) -> Uuid {
        self.push(Role::Assistant, PENDING_PLACEHOLDER.to_string(), true)
    }

    /// Replace the pending turn with its resolved content. Returns false
    /// when the id is unknown or the turn already resolved.
    pub fn resolve(&mut self, id: Uuid, content: impl Into<String>) -> bool {
        match self.turns.iter_mut().find(|t| t.id == id && t.pending) {
            Some(turn) => {
                turn.content = content.into();
                turn.pending = false;
                true
            }
            None => false,
        }
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    fn push(&mut self, role: Role, content: String, pending: bool) -> Uuid {
        let id = Uuid::new_v4();
        self.turns.push(Turn {
            id,
            role,
            content,
            pending,
        });
        id
    }
}
