/// Produces the correlation token of a new session.
pub trait TicketIdGenerator: Send + Sync {
    /// Returns a fresh, non-empty token, unique with overwhelming probability.
    fn next_ticket_id(&self) -> String;
}
