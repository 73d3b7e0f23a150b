//! Pipeline phases (fixed total order).

/// The six lifecycle extension points, in the order every request visits
/// them. A request may skip phases (route miss skips the auth and handler
/// phases; a failing hook or handler jumps straight to `OnPreResponse`), but
/// it never visits them out of this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    OnRequest,
    OnPreAuth,
    OnPostAuth,
    OnPreHandler,
    OnPostHandler,
    OnPreResponse,
}

impl Phase {
    /// Canonical traversal order.
    pub const ORDER: [Phase; 6] = [
        Phase::OnRequest,
        Phase::OnPreAuth,
        Phase::OnPostAuth,
        Phase::OnPreHandler,
        Phase::OnPostHandler,
        Phase::OnPreResponse,
    ];

    /// Name used in logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Phase::OnRequest => "onRequest",
            Phase::OnPreAuth => "onPreAuth",
            Phase::OnPostAuth => "onPostAuth",
            Phase::OnPreHandler => "onPreHandler",
            Phase::OnPostHandler => "onPostHandler",
            Phase::OnPreResponse => "onPreResponse",
        }
    }
}
