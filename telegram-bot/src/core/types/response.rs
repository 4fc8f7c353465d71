//! Handler chain result type.

/// Handler result for the chain. `Reply(text)` carries the response body so later handlers can see
/// it in `after()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerResponse {
    /// Pass to next handler.
    Continue,
    /// Stop the chain; nothing to send.
    Stop,
    /// Stop the chain and send this text.
    Reply(String),
}
