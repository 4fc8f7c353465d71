//! Reply chain handlers, in chain order: logging, intent gate, canned reply, pattern reply,
//! completion fallback.

mod canned_reply_handler;
mod completion_handler;
mod intent_gate_handler;
mod logging_handler;
mod pattern_reply_handler;

pub use canned_reply_handler::CannedReplyHandler;
pub use completion_handler::CompletionHandler;
pub use intent_gate_handler::IntentGateHandler;
pub use logging_handler::LoggingHandler;
pub use pattern_reply_handler::PatternReplyHandler;
