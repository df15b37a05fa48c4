//! Webhook delivery for built messages.
//!
//! Delivery is a single attempt. Only transport failures are reported as
//! errors; the HTTP status of the response is logged and otherwise ignored,
//! so a rejected payload still counts as delivered.

mod slack;
mod traits;

pub use slack::SlackNotifier;
pub use traits::Notifier;

#[cfg(test)]
mod tests;
