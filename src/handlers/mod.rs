/// Event handlers and the host-boundary adapter
pub mod relay;

use crate::models::Disposition;

/// Disposition surface of the host platform's inbound event
///
/// Mirrors the mutation API event-driven mail hosts expose: `accept` is the
/// implicit default, `reject` carries an SMTP reply code, `forward` hands the
/// message to the platform's own forwarding.
pub trait DispositionTarget {
    fn accept(&mut self);
    fn reject(&mut self, reason: &str, code: u16);
    fn forward(&mut self, target: &str);
}

/// Translates a relay decision into exactly one call on the host event
pub fn apply(disposition: &Disposition, event: &mut dyn DispositionTarget) {
    match disposition {
        Disposition::Accept => event.accept(),
        Disposition::Reject { reason, code } => event.reject(reason, *code),
        Disposition::Forward { target } => event.forward(target),
    }
}
