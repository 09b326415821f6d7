/// Marker trait for intents.
///
/// Intents carry everything a reducer needs: user actions (refresh,
/// simulate an error, dismiss it) and deferred events (banner expiry).
pub trait Intent: Send + 'static {}
