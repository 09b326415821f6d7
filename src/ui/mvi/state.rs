/// Marker trait for reducer-managed state.
///
/// `PartialEq` lets dispatchers skip notifications when nothing changed;
/// `Default` is the state before any intent.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
