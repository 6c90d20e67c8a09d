/// Centralized error mapping for commands.
///
/// The frontend only ever sees a message string.
pub fn map_err<E: Into<anyhow::Error>>(err: E) -> String {
    format!("{:#}", err.into())
}
