/// Errors raised by the external product catalog.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Transport failure or timeout talking to the catalog.
    #[error("catalog.unreachable")]
    Unreachable,
    /// The catalog answered with something that is not the expected JSON.
    #[error("catalog.invalid_response")]
    InvalidResponse,
}
