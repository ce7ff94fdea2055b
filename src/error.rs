pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Errors surfaced at the input boundary, before the solver core runs.
///
/// An unsolvable puzzle is not an error: the engine reports it as an
/// explicit `None` result instead.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("puzzle must contain exactly 81 symbols, found {0}")]
    BadLength(usize),

    #[error("cell {cell}: expected a digit 0-9, found {found:?}")]
    BadSymbol { cell: String, found: char },

    #[error("failed to access {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
