use inv_map::MapError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("cannot simulate an invasion of an empty map")]
    EmptyMap,

    #[error("invalid map: {0}")]
    Map(#[from] MapError),
}

pub type SimResult<T> = Result<T, SimError>;
