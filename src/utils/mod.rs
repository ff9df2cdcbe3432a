mod errors;

pub use errors::Error;

pub type MoviesResult<T> = Result<T, Error>;
