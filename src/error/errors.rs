use std::error::Error;
use std::fmt::{Debug, Display, Formatter};
use std::io;

/*
    Carries a message for failures from collaborators that don't share the io::Error type (audio, logging)
 */
pub struct GenericError {
    message: String
}

impl Debug for GenericError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Display for GenericError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for GenericError {

}

impl GenericError {
    /*
        Prefixes the underlying error with what we were trying to do
     */
    pub fn wrap<E: Display>(context: &str, error: E) -> GenericError {
        GenericError { message: format!("{}: {}", context, error) }
    }
}

impl From<GenericError> for io::Error {
    fn from(error: GenericError) -> Self {
        io::Error::new(io::ErrorKind::Other, error.message)
    }
}
