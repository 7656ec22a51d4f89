pub type Result<T> = std::result::Result<T, Error>;

/// One variant per pipeline stage; every variant is fatal for the run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("discovery error: {0}")]
    Discovery(String),

    #[error("context creation error: {0}")]
    ContextCreation(String),

    #[error("kernel source error: {0}")]
    FileAccess(String),

    #[error("compilation error: {0}")]
    Compilation(String),

    #[error("kernel not found: {0}")]
    KernelNotFound(String),

    #[error("buffer creation error: {0}")]
    BufferCreation(String),

    #[error("argument binding error: {0}")]
    ArgumentBinding(String),

    #[error("queue creation error: {0}")]
    QueueCreation(String),

    #[error("dispatch error: {0}")]
    Dispatch(String),

    #[error("readback error: {0}")]
    Readback(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn discovery<S: Into<String>>(msg: S) -> Self {
        Error::Discovery(msg.into())
    }

    pub fn context_creation<S: Into<String>>(msg: S) -> Self {
        Error::ContextCreation(msg.into())
    }

    pub fn file_access<S: Into<String>>(msg: S) -> Self {
        Error::FileAccess(msg.into())
    }

    pub fn compilation<S: Into<String>>(msg: S) -> Self {
        Error::Compilation(msg.into())
    }

    pub fn kernel_not_found<S: Into<String>>(msg: S) -> Self {
        Error::KernelNotFound(msg.into())
    }

    pub fn buffer_creation<S: Into<String>>(msg: S) -> Self {
        Error::BufferCreation(msg.into())
    }

    pub fn argument_binding<S: Into<String>>(msg: S) -> Self {
        Error::ArgumentBinding(msg.into())
    }

    pub fn queue_creation<S: Into<String>>(msg: S) -> Self {
        Error::QueueCreation(msg.into())
    }

    pub fn dispatch<S: Into<String>>(msg: S) -> Self {
        Error::Dispatch(msg.into())
    }

    pub fn readback<S: Into<String>>(msg: S) -> Self {
        Error::Readback(msg.into())
    }

    pub fn config<S: Into<String>>(msg: S) -> Self {
        Error::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_failing_stage() {
        assert_eq!(
            Error::discovery("no platforms").to_string(),
            "discovery error: no platforms"
        );
        assert_eq!(
            Error::compilation("build log").to_string(),
            "compilation error: build log"
        );
        assert_eq!(
            Error::readback("device X").to_string(),
            "readback error: device X"
        );
    }

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
