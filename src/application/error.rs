//! Application-level errors.

pub type Result<T> = std::result::Result<T, ApplicationError>;

/// Errors that can occur in the application layer.
///
/// Capability failures are not classified: they travel as
/// [`ApplicationError::Internal`] up to the controller.
#[derive(Debug, thiserror::Error)]
pub enum ApplicationError {
    #[error("blocking task failed: {0}")]
    Join(#[from] tokio::task::JoinError),

    #[error("internal server error")]
    Internal(Box<dyn std::error::Error + Send + Sync>),
}

impl ApplicationError {
    pub fn internal<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Internal(Box::new(err))
    }
}

pub trait ToInternal<T> {
    fn catch(self) -> Result<T>;
}

impl<T, E> ToInternal<T> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn catch(self) -> Result<T> {
        self.map_err(|e| ApplicationError::Internal(Box::new(e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catch_wraps_any_error() {
        let res: std::result::Result<(), std::io::Error> =
            Err(std::io::Error::other("disk on fire"));

        match res.catch() {
            Err(ApplicationError::Internal(err)) => {
                assert_eq!(err.to_string(), "disk on fire")
            },
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_display_hides_details() {
        let err = ApplicationError::internal(std::io::Error::other("secret"));
        assert_eq!(err.to_string(), "internal server error");
    }
}
