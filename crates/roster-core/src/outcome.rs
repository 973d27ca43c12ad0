//! Uniform result shape for user operations

/// What a caller gets back from any user operation, whichever backend ran it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    /// Success with data
    Found(T),
    /// No record at the requested id
    NotFound,
    /// Unexpected fault while running the operation
    Failed(String),
}

impl<T> Outcome<T> {
    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(value) => Outcome::Found(value),
            None => Outcome::NotFound,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Outcome::NotFound)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Outcome::Failed(_))
    }

    pub fn found(self) -> Option<T> {
        match self {
            Outcome::Found(value) => Some(value),
            _ => None,
        }
    }
}

impl From<bool> for Outcome<()> {
    fn from(present: bool) -> Self {
        if present {
            Outcome::Found(())
        } else {
            Outcome::NotFound
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_option() {
        assert_eq!(Outcome::from_option(Some(3)), Outcome::Found(3));
        assert_eq!(Outcome::<i32>::from_option(None), Outcome::NotFound);
    }

    #[test]
    fn test_from_bool() {
        assert_eq!(Outcome::from(true), Outcome::Found(()));
        assert!(Outcome::from(false).is_not_found());
    }
}
