//! Packages given on the command line as `TAG:p1,p2,...` tokens.

use super::parse_readings;
use crate::domain::{DomainError, WorkoutPackage};
use crate::ports::PackageSource;

pub struct ArgsSource {
    tokens: Vec<String>,
}

impl ArgsSource {
    pub fn new(tokens: impl IntoIterator<Item = String>) -> Self {
        Self {
            tokens: tokens.into_iter().collect(),
        }
    }

    /// True if `token` looks like a package rather than a file path.
    pub fn is_package_token(token: &str) -> bool {
        match token.split_once(':') {
            Some((tag, rest)) => {
                !tag.is_empty()
                    && tag.chars().all(|c| c.is_ascii_alphabetic())
                    && rest.starts_with(|c: char| c.is_ascii_digit() || c == '-' || c == '.')
            }
            None => false,
        }
    }

    fn parse_token(token: &str) -> Result<WorkoutPackage, DomainError> {
        let (tag, rest) = token.split_once(':').ok_or_else(|| {
            DomainError::Source(format!("'{}' is not of the form TAG:p1,p2,...", token))
        })?;
        let params = parse_readings(rest.split(','), &format!("'{}'", token))?;
        Ok(WorkoutPackage::new(tag.trim(), params))
    }
}

impl PackageSource for ArgsSource {
    fn describe(&self) -> String {
        format!("{} command-line package(s)", self.tokens.len())
    }

    fn packages(&self) -> Result<Vec<WorkoutPackage>, DomainError> {
        self.tokens.iter().map(|t| Self::parse_token(t)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_tokens_in_order() {
        let source = ArgsSource::new(["RUN:15000,1,75".to_string(), "SWM:720,1,80,25,40".to_string()]);
        let packages = source.packages().unwrap();
        assert_eq!(packages[0], WorkoutPackage::new("RUN", [15000.0, 1.0, 75.0]));
        assert_eq!(packages[1].params.len(), 5);
    }

    #[test]
    fn test_bad_number() {
        let err = ArgsSource::new(["RUN:15000,x,75".to_string()])
            .packages()
            .unwrap_err();
        assert!(matches!(err, DomainError::Source(_)));
    }

    #[test]
    fn test_blank_reading_is_rejected() {
        let err = ArgsSource::new(["RUN:15000,,1,75".to_string()])
            .packages()
            .unwrap_err();
        assert_eq!(
            err,
            DomainError::Source("'RUN:15000,,1,75': reading 2 is blank".to_string())
        );
    }

    #[test]
    fn test_package_token_detection() {
        assert!(ArgsSource::is_package_token("WLK:9000,1,75,180"));
        assert!(!ArgsSource::is_package_token("workouts.csv"));
        assert!(!ArgsSource::is_package_token("C:\\data\\workouts.csv"));
    }
}
