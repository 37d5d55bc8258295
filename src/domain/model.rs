use std::fmt;

/// Immutable user record. Fields are private so a built value never changes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct User {
    name: String,
    age: i32,
}

impl User {
    pub fn new(name: impl Into<String>, age: i32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> i32 {
        self.age
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "User: {}, Age: {}", self.name, self.age)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_line() {
        let user = User::new("Hayannoon", 29);
        assert_eq!(user.to_string(), "User: Hayannoon, Age: 29");
        assert_eq!(user.name(), "Hayannoon");
        assert_eq!(user.age(), 29);
    }

    #[test]
    fn test_structural_equality() {
        assert_eq!(User::new("Hayannoon", 29), User::new(String::from("Hayannoon"), 29));
        assert_ne!(User::new("Hayannoon", 29), User::new("Hayannoon", 30));
    }

    #[test]
    fn test_age_is_unconstrained() {
        assert_eq!(User::new("", -1).to_string(), "User: , Age: -1");
        assert_eq!(
            User::new("max", i32::MAX).to_string(),
            format!("User: max, Age: {}", i32::MAX)
        );
    }
}
