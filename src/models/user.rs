use serde::{Deserialize, Serialize};

/// Identity returned by the session probe, denormalized with the business
/// the signed-in owner manages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub id: String,
    pub username: String,
    pub name: String,
    pub email: String,
    pub business: BusinessSummary,
    #[serde(default)]
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct BusinessSummary {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

impl CurrentUser {
    /// "Ada Lovelace" -> "AL", used for the avatar fallback.
    pub fn initials(&self) -> String {
        let initials: String = self
            .name
            .split_whitespace()
            .take(2)
            .filter_map(|part| part.chars().next())
            .flat_map(|c| c.to_uppercase())
            .collect();
        if initials.is_empty() {
            "U".to_string()
        } else {
            initials
        }
    }

    pub fn business_name(&self) -> &str {
        self.business.name.as_deref().unwrap_or("Your business")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(name: &str) -> CurrentUser {
        CurrentUser {
            id: "1".into(),
            username: "owner".into(),
            name: name.into(),
            email: "owner@example.com".into(),
            business: BusinessSummary::default(),
            avatar: None,
        }
    }

    #[test]
    fn initials_take_first_two_words() {
        assert_eq!(user("Ada Lovelace").initials(), "AL");
        assert_eq!(user("cher").initials(), "C");
        assert_eq!(user("").initials(), "U");
        assert_eq!(user("a b c").initials(), "AB");
    }
}
