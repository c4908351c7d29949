//! Session user profile and its patch shape.
//!
//! # Invariants
//! - Exactly one profile exists per session; it is never deleted.
//! - `id` is not patchable.
//! - `social_links` is replaced as a whole; patches never merge inside it.

use serde::{Deserialize, Deserializer, Serialize};

/// The single user's identity and display metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social_links: Option<SocialLinks>,
}

/// Optional external profile URLs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

impl SocialLinks {
    /// Returns whether at least one non-blank link is set.
    pub fn any(&self) -> bool {
        [&self.linkedin, &self.github, &self.twitter, &self.website]
            .into_iter()
            .flatten()
            .any(|link| !link.trim().is_empty())
    }
}

/// Partial profile update.
///
/// `None` leaves a field untouched. For optional profile fields the inner
/// option distinguishes "set to value" (`Some(Some(v))`) from "clear"
/// (`Some(None)`).
///
/// On the wire an absent key leaves the field untouched and `null` clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProfilePatch {
    pub name: Option<String>,
    pub email: Option<String>,
    #[serde(deserialize_with = "present")]
    pub title: Option<Option<String>>,
    #[serde(deserialize_with = "present")]
    pub bio: Option<Option<String>>,
    #[serde(deserialize_with = "present")]
    pub location: Option<Option<String>>,
    #[serde(deserialize_with = "present")]
    pub avatar_url: Option<Option<String>>,
    #[serde(deserialize_with = "present")]
    pub social_links: Option<Option<SocialLinks>>,
}

// Only runs for keys present in the input, so `null` becomes `Some(None)`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl ProfilePatch {
    pub fn name(mut self, value: impl Into<String>) -> Self {
        self.name = Some(value.into());
        self
    }

    pub fn email(mut self, value: impl Into<String>) -> Self {
        self.email = Some(value.into());
        self
    }

    pub fn title(mut self, value: Option<String>) -> Self {
        self.title = Some(value);
        self
    }

    pub fn bio(mut self, value: Option<String>) -> Self {
        self.bio = Some(value);
        self
    }

    pub fn location(mut self, value: Option<String>) -> Self {
        self.location = Some(value);
        self
    }

    pub fn avatar_url(mut self, value: Option<String>) -> Self {
        self.avatar_url = Some(value);
        self
    }

    /// Replaces the whole social links object.
    pub fn social_links(mut self, value: Option<SocialLinks>) -> Self {
        self.social_links = Some(value);
        self
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

impl UserProfile {
    /// Shallow-merges `patch` into this profile.
    pub fn apply(&mut self, patch: ProfilePatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(bio) = patch.bio {
            self.bio = bio;
        }
        if let Some(location) = patch.location {
            self.location = location;
        }
        if let Some(avatar_url) = patch.avatar_url {
            self.avatar_url = avatar_url;
        }
        if let Some(social_links) = patch.social_links {
            self.social_links = social_links;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ProfilePatch, SocialLinks, UserProfile};

    fn profile() -> UserProfile {
        UserProfile {
            id: "1".to_string(),
            name: "Sam".to_string(),
            email: "sam@example.com".to_string(),
            title: Some("Engineer".to_string()),
            bio: None,
            location: Some("Berlin".to_string()),
            avatar_url: None,
            social_links: Some(SocialLinks {
                github: Some("https://github.com/sam".to_string()),
                website: Some("https://sam.dev".to_string()),
                ..SocialLinks::default()
            }),
        }
    }

    #[test]
    fn social_links_are_replaced_not_merged() {
        let mut profile = profile();
        profile.apply(ProfilePatch::default().social_links(Some(SocialLinks {
            linkedin: Some("https://linkedin.com/in/sam".to_string()),
            ..SocialLinks::default()
        })));

        let links = profile.social_links.unwrap();
        assert_eq!(links.linkedin.as_deref(), Some("https://linkedin.com/in/sam"));
        assert_eq!(links.github, None);
        assert_eq!(links.website, None);
    }

    #[test]
    fn optional_field_can_be_cleared() {
        let mut profile = profile();
        profile.apply(ProfilePatch::default().location(None));
        assert_eq!(profile.location, None);
        assert_eq!(profile.title.as_deref(), Some("Engineer"));
    }

    #[test]
    fn wire_patch_distinguishes_absent_from_null() {
        let patch: ProfilePatch = serde_json::from_str(
            r#"{"name":"Sam Lee","bio":null,"avatarUrl":"https://img.test/sam.png","socialLinks":{"github":"https://github.com/samlee"}}"#,
        )
        .unwrap();

        assert_eq!(patch.name.as_deref(), Some("Sam Lee"));
        assert_eq!(patch.email, None);
        assert_eq!(patch.title, None);
        assert_eq!(patch.bio, Some(None));
        assert_eq!(
            patch.avatar_url,
            Some(Some("https://img.test/sam.png".to_string()))
        );

        let mut profile = profile();
        profile.apply(patch);
        assert_eq!(profile.name, "Sam Lee");
        assert_eq!(profile.email, "sam@example.com");
        assert_eq!(profile.title.as_deref(), Some("Engineer"));
        assert_eq!(profile.bio, None);
        let links = profile.social_links.unwrap();
        assert_eq!(links.github.as_deref(), Some("https://github.com/samlee"));
        assert_eq!(links.website, None);
    }

    #[test]
    fn empty_wire_patch_is_empty() {
        let patch: ProfilePatch = serde_json::from_str("{}").unwrap();
        assert!(patch.is_empty());
        let cleared: ProfilePatch = serde_json::from_str(r#"{"socialLinks":null}"#).unwrap();
        assert_eq!(cleared.social_links, Some(None));
    }

    #[test]
    fn any_ignores_blank_links() {
        let links = SocialLinks {
            twitter: Some("  ".to_string()),
            ..SocialLinks::default()
        };
        assert!(!links.any());
        assert!(!SocialLinks::default().any());
    }
}
