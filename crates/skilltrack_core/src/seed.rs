//! Mock data every session starts from.

use crate::model::certificate::Certificate;
use crate::model::profile::{SocialLinks, UserProfile};
use crate::model::skill::Skill;
use chrono::NaiveDate;

/// Initial collections for a new store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSeed {
    pub skills: Vec<Skill>,
    pub certificates: Vec<Certificate>,
    pub profile: UserProfile,
}

impl SessionSeed {
    /// Empty collections with the given profile.
    pub fn empty(profile: UserProfile) -> Self {
        Self {
            skills: Vec::new(),
            certificates: Vec::new(),
            profile,
        }
    }
}

impl Default for SessionSeed {
    fn default() -> Self {
        demo_seed()
    }
}

/// Demo session: five skills, two certificates and a filled-in profile.
pub fn demo_seed() -> SessionSeed {
    SessionSeed {
        skills: vec![
            seed_skill("1", "JavaScript", 85, "Programming"),
            seed_skill("2", "React", 80, "Frontend"),
            seed_skill("3", "Node.js", 75, "Backend"),
            seed_skill("4", "Python", 70, "Programming"),
            seed_skill("5", "UI/UX Design", 65, "Design"),
        ],
        certificates: vec![
            Certificate {
                id: "1".to_string(),
                title: "React Developer".to_string(),
                issuer: "Meta".to_string(),
                date: ymd(2023, 6, 15),
                expiry_date: None,
                credential_id: Some("CERT-12345".to_string()),
                credential_url: Some("https://example.com/cert/12345".to_string()),
                category: "Frontend".to_string(),
                skills: labels(&["React", "JavaScript", "Redux"]),
                image_url: Some("/placeholder.svg".to_string()),
            },
            Certificate {
                id: "2".to_string(),
                title: "AWS Certified Solutions Architect".to_string(),
                issuer: "Amazon Web Services".to_string(),
                date: ymd(2023, 3, 10),
                expiry_date: Some(ymd(2026, 3, 10)),
                credential_id: Some("AWS-SA-12345".to_string()),
                credential_url: Some("https://example.com/aws/12345".to_string()),
                category: "Cloud".to_string(),
                skills: labels(&["AWS", "Cloud Architecture", "Infrastructure"]),
                image_url: Some("/placeholder.svg".to_string()),
            },
        ],
        profile: UserProfile {
            id: "1".to_string(),
            name: "John Doe".to_string(),
            email: "john.doe@example.com".to_string(),
            title: Some("Full Stack Developer".to_string()),
            bio: Some(
                "Passionate developer with experience in React, Node.js, and cloud technologies."
                    .to_string(),
            ),
            location: Some("San Francisco, CA".to_string()),
            avatar_url: Some("/placeholder.svg".to_string()),
            social_links: Some(SocialLinks {
                linkedin: Some("https://linkedin.com/in/johndoe".to_string()),
                github: Some("https://github.com/johndoe".to_string()),
                twitter: Some("https://twitter.com/johndoe".to_string()),
                website: Some("https://johndoe.com".to_string()),
            }),
        },
    }
}

fn seed_skill(id: &str, name: &str, level: i32, category: &str) -> Skill {
    Skill {
        id: id.to_string(),
        name: name.to_string(),
        level,
        category: category.to_string(),
    }
}

fn labels(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| (*name).to_string()).collect()
}

// Seed dates are valid literals; the fallback is never reached.
fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}
