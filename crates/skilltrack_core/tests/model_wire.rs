use chrono::NaiveDate;
use skilltrack_core::{demo_seed, Certificate, SkillDraft, UserProfile};

#[test]
fn certificate_serializes_with_camel_case_and_iso_dates() {
    let aws = demo_seed().certificates[1].clone();
    let json = serde_json::to_value(&aws).unwrap();

    assert_eq!(json["date"], "2023-03-10");
    assert_eq!(json["expiryDate"], "2026-03-10");
    assert_eq!(json["credentialId"], "AWS-SA-12345");
    assert_eq!(json["skills"][0], "AWS");

    let decoded: Certificate = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, aws);
}

#[test]
fn certificate_without_optional_fields_decodes() {
    let value = serde_json::json!({
        "id": "7",
        "title": "Scrum Master",
        "issuer": "Scrum Alliance",
        "date": "2022-11-30",
        "category": "Agile"
    });

    let cert: Certificate = serde_json::from_value(value).unwrap();
    assert_eq!(cert.date, NaiveDate::from_ymd_opt(2022, 11, 30).unwrap());
    assert_eq!(cert.expiry_date, None);
    assert!(cert.skills.is_empty());
}

#[test]
fn profile_omits_absent_optionals() {
    let mut profile = demo_seed().profile;
    profile.bio = None;
    profile.social_links = None;

    let json = serde_json::to_value(&profile).unwrap();
    assert!(json.get("bio").is_none());
    assert!(json.get("socialLinks").is_none());
    assert_eq!(json["avatarUrl"], "/placeholder.svg");

    let decoded: UserProfile = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, profile);
}

#[test]
fn skill_draft_decodes_from_form_payload() {
    let draft: SkillDraft =
        serde_json::from_str(r#"{"name":"Rust","level":42,"category":"Systems"}"#).unwrap();
    assert_eq!(draft, SkillDraft::new("Rust", 42, "Systems"));
}
