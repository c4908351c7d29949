use skilltrack_core::{
    average_level, categories_of, demo_seed, filter_certificates, filter_skills,
    skills_by_category, sort_certificates, sort_skills, Certificate, CertificateSortKey,
    DomainStore, ListFilter, NotificationLog, Skill, SkillDraft, SkillSortKey,
};

fn skill(id: &str, name: &str, level: i32, category: &str) -> Skill {
    SkillDraft::new(name, level, category).into_skill(id.to_string())
}

#[test]
fn empty_filter_returns_input_unchanged() {
    let skills = demo_seed().skills;
    let filtered = filter_skills(&skills, &ListFilter::new("", "all"));
    assert_eq!(filtered, skills);

    let certificates = demo_seed().certificates;
    assert_eq!(
        filter_certificates(&certificates, &ListFilter::default()),
        certificates
    );
}

#[test]
fn level_sort_is_non_increasing_and_stable() {
    let skills = vec![
        skill("a", "A", 60, "X"),
        skill("b", "B", 90, "X"),
        skill("c", "C", 60, "Y"),
        skill("d", "D", 10, "Y"),
        skill("e", "E", 90, "Z"),
    ];

    let sorted = sort_skills(&skills, SkillSortKey::Level);
    assert!(sorted.windows(2).all(|pair| pair[0].level >= pair[1].level));

    let ids: Vec<&str> = sorted.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["b", "e", "a", "c", "d"]);
}

#[test]
fn sort_does_not_touch_input() {
    let skills = demo_seed().skills;
    let snapshot = skills.clone();
    let _ = sort_skills(&skills, SkillSortKey::Name);
    assert_eq!(skills, snapshot);
}

#[test]
fn certificate_date_sort_is_newest_first() {
    let certificates = demo_seed().certificates;
    let sorted = sort_certificates(&certificates, CertificateSortKey::Date);
    let ids: Vec<&str> = sorted.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2"]);

    let by_issuer = sort_certificates(&certificates, CertificateSortKey::Issuer);
    assert_eq!(by_issuer[0].issuer, "Amazon Web Services");
}

#[test]
fn categories_of_empty_is_only_sentinel() {
    let none: Vec<Skill> = Vec::new();
    assert_eq!(categories_of(&none), vec!["all".to_string()]);

    let no_certs: Vec<Certificate> = Vec::new();
    assert_eq!(categories_of(&no_certs), vec!["all".to_string()]);
}

#[test]
fn seed_categories_and_distribution() {
    let skills = demo_seed().skills;
    assert_eq!(
        categories_of(&skills),
        vec!["all", "Programming", "Frontend", "Backend", "Design"]
    );

    let counts: Vec<(String, usize)> = skills_by_category(&skills)
        .into_iter()
        .map(|entry| (entry.name, entry.count))
        .collect();
    assert_eq!(
        counts,
        vec![
            ("Programming".to_string(), 2),
            ("Frontend".to_string(), 1),
            ("Backend".to_string(), 1),
            ("Design".to_string(), 1),
        ]
    );
}

#[test]
fn average_level_examples() {
    let skills = vec![
        skill("1", "A", 80, "X"),
        skill("2", "B", 60, "X"),
        skill("3", "C", 40, "X"),
    ];
    assert_eq!(average_level(&skills), 60);
    assert_eq!(average_level(&[]), 0);
}

#[test]
fn dashboard_reflects_store_state() {
    let mut store = DomainStore::new(demo_seed(), NotificationLog::new());
    let summary = store.dashboard();
    assert_eq!(summary.total_skills, 5);
    assert_eq!(summary.total_certificates, 2);
    assert_eq!(summary.average_level, 75);
    assert_eq!(summary.latest_certificates.len(), 2);

    store.add_skill(SkillDraft::new("COBOL", 5, "Legacy"));
    assert_eq!(store.dashboard().average_level, 63);
}
