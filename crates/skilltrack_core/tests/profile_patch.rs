use skilltrack_core::{
    demo_seed, has_social_links, DomainStore, NotificationLog, ProfilePatch, SocialLinks,
};

#[test]
fn name_patch_leaves_other_fields_unchanged() {
    let mut store = DomainStore::new(demo_seed(), NotificationLog::new());
    let before = store.user_profile().clone();

    store.update_user_profile(ProfilePatch::default().name("X"));

    let after = store.user_profile();
    assert_eq!(after.name, "X");
    assert_eq!(after.id, before.id);
    assert_eq!(after.email, before.email);
    assert_eq!(after.title, before.title);
    assert_eq!(after.bio, before.bio);
    assert_eq!(after.location, before.location);
    assert_eq!(after.avatar_url, before.avatar_url);
    assert_eq!(after.social_links, before.social_links);
    assert_eq!(
        store.notifier_mut().drain()[0].message,
        "Profile updated successfully"
    );
}

#[test]
fn social_links_patch_replaces_whole_object() {
    let mut store = DomainStore::new(demo_seed(), NotificationLog::new());

    store.update_user_profile(ProfilePatch::default().social_links(Some(SocialLinks {
        github: Some("https://github.com/jdoe".to_string()),
        ..SocialLinks::default()
    })));

    let links = store.user_profile().social_links.clone().unwrap();
    assert_eq!(links.github.as_deref(), Some("https://github.com/jdoe"));
    assert_eq!(links.linkedin, None);
    assert_eq!(links.website, None);
}

#[test]
fn clearing_social_links_hides_connect_section() {
    let mut store = DomainStore::new(demo_seed(), NotificationLog::new());
    assert!(has_social_links(store.user_profile()));

    store.update_user_profile(ProfilePatch::default().social_links(None));
    assert!(!has_social_links(store.user_profile()));
}

#[test]
fn empty_patch_changes_nothing() {
    let mut store = DomainStore::new(demo_seed(), NotificationLog::new());
    let before = store.user_profile().clone();
    let patch = ProfilePatch::default();
    assert!(patch.is_empty());

    store.update_user_profile(patch);
    assert_eq!(store.user_profile(), &before);
}
