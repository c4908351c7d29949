//! Session domain store.
//!
//! # Responsibility
//! - Own the skill, certificate and profile state of one user session.
//! - Assign identifiers, apply CRUD and emit change notifications.
//! - Keep the expiry watcher in step with the certificate collection.
//!
//! # Invariants
//! - Generated ids are unused within their collection at assignment time.
//! - Update/delete of an unknown id is a silent no-op: no error, no
//!   notification, collection untouched.
//! - Every certificate mutation that hits a record marks the expiry watcher
//!   dirty and recomputes it before returning.
//! - Logs carry ids and counts only, never names or contact data.

use crate::clock::{Clock, ClockResult, SystemClock};
use crate::config::{ConfigError, StoreConfig};
use crate::model::certificate::{Certificate, CertificateDraft};
use crate::model::id::{IdGenerator, RecordId, UuidIdGenerator};
use crate::model::profile::{ProfilePatch, UserProfile};
use crate::model::skill::{clamp_level, Skill, SkillDraft};
use crate::notify::{Notification, NotificationKind, NotificationLog, NotificationSink};
use crate::query::stats::{dashboard_summary, DashboardSummary};
use crate::repo::collection::{Record, RecordCollection};
use crate::seed::SessionSeed;
use crate::watch::expiry::{ExpiringCertificate, ExpiryWatcher, WatchState};
use log::{debug, info, warn};

/// Single in-memory source of truth for one session.
///
/// Instantiate once per session and hand the handle to each consumer.
pub struct DomainStore<N: NotificationSink = NotificationLog> {
    skills: RecordCollection<Skill>,
    certificates: RecordCollection<Certificate>,
    profile: UserProfile,
    config: StoreConfig,
    ids: Box<dyn IdGenerator>,
    clock: Box<dyn Clock>,
    notifier: N,
    expiry: ExpiryWatcher,
}

impl<N: NotificationSink> DomainStore<N> {
    /// Creates a store from `seed` with default config, UUID ids and the
    /// system clock.
    ///
    /// The expiry watcher is evaluated once without notifying.
    pub fn new(seed: SessionSeed, notifier: N) -> Self {
        let config = StoreConfig::default();
        let mut store = Self {
            skills: RecordCollection::from_records(seed.skills),
            certificates: RecordCollection::from_records(seed.certificates),
            profile: seed.profile,
            config,
            ids: Box::new(UuidIdGenerator),
            clock: Box::new(SystemClock),
            notifier,
            expiry: ExpiryWatcher::new(config.expiry_window_days),
        };
        let _ = store.recompute_expiry(false);
        info!(
            "event=store_init module=store status=ok skills={} certificates={}",
            store.skills.len(),
            store.certificates.len()
        );
        store
    }

    /// Replaces the configuration and re-evaluates expiry with the new window.
    ///
    /// On clock failure the previous expiring set stays readable.
    ///
    /// # Errors
    /// - Returns `ConfigError::InvalidWindow` for an out-of-range window.
    pub fn with_config(mut self, config: StoreConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        self.config = config;
        self.expiry.set_window_days(config.expiry_window_days);
        let _ = self.recompute_expiry(false);
        Ok(self)
    }

    /// Replaces the time source and re-evaluates expiry.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self.expiry.mark_dirty();
        let _ = self.recompute_expiry(false);
        self
    }

    pub fn with_id_generator(mut self, ids: impl IdGenerator + 'static) -> Self {
        self.ids = Box::new(ids);
        self
    }

    pub fn skills(&self) -> &[Skill] {
        self.skills.as_slice()
    }

    pub fn certificates(&self) -> &[Certificate] {
        self.certificates.as_slice()
    }

    pub fn user_profile(&self) -> &UserProfile {
        &self.profile
    }

    pub fn skill(&self, id: &str) -> Option<&Skill> {
        self.skills.get(id)
    }

    pub fn certificate(&self, id: &str) -> Option<&Certificate> {
        self.certificates.get(id)
    }

    /// Certificates expiring within the configured window, as of the last
    /// recompute.
    pub fn expiring_soon(&self) -> &[ExpiringCertificate] {
        self.expiry.expiring()
    }

    pub fn expiry_state(&self) -> WatchState {
        self.expiry.state()
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }

    /// Dashboard headline over the current snapshots.
    pub fn dashboard(&self) -> DashboardSummary {
        dashboard_summary(
            self.skills(),
            self.certificates(),
            self.expiry.expiring().len(),
        )
    }

    /// Appends a new skill with a fresh id and returns it.
    pub fn add_skill(&mut self, draft: SkillDraft) -> Skill {
        let mut draft = draft;
        if self.config.clamp_levels_on_write {
            draft.level = clamp_level(draft.level);
        }
        let id = fresh_id(self.ids.as_mut(), &self.skills);
        let created = draft.into_skill(id);
        // Fresh id, so the insert cannot collide.
        let _ = self.skills.insert(created.clone());

        info!(
            "event=skill_add module=store status=ok id={} total={}",
            created.id,
            self.skills.len()
        );
        self.notifier
            .publish(Notification::success(
                NotificationKind::SkillAdded,
                "Skill added successfully",
            ));
        created
    }

    /// Replaces the stored skill with the same id.
    ///
    /// Returns `false` and changes nothing when the id is unknown.
    pub fn update_skill(&mut self, skill: Skill) -> bool {
        let mut skill = skill;
        if self.config.clamp_levels_on_write {
            skill.level = clamp_level(skill.level);
        }
        let id = skill.id.clone();
        if self.skills.replace(skill).is_none() {
            debug!("event=skill_update module=store status=not_found id={id}");
            return false;
        }

        info!("event=skill_update module=store status=ok id={id}");
        self.notifier
            .publish(Notification::success(
                NotificationKind::SkillUpdated,
                "Skill updated successfully",
            ));
        true
    }

    /// Removes the skill with `id`, returning it.
    ///
    /// Unknown ids are a no-op returning `None`.
    pub fn delete_skill(&mut self, id: &str) -> Option<Skill> {
        let Some(removed) = self.skills.remove(id) else {
            debug!("event=skill_delete module=store status=not_found id={id}");
            return None;
        };

        info!(
            "event=skill_delete module=store status=ok id={id} total={}",
            self.skills.len()
        );
        self.notifier.publish(Notification::success(
            NotificationKind::SkillDeleted,
            format!("Skill \"{}\" deleted successfully", removed.name),
        ));
        Some(removed)
    }

    /// Appends a new certificate with a fresh id and returns it.
    pub fn add_certificate(&mut self, draft: CertificateDraft) -> Certificate {
        let id = fresh_id(self.ids.as_mut(), &self.certificates);
        let created = draft.into_certificate(id);
        // Fresh id, so the insert cannot collide.
        let _ = self.certificates.insert(created.clone());

        info!(
            "event=certificate_add module=store status=ok id={} total={}",
            created.id,
            self.certificates.len()
        );
        self.notifier
            .publish(Notification::success(
                NotificationKind::CertificateAdded,
                "Certificate added successfully",
            ));
        self.on_certificates_changed();
        created
    }

    /// Replaces the stored certificate with the same id.
    ///
    /// Returns `false` and changes nothing when the id is unknown.
    pub fn update_certificate(&mut self, certificate: Certificate) -> bool {
        let id = certificate.id.clone();
        if self.certificates.replace(certificate).is_none() {
            debug!("event=certificate_update module=store status=not_found id={id}");
            return false;
        }

        info!("event=certificate_update module=store status=ok id={id}");
        self.notifier
            .publish(Notification::success(
                NotificationKind::CertificateUpdated,
                "Certificate updated successfully",
            ));
        self.on_certificates_changed();
        true
    }

    /// Removes the certificate with `id`, returning it.
    ///
    /// Unknown ids are a no-op returning `None`.
    pub fn delete_certificate(&mut self, id: &str) -> Option<Certificate> {
        let Some(removed) = self.certificates.remove(id) else {
            debug!("event=certificate_delete module=store status=not_found id={id}");
            return None;
        };

        info!(
            "event=certificate_delete module=store status=ok id={id} total={}",
            self.certificates.len()
        );
        self.notifier.publish(Notification::success(
            NotificationKind::CertificateDeleted,
            format!("Certificate \"{}\" deleted successfully", removed.title),
        ));
        self.on_certificates_changed();
        Some(removed)
    }

    /// Shallow-merges `patch` into the session profile.
    pub fn update_user_profile(&mut self, patch: ProfilePatch) {
        let replaces_social_links = patch.social_links.is_some();
        self.profile.apply(patch);

        info!(
            "event=profile_update module=store status=ok social_links_replaced={replaces_social_links}"
        );
        self.notifier
            .publish(Notification::success(
                NotificationKind::ProfileUpdated,
                "Profile updated successfully",
            ));
    }

    /// Re-evaluates the expiry watcher against the clock without notifying.
    ///
    /// Used when time passes without any certificate change.
    ///
    /// # Errors
    /// - Returns the clock error; the previous result stays readable through
    ///   [`DomainStore::expiring_soon`].
    pub fn refresh_expiry(&mut self) -> ClockResult<&[ExpiringCertificate]> {
        self.expiry.mark_dirty();
        self.recompute_expiry(false)?;
        Ok(self.expiry.expiring())
    }

    fn on_certificates_changed(&mut self) {
        self.expiry.mark_dirty();
        // Clock failures are logged inside and must not fail the mutation.
        let _ = self.recompute_expiry(true);
    }

    fn recompute_expiry(&mut self, announce: bool) -> ClockResult<usize> {
        let count = match self
            .expiry
            .recompute(self.certificates.as_slice(), self.clock.as_ref())
        {
            Ok(expiring) => expiring.len(),
            Err(err) => {
                warn!("event=expiry_recompute module=watch status=error error={err}");
                return Err(err);
            }
        };

        debug!(
            "event=expiry_recompute module=watch status=ok expiring={count} window_days={}",
            self.expiry.window_days()
        );
        if announce && count > 0 && self.config.expiry_alerts_enabled {
            self.notifier.publish(Notification::warning(
                NotificationKind::ExpiringSoon,
                expiry_message(count, self.expiry.window_days()),
            ));
        }
        Ok(count)
    }
}

fn fresh_id<T: Record>(ids: &mut dyn IdGenerator, collection: &RecordCollection<T>) -> RecordId {
    loop {
        let candidate = ids.next_id();
        if !collection.contains_id(&candidate) {
            return candidate;
        }
    }
}

fn expiry_message(count: usize, window_days: u32) -> String {
    let noun = if count == 1 {
        "certificate"
    } else {
        "certificates"
    };
    format!("{count} {noun} expiring within the next {window_days} days")
}

#[cfg(test)]
mod tests {
    use super::{expiry_message, fresh_id};
    use crate::model::id::SequentialIdGenerator;
    use crate::model::skill::SkillDraft;
    use crate::repo::collection::RecordCollection;

    #[test]
    fn fresh_id_skips_taken_ids() {
        let taken = RecordCollection::from_records([
            SkillDraft::new("A", 1, "X").into_skill("1".to_string()),
            SkillDraft::new("B", 1, "X").into_skill("2".to_string()),
        ]);
        let mut ids = SequentialIdGenerator::default();
        assert_eq!(fresh_id(&mut ids, &taken), "3");
    }

    #[test]
    fn expiry_message_pluralizes() {
        assert_eq!(
            expiry_message(1, 90),
            "1 certificate expiring within the next 90 days"
        );
        assert_eq!(
            expiry_message(2, 30),
            "2 certificates expiring within the next 30 days"
        );
    }
}
