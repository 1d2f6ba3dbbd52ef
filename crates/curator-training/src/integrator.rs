//! TrainingSetIntegrator: moves a reviewed object into its class's
//! training annotation.
//!
//! The annotation store is the only state. Every commit reloads the
//! managed annotations, so annotations left by earlier sessions are found
//! and reused rather than duplicated.

use std::sync::Arc;

use curator_core::annotation::{AnnotationId, TrainingMember};
use curator_core::commit_span;
use curator_core::config::{DuplicateCriterion, PopulationConfig, TrainingConfig};
use curator_core::errors::TrainingError;
use curator_core::events::{AnnotationsChanged, ListenerId};
use curator_core::traits::AnnotationStore;
use curator_core::tracing::events;
use curator_core::{ClassLabel, DomainObject};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::duplicates;

/// What a commit changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommitOutcome {
    /// Annotation now holding the object.
    pub annotation_id: AnnotationId,
    /// False when the object was already a member (idempotent re-commit).
    pub inserted: bool,
    /// Number of other-class annotations the object was removed from.
    pub removed_from: usize,
    /// Whether the target annotation was created by this commit.
    pub created: bool,
}

/// Commits reviewer decisions into the annotation store.
pub struct TrainingSetIntegrator {
    store: Arc<dyn AnnotationStore>,
    annotation_name: String,
    background_class: String,
    criterion: DuplicateCriterion,
    origin: Option<ListenerId>,
}

impl TrainingSetIntegrator {
    pub fn new(
        store: Arc<dyn AnnotationStore>,
        training: &TrainingConfig,
        population: &PopulationConfig,
    ) -> Self {
        Self {
            store,
            annotation_name: training.annotation_name.clone(),
            background_class: population.background_class.clone(),
            criterion: training.duplicate_criterion,
            origin: None,
        }
    }

    /// Listener registration of the caller. Change notifications from this
    /// integrator skip it, so a commit cannot re-trigger its own caller.
    pub fn with_origin(mut self, origin: ListenerId) -> Self {
        self.origin = Some(origin);
        self
    }

    pub fn set_origin(&mut self, origin: Option<ListenerId>) {
        self.origin = origin;
    }

    pub fn annotation_name(&self) -> &str {
        &self.annotation_name
    }

    /// Place `object` under the training annotation for `class`.
    ///
    /// Inserts it into the target first (unless already present), then
    /// removes it from every other-class annotation. A store failure part
    /// way through never leaves the object in no annotation, and whatever
    /// was already written is still announced before the error returns.
    /// Rejects a missing or background class without touching the store.
    pub fn commit(
        &self,
        object: &DomainObject,
        class: Option<&ClassLabel>,
    ) -> Result<CommitOutcome, TrainingError> {
        let _span = commit_span!(object.id).entered();

        let class = class
            .filter(|c| !c.is_background(&self.background_class))
            .ok_or_else(|| TrainingError::InvalidLabel {
                object_id: object.id.to_string(),
            })?;

        let mut touched: Vec<AnnotationId> = Vec::new();
        let result = self.apply(object, class, &mut touched);

        if !touched.is_empty() {
            self.store
                .notify_changed(&AnnotationsChanged::new(touched), self.origin);
        }

        let outcome = match result {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!(object_id = %object.id, class = %class, error = %e, "commit interrupted");
                return Err(e);
            }
        };
        events::review_committed(
            object.id.as_str(),
            class.as_str(),
            outcome.inserted,
            outcome.removed_from,
        );
        Ok(outcome)
    }

    /// Store writes of one commit. Every annotation written is pushed to
    /// `touched` as soon as the store accepts it.
    fn apply(
        &self,
        object: &DomainObject,
        class: &ClassLabel,
        touched: &mut Vec<AnnotationId>,
    ) -> Result<CommitOutcome, TrainingError> {
        let (mut same_class, others): (Vec<_>, Vec<_>) = self
            .store
            .training_annotations(&self.annotation_name)?
            .into_iter()
            .partition(|a| &a.class == class);

        let (mut target, created) = if same_class.is_empty() {
            let created = self
                .store
                .create_training_annotation(&self.annotation_name, class)?;
            info!(class = %class, annotation_id = %created.id, "created training annotation");
            touched.push(created.id.clone());
            (created, true)
        } else {
            (same_class.swap_remove(0), false)
        };

        let already_member =
            duplicates::find_member(&target, object, self.criterion).is_some();
        let inserted = !already_member && target.insert(TrainingMember::of(object));
        if inserted {
            self.store.update_training_annotation(&target)?;
            if !created {
                touched.push(target.id.clone());
            }
        }

        let mut removed_from = 0;
        for mut annotation in others {
            let removed = duplicates::remove_matches(&mut annotation, object, self.criterion);
            if removed > 0 {
                debug!(
                    object_id = %object.id,
                    from_class = %annotation.class,
                    remaining = annotation.len(),
                    "removed duplicate from other class"
                );
                self.store.update_training_annotation(&annotation)?;
                touched.push(annotation.id.clone());
                removed_from += 1;
            }
        }

        Ok(CommitOutcome {
            annotation_id: target.id,
            inserted,
            removed_from,
            created,
        })
    }
}
