//! Progression notifications.
//!
//! The engine reports level-ups and XP gains to a [`ProgressionListener`].
//! Formatting and delivery (chat lines, sounds, titles) belong to the
//! listener; the core only describes what happened.

use std::sync::Mutex;

use crate::entity::EntityId;
use crate::skills::SkillType;

/// Something the presentation layer may want to announce.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ProgressionEvent {
    /// A discipline crossed one or more level thresholds.
    LevelUp {
        entity: EntityId,
        skill: SkillType,
        old_level: u32,
        new_level: u32,
    },

    /// XP was applied. Emitted after any [`ProgressionEvent::LevelUp`] for the
    /// same call.
    XpGain {
        entity: EntityId,
        skill: SkillType,
        amount: f64,
        total_xp: f64,
        level: u32,
        /// Percent toward the next level, `0..=100`.
        progress: f64,
    },
}

impl ProgressionEvent {
    pub fn entity(&self) -> EntityId {
        match self {
            Self::LevelUp { entity, .. } | Self::XpGain { entity, .. } => *entity,
        }
    }

    pub fn skill(&self) -> SkillType {
        match self {
            Self::LevelUp { skill, .. } | Self::XpGain { skill, .. } => *skill,
        }
    }

    pub fn is_level_up(&self) -> bool {
        matches!(self, Self::LevelUp { .. })
    }
}

/// Receiver of progression notifications.
///
/// Called synchronously from the XP path; implementations must not block.
pub trait ProgressionListener: Send + Sync {
    fn on_event(&self, event: &ProgressionEvent);
}

/// Listener that drops every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullListener;

impl ProgressionListener for NullListener {
    fn on_event(&self, _event: &ProgressionEvent) {}
}

/// Listener that logs events through `tracing`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingListener;

impl ProgressionListener for TracingListener {
    fn on_event(&self, event: &ProgressionEvent) {
        match event {
            ProgressionEvent::LevelUp {
                entity,
                skill,
                old_level,
                new_level,
            } => tracing::info!("{} {} level up: {} -> {}", entity, skill, old_level, new_level),
            ProgressionEvent::XpGain {
                entity,
                skill,
                amount,
                total_xp,
                progress,
                ..
            } => tracing::debug!(
                "{} +{} {} XP (total {}, {:.1}%)",
                entity,
                amount,
                skill,
                total_xp,
                progress
            ),
        }
    }
}

/// Listener that keeps every event in memory.
#[derive(Debug, Default)]
pub struct RecordingListener {
    events: Mutex<Vec<ProgressionEvent>>,
}

impl RecordingListener {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the recorded events in arrival order.
    pub fn events(&self) -> Vec<ProgressionEvent> {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Removes and returns the recorded events.
    pub fn drain(&self) -> Vec<ProgressionEvent> {
        std::mem::take(
            &mut *self
                .events
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner()),
        )
    }
}

impl ProgressionListener for RecordingListener {
    fn on_event(&self, event: &ProgressionEvent) {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(event.clone());
    }
}
