use std::collections::HashSet;

use derive_more::Display;
use getset::{CopyGetters, Getters};
use serde::Serialize;

use crate::ensure_ok;

pub mod registry;
pub mod seed;

pub use registry::{ActivityRegistry, SignupErr, UnregisterErr};

/// 一项课外活动：说明、时间安排、人数上限以及已报名的学生邮箱
#[derive(Getters, CopyGetters, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    #[getset(get = "pub")]
    description: String,
    #[getset(get = "pub")]
    schedule: String,
    #[getset(get_copy = "pub")]
    max_participants: u32,
    #[getset(get = "pub")]
    participants: Vec<String>,
}

#[derive(Debug, Display, PartialEq, Eq)]
pub enum ActivityFormatErr {
    #[display(fmt = "max_participants must be positive")]
    ZeroCapacity,
    #[display(fmt = "duplicate participant: {}", _0)]
    DuplicateParticipant(String),
}

impl std::error::Error for ActivityFormatErr {}

impl Activity {
    pub fn try_new(
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
        participants: Vec<String>,
    ) -> Result<Self, ActivityFormatErr> {
        ensure_ok!(max_participants > 0, ActivityFormatErr::ZeroCapacity);

        let mut seen = HashSet::with_capacity(participants.len());
        if let Some(dup) = participants.iter().find(|p| !seen.insert(*p)) {
            return Err(ActivityFormatErr::DuplicateParticipant(dup.clone()));
        }

        Ok(Self {
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants,
        })
    }

    pub fn is_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    pub fn is_full(&self) -> bool {
        self.participants.len() >= self.max_participants as usize
    }

    pub fn spots_left(&self) -> usize {
        (self.max_participants as usize).saturating_sub(self.participants.len())
    }

    /// 调用方需保证 `email` 尚未报名
    pub(super) fn push_participant(&mut self, email: String) {
        debug_assert!(!self.is_participant(&email));
        self.participants.push(email);
    }

    /// 返回是否真的移除了该邮箱
    pub(super) fn remove_participant(&mut self, email: &str) -> bool {
        match self.participants.iter().position(|p| p == email) {
            Some(idx) => {
                self.participants.remove(idx);
                true
            }
            None => false,
        }
    }
}
