use std::sync::{Mutex, MutexGuard};

use anyhow::{anyhow, Context, Result};
use tracing::info;

use crate::{
    biz_ok,
    domain::activity::{
        registry::CapacityPolicy, seed, ActivityRegistry, SignupErr, UnregisterErr,
    },
    ensure_biz,
    http::BizResult,
};

/// 进程内唯一的活动注册表，由 `build_http_server` 创建并通过 `web::Data` 注入各个 handler
///
/// 每次操作只持有一次锁，且不会跨越 `.await`
#[derive(Debug)]
pub struct ActivityStore {
    registry: Mutex<ActivityRegistry>,
}

impl ActivityStore {
    pub fn new(registry: ActivityRegistry) -> Self {
        Self {
            registry: Mutex::new(registry),
        }
    }

    pub fn seeded(policy: CapacityPolicy) -> Result<Self> {
        let registry = seed::registry(policy).context("build seed registry")?;
        info!(
            activities = registry.len(),
            ?policy,
            "activity registry seeded"
        );
        Ok(Self::new(registry))
    }

    fn lock(&self) -> Result<MutexGuard<'_, ActivityRegistry>> {
        self.registry
            .lock()
            .map_err(|_| anyhow!("activity registry lock poisoned"))
    }

    /// 当前注册表的快照
    pub fn list_activities(&self) -> Result<ActivityRegistry> {
        let registry = self.lock()?;
        Ok(registry.list_activities().clone())
    }

    pub fn signup(&self, activity_name: &str, email: &str) -> BizResult<String, SignupErr> {
        let mut registry = self.lock()?;
        let msg = ensure_biz!(registry.signup(activity_name, email));
        info!(activity = activity_name, email, "student signed up");
        biz_ok!(msg)
    }

    pub fn unregister(&self, activity_name: &str, email: &str) -> BizResult<String, UnregisterErr> {
        let mut registry = self.lock()?;
        let msg = ensure_biz!(registry.unregister(activity_name, email));
        info!(activity = activity_name, email, "student unregistered");
        biz_ok!(msg)
    }
}
