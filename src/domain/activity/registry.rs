use derive_more::Display;
use serde::{Deserialize, Serialize, Serializer};

use super::{Activity, ActivityFormatErr};
use crate::ensure_ok;

/// 报名时是否检查人数上限
#[derive(Deserialize, Serialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CapacityPolicy {
    /// `max_participants` 仅用于展示
    #[default]
    Informational,
    Enforced,
}

impl CapacityPolicy {
    pub fn from_flag(enforce: bool) -> Self {
        if enforce {
            Self::Enforced
        } else {
            Self::Informational
        }
    }
}

#[derive(Debug, Display, Clone, PartialEq, Eq)]
pub enum SignupErr {
    #[display(fmt = "Activity not found")]
    NotFound,
    #[display(fmt = "Student is already signed up")]
    AlreadyRegistered,
    #[display(fmt = "Activity is full")]
    ActivityFull,
}

#[derive(Debug, Display, Clone, PartialEq, Eq)]
pub enum UnregisterErr {
    #[display(fmt = "Activity not found")]
    NotFound,
    #[display(fmt = "Student is not registered for this activity")]
    NotRegistered,
}

impl std::error::Error for SignupErr {}
impl std::error::Error for UnregisterErr {}

#[derive(Debug, Display, PartialEq, Eq)]
pub enum RegistryBuildErr {
    #[display(fmt = "duplicate activity name: {}", _0)]
    DuplicateName(String),
    #[display(fmt = "invalid activity {}: {}", _0, _1)]
    Activity(String, ActivityFormatErr),
}

impl std::error::Error for RegistryBuildErr {}

/// 活动名到活动记录的映射，列出时保持插入顺序
#[derive(Debug, Clone, Default)]
pub struct ActivityRegistry {
    activities: Vec<(String, Activity)>,
    policy: CapacityPolicy,
}

impl Serialize for ActivityRegistry {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(self.activities.iter().map(|(name, a)| (name, a)))
    }
}

impl ActivityRegistry {
    pub fn new(policy: CapacityPolicy) -> Self {
        Self {
            activities: Vec::new(),
            policy,
        }
    }

    pub fn with_activities<I, N>(policy: CapacityPolicy, activities: I) -> Result<Self, RegistryBuildErr>
    where
        I: IntoIterator<Item = (N, Activity)>,
        N: Into<String>,
    {
        let mut registry = Self::new(policy);
        for (name, activity) in activities {
            registry.insert(name.into(), activity)?;
        }
        Ok(registry)
    }

    pub fn insert(&mut self, name: String, activity: Activity) -> Result<(), RegistryBuildErr> {
        ensure_ok!(
            self.get(&name).is_none(),
            RegistryBuildErr::DuplicateName(name)
        );
        self.activities.push((name, activity));
        Ok(())
    }

    pub fn policy(&self) -> CapacityPolicy {
        self.policy
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.activities
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, a)| a)
    }

    fn get_mut(&mut self, name: &str) -> Option<&mut Activity> {
        self.activities
            .iter_mut()
            .find(|(n, _)| n == name)
            .map(|(_, a)| a)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Activity)> {
        self.activities.iter().map(|(n, a)| (n.as_str(), a))
    }

    /// 整个注册表，不做过滤
    pub fn list_activities(&self) -> &Self {
        self
    }

    pub fn signup(&mut self, activity_name: &str, email: &str) -> Result<String, SignupErr> {
        let policy = self.policy;
        let activity = self.get_mut(activity_name).ok_or(SignupErr::NotFound)?;
        ensure_ok!(
            !activity.is_participant(email),
            SignupErr::AlreadyRegistered
        );
        if policy == CapacityPolicy::Enforced {
            ensure_ok!(!activity.is_full(), SignupErr::ActivityFull);
        }

        activity.push_participant(email.to_string());
        Ok(format!("Signed up {email} for {activity_name}"))
    }

    pub fn unregister(&mut self, activity_name: &str, email: &str) -> Result<String, UnregisterErr> {
        let activity = self
            .get_mut(activity_name)
            .ok_or(UnregisterErr::NotFound)?;
        ensure_ok!(
            activity.remove_participant(email),
            UnregisterErr::NotRegistered
        );

        Ok(format!("Unregistered {email} from {activity_name}"))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::domain::activity::seed;

    fn participants(reg: &ActivityRegistry, name: &str) -> Vec<String> {
        reg.get(name).unwrap().participants().clone()
    }

    #[test]
    fn t_unknown_activity() {
        let mut reg = seed::registry(CapacityPolicy::Informational).unwrap();
        let before = serde_json::to_value(&reg).unwrap();

        assert_eq!(
            reg.signup("Nonexistent Club", "student@mergington.edu"),
            Err(SignupErr::NotFound)
        );
        assert_eq!(
            reg.unregister("Nonexistent Club", "student@mergington.edu"),
            Err(UnregisterErr::NotFound)
        );
        // 名称区分大小写
        assert_eq!(
            reg.signup("debate club", "student@mergington.edu"),
            Err(SignupErr::NotFound)
        );

        assert_eq!(serde_json::to_value(&reg).unwrap(), before);
    }

    #[test]
    fn t_signup_then_duplicate() {
        let mut reg = seed::registry(CapacityPolicy::Informational).unwrap();

        let msg = reg
            .signup("Debate Club", "newstudent@mergington.edu")
            .unwrap();
        assert_eq!(msg, "Signed up newstudent@mergington.edu for Debate Club");
        assert_eq!(
            participants(&reg, "Debate Club"),
            ["alex@mergington.edu", "newstudent@mergington.edu"]
        );

        assert_eq!(
            reg.signup("Debate Club", "newstudent@mergington.edu"),
            Err(SignupErr::AlreadyRegistered)
        );
        assert_eq!(
            participants(&reg, "Debate Club"),
            ["alex@mergington.edu", "newstudent@mergington.edu"]
        );
    }

    #[test]
    fn t_same_student_multiple_activities() {
        let mut reg = seed::registry(CapacityPolicy::Informational).unwrap();
        reg.signup("Chess Club", "alex@mergington.edu").unwrap();

        assert!(reg.get("Debate Club").unwrap().is_participant("alex@mergington.edu"));
        assert!(reg.get("Chess Club").unwrap().is_participant("alex@mergington.edu"));
    }

    #[test]
    fn t_unregister_keeps_others_in_order() {
        let mut reg = ActivityRegistry::with_activities(
            CapacityPolicy::Informational,
            [(
                "Band",
                Activity::try_new(
                    "Music",
                    "Thursdays",
                    10,
                    vec!["a@x.edu".into(), "b@x.edu".into(), "c@x.edu".into(), "d@x.edu".into()],
                )
                .unwrap(),
            )],
        )
        .unwrap();

        let msg = reg.unregister("Band", "b@x.edu").unwrap();
        assert_eq!(msg, "Unregistered b@x.edu from Band");
        assert_eq!(participants(&reg, "Band"), ["a@x.edu", "c@x.edu", "d@x.edu"]);

        assert_eq!(
            reg.unregister("Band", "b@x.edu"),
            Err(UnregisterErr::NotRegistered)
        );
        assert_eq!(participants(&reg, "Band"), ["a@x.edu", "c@x.edu", "d@x.edu"]);
    }

    #[test]
    fn t_capacity_policy() {
        let full = || {
            Activity::try_new("Tiny", "Sundays", 1, vec!["a@x.edu".into()]).unwrap()
        };

        let mut informational =
            ActivityRegistry::with_activities(CapacityPolicy::Informational, [("Tiny", full())])
                .unwrap();
        assert!(informational.signup("Tiny", "b@x.edu").is_ok());
        assert_eq!(participants(&informational, "Tiny").len(), 2);

        let mut enforced =
            ActivityRegistry::with_activities(CapacityPolicy::Enforced, [("Tiny", full())])
                .unwrap();
        // 重复报名的检查先于人数检查
        assert_eq!(
            enforced.signup("Tiny", "a@x.edu"),
            Err(SignupErr::AlreadyRegistered)
        );
        assert_eq!(
            enforced.signup("Tiny", "b@x.edu"),
            Err(SignupErr::ActivityFull)
        );
        assert_eq!(participants(&enforced, "Tiny"), ["a@x.edu"]);
    }

    #[test]
    fn t_duplicate_activity_name() {
        let a = Activity::try_new("x", "y", 1, vec![]).unwrap();
        let res = ActivityRegistry::with_activities(
            CapacityPolicy::Informational,
            [("Chess", a.clone()), ("Chess", a)],
        );
        assert_eq!(
            res.unwrap_err(),
            RegistryBuildErr::DuplicateName("Chess".to_string())
        );
    }

    #[test]
    fn t_listing_is_ordered_and_stable() {
        let reg = seed::registry(CapacityPolicy::Informational).unwrap();
        let first = serde_json::to_string(reg.list_activities()).unwrap();
        let second = serde_json::to_string(reg.list_activities()).unwrap();
        assert_eq!(first, second);

        let names: Vec<_> = reg.iter().map(|(n, _)| n).collect();
        assert_eq!(names.first(), Some(&"Debate Club"));
        assert_eq!(names.last(), Some(&"Gym Class"));
        assert!(first.starts_with(r#"{"Debate Club":"#));
    }
}
