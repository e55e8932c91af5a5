use super::{
    registry::{CapacityPolicy, RegistryBuildErr},
    Activity, ActivityRegistry,
};

struct SeedActivity {
    name: &'static str,
    description: &'static str,
    schedule: &'static str,
    max_participants: u32,
    participants: &'static [&'static str],
}

static SEED: &[SeedActivity] = &[
    SeedActivity {
        name: "Debate Club",
        description: "Develop public speaking and critical thinking skills",
        schedule: "Wednesdays, 4:00 PM - 5:30 PM",
        max_participants: 16,
        participants: &["alex@mergington.edu"],
    },
    SeedActivity {
        name: "Science Olympiad",
        description: "Compete in science competitions and experiments",
        schedule: "Saturdays, 10:00 AM - 12:00 PM",
        max_participants: 15,
        participants: &["james@mergington.edu", "lily@mergington.edu"],
    },
    SeedActivity {
        name: "Basketball",
        description: "Team basketball practice and games",
        schedule: "Mondays and Thursdays, 4:00 PM - 5:30 PM",
        max_participants: 15,
        participants: &["tyler@mergington.edu"],
    },
    SeedActivity {
        name: "Soccer",
        description: "Outdoor soccer training and matches",
        schedule: "Tuesdays and Fridays, 3:30 PM - 5:00 PM",
        max_participants: 18,
        participants: &["maya@mergington.edu", "lucas@mergington.edu"],
    },
    SeedActivity {
        name: "Drama Club",
        description: "Stage performances and theatrical productions",
        schedule: "Mondays and Wednesdays, 3:30 PM - 5:00 PM",
        max_participants: 20,
        participants: &["grace@mergington.edu"],
    },
    SeedActivity {
        name: "Art Studio",
        description: "Painting, drawing, and sculpture instruction",
        schedule: "Saturdays, 1:00 PM - 3:00 PM",
        max_participants: 12,
        participants: &["rachel@mergington.edu", "noah@mergington.edu"],
    },
    SeedActivity {
        name: "Chess Club",
        description: "Learn strategies and compete in chess tournaments",
        schedule: "Fridays, 3:30 PM - 5:00 PM",
        max_participants: 12,
        participants: &["michael@mergington.edu", "daniel@mergington.edu"],
    },
    SeedActivity {
        name: "Programming Class",
        description: "Learn programming fundamentals and build software projects",
        schedule: "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
        max_participants: 20,
        participants: &["emma@mergington.edu", "sophia@mergington.edu"],
    },
    SeedActivity {
        name: "Gym Class",
        description: "Physical education and sports activities",
        schedule: "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
        max_participants: 30,
        participants: &["john@mergington.edu", "olivia@mergington.edu"],
    },
];

/// 进程启动时的初始活动列表
pub fn registry(policy: CapacityPolicy) -> Result<ActivityRegistry, RegistryBuildErr> {
    let mut registry = ActivityRegistry::new(policy);
    for seed in SEED {
        let participants = seed.participants.iter().map(|p| p.to_string()).collect();
        let activity = Activity::try_new(
            seed.description,
            seed.schedule,
            seed.max_participants,
            participants,
        )
        .map_err(|err| RegistryBuildErr::Activity(seed.name.to_string(), err))?;
        registry.insert(seed.name.to_string(), activity)?;
    }
    Ok(registry)
}
