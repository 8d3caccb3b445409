use std::error::Error;

use figment::{
    providers::{Env, Format, Json},
    Figment,
};
use log::debug;

use crate::formations::models::{
    formation_model::{EducationalContent, EnrollOutcome, Formation, Level, UnenrollOutcome, User},
    Args, Config,
};

pub fn log_all_users(users: &[User]) -> () {
    for user in users.iter() {
        debug!("Serving {} <{}>", user.name(), user.email());
    }
}

/// Reads config.json (if present) and overrides it with `FORMATIONS_*` env variables
pub fn load_config(args: &Args) -> Result<Config, Box<dyn Error>> {
    let config: Config = Figment::new()
        .merge(Json::file(&args.config_json_path))
        .merge(Env::prefixed("FORMATIONS_"))
        .extract()?;
    Ok(config)
}

pub fn kotlin_formation() -> Formation {
    Formation::new(
        "Kotlin Developer",
        vec![
            EducationalContent::new("Introduction to Kotlin", Level::Basic, 90),
            EducationalContent::new("Functions and Lambdas", Level::Intermediate, 120),
            EducationalContent::new("Asynchronous Programming", Level::Hard, 180),
        ],
    )
}

pub fn android_formation() -> Formation {
    Formation::new(
        "Android Developer",
        vec![
            EducationalContent::new("UI with Jetpack Compose", Level::Intermediate, 150),
            EducationalContent::new("MVVM Architecture", Level::Hard, 120),
            EducationalContent::new("Testing on Android", Level::Intermediate, 90),
        ],
    )
}

pub fn sample_users() -> [User; 3] {
    let users = [
        User::new("João Silva", "joao@email.com"),
        User::new("Maria Santos", "maria@email.com"),
        User::new("Pedro Costa", "pedro@email.com"),
    ];
    log_all_users(&users);
    users
}

/* status line shown after an enroll attempt */
pub fn format_enroll_outcome(
    formation: &Formation,
    user: &User,
    outcome: EnrollOutcome,
) -> String {
    match outcome {
        EnrollOutcome::Enrolled => format!(
            "✅ {} enrolled successfully in formation '{}'",
            user,
            formation.name()
        ),
        EnrollOutcome::AlreadyEnrolled => format!(
            "⚠️  {} is already enrolled in formation '{}'",
            user,
            formation.name()
        ),
    }
}

/* status line shown after an unenroll attempt */
pub fn format_unenroll_outcome(
    formation: &Formation,
    user: &User,
    outcome: UnenrollOutcome,
) -> String {
    match outcome {
        UnenrollOutcome::Unenrolled => format!(
            "❌ Enrollment of {} cancelled in formation '{}'",
            user,
            formation.name()
        ),
        UnenrollOutcome::NotFound => {
            format!("⚠️  {} not found in formation '{}'", user, formation.name())
        }
    }
}

pub fn format_roster(formation: &Formation) -> String {
    format!(
        "📋 Students enrolled in formation '{}':\n{}",
        formation.name(),
        formation.list_enrolled()
    )
}

/// Counts enrollments over all formations, a user enrolled twice counts twice
pub fn total_enrolled(formations: &[&Formation]) -> usize {
    formations
        .iter()
        .map(|formation| formation.enrolled().len())
        .sum()
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
