//! Module with the formation model: contents, users and the enrollment roster
use std::fmt;

use log::{debug, info};

/// Duration of a content when none is given explicitly
pub const DEFAULT_DURATION_MINUTES: u32 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    Basic,
    Intermediate,
    Hard,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Level::Basic => "basic",
            Level::Intermediate => "intermediate",
            Level::Hard => "hard",
        };
        f.write_str(name)
    }
}

/// A model for describing users that can enroll into formations.
/// Two users with the same name and email are the same user.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct User {
    name: String,
    email: String,
}

impl User {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        User {
            name: name.into(),
            email: email.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "User(name='{}', email='{}')", self.name, self.email)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EducationalContent {
    pub name: String,
    pub level: Level,
    pub duration_minutes: u32,
}

impl EducationalContent {
    pub fn new(name: impl Into<String>, level: Level, duration_minutes: u32) -> Self {
        EducationalContent {
            name: name.into(),
            level,
            duration_minutes,
        }
    }

    /// Content lasting [`DEFAULT_DURATION_MINUTES`]
    pub fn with_default_duration(name: impl Into<String>, level: Level) -> Self {
        EducationalContent::new(name, level, DEFAULT_DURATION_MINUTES)
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }
}

impl fmt::Display for EducationalContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) - {}min",
            self.name, self.level, self.duration_minutes
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnrollOutcome {
    Enrolled,
    AlreadyEnrolled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnenrollOutcome {
    Unenrolled,
    NotFound,
}

/// Snapshot of a roster, numbered from 1 in enrollment order.
#[derive(Debug, PartialEq, Eq)]
pub enum EnrolledListing<'a> {
    NoOneEnrolled,
    Enrolled(Vec<(usize, &'a User)>),
}

impl EnrolledListing<'_> {
    pub fn len(&self) -> usize {
        match self {
            EnrolledListing::NoOneEnrolled => 0,
            EnrolledListing::Enrolled(entries) => entries.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for EnrolledListing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnrolledListing::NoOneEnrolled => write!(f, "   No students enrolled"),
            EnrolledListing::Enrolled(entries) => {
                let lines = entries
                    .iter()
                    .map(|(position, user)| format!("   {}. {}", position, user))
                    .collect::<Vec<_>>();
                write!(f, "{}", lines.join("\n"))
            }
        }
    }
}

/// A named course made of ordered contents, with a roster of enrolled users.
/// The roster keeps enrollment order and never holds the same user twice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formation {
    name: String,
    contents: Vec<EducationalContent>,
    enrolled: Vec<User>,
}

impl Formation {
    pub fn new(name: impl Into<String>, contents: Vec<EducationalContent>) -> Self {
        Formation {
            name: name.into(),
            contents,
            enrolled: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn contents(&self) -> &[EducationalContent] {
        &self.contents
    }

    pub fn set_contents(&mut self, contents: Vec<EducationalContent>) {
        self.contents = contents;
    }

    pub fn enrolled(&self) -> &[User] {
        &self.enrolled
    }

    pub fn enroll(&mut self, user: User) -> EnrollOutcome {
        if self.enrolled.contains(&user) {
            debug!("{} is already enrolled in '{}'", user, self.name);
            return EnrollOutcome::AlreadyEnrolled;
        }
        info!("Enrolling {} in '{}'", user, self.name);
        self.enrolled.push(user);
        EnrollOutcome::Enrolled
    }

    pub fn unenroll(&mut self, user: &User) -> UnenrollOutcome {
        match self.enrolled.iter().position(|enrolled| enrolled == user) {
            Some(index) => {
                info!("Cancelling enrollment of {} in '{}'", user, self.name);
                self.enrolled.remove(index);
                UnenrollOutcome::Unenrolled
            }
            None => {
                debug!("{} is not enrolled in '{}'", user, self.name);
                UnenrollOutcome::NotFound
            }
        }
    }

    pub fn list_enrolled(&self) -> EnrolledListing<'_> {
        if self.enrolled.is_empty() {
            EnrolledListing::NoOneEnrolled
        } else {
            EnrolledListing::Enrolled(
                self.enrolled
                    .iter()
                    .enumerate()
                    .map(|(index, user)| (index + 1, user))
                    .collect(),
            )
        }
    }

    pub fn total_duration(&self) -> u32 {
        self.contents
            .iter()
            .map(|content| content.duration_minutes)
            .sum()
    }

    /// Multi-line summary, same as the `Display` output
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Formation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "🎓 Formation: {}", self.name)?;
        writeln!(f, "📚 Contents ({}):", self.contents.len())?;
        for content in self.contents.iter() {
            writeln!(f, "   • {}", content)?;
        }
        writeln!(f, "⏰ Total duration: {} minutes", self.total_duration())?;
        write!(f, "👥 Enrolled students: {}", self.enrolled.len())
    }
}
