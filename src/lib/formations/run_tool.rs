use std::io;

use log::info;

use super::{
    helpers::{
        android_formation, format_enroll_outcome, format_roster, format_unenroll_outcome,
        kotlin_formation, sample_users, total_enrolled,
    },
    models::{
        formation_model::{Formation, User},
        Config,
    },
    report_writer::ReportWriter,
};

fn enroll<RW: ReportWriter>(
    writer: &mut RW,
    formation: &mut Formation,
    user: &User,
) -> io::Result<()> {
    let outcome = formation.enroll(user.clone());
    writer.write_line(&format_enroll_outcome(formation, user, outcome))
}

fn unenroll<RW: ReportWriter>(
    writer: &mut RW,
    formation: &mut Formation,
    user: &User,
) -> io::Result<()> {
    let outcome = formation.unenroll(user);
    writer.write_line(&format_unenroll_outcome(formation, user, outcome))
}

fn section<RW: ReportWriter>(writer: &mut RW, title: &str) -> io::Result<()> {
    writer.write_line("")?;
    writer.write_line(&format!("=== {} ===", title))
}

fn roster<RW: ReportWriter>(writer: &mut RW, formation: &Formation) -> io::Result<()> {
    writer.write_line("")?;
    writer.write_line(&format_roster(formation))
}

pub fn run<RW: ReportWriter>(writer: &mut RW, config: &Config) -> io::Result<()> {
    writer.write_line("🚀 DIO - Formations System")?;
    writer.write_line("")?;

    let mut kotlin = kotlin_formation();
    let mut android = android_formation();
    let [joao, maria, pedro] = sample_users();
    info!("Built formations '{}' and '{}'", kotlin.name(), android.name());

    writer.write_line("=== ENROLLMENTS ===")?;
    enroll(writer, &mut kotlin, &joao)?;
    enroll(writer, &mut kotlin, &maria)?;
    enroll(writer, &mut kotlin, &joao)?;

    enroll(writer, &mut android, &maria)?;
    enroll(writer, &mut android, &pedro)?;

    section(writer, "FORMATION DETAILS")?;
    writer.write_line(&kotlin.describe())?;
    writer.write_line("")?;
    writer.write_line(&"=".repeat(config.separator_width))?;
    writer.write_line("")?;
    writer.write_line(&android.describe())?;

    roster(writer, &kotlin)?;
    roster(writer, &android)?;

    section(writer, "ENROLLMENT CANCELLATION")?;
    unenroll(writer, &mut kotlin, &joao)?;
    unenroll(writer, &mut kotlin, &pedro)?;

    section(writer, "FINAL STATUS")?;
    roster(writer, &kotlin)?;

    section(writer, "STATISTICS")?;
    for formation in [&kotlin, &android] {
        writer.write_line(&format!(
            "📊 Total duration of formation '{}': {} minutes",
            formation.name(),
            formation.total_duration()
        ))?;
    }
    writer.write_line(&format!(
        "👥 Total students in the system: {}",
        total_enrolled(&[&kotlin, &android])
    ))
}
