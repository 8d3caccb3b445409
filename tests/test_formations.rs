use std::io;

use lib::formations::models::Config;
use lib::formations::report_writer::ReportWriter;
use lib::formations::run_tool::run;

/// Keeps every report line instead of printing it
#[derive(Default)]
pub struct TestWriter {
    pub lines: Vec<String>,
}

impl ReportWriter for TestWriter {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.lines.push(line.to_owned());
        Ok(())
    }
}

const JOAO: &str = "User(name='João Silva', email='joao@email.com')";
const MARIA: &str = "User(name='Maria Santos', email='maria@email.com')";
const PEDRO: &str = "User(name='Pedro Costa', email='pedro@email.com')";

fn expected_report(separator: &str) -> String {
    [
        "🚀 DIO - Formations System".to_owned(),
        "".to_owned(),
        "=== ENROLLMENTS ===".to_owned(),
        format!("✅ {JOAO} enrolled successfully in formation 'Kotlin Developer'"),
        format!("✅ {MARIA} enrolled successfully in formation 'Kotlin Developer'"),
        format!("⚠️  {JOAO} is already enrolled in formation 'Kotlin Developer'"),
        format!("✅ {MARIA} enrolled successfully in formation 'Android Developer'"),
        format!("✅ {PEDRO} enrolled successfully in formation 'Android Developer'"),
        "".to_owned(),
        "=== FORMATION DETAILS ===".to_owned(),
        "🎓 Formation: Kotlin Developer".to_owned(),
        "📚 Contents (3):".to_owned(),
        "   • Introduction to Kotlin (basic) - 90min".to_owned(),
        "   • Functions and Lambdas (intermediate) - 120min".to_owned(),
        "   • Asynchronous Programming (hard) - 180min".to_owned(),
        "⏰ Total duration: 390 minutes".to_owned(),
        "👥 Enrolled students: 2".to_owned(),
        "".to_owned(),
        separator.to_owned(),
        "".to_owned(),
        "🎓 Formation: Android Developer".to_owned(),
        "📚 Contents (3):".to_owned(),
        "   • UI with Jetpack Compose (intermediate) - 150min".to_owned(),
        "   • MVVM Architecture (hard) - 120min".to_owned(),
        "   • Testing on Android (intermediate) - 90min".to_owned(),
        "⏰ Total duration: 360 minutes".to_owned(),
        "👥 Enrolled students: 2".to_owned(),
        "".to_owned(),
        "📋 Students enrolled in formation 'Kotlin Developer':".to_owned(),
        format!("   1. {JOAO}"),
        format!("   2. {MARIA}"),
        "".to_owned(),
        "📋 Students enrolled in formation 'Android Developer':".to_owned(),
        format!("   1. {MARIA}"),
        format!("   2. {PEDRO}"),
        "".to_owned(),
        "=== ENROLLMENT CANCELLATION ===".to_owned(),
        format!("❌ Enrollment of {JOAO} cancelled in formation 'Kotlin Developer'"),
        format!("⚠️  {PEDRO} not found in formation 'Kotlin Developer'"),
        "".to_owned(),
        "=== FINAL STATUS ===".to_owned(),
        "".to_owned(),
        "📋 Students enrolled in formation 'Kotlin Developer':".to_owned(),
        format!("   1. {MARIA}"),
        "".to_owned(),
        "=== STATISTICS ===".to_owned(),
        "📊 Total duration of formation 'Kotlin Developer': 390 minutes".to_owned(),
        "📊 Total duration of formation 'Android Developer': 360 minutes".to_owned(),
        "👥 Total students in the system: 3".to_owned(),
    ]
    .join("\n")
}

#[test]
fn test_main() {
    let mut writer = TestWriter::default();

    run(&mut writer, &Config::default()).unwrap();

    assert_eq!(writer.lines.join("\n"), expected_report(&"=".repeat(50)));
}

#[test]
fn test_separator_width_from_config() {
    let mut writer = TestWriter::default();
    let config = Config {
        separator_width: 10,
        ..Config::default()
    };

    run(&mut writer, &config).unwrap();

    assert!(writer.lines.contains(&"==========".to_owned()));
    assert!(!writer.lines.contains(&"=".repeat(50)));
}
