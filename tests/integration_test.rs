/*!
End-to-end tests: run the built binary and check what reaches stdout
*/

use std::process::{Command, Output};

use weekday_demo::output::RecordingSink;
use weekday_demo::{Animal, Day, DayError, Dog, Named, Pet, demo};

fn weekday_demo(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_weekday-demo"))
        .args(args)
        .output()
        .expect("Failed to run weekday-demo")
}

#[test]
fn test_demo_output() {
    let output = weekday_demo(&[]);

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Hello, world!\n1\n2\n3\n4\n5\n6\n7\n"
    );
}

#[test]
fn test_verbose_logs_stay_off_stdout() {
    let output = weekday_demo(&["-vvv"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), 8);
    assert!(String::from_utf8_lossy(&output.stderr).contains("demo finished"));
}

#[test]
fn test_days_listing() {
    let output = weekday_demo(&["days"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            "0 MONDAY Mon. weekday",
            "1 TUESDAY Tues. weekday",
            "2 WEDNESDAY Wed. weekday",
            "3 THURSDAY Thurs. weekday",
            "4 FRIDAY Fri. weekday",
            "5 SATURDAY Sat. weekend",
            "6 SUNDAY Sun. weekend",
        ]
    );
}

#[test]
fn test_lookup_known_and_unknown() {
    let output = weekday_demo(&["lookup", "Wed."]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "WEDNESDAY\n");

    let output = weekday_demo(&["lookup", "Xyz"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(
        String::from_utf8_lossy(&output.stderr)
            .contains("'Xyz' does not correspond to any known abbreviation.")
    );
}

#[test]
fn test_speak_with_name() {
    let output = weekday_demo(&["speak", "dog", "--name", "Rex"]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "Woof!\nRex the Dog\n");
}

#[test]
fn test_completions() {
    let output = weekday_demo(&["completions", "bash"]);

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("weekday-demo"));
}

#[cfg(target_os = "linux")]
#[test]
fn test_full_stdout_exits_nonzero() {
    use std::fs::OpenOptions;
    use std::process::Stdio;

    let full = OpenOptions::new()
        .write(true)
        .open("/dev/full")
        .expect("Failed to open /dev/full");

    let output = Command::new(env!("CARGO_BIN_EXE_weekday-demo"))
        .stdout(Stdio::from(full))
        .stderr(Stdio::piped())
        .output()
        .expect("Failed to run weekday-demo");

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Output failure"));
}

#[test]
fn test_library_scenarios() {
    // Demo through the library
    let mut sink = RecordingSink::new();
    demo::run(&mut sink).expect("demo failed");
    assert_eq!(sink.lines().len(), 8);

    // Lookup
    assert_eq!(Day::from_abbreviation("Wed."), Ok(Day::Wednesday));
    assert_eq!(Day::from_abbreviation("Wed"), Ok(Day::Wednesday));
    assert_eq!(
        Day::from_abbreviation("Xyz"),
        Err(DayError::UnknownAbbreviation {
            input: "Xyz".to_string()
        })
    );

    // Pets
    let rex = Pet::new(Dog, "Rex");
    let mut sink = RecordingSink::new();
    rex.speak(&mut sink).expect("speak failed");
    assert_eq!(sink.lines(), ["Woof!"]);
    assert_eq!(rex.animal_name(), "Dog");
    assert_eq!(rex.name(), "Rex");

    // Sets
    let weekdays: Vec<Day> = Day::weekdays().iter().copied().collect();
    assert_eq!(
        weekdays,
        vec![
            Day::Monday,
            Day::Tuesday,
            Day::Wednesday,
            Day::Thursday,
            Day::Friday
        ]
    );
    let abbrs: Vec<&str> = Day::all_values().iter().map(|d| d.abbreviation()).collect();
    assert_eq!(abbrs, ["Mon.", "Tues.", "Wed.", "Thurs.", "Fri.", "Sat.", "Sun."]);
}
