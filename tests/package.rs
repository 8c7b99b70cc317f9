use fitness_tracker::error::TrainingError;
use fitness_tracker::pipeline::package::{load_packages, parse_packages, read_package};
use fitness_tracker::training::Workout;
use fitness_tracker::types::workout::{Package, WorkoutType};
use std::io::Write;

#[test]
fn codes_resolve_to_variants() {
    let swimming = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).expect("swimming");
    assert!(matches!(swimming, Workout::Swimming(_)));
    assert_eq!(swimming.workout_type(), WorkoutType::Swm);

    let running = read_package("RUN", &[15000.0, 1.0, 75.0]).expect("running");
    assert!(matches!(running, Workout::Running(_)));

    let walking = read_package("WLK", &[9000.0, 1.0, 75.0, 180.0]).expect("walking");
    match walking {
        Workout::SportsWalking(w) => {
            assert_eq!(w.data.action, 9000.0);
            assert_eq!(w.height, 180.0);
        }
        other => panic!("unexpected workout: {other:?}"),
    }
}

#[test]
fn unknown_code_is_rejected() {
    assert_eq!(
        read_package("XYZ", &[1.0, 2.0, 3.0]),
        Err(TrainingError::UnknownWorkoutCode("XYZ".to_string()))
    );
    // codes are case sensitive
    assert!(matches!(
        read_package("run", &[15000.0, 1.0, 75.0]),
        Err(TrainingError::UnknownWorkoutCode(_))
    ));
}

#[test]
fn wrong_value_count_is_rejected() {
    assert_eq!(
        read_package("RUN", &[1.0, 2.0]),
        Err(TrainingError::ArgumentArityMismatch {
            workout: "Running",
            expected: 3,
            actual: 2,
        })
    );
    assert!(matches!(
        read_package("WLK", &[9000.0, 1.0, 75.0]),
        Err(TrainingError::ArgumentArityMismatch { expected: 4, actual: 3, .. })
    ));
}

#[test]
fn sample_packages_end_to_end() {
    let lines: Vec<String> = Package::samples()
        .iter()
        .map(|p| {
            read_package(&p.code, &p.values)
                .expect("workout")
                .show_training_info()
                .expect("info")
                .get_message()
        })
        .collect();

    assert_eq!(
        lines,
        vec![
            "Тип тренировки: Swimming; Длительность: 1.000 ч.; Дистанция: 0.994 км; Ср. скорость: 1.000 км/ч; Потрачено ккал: 336.000.",
            "Тип тренировки: Running; Длительность: 1.000 ч.; Дистанция: 9.750 км; Ср. скорость: 9.750 км/ч; Потрачено ккал: 699.750.",
            "Тип тренировки: SportsWalking; Длительность: 1.000 ч.; Дистанция: 5.850 км; Ср. скорость: 5.850 км/ч; Потрачено ккал: 157.500.",
        ]
    );
}

#[test]
fn packages_parse_from_json() {
    let packages = parse_packages(br#"[{"code": "RUN", "values": [15000, 1, 75]}]"#)
        .expect("packages");
    assert_eq!(packages, vec![Package::new("RUN", [15000.0, 1.0, 75.0])]);

    assert!(parse_packages(b"{not json").is_err());
}

#[test]
fn packages_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    let json = serde_json::to_string(&Package::samples()).expect("json");
    file.write_all(json.as_bytes()).expect("write");

    let packages = load_packages(file.path()).expect("packages");
    assert_eq!(packages, Package::samples());

    let missing = file.path().with_extension("missing");
    assert!(load_packages(&missing).is_err());
}

#[test]
fn zero_height_walk_has_no_summary() {
    let walking = read_package("WLK", &[9000.0, 1.0, 75.0, 0.0]).expect("walking");

    assert_eq!(
        walking.show_training_info(),
        Err(TrainingError::DivisionByZero("SportsWalking"))
    );
}
