use cf_case::schema::*;
use cf_case::{load, load_json, load_yaml, save_json, save_yaml, validate_case};
use cf_combust::{CombustConfig, CombustorType};

fn simple_case() -> Case {
    Case {
        name: "Roundtrip".to_string(),
        description: Some("oxygen-rich burn".to_string()),
        reaction: CombustorType::Ch4,
        inlet: InletDef {
            temperature_k: 300.0,
            pressure_kpa: 500.0,
            composition: vec![
                FractionDef {
                    species: "O2".to_string(),
                    fraction: 0.8,
                },
                FractionDef {
                    species: "CH4".to_string(),
                    fraction: 0.2,
                },
            ],
        },
        temp_guess_k: 2500.0,
        stages: vec![
            StageDef {
                name: None,
                pressure_kpa: 200.0,
                temp_guess_k: Some(2000.0),
            },
            StageDef {
                name: Some("exit".to_string()),
                pressure_kpa: 100.0,
                temp_guess_k: None,
            },
        ],
        config: CombustConfig {
            temp_step: 50.0,
            ..Default::default()
        },
    }
}

#[test]
fn roundtrip_yaml() {
    let case = simple_case();
    validate_case(&case).unwrap();

    let path = std::env::temp_dir().join("cf_case_roundtrip.yaml");
    save_yaml(&path, &case).unwrap();
    let loaded = load_yaml(&path).unwrap();

    assert_eq!(case, loaded);
}

#[test]
fn roundtrip_json() {
    let case = simple_case();

    let path = std::env::temp_dir().join("cf_case_roundtrip.json");
    save_json(&path, &case).unwrap();
    let loaded = load(&path).unwrap();

    assert_eq!(case, loaded);
    assert_eq!(load_json(&path).unwrap(), case);
}

#[test]
fn omitted_fields_take_defaults() {
    let yaml = r#"
name: minimal
reaction: ch4
inlet:
  temperature_k: 106.0
  pressure_kpa: 1207.0
  composition:
    - { species: O2, fraction: 0.6 }
    - { species: CH4, fraction: 0.4 }
config:
  combust_loops: 4
"#;
    let case: Case = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(case.temp_guess_k, 2000.0);
    assert!(case.stages.is_empty());
    assert_eq!(case.config.combust_loops, 4);
    assert_eq!(case.config.max_iterations_equil, 10);
    assert_eq!(case.config.damping, 0.25);
}

#[test]
fn save_rejects_invalid_case() {
    let mut case = simple_case();
    case.inlet.temperature_k = -1.0;
    let path = std::env::temp_dir().join("cf_case_invalid.yaml");
    assert!(save_yaml(&path, &case).is_err());
}
