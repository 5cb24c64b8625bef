use td_project::schema::*;
use td_project::{load_json, load_yaml, save_json, save_yaml, validate_case};

fn sample_case() -> CaseFile {
    CaseFile {
        version: 1,
        name: "Roundtrip".to_string(),
        stories: vec![
            StoryDef::default(),
            StoryDef {
                mass_kg: 12_000.0,
                support: "Fix-Pin".to_string(),
                ..StoryDef::default()
            },
        ],
        tlcd: Some(TlcdDef {
            diameter_m: 0.2,
            width_m: 2.5,
            water_height_m: 0.3,
            amount: 3,
            contraction_coefficient: 1.2,
        }),
        excitation: ExcitationDef::General {
            time_s: vec![0.0, 0.1, 0.2],
            acceleration_mps2: vec![0.0, 1.0, -0.5],
            analysis_duration_s: 1.0,
        },
        configuration: ConfigurationDef {
            method: "Linear Acceleration Method".to_string(),
            nonlinear_analysis: true,
            ..ConfigurationDef::default()
        },
    }
}

#[test]
fn roundtrip_yaml_case() {
    let case = sample_case();
    validate_case(&case).unwrap();

    let path = std::env::temp_dir().join("td_project_roundtrip_case.yaml");
    save_yaml(&path, &case).unwrap();
    let loaded = load_yaml(&path).unwrap();

    assert_eq!(case, loaded);
}

#[test]
fn roundtrip_json_case() {
    let case = sample_case();

    let path = std::env::temp_dir().join("td_project_roundtrip_case.json");
    save_json(&path, &case).unwrap();
    let loaded = load_json(&path).unwrap();

    assert_eq!(case, loaded);
}

#[test]
fn saving_an_invalid_case_fails() {
    let mut case = sample_case();
    case.configuration.method = "Modal Superposition Method".to_string();
    let path = std::env::temp_dir().join("td_project_invalid_case.yaml");
    assert!(save_yaml(&path, &case).is_err());
}
