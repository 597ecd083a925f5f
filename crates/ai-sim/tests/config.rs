use ai_grid::{Position, Team};
use ai_sim::{SimConfig, Simulation, Strategy};
use ai_utility::SelectionMode;

#[test]
fn builtin_scenario_parses() {
    let config = SimConfig::builtin().unwrap();
    assert_eq!(config.ticks, 200);
    assert_eq!(config.markers.len(), 4);
    assert!(config.markers[0].base);

    let crafter = config.agents.iter().find(|a| a.name == "crafter").unwrap();
    assert_eq!(
        crafter.strategy,
        Strategy::Crafter {
            target: "berserker".to_string()
        }
    );

    let drifter = config.agents.iter().find(|a| a.name == "drifter").unwrap();
    match drifter.strategy {
        Strategy::Utility { selector } => assert_eq!(selector.mode, SelectionMode::WeightedRandom),
        ref other => panic!("unexpected strategy {other:?}"),
    }
}

#[test]
fn omitted_fields_take_defaults() {
    let yaml = r#"
agents:
  - name: lone
    position: { x: 1, y: -1 }
    team: 3
    strategy: { kind: utility }
"#;
    let config: SimConfig = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(config.ticks, 100);
    assert_eq!(config.dt_seconds, 1.0);
    assert_eq!(config.heal_amount, 10.0);
    assert!(config.markers.is_empty());

    let agent = &config.agents[0];
    assert_eq!(agent.position, Position::new(1, -1));
    assert_eq!(agent.team, Team(3));
    assert_eq!(agent.hitpoints, 100.0);
    assert_eq!(agent.melee_damage, 20.0);
    match agent.strategy {
        Strategy::Utility { selector } => assert_eq!(selector.cooldown, 0.1),
        ref other => panic!("unexpected strategy {other:?}"),
    }
}

#[test]
fn unknown_route_stop_is_an_error() {
    let yaml = r#"
agents:
  - name: courier
    position: { x: 0, y: 0 }
    team: 0
    strategy: { kind: courier, route: [nowhere] }
"#;
    let config: SimConfig = serde_yaml::from_str(yaml).unwrap();
    let err = Simulation::from_config(&config).err().unwrap();
    assert!(err.to_string().contains("nowhere"));
}

#[test]
fn missing_file_reports_the_path() {
    let err = SimConfig::load(std::path::Path::new("/definitely/not/here.yaml")).unwrap_err();
    assert!(format!("{err:#}").contains("/definitely/not/here.yaml"));
}
