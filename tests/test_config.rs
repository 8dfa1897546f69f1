use beam_shooter::{GameConfig, GameError, Level, Tuning};

#[test]
fn default_config_uses_medium_preset() {
    let config = GameConfig::default();
    assert_eq!(config.level, Level::Medium);
    assert_eq!(config.tuning().expect("valid tuning"), Tuning::default());
}

#[test]
fn harder_levels_spawn_faster_and_need_more_score() {
    let easy = Level::Easy.tuning();
    let hard = Level::Hard.tuning();
    assert!(hard.wave_interval < easy.wave_interval);
    assert!(hard.enemy_approach_speed > easy.enemy_approach_speed);
    assert!(hard.clear_score > easy.clear_score);
}

#[test]
fn toml_selects_level_and_seed() {
    let config = GameConfig::from_toml("level = \"hard\"\nseed = 7\n").expect("valid toml");
    assert_eq!(config.level, Level::Hard);
    assert_eq!(config.seed, Some(7));
    assert_eq!(config.tuning().expect("valid tuning"), Level::Hard.tuning());
}

#[test]
fn toml_tuning_table_overrides_preset() {
    let text = r#"
        level = "easy"

        [tuning]
        fire_cooldown = 4

        [tuning.field]
        max_x = 6.0
    "#;
    let config = GameConfig::from_toml(text).expect("valid toml");
    let tuning = config.tuning().expect("valid tuning");
    let easy = Level::Easy.tuning();
    assert_eq!(tuning.fire_cooldown, 4);
    assert_eq!(tuning.field.max_x, 6.0);
    assert_eq!(tuning.field.min_x, -4.0);
    assert_eq!(tuning.starting_life, 3);
    // Keys not named in [tuning] keep the chosen level's values.
    assert_eq!(tuning.wave_interval, easy.wave_interval);
    assert_eq!(tuning.enemy_approach_speed, easy.enemy_approach_speed);
    assert_eq!(tuning.enemy_patrol_speed, easy.enemy_patrol_speed);
    assert_eq!(tuning.clear_score, easy.clear_score);
}

#[test]
fn tuning_table_keeps_hard_preset_for_unnamed_keys() {
    let text = "level = \"hard\"\n\n[tuning]\nfire_cooldown = 6\n";
    let config = GameConfig::from_toml(text).expect("valid toml");
    let tuning = config.tuning().expect("valid tuning");
    assert_eq!(
        tuning,
        Tuning {
            fire_cooldown: 6,
            ..Level::Hard.tuning()
        }
    );
}

#[test]
fn empty_tuning_table_is_the_preset() {
    let config = GameConfig::from_toml("level = \"easy\"\n[tuning]\n").expect("valid toml");
    assert_eq!(config.tuning().expect("valid tuning"), Level::Easy.tuning());
}

// ── Validation ────────────────────────────────────────────────────────────────

#[test]
fn inverted_field_is_rejected() {
    let text = "[tuning.field]\nmin_x = 5.0\n";
    let config = GameConfig::from_toml(text).expect("valid toml");
    let err = config.tuning().expect_err("min_x above max_x");
    assert!(matches!(err, GameError::InvalidConfig { path: None, .. }));
    assert!(err.to_string().contains("min_x"));
}

#[test]
fn inverted_depth_range_is_rejected() {
    let text = "[tuning.field]\nnear_z = 50.0\n";
    let config = GameConfig::from_toml(text).expect("valid toml");
    assert!(matches!(config.tuning(), Err(GameError::InvalidConfig { .. })));
}

#[test]
fn inverted_player_depth_is_rejected() {
    let text = "[tuning.field]\nplayer_min_z = 7.0\n";
    let config = GameConfig::from_toml(text).expect("valid toml");
    assert!(matches!(config.tuning(), Err(GameError::InvalidConfig { .. })));
}

#[test]
fn non_finite_speed_is_rejected() {
    let config = GameConfig::from_toml("[tuning]\nplayer_speed = nan\n").expect("valid toml");
    let err = config.tuning().expect_err("nan speed");
    assert!(err.to_string().contains("player_speed"));

    let config = GameConfig::from_toml("[tuning]\nprojectile_speed = inf\n").expect("valid toml");
    assert!(matches!(config.tuning(), Err(GameError::InvalidConfig { .. })));
}

#[test]
fn negative_hit_radius_is_rejected() {
    let config = GameConfig::from_toml("[tuning]\nhit_radius = -1.0\n").expect("valid toml");
    assert!(matches!(config.tuning(), Err(GameError::InvalidConfig { .. })));
}

#[test]
fn wrongly_typed_override_is_rejected() {
    let config = GameConfig::from_toml("[tuning]\nfire_cooldown = \"fast\"\n").expect("valid toml");
    assert!(matches!(config.tuning(), Err(GameError::InvalidConfig { .. })));
}

#[test]
fn preset_tunings_are_valid() {
    for level in [Level::Easy, Level::Medium, Level::Hard] {
        assert_eq!(level.tuning().validate(), Ok(()));
    }
}

#[test]
fn unknown_level_is_rejected() {
    assert!(GameConfig::from_toml("level = \"nightmare\"").is_err());
}

#[test]
fn load_reports_missing_file() {
    let path = std::env::temp_dir().join("beam_shooter_missing_config.toml");
    let err = GameConfig::load(&path).expect_err("file does not exist");
    assert!(matches!(err, GameError::ConfigRead { .. }));
    assert!(err.to_string().contains("beam_shooter_missing_config.toml"));
}

#[test]
fn load_reports_bad_toml_with_path() {
    let path = std::env::temp_dir().join(format!("beam_shooter_bad_{}.toml", std::process::id()));
    std::fs::write(&path, "level = [").expect("write temp file");
    let err = GameConfig::load(&path).expect_err("invalid toml");
    let _ = std::fs::remove_file(&path);
    assert!(matches!(err, GameError::Config { .. }));
}

#[test]
fn load_rejects_inverted_field_with_path() {
    let path = std::env::temp_dir().join(format!("beam_shooter_inverted_{}.toml", std::process::id()));
    std::fs::write(&path, "[tuning.field]\nmin_x = 5.0\nmax_x = -5.0\n").expect("write temp file");
    let err = GameConfig::load(&path).expect_err("inverted field");
    let _ = std::fs::remove_file(&path);
    assert!(matches!(err, GameError::InvalidConfig { path: Some(_), .. }));
    assert!(err.to_string().contains("beam_shooter_inverted_"));
}
