use capes::{DemoApp, DemoConfig};

fn render(config: DemoConfig) -> anyhow::Result<String> {
    let mut out = Vec::new();
    DemoApp::new(config).run(&mut out)?;
    Ok(String::from_utf8(out)?)
}

#[test]
fn default_demo_prints_both_sections() {
    let output = render(DemoConfig::default()).unwrap();
    let expected = "\
=== ENGINEERING SUPERHERO DEMO ===
🦾 Iron Man | Powers: Repulsor beams, Flight, AI-assisted suit | Energy: 100%
💥 Iron Man uses Repulsor beams!

🦾 Ultron | Powers: Self-replication, Plasma beams | Energy: 100%
🤖 Ultron weaponizes Plasma beams!

=== POLYMORPHISM DEMO ===
🚁 Scanning terrain and avoiding obstacles with LiDAR!
🔋 Accelerating with 800V battery system (0-60mph in 2.5s)!
🤖 Diving to 1000m with pressure-resistant hull!
";
    assert_eq!(output, expected);
}

#[test]
fn ron_roster_reports_soft_failures_and_keeps_going() {
    let config = DemoConfig::from_ron_str(
        r#"(
            app_name: "Soft failures",
            roster: [
                (
                    name: "Spark",
                    secret_identity: "Sam",
                    powers: ["Zap"],
                    weakness: "Water",
                    energy_level: Some(10),
                    uses: [0, 0, 7],
                    identity_override: Some(42),
                ),
            ],
            fleet: [ElectricCar],
        )"#,
    )
    .unwrap();

    let output = render(config).unwrap();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(
        lines,
        vec![
            "=== ENGINEERING SUPERHERO DEMO ===",
            "🦾 Spark | Powers: Zap | Energy: 10%",
            "⚠️ Secret identity must be a string!",
            "💥 Spark uses Zap!",
            "⚡ Spark: LOW ENERGY!",
            "⚡ Spark: LOW ENERGY!",
            "",
            "=== POLYMORPHISM DEMO ===",
            "🔋 Accelerating with 800V battery system (0-60mph in 2.5s)!",
        ]
    );
}

#[test]
fn villain_bad_index_aborts_the_demo() {
    let config = DemoConfig::from_ron_str(
        r#"(
            roster: [
                (
                    name: "Ultron",
                    secret_identity: "AI-1001",
                    powers: ["Plasma beams"],
                    weakness: "Internet disconnection",
                    evil_plan: Some("Erase humanity"),
                    uses: [3],
                ),
            ],
        )"#,
    )
    .unwrap();

    let mut out = Vec::new();
    let err = DemoApp::new(config).run(&mut out).unwrap_err();
    assert!(err.to_string().contains("Ultron could not use power 3"));

    let printed = String::from_utf8(out).unwrap();
    assert!(!printed.contains("POLYMORPHISM"));
}

#[test]
fn malformed_config_is_an_error() {
    assert!(DemoConfig::from_ron_str("(roster: 3)").is_err());
    assert!(DemoConfig::load("does/not/exist.ron").is_err());
}

#[test]
fn bundled_roster_file_runs() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/demos/roster.ron");
    let config = DemoConfig::load(path).unwrap();
    assert_eq!(config.app_name, "Engineering Demo (extended)");

    let output = render(config).unwrap();
    assert!(output.contains("⚠️ Secret identity must be a string!"));
    assert!(output.contains("❌ Invalid power index for Iron Man"));
    assert!(output.contains("🤖 Ultron weaponizes Self-replication!"));
}
