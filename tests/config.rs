use rand::rngs::StdRng;
use rand::SeedableRng;
use statement_pretty_printer::{parse_bool, CaseMode, ConfigError, FmtConfig};

#[test]
fn default_config_is_valid() {
    assert_eq!(FmtConfig::default().validate(), Ok(()));
}

#[test]
fn zero_widths_are_rejected() {
    let config = FmtConfig {
        line_width: 0,
        ..FmtConfig::default()
    };
    assert_eq!(config.validate(), Err(ConfigError::ZeroLineWidth));

    let config = FmtConfig {
        tab_width: 0,
        ..FmtConfig::default()
    };
    assert_eq!(config.validate(), Err(ConfigError::ZeroTabWidth));
}

#[test]
fn case_modes_parse_by_name() {
    assert_eq!("upper".parse::<CaseMode>(), Ok(CaseMode::Upper));
    assert_eq!("lower".parse::<CaseMode>(), Ok(CaseMode::Lower));
    assert_eq!("title".parse::<CaseMode>(), Ok(CaseMode::Title));
    assert_eq!("spongebob".parse::<CaseMode>(), Ok(CaseMode::SpongeBob));
    assert!("shouty".parse::<CaseMode>().is_err());
}

#[test]
fn case_transforms() {
    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(CaseMode::Preserve.apply("SeLeCt", &mut rng), "SeLeCt");
    assert_eq!(CaseMode::Upper.apply("select", &mut rng), "SELECT");
    assert_eq!(CaseMode::Lower.apply("SELECT", &mut rng), "select");
    assert_eq!(CaseMode::Title.apply("ORDER BY", &mut rng), "Order By");
}

#[test]
fn spongebob_is_deterministic_per_seed() {
    let mut first_rng = StdRng::seed_from_u64(42);
    let mut second_rng = StdRng::seed_from_u64(42);
    let first = CaseMode::SpongeBob.apply("select", &mut first_rng);
    let second = CaseMode::SpongeBob.apply("select", &mut second_rng);
    assert_eq!(first, second);
    assert_eq!(first.to_lowercase(), "select");
}

#[test]
fn lenient_bool_parsing() {
    assert_eq!(parse_bool("on"), Ok(true));
    assert_eq!(parse_bool("off"), Ok(false));
    assert_eq!(parse_bool("true"), Ok(true));
    assert_eq!(parse_bool("false"), Ok(false));
    assert!(parse_bool("maybe").is_err());
}
