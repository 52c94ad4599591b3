use trading_dashboard::config::{parse_interval_ms, Config};
use trading_dashboard::error::AppError;

#[test]
fn parse_default_toml() {
    let toml_str = r#"
[market]
symbol = "BTCUSD"
symbols = ["ETHUSD", "SOLUSD"]
base_price = 50000.0
initial_price = 50245.32
sample_count = 30
walk_step = 500.0
max_volume = 1000000
tick_interval_ms = 2000
tick_step = 50.0
seed = 42

[ui]
refresh_rate_ms = 100
currency_prefix = "R$"

[logging]
level = "debug"
file = "dash.log"

[[portfolio.positions]]
symbol = "PETR4"
shares = 1000
avg_price = 35.20
current_price = 36.50
change_pct = 3.69

[[portfolio.positions]]
symbol = "VALE3"
shares = 500
avg_price = 68.40
current_price = 70.20
"#;
    let config = Config::from_toml_str(toml_str).unwrap();
    assert_eq!(config.market.symbol, "BTCUSD");
    assert_eq!(config.market.symbols.len(), 2);
    assert_eq!(config.market.seed, Some(42));
    assert_eq!(config.market.sample_count, 30);
    assert!((config.market.tick_step - 50.0).abs() < f64::EPSILON);
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.file, "dash.log");
    assert_eq!(config.portfolio.positions.len(), 2);
    assert_eq!(config.portfolio.positions[1].symbol, "VALE3");
    assert_eq!(config.portfolio.positions[1].change_pct, 0.0);
    assert!(config.validate().is_ok());
}

#[test]
fn partial_market_section_keeps_other_defaults() {
    let config = Config::from_toml_str("[market]\nsample_count = 5\n").unwrap();
    assert_eq!(config.market.sample_count, 5);
    assert_eq!(config.market.tick_interval_ms, 2_000);
    assert!((config.market.base_price - 50_000.0).abs() < f64::EPSILON);
    assert_eq!(config.portfolio.positions.len(), 4);
}

#[test]
fn empty_portfolio_section_falls_back_to_mock_positions() {
    let config = Config::from_toml_str("[portfolio]\n").unwrap();
    assert_eq!(config.portfolio.positions.len(), 4);
    assert_eq!(config.portfolio.positions[0].symbol, "PETR4");
}

#[test]
fn malformed_toml_is_a_toml_error() {
    let err = Config::from_toml_str("[market\nsymbol = ").unwrap_err();
    assert!(matches!(err, AppError::Toml(_)));
}

#[test]
fn validate_rejects_bad_market_values() {
    let cases = [
        "[market]\nsample_count = 0\n",
        "[market]\ntick_interval_ms = 0\n",
        "[market]\nmax_volume = 0\n",
        "[market]\nwalk_step = -1.0\n",
        "[market]\ntick_step = inf\n",
        "[market]\ninitial_price = nan\n",
        "[ui]\nrefresh_rate_ms = 0\n",
    ];
    for case in cases {
        let config = Config::from_toml_str(case).unwrap();
        let err = config.validate().unwrap_err();
        assert!(matches!(err, AppError::Config(_)), "case: {case}");
    }
}

#[test]
fn validate_rejects_duplicate_portfolio_symbols() {
    let toml_str = r#"
[[portfolio.positions]]
symbol = "PETR4"
shares = 1
avg_price = 1.0
current_price = 1.0

[[portfolio.positions]]
symbol = "petr4"
shares = 2
avg_price = 1.0
current_price = 1.0
"#;
    let config = Config::from_toml_str(toml_str).unwrap();
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("duplicate portfolio symbol"));
}

#[test]
fn parse_interval_accepts_ms_and_seconds() {
    assert_eq!(parse_interval_ms("2000ms").unwrap(), 2_000);
    assert_eq!(parse_interval_ms(" 2s ").unwrap(), 2_000);
    assert!(parse_interval_ms("2").is_err());
}

#[test]
fn validate_rejects_non_finite_position_prices() {
    for (avg, current) in [("nan", "1.0"), ("1.0", "inf"), ("-inf", "1.0")] {
        let toml_str = format!(
            "[[portfolio.positions]]\nsymbol = \"PETR4\"\nshares = 1\n\
             avg_price = {avg}\ncurrent_price = {current}\n"
        );
        let config = Config::from_toml_str(&toml_str).unwrap();
        let err = config.validate().unwrap_err();
        assert!(
            err.to_string().contains("must be finite"),
            "avg {avg}, current {current}"
        );
    }
}
