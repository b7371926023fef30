use feature_decision::{DecisionContext, FlagsConfig, Platform};

pub fn main() {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "tests/data/flags.json".to_owned());
    let engine = FlagsConfig::from_file(&path).unwrap().to_engine();

    let context = DecisionContext::new("AR", "SV", 123, Platform::Ios).with_mobile_version("1.0.0");

    let decision = engine.evaluate("SHOW_SEARCH_FOR_SV_AND_GN", &context);

    if decision.active {
        println!("You should show the search based on current context");
    } else {
        println!(
            "You should not show the search based on current context: {}",
            decision.reason
        );
    }
}
