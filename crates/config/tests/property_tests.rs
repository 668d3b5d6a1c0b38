//! Property-based tests for configuration resolution.
//!
//! Test coverage:
//! - Method filter: only the exact configured names match
//! - Flags: any casing of "true" enables, every other token disables
//! - Logger level: tokens outside the nine level names resolve to INFO

use config::{ConfigLoader, LoggerLevel, MemoryFileSystem, CONFIG_FILE_NAME};
use proptest::prelude::*;

/// Strategy for method names that need no escaping in a properties file.
fn method_name_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,8}(\\.[a-z][a-z0-9_]{0,8}){0,3}"
}

/// Strategy for every casing of "true".
fn true_casing_strategy() -> impl Strategy<Value = String> {
    proptest::collection::vec(any::<bool>(), 4).prop_map(|upper| {
        "true"
            .chars()
            .zip(upper)
            .map(|(c, up)| if up { c.to_ascii_uppercase() } else { c })
            .collect()
    })
}

proptest! {
    #[test]
    fn filter_matches_exactly_the_configured_names(
        names in proptest::collection::btree_set(method_name_strategy(), 1..5),
        probe in method_name_strategy(),
    ) {
        let joined = names.iter().cloned().collect::<Vec<_>>().join(",");
        let fs = MemoryFileSystem::new()
            .with_file(CONFIG_FILE_NAME, format!("filter-method-names={joined}"));
        let config = ConfigLoader::load(&fs).unwrap();

        for name in &names {
            prop_assert!(config.filters_method(name));
            let longer = format!("{name}.x");
            prop_assert_eq!(config.filters_method(&longer), names.contains(&longer));
        }
        prop_assert_eq!(config.filters_method(&probe), names.contains(&probe));
        prop_assert_eq!(config.filtered_methods(), &names);
    }

    #[test]
    fn any_casing_of_true_enables_flags(token in true_casing_strategy()) {
        let config = ConfigLoader::load_from_str(&format!(
            "save-runtime-data={token}\ntrack-consumption-evolution={token}"
        ));
        prop_assert!(config.saves_runtime_data());
        prop_assert!(config.tracks_consumption_evolution());
    }

    #[test]
    fn other_tokens_disable_flags(token in "[A-Za-z0-9]{0,6}") {
        prop_assume!(!token.eq_ignore_ascii_case("true"));
        let config = ConfigLoader::load_from_str(&format!("hide-agent-consumption={token}"));
        prop_assert!(!config.hides_agent_consumption());
    }

    #[test]
    fn unknown_levels_fall_back_to_info(token in "[A-Za-z]{1,8}") {
        prop_assume!(LoggerLevel::parse(&token).is_none());
        let config = ConfigLoader::load_from_str(&format!("logger-level={token}"));
        prop_assert_eq!(config.logger_level(), LoggerLevel::Info);
    }
}
