use dioxus::prelude::*;
use record::AppConfig;
use views::{Entry, Review, ReviewBlank};

mod views;

const CONFIG_TOML: &str = include_str!("../memberform.toml");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Entry {},
    #[route("/review")]
    ReviewBlank {},
    #[route("/review/:payload")]
    Review { payload: String },
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(|| {
        let config = AppConfig::from_toml_or_default(CONFIG_TOML);
        tracing::info!("Loaded {}", AppConfig::filename());
        config
    });

    rsx! {
        document::Link { rel: "stylesheet", href: ui::MAIN_CSS }
        Router::<Route> {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use record::{Transition, UserRecord};
    use views::review_route;

    #[test]
    fn test_bundled_config_parses() {
        let config = AppConfig::from_toml(CONFIG_TOML).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    fn member_records() -> Vec<UserRecord> {
        vec![
            UserRecord::new("alice", "pw1", "Alice", "010-1234-5678"),
            UserRecord::new("a+b", "%41", "100%", "a/b"),
            UserRecord::new("&=", "p&w=1 +%2B", "Ålice 김", "+82 10/1234"),
            UserRecord::default(),
        ]
    }

    fn payload_of(route: Route) -> String {
        match route {
            Route::Review { payload } => payload,
            other => panic!("expected review route, got {other}"),
        }
    }

    #[test]
    fn test_review_route_survives_path_round_trip() {
        for member in member_records() {
            let route = Route::Review { payload: record::encode(&member) };
            let parsed = match route.to_string().parse::<Route>() {
                Ok(route) => route,
                Err(e) => panic!("route did not parse back: {e}"),
            };
            assert_eq!(record::decode(&payload_of(parsed)), member);
        }
    }

    #[test]
    fn test_transition_path_resolves_to_review() {
        for member in member_records() {
            let transition = Transition { payload: record::encode(&member) };
            let route = match review_route(&transition) {
                Ok(route) => route,
                Err(e) => panic!("transition path did not resolve: {e}"),
            };
            assert_eq!(record::decode(&payload_of(route)), member);
        }
    }

    #[test]
    fn test_bare_review_path_is_blank_route() {
        assert!(matches!("/review".parse::<Route>(), Ok(Route::ReviewBlank {})));
        assert!(matches!("/".parse::<Route>(), Ok(Route::Entry {})));
    }
}
