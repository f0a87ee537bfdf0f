use course_goals::{AppConfig, GoalApp, GoalStore};
use sprout_ui::{App, ShellError};

fn main() -> Result<(), ShellError> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = AppConfig::load("goals.json");
    let store = GoalStore::new(config.seed_goals());

    App::new(config.title.clone())
        .size(config.width, config.height)
        .root(GoalApp::new(store))
        .run()
}
