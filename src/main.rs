use anyhow::Result;
use capes::{DemoApp, DemoConfig};

fn main() -> Result<()> {
    init_tracing();

    let config = DemoConfig::from_env()?;
    let app = DemoApp::new(config);
    let stdout = std::io::stdout();
    app.run(&mut stdout.lock())
}

fn init_tracing() {
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("tracing subscriber already set");
    }
}
