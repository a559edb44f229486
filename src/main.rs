//! Headless driver: loads a config, builds the session and dumps the scene
//! as JSON on stdout.
//!
//! Usage: `orbit-viz [config.json]`. Log level via `RUST_LOG`.

use std::env;
use std::process;

use orbit_viz::controls::Session;
use orbit_viz::{Config, ConfigError, Parameter};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn run() -> Result<(), ConfigError> {
    let config = match env::args().nth(1) {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    let session = Session::new(config)?;
    let el = session.elements();
    let shape = el.ellipse();
    info!(
        a = el.a(),
        e = el.e(),
        periapsis = shape.periapsis_distance(),
        apoapsis = shape.apoapsis_distance(),
        flags = ?session.singularities(),
        "orbit"
    );
    for c in session.controls() {
        info!(
            control = c.parameter.label(),
            value = c.value,
            enabled = c.enabled,
            "control"
        );
    }
    info!(prompt = %session.explain(Parameter::Eccentricity).prompt, "explanation request");

    println!("{}", serde_json::to_string_pretty(&session.scene())?);
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        error!(error = %e, "orbit-viz failed");
        process::exit(1);
    }
}
