use anyhow::{Context, Result};
use errdef::codes::base_class_for;
use errdef::{parse_errors, ErrorDefinition};
use std::env;
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();

    // ─── 2) parse the table ──────────────────────────────────────────
    let path = env::args()
        .nth(1)
        .context("usage: errdef <ERRORS_CSV_PATH>")?;
    info!("parsing error table {}", path);

    let definitions: Vec<ErrorDefinition> = parse_errors(&path)
        .with_context(|| format!("opening {}", path))?
        .collect::<Result<_, _>>()
        .context("parsing error table")?;

    // ─── 3) summarize ────────────────────────────────────────────────
    let parameterized = definitions.iter().filter(|d| d.is_parameterized()).count();
    info!(
        "{} definitions parsed ({} parameterized)",
        definitions.len(),
        parameterized
    );

    for def in &definitions {
        if base_class_for(def.int_code()).is_none() {
            warn!(
                "`{}` uses unrecognized code {}, generator will fall back to RPCError",
                def.raw_name,
                def.int_code()
            );
        }
    }

    println!("{}", serde_json::to_string_pretty(&definitions)?);
    Ok(())
}
