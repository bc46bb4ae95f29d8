use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use pythagoras::prelude::*;
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;
use tracing_subscriber::EnvFilter;

mod outcome;
mod provenance;

use outcome::{Outcome, Value};

#[derive(Parser)]
#[command(name = "pythagoras-cli")]
#[command(about = "Right-triangle side calculator", version)]
struct Cmd {
    /// Print the result as JSON instead of plain text
    #[arg(long, global = true)]
    json: bool,

    /// Absolute tolerance for `is-right` and `validate`
    #[arg(long, global = true, default_value_t = RIGHT_EPS)]
    eps: f64,

    /// Also write the JSON result to this path, with a provenance sidecar
    #[arg(long, global = true)]
    out: Option<PathBuf>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand, Debug)]
enum Action {
    /// Hypotenuse from the two legs
    Hypotenuse {
        #[arg(allow_negative_numbers = true)]
        a: f64,
        #[arg(allow_negative_numbers = true)]
        b: f64,
    },
    /// Leg a from the hypotenuse and leg b
    SideA {
        #[arg(allow_negative_numbers = true)]
        hypotenuse: f64,
        #[arg(allow_negative_numbers = true)]
        b: f64,
    },
    /// Leg b from the hypotenuse and leg a
    SideB {
        #[arg(allow_negative_numbers = true)]
        hypotenuse: f64,
        #[arg(allow_negative_numbers = true)]
        a: f64,
    },
    /// Check three sides in any order; the longest is taken as hypotenuse
    IsRight {
        #[arg(allow_negative_numbers = true)]
        a: f64,
        #[arg(allow_negative_numbers = true)]
        b: f64,
        #[arg(allow_negative_numbers = true)]
        c: f64,
    },
    /// Check legs a, b against the given hypotenuse (no reordering)
    Validate {
        #[arg(allow_negative_numbers = true)]
        a: f64,
        #[arg(allow_negative_numbers = true)]
        b: f64,
        #[arg(allow_negative_numbers = true)]
        hypotenuse: f64,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();
    let cmd = Cmd::parse();
    solve(&cmd.action, cmd.json, cmd.eps, cmd.out.as_deref())
}

fn solve(action: &Action, json: bool, eps: f64, out: Option<&std::path::Path>) -> Result<()> {
    if !(eps.is_finite() && eps >= 0.0) {
        bail!("--eps must be a finite, non-negative number (got {eps})");
    }
    let cfg = TriangleCfg::with_eps(eps);
    let outcome = evaluate(action, cfg)?;
    tracing::info!(op = outcome.op, inputs = ?outcome.inputs, value = %outcome.value, "evaluated");

    if json {
        println!("{}", outcome.to_json()?);
    } else {
        println!("{}", outcome.value);
    }

    if let Some(out) = out {
        outcome.write_json(out)?;
        let params = serde_json::json!({
            "op": outcome.op,
            "inputs": outcome.inputs,
            "eps": eps,
        });
        provenance::write_sidecar(out, params)?;
        tracing::info!(out = %out.display(), "written");
    }
    Ok(())
}

/// Run one library operation and package the result.
fn evaluate(action: &Action, cfg: TriangleCfg) -> Result<Outcome> {
    let (op, inputs, value) = match *action {
        Action::Hypotenuse { a, b } => (
            "hypotenuse",
            vec![a, b],
            compute_hypotenuse(a, b).map(Value::Length),
        ),
        Action::SideA { hypotenuse, b } => (
            "side-a",
            vec![hypotenuse, b],
            compute_side_a(hypotenuse, b).map(Value::Length),
        ),
        Action::SideB { hypotenuse, a } => (
            "side-b",
            vec![hypotenuse, a],
            compute_side_b(hypotenuse, a).map(Value::Length),
        ),
        Action::IsRight { a, b, c } => (
            "is-right",
            vec![a, b, c],
            cfg.is_right_triangle(a, b, c).map(Value::Verdict),
        ),
        Action::Validate { a, b, hypotenuse } => (
            "validate",
            vec![a, b, hypotenuse],
            cfg.validate_triangle(a, b, hypotenuse).map(Value::Verdict),
        ),
    };
    let value = value.with_context(|| format!("{op} {inputs:?}"))?;
    Ok(Outcome { op, inputs, value })
}
