// ABOUTME: NutriPlan CLI - command-line front end for the nutrition planning engine
// ABOUTME: Generates plans, health metrics, meal nutrition facts, and recipes as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Generate a plan for a 30 year old, 70 kg user training for fitness
//! nutriplan plan --name Ana --age 30 --weight 70 --goal fitness --condition none
//!
//! # Same, with the refinement estimator and a fixed meal shuffle
//! nutriplan plan --name Ana --age 30 --weight 70 --goal fitness --condition none --refine --seed 7
//!
//! # BMI, BMR, TDEE and water goal only
//! nutriplan metrics --age 45 --weight 82 --height 178
//!
//! # Nutrition facts for a composed meal
//! nutriplan builder "Chicken Breast" "Brown Rice" "Broccoli"
//!
//! # Recipe for a catalog meal
//! nutriplan recipe "Grilled chicken salad"
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use nutriplan::config::PlanningConfig;
use nutriplan::database::{InMemoryPlanRepository, PlanRepository};
use nutriplan::errors::{AppError, ErrorResponse};
use nutriplan::intelligence::{recipe_for, MealComposition};
use nutriplan::logging;
use nutriplan::planner::NutritionPlanner;
use nutriplan::validation::ProfileForm;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use serde_json::json;
use std::process::ExitCode;
use tracing::{debug, error, info};

#[derive(Parser)]
#[command(
    name = "nutriplan",
    about = "NutriPlan nutrition planning CLI",
    long_about = "Derive personalized nutrition plans, health metrics, and meal nutrition facts."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(clap::Args)]
struct ProfileArgs {
    /// Display name
    #[arg(long, default_value = "User")]
    name: String,

    /// Age in years (1-120)
    #[arg(long)]
    age: i64,

    /// Weight in kilograms (1-500)
    #[arg(long)]
    weight: f64,

    /// Height in centimeters
    #[arg(long)]
    height: Option<f64>,

    /// Health condition: diabetes, high-bp, heart-issue, none
    #[arg(long, default_value = "none")]
    condition: String,

    /// Goal: weight-loss, weight-gain, fitness, healthy-diet
    #[arg(long, default_value = "healthy-diet")]
    goal: String,
}

impl ProfileArgs {
    fn into_form(self) -> ProfileForm {
        ProfileForm {
            name: self.name,
            age: Some(self.age),
            weight_kg: Some(self.weight),
            height_cm: self.height,
            health_condition: Some(self.condition),
            goal: Some(self.goal),
        }
    }
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Generate a nutrition plan with metrics and health score
    Plan {
        #[command(flatten)]
        profile: ProfileArgs,

        /// Refine targets with the trained estimator
        #[arg(long)]
        refine: bool,

        /// Seed for meal selection
        #[arg(long)]
        seed: Option<u64>,

        /// Store the plan under this owner and include its id in the output
        #[arg(long)]
        save_as: Option<String>,
    },

    /// Compute health metrics for a profile
    Metrics {
        #[command(flatten)]
        profile: ProfileArgs,
    },

    /// Nutrition facts for a meal composed of catalog ingredients
    Builder {
        /// Ingredient names, with or without the portion suffix
        #[arg(required = true)]
        ingredients: Vec<String>,
    },

    /// Recipe for a catalog meal
    Recipe {
        /// Meal name
        meal: String,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    if cli.verbose {
        std::env::set_var("RUST_LOG", "debug");
    }
    logging::init_from_env()?;

    match run(cli.command).await {
        Ok(output) => {
            print_json(&output, cli.pretty)?;
            Ok(ExitCode::SUCCESS)
        }
        Err(failure) => {
            // Application errors are reported as data; anything else propagates
            let Some(app_error) = failure.downcast_ref::<AppError>() else {
                return Err(failure);
            };
            error!(code = ?app_error.code, "{app_error}");
            print_json(&ErrorResponse::from(app_error), cli.pretty)?;
            Ok(ExitCode::FAILURE)
        }
    }
}

async fn run(command: Command) -> Result<serde_json::Value> {
    let output = match command {
        Command::Plan {
            profile,
            refine,
            seed,
            save_as,
        } => run_plan(profile, refine, seed, save_as).await?,
        Command::Metrics { profile } => run_metrics(profile)?,
        Command::Builder { ingredients } => run_builder(&ingredients)?,
        Command::Recipe { meal } => serde_json::to_value(recipe_for(&meal))?,
    };
    Ok(output)
}

fn load_config() -> Result<PlanningConfig> {
    Ok(PlanningConfig::load().map_err(AppError::from)?)
}

async fn run_plan(
    args: ProfileArgs,
    refine: bool,
    seed: Option<u64>,
    save_as: Option<String>,
) -> Result<serde_json::Value> {
    let profile = args.into_form().validate()?;

    let mut config = load_config()?;
    config.estimator.enabled |= refine;
    let planner = NutritionPlanner::new(config);
    debug!(refined = planner.is_refined(), "Planner ready");

    let report = match seed {
        Some(seed) => planner.plan_with_rng(&profile, &mut ChaCha8Rng::seed_from_u64(seed)),
        None => planner.plan(&profile),
    };

    let Some(owner) = save_as else {
        return Ok(serde_json::to_value(&report)?);
    };

    let repository = InMemoryPlanRepository::new();
    let saved = repository
        .save_plan(&profile, &report.plan, Some(owner.as_str()))
        .await?;
    info!(plan_id = %saved.id, owner = %owner, "Plan saved");

    Ok(json!({
        "id": saved.id,
        "created_at": saved.created_at,
        "report": report,
    }))
}

fn run_metrics(args: ProfileArgs) -> Result<serde_json::Value> {
    let profile = args.into_form().validate()?;
    let planner = NutritionPlanner::with_estimator(load_config()?, None);
    Ok(serde_json::to_value(planner.metrics(&profile))?)
}

fn run_builder(names: &[String]) -> Result<serde_json::Value> {
    let config = load_config()?;
    let composition = MealComposition::from_names(names)?;

    Ok(json!({
        "ingredients": composition.ingredients(),
        "nutrition_facts": composition.nutrition_facts(&config.meal_builder),
    }))
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{rendered}");
    Ok(())
}
