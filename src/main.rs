//! DiSC answer scoring CLI.
//!
//! ```text
//! disc <QUESTION_ID> [ANSWER...]   score one answer (stdin when omitted)
//! disc --profile                   score {"Q1": "...", ...} from stdin
//! ```

use std::collections::BTreeMap;
use std::io::Read;

use anyhow::{Context, bail};
use mimalloc::MiMalloc;
use serde_json::json;

use disc::config::Config;
use disc::profile::{AssessmentRecord, DiscProfile};
use disc::scoring::DiscScorer;
use disc::taxonomy::QuestionId;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

const USAGE: &str = "usage: disc <QUESTION_ID> [ANSWER...]\n       disc --profile < answers.json";

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.is_empty() || args.iter().any(|a| a == "--help" || a == "-h") {
        println!("{USAGE}");
        return Ok(());
    }

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;
    let scorer = DiscScorer::load(&config).context("failed to load DiSC scorer")?;

    let output = if args[0] == "--profile" {
        run_profile(&scorer)?
    } else {
        run_single(&scorer, &args)?
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn run_single(scorer: &DiscScorer, args: &[String]) -> anyhow::Result<serde_json::Value> {
    let question: QuestionId = args[0].parse()?;
    let answer = if args.len() > 1 {
        args[1..].join(" ")
    } else {
        read_stdin()?
    };

    tracing::info!(question = %question, "Scoring answer");
    let evaluation = scorer.evaluate_answer(&answer, question)?;
    Ok(serde_json::to_value(&evaluation)?)
}

fn run_profile(scorer: &DiscScorer) -> anyhow::Result<serde_json::Value> {
    let raw = read_stdin()?;
    let answers: BTreeMap<QuestionId, String> =
        serde_json::from_str(&raw).context("expected a JSON object of question id to answer")?;

    let mut profile = DiscProfile::new();
    let mut evaluations = Vec::with_capacity(answers.len());

    for (question, answer) in &answers {
        let evaluation = scorer.evaluate_answer(answer, *question)?;
        profile.add_evaluation(&evaluation);
        evaluations.push(serde_json::to_value(&evaluation)?);
    }

    let missing = profile.missing_questions();
    if !missing.is_empty() {
        tracing::warn!(missing = ?missing, "Profile is incomplete");
    }

    let summary = match profile.summarize() {
        Ok(summary) => summary,
        Err(e) => bail!("cannot build profile: {e}"),
    };
    let record = AssessmentRecord::new(&summary);

    Ok(json!({
        "evaluations": evaluations,
        "missing": missing,
        "summary": summary,
        "record": record,
    }))
}

fn read_stdin() -> anyhow::Result<String> {
    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .context("failed to read stdin")?;
    Ok(buf)
}
