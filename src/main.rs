//! Draw-Lines Grader.
//!
//! Bewertet aufgezeichnete Antworten einer Linien-auf-Bild-Frage:
//! `drawlines <frage.toml> <antworten.json> [versuche]`.

use anyhow::{bail, Context};
use drawlines::{DrawLinesOptions, QuestionDefinition, Response};
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    GradeRunner::from_args(std::env::args().skip(1))?.run()
}

/// Kommandozeilen-Lauf: Frage laden, Antworten bewerten, Endnote ausgeben.
struct GradeRunner {
    question_path: PathBuf,
    responses_path: PathBuf,
    total_tries: usize,
}

impl GradeRunner {
    fn from_args(mut args: impl Iterator<Item = String>) -> anyhow::Result<Self> {
        let (Some(question), Some(responses)) = (args.next(), args.next()) else {
            bail!("Aufruf: drawlines <frage.toml> <antworten.json> [versuche]");
        };
        let total_tries = match args.next() {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("Anzahl Versuche ungültig: '{}'", raw))?,
            None => 1,
        };
        Ok(Self {
            question_path: PathBuf::from(question),
            responses_path: PathBuf::from(responses),
            total_tries,
        })
    }

    fn run(self) -> anyhow::Result<()> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("drawlines v{} startet...", env!("CARGO_PKG_VERSION"));

        let options = DrawLinesOptions::load_from_file(&DrawLinesOptions::config_path());
        let definition =
            QuestionDefinition::load_from_file(&self.question_path, options.default_zone_tolerance)?;

        let content = std::fs::read_to_string(&self.responses_path).with_context(|| {
            format!("Antworten nicht lesbar: {}", self.responses_path.display())
        })?;
        let responses: Vec<Response> = serde_json::from_str(&content).with_context(|| {
            format!(
                "Antworten sind kein JSON-Array von Objekten: {}",
                self.responses_path.display()
            )
        })?;

        let classifier = options.classifier();
        println!("Richtige Antwort: {}", definition.right_answer_summary());
        for (i, response) in responses.iter().enumerate() {
            if let Some(message) = definition.validation_error(response) {
                println!("#{}: unvollständig ({})", i + 1, message.identifier());
                continue;
            }
            let result = definition.grade_response(response, &classifier);
            println!(
                "#{}: {:.4} {:?} - {}",
                i + 1,
                result.fraction,
                result.state,
                definition.summarise_response(response)
            );
        }

        let final_grade = definition.compute_final_grade(&responses, self.total_tries);
        println!("Endnote: {:.4}", final_grade);
        Ok(())
    }
}
