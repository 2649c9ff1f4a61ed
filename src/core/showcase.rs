use crate::config::ShowcaseSettings;
use crate::core::chooser::RandomChooser;
use crate::core::printer::PrintTwo;
use crate::core::transformer::DecimalParser;
use crate::domain::model::ShowcaseReport;
use crate::domain::ports::{BiConsumer, BinaryChooser, Printer, Supplier, Transformer};
use crate::utils::error::Result;

/// Runs every contract demonstration in order and reports what happened.
pub struct Showcase {
    settings: ShowcaseSettings,
}

impl Showcase {
    pub fn new(settings: ShowcaseSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &ShowcaseSettings {
        &self.settings
    }

    /// Writes the demonstration lines through `printer`.
    ///
    /// A parse failure of the numeric input is returned as is; nothing after
    /// the transform step is printed in that case.
    pub fn run<P: Printer<String>>(&self, printer: &P) -> Result<ShowcaseReport> {
        let settings = &self.settings;
        tracing::info!("🚀 Running callable contract showcase");

        // Printer
        printer.print(settings.greeting.clone());

        // Supplier
        let eat = || settings.meal.clone();
        let meal = eat.supply();
        printer.print(meal.clone());

        // Transformer
        tracing::debug!("Transforming input '{}'", settings.input);
        let transformed = DecimalParser::new().transform(settings.input.as_str())?;
        printer.print(transformed.to_string());

        // BinaryChooser
        let chooser = match settings.seed {
            Some(seed) => RandomChooser::seeded(seed),
            None => RandomChooser::from_time(),
        }
        .with_threshold(settings.threshold)?;
        let winner = chooser.choose(settings.first.clone(), settings.second.clone());
        tracing::debug!(
            "Chose '{}' between '{}' and '{}'",
            winner,
            settings.first,
            settings.second
        );
        printer.print(winner.clone());

        let no_show = BinaryChooser::<String>::no_show_message(&chooser).into_owned();
        printer.print(no_show.clone());

        printer.print(format!("[{}]", settings.companies.join(", ")));

        // BiConsumer via method reference
        let print_two = PrintTwo::new(printer);
        let consumer = |a: &str, b: &str| print_two.print_two_names(a, b);
        consumer.consume(settings.first.as_str(), settings.second.as_str());

        for student in &settings.students {
            printer.print(student.to_string());
        }

        tracing::info!("✅ Showcase finished, winner: {}", winner);

        Ok(ShowcaseReport {
            greeting: settings.greeting.clone(),
            meal,
            transformed,
            winner,
            no_show,
            companies: settings.companies.clone(),
            students: settings.students.clone(),
        })
    }
}
