//! Stepper flows for the two wizard-style mutations.
//!
//! Steppers collect a small ordered set of fields and resolve to a request
//! object on submit, or to nothing on cancel. They perform no I/O; the
//! caller decides whether a follow-up request is issued, so a cancelled
//! stepper can never cause one.

use cryptomate_core::{
    BaseAlgorithm, CreateModelRequest, Day, PredictionWindow, SymbolName,
};

/// Model-creation flow: base algorithm, prediction window, and an optional
/// sequencing flag that maps the base algorithm onto its `*_SEQ` variant.
#[derive(Debug, Clone, Default)]
pub struct CreateModelStepper {
    algorithm: Option<BaseAlgorithm>,
    window: Option<PredictionWindow>,
    sequencing: bool,
}

impl CreateModelStepper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_algorithm(&mut self, algorithm: BaseAlgorithm) -> &mut Self {
        self.algorithm = Some(algorithm);
        self
    }

    pub fn select_window(&mut self, window: PredictionWindow) -> &mut Self {
        self.window = Some(window);
        self
    }

    pub fn set_sequencing(&mut self, sequencing: bool) -> &mut Self {
        self.sequencing = sequencing;
        self
    }

    /// Resolve the flow. Both required steps must be completed; otherwise
    /// the result is empty, as when the dialog is dismissed.
    pub fn submit(&self, symbol_name: SymbolName) -> Option<CreateModelRequest> {
        let algorithm = self.algorithm?;
        let window = self.window?;

        Some(CreateModelRequest {
            symbol_name,
            algorithm: algorithm.with_sequencing(self.sequencing),
            prediction_window: window,
        })
    }
}

/// Resolved training configuration handed to the models page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainingConfig {
    /// Explicit training range; `None` means "use everything", in which
    /// case the range is left out of the request entirely.
    pub data_range: Option<(Day, Day)>,
    pub patience: u32,
}

/// Training flow: a data range seeded with the full span of the loaded bars
/// plus an early-stopping patience. A range equal to the offered default is
/// not sent; the backend treats an absent range as "use everything".
#[derive(Debug, Clone)]
pub struct TrainingStepper {
    default_start: Day,
    default_end: Day,
    start: Day,
    end: Day,
    patience: u32,
}

impl TrainingStepper {
    pub const DEFAULT_PATIENCE: u32 = 60;

    pub fn new(default_start: Day, default_end: Day) -> Self {
        Self {
            default_start,
            default_end,
            start: default_start,
            end: default_end,
            patience: Self::DEFAULT_PATIENCE,
        }
    }

    pub fn set_start(&mut self, start: Day) -> &mut Self {
        self.start = start;
        self
    }

    pub fn set_end(&mut self, end: Day) -> &mut Self {
        self.end = end;
        self
    }

    pub fn set_patience(&mut self, patience: u32) -> &mut Self {
        self.patience = patience;
        self
    }

    pub fn submit(&self) -> TrainingConfig {
        let data_range = if self.start == self.default_start && self.end == self.default_end {
            None
        } else {
            Some((self.start, self.end))
        };

        TrainingConfig {
            data_range,
            patience: self.patience,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cryptomate_core::NNAlgorithm;

    fn day(input: &str) -> Day {
        Day::parse(input).expect("test day")
    }

    fn symbol() -> SymbolName {
        SymbolName::parse("BTCUSDT").expect("test symbol")
    }

    #[test]
    fn incomplete_create_stepper_resolves_empty() {
        let mut stepper = CreateModelStepper::new();
        stepper.select_algorithm(BaseAlgorithm::Lstm);
        assert!(stepper.submit(symbol()).is_none());
    }

    #[test]
    fn sequencing_flag_selects_seq_variant() {
        let mut stepper = CreateModelStepper::new();
        stepper
            .select_algorithm(BaseAlgorithm::Jordan)
            .select_window(PredictionWindow::Medium)
            .set_sequencing(true);

        let request = stepper.submit(symbol()).expect("complete stepper");
        assert_eq!(request.algorithm, NNAlgorithm::JordanSeq);
        assert_eq!(request.prediction_window, PredictionWindow::Medium);
    }

    #[test]
    fn default_range_is_omitted_from_training_config() {
        let stepper = TrainingStepper::new(day("2023-01-01"), day("2024-01-01"));
        let config = stepper.submit();
        assert_eq!(config.data_range, None);
        assert_eq!(config.patience, TrainingStepper::DEFAULT_PATIENCE);
    }

    #[test]
    fn narrowed_range_is_included() {
        let mut stepper = TrainingStepper::new(day("2023-01-01"), day("2024-01-01"));
        stepper.set_start(day("2023-06-01")).set_patience(30);

        let config = stepper.submit();
        assert_eq!(
            config.data_range,
            Some((day("2023-06-01"), day("2024-01-01")))
        );
        assert_eq!(config.patience, 30);
    }
}
