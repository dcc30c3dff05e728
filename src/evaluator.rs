use crate::common::Int;
use crate::config::{RollMap, RollerConfig, RollerOptions, Variables};
use crate::parse;
use crate::resolve;
use crate::roll::{EntropySource, RResult, RollContext, RollResult, Roller};

/// Evaluates notation against a fixed roll map, variable table and options.
///
/// Every call to [`roll`](Self::roll) keeps its own trace, so one evaluator
/// can be shared between threads.
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    config: RollerConfig,
    result: Option<RollResult>,
}

impl Evaluator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: RollerConfig) -> Self {
        Self {
            config,
            result: None,
        }
    }

    /// Creates an evaluator with default settings and immediately rolls
    /// `notation`; the outcome is available through [`result`](Self::result).
    pub fn from_notation(notation: &str) -> RResult<Self> {
        let mut evaluator = Self::new();
        evaluator.result = Some(evaluator.roll(notation)?);
        Ok(evaluator)
    }

    pub fn result(&self) -> Option<&RollResult> {
        self.result.as_ref()
    }

    pub fn options(&self) -> &RollerOptions {
        &self.config.options
    }

    pub fn map(&self) -> &RollMap {
        &self.config.map
    }

    pub fn variables(&self) -> &Variables {
        &self.config.variables
    }

    pub fn set_map(&mut self, map: RollMap) {
        self.config.map = map;
    }

    pub fn set_variables(&mut self, variables: Variables) {
        self.config.variables = variables;
    }

    /// The notation `input` stands for, after roll-map lookup and variable
    /// substitution. Blank input stands for the default roll.
    pub fn resolve(&self, input: &str) -> RResult<String> {
        let input = input.trim();
        let input = if input.is_empty() {
            self.config.options.default_roll.as_str()
        } else {
            input
        };
        resolve::resolve(input, &self.config.map, &self.config.variables)
    }

    /// Rolls `notation` using system entropy.
    pub fn roll(&self, notation: &str) -> RResult<RollResult> {
        self.roll_with(notation, EntropySource::new())
    }

    /// Rolls `notation`, drawing every die from `roller`.
    pub fn roll_with<R: Roller>(&self, notation: &str, roller: R) -> RResult<RollResult> {
        let notation = self.resolve(notation)?;
        let nodes = parse::lex(&notation)?;
        RollContext::new(roller, &self.config.options, &self.config.variables).eval(notation, &nodes)
    }

    pub fn roll_default(&self) -> RResult<RollResult> {
        self.roll(&self.config.options.default_roll)
    }

    /// A single die between the configured minimum and maximum faces.
    pub fn roll_die(&self) -> Int {
        self.roll_die_between(self.config.options.min_roll, self.config.options.max_roll)
    }

    pub fn roll_die_between(&self, min: Int, max: Int) -> Int {
        EntropySource::new().roll_between(min, max)
    }
}
