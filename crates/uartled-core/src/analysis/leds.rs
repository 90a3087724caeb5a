use crate::command::{Led, LedCommand, LedState};
use crate::report::LedSummary;

/// Four-LED model driven by decoded commands only.
#[derive(Debug, Default)]
pub(crate) struct LedBank {
    commands: [u64; 4],
    states: [Option<LedState>; 4],
}

impl LedBank {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn apply(&mut self, command: LedCommand) {
        let index = usize::from(command.led.selector());
        self.commands[index] += 1;
        self.states[index] = Some(command.state);
    }

    pub(crate) fn summaries(&self) -> Vec<LedSummary> {
        Led::ALL
            .iter()
            .map(|&led| {
                let index = usize::from(led.selector());
                LedSummary {
                    led,
                    commands: self.commands[index],
                    state: self.states[index],
                }
            })
            .collect()
    }
}
