use std::collections::BTreeMap;

use crate::protocols::{DecodeError, FrameProtocol};
use crate::report::RejectionSummary;

const MAX_EXAMPLES: usize = 3;

#[derive(Debug)]
struct RejectionStats {
    message: &'static str,
    count: u64,
    examples: Vec<String>,
}

/// Rejections keyed by protocol then error id, so output order is stable.
#[derive(Debug, Default)]
pub(crate) struct RejectionStore {
    entries: BTreeMap<(FrameProtocol, &'static str), RejectionStats>,
}

impl RejectionStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn add(&mut self, protocol: FrameProtocol, err: &DecodeError, context: String) {
        let stats = self
            .entries
            .entry((protocol, err.id()))
            .or_insert_with(|| RejectionStats {
                message: err.summary(),
                count: 0,
                examples: Vec::new(),
            });
        stats.count += 1;
        if stats.examples.len() < MAX_EXAMPLES {
            stats.examples.push(format!("{context}: {err}"));
        }
    }

    pub(crate) fn total(&self) -> u64 {
        self.entries.values().map(|stats| stats.count).sum()
    }

    pub(crate) fn into_summaries(self) -> Vec<RejectionSummary> {
        self.entries
            .into_iter()
            .map(|((protocol, id), stats)| RejectionSummary {
                protocol,
                id: id.to_string(),
                message: stats.message.to_string(),
                count: stats.count,
                examples: stats.examples,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::RejectionStore;
    use crate::protocols::binary::FrameError;
    use crate::protocols::text::TextError;
    use crate::protocols::{DecodeError, FrameProtocol};

    #[test]
    fn groups_and_caps_examples() {
        let mut store = RejectionStore::new();
        for line in 1..=5 {
            store.add(
                FrameProtocol::Binary,
                &DecodeError::Frame(FrameError::InvalidLed { value: 4 }),
                format!("line {line}"),
            );
        }
        store.add(
            FrameProtocol::Text,
            &DecodeError::Text(TextError::UnknownState),
            "line 6".to_string(),
        );
        assert_eq!(store.total(), 6);

        let summaries = store.into_summaries();
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].protocol, FrameProtocol::Binary);
        assert_eq!(summaries[0].id, "UL-FRAME-LED");
        assert_eq!(summaries[0].count, 5);
        assert_eq!(summaries[0].examples.len(), 3);
        assert_eq!(summaries[0].examples[0], "line 1: invalid LED selector: 4");
        assert_eq!(summaries[1].protocol, FrameProtocol::Text);
    }

    #[test]
    fn sorts_by_protocol_then_id() {
        let mut store = RejectionStore::new();
        store.add(
            FrameProtocol::Binary,
            &DecodeError::Frame(FrameError::InvalidState { value: 2 }),
            "line 1".to_string(),
        );
        store.add(
            FrameProtocol::Binary,
            &DecodeError::Frame(FrameError::InvalidLed { value: 9 }),
            "line 2".to_string(),
        );
        let ids: Vec<_> = store
            .into_summaries()
            .into_iter()
            .map(|summary| summary.id)
            .collect();
        assert_eq!(ids, vec!["UL-FRAME-LED", "UL-FRAME-STATE"]);
    }
}
