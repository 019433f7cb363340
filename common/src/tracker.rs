//! リクエスト世代管理
//!
//! 同じチャネルで新しいリクエストを出したら、それより前のレスポンスは
//! 到着しても捨てる。読み込み表示のため、未完了のエンドポイントも覚えておく。

use crate::endpoint::Endpoint;
use std::collections::HashMap;

/// レスポンスが互いに上書きし合うリクエストの系統
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Image,
    Symptoms,
    /// 緊急連絡先・応急手当ガイド
    Reference,
}

impl Channel {
    /// 読み込み表示で優先する順
    const PRIORITY: [Channel; 3] = [Channel::Image, Channel::Symptoms, Channel::Reference];
}

/// 発行済みリクエストの識別子
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    pub channel: Channel,
    pub generation: u64,
}

#[derive(Debug, Clone, Copy, Default)]
struct ChannelState {
    latest: u64,
    in_flight: Option<Endpoint>,
}

#[derive(Debug, Clone, Default)]
pub struct RequestTracker {
    channels: HashMap<Channel, ChannelState>,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// 新しいリクエストを登録
    pub fn begin(&mut self, channel: Channel, endpoint: Endpoint) -> Ticket {
        let state = self.channels.entry(channel).or_default();
        state.latest += 1;
        state.in_flight = Some(endpoint);
        Ticket {
            channel,
            generation: state.latest,
        }
    }

    /// ticketが最新ならそのチャネルを完了扱いにして`true`
    ///
    /// 古いticketは`false`（レスポンスは捨てる）。チャネルの状態は変えない。
    pub fn finish(&mut self, ticket: Ticket) -> bool {
        match self.channels.get_mut(&ticket.channel) {
            Some(state) if state.latest == ticket.generation => {
                state.in_flight = None;
                true
            }
            _ => false,
        }
    }

    /// 最新リクエストが未完了のチャネルが1つでもあるか
    pub fn is_busy(&self) -> bool {
        self.channels.values().any(|state| state.in_flight.is_some())
    }

    /// 読み込み表示に出すエンドポイント
    ///
    /// 複数のチャネルが未完了なら解析系を優先する。
    pub fn in_flight(&self) -> Option<Endpoint> {
        Channel::PRIORITY
            .iter()
            .find_map(|channel| self.channels.get(channel).and_then(|s| s.in_flight))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_request() {
        let mut tracker = RequestTracker::new();
        assert!(!tracker.is_busy());
        assert_eq!(tracker.in_flight(), None);

        let ticket = tracker.begin(Channel::Image, Endpoint::AnalyzeImage);
        assert!(tracker.is_busy());
        assert_eq!(tracker.in_flight(), Some(Endpoint::AnalyzeImage));
        assert!(tracker.finish(ticket));
        assert!(!tracker.is_busy());
        assert_eq!(tracker.in_flight(), None);
    }

    #[test]
    fn test_stale_response_discarded() {
        let mut tracker = RequestTracker::new();
        let first = tracker.begin(Channel::Symptoms, Endpoint::AnalyzeSymptoms);
        let second = tracker.begin(Channel::Symptoms, Endpoint::AnalyzeSymptoms);

        // 古い方が先に返ってきても捨てられ、loadingは続く
        assert!(!tracker.finish(first));
        assert!(tracker.is_busy());

        assert!(tracker.finish(second));
        assert!(!tracker.is_busy());
    }

    #[test]
    fn test_stale_response_after_latest() {
        let mut tracker = RequestTracker::new();
        let first = tracker.begin(Channel::Image, Endpoint::AnalyzeImage);
        let second = tracker.begin(Channel::Image, Endpoint::AnalyzeImage);
        assert!(tracker.finish(second));
        assert!(!tracker.finish(first));
        assert!(!tracker.is_busy());
    }

    #[test]
    fn test_channels_are_independent() {
        let mut tracker = RequestTracker::new();
        let image = tracker.begin(Channel::Image, Endpoint::AnalyzeImage);
        let symptoms = tracker.begin(Channel::Symptoms, Endpoint::AnalyzeSymptoms);

        assert!(tracker.finish(symptoms));
        assert!(tracker.is_busy());
        assert!(tracker.finish(image));
        assert!(!tracker.is_busy());
    }

    #[test]
    fn test_overlapping_channels_keep_analysis_visible() {
        let mut tracker = RequestTracker::new();
        let image = tracker.begin(Channel::Image, Endpoint::AnalyzeImage);
        let guide = tracker.begin(Channel::Reference, Endpoint::FirstAidGuide);

        // ガイドを後から開いても解析中の表示のまま
        assert_eq!(tracker.in_flight(), Some(Endpoint::AnalyzeImage));

        assert!(tracker.finish(guide));
        assert!(tracker.is_busy());
        assert_eq!(tracker.in_flight(), Some(Endpoint::AnalyzeImage));

        assert!(tracker.finish(image));
        assert_eq!(tracker.in_flight(), None);
    }

    #[test]
    fn test_reference_shown_after_analysis_finishes() {
        let mut tracker = RequestTracker::new();
        let image = tracker.begin(Channel::Image, Endpoint::AnalyzeImage);
        tracker.begin(Channel::Reference, Endpoint::EmergencyContacts);

        assert!(tracker.finish(image));
        assert_eq!(tracker.in_flight(), Some(Endpoint::EmergencyContacts));
    }

    #[test]
    fn test_reference_endpoint_replaced_by_newer_request() {
        let mut tracker = RequestTracker::new();
        let contacts = tracker.begin(Channel::Reference, Endpoint::EmergencyContacts);
        let guide = tracker.begin(Channel::Reference, Endpoint::FirstAidGuide);

        assert_eq!(tracker.in_flight(), Some(Endpoint::FirstAidGuide));
        assert!(!tracker.finish(contacts));
        assert_eq!(tracker.in_flight(), Some(Endpoint::FirstAidGuide));
        assert!(tracker.finish(guide));
        assert!(!tracker.is_busy());
    }

    #[test]
    fn test_unknown_ticket() {
        let mut tracker = RequestTracker::new();
        let foreign = Ticket {
            channel: Channel::Reference,
            generation: 1,
        };
        assert!(!tracker.finish(foreign));
        assert!(!tracker.is_busy());
    }
}
