//! Topic classification.
//!
//! Maps the closed vocabulary of broker `$SYS` topics onto [`Metric`] keys.
//! Matching is exact: there is no wildcard or prefix matching, and a topic
//! outside the table is simply not a statistic this dashboard knows about.

use crate::Metric;

/// Prefix shared by all load series topics.
const LOAD_PREFIX: &str = "$SYS/broker/load/";

/// Exact-match table for non-load topics.
///
/// Several metrics have two spellings because brokers renamed topics across
/// releases; both map to the same key.
pub const SCALAR_TOPICS: &[(&str, Metric)] = &[
    ("$SYS/broker/version", Metric::BrokerVersion),
    ("$SYS/broker/time", Metric::BrokerTime),
    ("$SYS/broker/uptime", Metric::BrokerUptime),
    ("$SYS/broker/subscriptions/count", Metric::SubscriptionsCount),
    ("$SYS/broker/bytes/sent", Metric::BytesSent),
    ("$SYS/broker/bytes/received", Metric::BytesReceived),
    ("$SYS/broker/clients/total", Metric::ClientsTotal),
    ("$SYS/broker/clients/connected", Metric::ClientsConnected),
    ("$SYS/broker/clients/active", Metric::ClientsConnected),
    ("$SYS/broker/clients/disconnected", Metric::ClientsDisconnected),
    ("$SYS/broker/clients/inactive", Metric::ClientsDisconnected),
    ("$SYS/broker/clients/maximum", Metric::ClientsMaximum),
    ("$SYS/broker/clients/expired", Metric::ClientsExpired),
    ("$SYS/broker/heap/current size", Metric::HeapCurrentSize),
    ("$SYS/broker/heap/current", Metric::HeapCurrentSize),
    ("$SYS/broker/heap/maximum size", Metric::HeapMaximumSize),
    ("$SYS/broker/heap/maximum", Metric::HeapMaximumSize),
    ("$SYS/broker/messages/received", Metric::MessagesReceived),
    ("$SYS/broker/messages/sent", Metric::MessagesSent),
    ("$SYS/broker/messages/inflight", Metric::MessagesInflight),
    ("$SYS/broker/messages/stored", Metric::MessagesStored),
    ("$SYS/broker/store/messages/count", Metric::MessagesStored),
    ("$SYS/broker/publish/messages/dropped", Metric::MessagesPublishDropped),
    ("$SYS/broker/messages/publish/sent", Metric::MessagesPublishSent),
    ("$SYS/broker/publish/messages/sent", Metric::MessagesPublishSent),
    ("$SYS/broker/messages/publish/received", Metric::MessagesPublishReceived),
    ("$SYS/broker/publish/messages/received", Metric::MessagesPublishReceived),
    ("$SYS/broker/messages/retained/count", Metric::MessagesRetainedCount),
    ("$SYS/broker/retained messages/count", Metric::MessagesRetainedCount),
];

/// Classify a topic. `None` if the topic is not in the table.
pub fn classify(topic: &str) -> Option<Metric> {
    if let Some(rest) = topic.strip_prefix(LOAD_PREFIX) {
        let (path, suffix) = rest.rsplit_once('/')?;
        return Metric::load(path, suffix);
    }

    SCALAR_TOPICS.iter().find(|(known, _)| *known == topic).map(|(_, metric)| *metric)
}

/// Every topic the classifier accepts, paired with its metric.
pub fn known_topics() -> Vec<(String, Metric)> {
    let scalars = SCALAR_TOPICS.iter().map(|(topic, metric)| ((*topic).to_string(), *metric));
    let loads = Metric::all().into_iter().filter_map(|metric| match metric {
        Metric::Load(series, window) => Some((
            format!("{LOAD_PREFIX}{}/{}", series.topic_path(), window.suffix()),
            metric,
        )),
        _ => None,
    });
    scalars.chain(loads).collect()
}

/// A classified update, ready to merge into the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatUpdate {
    /// Metric being updated.
    pub metric: Metric,
    /// Raw payload, stored verbatim.
    pub value: String,
}

impl StatUpdate {
    /// Classify a `(topic, payload)` pair. `None` for unknown topics.
    pub fn from_message(topic: &str, payload: impl Into<String>) -> Option<Self> {
        classify(topic).map(|metric| Self { metric, value: payload.into() })
    }
}
