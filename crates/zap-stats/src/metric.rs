//! Metric keys.
//!
//! Every statistic the dashboard can show is a [`Metric`]. The set is closed:
//! the topic table in [`crate::topic`] maps broker topics onto these keys and
//! nothing else ever reaches the store.

use std::fmt;

/// Averaging window of a broker load series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LoadWindow {
    /// One minute average.
    OneMinute,
    /// Five minute average.
    FiveMinutes,
    /// Fifteen minute average.
    FifteenMinutes,
}

impl LoadWindow {
    /// All windows in display order.
    pub const ALL: [Self; 3] = [Self::OneMinute, Self::FiveMinutes, Self::FifteenMinutes];

    /// Topic suffix used by the broker (`1min`, `5min`, `15min`).
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::OneMinute => "1min",
            Self::FiveMinutes => "5min",
            Self::FifteenMinutes => "15min",
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::OneMinute => 0,
            Self::FiveMinutes => 1,
            Self::FifteenMinutes => 2,
        }
    }

    fn from_suffix(suffix: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|window| window.suffix() == suffix)
    }
}

/// A three-window load series published under `$SYS/broker/load/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LoadSeries {
    /// Socket connections opened.
    Sockets,
    /// CONNECT packets received.
    Connections,
    /// Messages of any kind received.
    MessagesReceived,
    /// Messages of any kind sent.
    MessagesSent,
    /// Bytes received.
    BytesReceived,
    /// Bytes sent.
    BytesSent,
    /// PUBLISH packets received.
    PublishReceived,
    /// PUBLISH packets sent.
    PublishSent,
    /// PUBLISH packets dropped.
    PublishDropped,
}

impl LoadSeries {
    /// All series in display order.
    pub const ALL: [Self; 9] = [
        Self::Sockets,
        Self::Connections,
        Self::MessagesReceived,
        Self::MessagesSent,
        Self::BytesReceived,
        Self::BytesSent,
        Self::PublishReceived,
        Self::PublishSent,
        Self::PublishDropped,
    ];

    /// Topic path between `$SYS/broker/load/` and the window suffix.
    pub const fn topic_path(self) -> &'static str {
        match self {
            Self::Sockets => "sockets",
            Self::Connections => "connections",
            Self::MessagesReceived => "messages/received",
            Self::MessagesSent => "messages/sent",
            Self::BytesReceived => "bytes/received",
            Self::BytesSent => "bytes/sent",
            Self::PublishReceived => "publish/received",
            Self::PublishSent => "publish/sent",
            Self::PublishDropped => "publish/dropped",
        }
    }

    /// Row label in the Load panel.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Sockets => "Sockets",
            Self::Connections => "Connections",
            Self::MessagesReceived => "Msg Received",
            Self::MessagesSent => "Msg Sent",
            Self::BytesReceived => "Bytes Received",
            Self::BytesSent => "Bytes Sent",
            Self::PublishReceived => "Pub Received",
            Self::PublishSent => "Pub Sent",
            Self::PublishDropped => "Pub Dropped",
        }
    }

    const fn keys(self) -> [&'static str; 3] {
        match self {
            Self::Sockets => ["LoadSockets1min", "LoadSockets5min", "LoadSockets15min"],
            Self::Connections => {
                ["LoadConnections1min", "LoadConnections5min", "LoadConnections15min"]
            },
            Self::MessagesReceived => [
                "LoadMessagesReceived1min",
                "LoadMessagesReceived5min",
                "LoadMessagesReceived15min",
            ],
            Self::MessagesSent => {
                ["LoadMessagesSent1min", "LoadMessagesSent5min", "LoadMessagesSent15min"]
            },
            Self::BytesReceived => {
                ["LoadBytesReceived1min", "LoadBytesReceived5min", "LoadBytesReceived15min"]
            },
            Self::BytesSent => ["LoadBytesSent1min", "LoadBytesSent5min", "LoadBytesSent15min"],
            Self::PublishReceived => [
                "LoadPublishReceived1min",
                "LoadPublishReceived5min",
                "LoadPublishReceived15min",
            ],
            Self::PublishSent => {
                ["LoadPublishSent1min", "LoadPublishSent5min", "LoadPublishSent15min"]
            },
            Self::PublishDropped => {
                ["LoadPublishDropped1min", "LoadPublishDropped5min", "LoadPublishDropped15min"]
            },
        }
    }

    pub(crate) fn from_topic_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|series| series.topic_path() == path)
    }
}

/// One displayable broker statistic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Metric {
    /// Broker version string.
    BrokerVersion,
    /// Broker wall-clock time.
    BrokerTime,
    /// Broker uptime, raw `"<n> seconds"`.
    BrokerUptime,
    /// Active subscriptions.
    SubscriptionsCount,
    /// Total bytes sent since start.
    BytesSent,
    /// Total bytes received since start.
    BytesReceived,
    /// Clients known to the broker.
    ClientsTotal,
    /// Connected clients.
    ClientsConnected,
    /// Persistent clients currently disconnected.
    ClientsDisconnected,
    /// Peak connected clients.
    ClientsMaximum,
    /// Expired persistent clients.
    ClientsExpired,
    /// Current heap usage.
    HeapCurrentSize,
    /// Peak heap usage.
    HeapMaximumSize,
    /// Messages received.
    MessagesReceived,
    /// Messages sent.
    MessagesSent,
    /// Messages in flight.
    MessagesInflight,
    /// Messages held in the store.
    MessagesStored,
    /// PUBLISH messages dropped.
    MessagesPublishDropped,
    /// PUBLISH messages sent.
    MessagesPublishSent,
    /// PUBLISH messages received.
    MessagesPublishReceived,
    /// Retained messages.
    MessagesRetainedCount,
    /// One window of a load series.
    Load(LoadSeries, LoadWindow),
}

impl Metric {
    /// Display key of the metric (`"Broker Version"`, `"LoadSockets1min"`).
    pub const fn key(self) -> &'static str {
        match self {
            Self::BrokerVersion => "Broker Version",
            Self::BrokerTime => "Broker Time",
            Self::BrokerUptime => "Broker Uptime",
            Self::SubscriptionsCount => "Subscriptions Count",
            Self::BytesSent => "Bytes Sent",
            Self::BytesReceived => "Bytes Received",
            Self::ClientsTotal => "Clients Total",
            Self::ClientsConnected => "Clients Connected",
            Self::ClientsDisconnected => "Clients Disconnected",
            Self::ClientsMaximum => "Clients Maximum",
            Self::ClientsExpired => "Clients Expired",
            Self::HeapCurrentSize => "Heap Current Size",
            Self::HeapMaximumSize => "Heap Maximum Size",
            Self::MessagesReceived => "Messages Received",
            Self::MessagesSent => "Messages Sent",
            Self::MessagesInflight => "Messages Inflight",
            Self::MessagesStored => "Messages Stored",
            Self::MessagesPublishDropped => "Messages Publish Dropped",
            Self::MessagesPublishSent => "Messages Publish Sent",
            Self::MessagesPublishReceived => "Messages Publish Received",
            Self::MessagesRetainedCount => "Messages Retained Count",
            Self::Load(series, window) => series.keys()[window.index()],
        }
    }

    /// Every metric, scalars first, then load series window by window.
    pub fn all() -> Vec<Self> {
        let scalars = [
            Self::BrokerVersion,
            Self::BrokerTime,
            Self::BrokerUptime,
            Self::SubscriptionsCount,
            Self::BytesSent,
            Self::BytesReceived,
            Self::ClientsTotal,
            Self::ClientsConnected,
            Self::ClientsDisconnected,
            Self::ClientsMaximum,
            Self::ClientsExpired,
            Self::HeapCurrentSize,
            Self::HeapMaximumSize,
            Self::MessagesReceived,
            Self::MessagesSent,
            Self::MessagesInflight,
            Self::MessagesStored,
            Self::MessagesPublishDropped,
            Self::MessagesPublishSent,
            Self::MessagesPublishReceived,
            Self::MessagesRetainedCount,
        ];
        let loads = LoadSeries::ALL.into_iter().flat_map(|series| {
            LoadWindow::ALL.into_iter().map(move |window| Self::Load(series, window))
        });
        scalars.into_iter().chain(loads).collect()
    }

    pub(crate) fn load(path: &str, suffix: &str) -> Option<Self> {
        let series = LoadSeries::from_topic_path(path)?;
        let window = LoadWindow::from_suffix(suffix)?;
        Some(Self::Load(series, window))
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
