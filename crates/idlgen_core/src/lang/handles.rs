//! Kernel handle subtype vocabulary.
//!
//! Handle-typed members name a subtype in the IDL (`handle<channel>`); backends map each subtype to the
//! runtime's concrete handle wrapper. The Rust runtime exposes these under the `zx` alias.

/// Stable identifier for handle subtypes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(rename_all = "lowercase"))]
pub enum HandleSubtype {
    Handle,
    Process,
    Thread,
    Vmo,
    Channel,
    Event,
    Port,
    Interrupt,
    Log,
    Socket,
    Resource,
    EventPair,
    Job,
    Vmar,
    Fifo,
    Guest,
    Timer,
}

/// Metadata for a handle subtype.
#[derive(Debug, Clone, Copy)]
pub struct HandleInfo {
    pub id: HandleSubtype,
    pub canonical: &'static str,
    pub rust: &'static str,
}

/// Registry of handle subtypes.
pub const HANDLES: &[HandleInfo] = &[
    info(HandleSubtype::Handle, "handle", "Handle"),
    info(HandleSubtype::Process, "process", "Process"),
    info(HandleSubtype::Thread, "thread", "Thread"),
    info(HandleSubtype::Vmo, "vmo", "Vmo"),
    info(HandleSubtype::Channel, "channel", "Channel"),
    info(HandleSubtype::Event, "event", "Event"),
    info(HandleSubtype::Port, "port", "Port"),
    info(HandleSubtype::Interrupt, "interrupt", "Interrupt"),
    info(HandleSubtype::Log, "log", "Log"),
    info(HandleSubtype::Socket, "socket", "Socket"),
    info(HandleSubtype::Resource, "resource", "Resource"),
    info(HandleSubtype::EventPair, "eventpair", "EventPair"),
    info(HandleSubtype::Job, "job", "Job"),
    info(HandleSubtype::Vmar, "vmar", "Vmar"),
    info(HandleSubtype::Fifo, "fifo", "Fifo"),
    info(HandleSubtype::Guest, "guest", "Guest"),
    info(HandleSubtype::Timer, "timer", "Timer"),
];

impl HandleSubtype {
    /// IDL spelling (e.g. `"eventpair"`).
    pub fn as_str(self) -> &'static str {
        info_for(self).canonical
    }

    /// Runtime wrapper type name (e.g. `"EventPair"`).
    pub fn rust_name(self) -> &'static str {
        info_for(self).rust
    }
}

/// Resolve an IDL spelling to a [`HandleSubtype`].
pub fn from_str(name: &str) -> Option<HandleSubtype> {
    HANDLES.iter().find(|h| h.canonical == name).map(|h| h.id)
}

/// Return the registry entry for a handle subtype.
pub fn info_for(id: HandleSubtype) -> &'static HandleInfo {
    HANDLES
        .iter()
        .find(|h| h.id == id)
        .expect("INVARIANT: handle subtype info missing")
}

const fn info(id: HandleSubtype, canonical: &'static str, rust: &'static str) -> HandleInfo {
    HandleInfo { id, canonical, rust }
}
