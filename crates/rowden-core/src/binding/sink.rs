///
/// Binding observation boundary.
///
/// Tolerant bindings skip unmatched columns and keys by design; the sink
/// lets a caller audit exactly what was skipped without changing the
/// binding's semantics. Injected by the caller, never required.
///

///
/// BindEvent
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum BindEvent {
    /// Cursor column with no matching schema column.
    SkippedColumn {
        table: &'static str,
        column: String,
    },

    /// Parameter key with no matching schema column.
    SkippedParameter {
        table: &'static str,
        key: String,
    },
}

///
/// BindSink
///

pub trait BindSink {
    fn on_event(&mut self, event: BindEvent);
}

/// The no-op sink used by the plain tolerant entry points.
impl BindSink for () {
    fn on_event(&mut self, _event: BindEvent) {}
}

///
/// RecordingSink
///
/// Collects every event, in occurrence order.
///

#[derive(Debug, Default)]
pub struct RecordingSink {
    pub events: Vec<BindEvent>,
}

impl BindSink for RecordingSink {
    fn on_event(&mut self, event: BindEvent) {
        self.events.push(event);
    }
}
