use crate::stabilizer::Outcome;
use crate::{Phase, WindowRange};

/// Handle returned by the `on_*` registration methods of [`crate::VirtualWindow`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

pub type UpdateListener<T> = Box<dyn FnMut(&[T])>;
pub type RangeListener = Box<dyn FnMut(WindowRange)>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum RangeEvent {
    Start,
    End,
    Change,
}

/// Per-kind listener lists plus the de-duplication against the last published bounds.
pub(crate) struct Notifier<T> {
    next_id: u64,
    update: Vec<(ListenerId, UpdateListener<T>)>,
    start: Vec<(ListenerId, RangeListener)>,
    end: Vec<(ListenerId, RangeListener)>,
    change: Vec<(ListenerId, RangeListener)>,
}

impl<T> Notifier<T> {
    pub(crate) fn new() -> Self {
        Self {
            next_id: 0,
            update: Vec::new(),
            start: Vec::new(),
            end: Vec::new(),
            change: Vec::new(),
        }
    }

    fn next_id(&mut self) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        id
    }

    pub(crate) fn add_update(&mut self, f: UpdateListener<T>) -> ListenerId {
        let id = self.next_id();
        self.update.push((id, f));
        id
    }

    pub(crate) fn add_range(&mut self, event: RangeEvent, f: RangeListener) -> ListenerId {
        let id = self.next_id();
        self.range_listeners(event).push((id, f));
        id
    }

    fn range_listeners(&mut self, event: RangeEvent) -> &mut Vec<(ListenerId, RangeListener)> {
        match event {
            RangeEvent::Start => &mut self.start,
            RangeEvent::End => &mut self.end,
            RangeEvent::Change => &mut self.change,
        }
    }

    pub(crate) fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.len();
        self.update.retain(|(i, _)| *i != id);
        self.start.retain(|(i, _)| *i != id);
        self.end.retain(|(i, _)| *i != id);
        self.change.retain(|(i, _)| *i != id);
        self.len() != before
    }

    pub(crate) fn clear(&mut self) {
        self.update.clear();
        self.start.clear();
        self.end.clear();
        self.change.clear();
    }

    pub(crate) fn len(&self) -> usize {
        self.update.len() + self.start.len() + self.end.len() + self.change.len()
    }

    fn emit_range(&mut self, event: RangeEvent, range: WindowRange) {
        for (_, f) in self.range_listeners(event).iter_mut() {
            f(range);
        }
    }

    /// Publishes `range` if it differs from `previous` (or when `force` is set).
    ///
    /// Order within one call: `update`, then `start`, then `end`, then `change`. While
    /// stabilizing only `update` is emitted.
    pub(crate) fn publish(
        &mut self,
        items: &[T],
        range: WindowRange,
        previous: &mut Option<WindowRange>,
        phase: Phase,
        force: bool,
    ) -> Outcome {
        if !force && *previous == Some(range) {
            return Outcome::Unchanged;
        }
        let steady = phase == Phase::Steady;
        let prev = *previous;

        let slice = items.get(range.start..range.end).unwrap_or(&[]);
        for (_, f) in self.update.iter_mut() {
            f(slice);
        }
        if steady && prev.map(|p| p.start) != Some(range.start) {
            self.emit_range(RangeEvent::Start, range);
        }
        if steady && prev.map(|p| p.end) != Some(range.end) {
            self.emit_range(RangeEvent::End, range);
        }
        *previous = Some(range);
        if steady {
            self.emit_range(RangeEvent::Change, range);
        }
        vtrace!(
            start = range.start,
            end = range.end,
            steady,
            forced = force,
            "window published"
        );
        Outcome::Published
    }
}
