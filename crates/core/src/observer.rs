/// Watches a solver's iterations and may steer it.
///
/// A solver hands each iteration's event to `observe`. Returning `None`
/// lets the iteration proceed; returning `Some(action)` asks the solver to
/// apply a solver-specific action such as stopping early.
///
/// Any `FnMut(&E) -> Option<A>` closure is an observer, and `()` is the
/// observer that never acts.
pub trait Observer<E, A> {
    /// Receives one event and returns the requested action, if any.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drive<O: Observer<u32, &'static str>>(mut observer: O, events: &[u32]) -> Vec<&'static str> {
        events.iter().filter_map(|e| observer.observe(e)).collect()
    }

    #[test]
    fn unit_observer_never_acts() {
        assert!(drive((), &[1, 2, 3]).is_empty());
    }

    #[test]
    fn closures_can_track_state() {
        let mut seen = 0;
        let actions = drive(
            |event: &u32| {
                seen += 1;
                (*event > 1).then_some("stop")
            },
            &[1, 2, 3],
        );
        assert_eq!(actions, vec!["stop", "stop"]);
        assert_eq!(seen, 3);
    }
}
