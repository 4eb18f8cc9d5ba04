use tokio::sync::watch;

/// A value cell with change subscribers, backed by a `watch` channel.
///
/// Every piece of mutable view state (theme, active section) lives in one of
/// these, owned by exactly one controller. Readers call [`Observable::get`];
/// the owning controller is the only caller of [`Observable::set`].
/// A subscription is the returned [`watch::Receiver`]; dropping it
/// deregisters it.
pub struct Observable<T> {
    tx: watch::Sender<T>,
}

impl<T> Observable<T>
where
    T: Clone + PartialEq,
{
    pub fn new(value: T) -> Self {
        let (tx, _) = watch::channel(value);
        Self { tx }
    }

    pub fn get(&self) -> T {
        self.tx.borrow().clone()
    }

    /// Stores `value` and notifies subscribers when it differs from the
    /// current one. Returns whether a change happened.
    pub fn set(&self, value: T) -> bool {
        self.tx.send_if_modified(|current| {
            if *current == value {
                return false;
            }
            *current = value;
            true
        })
    }

    /// New subscriber; the current value counts as already seen.
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.tx.subscribe()
    }
}
