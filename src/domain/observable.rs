use tokio::sync::watch;

/// A single observable cell.
///
/// Readers take a snapshot with [`Observable::get`] or follow changes through a
/// [`watch::Receiver`]. Writes go through a shared reference, the cell is owned by
/// the view-model object exposing it.
#[derive(Debug)]
pub struct Observable<T> {
    tx: watch::Sender<T>,
}

impl<T: Clone + PartialEq> Observable<T> {
    pub fn new(value: T) -> Self {
        Observable {
            tx: watch::Sender::new(value),
        }
    }

    pub fn get(&self) -> T {
        self.tx.borrow().clone()
    }

    /// Replaces the value. Subscribers are only notified if the value changed.
    pub fn set(&self, value: T) -> bool {
        self.tx.send_if_modified(|current| {
            if *current == value {
                false
            } else {
                *current = value;
                true
            }
        })
    }

    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.tx.subscribe()
    }
}
