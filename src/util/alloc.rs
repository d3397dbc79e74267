use std::cell::RefCell;
use std::cmp::Ordering;
use std::rc::Rc;

/// A shared record of the order in which [`Tracked`] values were dropped.
#[derive(Debug, Default, Clone)]
pub struct DropLog(pub Rc<RefCell<Vec<i32>>>);

impl DropLog {
    pub fn new() -> DropLog {
        DropLog::default()
    }

    /// Creates a value which appends `id` to this log when dropped.
    pub fn track(&self, id: i32) -> Tracked {
        Tracked {
            id,
            log: self.clone(),
        }
    }

    pub fn take(&self) -> Vec<i32> {
        self.0.take()
    }
}

/// A value ordered by its `id`, which records itself in a [`DropLog`] on drop.
#[derive(Debug)]
pub struct Tracked {
    pub id: i32,
    log: DropLog,
}

impl PartialEq for Tracked {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Tracked {}

impl PartialOrd for Tracked {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Tracked {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.log.0.borrow_mut().push(self.id);
    }
}
