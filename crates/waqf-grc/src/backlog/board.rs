//! Status-grouped view of a backlog.

use serde::Serialize;
use waqf_core::entities::ImprovementItem;
use waqf_core::enums::ImprovementStatus;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BacklogBoard {
    pub todo: Vec<ImprovementItem>,
    pub doing: Vec<ImprovementItem>,
    pub done: Vec<ImprovementItem>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BacklogCounts {
    pub todo: usize,
    pub doing: usize,
    pub done: usize,
    pub total: usize,
}

impl BacklogBoard {
    /// Group items by status, keeping their relative order.
    #[must_use]
    pub fn from_items(items: impl IntoIterator<Item = ImprovementItem>) -> Self {
        let mut board = Self::default();
        for item in items {
            board.column_mut(item.status).push(item);
        }
        board
    }

    #[must_use]
    pub fn column(&self, status: ImprovementStatus) -> &[ImprovementItem] {
        match status {
            ImprovementStatus::Todo => &self.todo,
            ImprovementStatus::Doing => &self.doing,
            ImprovementStatus::Done => &self.done,
        }
    }

    fn column_mut(&mut self, status: ImprovementStatus) -> &mut Vec<ImprovementItem> {
        match status {
            ImprovementStatus::Todo => &mut self.todo,
            ImprovementStatus::Doing => &mut self.doing,
            ImprovementStatus::Done => &mut self.done,
        }
    }

    /// Take an item out of whichever column holds it.
    pub fn remove(&mut self, id: &str) -> Option<ImprovementItem> {
        ImprovementStatus::ALL.into_iter().find_map(|status| {
            let column = self.column_mut(status);
            let pos = column.iter().position(|item| item.id == id)?;
            Some(column.remove(pos))
        })
    }

    /// Re-file an updated item at the end of its status column.
    pub fn place(&mut self, item: ImprovementItem) {
        self.remove(&item.id);
        self.column_mut(item.status).push(item);
    }

    #[must_use]
    pub fn counts(&self) -> BacklogCounts {
        let (todo, doing, done) = (self.todo.len(), self.doing.len(), self.done.len());
        BacklogCounts {
            todo,
            doing,
            done,
            total: todo + doing + done,
        }
    }

    /// Share of items done; `0.0` on an empty board.
    #[must_use]
    pub fn completion_ratio(&self) -> f64 {
        let counts = self.counts();
        crate::aggregate::mean(to_f64(counts.done), counts.total)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts().total == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = &ImprovementItem> {
        self.todo.iter().chain(&self.doing).chain(&self.done)
    }
}

#[allow(clippy::cast_precision_loss)]
fn to_f64(n: usize) -> f64 {
    n as f64
}
