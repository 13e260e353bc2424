//! In-memory adjacency view over a flat task list.
//!
//! # Responsibility
//! - Turn one ordered fetch result into an explicit parent/child structure
//!   the UI can walk for indentation rendering.
//!
//! # Invariants
//! - Tasks are stored in a flat arena; children are referenced by index, so
//!   the structure cannot contain pointer cycles.
//! - Sibling lists (roots included) are ordered by `sort_order`, then
//!   `created_at`, then id. The flat fetch groups roots by their own id, so
//!   sibling order must be re-derived here, not inherited.
//! - A task whose `parent_id` does not resolve inside the fetched set is
//!   kept visible as a root instead of being dropped.

use crate::model::task::{Task, TaskId};
use std::collections::HashMap;

/// Arena-indexed task hierarchy built once per fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskTree {
    tasks: Vec<Task>,
    roots: Vec<usize>,
    children: Vec<Vec<usize>>,
}

impl TaskTree {
    /// Builds the adjacency structure from an ordered task list.
    pub fn build(tasks: Vec<Task>) -> Self {
        let mut index_by_id: HashMap<TaskId, usize> = HashMap::with_capacity(tasks.len());
        for (index, task) in tasks.iter().enumerate() {
            index_by_id.insert(task.id, index);
        }

        let mut roots = Vec::new();
        let mut children = vec![Vec::new(); tasks.len()];
        for (index, task) in tasks.iter().enumerate() {
            match task.parent_id.and_then(|parent| index_by_id.get(&parent)) {
                Some(&parent_index) if parent_index != index => {
                    children[parent_index].push(index);
                }
                _ => roots.push(index),
            }
        }

        let sibling_key = |&index: &usize| {
            let task = &tasks[index];
            (task.sort_order, task.created_at, task.id)
        };
        roots.sort_by_key(sibling_key);
        for child_list in &mut children {
            child_list.sort_by_key(sibling_key);
        }

        Self {
            tasks,
            roots,
            children,
        }
    }

    /// Number of tasks in the tree.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns whether the tree holds no tasks.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Task stored at an arena index.
    pub fn task(&self, index: usize) -> &Task {
        &self.tasks[index]
    }

    /// Arena indexes of root-level tasks, in display order.
    pub fn roots(&self) -> &[usize] {
        &self.roots
    }

    /// Arena indexes of one task's children, in display order.
    pub fn children_of(&self, index: usize) -> &[usize] {
        &self.children[index]
    }

    /// Visits every task depth-first with its nesting depth (roots at 0).
    pub fn walk(&self, mut visit: impl FnMut(&Task, usize)) {
        self.walk_indexes(|index, depth| visit(&self.tasks[index], depth));
    }

    /// Flattens the tree into `(task, depth)` rows in display order.
    pub fn rows(&self) -> Vec<(&Task, usize)> {
        let mut rows = Vec::with_capacity(self.tasks.len());
        self.walk_indexes(|index, depth| rows.push((&self.tasks[index], depth)));
        rows
    }

    fn walk_indexes(&self, mut visit: impl FnMut(usize, usize)) {
        let mut stack: Vec<(usize, usize)> = self
            .roots
            .iter()
            .rev()
            .map(|&index| (index, 0))
            .collect();
        while let Some((index, depth)) = stack.pop() {
            visit(index, depth);
            for &child in self.children[index].iter().rev() {
                stack.push((child, depth + 1));
            }
        }
    }
}
