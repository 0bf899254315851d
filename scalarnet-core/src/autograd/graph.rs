use crate::ops::traits::Scalar;
use crate::value_data::NodeRef;
use std::collections::HashSet;
use std::rc::Rc;

/// Returns the tracked nodes reachable from `root`, ordered so that every
/// node comes before all of its parents (root first, leaves last).
///
/// The traversal is an iterative post-order depth-first search, visiting
/// parents in the order they were recorded, and the result is that
/// post-order reversed. A node reached along several paths appears once.
/// Untracked nodes (constants and results of constant-only expressions) are
/// not included; since they record no parents, nothing behind them is
/// reached either. An untracked root yields an empty order.
///
/// Iteration rather than recursion keeps long accumulation chains (a loss
/// summed over many examples) from exhausting the call stack.
pub(crate) fn topological_order<T: Scalar>(root: &NodeRef<T>) -> Vec<NodeRef<T>> {
    let mut post_order: Vec<NodeRef<T>> = Vec::new();
    if !root.borrow().track_grad {
        return post_order;
    }

    let mut visited: HashSet<*const ()> = HashSet::new();
    // (node, parents already pushed)
    let mut stack: Vec<(NodeRef<T>, bool)> = vec![(Rc::clone(root), false)];

    while let Some((node, expanded)) = stack.pop() {
        let key = Rc::as_ptr(&node) as *const ();
        if expanded {
            post_order.push(node);
            continue;
        }
        if !visited.insert(key) {
            continue;
        }
        stack.push((Rc::clone(&node), true));
        let guard = node.borrow();
        // Reversed so the first recorded parent is explored first.
        for parent in guard.parents.iter().rev() {
            let parent_key = Rc::as_ptr(parent) as *const ();
            if parent.borrow().track_grad && !visited.contains(&parent_key) {
                stack.push((Rc::clone(parent), false));
            }
        }
    }

    post_order.reverse();
    post_order
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
