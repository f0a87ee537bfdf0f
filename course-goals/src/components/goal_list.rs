//! The goal list component

use sprout_ui::core::{Component, Context, Node};
use sprout_ui::widgets::ListView;

use crate::goal::Goal;

/// Display-only projection of the goal sequence.
///
/// `view` is a pure function: it takes the goals it should show and
/// declares one row per record, keyed by the record's identifier so a
/// consumer can track rows across renders. It holds no state and mutates
/// nothing - adding goals is somebody else's job.
pub struct GoalList;

impl GoalList {
    pub fn view(goals: &[Goal], ctx: &mut Context) -> Node {
        ListView::new(goals.to_vec())
            .key(|goal| goal.id.to_string())
            .builder(|goal, _| Node::list_item(goal.text.clone()))
            .empty_message("No goals yet.")
            .render(ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sprout_ui::core::NodeKind;

    fn goals() -> Vec<Goal> {
        vec![
            Goal::with_id("cg1", "Finish the Course"),
            Goal::with_id("cg2", "Learn all about the Course Main Topic"),
        ]
    }

    #[test]
    fn test_one_row_per_goal_in_order() {
        let mut ctx = Context::new();
        let node = GoalList::view(&goals(), &mut ctx);

        assert_eq!(node.kind, NodeKind::List);
        assert_eq!(node.children.len(), 2);
        assert_eq!(node.children[0].text_content(), Some("Finish the Course"));
        assert_eq!(node.children[0].key.as_deref(), Some("cg1"));
        assert_eq!(node.children[1].key.as_deref(), Some("cg2"));
    }

    #[test]
    fn test_view_is_pure() {
        let mut ctx = Context::new();
        let goals = goals();
        let first = GoalList::view(&goals, &mut ctx);
        let second = GoalList::view(&goals, &mut ctx);
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_sequence_is_fine() {
        let mut ctx = Context::new();
        let node = GoalList::view(&[], &mut ctx);
        assert_eq!(node.kind, NodeKind::Text);
        assert_eq!(node.text_content(), Some("No goals yet."));
    }
}
